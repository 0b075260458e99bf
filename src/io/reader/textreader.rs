/*! Line reading facilities

[LineReader] yields the lines of a text stream, one at a time.

Streams can be plain text, gzipped (possibly multi-member, like CommonCrawl files)
or xz-compressed. The kind of stream is detected from its first bytes, not from the file name.

!*/
use std::{
    fs::File,
    io::{BufRead, BufReader, Lines, Read},
    path::{Path, PathBuf},
};

use flate2::read::MultiGzDecoder;
use xz2::read::XzDecoder;

use crate::error::Error;

const GZIP_MAGIC: &[u8] = &[0x1f, 0x8b];
const XZ_MAGIC: &[u8] = &[0xfd, b'7', b'z', b'X', b'Z', 0x00];

/// Compression of a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    Plain,
    Gzip,
    Xz,
}

impl Compression {
    /// Guess compression from the first bytes of a stream.
    pub fn detect(head: &[u8]) -> Self {
        if head.starts_with(GZIP_MAGIC) {
            Compression::Gzip
        } else if head.starts_with(XZ_MAGIC) {
            Compression::Xz
        } else {
            Compression::Plain
        }
    }
}

/// Reader that yields the newline separated lines of a (possibly compressed) stream.
///
/// Trailing `\n` and `\r\n` are removed.
pub struct LineReader<R> {
    path: PathBuf,
    lines: Lines<R>,
}

impl LineReader<Box<dyn BufRead>> {
    /// Open a file, transparently decompressing gzip and xz content.
    pub fn open(src: &Path) -> Result<Self, Error> {
        let file = File::open(src)?;
        Self::from_reader(src, file)
    }

    /// Read from standard input, transparently decompressing gzip and xz content.
    pub fn stdin() -> Result<Self, Error> {
        Self::from_reader(Path::new("-"), std::io::stdin())
    }

    /// Wrap a reader, detecting compression from the first bytes.
    ///
    /// `path` is only kept for logging purposes.
    pub fn from_reader<T>(path: &Path, reader: T) -> Result<Self, Error>
    where
        T: Read + 'static,
    {
        let mut br = BufReader::new(reader);
        let compression = Compression::detect(br.fill_buf()?);
        debug!("opening {:?} ({:?})", path, compression);

        let br: Box<dyn BufRead> = match compression {
            Compression::Plain => Box::new(br),
            Compression::Gzip => Box::new(BufReader::new(MultiGzDecoder::new(br))),
            Compression::Xz => Box::new(BufReader::new(XzDecoder::new_multi_decoder(br))),
        };

        Ok(Self::new(path, br))
    }
}

impl<R: BufRead> LineReader<R> {
    pub fn new(path: &Path, reader: R) -> Self {
        Self {
            path: path.to_path_buf(),
            lines: reader.lines(),
        }
    }
}

impl<R> LineReader<R> {
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next().map(|line| line.map_err(Error::Io))
    }
}
