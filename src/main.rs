//! # linkalign
//!
//! Document alignment tools for parallel corpus mining.
//!
//! ```sh
//! linkalign 0.1.0
//! document alignment tools.
//!
//! USAGE:
//!     linkalign <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     extract    Extract and split sentences from plain text documents
//!     help       Prints this message or the help of the given subcommand(s)
//!     rescore    Rescore alignment candidates using the link structure of documents
//! ```
//!
//! Logging is configured through `RUST_LOG` (e.g. `RUST_LOG=info`).
use std::io::{BufWriter, Write};

use linkalign::{
    error::Error,
    extract::Extractor,
    filtering::Prune,
    index::{DocId, DocumentIndex},
    io::{LineReader, Parallel, Payload},
    rescore::Rescorer,
    splitter::{Newlines, Process, SentenceSplitter, Tokenizer},
};
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn rescore(opt: cli::Rescore) -> Result<(), Error> {
    let payload = if opt.raw_html {
        Payload::Raw
    } else {
        Payload::Base64
    };

    let mut index = DocumentIndex::new();
    let mut offset: DocId = 1;
    for (html, url) in [(&opt.html1, &opt.url1), (&opt.html2, &opt.url2)] {
        info!("indexing {:?} ({:?})", html, url);
        let htmls = LineReader::open(html)?.map(|line| line.and_then(|l| payload.decode(l)));
        let urls = LineReader::open(url)?;
        offset = index.ingest(Parallel::new(htmls, urls), offset)?;
    }

    let records = match &opt.ridx {
        Some(ridx) => LineReader::open(ridx)?,
        None => LineReader::stdin()?,
    };

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut rescorer = Rescorer::new(records, &index);
    for line in rescorer.by_ref() {
        writeln!(out, "{}", line?)?;
    }
    out.flush()?;

    info!(
        "rescored {} records ({} without candidates)",
        rescorer.rescored(),
        rescorer.skipped()
    );
    Ok(())
}

fn extract(opt: cli::Extract) -> Result<(), Error> {
    let splitter: Box<dyn SentenceSplitter> = match (&opt.splitter, opt.tokenized) {
        (_, true) => Box::new(Newlines::default()),
        (Some(command), false) => Box::new(Tokenizer::new(Process::spawn(command)?)),
        (None, false) => {
            return Err(Error::Custom(
                "a splitter command is needed unless --tokenized is used".to_string(),
            ))
        }
    };
    let prune = Prune::new(opt.prune_threshold, opt.prune_type);
    let mut extractor = Extractor::new(splitter, prune);

    let texts = LineReader::open(&opt.text)?
        .map(|line| line.and_then(|l| Payload::Base64.decode(l)));
    let urls = LineReader::open(&opt.url)?;

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for line in extractor.extract(Parallel::new(texts, urls)) {
        writeln!(out, "{}", line?)?;
    }
    out.flush()?;

    info!(
        "extracted {} sentences from {} documents",
        extractor.sentences(),
        extractor.documents()
    );
    Ok(())
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::LinkAlign::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::LinkAlign::Rescore(r) => rescore(r)?,
        cli::LinkAlign::Extract(e) => extract(e)?,
    };
    Ok(())
}
