//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use linkalign::filtering::PruneType;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "linkalign", about = "document alignment tools.")]
/// Holds every command that is callable by the `linkalign` command.
pub enum LinkAlign {
    #[structopt(about = "Rescore alignment candidates using the link structure of documents")]
    Rescore(Rescore),
    #[structopt(about = "Extract and split sentences from plain text documents")]
    Extract(Extract),
}

#[derive(Debug, StructOpt)]
/// Rescore command and parameters.
///
/// ```sh
/// linkalign-rescore 0.1.0
/// Rescore alignment candidates using the link structure of documents
///
/// USAGE:
///     linkalign rescore [FLAGS] [ridx] --html1 <html1> --html2 <html2> --url1 <url1> --url2 <url2>
///
/// FLAGS:
///     -h, --help        Prints help information
///         --raw-html    HTML files hold raw markup instead of base64
///     -V, --version     Prints version information
///
/// ARGS:
///     <ridx>    reverse index file. Reads from standard input if absent.
/// ```
pub struct Rescore {
    #[structopt(
        parse(from_os_str),
        help = "reverse index file. Reads from standard input if absent."
    )]
    pub ridx: Option<PathBuf>,
    #[structopt(
        parse(from_os_str),
        long = "html1",
        help = "HTML documents of the first collection (one base64 document per line)"
    )]
    pub html1: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "html2",
        help = "HTML documents of the second collection (one base64 document per line)"
    )]
    pub html2: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "url1",
        help = "URLs of the first collection"
    )]
    pub url1: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "url2",
        help = "URLs of the second collection"
    )]
    pub url2: PathBuf,
    #[structopt(long = "raw-html", help = "HTML files hold raw markup instead of base64")]
    pub raw_html: bool,
}

#[derive(Debug, StructOpt)]
/// Extract command and parameters.
///
/// ```sh
/// linkalign-extract 0.1.0
/// Extract and split sentences from plain text documents
///
/// USAGE:
///     linkalign extract [FLAGS] [OPTIONS] --text <text> --url <url>
///
/// FLAGS:
///     -h, --help         Prints help information
///         --tokenized    text is already split (one sentence per line)
///     -V, --version      Prints version information
///
/// OPTIONS:
///         --prune <prune-threshold>    prune sentences longer than n (words/chars) [default: 80]
///         --prune-type <prune-type>    unit of the prune threshold [default: words]  [possible values: words, chars]
///         --splitter <splitter>        sentence splitting command
///         --text <text>                plain text documents (one base64 document per line)
///         --url <url>                  URLs of the documents
/// ```
pub struct Extract {
    #[structopt(
        parse(from_os_str),
        long = "text",
        help = "plain text documents (one base64 document per line)"
    )]
    pub text: PathBuf,
    #[structopt(parse(from_os_str), long = "url", help = "URLs of the documents")]
    pub url: PathBuf,
    #[structopt(
        long = "splitter",
        help = "sentence splitting command",
        required_unless = "tokenized"
    )]
    pub splitter: Option<String>,
    #[structopt(
        long = "tokenized",
        help = "text is already split (one sentence per line)"
    )]
    pub tokenized: bool,
    #[structopt(
        long = "prune",
        help = "prune sentences longer than n (words/chars)",
        default_value = "80"
    )]
    pub prune_threshold: usize,
    #[structopt(
        long = "prune-type",
        help = "unit of the prune threshold",
        default_value = "words",
        possible_values = &["words", "chars"]
    )]
    pub prune_type: PruneType,
}
