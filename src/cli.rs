//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use revjson::pipeline::{Config, StopwordSource};
use revjson::processing::TimeZone;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "revjson",
    about = "Convert a gzipped review dump into a gzipped JSON array of {year, score, text} records."
)]
/// Conversion parameters.
///
/// ```sh
/// USAGE:
///     revjson [FLAGS] [OPTIONS]
///
/// FLAGS:
///         --strict     abort on the first malformed record
///         --utc        compute years in UTC instead of local time
///
/// OPTIONS:
///         --src <src>                  source review dump [default: data/Watches.txt.gz]
///         --dst <dst>                  destination file [default: data/Watches.json.gz]
///     -l, --lang <lang>                stopword list language (stopwords-iso lists) [default: en]
///     -s, --stopwords <stopwords>      stopword list file (one word per line), overrides --lang
/// ```
pub struct Revjson {
    #[structopt(
        parse(from_os_str),
        long = "src",
        help = "source review dump",
        default_value = "data/Watches.txt.gz"
    )]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "dst",
        help = "destination file",
        default_value = "data/Watches.json.gz"
    )]
    pub dst: PathBuf,
    #[structopt(
        short = "l",
        long = "lang",
        help = "stopword list language",
        long_help = "Language of the built-in stopword list (stopwords-iso lists from the stop-words crate). \
The English list has about 1300 words, much larger than NLTK's 179 (it also drops words like \"hi\" or \"great\"). \
Use --stopwords to supply an exact list instead.",
        default_value = "en"
    )]
    pub lang: String,
    #[structopt(
        parse(from_os_str),
        short = "s",
        long = "stopwords",
        help = "stopword list file (one word per line), overrides --lang"
    )]
    pub stopwords: Option<PathBuf>,
    #[structopt(long = "utc", help = "compute years in UTC instead of local time")]
    pub utc: bool,
    #[structopt(long = "strict", help = "abort on the first malformed record")]
    pub strict: bool,
}

impl From<Revjson> for Config {
    fn from(opt: Revjson) -> Config {
        let stopwords = match opt.stopwords {
            Some(path) => StopwordSource::Path(path),
            None => StopwordSource::Lang(opt.lang),
        };
        let tz = if opt.utc {
            TimeZone::Utc
        } else {
            TimeZone::Local
        };

        Config {
            src: opt.src,
            dst: opt.dst,
            stopwords,
            tz,
            strict: opt.strict,
        }
    }
}
