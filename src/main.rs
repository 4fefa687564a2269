//! # revjson
//!
//! Converts a gzipped Amazon review dump into a gzipped JSON corpus.
//!
//! ```sh
//! RUST_LOG=info revjson --src data/Watches.txt.gz --dst data/Watches.json.gz
//! ```
//!
//! Each record of the dump is reduced to its year, score and tokenized text
//! (lowercase, alphanumeric, stopwords removed).
use revjson::error::Error;
use revjson::pipeline::{Pipeline, Reviews};
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Revjson::from_args();
    debug!("cli args\n{:#?}", opt);

    let p = Reviews::new(opt.into());
    let report = p.run()?;
    info!("report: {}", serde_json::to_string(&report)?);

    Ok(())
}
