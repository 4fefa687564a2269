//! Review dump conversion pipeline
//!
//! A review dump is a gzipped text file of records,
//! each record being a group of `key: value` lines ended by an empty line.
//!
//! # Processing
//! 1. The whole file is decompressed and loaded as trimmed lines.
//! 1. Lines are split into records on empty lines. Lines after the last empty line are dropped.
//! 1. Each record is reduced into `{year, score, text}`.
//!    Records that can't be parsed are reported and left as `{}` in the output (unless strict).
//! 1. Reduced records are written as a single gzipped JSON array.
use std::path::PathBuf;

use log::{debug, error, info, warn};
use serde::Serialize;

use crate::error::Error;
use crate::filtering::Stopwords;
use crate::io::{load_lines, write_json_gz};
use crate::pipeline::Pipeline;
use crate::processing::{split_records, Normalizer, Slot, TimeZone};

pub const DEFAULT_SRC: &str = "data/Watches.txt.gz";
pub const DEFAULT_DST: &str = "data/Watches.json.gz";

/// Where stopwords are loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopwordSource {
    /// Built-in list for a language code.
    Lang(String),
    /// Word list file, one word per line.
    Path(PathBuf),
}

impl StopwordSource {
    pub fn load(&self) -> Result<Stopwords, Error> {
        match self {
            StopwordSource::Lang(lang) => Stopwords::from_lang(lang),
            StopwordSource::Path(path) => Stopwords::from_path(path),
        }
    }
}

impl Default for StopwordSource {
    fn default() -> Self {
        StopwordSource::Lang("en".to_string())
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub src: PathBuf,
    pub dst: PathBuf,
    pub stopwords: StopwordSource,
    pub tz: TimeZone,
    /// Abort on the first record that can't be parsed.
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            src: PathBuf::from(DEFAULT_SRC),
            dst: PathBuf::from(DEFAULT_DST),
            stopwords: StopwordSource::default(),
            tz: TimeZone::default(),
            strict: false,
        }
    }
}

/// Summary of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Report {
    /// Number of delimited records (and of output entries).
    pub records: usize,
    pub reduced: usize,
    /// Records left as `{}` because they couldn't be parsed.
    pub unset: usize,
}

pub struct Reviews {
    config: Config,
}

impl Reviews {
    pub fn new(config: Config) -> Self {
        if config.tz == TimeZone::Local {
            debug!("years are computed in local time");
        }
        Self { config }
    }

    /// Reduce every delimited record of `lines`.
    ///
    /// Returns one [Slot] per record, in input order.
    /// Record-level errors leave the slot unset, other errors are propagated.
    pub fn process(
        &self,
        lines: &[String],
        stopwords: &Stopwords,
    ) -> Result<(Vec<Slot>, Report), Error> {
        let spans = split_records(lines);
        info!("{} records", spans.len());

        let normalizer = Normalizer::new(stopwords, self.config.tz);
        let mut slots = vec![Slot::Unset; spans.len()];
        let mut report = Report {
            records: spans.len(),
            ..Default::default()
        };

        for (idx, span) in spans.into_iter().enumerate() {
            match normalizer.normalize(span.clone(), &lines[span]) {
                Ok(reduced) => {
                    slots[idx] = Slot::Reduced(reduced);
                    report.reduced += 1;
                }
                Err(e) if e.is_record_level() && !self.config.strict => {
                    error!("record {}: {}", idx, e);
                    report.unset += 1;
                }
                Err(e) => return Err(e),
            }
        }

        Ok((slots, report))
    }
}

impl Pipeline<Report> for Reviews {
    fn run(&self) -> Result<Report, Error> {
        let stopwords = self.config.stopwords.load()?;
        info!(
            "using {} stopwords from {:?}",
            stopwords.len(),
            self.config.stopwords
        );

        let lines = load_lines(&self.config.src)?;
        let (slots, report) = self.process(&lines, &stopwords)?;
        // lines aren't needed anymore, free them before serializing
        drop(lines);

        write_json_gz(&self.config.dst, &slots)?;

        if report.unset > 0 {
            warn!(
                "{}/{} records could not be parsed and are written as {{}}",
                report.unset, report.records
            );
        }
        info!("done: {:?}", report);
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(s: &str) -> Vec<String> {
        s.split('\n').map(String::from).collect()
    }

    fn pipeline(strict: bool) -> Reviews {
        Reviews::new(Config {
            tz: TimeZone::Utc,
            strict,
            ..Default::default()
        })
    }

    const THREE: &str = "review/time: 0
review/score: 5.0
review/text: The Quick Brown Fox

review/time: 1217203200
oops
review/text: broken

review/time: 1217203200
review/score: 4
review/text: Works fine

";

    #[test]
    fn defaults() {
        let c = Config::default();
        assert_eq!(c.src, PathBuf::from("data/Watches.txt.gz"));
        assert_eq!(c.dst, PathBuf::from("data/Watches.json.gz"));
        assert_eq!(c.stopwords, StopwordSource::Lang("en".to_string()));
        assert_eq!(c.tz, TimeZone::Local);
        assert!(!c.strict);
    }

    #[test]
    fn malformed_left_unset() {
        let sw = Stopwords::from_list(&["the"]);
        let (slots, report) = pipeline(false).process(&lines(THREE), &sw).unwrap();

        // THREE ends with "\n\n", so there's an extra empty record
        assert_eq!(slots.len(), 4);
        assert_eq!(
            report,
            Report {
                records: 4,
                reduced: 2,
                unset: 2
            }
        );
        assert_eq!(slots[0].reduced().unwrap().text(), ["quick", "brown", "fox"]);
        assert!(slots[1].is_unset());
        assert_eq!(slots[2].reduced().unwrap().year(), 2008);
        assert!(slots[3].is_unset());
    }

    #[test]
    fn strict_aborts() {
        let sw = Stopwords::from_list(&["the"]);
        let res = pipeline(true).process(&lines(THREE), &sw);
        assert!(matches!(res, Err(Error::MalformedRecord { .. })));
    }

    #[test]
    fn bad_score_aborts() {
        let sw = Stopwords::default();
        let l = lines("review/time: 0\nreview/score: n/a\nreview/text: hi\n");
        let res = pipeline(false).process(&l, &sw);
        assert!(matches!(res, Err(Error::ParseFloat(_))));
    }

    #[test]
    fn report_json() {
        let report = Report {
            records: 4,
            reduced: 3,
            unset: 1,
        };
        assert_eq!(
            serde_json::to_string(&report).unwrap(),
            r#"{"records":4,"reduced":3,"unset":1}"#
        );
    }

    #[test]
    fn stopword_source() {
        assert!(StopwordSource::Lang("xx".to_string()).load().is_err());
        assert!(StopwordSource::Path(PathBuf::from("sdlkfjsldkfj.txt"))
            .load()
            .is_err());
        assert!(StopwordSource::default().load().unwrap().contains("the"));
    }
}
