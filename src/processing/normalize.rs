/*! Record normalization

Turns a raw record into a [ReducedRecord]:

1. lines are parsed into a [FieldMap]
1. `review/time` is read as a unix timestamp and converted into a year
1. `review/score` is read as a float
1. `review/text` is tokenized and stopwords are removed
!*/
use std::ops::Range;

use chrono::{DateTime, Datelike, Local, Utc};
use log::debug;

use super::record::{FieldMap, ReducedRecord, SCORE_FIELD, TEXT_FIELD, TIME_FIELD};
use super::tokenize::tokenize;
use crate::error::Error;
use crate::filtering::Filter;

/// Time zone used to get the year of a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeZone {
    /// Time zone of the machine running the conversion.
    #[default]
    Local,
    Utc,
}

/// Reduces records, using a stopword filter loaded once for the whole run.
#[derive(Debug)]
pub struct Normalizer<'a, F> {
    stopwords: &'a F,
    tz: TimeZone,
}

impl<'a, F> Normalizer<'a, F>
where
    F: for<'b> Filter<&'b str>,
{
    pub fn new(stopwords: &'a F, tz: TimeZone) -> Self {
        Self { stopwords, tz }
    }

    /// Parse and reduce a record.
    ///
    /// Malformed lines and missing fields yield record-level errors
    /// (see [Error::is_record_level]), invalid or non-finite numbers yield fatal ones.
    pub fn normalize(&self, span: Range<usize>, lines: &[String]) -> Result<ReducedRecord, Error> {
        let fields = FieldMap::parse(span.clone(), lines)?;
        let field = |name: &'static str| {
            fields.get(name).ok_or_else(|| Error::MissingField {
                lines: span.clone(),
                field: name,
            })
        };

        let time = field(TIME_FIELD)?;
        let score = field(SCORE_FIELD)?;
        let text = field(TEXT_FIELD)?;

        let year = year(time.trim().parse()?, self.tz)?;
        let score = score.trim().parse::<f64>()?;
        if !score.is_finite() {
            return Err(Error::Score(score));
        }
        let text = tokenize(text, self.stopwords);

        debug!(
            "record {}..{}: year={} score={} tokens={}",
            span.start,
            span.end,
            year,
            score,
            text.len()
        );
        Ok(ReducedRecord::new(year, score, text))
    }
}

/// Year of a (fractional) unix timestamp, in the provided time zone.
pub fn year(timestamp: f64, tz: TimeZone) -> Result<i32, Error> {
    if !timestamp.is_finite() {
        return Err(Error::Timestamp(timestamp));
    }

    let secs = timestamp.floor();
    let nanos = ((timestamp - secs) * 1e9) as u32;
    if secs < i64::MIN as f64 || secs > i64::MAX as f64 {
        return Err(Error::Timestamp(timestamp));
    }

    let utc: DateTime<Utc> = DateTime::from_timestamp(secs as i64, nanos.min(999_999_999))
        .ok_or(Error::Timestamp(timestamp))?;

    Ok(match tz {
        TimeZone::Utc => utc.year(),
        TimeZone::Local => utc.with_timezone(&Local).year(),
    })
}
