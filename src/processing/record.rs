//! Records
//!
//! A raw record is parsed into a [FieldMap], which is then reduced
//! into a [ReducedRecord]. The output document is a sequence of [Slot]s.
use std::collections::HashMap;
use std::ops::Range;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::Error;

pub const TIME_FIELD: &str = "review/time";
pub const SCORE_FIELD: &str = "review/score";
pub const TEXT_FIELD: &str = "review/text";

/// Field name -> raw value mapping of a single record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldMap(HashMap<String, String>);

impl FieldMap {
    /// Parse `key: value` lines.
    ///
    /// Lines are split on their first colon, and the key has to be non-empty.
    /// Values are kept as is (including the leading space).
    /// If a key appears twice, the last value is kept.
    ///
    /// `span` is only used for error reporting.
    pub fn parse(span: Range<usize>, lines: &[String]) -> Result<Self, Error> {
        let mut fields = HashMap::with_capacity(lines.len());
        for line in lines {
            match line.split_once(':') {
                Some((key, value)) if !key.is_empty() => {
                    fields.insert(key.to_string(), value.to_string());
                }
                _ => {
                    return Err(Error::MalformedRecord {
                        lines: span,
                        line: line.clone(),
                    })
                }
            }
        }

        Ok(Self(fields))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The `{year, score, text}` output unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReducedRecord {
    year: i32,
    score: f64,
    text: Vec<String>,
}

impl ReducedRecord {
    pub fn new(year: i32, score: f64, text: Vec<String>) -> Self {
        Self { year, score, text }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn text(&self) -> &[String] {
        &self.text
    }
}

/// An entry of the output document.
///
/// Every slot starts [Slot::Unset] and is only replaced when its record
/// has been successfully reduced. Unset slots serialize as `{}`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Slot {
    #[default]
    Unset,
    Reduced(ReducedRecord),
}

impl Slot {
    pub fn is_unset(&self) -> bool {
        matches!(self, Slot::Unset)
    }

    pub fn reduced(&self) -> Option<&ReducedRecord> {
        match self {
            Slot::Reduced(r) => Some(r),
            Slot::Unset => None,
        }
    }
}

impl Serialize for Slot {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Slot::Reduced(r) => r.serialize(serializer),
            Slot::Unset => serializer.serialize_map(Some(0))?.end(),
        }
    }
}
