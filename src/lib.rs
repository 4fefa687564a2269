//! # revjson
//!
//! Converts gzipped Amazon-style review dumps
//! (`key: value` records separated by empty lines)
//! into a gzipped JSON array of `{year, score, text}` records,
//! `text` being the tokenized review without stopwords.
pub mod error;
pub mod filtering;
pub mod io;
pub mod pipeline;
pub mod processing;
