//! Pipelines.
//!
//! Provides a light [pipeline::Pipeline] trait
//! and the [Reviews] pipeline that converts review dumps.
#[allow(clippy::module_inception)]
pub mod pipeline;
mod reviews;

pub use pipeline::Pipeline;
pub use reviews::{Config, Report, Reviews, StopwordSource};
