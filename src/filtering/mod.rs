/*! Filtering utilities

Filters operate on tokens and implement [filter::Filter]:
they are loaded once, hold no mutable state and can be shared by reference
for the whole run.
! */
mod filter;
pub mod stopwords;

pub use filter::Filter;
pub use stopwords::Stopwords;
