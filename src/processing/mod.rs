/*! Content processing

Structures and functions that turn raw review lines into reduced records:
splitting into records, field parsing, tokenization and normalization.
!*/
pub mod normalize;
pub mod record;
pub mod split;
pub mod tokenize;

pub use normalize::{Normalizer, TimeZone};
pub use record::{FieldMap, ReducedRecord, Slot};
pub use split::{split_records, RecordSplitter};
