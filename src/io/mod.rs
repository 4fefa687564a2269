/*!
# IO utilities

Loading of gzipped review dumps and saving of the reduced corpus.
!*/
pub mod reader;
pub mod writer;

pub use reader::{load_lines, LineReader};
pub use writer::write_json_gz;
