//! Data model shared by parsers, the cleanup pipeline, and record sinks.
//!
//! Pages and raw tables describe what a document parser hands over; records
//! are the unit of corpus output.

mod page;
mod record;
mod table;

pub use page::Page;
pub use record::{ContentType, Record, RecordHeader};
pub use table::{RawTable, TabularValue};
