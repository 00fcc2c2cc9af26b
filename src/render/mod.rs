//! Rendering module: table text rendering and the JSONL record sink.

mod json;
mod markdown;

pub use json::{read_jsonl, save_jsonl, to_jsonl, write_jsonl};
pub use markdown::render_table_markdown;
