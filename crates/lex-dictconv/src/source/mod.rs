//! SudachiDict lexicon rows.
//!
//! File format: 18-column CSV (comma-separated, no quoting; commas inside
//! values are written as `\u002c`).

mod record;

pub use record::{InvalidSegmentationType, Pos, SegmentationType, SourceRecord, MIN_COLUMNS};
