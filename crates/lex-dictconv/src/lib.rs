//! Convert SudachiDict lexicon rows into Mozc system-dictionary entries.
//!
//! The converter fills gaps in the Mozc dictionary from Sudachi: it remaps
//! connection IDs, filters and normalizes each row, and drops rows whose
//! (reading, left_id, right_id, surface) already exists in Mozc or was
//! emitted earlier in the same run.

pub mod convert;
pub mod dict;
pub mod settings;
pub mod source;
pub mod unicode;

pub use convert::{ConvertError, ConvertStats, Converter, Outcome, Profile};
pub use dict::{DedupKey, DictError, ExistingIndex, MozcEntry};
pub use settings::Settings;
