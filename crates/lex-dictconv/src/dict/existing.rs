use std::collections::HashSet;
use std::io::BufRead;

use tracing::{debug, debug_span};

use super::{for_each_line, DedupKey, DictError};

/// Set of (reading, left_id, right_id, surface) keys already present in the
/// target dictionary.
///
/// Built once from the Mozc `dictionary*.txt` files before any conversion,
/// read-only afterwards.
#[derive(Debug, Default)]
pub struct ExistingIndex {
    keys: HashSet<DedupKey>,
    rows: u64,
    unindexed: u64,
}

impl ExistingIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index one tab-separated row: `reading\tleft_id\tright_id\tcost\tsurface`.
    ///
    /// The cost column is ignored. Missing reading/surface columns are taken as
    /// empty. A row whose ID columns are not integers can never equal a
    /// converted entry, so it is counted but not stored.
    pub fn insert_line(&mut self, line: &str) {
        self.rows += 1;
        let fields: Vec<&str> = line.split('\t').collect();
        let field = |i: usize| fields.get(i).copied().unwrap_or("");

        let (Ok(left_id), Ok(right_id)) = (field(1).parse::<u16>(), field(2).parse::<u16>())
        else {
            self.unindexed += 1;
            return;
        };

        self.keys.insert(DedupKey {
            reading: field(0).to_string(),
            left_id,
            right_id,
            surface: field(4).to_string(),
        });
    }

    /// Index every row of a dictionary file. Returns the number of rows read.
    pub fn extend_from_reader<R: BufRead>(&mut self, reader: R) -> Result<u64, DictError> {
        let _span = debug_span!("existing_index_extend").entered();
        let before = self.rows;
        for_each_line(reader, |_, line| {
            self.insert_line(line);
            Ok(())
        })?;
        let read = self.rows - before;
        debug!(rows = read, keys = self.keys.len(), "indexed dictionary rows");
        Ok(read)
    }

    pub fn contains(&self, key: &DedupKey) -> bool {
        self.keys.contains(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Total rows seen, including duplicates and unindexed rows.
    pub fn rows(&self) -> u64 {
        self.rows
    }

    /// Rows whose ID columns did not parse.
    pub fn unindexed(&self) -> u64 {
        self.unindexed
    }
}
