//! Sudachi → Mozc entry conversion.
//!
//! Pipeline per row: parse → filter → normalize → dedup → emit. The existing
//! Mozc entries must be indexed before the first row is converted.

mod error;
pub mod filter;
pub mod id_map;
pub mod normalize;
mod profile;


pub use error::{ConvertError, Side};
pub use profile::{Profile, UnknownProfile};

use std::collections::HashSet;
use std::io::{BufRead, Write};

use tracing::{debug, debug_span, info};

use crate::dict::{for_each_line, DedupKey, DictError, ExistingIndex, MozcEntry};
use crate::settings::CostSettings;
use crate::source::SourceRecord;
use crate::unicode;

/// What happened to one source row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Emitted(MozcEntry),
    /// Rejected by an eligibility check.
    Filtered,
    /// Same key already emitted earlier in this run.
    DuplicateInRun,
    /// Same key already present in the Mozc dictionary.
    DuplicateInExisting,
}

/// Counters for one converter run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertStats {
    pub rows: u64,
    pub emitted: u64,
    pub filtered: u64,
    pub duplicate_in_run: u64,
    pub duplicate_in_existing: u64,
    pub malformed: u64,
    pub unknown_segmentation: u64,
    pub unmapped_id: u64,
    pub unresolvable_id: u64,
    pub unrecognized_classification: u64,
}

impl ConvertStats {
    /// Rows skipped because of a [`ConvertError`].
    pub fn errors(&self) -> u64 {
        self.malformed
            + self.unknown_segmentation
            + self.unmapped_id
            + self.unresolvable_id
            + self.unrecognized_classification
    }

    fn since(&self, earlier: &ConvertStats) -> ConvertStats {
        ConvertStats {
            rows: self.rows - earlier.rows,
            emitted: self.emitted - earlier.emitted,
            filtered: self.filtered - earlier.filtered,
            duplicate_in_run: self.duplicate_in_run - earlier.duplicate_in_run,
            duplicate_in_existing: self.duplicate_in_existing - earlier.duplicate_in_existing,
            malformed: self.malformed - earlier.malformed,
            unknown_segmentation: self.unknown_segmentation - earlier.unknown_segmentation,
            unmapped_id: self.unmapped_id - earlier.unmapped_id,
            unresolvable_id: self.unresolvable_id - earlier.unresolvable_id,
            unrecognized_classification: self.unrecognized_classification
                - earlier.unrecognized_classification,
        }
    }

    fn record_error(&mut self, err: &ConvertError) {
        match err {
            ConvertError::MalformedRow { .. } => self.malformed += 1,
            ConvertError::UnknownSegmentationType { .. } => self.unknown_segmentation += 1,
            ConvertError::UnmappedConnectionId { .. } => self.unmapped_id += 1,
            ConvertError::UnresolvableConnectionId { .. } => self.unresolvable_id += 1,
            ConvertError::UnrecognizedClassification { .. } => {
                self.unrecognized_classification += 1
            }
        }
    }

    fn record_outcome(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Emitted(_) => self.emitted += 1,
            Outcome::Filtered => self.filtered += 1,
            Outcome::DuplicateInRun => self.duplicate_in_run += 1,
            Outcome::DuplicateInExisting => self.duplicate_in_existing += 1,
        }
    }
}

/// Converts Sudachi rows against a fixed Mozc index.
///
/// Owns the run-scoped set of emitted keys; the existing index is borrowed
/// and never modified.
pub struct Converter<'a> {
    existing: &'a ExistingIndex,
    emitted: HashSet<DedupKey>,
    profile: Profile,
    cost: CostSettings,
    stats: ConvertStats,
}

impl<'a> Converter<'a> {
    pub fn new(existing: &'a ExistingIndex, profile: Profile, cost: CostSettings) -> Self {
        Self {
            existing,
            emitted: HashSet::new(),
            profile,
            cost,
            stats: ConvertStats::default(),
        }
    }

    pub fn stats(&self) -> &ConvertStats {
        &self.stats
    }

    /// Convert one parsed row. Errors are per-row and leave the converter usable.
    pub fn convert(&mut self, record: &SourceRecord<'_>) -> Result<Outcome, ConvertError> {
        let segmentation = record.segmentation_type()?;
        let surface = unicode::unescape_unicode(record.surface);
        if !filter::is_eligible(record, segmentation, &surface, self.profile) {
            return Ok(Outcome::Filtered);
        }

        let entry = normalize::normalize(record, segmentation, surface, &self.cost, self.profile)?;
        Ok(self.dedup(entry))
    }

    /// Check a candidate against this run's output, then the existing index.
    /// The first occurrence of a key wins regardless of cost.
    pub fn dedup(&mut self, entry: MozcEntry) -> Outcome {
        let key = entry.key();
        if self.emitted.contains(&key) {
            return Outcome::DuplicateInRun;
        }
        if self.existing.contains(&key) {
            return Outcome::DuplicateInExisting;
        }
        self.emitted.insert(key);
        Outcome::Emitted(entry)
    }

    /// Parse and convert one CSV line, updating the counters.
    pub fn convert_line(&mut self, line: &str) -> Result<Outcome, ConvertError> {
        self.stats.rows += 1;
        let result = SourceRecord::parse(line).and_then(|record| self.convert(&record));
        match &result {
            Ok(outcome) => self.stats.record_outcome(outcome),
            Err(err) => self.stats.record_error(err),
        }
        result
    }

    /// Convert every row of one lexicon file.
    ///
    /// Emitted entries go to `out` as TSV lines in input order; reported
    /// errors go to `diagnostics`, one line each.
    pub fn convert_reader<R: BufRead, W: Write, D: Write>(
        &mut self,
        reader: R,
        out: &mut W,
        diagnostics: &mut D,
    ) -> Result<ConvertStats, DictError> {
        let _span = debug_span!("convert_reader", profile = %self.profile).entered();
        let before = self.stats;

        for_each_line(reader, |_, line| {
            match self.convert_line(line) {
                Ok(Outcome::Emitted(entry)) => writeln!(out, "{entry}")?,
                Ok(_) => {}
                Err(err) if err.is_reported() => writeln!(diagnostics, "{err}")?,
                Err(_) => {}
            }
            Ok(())
        })?;

        let delta = self.stats.since(&before);
        debug!(
            rows = delta.rows,
            emitted = delta.emitted,
            filtered = delta.filtered,
            errors = delta.errors(),
            "converted lexicon"
        );
        Ok(delta)
    }

    /// Log the totals for the whole run.
    pub fn log_summary(&self) {
        let s = &self.stats;
        info!(
            rows = s.rows,
            emitted = s.emitted,
            filtered = s.filtered,
            duplicate_in_run = s.duplicate_in_run,
            duplicate_in_existing = s.duplicate_in_existing,
            malformed = s.malformed,
            unknown_segmentation = s.unknown_segmentation,
            unmapped_id = s.unmapped_id,
            unresolvable_id = s.unresolvable_id,
            unrecognized_classification = s.unrecognized_classification,
            "conversion finished"
        );
    }
}
