use std::fmt;

/// Which side of an entry a connection ID belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

/// Per-record conversion failure. Never aborts a run.
///
/// The `Display` output is the diagnostic line written for reported errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// The Sudachi ID has no entry in the ID map.
    #[error("cannot convert {side}-id:{id} {reading} {surface}")]
    UnmappedConnectionId {
        side: Side,
        id: i32,
        reading: String,
        surface: String,
    },

    /// The Sudachi ID maps to the exclusion sentinel.
    #[error("cannot resolve {side}-id:{id} {reading} {surface}")]
    UnresolvableConnectionId {
        side: Side,
        id: i32,
        reading: String,
        surface: String,
    },

    /// POS classification not covered by the fallback table.
    #[error("cannot classify pos:{pos} {reading} {surface}")]
    UnrecognizedClassification {
        pos: String,
        reading: String,
        surface: String,
    },

    #[error("unknown segmentation type '{value}': {row}")]
    UnknownSegmentationType { value: String, row: String },

    #[error("malformed row ({reason}): {row}")]
    MalformedRow { reason: String, row: String },
}

impl ConvertError {
    /// Whether this error should be written to the diagnostics channel.
    ///
    /// Excluded IDs were classified when the ID map was curated and are
    /// skipped without a report.
    pub fn is_reported(&self) -> bool {
        !matches!(self, Self::UnresolvableConnectionId { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_lines() {
        let err = ConvertError::UnmappedConnectionId {
            side: Side::Left,
            id: 999,
            reading: "トテモ".to_string(),
            surface: "とても".to_string(),
        };
        assert_eq!(err.to_string(), "cannot convert left-id:999 トテモ とても");
        assert!(err.is_reported());

        let err = ConvertError::UnresolvableConnectionId {
            side: Side::Right,
            id: 829,
            reading: "ネ".to_string(),
            surface: "ね".to_string(),
        };
        assert_eq!(err.to_string(), "cannot resolve right-id:829 ネ ね");
        assert!(!err.is_reported());
    }
}
