use std::fmt;

use crate::convert::ConvertError;

// Column layout of a SudachiDict lexicon row.
const COL_HEADWORD: usize = 0;
const COL_LEFT_ID: usize = 1;
const COL_RIGHT_ID: usize = 2;
const COL_COST: usize = 3;
const COL_SURFACE: usize = 4;
const COL_POS1: usize = 5;
const COL_CONJ_TYPE: usize = 9;
const COL_CONJ_FORM: usize = 10;
const COL_READING: usize = 11;
const COL_NORMALIZED: usize = 12;
const COL_DICT_FORM_ID: usize = 13;
const COL_SPLIT_TYPE: usize = 14;
const COL_A_UNIT: usize = 15;
const COL_B_UNIT: usize = 16;

/// Rows shorter than this (through the reading column) are malformed.
pub const MIN_COLUMNS: usize = COL_READING + 1;

/// Four-level part-of-speech classification. `*` means unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pos<'a> {
    pub pos1: &'a str,
    pub pos2: &'a str,
    pub pos3: &'a str,
    pub pos4: &'a str,
}

impl fmt::Display for Pos<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.pos1, self.pos2, self.pos3, self.pos4)
    }
}

/// Split-type column held a value other than `A`, `B`, `C` or absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidSegmentationType;

/// Sudachi split mode of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentationType {
    /// Shortest unit; stands on its own.
    A,
    /// Middle unit; only meaningful combined with others.
    B,
    /// Longest unit (named entities, compounds).
    C,
}

impl SegmentationType {
    /// Parse the split-type column. `Ok(None)` when the column is absent
    /// (missing, empty or `*`).
    pub fn parse(raw: Option<&str>) -> Result<Option<Self>, InvalidSegmentationType> {
        match raw.map(str::trim) {
            None | Some("") | Some("*") => Ok(None),
            Some("A") => Ok(Some(Self::A)),
            Some("B") => Ok(Some(Self::B)),
            Some("C") => Ok(Some(Self::C)),
            Some(_) => Err(InvalidSegmentationType),
        }
    }
}

/// One row of a SudachiDict lexicon, borrowing from the source line.
#[derive(Debug, Clone)]
pub struct SourceRecord<'a> {
    pub line: &'a str,
    pub headword: &'a str,
    pub left_id: i32,
    pub right_id: i32,
    pub cost: i64,
    /// Display headword, still escaped.
    pub surface: &'a str,
    pub pos: Pos<'a>,
    pub conj_type: &'a str,
    pub conj_form: &'a str,
    /// Katakana reading.
    pub reading: &'a str,
    pub normalized: Option<&'a str>,
    pub dict_form_id: Option<&'a str>,
    /// Raw split-type column; see [`SegmentationType::parse`].
    pub split_type: Option<&'a str>,
    pub a_unit: Option<&'a str>,
    pub b_unit: Option<&'a str>,
}

impl<'a> SourceRecord<'a> {
    pub fn parse(line: &'a str) -> Result<Self, ConvertError> {
        let fields: Vec<&'a str> = line.split(',').collect();
        if fields.len() < MIN_COLUMNS {
            return Err(ConvertError::MalformedRow {
                reason: format!("expected at least {MIN_COLUMNS} columns, got {}", fields.len()),
                row: line.to_string(),
            });
        }

        let int_field = |col: usize, name: &str| -> Result<i64, ConvertError> {
            fields[col]
                .trim()
                .parse::<i64>()
                .map_err(|_| ConvertError::MalformedRow {
                    reason: format!("{name} is not an integer: {}", fields[col]),
                    row: line.to_string(),
                })
        };
        let id_field = |col: usize, name: &str| -> Result<i32, ConvertError> {
            let value = int_field(col, name)?;
            i32::try_from(value).map_err(|_| ConvertError::MalformedRow {
                reason: format!("{name} out of range: {value}"),
                row: line.to_string(),
            })
        };

        let left_id = id_field(COL_LEFT_ID, "left-id")?;
        let right_id = id_field(COL_RIGHT_ID, "right-id")?;
        let cost = int_field(COL_COST, "cost")?;
        let optional = |col: usize| fields.get(col).copied();

        Ok(Self {
            line,
            headword: fields[COL_HEADWORD],
            left_id,
            right_id,
            cost,
            surface: fields[COL_SURFACE],
            pos: Pos {
                pos1: fields[COL_POS1],
                pos2: fields[COL_POS1 + 1],
                pos3: fields[COL_POS1 + 2],
                pos4: fields[COL_POS1 + 3],
            },
            conj_type: fields[COL_CONJ_TYPE],
            conj_form: fields[COL_CONJ_FORM],
            reading: fields[COL_READING],
            normalized: optional(COL_NORMALIZED),
            dict_form_id: optional(COL_DICT_FORM_ID),
            split_type: optional(COL_SPLIT_TYPE),
            a_unit: optional(COL_A_UNIT),
            b_unit: optional(COL_B_UNIT),
        })
    }

    pub fn segmentation_type(&self) -> Result<Option<SegmentationType>, ConvertError> {
        SegmentationType::parse(self.split_type).map_err(|InvalidSegmentationType| {
            ConvertError::UnknownSegmentationType {
                value: self.split_type.unwrap_or_default().to_string(),
                row: self.line.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOTEMO: &str = "とても,4,4,100,とても,副詞,*,*,*,*,*,トテモ,とても,*,A,*,*,*";

    #[test]
    fn parse_full_row() {
        let r = SourceRecord::parse(TOTEMO).unwrap();
        assert_eq!(r.headword, "とても");
        assert_eq!(r.left_id, 4);
        assert_eq!(r.right_id, 4);
        assert_eq!(r.cost, 100);
        assert_eq!(r.surface, "とても");
        assert_eq!(r.pos.to_string(), "副詞,*,*,*");
        assert_eq!(r.reading, "トテモ");
        assert_eq!(r.normalized, Some("とても"));
        assert_eq!(r.split_type, Some("A"));
        assert_eq!(r.segmentation_type().unwrap(), Some(SegmentationType::A));
    }

    #[test]
    fn parse_short_row_without_split_type() {
        let r = SourceRecord::parse("漢字,5146,5146,5100,漢字,名詞,普通名詞,一般,*,*,*,カンジ").unwrap();
        assert_eq!(r.split_type, None);
        assert_eq!(r.segmentation_type().unwrap(), None);
    }

    #[test]
    fn parse_large_and_negative_cost() {
        let r = SourceRecord::parse("x,1,1,-32768,x,名詞,*,*,*,*,*,エックス").unwrap();
        assert_eq!(r.cost, -32768);
        let r = SourceRecord::parse("x,1,1,9999999999,x,名詞,*,*,*,*,*,エックス").unwrap();
        assert_eq!(r.cost, 9_999_999_999);
    }

    #[test]
    fn reject_too_few_columns() {
        let err = SourceRecord::parse("漢字,1,1,100,漢字").unwrap_err();
        assert!(matches!(err, ConvertError::MalformedRow { .. }));
    }

    #[test]
    fn reject_non_integer_id() {
        let err = SourceRecord::parse("x,a,1,100,x,名詞,*,*,*,*,*,エックス").unwrap_err();
        assert!(err.to_string().contains("left-id"), "{err}");
    }

    #[test]
    fn segmentation_values() {
        assert_eq!(SegmentationType::parse(Some("B")), Ok(Some(SegmentationType::B)));
        assert_eq!(SegmentationType::parse(Some("C")), Ok(Some(SegmentationType::C)));
        assert_eq!(SegmentationType::parse(Some("*")), Ok(None));
        assert_eq!(SegmentationType::parse(Some("")), Ok(None));
        assert_eq!(
            SegmentationType::parse(Some("D")),
            Err(InvalidSegmentationType)
        );
    }

    #[test]
    fn unknown_segmentation_is_reported_with_row() {
        let line = "x,1,1,100,x,名詞,*,*,*,*,*,エックス,*,*,Z,*,*,*";
        let r = SourceRecord::parse(line).unwrap();
        let err = r.segmentation_type().unwrap_err();
        assert!(matches!(
            err,
            ConvertError::UnknownSegmentationType { ref value, .. } if value == "Z"
        ));
    }
}
