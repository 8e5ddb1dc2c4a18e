//! Eligibility checks applied to each Sudachi row before normalization.
//!
//! Rejections here are expected and silent; they are not errors.

use super::Profile;
use crate::source::{Pos, SegmentationType, SourceRecord};
use crate::unicode;

/// Top-level POS values the converter has no use for.
const EXCLUDED_POS1: &[&str] = &["空白", "記号", "補助記号"];
/// 名詞,数詞: numbers are produced by the IME's own number rewriter.
const EXCLUDED_POS2: &[&str] = &["数詞"];
/// 名詞,固有名詞,地名: place names are left out.
const EXCLUDED_POS3: &[&str] = &["地名"];

/// Decide whether a row takes part in conversion.
///
/// `surface` is the display headword after escape decoding.
pub fn is_eligible(
    record: &SourceRecord<'_>,
    segmentation: Option<SegmentationType>,
    surface: &str,
    profile: Profile,
) -> bool {
    match segmentation {
        Some(SegmentationType::B) => return false,
        Some(SegmentationType::C) if profile == Profile::Strict => return false,
        _ => {}
    }

    !is_excluded_pos(&record.pos)
        && has_resolvable_ids(record)
        && unicode::is_convertible_katakana_reading(record.reading)
        && !surface.is_ascii()
        && (profile == Profile::Strict || is_word_shaped(surface))
}

pub fn is_excluded_pos(pos: &Pos<'_>) -> bool {
    EXCLUDED_POS1.contains(&pos.pos1)
        || EXCLUDED_POS2.contains(&pos.pos2)
        || EXCLUDED_POS3.contains(&pos.pos3)
}

/// IDs ≤ 0 are placeholders that need estimation and cannot be looked up.
fn has_resolvable_ids(record: &SourceRecord<'_>) -> bool {
    record.left_id > 0 && record.right_id > 0
}

/// Surface made only of word characters: `-`, `_`, `&`, `.`, digits, Latin
/// letters, hiragana, katakana, ー and kanji. The middle dot ・ is rejected.
pub fn is_word_shaped(surface: &str) -> bool {
    surface.chars().all(|c| {
        matches!(c, '-' | '_' | '&' | '.' | unicode::PROLONGED_SOUND_MARK)
            || unicode::is_digit(c)
            || unicode::is_latin(c)
            || unicode::is_hiragana(c)
            || unicode::is_katakana(c)
            || unicode::is_kanji(c)
    })
}
