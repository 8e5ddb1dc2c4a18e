//! Turn an eligible Sudachi row into a Mozc entry.

use super::id_map::{self, MappedId};
use super::{ConvertError, Profile, Side};
use crate::dict::MozcEntry;
use crate::settings::CostSettings;
use crate::source::{Pos, SegmentationType, SourceRecord};
use crate::unicode;

/// Rescale a Sudachi cost into the Mozc range reserved for converted entries.
///
/// With the default settings every result lies in `6000..=7999`, above the
/// bulk of the stock dictionary, and the order among converted entries is
/// preserved.
pub fn rescale_cost(cost: i64, settings: &CostSettings) -> i16 {
    let clamped = cost.clamp(0, settings.max_source_cost.max(0));
    let scaled = settings.base + clamped / settings.divisor.max(1);
    i16::try_from(scaled).unwrap_or(i16::MAX)
}

/// Resolve `(left_id, right_id)` for a row.
///
/// Segmentation `C` rows in the relaxed profile take their IDs from the POS
/// classification; every other row goes through the ID map.
pub fn resolve_ids(
    record: &SourceRecord<'_>,
    segmentation: Option<SegmentationType>,
    surface: &str,
    profile: Profile,
) -> Result<(u16, u16), ConvertError> {
    if profile == Profile::Relaxed && segmentation == Some(SegmentationType::C) {
        let id = classify_pos(&record.pos).ok_or_else(|| {
            ConvertError::UnrecognizedClassification {
                pos: record.pos.to_string(),
                reading: record.reading.to_string(),
                surface: surface.to_string(),
            }
        })?;
        return Ok((id, id));
    }

    let left = id_map::lookup(record.left_id);
    let right = id_map::lookup(record.right_id);
    match (left, right) {
        (Some(MappedId::Mozc(l)), Some(MappedId::Mozc(r))) => Ok((l, r)),
        // An excluded side keeps the row silent even when the other side is unmapped.
        (Some(MappedId::Excluded), _) => Err(id_error(Side::Left, true, record, surface)),
        (_, Some(MappedId::Excluded)) => Err(id_error(Side::Right, true, record, surface)),
        (None, _) => Err(id_error(Side::Left, false, record, surface)),
        (_, None) => Err(id_error(Side::Right, false, record, surface)),
    }
}

fn id_error(
    side: Side,
    excluded: bool,
    record: &SourceRecord<'_>,
    surface: &str,
) -> ConvertError {
    let id = match side {
        Side::Left => record.left_id,
        Side::Right => record.right_id,
    };
    let reading = record.reading.to_string();
    let surface = surface.to_string();
    if excluded {
        ConvertError::UnresolvableConnectionId {
            side,
            id,
            reading,
            surface,
        }
    } else {
        ConvertError::UnmappedConnectionId {
            side,
            id,
            reading,
            surface,
        }
    }
}

/// Mozc ID shared by both sides of a segmentation `C` entry, chosen from its
/// POS classification. `None` for classifications outside the table.
pub fn classify_pos(pos: &Pos<'_>) -> Option<u16> {
    let id = match (pos.pos1, pos.pos2, pos.pos3, pos.pos4) {
        // 名詞,普通名詞 → 名詞,一般 / サ変接続 / 形容動詞語幹
        ("名詞", "普通名詞", "一般", _) => 1847,
        ("名詞", "普通名詞", "サ変可能", _) => 1837,
        ("名詞", "普通名詞", "形状詞可能", _) => 1927,
        // 名詞,固有名詞 → 名詞,固有名詞,一般 / 人名
        ("名詞", "固有名詞", "一般", _) => 1916,
        ("名詞", "固有名詞", "人名", "一般") => 1917,
        ("名詞", "固有名詞", "人名", "名") => 1918,
        ("名詞", "固有名詞", "人名", "姓") => 1919,
        ("副詞", _, _, _) => 12,
        ("感動詞", _, _, _) => 2584,
        // 形状詞 → 名詞,形容動詞語幹
        ("形状詞", _, _, _) => 1927,
        _ => return None,
    };
    Some(id)
}

/// Build the Mozc entry for a row that passed [`super::filter::is_eligible`].
/// `surface` is already unescaped.
pub fn normalize(
    record: &SourceRecord<'_>,
    segmentation: Option<SegmentationType>,
    surface: String,
    cost: &CostSettings,
    profile: Profile,
) -> Result<MozcEntry, ConvertError> {
    let (left_id, right_id) = resolve_ids(record, segmentation, &surface, profile)?;
    let reading = unicode::kata_to_hira(record.reading);
    debug_assert!(unicode::is_hiragana_reading(&reading), "{reading}");
    Ok(MozcEntry {
        reading,
        left_id,
        right_id,
        cost: rescale_cost(record.cost, cost),
        surface,
    })
}
