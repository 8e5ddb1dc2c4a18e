//! Sudachi → Mozc connection-ID table.
//!
//! Sudachi (UniDic based) uses the same numbering for left and right IDs, so
//! one table serves both sides. Hand-curated per POS; nothing here can be
//! derived from `id.def`, so entries must be edited by hand.
//!
//! A target of [`EXCLUDED`] marks a Sudachi ID whose Mozc counterpart cannot
//! be determined (mostly conjugating verbs and adjectives). Entries using it
//! are skipped silently. IDs missing from the table are reported.

/// Target value for Sudachi IDs that are deliberately not converted.
pub const EXCLUDED: i16 = -2;

/// Result of looking up a Sudachi connection ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappedId {
    Mozc(u16),
    Excluded,
}

impl std::fmt::Display for MappedId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MappedId::Mozc(id) => write!(f, "{id}"),
            MappedId::Excluded => f.write_str("excluded"),
        }
    }
}

/// Sorted by Sudachi ID.
static ID_MAP: &[(u16, i16)] = &[
    // 代名詞 → 名詞,代名詞,一般
    (1, 1895),
    (2, 1895),
    (3, 1895),
    // 副詞 → 副詞,一般
    (4, 12),
    (5, 12),
    (6, 12),
    (7, 12),
    (8, 12),
    // 動詞
    (131, EXCLUDED),
    // 助動詞,助動詞-マス,終止形-一般 → 助動詞,特殊・マス,基本形
    (380, 242),
    // 助詞 (one Sudachi ID per lexeme)
    (665, 284),  // 係助詞 も
    (675, 325),  // 副助詞 か
    (704, 314),  // 副助詞 まで
    (750, 348),  // 接続助詞 て
    (755, 349),  // 接続助詞 で
    (758, 355),  // 接続助詞 ながら
    (760, 361),  // 接続助詞 ば
    (771, 368),  // 格助詞 から
    (772, 369),  // 格助詞 が
    (789, 370),  // 格助詞 で
    (793, 371),  // 格助詞 と
    (796, 372),  // 格助詞 に
    (802, 374),  // 格助詞 の
    (829, EXCLUDED), // 終助詞,*: Mozc has no generic 終助詞 ID
    // 動詞
    (913, EXCLUDED),
    (915, EXCLUDED),
    (917, EXCLUDED),
    (919, EXCLUDED),
    (921, EXCLUDED),
    (923, EXCLUDED),
    (925, EXCLUDED),
    (927, EXCLUDED),
    (929, EXCLUDED),
    (931, EXCLUDED),
    (933, EXCLUDED),
    (1286, EXCLUDED),
    (1288, EXCLUDED),
    (1290, EXCLUDED),
    (1292, EXCLUDED),
    (1294, EXCLUDED),
    (1296, EXCLUDED),
    (1298, EXCLUDED),
    (1300, EXCLUDED),
    (1302, EXCLUDED),
    (1305, EXCLUDED),
    (1317, EXCLUDED),
    (1319, EXCLUDED),
    (1321, EXCLUDED),
    (1323, EXCLUDED),
    (1325, EXCLUDED),
    (1327, EXCLUDED),
    (1329, EXCLUDED),
    (1331, EXCLUDED),
    (1333, EXCLUDED),
    (1396, EXCLUDED),
    (1399, EXCLUDED),
    (1402, EXCLUDED),
    (1405, EXCLUDED),
    (1408, EXCLUDED),
    (1411, EXCLUDED),
    (1414, EXCLUDED),
    (1417, EXCLUDED),
    (1421, EXCLUDED),
    (1424, EXCLUDED),
    (1428, EXCLUDED),
    (1431, EXCLUDED),
    (1434, EXCLUDED),
    (1437, EXCLUDED),
    // 名詞,固有名詞,一般 → 名詞,固有名詞,一般
    (4785, 1916),
    (4786, 1916),
    // 名詞,固有名詞,人名,一般 → 名詞,固有名詞,人名,一般
    (4787, 1917),
    (4788, 1917),
    // 名詞,固有名詞,人名,名 / 姓
    (4789, 1918),
    (4790, 1919),
    // 名詞,固有名詞,地名,一般 / 国 → 名詞,固有名詞,地域,一般
    (4791, 1920),
    (4792, 1920),
    (4793, 1920),
    // 名詞,普通名詞,サ変可能 → 名詞,サ変接続
    (5129, 1837),
    (5131, 1837),
    (5133, 1837),
    // 名詞,普通名詞,サ変形状詞可能 → 名詞,形容動詞語幹
    (5135, 1927),
    // 名詞,普通名詞,一般 → 名詞,一般
    (5139, 1847),
    (5142, 1847),
    (5144, 1847),
    (5145, 1847),
    (5146, 1847),
    (5147, 1847),
    // 名詞,普通名詞,副詞可能 → 名詞,副詞可能
    (5148, 1905),
    (5150, 1905),
    // 名詞,普通名詞,助数詞可能 → 名詞,接尾,助数詞
    (5151, 2004),
    (5152, 2004),
    (5154, 2004),
    // 名詞,普通名詞,形状詞可能 → 名詞,接尾,形容動詞語幹
    (5156, 2021),
    (5159, 2021),
    // 形容詞
    (5160, EXCLUDED),
    (5162, EXCLUDED),
    (5164, EXCLUDED),
    (5166, EXCLUDED),
    (5170, EXCLUDED),
    (5172, EXCLUDED),
    (5174, EXCLUDED),
    (5176, EXCLUDED),
    (5178, EXCLUDED),
    (5198, EXCLUDED),
    (5324, EXCLUDED),
    (5375, EXCLUDED),
    (5415, EXCLUDED),
    // 形状詞,タリ / 一般 → 名詞,形容動詞語幹
    (5668, 1927),
    (5669, 1927),
    // 感動詞,一般 → 感動詞
    (5687, 2584),
    // 接尾辞,名詞的,一般 → 名詞,接尾,一般
    (5771, 1944),
    // 接尾辞,名詞的,一般 (国) → 名詞,固有名詞,地域,国
    (5827, 1924),
    // 接尾辞,名詞的,助数詞 → 名詞,接尾,助数詞
    (5873, 2004),
    // 接続詞 → 接続詞
    // TODO: split into 動詞接続 / 名詞接続 once the Mozc side is decided per lexeme
    (5930, 2586),
    (5931, 2586),
    // 接頭辞 → 接頭詞,名詞接続
    (5932, 2593),
    (5965, 2626), // 非
    // 連体詞 → 連体詞
    (5979, 2649),
    (5980, 2649),
];

/// Look up a Sudachi connection ID. `None` if the ID is not in the table.
pub fn lookup(sudachi_id: i32) -> Option<MappedId> {
    let id = u16::try_from(sudachi_id).ok()?;
    let idx = ID_MAP.binary_search_by_key(&id, |&(k, _)| k).ok()?;
    Some(to_mapped(ID_MAP[idx].1))
}

/// All `(sudachi_id, mapping)` pairs in ascending Sudachi ID order.
pub fn entries() -> impl Iterator<Item = (u16, MappedId)> {
    ID_MAP.iter().map(|&(k, v)| (k, to_mapped(v)))
}

fn to_mapped(target: i16) -> MappedId {
    match u16::try_from(target) {
        Ok(mozc) => MappedId::Mozc(mozc),
        Err(_) => MappedId::Excluded,
    }
}
