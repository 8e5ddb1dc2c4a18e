//! Character-level Unicode classification and string transforms for Japanese text.

/// Prolonged sound mark ー (U+30FC). Shared by hiragana and katakana readings.
pub const PROLONGED_SOUND_MARK: char = 'ー';

pub fn is_hiragana(c: char) -> bool {
    ('\u{3041}'..='\u{309F}').contains(&c)
}

/// Katakana letters, ー and iteration marks. The middle dot ・ is punctuation
/// and not included.
pub fn is_katakana(c: char) -> bool {
    ('\u{30A1}'..='\u{30FA}').contains(&c) || ('\u{30FC}'..='\u{30FF}').contains(&c)
}

pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || ('\u{20000}'..='\u{2A6DF}').contains(&c)
        || ('\u{F900}'..='\u{FAFF}').contains(&c)
        || matches!(c, '々' | '〆' | '〇')
}

pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic() || ('Ａ'..='Ｚ').contains(&c) || ('ａ'..='ｚ').contains(&c)
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit() || ('０'..='９').contains(&c)
}

/// Katakana that has a one-to-one hiragana counterpart at offset -0x60.
///
/// Covers ァ..ヶ (U+30A1..U+30F6) and the iteration marks ヽヾ. ヷ..ヺ have no
/// hiragana counterpart and are excluded.
fn has_hiragana_counterpart(c: char) -> bool {
    ('\u{30A1}'..='\u{30F6}').contains(&c) || ('\u{30FD}'..='\u{30FE}').contains(&c)
}

/// Check if a reading can be transliterated into a pure hiragana reading.
///
/// Accepts non-empty strings made only of convertible katakana and ー.
pub fn is_convertible_katakana_reading(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| has_hiragana_counterpart(c) || c == PROLONGED_SOUND_MARK)
}

/// Check if a string is a valid hiragana reading (hiragana and ー only).
pub fn is_hiragana_reading(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| is_hiragana(c) || c == PROLONGED_SOUND_MARK)
}

/// Convert katakana to hiragana by code-point offset.
///
/// ー and characters without a hiragana counterpart pass through unchanged.
pub fn kata_to_hira(s: &str) -> String {
    s.chars()
        .map(|c| {
            if has_hiragana_counterpart(c) {
                char::from_u32(c as u32 - 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Replace `\uXXXX` and `\u{X..}` escape sequences with the characters they name.
///
/// A high-surrogate escape immediately followed by a low-surrogate escape is
/// combined into one character. Escapes that do not name a valid scalar value
/// are kept verbatim.
pub fn unescape_unicode(s: &str) -> String {
    if !s.contains("\\u") {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(pos) = rest.find("\\u") {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        match parse_escape(tail) {
            Some((code, len)) if (0xD800..=0xDBFF).contains(&code) => {
                let low = parse_escape(&tail[len..])
                    .filter(|(lo, _)| (0xDC00..=0xDFFF).contains(lo));
                match low {
                    Some((lo, lo_len)) => {
                        let combined = 0x10000 + ((code - 0xD800) << 10) + (lo - 0xDC00);
                        match char::from_u32(combined) {
                            Some(c) => out.push(c),
                            None => out.push_str(&tail[..len + lo_len]),
                        }
                        rest = &tail[len + lo_len..];
                    }
                    None => {
                        out.push_str(&tail[..len]);
                        rest = &tail[len..];
                    }
                }
            }
            Some((code, len)) => {
                match char::from_u32(code) {
                    Some(c) => out.push(c),
                    None => out.push_str(&tail[..len]),
                }
                rest = &tail[len..];
            }
            None => {
                out.push_str("\\u");
                rest = &tail[2..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Parse one escape at the start of `s` (which begins with `\u`).
/// Returns the code point and the byte length of the escape.
fn parse_escape(s: &str) -> Option<(u32, usize)> {
    let body = s.strip_prefix("\\u")?;
    if let Some(braced) = body.strip_prefix('{') {
        let end = braced.find('}')?;
        let hex = &braced[..end];
        if hex.is_empty() || hex.len() > 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let code = u32::from_str_radix(hex, 16).ok()?;
        Some((code, 2 + 1 + end + 1))
    } else {
        let hex = body.get(..4)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let code = u32::from_str_radix(hex, 16).ok()?;
        Some((code, 6))
    }
}
