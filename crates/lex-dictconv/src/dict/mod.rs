mod entry;
mod existing;

pub use entry::{DedupKey, MozcEntry};
pub use existing::ExistingIndex;

use std::io::{self, BufRead};

/// Fatal I/O error while reading dictionary input or writing output.
///
/// Per-record problems are never reported through this type; see
/// [`crate::convert::ConvertError`].
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: invalid UTF-8")]
    InvalidUtf8 { line: u64 },
}

/// Call `f` with every line of `reader` (1-based line number, content without
/// the trailing `\n` / `\r\n`). Empty lines and `#` comments are skipped.
pub(crate) fn for_each_line<R: BufRead>(
    mut reader: R,
    mut f: impl FnMut(u64, &str) -> Result<(), DictError>,
) -> Result<(), DictError> {
    let mut buf = Vec::new();
    let mut line_no = 0u64;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(());
        }
        line_no += 1;
        let text =
            std::str::from_utf8(&buf).map_err(|_| DictError::InvalidUtf8 { line: line_no })?;
        let text = text.trim_end_matches(['\n', '\r']);
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        f(line_no, text)?;
    }
}
