//! Line reader for LS-8 program text.

use crate::error::LoadError;

/// Parse a single line of program text.
///
/// Returns `None` for blank lines and comment-only lines.
/// Comments start with `#` and extend to end of line.
pub(crate) fn parse_line(line: &str, line_num: usize) -> Result<Option<u8>, LoadError> {
    let content = match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    };
    let content = content.trim();
    if content.is_empty() {
        return Ok(None);
    }

    if !content.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(LoadError::InvalidBinary {
            line: line_num,
            token: content.to_string(),
        });
    }

    u8::from_str_radix(content, 2)
        .map(Some)
        .map_err(|_| LoadError::ValueOutOfRange {
            line: line_num,
            token: content.to_string(),
        })
}
