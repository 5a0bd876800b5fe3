//! Input bytes, BOM stripping, and encoding guardrails.

use std::fmt;

/// UTF-8 BOM bytes.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Encoding guardrail failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingIssue {
    /// UTF-16/UTF-32 BOM detected.
    Utf16Or32Bom,
    /// Bytes are not valid UTF-8; carries the offset of the first bad byte.
    InvalidUtf8 { offset: usize },
}

impl fmt::Display for EncodingIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodingIssue::Utf16Or32Bom => f.write_str("UTF-16/UTF-32 input is not supported"),
            EncodingIssue::InvalidUtf8 { offset } => {
                write!(f, "invalid UTF-8 at byte {offset}")
            }
        }
    }
}

/// Strip a UTF-8 BOM if present. Returns the stripped slice and a flag.
#[inline]
pub fn strip_utf8_bom(input: &[u8]) -> (&[u8], bool) {
    if input.starts_with(&UTF8_BOM) {
        (&input[UTF8_BOM.len()..], true)
    } else {
        (input, false)
    }
}

/// Returns true if the input begins with a UTF-16 or UTF-32 BOM.
#[inline]
pub fn has_utf16_or_utf32_bom(input: &[u8]) -> bool {
    matches!(
        input,
        [0x00, 0x00, 0xFE, 0xFF, ..]
            | [0xFF, 0xFE, 0x00, 0x00, ..]
            | [0xFE, 0xFF, ..]
            | [0xFF, 0xFE, ..]
    )
}

/// Apply encoding guardrails and decode as UTF-8.
///
/// Order:
/// 1) UTF-16/UTF-32 BOM ⇒ refuse
/// 2) UTF-8 BOM ⇒ strip and continue
/// 3) invalid UTF-8 ⇒ refuse
pub fn decode_text(input: &[u8]) -> Result<&str, EncodingIssue> {
    if has_utf16_or_utf32_bom(input) {
        return Err(EncodingIssue::Utf16Or32Bom);
    }
    let (stripped, had_bom) = strip_utf8_bom(input);
    std::str::from_utf8(stripped).map_err(|err| EncodingIssue::InvalidUtf8 {
        offset: err.valid_up_to() + if had_bom { UTF8_BOM.len() } else { 0 },
    })
}
