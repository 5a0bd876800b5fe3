//! Line-oriented title source.

use std::fs;
use std::path::Path;

use crate::detect::Title;
use crate::input::error::InputError;
use crate::input::guard::decode_text;

/// Read a title list from `path`, one title per line, in file order.
pub fn read_titles(path: &Path) -> Result<Vec<Title>, InputError> {
    tracing::info!("Reading file: {}", path.display());
    let bytes = fs::read(path).map_err(|err| InputError::from_io(path, err))?;
    let text = decode_text(&bytes).map_err(|issue| InputError::Encoding {
        path: path.to_path_buf(),
        issue,
    })?;
    let titles = split_lines(text);
    tracing::debug!(count = titles.len(), "titles read");
    Ok(titles)
}

/// Returns true for every character that ends a line: `\n`, `\r`, vertical
/// tab, form feed, the file/group/record separators, NEL, and the Unicode
/// line and paragraph separators.
#[inline]
pub const fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split text on line breaks (see [`is_line_break`]), dropping them.
/// `\r\n` counts as one break.
///
/// A trailing break does not produce an extra empty title; blank lines
/// inside the text do.
pub fn split_lines(text: &str) -> Vec<Title> {
    let mut titles = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match rest.char_indices().find(|&(_, c)| is_line_break(c)) {
            Some((at, c)) => {
                titles.push(rest[..at].to_string());
                let skip = if rest[at..].starts_with("\r\n") {
                    2
                } else {
                    c.len_utf8()
                };
                rest = &rest[at + skip..];
            }
            None => {
                titles.push(rest.to_string());
                break;
            }
        }
    }
    titles
}
