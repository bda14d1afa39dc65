//! Escape-aware width measurement so colored segments pad like plain text.

use std::borrow::Cow;

use super::width::char_width;

/// Control-sequence introducer that starts every color instruction we emit.
pub const CSI: &str = "\x1b[";

/// Number of terminal cells `text` occupies once color sequences are removed.
#[must_use]
pub fn visible_width(text: &str) -> usize {
    strip_sgr(text).chars().map(char_width).sum()
}

/// Remove `ESC [ … m` spans, leaving only text that reaches the screen.
///
/// A span runs from the introducer to the next `m`, wherever it is. When no
/// `m` follows an introducer at all, the introducer plus its parameter and
/// intermediate bytes (and a non-`m` final byte, if one is present) are
/// dropped and scanning carries on, so stray control bytes never count as
/// visible cells.
#[must_use]
pub fn strip_sgr(text: &str) -> Cow<'_, str> {
    if !text.contains(CSI) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find(CSI) {
        out.push_str(&rest[..start]);
        let after = &rest[start + CSI.len()..];
        rest = match after.find('m') {
            Some(end) => &after[end + 1..],
            None => skip_unterminated(after),
        };
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Skip the body of a sequence that never reaches an `m` terminator.
fn skip_unterminated(after: &str) -> &str {
    let params = after
        .bytes()
        .take_while(|b| (0x30..=0x3F).contains(b))
        .count();
    let intermediates = after[params..]
        .bytes()
        .take_while(|b| (0x20..=0x2F).contains(b))
        .count();
    let body = params + intermediates;
    match after.as_bytes().get(body) {
        Some(b) if (0x40..=0x7E).contains(b) => &after[body + 1..],
        _ => &after[body..],
    }
}
