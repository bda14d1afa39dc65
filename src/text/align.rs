//! Alignment helpers that pad by visible cells and never truncate.

use super::measure::visible_width;

/// Right-align `text` in `target` cells by prepending spaces.
#[must_use]
pub fn pad_left(text: &str, target: usize) -> String {
    let deficit = target.saturating_sub(visible_width(text));
    let mut out = String::with_capacity(text.len() + deficit);
    out.extend(std::iter::repeat_n(' ', deficit));
    out.push_str(text);
    out
}

/// Left-align `text` in `target` cells by appending spaces.
#[must_use]
pub fn pad_right(text: &str, target: usize) -> String {
    let deficit = target.saturating_sub(visible_width(text));
    let mut out = String::with_capacity(text.len() + deficit);
    out.push_str(text);
    out.extend(std::iter::repeat_n(' ', deficit));
    out
}

/// Center `text` in `target` cells; an odd leftover space goes on the right.
#[must_use]
pub fn pad_center(text: &str, target: usize) -> String {
    let deficit = target.saturating_sub(visible_width(text));
    let left = deficit / 2;
    let right = deficit - left;
    let mut out = String::with_capacity(text.len() + deficit);
    out.extend(std::iter::repeat_n(' ', left));
    out.push_str(text);
    out.extend(std::iter::repeat_n(' ', right));
    out
}
