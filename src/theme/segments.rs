//! Segment builders shared by several layouts.

use crate::palette::RESET;
use crate::snapshot::{RateLimitWindow, Snapshot};
use crate::text::pad_right;

/// Colors and dirty marker for the git change counters.
pub(super) struct GitCounts<'a> {
    pub staged_color: &'a str,
    pub dirty_color: &'a str,
    pub dirty_mark: char,
}

impl GitCounts<'_> {
    /// ` +staged ~dirty`, each part only when its count is non-zero.
    pub(super) fn render(&self, snapshot: &Snapshot) -> String {
        let mut out = String::new();
        if snapshot.git_staged > 0 {
            out.push_str(&format!(
                " {}+{}{RESET}",
                self.staged_color, snapshot.git_staged
            ));
        }
        if snapshot.git_dirty > 0 {
            out.push_str(&format!(
                " {}{}{}{RESET}",
                self.dirty_color, self.dirty_mark, snapshot.git_dirty
            ));
        }
        out
    }
}

/// ` <time-left>` in `color`, or nothing when the countdown is unknown.
pub(super) fn countdown_suffix(window: &RateLimitWindow, color: &str) -> String {
    window
        .countdown()
        .map(|left| format!(" {color}{left}{RESET}"))
        .unwrap_or_default()
}

/// Close a framed row: `edge` + content padded to `inner` cells + `edge`.
pub(super) fn framed_row(edge: &str, content: &str, inner: usize) -> String {
    format!("{edge}{}{edge}\n", pad_right(content, inner))
}
