//! Single line joined by dim dots.

use super::segments::{countdown_suffix, GitCounts};
use super::Theme;
use crate::format::{format_percent, shorten_path};
use crate::palette::{bar_color, model_style, BLUE, BOLD, GREEN, MUTED, ORANGE, RESET};
use crate::snapshot::{RateLimitWindow, Snapshot};

const PATH_MAX_CHARS: usize = 20;

pub struct OnelineCleanTheme;

impl OnelineCleanTheme {
    pub fn new() -> Self {
        Self
    }

    fn window(label: &str, window: &RateLimitWindow) -> String {
        let (color, _) = bar_color(window.percent);
        format!(
            "{MUTED}{label}{RESET} {color}{}{RESET}{}",
            format_percent(window.percent),
            countdown_suffix(window, MUTED)
        )
    }
}

impl Default for OnelineCleanTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for OnelineCleanTheme {
    fn name(&self) -> &'static str {
        "oneline_clean"
    }

    fn description(&self) -> &'static str {
        "Single-line clean: dot separators, colored text on dark background"
    }

    fn render(&self, snapshot: &Snapshot) -> String {
        let (model_color, _) = model_style(snapshot.model_class);
        let mut parts = vec![
            format!(
                "{model_color}{BOLD}{}{RESET} {MUTED}{}{RESET}",
                snapshot.model_name, snapshot.version
            ),
            format!(
                "{BLUE}{}{RESET}",
                shorten_path(&snapshot.project_path, PATH_MAX_CHARS)
            ),
        ];
        if let Some(branch) = snapshot.branch() {
            let counts = GitCounts {
                staged_color: GREEN,
                dirty_color: ORANGE,
                dirty_mark: '~',
            };
            parts.push(format!("{GREEN}{branch}{RESET}{}", counts.render(snapshot)));
        }
        parts.push(Self::window("5h", &snapshot.five_hour));
        parts.push(Self::window("7d", &snapshot.seven_day));

        let sep = format!(" {MUTED}·{RESET} ");
        format!(" {}\n", parts.join(sep.as_str()))
    }
}
