//! Badge layouts: each segment sits in its own `( … )` pill.
//!
//! The one-line and two-line variants share pill construction and differ only
//! in which pills they draw and how wide their mini bars are.

use super::segments::{countdown_suffix, GitCounts};
use super::Theme;
use crate::bars::mini_bar;
use crate::format::{format_cost_short, format_percent, shorten_path};
use crate::palette::{
    bar_color, context_color, model_style, BLUE, BOLD, GREEN, MUTED, ORANGE, RESET, YELLOW,
};
use crate::snapshot::{RateLimitWindow, Snapshot};

const PILL_BORDER: &str = "\x1b[38;2;180;180;180m";
const PILL_DIM: &str = "\x1b[38;2;100;100;100m";
const PATH_MAX_CHARS: usize = 20;

fn pill(content: &str) -> String {
    format!("{PILL_BORDER}({RESET} {content} {PILL_BORDER}){RESET}")
}

/// Model, path, and optional git pills.
fn identity_pills(snapshot: &Snapshot) -> Vec<String> {
    let (model_color, _) = model_style(snapshot.model_class);
    let mut pills = vec![
        pill(&format!(
            "{model_color}{BOLD}{}{RESET}{MUTED} {}{RESET}",
            snapshot.model_name, snapshot.version
        )),
        pill(&format!(
            "{BLUE}{}{RESET}",
            shorten_path(&snapshot.project_path, PATH_MAX_CHARS)
        )),
    ];
    if let Some(branch) = snapshot.branch() {
        let counts = GitCounts {
            staged_color: GREEN,
            dirty_color: ORANGE,
            dirty_mark: '~',
        };
        pills.push(pill(&format!(
            "{GREEN}{branch}{RESET}{}",
            counts.render(snapshot)
        )));
    }
    pills
}

fn window_pill(label: &str, window: &RateLimitWindow, bar_width: usize) -> String {
    let (color, _) = bar_color(window.percent);
    pill(&format!(
        "{MUTED}{label}{RESET} {} {color}{}{RESET}{}",
        mini_bar(window.percent, bar_width, color, PILL_DIM),
        format_percent(window.percent),
        countdown_suffix(window, MUTED)
    ))
}

pub struct OnelinePillsTheme;

impl OnelinePillsTheme {
    const BAR_WIDTH: usize = 6;

    pub fn new() -> Self {
        Self
    }
}

impl Default for OnelinePillsTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for OnelinePillsTheme {
    fn name(&self) -> &'static str {
        "oneline_pills"
    }

    fn description(&self) -> &'static str {
        "Single-line pills: rounded badge segments with mini progress bars"
    }

    fn render(&self, snapshot: &Snapshot) -> String {
        let mut pills = identity_pills(snapshot);
        pills.push(window_pill("5h", &snapshot.five_hour, Self::BAR_WIDTH));
        pills.push(window_pill("7d", &snapshot.seven_day, Self::BAR_WIDTH));
        format!("{}\n", pills.join(" "))
    }
}

pub struct TwolinePillsTheme;

impl TwolinePillsTheme {
    const WINDOW_BAR_WIDTH: usize = 8;
    const CONTEXT_BAR_WIDTH: usize = 6;

    pub fn new() -> Self {
        Self
    }

    fn context_pill(percent: i32) -> String {
        let color = context_color(percent);
        pill(&format!(
            "{MUTED}ctx{RESET} {} {color}{}{RESET}",
            mini_bar(percent, Self::CONTEXT_BAR_WIDTH, color, PILL_DIM),
            format_percent(percent)
        ))
    }

    fn cost_pill(snapshot: &Snapshot) -> String {
        pill(&format!(
            "{GREEN}{}{RESET} {MUTED}ses{RESET} {MUTED}·{RESET} {YELLOW}{}{RESET} {MUTED}day{RESET}",
            format_cost_short(snapshot.session_cost),
            format_cost_short(snapshot.day_cost)
        ))
    }
}

impl Default for TwolinePillsTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for TwolinePillsTheme {
    fn name(&self) -> &'static str {
        "twoline_pills"
    }

    fn description(&self) -> &'static str {
        "Two-line pills: identity and workspace first, then limits and session cost"
    }

    fn render(&self, snapshot: &Snapshot) -> String {
        let usage = [
            window_pill("5h", &snapshot.five_hour, Self::WINDOW_BAR_WIDTH),
            window_pill("7d", &snapshot.seven_day, Self::WINDOW_BAR_WIDTH),
            Self::context_pill(snapshot.context_percent),
            Self::cost_pill(snapshot),
        ];
        format!(
            "{}\n{}\n",
            identity_pills(snapshot).join(" "),
            usage.join(" ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::strip_sgr;

    fn pill_count(rendered: &str) -> usize {
        strip_sgr(rendered).matches('(').count()
    }

    #[test]
    fn oneline_pill_count_tracks_git_presence() {
        let theme = OnelinePillsTheme::new();
        let mut snapshot = Snapshot::default();
        assert_eq!(pill_count(&theme.render(&snapshot)), 4);
        snapshot.git_branch = "main".to_string();
        assert_eq!(pill_count(&theme.render(&snapshot)), 5);
    }

    #[test]
    fn twoline_second_line_carries_context_and_cost() {
        let snapshot = Snapshot {
            context_percent: 50,
            session_cost: 42.7,
            day_cost: 3.25,
            ..Default::default()
        };
        let plain = strip_sgr(&TwolinePillsTheme::new().render(&snapshot)).into_owned();
        let lines: Vec<&str> = plain.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("ctx ▮▮▮▯▯▯ 50%"));
        assert!(lines[1].contains("$43 ses · $3.25 day"));
    }

    #[test]
    fn mini_bars_follow_width_per_variant() {
        let snapshot = Snapshot {
            five_hour: RateLimitWindow {
                percent: 50,
                time_left: String::new(),
            },
            ..Default::default()
        };
        let one = strip_sgr(&OnelinePillsTheme::new().render(&snapshot)).into_owned();
        assert!(one.contains("5h ▮▮▮▯▯▯ 50% )"));
        let two = strip_sgr(&TwolinePillsTheme::new().render(&snapshot)).into_owned();
        assert!(two.contains("5h ▮▮▮▮▯▯▯▯ 50% )"));
    }
}
