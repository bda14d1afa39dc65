//! Shell-prompt style line of colored segments joined by arrow glyphs.

use super::Theme;
use crate::format::{format_percent, shorten_path};
use crate::palette::{bar_color, model_style, MUTED, RESET};
use crate::snapshot::{RateLimitWindow, Snapshot};

const ARROW: char = '\u{e0b0}';
const PATH_MAX_CHARS: usize = 20;

/// Background and matching arrow foreground for one segment.
struct SegmentColors {
    bg: &'static str,
    fg: &'static str,
    text: &'static str,
}

static MODEL: SegmentColors = SegmentColors {
    bg: "\x1b[48;2;60;50;30m",
    fg: "\x1b[38;2;60;50;30m",
    text: "\x1b[38;2;220;185;100m",
};
static PATH: SegmentColors = SegmentColors {
    bg: "\x1b[48;2;30;40;65m",
    fg: "\x1b[38;2;30;40;65m",
    text: "\x1b[38;2;130;170;230m",
};
static GIT: SegmentColors = SegmentColors {
    bg: "\x1b[48;2;30;55;35m",
    fg: "\x1b[38;2;30;55;35m",
    text: "\x1b[38;2;130;200;140m",
};
static FIVE_HOUR: SegmentColors = SegmentColors {
    bg: "\x1b[48;2;25;50;55m",
    fg: "\x1b[38;2;25;50;55m",
    text: "\x1b[38;2;100;200;210m",
};
static SEVEN_DAY: SegmentColors = SegmentColors {
    bg: "\x1b[48;2;45;30;55m",
    fg: "\x1b[38;2;45;30;55m",
    text: "\x1b[38;2;180;140;210m",
};

struct Segment {
    colors: &'static SegmentColors,
    body: String,
}

pub struct OnelinePowerlineTheme;

impl OnelinePowerlineTheme {
    pub fn new() -> Self {
        Self
    }

    fn model_segment(snapshot: &Snapshot) -> Segment {
        let (model_color, _) = model_style(snapshot.model_class);
        let bg = MODEL.bg;
        Segment {
            colors: &MODEL,
            body: format!(
                " {model_color}{}{RESET}{bg} {MUTED}{}{RESET}{bg} ",
                snapshot.model_name, snapshot.version
            ),
        }
    }

    fn path_segment(snapshot: &Snapshot) -> Segment {
        Segment {
            colors: &PATH,
            body: format!(
                " {}{}{RESET}{} ",
                PATH.text,
                shorten_path(&snapshot.project_path, PATH_MAX_CHARS),
                PATH.bg
            ),
        }
    }

    fn git_segment(snapshot: &Snapshot) -> Option<Segment> {
        let branch = snapshot.branch()?;
        let mut body = format!(" {}{branch}", GIT.text);
        if snapshot.git_staged > 0 {
            body.push_str(&format!(" +{}", snapshot.git_staged));
        }
        if snapshot.git_dirty > 0 {
            body.push_str(&format!(" ~{}", snapshot.git_dirty));
        }
        body.push_str(&format!(" {RESET}{}", GIT.bg));
        Some(Segment { colors: &GIT, body })
    }

    fn window_segment(
        label: &str,
        window: &RateLimitWindow,
        colors: &'static SegmentColors,
    ) -> Segment {
        let bg = colors.bg;
        let (color, _) = bar_color(window.percent);
        let mut body = format!(
            " {MUTED}{label}{RESET}{bg} {color}{}{RESET}{bg}",
            format_percent(window.percent)
        );
        if let Some(left) = window.countdown() {
            body.push_str(&format!(" {MUTED}{left}{RESET}{bg}"));
        }
        body.push(' ');
        Segment { colors, body }
    }
}

impl Default for OnelinePowerlineTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for OnelinePowerlineTheme {
    fn name(&self) -> &'static str {
        "oneline_powerline"
    }

    fn description(&self) -> &'static str {
        "Single-line powerline: colored arrow segments like a shell prompt"
    }

    fn render(&self, snapshot: &Snapshot) -> String {
        let mut segments = vec![Self::model_segment(snapshot), Self::path_segment(snapshot)];
        segments.extend(Self::git_segment(snapshot));
        segments.push(Self::window_segment("5h", &snapshot.five_hour, &FIVE_HOUR));
        segments.push(Self::window_segment("7d", &snapshot.seven_day, &SEVEN_DAY));

        let mut out = String::new();
        for (idx, segment) in segments.iter().enumerate() {
            out.push_str(segment.colors.bg);
            out.push_str(&segment.body);
            // Each arrow is drawn in its segment's color over the next background.
            let next_bg = segments.get(idx + 1).map_or(RESET, |next| next.colors.bg);
            out.push_str(next_bg);
            out.push_str(segment.colors.fg);
            out.push(ARROW);
            out.push_str(RESET);
        }
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::strip_sgr;

    #[test]
    fn arrow_count_matches_segment_count() {
        let theme = OnelinePowerlineTheme::new();
        let mut snapshot = Snapshot::default();
        let arrows = |s: &Snapshot| strip_sgr(&theme.render(s)).matches(ARROW).count();
        assert_eq!(arrows(&snapshot), 4);
        snapshot.git_branch = "main".to_string();
        assert_eq!(arrows(&snapshot), 5);
    }

    #[test]
    fn git_segment_uses_plain_counters() {
        let snapshot = Snapshot {
            git_branch: "main".to_string(),
            git_staged: 1,
            git_dirty: 4,
            ..Default::default()
        };
        let plain = strip_sgr(&OnelinePowerlineTheme::new().render(&snapshot)).into_owned();
        assert!(plain.contains(" main +1 ~4 "));
    }

    #[test]
    fn last_arrow_sits_on_default_background() {
        let out = OnelinePowerlineTheme::new().render(&Snapshot::default());
        let tail = format!("{RESET}{}{ARROW}{RESET}\n", SEVEN_DAY.fg);
        assert!(out.ends_with(&tail));
    }
}
