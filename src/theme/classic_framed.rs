//! Reference layout: a rounded frame with one row per concern.

use super::segments::{countdown_suffix, framed_row, GitCounts};
use super::Theme;
use crate::bars::glow_bar;
use crate::format::{format_cost, format_percent_fixed, format_tokens, shorten_path};
use crate::palette::{
    bar_color, context_color, model_style, BG_CYAN_GLOW, BOLD, CYAN, FRAME, GREEN, LABEL,
    LABEL_DIM, MUTED, NEON_ORANGE, ORANGE, PURPLE, RED, RESET, SILVER, YELLOW,
};
use crate::snapshot::{RateLimitWindow, Snapshot};

const INNER_WIDTH: usize = 78;
const PATH_MAX_CHARS: usize = 30;
const CONTEXT_BAR_WIDTH: usize = 20;
const WINDOW_BAR_WIDTH: usize = 10;

/// Rounded-frame layout showing every snapshot field.
pub struct ClassicFramedTheme;

impl ClassicFramedTheme {
    /// Create the classic framed theme.
    pub fn new() -> Self {
        Self
    }

    fn border(left: char, right: char) -> String {
        format!(
            "{FRAME}{left}{}{right}{RESET}\n",
            "─".repeat(INNER_WIDTH)
        )
    }

    fn row(content: &str) -> String {
        framed_row(&format!("{FRAME}│{RESET}"), content, INNER_WIDTH)
    }

    fn header(snapshot: &Snapshot) -> String {
        let (color, icon) = model_style(snapshot.model_class);
        let name = if snapshot.model_name.is_empty() {
            snapshot.model_class.label()
        } else {
            snapshot.model_name.as_str()
        };
        let mut line = format!(" {icon} {color}{BOLD}{name}{RESET}");
        if !snapshot.version.is_empty() {
            line.push_str(&format!("  {MUTED}v{}{RESET}", snapshot.version));
        }
        if snapshot.update_available {
            line.push_str(&format!(" {NEON_ORANGE}⬆{RESET}"));
        }
        line
    }

    fn workspace(snapshot: &Snapshot) -> String {
        let mut line = format!(
            " {LABEL_DIM}dir{RESET} {YELLOW}{}{RESET}",
            shorten_path(&snapshot.project_path, PATH_MAX_CHARS)
        );
        if let Some(branch) = snapshot.branch() {
            let counts = GitCounts {
                staged_color: GREEN,
                dirty_color: ORANGE,
                dirty_mark: '~',
            };
            line.push_str(&format!("  {CYAN}⎇ {branch}{RESET}"));
            line.push_str(&counts.render(snapshot));
        }
        line
    }

    fn session(snapshot: &Snapshot) -> String {
        let mut line = format!(
            " {PURPLE}{}{RESET} {LABEL_DIM}tok{RESET}  {CYAN}{}{RESET} {LABEL_DIM}msg{RESET}",
            format_tokens(snapshot.token_count),
            snapshot.message_count
        );
        if !snapshot.session_time.is_empty() {
            line.push_str(&format!("  {SILVER}{}{RESET}", snapshot.session_time));
        }
        line.push_str(&format!(
            "  {GREEN}{}%{RESET} {LABEL_DIM}hit{RESET}",
            snapshot.cache_hit_percent
        ));
        line
    }

    fn costs(snapshot: &Snapshot) -> String {
        let mut line = format!(
            " {GREEN}{}{RESET} {LABEL_DIM}ses{RESET}  {YELLOW}{}{RESET} {LABEL_DIM}day{RESET}",
            format_cost(snapshot.session_cost),
            format_cost(snapshot.day_cost)
        );
        if snapshot.week_cost > 0.0 {
            line.push_str(&format!(
                "  {CYAN}{}{RESET} {LABEL_DIM}wk{RESET}",
                format_cost(snapshot.week_cost)
            ));
        }
        line.push_str(&format!(
            "  {PURPLE}{}{RESET} {LABEL_DIM}mon{RESET}  {RED}{}/h{RESET}",
            format_cost(snapshot.month_cost),
            format_cost(snapshot.burn_rate)
        ));
        line
    }

    fn context(snapshot: &Snapshot) -> String {
        let percent = snapshot.context_percent;
        let color = context_color(percent);
        let mut line = format!(
            " {LABEL}Ctx{RESET} {} {color}{}{RESET}",
            glow_bar(percent, CONTEXT_BAR_WIDTH, color, BG_CYAN_GLOW),
            format_percent_fixed(percent, 4)
        );
        if snapshot.context_used > 0 {
            line.push_str(&format!(
                "  {LABEL_DIM}{} used{RESET}",
                format_tokens(snapshot.context_used)
            ));
        }
        line
    }

    fn window(label: &str, window: &RateLimitWindow) -> String {
        let (color, glow) = bar_color(window.percent);
        format!(
            "{LABEL}{label}{RESET} {} {color}{}{RESET}{}",
            glow_bar(window.percent, WINDOW_BAR_WIDTH, color, glow),
            format_percent_fixed(window.percent, 4),
            countdown_suffix(window, MUTED)
        )
    }
}

impl Default for ClassicFramedTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for ClassicFramedTheme {
    fn name(&self) -> &'static str {
        "classic_framed"
    }

    fn description(&self) -> &'static str {
        "Classic framed: rounded box with identity, workspace, cost, and usage rows"
    }

    fn render(&self, snapshot: &Snapshot) -> String {
        let limits = format!(
            " {}  {}",
            Self::window("5h", &snapshot.five_hour),
            Self::window("7d", &snapshot.seven_day)
        );
        let mut out = Self::border('╭', '╮');
        for content in [
            Self::header(snapshot),
            Self::workspace(snapshot),
            Self::session(snapshot),
            Self::costs(snapshot),
            Self::context(snapshot),
            limits,
        ] {
            out.push_str(&Self::row(&content));
        }
        out.push_str(&Self::border('╰', '╯'));
        out
    }
}
