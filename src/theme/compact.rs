//! Three-line layout: identity and workspace, session and cost, usage bars.

use super::segments::{countdown_suffix, GitCounts};
use super::Theme;
use crate::bars::glow_bar;
use crate::format::{format_cost, format_percent_fixed, format_tokens};
use crate::palette::{
    bar_color, model_style, BOLD, CYAN, FRAME, GREEN, LABEL_DIM, MUTED, NEON_GREEN, NEON_ORANGE,
    ORANGE, PURPLE, RED, RESET, SILVER, YELLOW,
};
use crate::snapshot::{RateLimitWindow, Snapshot};
use crate::text::pad_left;

const BAR_WIDTH: usize = 12;

pub struct CompactTheme;

impl CompactTheme {
    pub fn new() -> Self {
        Self
    }

    fn separator() -> String {
        format!("  {FRAME}│{RESET}  ")
    }

    fn usage(label: &str, percent: i32, window: Option<&RateLimitWindow>) -> String {
        let (color, glow) = bar_color(percent);
        let mut out = format!(
            "{LABEL_DIM}{label}{RESET} {} {color}{}{RESET}",
            glow_bar(percent, BAR_WIDTH, color, glow),
            format_percent_fixed(percent, 4)
        );
        if let Some(window) = window {
            out.push_str(&countdown_suffix(window, MUTED));
        }
        out
    }
}

impl Default for CompactTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for CompactTheme {
    fn name(&self) -> &'static str {
        "compact"
    }

    fn description(&self) -> &'static str {
        "Compact three-line: minimum height, complete information"
    }

    fn render(&self, snapshot: &Snapshot) -> String {
        let sep = Self::separator();
        let (model_color, icon) = model_style(snapshot.model_class);

        let mut out = format!(
            " {model_color}{BOLD}{icon}{}{RESET} {NEON_GREEN}{}{RESET}",
            snapshot.model_name, snapshot.version
        );
        if snapshot.update_available {
            out.push_str(&format!(" {NEON_ORANGE}⬆{RESET}"));
        }
        out.push_str(&sep);
        out.push_str(&format!("{YELLOW}📂 {}{RESET}", snapshot.project_path));
        if let Some(branch) = snapshot.branch() {
            let counts = GitCounts {
                staged_color: GREEN,
                dirty_color: ORANGE,
                dirty_mark: '~',
            };
            out.push_str(&format!("  {CYAN}⚡{branch}{RESET}"));
            out.push_str(&counts.render(snapshot));
        }
        out.push('\n');

        out.push_str(&format!(
            " {PURPLE}{}{RESET} tok  {CYAN}{}{RESET} msg  {SILVER}{}{RESET}",
            pad_left(&format_tokens(snapshot.token_count), 5),
            pad_left(&snapshot.message_count.to_string(), 3),
            pad_left(&snapshot.session_time, 6)
        ));
        out.push_str(&sep);
        out.push_str(&format!(
            "{GREEN}{}{RESET} ses  {YELLOW}{}{RESET} day  {PURPLE}{}{RESET} mon  {RED}{}/h{RESET}  {GREEN}{}%hit{RESET}\n",
            format_cost(snapshot.session_cost),
            format_cost(snapshot.day_cost),
            format_cost(snapshot.month_cost),
            format_cost(snapshot.burn_rate),
            snapshot.cache_hit_percent
        ));

        out.push(' ');
        out.push_str(&Self::usage("Ctx", snapshot.context_percent, None));
        out.push_str(&sep);
        out.push_str(&Self::usage(
            "5hr",
            snapshot.five_hour.percent,
            Some(&snapshot.five_hour),
        ));
        out.push_str(&sep);
        out.push_str(&Self::usage(
            "7dy",
            snapshot.seven_day.percent,
            Some(&snapshot.seven_day),
        ));
        out.push('\n');
        out
    }
}
