//! Cyberpunk layout with offset red/cyan edges and corrupted bars.

use super::segments::{countdown_suffix, GitCounts};
use super::Theme;
use crate::bars::{glitch_bar, GlitchPaint};
use crate::format::{format_cost_short, format_percent_fixed, format_tokens, shorten_path};
use crate::palette::{model_style, BOLD, RESET};
use crate::snapshot::{RateLimitWindow, Snapshot};

const RED: &str = "\x1b[38;2;255;0;60m";
const CYAN: &str = "\x1b[38;2;0;255;240m";
const WHITE: &str = "\x1b[38;2;255;255;255m";
const GRAY: &str = "\x1b[38;2;80;80;80m";
const DIM: &str = "\x1b[38;2;50;50;50m";
const PINK: &str = "\x1b[38;2;255;60;150m";

const BAR_PAINT: GlitchPaint<'static> = GlitchPaint {
    fill: CYAN,
    corrupt: RED,
    dim: DIM,
};
const BORDER_RUN: usize = 30;
const PATH_MAX_CHARS: usize = 22;
const CONTEXT_BAR_WIDTH: usize = 14;
const WINDOW_BAR_WIDTH: usize = 10;

pub struct GlitchTheme;

impl GlitchTheme {
    pub fn new() -> Self {
        Self
    }

    /// Broken border: noise caps around two runs split by a bright block.
    fn border(run: char, cap_mark: &str, center_mark: &str) -> String {
        let cap = format!("{DIM}▓▒░{cap_mark}█{DIM}░▒▓");
        let half = run.to_string().repeat(BORDER_RUN);
        format!("{cap}{GRAY}{half}{center_mark}█{GRAY}{half}{cap}{RESET}\n")
    }

    fn edge() -> String {
        format!(" {RED}▌{RESET}")
    }

    fn split() -> String {
        format!("  {CYAN}▐{RED}▌{RESET}  ")
    }

    fn context_color(percent: i32) -> &'static str {
        if percent >= 80 {
            RED
        } else if percent >= 60 {
            PINK
        } else {
            CYAN
        }
    }

    fn window(label: &str, window: &RateLimitWindow, color: &str) -> String {
        format!(
            "{GRAY}{label}{RESET}{}{color}{}{RESET}{}",
            glitch_bar(window.percent, WINDOW_BAR_WIDTH, &BAR_PAINT),
            format_percent_fixed(window.percent, 4),
            countdown_suffix(window, GRAY)
        )
    }
}

impl Default for GlitchTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for GlitchTheme {
    fn name(&self) -> &'static str {
        "glitch"
    }

    fn description(&self) -> &'static str {
        "Glitch: digital misalignment with a broken cyberpunk look"
    }

    fn render(&self, snapshot: &Snapshot) -> String {
        let (model_color, icon) = model_style(snapshot.model_class);
        let mut out = Self::border('▀', RED, CYAN);

        out.push_str(&format!(
            "{} {model_color}{BOLD}{icon}{}{RESET} {GRAY}{}{RESET}",
            Self::edge(),
            snapshot.model_name,
            snapshot.version
        ));
        if snapshot.update_available {
            out.push_str(&format!(" {RED}[!]{RESET}"));
        }
        out.push_str(&Self::split());
        out.push_str(&format!(
            "{WHITE}{}{RESET}",
            shorten_path(&snapshot.project_path, PATH_MAX_CHARS)
        ));
        if let Some(branch) = snapshot.branch() {
            let counts = GitCounts {
                staged_color: CYAN,
                dirty_color: RED,
                dirty_mark: '~',
            };
            out.push_str(&format!("  {CYAN}◄{branch}{RED}►{RESET}"));
            out.push_str(&counts.render(snapshot));
        }
        out.push('\n');

        out.push_str(&format!(
            "{} {PINK}{}{RESET}  {CYAN}{}{RESET} msg",
            Self::edge(),
            format_tokens(snapshot.token_count),
            snapshot.message_count
        ));
        if !snapshot.session_time.is_empty() {
            out.push_str(&format!("  {GRAY}{}{RESET}", snapshot.session_time));
        }
        out.push_str(&Self::split());
        out.push_str(&format!(
            "{CYAN}{}{RESET}  {WHITE}{}{RESET}  {RED}{}/h{RESET}  {CYAN}{}%hit{RESET}\n",
            format_cost_short(snapshot.session_cost),
            format_cost_short(snapshot.day_cost),
            format_cost_short(snapshot.burn_rate),
            snapshot.cache_hit_percent
        ));

        let ctx_color = Self::context_color(snapshot.context_percent);
        out.push_str(&format!(
            "{} {GRAY}CTX{RESET}{}{ctx_color}{}{RESET}  {}  {}\n",
            Self::edge(),
            glitch_bar(snapshot.context_percent, CONTEXT_BAR_WIDTH, &BAR_PAINT),
            format_percent_fixed(snapshot.context_percent, 4),
            Self::window("5HR", &snapshot.five_hour, CYAN),
            Self::window("7DY", &snapshot.seven_day, PINK)
        ));

        out.push_str(&Self::border('▄', CYAN, RED));
        out
    }
}
