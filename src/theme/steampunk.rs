//! Victorian brass-and-gears frame with pressure-gauge bars.

use super::segments::{countdown_suffix, framed_row, GitCounts};
use super::Theme;
use crate::bars::{gauge_bar, GaugePaint};
use crate::format::{format_cost_short, format_percent_fixed, format_tokens, shorten_path};
use crate::palette::{model_style, BOLD, RESET};
use crate::snapshot::{RateLimitWindow, Snapshot};

const BRASS: &str = "\x1b[38;2;205;165;85m";
const COPPER: &str = "\x1b[38;2;184;115;51m";
const BRONZE: &str = "\x1b[38;2;150;116;68m";
const GOLD: &str = "\x1b[38;2;255;215;0m";
const RUST: &str = "\x1b[38;2;140;80;60m";
const IVORY: &str = "\x1b[38;2;255;255;240m";
const DARK: &str = "\x1b[38;2;60;50;40m";
const GEAR: &str = "\x1b[38;2;120;100;80m";
const VERDIGRIS: &str = "\x1b[38;2;100;140;100m";
const EMBER: &str = "\x1b[38;2;180;80;60m";
const BG_BRASS: &str = "\x1b[48;2;40;35;25m";

const GAUGE: GaugePaint<'static> = GaugePaint {
    needle: BRASS,
    face: BG_BRASS,
    rim: DARK,
};
const INNER_WIDTH: usize = 83;
const GEAR_WIDTH: usize = 2;
const PATH_MAX_CHARS: usize = 20;
const CONTEXT_BAR_WIDTH: usize = 14;
const WINDOW_BAR_WIDTH: usize = 10;

pub struct SteampunkTheme;

impl SteampunkTheme {
    pub fn new() -> Self {
        Self
    }

    fn plate(left: char, right: char) -> String {
        let run = "═".repeat(INNER_WIDTH - 2 * GEAR_WIDTH);
        format!("{DARK}{left}{BRASS}⚙{DARK}{run}{BRASS}⚙{DARK}{right}{RESET}\n")
    }

    fn divider() -> String {
        let left = INNER_WIDTH * 2 / 5;
        let right = INNER_WIDTH - left - 1;
        format!(
            "{DARK}╠{GEAR}{}{BRASS}◈{GEAR}{}{DARK}╣{RESET}\n",
            "═".repeat(left),
            "═".repeat(right)
        )
    }

    fn row(content: &str) -> String {
        framed_row(&format!("{DARK}║{RESET}"), content, INNER_WIDTH)
    }

    fn pressure_color(percent: i32) -> &'static str {
        if percent >= 80 {
            EMBER
        } else if percent >= 60 {
            GOLD
        } else {
            VERDIGRIS
        }
    }

    fn window(label: &str, window: &RateLimitWindow, color: &str) -> String {
        format!(
            "{GEAR}{label}{RESET}{}{color}{}{RESET}{}",
            gauge_bar(window.percent, WINDOW_BAR_WIDTH, &GAUGE),
            format_percent_fixed(window.percent, 4),
            countdown_suffix(window, GEAR)
        )
    }
}

impl Default for SteampunkTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for SteampunkTheme {
    fn name(&self) -> &'static str {
        "steampunk"
    }

    fn description(&self) -> &'static str {
        "Steampunk: Victorian brass gears with an industrial finish"
    }

    fn render(&self, snapshot: &Snapshot) -> String {
        let (model_color, icon) = model_style(snapshot.model_class);
        let sep = format!("  {DARK}│{RESET}  ");
        let mut out = Self::plate('╔', '╗');

        let mut identity = format!(
            " {BRASS}⚙{RESET} {model_color}{BOLD}{icon}{}{RESET} {GEAR}{}{RESET}",
            snapshot.model_name, snapshot.version
        );
        if snapshot.update_available {
            identity.push_str(&format!(" {GOLD}⚡{RESET}"));
        }
        identity.push_str(&sep);
        identity.push_str(&format!(
            "{COPPER}⚙{RESET} {IVORY}{}{RESET}",
            shorten_path(&snapshot.project_path, PATH_MAX_CHARS)
        ));
        if let Some(branch) = snapshot.branch() {
            let counts = GitCounts {
                staged_color: VERDIGRIS,
                dirty_color: RUST,
                dirty_mark: '~',
            };
            identity.push_str(&format!("  {BRONZE}◈{branch}{RESET}"));
            identity.push_str(&counts.render(snapshot));
        }
        out.push_str(&Self::row(&identity));
        out.push_str(&Self::divider());

        let mut stats = format!(
            " {GEAR}⊚{BRASS}{} tok{RESET}  {GEAR}⊛{COPPER}{} msg{RESET}",
            format_tokens(snapshot.token_count),
            snapshot.message_count
        );
        if !snapshot.session_time.is_empty() {
            stats.push_str(&format!("  {GEAR}⊙{BRONZE}{}{RESET}", snapshot.session_time));
        }
        stats.push_str(&sep);
        stats.push_str(&format!(
            "{VERDIGRIS}{}{RESET}  {GOLD}{}{RESET}  {EMBER}{}/h{RESET}  {VERDIGRIS}{}%hit{RESET}",
            format_cost_short(snapshot.session_cost),
            format_cost_short(snapshot.day_cost),
            format_cost_short(snapshot.burn_rate),
            snapshot.cache_hit_percent
        ));
        out.push_str(&Self::row(&stats));

        let ctx_color = Self::pressure_color(snapshot.context_percent);
        out.push_str(&Self::row(&format!(
            " {GEAR}CTX{RESET}{}{ctx_color}{}{RESET}  {}  {}",
            gauge_bar(snapshot.context_percent, CONTEXT_BAR_WIDTH, &GAUGE),
            format_percent_fixed(snapshot.context_percent, 4),
            Self::window("5HR", &snapshot.five_hour, BRASS),
            Self::window("7DY", &snapshot.seven_day, COPPER)
        )));

        out.push_str(&Self::plate('╚', '╝'));
        out
    }
}
