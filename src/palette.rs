//! Shared truecolor palette so themes reference named colors, not raw escapes.
//!
//! Every constant is a complete SGR sequence. Themes that need colors of their
//! own keep them next to their renderer; this module holds the ones reused
//! across layouts plus the severity and model lookups.

use crate::snapshot::ModelClass;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GOLD: &str = "\x1b[38;2;195;158;83m";
pub const CYAN: &str = "\x1b[38;2;118;170;185m";
pub const PINK: &str = "\x1b[38;2;255;182;193m";
pub const GREEN: &str = "\x1b[38;2;152;195;121m";
pub const SILVER: &str = "\x1b[38;2;192;192;192m";
pub const ORANGE: &str = "\x1b[38;2;255;165;0m";
pub const PURPLE: &str = "\x1b[38;2;186;133;217m";
pub const BLUE: &str = "\x1b[38;2;100;149;237m";
pub const RED: &str = "\x1b[38;2;220;88;88m";
pub const MUTED: &str = "\x1b[38;2;170;170;170m";
pub const YELLOW: &str = "\x1b[38;2;255;215;0m";

pub const BRIGHT_GREEN: &str = "\x1b[38;2;80;255;100m";
pub const BRIGHT_YELLOW: &str = "\x1b[38;2;255;220;60m";
pub const NEON_GREEN: &str = "\x1b[38;2;0;255;136m";
pub const NEON_ORANGE: &str = "\x1b[38;2;255;150;50m";

pub const CTX_GREEN: &str = "\x1b[38;2;108;167;108m";
pub const CTX_GOLD: &str = "\x1b[38;2;188;155;83m";
pub const CTX_RED: &str = "\x1b[38;2;185;102;82m";

pub const FRAME: &str = "\x1b[38;2;60;60;60m";
pub const LABEL: &str = "\x1b[38;2;140;140;140m";
pub const LABEL_DIM: &str = "\x1b[38;2;100;100;100m";

/// Low-contrast color for the unfilled run of glow bars.
pub const GLOW_TRACK: &str = "\x1b[38;2;35;35;35m";

pub const BG_GREEN_GLOW: &str = "\x1b[48;2;20;55;25m";
pub const BG_YELLOW_GLOW: &str = "\x1b[48;2;55;50;15m";
pub const BG_CYAN_GLOW: &str = "\x1b[48;2;0;60;60m";
pub const BG_RED_GLOW: &str = "\x1b[48;2;60;20;20m";

const BAR_WARNING_PERCENT: i32 = 50;
const BAR_CRITICAL_PERCENT: i32 = 75;
const CONTEXT_WARNING_PERCENT: i32 = 60;
const CONTEXT_CRITICAL_PERCENT: i32 = 80;

/// Foreground and glow background for a usage bar at `percent`.
#[must_use]
pub fn bar_color(percent: i32) -> (&'static str, &'static str) {
    if percent < BAR_WARNING_PERCENT {
        (BRIGHT_GREEN, BG_GREEN_GLOW)
    } else if percent < BAR_CRITICAL_PERCENT {
        (BRIGHT_YELLOW, BG_YELLOW_GLOW)
    } else {
        (RED, BG_RED_GLOW)
    }
}

/// Severity color for context-window usage.
#[must_use]
pub fn context_color(percent: i32) -> &'static str {
    if percent < CONTEXT_WARNING_PERCENT {
        CTX_GREEN
    } else if percent < CONTEXT_CRITICAL_PERCENT {
        CTX_GOLD
    } else {
        CTX_RED
    }
}

/// Representative color and icon for a model family.
///
/// Unrecognized models fall back to cyan with a plain diamond so every theme
/// still has something to draw.
#[must_use]
pub fn model_style(class: ModelClass) -> (&'static str, &'static str) {
    match class {
        ModelClass::Opus => (GOLD, "💛"),
        ModelClass::Sonnet => (CYAN, "💠"),
        ModelClass::Haiku => (PINK, "🌸"),
        ModelClass::Unspecified => (CYAN, "◆"),
    }
}
