//! Torch-lit stone chamber: an ASCII frame with RPG stat pools.
//!
//! Context and rate-limit usage are inverted into remaining "HP/MP/XP" so the
//! pools drain as the session consumes budget.

use super::segments::{framed_row, GitCounts};
use super::Theme;
use crate::bars::dungeon_bar;
use crate::format::{format_cost_short, format_tokens, shorten_path};
use crate::palette::{model_style, RESET};
use crate::snapshot::{ModelClass, Snapshot};
use crate::text::pad_right;

const STONE: &str = "\x1b[38;2;105;105;105m";
const DARK_STONE: &str = "\x1b[38;2;64;64;64m";
const TORCH: &str = "\x1b[38;2;255;147;41m";
const FLAME: &str = "\x1b[38;2;255;100;0m";
const GOLD: &str = "\x1b[38;2;255;215;0m";
const BLOOD: &str = "\x1b[38;2;178;34;34m";
const HERB: &str = "\x1b[38;2;34;139;34m";
const WATER: &str = "\x1b[38;2;70;130;180m";
const ARCANE: &str = "\x1b[38;2;138;43;226m";
const BONE: &str = "\x1b[38;2;255;250;240m";
const SHADOW: &str = "\x1b[38;2;25;25;25m";
const MOSS: &str = "\x1b[38;2;85;107;47m";

const WIDTH: usize = 80;
const TORCH_WIDTH: usize = 9;
const PATH_MAX_CHARS: usize = 30;
const HP_BAR_WIDTH: usize = 10;
const POOL_BAR_WIDTH: usize = 8;

pub struct DungeonTheme;

impl DungeonTheme {
    pub fn new() -> Self {
        Self
    }

    fn wall() -> String {
        let torch = format!("{DARK_STONE}###{TORCH}({FLAME}*{TORCH}){DARK_STONE}###{RESET}");
        format!(
            "{torch}{DARK_STONE}{}{RESET}{torch}\n",
            "#".repeat(WIDTH - 2 * TORCH_WIDTH)
        )
    }

    fn row(content: &str) -> String {
        let edge = format!("{DARK_STONE}#{RESET}");
        // The left wall is part of the content so the right wall lands on WIDTH.
        let body = format!("{edge} {content}");
        format!("{}{edge}\n", pad_right(&body, WIDTH - 1))
    }

    fn chamber(class: ModelClass) -> &'static str {
        match class {
            ModelClass::Opus => "The Arcane Sanctum",
            ModelClass::Haiku => "The Monk's Cell",
            ModelClass::Sonnet | ModelClass::Unspecified => "The Dark Chamber",
        }
    }

    fn hp_color(hp: i32) -> &'static str {
        if hp <= 20 {
            BLOOD
        } else if hp <= 50 {
            TORCH
        } else {
            HERB
        }
    }

    fn pool(label: &str, label_color: &str, remaining: i32, width: usize, color: &str) -> String {
        format!(
            "{label_color}{label}{RESET}{}{color}{remaining:>3}{RESET}",
            dungeon_bar(remaining, width, color, SHADOW)
        )
    }
}

impl Default for DungeonTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for DungeonTheme {
    fn name(&self) -> &'static str {
        "dungeon"
    }

    fn description(&self) -> &'static str {
        "Dungeon: torch-lit stone walls with a dark adventure mood"
    }

    fn render(&self, snapshot: &Snapshot) -> String {
        let (model_color, _) = model_style(snapshot.model_class);
        let mut out = Self::wall();

        let mut title = format!(
            "{model_color}{}{RESET}  {TORCH}~ {} ~{RESET}",
            snapshot.model_name,
            Self::chamber(snapshot.model_class)
        );
        if snapshot.update_available {
            title.push_str(&format!("{GOLD} *{RESET}"));
        }
        title.push_str(&format!("  {STONE}{}{RESET}", snapshot.version));
        out.push_str(&Self::row(&title));

        let mut quest = format!(
            "{BONE}Scroll:{RESET} {}",
            shorten_path(&snapshot.project_path, PATH_MAX_CHARS)
        );
        if let Some(branch) = snapshot.branch() {
            let counts = GitCounts {
                staged_color: HERB,
                dirty_color: BLOOD,
                dirty_mark: '*',
            };
            quest.push_str(&format!("  {MOSS}<{branch}>{RESET}"));
            quest.push_str(&counts.render(snapshot));
        }
        out.push_str(&Self::row(&quest));

        out.push_str(&framed_row(
            &format!("{DARK_STONE}#{RESET}"),
            &format!("{STONE}{}{RESET}", "=".repeat(WIDTH - 2)),
            WIDTH - 2,
        ));

        out.push_str(&Self::row(&format!(
            "{BLOOD}Swd{RESET} {:<6} {WATER}Shd{RESET} {:<3} {STONE}Time{RESET} {:<6} {ARCANE}Skul{RESET} {:<6} {GOLD}Gem{RESET} {}",
            format_tokens(snapshot.token_count),
            snapshot.message_count,
            snapshot.session_time,
            format_cost_short(snapshot.burn_rate),
            format_cost_short(snapshot.day_cost)
        )));

        let hp = remaining(snapshot.context_percent);
        let mp = remaining(snapshot.five_hour.percent);
        let xp = remaining(snapshot.seven_day.percent);
        out.push_str(&Self::row(&format!(
            "{} {} {}",
            Self::pool("HP", BLOOD, hp, HP_BAR_WIDTH, Self::hp_color(hp)),
            Self::pool("MP", WATER, mp, POOL_BAR_WIDTH, WATER),
            Self::pool("XP", ARCANE, xp, POOL_BAR_WIDTH, ARCANE)
        )));

        let mut treasure = format!(
            "{GOLD}Gold{RESET} {} ses  {HERB}Potn{RESET} {}% hit",
            format_cost_short(snapshot.session_cost),
            snapshot.cache_hit_percent
        );
        let countdowns: Vec<&str> = [&snapshot.five_hour, &snapshot.seven_day]
            .into_iter()
            .filter_map(|window| window.countdown())
            .collect();
        if !countdowns.is_empty() {
            treasure.push_str(&format!(
                "  {STONE}Left{RESET} {}",
                countdowns.join(" / ")
            ));
        }
        out.push_str(&Self::row(&treasure));

        out.push_str(&Self::wall());
        out
    }
}

/// Pools show what is left, so usage is clamped to 0..=100 before inverting.
fn remaining(used_percent: i32) -> i32 {
    100 - used_percent.clamp(0, 100)
}
