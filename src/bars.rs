//! Percentage bars so every theme fills the same number of cells for a value.
//!
//! All variants share [`BarSplit`]: `filled = percent * width / 100` clamped to
//! `0..=width`, and `empty = width - filled`. Variants differ only in glyphs,
//! colors, and whether they add delimiters outside the `width` cells.

use crate::palette::{BOLD, GLOW_TRACK, RESET};

/// Filled and empty cell counts for one bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarSplit {
    pub filled: usize,
    pub empty: usize,
}

impl BarSplit {
    /// Split `width` cells for `percent`; out-of-range percentages saturate.
    #[must_use]
    pub fn new(percent: i32, width: usize) -> Self {
        let width_i = i64::try_from(width).unwrap_or(i64::MAX);
        let raw = i64::from(percent).saturating_mul(width_i) / 100;
        let filled = usize::try_from(raw.clamp(0, width_i)).unwrap_or(0);
        Self {
            filled,
            empty: width - filled,
        }
    }
}

/// Glyphs and colors for [`plain_bar`].
#[derive(Debug, Clone, Copy)]
pub struct BarPaint<'a> {
    pub filled_glyph: char,
    pub empty_glyph: char,
    pub filled_color: &'a str,
    pub empty_color: &'a str,
}

fn push_run(out: &mut String, color: &str, glyph: char, count: usize) {
    if count == 0 {
        return;
    }
    out.push_str(color);
    out.extend(std::iter::repeat_n(glyph, count));
    out.push_str(RESET);
}

/// Caller-styled bar with no embellishment.
#[must_use]
pub fn plain_bar(percent: i32, width: usize, paint: &BarPaint<'_>) -> String {
    let split = BarSplit::new(percent, width);
    let mut bar = String::new();
    push_run(&mut bar, paint.filled_color, paint.filled_glyph, split.filled);
    push_run(&mut bar, paint.empty_color, paint.empty_glyph, split.empty);
    bar
}

/// Bold fill on a glow background; the unfilled track is a fixed dark gray.
#[must_use]
pub fn glow_bar(percent: i32, width: usize, color: &str, glow: &str) -> String {
    let split = BarSplit::new(percent, width);
    let mut bar = String::new();
    let fill_style = format!("{glow}{BOLD}{color}");
    push_run(&mut bar, &fill_style, '▓', split.filled);
    push_run(&mut bar, GLOW_TRACK, '░', split.empty);
    bar
}

/// Compact block bar for badge-style segments.
#[must_use]
pub fn mini_bar(percent: i32, width: usize, color: &str, dim: &str) -> String {
    plain_bar(
        percent,
        width,
        &BarPaint {
            filled_glyph: '▮',
            empty_glyph: '▯',
            filled_color: color,
            empty_color: dim,
        },
    )
}

/// Colors for [`gauge_bar`].
#[derive(Debug, Clone, Copy)]
pub struct GaugePaint<'a> {
    pub needle: &'a str,
    pub face: &'a str,
    pub rim: &'a str,
}

/// Pressure-gauge bar: `〔` fill on a highlighted face, then empty cells `〕`.
#[must_use]
pub fn gauge_bar(percent: i32, width: usize, paint: &GaugePaint<'_>) -> String {
    let split = BarSplit::new(percent, width);
    let mut bar = format!("{}〔{RESET}", paint.rim);
    let fill_style = format!("{}{}", paint.face, paint.needle);
    push_run(&mut bar, &fill_style, '▰', split.filled);
    push_run(&mut bar, paint.rim, '▱', split.empty);
    bar.push_str(paint.rim);
    bar.push_str("〕");
    bar.push_str(RESET);
    bar
}

/// Colors for [`glitch_bar`].
#[derive(Debug, Clone, Copy)]
pub struct GlitchPaint<'a> {
    pub fill: &'a str,
    pub corrupt: &'a str,
    pub dim: &'a str,
}

/// Fill runs of more than three cells get one corrupted cell at the midpoint.
const GLITCH_MIN_CORRUPT_RUN: usize = 3;

/// Cell-by-cell bar in `【】` with a single corruption glyph mid-run.
#[must_use]
pub fn glitch_bar(percent: i32, width: usize, paint: &GlitchPaint<'_>) -> String {
    let split = BarSplit::new(percent, width);
    let corrupt_at = (split.filled > GLITCH_MIN_CORRUPT_RUN).then_some(split.filled / 2);
    let mut bar = format!("{}【{RESET}", paint.dim);
    for cell in 0..split.filled {
        if Some(cell) == corrupt_at {
            push_run(&mut bar, paint.corrupt, '█', 1);
        } else {
            push_run(&mut bar, paint.fill, '▓', 1);
        }
    }
    push_run(&mut bar, paint.dim, '░', split.empty);
    bar.push_str(paint.dim);
    bar.push_str("】");
    bar.push_str(RESET);
    bar
}

/// `[###---]` bar whose brackets and empty run share a shadow color.
#[must_use]
pub fn dungeon_bar(percent: i32, width: usize, color: &str, shadow: &str) -> String {
    let split = BarSplit::new(percent, width);
    let mut bar = format!("{shadow}[{RESET}");
    push_run(&mut bar, color, '#', split.filled);
    push_run(&mut bar, shadow, '-', split.empty);
    bar.push_str(shadow);
    bar.push(']');
    bar.push_str(RESET);
    bar
}
