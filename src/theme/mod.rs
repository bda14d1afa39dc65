//! Theme contract and registry so layouts stay interchangeable behind one name.
//!
//! A theme is a pure function from a [`Snapshot`] to multi-line colored text.
//! The [`ThemeRegistry`] is built once at startup and only read afterwards;
//! callers own the policy for names that are not registered.

mod classic_framed;
mod compact;
mod dungeon;
mod glitch;
mod oneline_clean;
mod pills;
mod powerline;
mod segments;
mod steampunk;

pub use classic_framed::ClassicFramedTheme;
pub use compact::CompactTheme;
pub use dungeon::DungeonTheme;
pub use glitch::GlitchTheme;
pub use oneline_clean::OnelineCleanTheme;
pub use pills::{OnelinePillsTheme, TwolinePillsTheme};
pub use powerline::OnelinePowerlineTheme;
pub use steampunk::SteampunkTheme;

use std::collections::BTreeMap;

use crate::snapshot::Snapshot;

/// Theme used when no name is configured or the configured one is unknown.
pub const DEFAULT_THEME: &str = "classic_framed";

/// A named layout-and-color strategy for rendering a [`Snapshot`].
///
/// Implementations must be deterministic: the same snapshot always renders the
/// same text. Optional segments whose backing field is empty or zero are left
/// out rather than drawn blank. Every line of the output ends with `\n`.
pub trait Theme: Send + Sync {
    /// Unique registry key.
    fn name(&self) -> &'static str;

    /// One-line human description for theme listings.
    fn description(&self) -> &'static str;

    /// Render the snapshot as newline-terminated lines with embedded SGR codes.
    fn render(&self, snapshot: &Snapshot) -> String;
}

/// Name-keyed catalog of themes.
pub struct ThemeRegistry {
    themes: BTreeMap<&'static str, Box<dyn Theme>>,
}

impl ThemeRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            themes: BTreeMap::new(),
        }
    }

    /// Create a registry holding every built-in theme.
    #[must_use]
    pub fn with_builtin_themes() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(ClassicFramedTheme::new()));
        registry.register(Box::new(CompactTheme::new()));
        registry.register(Box::new(OnelineCleanTheme::new()));
        registry.register(Box::new(OnelinePillsTheme::new()));
        registry.register(Box::new(TwolinePillsTheme::new()));
        registry.register(Box::new(OnelinePowerlineTheme::new()));
        registry.register(Box::new(GlitchTheme::new()));
        registry.register(Box::new(DungeonTheme::new()));
        registry.register(Box::new(SteampunkTheme::new()));
        tracing::debug!(count = registry.len(), "registered built-in themes");
        registry
    }

    /// Register a theme under its own name, replacing any earlier entry.
    pub fn register(&mut self, theme: Box<dyn Theme>) {
        let name = theme.name();
        if self.themes.insert(name, theme).is_some() {
            tracing::debug!(theme = name, "replaced existing theme registration");
        }
    }

    /// Find a theme by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&dyn Theme> {
        self.themes.get(name).map(Box::as_ref)
    }

    /// All registered themes, ordered by name.
    pub fn list_all(&self) -> impl Iterator<Item = &dyn Theme> {
        self.themes.values().map(Box::as_ref)
    }

    /// Number of registered themes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
