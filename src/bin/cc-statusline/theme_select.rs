//! Theme fallback policy for names the registry does not know.

use cc_statusline::{Theme, ThemeRegistry, DEFAULT_THEME};

/// Look up `requested`, falling back to the default theme with a warning.
pub(crate) fn resolve<'a>(registry: &'a ThemeRegistry, requested: &str) -> &'a dyn Theme {
    if let Some(theme) = registry.lookup(requested) {
        tracing::debug!(theme = requested, "selected theme");
        return theme;
    }
    tracing::warn!(
        requested,
        fallback = DEFAULT_THEME,
        "unknown theme; using default"
    );
    registry
        .lookup(DEFAULT_THEME)
        .or_else(|| registry.list_all().next())
        .unwrap_or(&FALLBACK)
}

/// Last resort when the registry is empty: a bare line so output is never blank.
struct BareTheme;

static FALLBACK: BareTheme = BareTheme;

impl Theme for BareTheme {
    fn name(&self) -> &'static str {
        "bare"
    }

    fn description(&self) -> &'static str {
        "Model name only"
    }

    fn render(&self, snapshot: &cc_statusline::Snapshot) -> String {
        format!("{}\n", snapshot.model_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_name_is_used() {
        let registry = ThemeRegistry::with_builtin_themes();
        assert_eq!(resolve(&registry, "dungeon").name(), "dungeon");
    }

    #[test]
    fn unknown_name_falls_back_to_default() {
        let registry = ThemeRegistry::with_builtin_themes();
        assert_eq!(resolve(&registry, "no-such-theme").name(), DEFAULT_THEME);
    }

    #[test]
    fn empty_registry_still_renders() {
        let registry = ThemeRegistry::new();
        assert_eq!(resolve(&registry, "anything").name(), "bare");
    }
}
