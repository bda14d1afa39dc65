use super::*;
use crate::snapshot::{ModelClass, RateLimitWindow};
use crate::text::strip_sgr;

struct FixedTheme {
    name: &'static str,
    output: &'static str,
}

impl Theme for FixedTheme {
    fn name(&self) -> &'static str {
        self.name
    }

    fn description(&self) -> &'static str {
        "fixed output for registry tests"
    }

    fn render(&self, _snapshot: &Snapshot) -> String {
        self.output.to_string()
    }
}

fn busy_snapshot() -> Snapshot {
    Snapshot {
        model_name: "Claude Sonnet 4".to_string(),
        model_class: ModelClass::Sonnet,
        version: "2.0.14".to_string(),
        update_available: true,
        project_path: "/home/dev/projects/statusline-renderer".to_string(),
        git_branch: "feature/themes".to_string(),
        git_staged: 2,
        git_dirty: 7,
        token_count: 84_250,
        message_count: 31,
        session_time: "1h12m".to_string(),
        cache_hit_percent: 91,
        session_cost: 3.42,
        day_cost: 18.9,
        week_cost: 64.0,
        month_cost: 212.5,
        burn_rate: 2.85,
        context_used: 96_000,
        context_percent: 48,
        five_hour: RateLimitWindow {
            percent: 63,
            time_left: "2h13m".to_string(),
        },
        seven_day: RateLimitWindow {
            percent: 22,
            time_left: "4d6h".to_string(),
        },
    }
}

#[test]
fn registry_new_is_empty() {
    let registry = ThemeRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
    assert!(registry.list_all().next().is_none());
}

#[test]
fn builtin_registry_lists_every_theme_by_name() {
    let registry = ThemeRegistry::with_builtin_themes();
    let names: Vec<&str> = registry.list_all().map(|theme| theme.name()).collect();
    assert_eq!(
        names,
        [
            "classic_framed",
            "compact",
            "dungeon",
            "glitch",
            "oneline_clean",
            "oneline_pills",
            "oneline_powerline",
            "steampunk",
            "twoline_pills",
        ]
    );
    for theme in registry.list_all() {
        assert!(!theme.description().is_empty(), "{}", theme.name());
    }
}

#[test]
fn default_theme_is_registered() {
    let registry = ThemeRegistry::with_builtin_themes();
    assert!(registry.lookup(DEFAULT_THEME).is_some());
}

#[test]
fn lookup_unknown_name_is_none() {
    let registry = ThemeRegistry::with_builtin_themes();
    assert!(registry.lookup("no-such-theme").is_none());
    assert!(registry.lookup("").is_none());
}

#[test]
fn repeated_registration_is_idempotent() {
    let mut registry = ThemeRegistry::with_builtin_themes();
    let before = registry.len();
    registry.register(Box::new(CompactTheme::new()));
    registry.register(Box::new(CompactTheme::new()));
    assert_eq!(registry.len(), before);
    assert_eq!(
        registry.lookup("compact").map(|theme| theme.name()),
        Some("compact")
    );
    assert_eq!(
        registry
            .list_all()
            .filter(|theme| theme.name() == "compact")
            .count(),
        1
    );
}

#[test]
fn later_registration_replaces_earlier() {
    let mut registry = ThemeRegistry::new();
    registry.register(Box::new(FixedTheme {
        name: "custom",
        output: "first\n",
    }));
    registry.register(Box::new(FixedTheme {
        name: "custom",
        output: "second\n",
    }));
    assert_eq!(registry.len(), 1);
    let theme = registry.lookup("custom").expect("registered");
    assert_eq!(theme.render(&Snapshot::default()), "second\n");
}

#[test]
fn every_theme_is_deterministic_and_newline_terminated() {
    let registry = ThemeRegistry::with_builtin_themes();
    let snapshot = busy_snapshot();
    for theme in registry.list_all() {
        let first = theme.render(&snapshot);
        let second = theme.render(&snapshot);
        assert_eq!(first, second, "{}", theme.name());
        assert!(first.ends_with('\n'), "{}", theme.name());
        assert!(!first.is_empty(), "{}", theme.name());
    }
}

#[test]
fn no_theme_draws_an_empty_branch_or_countdown() {
    let registry = ThemeRegistry::with_builtin_themes();
    let mut snapshot = busy_snapshot();
    snapshot.git_branch.clear();
    snapshot.five_hour.time_left.clear();
    snapshot.seven_day.time_left.clear();
    for theme in registry.list_all() {
        let plain = strip_sgr(&theme.render(&snapshot)).into_owned();
        assert!(!plain.contains("+2"), "{} drew git counts", theme.name());
        assert!(!plain.contains("~7"), "{} drew git counts", theme.name());
        assert!(!plain.contains("*7"), "{} drew git counts", theme.name());
    }
}

#[test]
fn every_theme_shows_branch_and_countdown_when_present() {
    let registry = ThemeRegistry::with_builtin_themes();
    let snapshot = busy_snapshot();
    for theme in registry.list_all() {
        let plain = strip_sgr(&theme.render(&snapshot)).into_owned();
        assert!(plain.contains("feature/themes"), "{}", theme.name());
        assert!(plain.contains("2h13m"), "{}", theme.name());
    }
}

#[test]
fn unspecified_model_still_renders_everywhere() {
    let registry = ThemeRegistry::with_builtin_themes();
    let snapshot = Snapshot {
        model_class: ModelClass::Unspecified,
        ..busy_snapshot()
    };
    for theme in registry.list_all() {
        assert!(!theme.render(&snapshot).is_empty(), "{}", theme.name());
    }
}

#[test]
fn registry_is_shareable_across_threads() {
    let registry = ThemeRegistry::with_builtin_themes();
    let snapshot = busy_snapshot();
    let expected = registry
        .lookup(DEFAULT_THEME)
        .expect("default theme")
        .render(&snapshot);
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    registry
                        .lookup(DEFAULT_THEME)
                        .expect("default theme")
                        .render(&snapshot)
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().expect("render thread"), expected);
        }
    });
}
