//! Layout checks that hold for every built-in theme through the public API.

use cc_statusline::text::{strip_sgr, visible_width};
use cc_statusline::{ModelClass, RateLimitWindow, Snapshot, ThemeRegistry};
use proptest::prelude::*;

fn model_class() -> impl Strategy<Value = ModelClass> {
    prop_oneof![
        Just(ModelClass::Opus),
        Just(ModelClass::Sonnet),
        Just(ModelClass::Haiku),
        Just(ModelClass::Unspecified),
    ]
}

fn window() -> impl Strategy<Value = RateLimitWindow> {
    (0i32..=100, "([0-9]h[0-5][0-9]m)?").prop_map(|(percent, time_left)| RateLimitWindow {
        percent,
        time_left,
    })
}

prop_compose! {
    fn snapshot()(
        model_name in "[A-Za-z ]{0,12}",
        model_class in model_class(),
        project_path in "(/[a-z]{1,8}){0,4}",
        git_branch in "([a-z/中]{1,10})?",
        git_staged in 0u32..20,
        git_dirty in 0u32..20,
        token_count in 0u64..50_000_000,
        session_cost in 0.0f64..500.0,
        context_percent in 0i32..=100,
        five_hour in window(),
        seven_day in window(),
    ) -> Snapshot {
        Snapshot {
            model_name,
            model_class,
            project_path,
            git_branch,
            git_staged,
            git_dirty,
            token_count,
            session_cost,
            context_percent,
            five_hour,
            seven_day,
            ..Default::default()
        }
    }
}

/// Themes that close every line against a fixed right edge, with that width.
const FRAMED: [(&str, usize); 3] = [("classic_framed", 80), ("dungeon", 80), ("steampunk", 85)];

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn framed_themes_keep_a_straight_right_edge(snapshot in snapshot()) {
        let registry = ThemeRegistry::with_builtin_themes();
        for (name, width) in FRAMED {
            let theme = registry.lookup(name).expect("built-in theme");
            let rendered = theme.render(&snapshot);
            for line in strip_sgr(&rendered).lines() {
                prop_assert_eq!(visible_width(line), width, "{} line {:?}", name, line);
            }
        }
    }

    #[test]
    fn every_theme_is_a_pure_function_of_the_snapshot(snapshot in snapshot()) {
        let registry = ThemeRegistry::with_builtin_themes();
        let before = snapshot.clone();
        for theme in registry.list_all() {
            let first = theme.render(&snapshot);
            prop_assert_eq!(&first, &theme.render(&snapshot));
            prop_assert!(first.ends_with('\n'));
        }
        prop_assert_eq!(snapshot, before);
    }

    #[test]
    fn every_theme_renders_any_integer_percent(
        snapshot in snapshot(),
        context_percent in any::<i32>(),
        five_hour in any::<i32>(),
        seven_day in any::<i32>(),
    ) {
        let registry = ThemeRegistry::with_builtin_themes();
        let mut wild = snapshot;
        wild.context_percent = context_percent;
        wild.five_hour.percent = five_hour;
        wild.seven_day.percent = seven_day;
        for theme in registry.list_all() {
            let rendered = theme.render(&wild);
            prop_assert!(rendered.ends_with('\n'), "{} lost its trailing newline", theme.name());
        }
    }

    #[test]
    fn git_segment_appears_only_with_a_branch(snapshot in snapshot()) {
        let registry = ThemeRegistry::with_builtin_themes();
        let mut without = snapshot.clone();
        without.git_branch.clear();
        without.git_staged = 7_777;
        for theme in registry.list_all() {
            let plain = strip_sgr(&theme.render(&without)).into_owned();
            prop_assert!(!plain.contains("7777"), "{} drew staged count", theme.name());
        }
    }
}

#[test]
fn classic_framed_reference_scenario() {
    let registry = ThemeRegistry::with_builtin_themes();
    let snapshot = Snapshot {
        model_name: "Opus 4.5".to_string(),
        model_class: ModelClass::Opus,
        token_count: 1_500_000,
        session_cost: 5.5,
        context_percent: 42,
        ..Default::default()
    };
    let rendered = registry
        .lookup("classic_framed")
        .expect("reference theme")
        .render(&snapshot);
    let plain = strip_sgr(&rendered).into_owned();
    assert!(plain.contains("1.5M"));
    assert!(plain.contains("$5.50"));
    assert!(!plain.contains('⎇'));
    let context_row = plain
        .lines()
        .find(|line| line.contains("Ctx"))
        .expect("context row");
    assert_eq!(context_row.matches('▓').count(), 8);
}
