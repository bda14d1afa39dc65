//! Immutable render input so every theme formats the same status facts.
//!
//! A [`Snapshot`] is built once per render cycle by whoever gathers git, usage,
//! and version data, then passed by shared reference to a theme. Empty strings
//! and zero counts mean "leave that segment out", never an error.

use serde::{Deserialize, Serialize};

/// Model family, used to pick a representative color and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ModelClass {
    Opus,
    Sonnet,
    Haiku,
    /// Any model outside the known families.
    #[default]
    #[serde(other)]
    Unspecified,
}

impl ModelClass {
    /// Guess the family from a display name such as `"Claude Opus 4.5"`.
    #[must_use]
    pub fn detect(display_name: &str) -> Self {
        let lower = display_name.to_ascii_lowercase();
        if lower.contains("opus") {
            Self::Opus
        } else if lower.contains("sonnet") {
            Self::Sonnet
        } else if lower.contains("haiku") {
            Self::Haiku
        } else {
            Self::Unspecified
        }
    }

    /// Family name as shown to users.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Opus => "Opus",
            Self::Sonnet => "Sonnet",
            Self::Haiku => "Haiku",
            Self::Unspecified => "Model",
        }
    }
}

/// One API rate-limit window: how much is used and how long until it resets.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RateLimitWindow {
    pub percent: i32,
    /// Human countdown such as `"2h13m"`; empty when unknown.
    pub time_left: String,
}

impl RateLimitWindow {
    /// Countdown text, or `None` when the segment should be omitted.
    #[must_use]
    pub fn countdown(&self) -> Option<&str> {
        (!self.time_left.is_empty()).then_some(self.time_left.as_str())
    }
}

/// Everything a theme may display for one render.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub model_name: String,
    pub model_class: ModelClass,
    pub version: String,
    pub update_available: bool,

    pub project_path: String,
    /// Empty when the workspace is not a git checkout.
    pub git_branch: String,
    pub git_staged: u32,
    pub git_dirty: u32,

    pub token_count: u64,
    pub message_count: u32,
    pub session_time: String,
    pub cache_hit_percent: i32,

    pub session_cost: f64,
    pub day_cost: f64,
    pub week_cost: f64,
    pub month_cost: f64,
    pub burn_rate: f64,

    pub context_used: u64,
    pub context_percent: i32,

    pub five_hour: RateLimitWindow,
    pub seven_day: RateLimitWindow,
}

impl Snapshot {
    /// Branch name when there is a git segment to draw.
    #[must_use]
    pub fn branch(&self) -> Option<&str> {
        (!self.git_branch.is_empty()).then_some(self.git_branch.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Claude Opus 4.5", ModelClass::Opus)]
    #[case("Claude Sonnet 4", ModelClass::Sonnet)]
    #[case("Claude Haiku 3.5", ModelClass::Haiku)]
    #[case("opus", ModelClass::Opus)]
    #[case("SONNET", ModelClass::Sonnet)]
    #[case("Unknown Model", ModelClass::Unspecified)]
    #[case("", ModelClass::Unspecified)]
    fn detect_model_class(#[case] name: &str, #[case] expected: ModelClass) {
        assert_eq!(ModelClass::detect(name), expected);
    }

    #[test]
    fn empty_optional_fields_read_as_absent() {
        let snapshot = Snapshot::default();
        assert!(snapshot.branch().is_none());
        assert!(snapshot.five_hour.countdown().is_none());
        assert!(snapshot.seven_day.countdown().is_none());
    }

    #[test]
    fn present_optional_fields_are_exposed() {
        let snapshot = Snapshot {
            git_branch: "main".to_string(),
            five_hour: RateLimitWindow {
                percent: 30,
                time_left: "1h5m".to_string(),
            },
            ..Default::default()
        };
        assert_eq!(snapshot.branch(), Some("main"));
        assert_eq!(snapshot.five_hour.countdown(), Some("1h5m"));
    }

    #[test]
    fn decodes_partial_json_with_defaults() {
        let json = r#"{
            "model_name": "Opus 4.5",
            "model_class": "Opus",
            "token_count": 1500000,
            "five_hour": { "percent": 12 }
        }"#;
        let snapshot: Snapshot = serde_json::from_str(json).expect("valid snapshot json");
        assert_eq!(snapshot.model_class, ModelClass::Opus);
        assert_eq!(snapshot.token_count, 1_500_000);
        assert_eq!(snapshot.five_hour.percent, 12);
        assert!(snapshot.five_hour.countdown().is_none());
        assert!(snapshot.branch().is_none());
    }

    #[test]
    fn unknown_model_class_decodes_to_unspecified() {
        let snapshot: Snapshot =
            serde_json::from_str(r#"{"model_class": "Gemini"}"#).expect("valid snapshot json");
        assert_eq!(snapshot.model_class, ModelClass::Unspecified);
    }
}
