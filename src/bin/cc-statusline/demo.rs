//! Sample snapshot for previewing themes without a host session.

use cc_statusline::{ModelClass, RateLimitWindow, Snapshot};

pub(crate) fn sample_snapshot() -> Snapshot {
    Snapshot {
        model_name: "Opus 4.5".to_string(),
        model_class: ModelClass::Opus,
        version: "2.0.37".to_string(),
        update_available: true,
        project_path: "/home/dev/projects/cc-statusline".to_string(),
        git_branch: "main".to_string(),
        git_staged: 2,
        git_dirty: 3,
        token_count: 1_534_210,
        message_count: 48,
        session_time: "1h23m".to_string(),
        cache_hit_percent: 87,
        session_cost: 5.5,
        day_cost: 23.4,
        week_cost: 96.1,
        month_cost: 312.75,
        burn_rate: 3.96,
        context_used: 84_000,
        context_percent: 42,
        five_hour: RateLimitWindow {
            percent: 58,
            time_left: "2h13m".to_string(),
        },
        seven_day: RateLimitWindow {
            percent: 31,
            time_left: "4d6h".to_string(),
        },
    }
}
