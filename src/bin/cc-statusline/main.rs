//! Status line entrypoint: read a snapshot, pick a theme, print the rendering.
//!
//! Stdout carries only the rendered lines so the caller can paste them verbatim
//! into its own prompt area. Diagnostics go to the optional trace log.

mod demo;
mod input;
mod theme_select;

use anyhow::{Context, Result};
use cc_statusline::config::{load_user_config, AppConfig, UserConfig};
use cc_statusline::telemetry::init_tracing;
use cc_statusline::ThemeRegistry;
use clap::Parser;
use std::io::{self, Write};
use strip_ansi_escapes::strip;

fn main() -> Result<()> {
    let config = AppConfig::parse();
    init_tracing(&config);

    let registry = ThemeRegistry::with_builtin_themes();
    let mut stdout = io::stdout().lock();

    if config.list_themes {
        for theme in registry.list_all() {
            writeln!(stdout, "{:<20}{}", theme.name(), theme.description())?;
        }
        return Ok(());
    }

    let user = resolve_user_config(&config)?;
    let snapshot = if config.demo {
        demo::sample_snapshot()
    } else {
        input::read_snapshot(io::stdin().lock()).context("failed to read snapshot from stdin")?
    };

    let theme = theme_select::resolve(&registry, config.requested_theme(&user));
    let mut rendered = theme.render(&snapshot);
    if config.color_disabled(&user) {
        rendered = plain_text(&rendered);
    }
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Preferences from disk. A broken file at the default location only warns;
/// a broken file named with `--config` is an error.
fn resolve_user_config(config: &AppConfig) -> Result<UserConfig> {
    let Some(path) = config.user_config_path() else {
        return Ok(UserConfig::default());
    };
    match load_user_config(&path) {
        Ok(user) => {
            tracing::debug!(path = %path.display(), ?user, "loaded user config");
            Ok(user)
        }
        Err(err) if config.config.is_none() => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable user config");
            Ok(UserConfig::default())
        }
        Err(err) => {
            Err(err).with_context(|| format!("failed to load config from {}", path.display()))
        }
    }
}

fn plain_text(rendered: &str) -> String {
    let stripped = strip(rendered.as_bytes());
    let mut text = String::from_utf8_lossy(&stripped).into_owned();
    if rendered.ends_with('\n') && !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
