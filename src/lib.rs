//! Themed status line rendering with width-correct layout primitives.

pub mod bars;
pub mod config;
pub mod format;
pub mod palette;
pub mod snapshot;
pub mod telemetry;
pub mod text;
pub mod theme;

pub use snapshot::{ModelClass, RateLimitWindow, Snapshot};
pub use theme::{Theme, ThemeRegistry, DEFAULT_THEME};
