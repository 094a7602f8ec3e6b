//! Logging facilities for ClearEdit.
//!
//! ClearEdit uses the `tracing` crate for instrumentation. To see logs,
//! install a subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("clearedit::gesture=trace,clearedit::visibility=debug")
//!     .init();
//! ```
//!
//! Every log line the widget layer emits uses one of the [`targets`], so each
//! subsystem can be filtered on its own.

/// Span names used throughout ClearEdit for tracing.
pub mod span_names {
    /// Touch gesture processing span.
    pub const GESTURE: &str = "clearedit::gesture";
    /// Performance measurement span.
    pub const PERF: &str = "clearedit::perf";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "clearedit_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "clearedit_core::signal";
    /// Icon visibility decisions.
    pub const VISIBILITY: &str = "clearedit::visibility";
    /// Touch hit-testing and press tracking.
    pub const GESTURE: &str = "clearedit::gesture";
    /// Clear-action dispatch.
    pub const DELETE: &str = "clearedit::delete";
    /// Delete-key interception.
    pub const KEY: &str = "clearedit::key";
    /// Content change and length-limit watching.
    pub const WATCHER: &str = "clearedit::watcher";
    /// Configuration loading.
    pub const CONFIG: &str = "clearedit::config";
    /// Quick-delete mode changes.
    pub const MODE: &str = "clearedit::mode";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Useful for measuring the duration of an operation with a subscriber that
/// records span timings.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: span_names::PERF, "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
