//! Shared logging utilities for consistent tracing across both tools

use crate::types::ToolId;
use chrono::{DateTime, Utc};
use tracing::{error, info};

/// Build the `EnvFilter` directive string for a tool at the given level
pub fn filter_directives(tool: &ToolId, log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or("info");
    match tool {
        ToolId::Embedded => format!("shared={base_level}"),
        other => format!("{}={base_level},shared={base_level}", other.crate_name()),
    }
}

/// Initialize tracing subscriber with an explicit log level
/// Uses the global tool ID, so call `ToolId::init_*` first
///
/// `RUST_LOG`, when set, overrides the computed directives.
pub fn init_tracing_with_level(log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let directives = filter_directives(ToolId::current(), log_level);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&directives));

    // A second initialization (e.g. from tests) keeps the first subscriber
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .try_init();
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Macro for tool-aware info logging
#[macro_export]
macro_rules! tool_info {
    ($tool_id:expr, $($arg:tt)*) => {
        $crate::tracing::info!(
            tool = %$tool_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for tool-aware warning logging
#[macro_export]
macro_rules! tool_warn {
    ($tool_id:expr, $($arg:tt)*) => {
        $crate::tracing::warn!(
            tool = %$tool_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for tool-aware debug logging
#[macro_export]
macro_rules! tool_debug {
    ($tool_id:expr, $($arg:tt)*) => {
        $crate::tracing::debug!(
            tool = %$tool_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(tool_id: &ToolId, details: &str) {
    info!(
        tool = %tool_id,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(tool_id: &ToolId, context: &str, error: &dyn std::fmt::Display) {
    error!(
        tool = %tool_id,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}

/// Contextual logging helper for success conditions
pub fn log_success(tool_id: &ToolId, message: &str) {
    info!(
        tool = %tool_id,
        timestamp = format_timestamp(),
        "✅ {}",
        message
    );
}

/// Contextual logging helper for progress updates
pub fn log_progress(tool_id: &ToolId, action: &str, details: &str) {
    info!(
        tool = %tool_id,
        timestamp = format_timestamp(),
        "📋 {}: {}",
        action,
        details
    );
}
