//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! editor transitions and focus scheduling.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=transition=debug,focus=trace` - scoped filtering
//! - `RUST_LOG=tolerance_editor::runtime=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/tolerance-editor/logs/tolerance-editor.log`
//! with daily rotation. File logging uses debug level by default.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{EditorMode, EditorModel};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG and defaults to `warn`. File logging
/// writes to the config directory's `logs/` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG, stderr so view output stays clean
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "tolerance-editor.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of editor state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct ModeSnapshot {
    pub mode: EditorMode,
    pub buffer: Option<String>,
    pub current_percent: String,
}

impl ModeSnapshot {
    pub fn from_model(model: &EditorModel) -> Self {
        Self {
            mode: model.mode(),
            buffer: model.buffer_text().map(str::to_string),
            current_percent: model.current_value().to_display_percent(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &ModeSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.mode != other.mode {
            changes.push(format!("mode: {:?} → {:?}", self.mode, other.mode));
        }
        if self.buffer != other.buffer {
            changes.push(format!(
                "buffer: {} → {}",
                self.buffer.as_deref().unwrap_or("-"),
                other.buffer.as_deref().unwrap_or("-")
            ));
        }
        if self.current_percent != other.current_percent {
            changes.push(format!(
                "value: {}% → {}%",
                self.current_percent, other.current_percent
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::default_presets;
    use crate::tolerance::ToleranceValue;

    #[test]
    fn test_snapshot_diff_reports_mode_and_buffer() {
        let mut model = EditorModel::new(ToleranceValue::new(0.0025), default_presets());
        let before = ModeSnapshot::from_model(&model);
        model.enter_custom_entry();
        let after = ModeSnapshot::from_model(&model);

        let diff = before.diff(&after).unwrap();
        assert!(diff.contains("mode: Resting → CustomEntry"));
        assert!(diff.contains("buffer: - → 0.25"));
    }

    #[test]
    fn test_identical_snapshots_have_no_diff() {
        let model = EditorModel::default();
        let a = ModeSnapshot::from_model(&model);
        assert_eq!(a.diff(&a.clone()), None);
    }
}
