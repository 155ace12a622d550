//! Tolerance Editor - Elm-style slippage tolerance control
//!
//! This crate provides the state machine, formatting and runtime for a small
//! inline editor that lets a user pick a preset tolerance or type a custom
//! percentage, implementing the Elm Architecture pattern.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod footer;
pub mod gate;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod strings;
pub mod tolerance;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use messages::Msg;
pub use model::EditorModel;
pub use runtime::ToleranceEditor;
pub use tolerance::ToleranceValue;
