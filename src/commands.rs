//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! `update` never calls back into the host itself; it describes what should
//! happen and the runtime carries it out.

use serde::Serialize;

use crate::tolerance::ToleranceValue;

/// Controls that can receive input focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusTarget {
    /// The preset toggle group shown while selecting
    PresetPicker,
    /// The percent text field shown during custom entry
    CustomInput,
}

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the editor
    Redraw,
    /// Hand a new tolerance to the caller
    Commit(ToleranceValue),
    /// The editor entered (true) or left (false) its resting mode
    EditingChanged(bool),
    /// Focus a control that is attached in the same update
    Focus(FocusTarget),
    /// Focus a control once the current render pass has completed
    FocusAfterPaint(FocusTarget),
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::Commit(_) => true,
            Cmd::EditingChanged(_) => true,
            // Focus changes are painted by the host's own focus ring
            Cmd::Focus(_) => false,
            Cmd::FocusAfterPaint(_) => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Flatten nested batches into execution order
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            other => vec![other],
        }
    }
}
