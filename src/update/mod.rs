//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod editor;
mod input;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::EditorModel;

#[cfg(debug_assertions)]
use crate::tracing::ModeSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use editor::update_editor;
pub use input::update_input;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut EditorModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut EditorModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Editor(m) => editor::update_editor(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after mode and buffer and logs the transition.
#[cfg(debug_assertions)]
fn update_traced(model: &mut EditorModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = ModeSnapshot::from_model(model);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = ModeSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "transition", %diff, "state changed");
    }

    result
}

/// Get a display name for a message type
///
/// Example outputs:
/// - `Editor::Activate`
/// - `Editor::Input(InsertChar('5'))`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Editor(m) => format!("Editor::{:?}", m),
    }
}
