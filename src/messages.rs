//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::model::PresetValue;
use crate::tolerance::ToleranceValue;

/// Edits to the custom-entry text field
#[derive(Debug, Clone, PartialEq)]
pub enum InputMsg {
    /// Type a character
    InsertChar(char),
    /// Delete character before cursor (Backspace)
    DeleteBackward,
    /// Empty the field
    Clear,
    /// Replace the whole text (paste, or a host that reports full values)
    SetText(String),
}

/// Editor gestures and caller signals
#[derive(Debug, Clone, PartialEq)]
pub enum EditorMsg {
    /// The trigger (formatted value) was activated
    Activate,
    /// A preset was picked from the toggle group
    SelectPreset(PresetValue),
    /// A preset was picked by position
    SelectPresetAt(usize),
    /// The gate's open state was changed from outside (click away, escape)
    OpenChange(bool),
    /// The gate's cancel action
    Cancel,
    /// The gate's confirm action
    Confirm,
    /// Custom-entry text edits
    Input(InputMsg),
    /// The caller supplied a new current value
    SetCurrentValue(ToleranceValue),
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Tolerance editor messages
    Editor(EditorMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn activate() -> Self {
        Msg::Editor(EditorMsg::Activate)
    }

    pub fn select(value: PresetValue) -> Self {
        Msg::Editor(EditorMsg::SelectPreset(value))
    }

    pub fn select_custom() -> Self {
        Msg::Editor(EditorMsg::SelectPreset(PresetValue::Custom))
    }

    pub fn cancel() -> Self {
        Msg::Editor(EditorMsg::Cancel)
    }

    pub fn confirm() -> Self {
        Msg::Editor(EditorMsg::Confirm)
    }

    /// Caller or outside interaction closed the gate
    pub fn close() -> Self {
        Msg::Editor(EditorMsg::OpenChange(false))
    }

    pub fn insert_char(ch: char) -> Self {
        Msg::Editor(EditorMsg::Input(InputMsg::InsertChar(ch)))
    }

    pub fn set_text(text: impl Into<String>) -> Self {
        Msg::Editor(EditorMsg::Input(InputMsg::SetText(text.into())))
    }

    pub fn set_current_value(value: ToleranceValue) -> Self {
        Msg::Editor(EditorMsg::SetCurrentValue(value))
    }
}

impl From<EditorMsg> for Msg {
    fn from(msg: EditorMsg) -> Self {
        Msg::Editor(msg)
    }
}
