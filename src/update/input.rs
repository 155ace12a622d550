//! Custom-entry text field handlers

use crate::commands::Cmd;
use crate::messages::InputMsg;
use crate::model::EditorModel;

/// Apply a text edit to the custom-entry buffer
///
/// Only meaningful during custom entry. Refused edits (filtered characters,
/// text above the ceiling) leave the buffer alone and skip the redraw.
pub fn update_input(model: &mut EditorModel, msg: InputMsg) -> Option<Cmd> {
    let input = model.buffer_mut()?;

    let changed = match msg {
        InputMsg::InsertChar(ch) => input.insert_char(ch),
        InputMsg::DeleteBackward => input.delete_backward(),
        InputMsg::Clear => input.clear(),
        InputMsg::SetText(text) => input.set_text(&text),
    };

    changed.then_some(Cmd::Redraw)
}
