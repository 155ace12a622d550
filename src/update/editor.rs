//! Tolerance editor state machine
//!
//! Every (mode, gesture) pair maps to exactly one outcome. Gestures a mode
//! does not handle return `None` and leave the model untouched.

use crate::commands::{Cmd, FocusTarget};
use crate::messages::EditorMsg;
use crate::model::{EditorMode, EditorModel, PresetValue};

use super::input::update_input;

/// Handle editor messages
pub fn update_editor(model: &mut EditorModel, msg: EditorMsg) -> Option<Cmd> {
    match msg {
        EditorMsg::Activate => match model.mode() {
            EditorMode::Resting => Some(open_selecting(model)),
            EditorMode::Selecting | EditorMode::CustomEntry => None,
        },

        EditorMsg::SelectPreset(value) => match model.mode() {
            EditorMode::Selecting => Some(select_preset(model, value)),
            _ => None,
        },

        EditorMsg::SelectPresetAt(index) => {
            if model.mode() != EditorMode::Selecting {
                return None;
            }
            let Some(value) = model.presets().get(index).map(|p| p.value) else {
                tracing::debug!(index, "preset index out of range");
                return None;
            };
            Some(select_preset(model, value))
        }

        EditorMsg::OpenChange(open) => {
            // Opening is driven by the trigger; the gate only reports closes
            if open || !model.is_editing() {
                return None;
            }
            Some(close(model))
        }

        EditorMsg::Cancel => {
            if !model.is_editing() {
                return None;
            }
            Some(close(model))
        }

        EditorMsg::Confirm => {
            if model.mode() != EditorMode::CustomEntry {
                return None;
            }
            if !model.can_confirm() {
                tracing::debug!(
                    text = model.buffer_text().unwrap_or_default(),
                    "confirm disabled for invalid text"
                );
                return None;
            }
            let value = model.pending_value()?;
            model.enter_resting();
            Some(Cmd::batch(vec![
                Cmd::Commit(value),
                Cmd::EditingChanged(false),
                Cmd::Redraw,
            ]))
        }

        EditorMsg::Input(input_msg) => update_input(model, input_msg),

        EditorMsg::SetCurrentValue(value) => {
            model.set_current_value(value);
            Some(Cmd::Redraw)
        }
    }
}

/// Resting → Selecting
///
/// The picker is rendered conditionally on this very transition, so focus has
/// to wait until it has been painted.
fn open_selecting(model: &mut EditorModel) -> Cmd {
    model.enter_selecting();
    Cmd::batch(vec![
        Cmd::EditingChanged(true),
        Cmd::FocusAfterPaint(FocusTarget::PresetPicker),
        Cmd::Redraw,
    ])
}

/// Selecting → Resting (commit) or Selecting → CustomEntry
fn select_preset(model: &mut EditorModel, value: PresetValue) -> Cmd {
    match value {
        PresetValue::Value(value) => {
            model.enter_resting();
            Cmd::batch(vec![
                Cmd::Commit(value),
                Cmd::EditingChanged(false),
                Cmd::Redraw,
            ])
        }
        PresetValue::Custom => {
            model.enter_custom_entry();
            Cmd::batch(vec![Cmd::Focus(FocusTarget::CustomInput), Cmd::Redraw])
        }
    }
}

/// Any open mode → Resting, discarding the edit buffer
fn close(model: &mut EditorModel) -> Cmd {
    model.enter_resting();
    Cmd::batch(vec![Cmd::EditingChanged(false), Cmd::Redraw])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::InputMsg;
    use crate::model::default_presets;
    use crate::tolerance::ToleranceValue;

    fn resting() -> EditorModel {
        EditorModel::new(ToleranceValue::new(0.0025), default_presets())
    }

    fn selecting() -> EditorModel {
        let mut model = resting();
        update_editor(&mut model, EditorMsg::Activate);
        model
    }

    #[test]
    fn test_activate_opens_picker_with_deferred_focus() {
        let mut model = resting();
        let cmd = update_editor(&mut model, EditorMsg::Activate).unwrap();
        assert_eq!(model.mode(), EditorMode::Selecting);
        let cmds = cmd.flatten();
        assert!(cmds.contains(&Cmd::EditingChanged(true)));
        assert!(cmds.contains(&Cmd::FocusAfterPaint(FocusTarget::PresetPicker)));
        assert!(!cmds.contains(&Cmd::Focus(FocusTarget::PresetPicker)));
    }

    #[test]
    fn test_activate_is_noop_when_open() {
        let mut model = selecting();
        assert!(update_editor(&mut model, EditorMsg::Activate).is_none());
        assert_eq!(model.mode(), EditorMode::Selecting);
    }

    #[test]
    fn test_custom_focuses_synchronously() {
        let mut model = selecting();
        let cmd = update_editor(&mut model, EditorMsg::SelectPreset(PresetValue::Custom)).unwrap();
        assert_eq!(model.mode(), EditorMode::CustomEntry);
        let cmds = cmd.flatten();
        assert!(cmds.contains(&Cmd::Focus(FocusTarget::CustomInput)));
        assert!(!cmds.iter().any(|c| matches!(c, Cmd::EditingChanged(_))));
        assert!(cmd_commits_nothing(&cmds));
    }

    #[test]
    fn test_out_of_range_index_is_noop() {
        let mut model = selecting();
        assert!(update_editor(&mut model, EditorMsg::SelectPresetAt(9)).is_none());
        assert_eq!(model.mode(), EditorMode::Selecting);
    }

    #[test]
    fn test_confirm_in_selecting_is_noop() {
        let mut model = selecting();
        assert!(update_editor(&mut model, EditorMsg::Confirm).is_none());
        assert_eq!(model.mode(), EditorMode::Selecting);
    }

    #[test]
    fn test_open_change_true_is_noop() {
        let mut model = selecting();
        assert!(update_editor(&mut model, EditorMsg::OpenChange(true)).is_none());
        assert_eq!(model.mode(), EditorMode::Selecting);
    }

    #[test]
    fn test_close_while_resting_is_noop() {
        let mut model = resting();
        assert!(update_editor(&mut model, EditorMsg::OpenChange(false)).is_none());
        assert!(update_editor(&mut model, EditorMsg::Cancel).is_none());
    }

    #[test]
    fn test_input_outside_custom_entry_is_noop() {
        let mut model = selecting();
        let msg = EditorMsg::Input(InputMsg::InsertChar('5'));
        assert!(update_editor(&mut model, msg).is_none());
    }

    #[test]
    fn test_set_current_value_keeps_mode() {
        let mut model = selecting();
        update_editor(
            &mut model,
            EditorMsg::SetCurrentValue(ToleranceValue::new(0.001)),
        );
        assert_eq!(model.mode(), EditorMode::Selecting);
        assert_eq!(model.current_value(), ToleranceValue::new(0.001));
    }

    fn cmd_commits_nothing(cmds: &[Cmd]) -> bool {
        !cmds.iter().any(|c| matches!(c, Cmd::Commit(_)))
    }
}
