//! Confirmation gate - the floating panel anchored to the trigger
//!
//! The gate keeps no state of its own. Its open flag, content slot and which
//! actions are bound are all derived from the editor model on every render,
//! and every action it exposes maps back onto an editor message.

use serde::Serialize;

use crate::messages::{EditorMsg, Msg};
use crate::model::{EditorModel, EditorState};
use crate::strings::{keys, StringGetter};

/// Horizontal alignment of the panel relative to its trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    Start,
    Center,
    End,
}

/// Placement of the panel relative to the trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Anchor {
    pub align: Align,
    /// Offset from the trigger edge in pixels; negative overlaps the trigger row
    pub side_offset: i32,
}

impl Default for Anchor {
    fn default() -> Self {
        Self {
            align: Align::End,
            side_offset: -22,
        }
    }
}

/// One option in the preset toggle group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresetItem {
    pub label: String,
    /// Wire value (`"0.001"` or `"custom"`)
    pub value: String,
    pub selected: bool,
}

/// What the gate shows for the current mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GateContent {
    /// Closed; nothing to show
    None,
    /// Preset toggle group
    Presets { items: Vec<PresetItem> },
    /// Bounded percent field
    CustomEntry { text: String, max_percent: f64 },
}

/// User actions the gate can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GateAction {
    Cancel,
    Confirm,
    /// Pointer down outside the panel and trigger
    OutsideClick,
    Escape,
}

impl GateAction {
    /// The editor message this action stands for
    ///
    /// Clicking away and escape both count as an external close, whatever the
    /// open sub-state.
    pub fn to_msg(self) -> Msg {
        match self {
            GateAction::Cancel => Msg::Editor(EditorMsg::Cancel),
            GateAction::Confirm => Msg::Editor(EditorMsg::Confirm),
            GateAction::OutsideClick | GateAction::Escape => {
                Msg::Editor(EditorMsg::OpenChange(false))
            }
        }
    }
}

/// Render contract for the confirmation gate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GateView {
    pub open: bool,
    pub anchor: Anchor,
    pub content: GateContent,
    pub cancel_label: String,
    pub confirm_label: String,
    /// Bound whenever the gate is open
    pub cancel: Option<GateAction>,
    /// Bound only during custom entry (and, if required, only for valid text)
    pub confirm: Option<GateAction>,
}

impl GateView {
    /// Derive the gate from the model
    pub fn from_model(model: &EditorModel, strings: &dyn StringGetter) -> Self {
        let content = match model.state() {
            EditorState::Resting => GateContent::None,
            EditorState::Selecting => GateContent::Presets {
                items: preset_items(model, strings),
            },
            EditorState::CustomEntry(input) => GateContent::CustomEntry {
                text: input.text().to_string(),
                max_percent: model.max_percent(),
            },
        };

        let open = model.is_editing();
        Self {
            open,
            anchor: Anchor::default(),
            content,
            cancel_label: strings.text(keys::CANCEL),
            confirm_label: strings.text(keys::CONFIRM),
            cancel: bound(model, GateAction::Cancel),
            confirm: bound(model, GateAction::Confirm),
        }
    }
}

fn preset_items(model: &EditorModel, strings: &dyn StringGetter) -> Vec<PresetItem> {
    let selected = model.selected_preset_index();
    model
        .presets()
        .iter()
        .enumerate()
        .map(|(i, preset)| PresetItem {
            label: preset.display_label(strings),
            value: preset.value.to_string(),
            selected: selected == Some(i),
        })
        .collect()
}

fn bound(model: &EditorModel, action: GateAction) -> Option<GateAction> {
    action_msg(model, action).map(|_| action)
}

/// Translate a gate action against the model, if the action is bound
///
/// Outside click and escape are honoured whenever the gate is open. The
/// `cancel`/`confirm` fields of [`GateView`] are derived from the same rule.
pub fn action_msg(model: &EditorModel, action: GateAction) -> Option<Msg> {
    let is_bound = match action {
        GateAction::Cancel | GateAction::OutsideClick | GateAction::Escape => model.is_editing(),
        GateAction::Confirm => model.can_confirm(),
    };
    is_bound.then(|| action.to_msg())
}
