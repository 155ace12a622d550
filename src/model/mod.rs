//! Editor model - the complete state of one tolerance editor
//!
//! This module contains the state types following the Elm Architecture pattern.
//! The model is only ever mutated by [`crate::update::update`].

pub mod preset;

pub use preset::{default_presets, LabelSource, PresetError, PresetOption, PresetValue};

use serde::{Deserialize, Serialize};

use crate::commands::FocusTarget;
use crate::config::EditorConfig;
use crate::editable::{InputConstraints, NumericInput};
use crate::tolerance::{parse_percent, to_display_percent, ToleranceValue};

// ============================================================================
// Modes
// ============================================================================

/// Identifies which interaction mode the editor is in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorMode {
    /// Closed; only the formatted value and its edit affordance are shown
    Resting,
    /// Preset picker is open
    Selecting,
    /// Free-text percent entry is open
    CustomEntry,
}

impl EditorMode {
    /// Whether the confirmation gate is shown
    pub fn is_open(self) -> bool {
        self != EditorMode::Resting
    }
}

/// Mode plus the data that only exists while in it
///
/// The edit buffer lives inside `CustomEntry`, so leaving that mode drops it
/// and the next custom-entry episode is always seeded fresh.
#[derive(Debug, Clone)]
pub enum EditorState {
    Resting,
    Selecting,
    CustomEntry(NumericInput),
}

impl EditorState {
    /// Get the mode for this state
    pub fn mode(&self) -> EditorMode {
        match self {
            EditorState::Resting => EditorMode::Resting,
            EditorState::Selecting => EditorMode::Selecting,
            EditorState::CustomEntry(_) => EditorMode::CustomEntry,
        }
    }
}

/// What confirm does with text that does not parse to a valid tolerance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmPolicy {
    /// Commit whatever the text parses to, NaN included
    #[default]
    PassThrough,
    /// Disable confirm until the text parses to a value in `0..=1`
    RequireValid,
}

// ============================================================================
// Model
// ============================================================================

/// State of one tolerance editor instance
#[derive(Debug, Clone)]
pub struct EditorModel {
    /// Last value supplied by the caller
    current_value: ToleranceValue,
    /// Quick-pick options, in display order
    presets: Vec<PresetOption>,
    /// Interaction mode and its data
    state: EditorState,
    /// Entry constraints for custom text
    input_constraints: InputConstraints,
    pub confirm_policy: ConfirmPolicy,
}

impl EditorModel {
    /// Create a resting editor showing `current_value`
    pub fn new(current_value: ToleranceValue, presets: Vec<PresetOption>) -> Self {
        Self {
            current_value,
            presets,
            state: EditorState::Resting,
            input_constraints: InputConstraints::default(),
            confirm_policy: ConfirmPolicy::default(),
        }
    }

    /// Create a resting editor from persisted configuration
    pub fn from_config(current_value: ToleranceValue, config: &EditorConfig) -> Self {
        Self {
            current_value,
            presets: config.presets.clone(),
            state: EditorState::Resting,
            input_constraints: InputConstraints::percent(config.max_percent),
            confirm_policy: config.confirm_policy,
        }
    }

    /// Set the confirm policy (builder pattern)
    pub fn with_confirm_policy(mut self, policy: ConfirmPolicy) -> Self {
        self.confirm_policy = policy;
        self
    }

    pub fn mode(&self) -> EditorMode {
        self.state.mode()
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn is_editing(&self) -> bool {
        self.mode().is_open()
    }

    pub fn current_value(&self) -> ToleranceValue {
        self.current_value
    }

    pub fn presets(&self) -> &[PresetOption] {
        &self.presets
    }

    pub fn input_constraints(&self) -> &InputConstraints {
        &self.input_constraints
    }

    /// Entry ceiling in percent
    pub fn max_percent(&self) -> f64 {
        self.input_constraints.max_value.unwrap_or(f64::INFINITY)
    }

    /// Custom-entry text, while in custom entry
    pub fn buffer_text(&self) -> Option<&str> {
        match &self.state {
            EditorState::CustomEntry(input) => Some(input.text()),
            _ => None,
        }
    }

    /// What confirm would commit right now
    pub fn pending_value(&self) -> Option<ToleranceValue> {
        self.buffer_text().map(parse_percent)
    }

    /// Whether the confirm action is bound
    pub fn can_confirm(&self) -> bool {
        match self.pending_value() {
            None => false,
            Some(value) => match self.confirm_policy {
                ConfirmPolicy::PassThrough => true,
                ConfirmPolicy::RequireValid => value.is_valid(),
            },
        }
    }

    /// Index of the preset matching the current value, if any
    pub fn selected_preset_index(&self) -> Option<usize> {
        self.presets
            .iter()
            .position(|p| p.value.value() == Some(self.current_value))
    }

    /// Whether a focus target is part of the rendered tree for this mode
    pub fn is_mounted(&self, target: FocusTarget) -> bool {
        match target {
            FocusTarget::PresetPicker => self.mode() == EditorMode::Selecting,
            FocusTarget::CustomInput => self.mode() == EditorMode::CustomEntry,
        }
    }

    // === Mutations used by the update functions ===

    pub(crate) fn set_current_value(&mut self, value: ToleranceValue) {
        self.current_value = value;
    }

    pub(crate) fn enter_resting(&mut self) {
        self.state = EditorState::Resting;
    }

    pub(crate) fn enter_selecting(&mut self) {
        self.state = EditorState::Selecting;
    }

    /// Enter custom entry with a buffer seeded from the current value
    ///
    /// A NaN or infinite value has no typeable form and seeds an empty field.
    pub(crate) fn enter_custom_entry(&mut self) {
        let seed = if self.current_value.get().is_finite() {
            to_display_percent(self.current_value)
        } else {
            String::new()
        };
        self.state =
            EditorState::CustomEntry(NumericInput::with_text(seed, self.input_constraints.clone()));
    }

    pub(crate) fn buffer_mut(&mut self) -> Option<&mut NumericInput> {
        match &mut self.state {
            EditorState::CustomEntry(input) => Some(input),
            _ => None,
        }
    }
}

impl Default for EditorModel {
    fn default() -> Self {
        Self::new(ToleranceValue::ZERO, default_presets())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_at(value: f64) -> EditorModel {
        EditorModel::new(ToleranceValue::new(value), default_presets())
    }

    #[test]
    fn test_new_model_is_resting() {
        let model = model_at(0.0025);
        assert_eq!(model.mode(), EditorMode::Resting);
        assert!(!model.is_editing());
        assert!(model.buffer_text().is_none());
    }

    #[test]
    fn test_custom_entry_seeds_from_current_value() {
        let mut model = model_at(0.0025);
        model.enter_custom_entry();
        assert_eq!(model.buffer_text(), Some("0.25"));
        assert_eq!(model.pending_value(), Some(ToleranceValue::new(0.0025)));
    }

    #[test]
    fn test_non_finite_value_seeds_empty_field() {
        let mut model = model_at(f64::NAN);
        model.enter_custom_entry();
        assert_eq!(model.buffer_text(), Some(""));
        assert!(model.buffer_mut().unwrap().insert_char('5'));
        assert_eq!(model.buffer_text(), Some("5"));
    }

    #[test]
    fn test_selected_preset_index() {
        assert_eq!(model_at(0.0025).selected_preset_index(), Some(1));
        assert_eq!(model_at(0.003).selected_preset_index(), None);
    }

    #[test]
    fn test_mounted_targets_follow_mode() {
        let mut model = model_at(0.001);
        assert!(!model.is_mounted(FocusTarget::PresetPicker));
        model.enter_selecting();
        assert!(model.is_mounted(FocusTarget::PresetPicker));
        assert!(!model.is_mounted(FocusTarget::CustomInput));
        model.enter_custom_entry();
        assert!(model.is_mounted(FocusTarget::CustomInput));
    }

    #[test]
    fn test_confirm_policy_gates_invalid_text() {
        let mut model = model_at(0.001).with_confirm_policy(ConfirmPolicy::RequireValid);
        model.enter_custom_entry();
        assert!(model.can_confirm());
        model.buffer_mut().unwrap().set_text(".");
        assert!(!model.can_confirm());

        model.confirm_policy = ConfirmPolicy::PassThrough;
        assert!(model.can_confirm());
    }
}
