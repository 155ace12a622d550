//! Render contract for the whole editor
//!
//! Hosts draw whatever they like from an [`EditorView`]; the crate only
//! decides what is visible, what it says and what is interactive.

use serde::Serialize;

use crate::gate::GateView;
use crate::model::EditorModel;
use crate::strings::{keys, StringGetter};
use crate::tolerance::format_percent_label;

/// The always-visible formatted value with its edit affordance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriggerView {
    /// Current value as percent text (e.g. `0.25%`)
    pub text: String,
    /// Accessible label for the edit affordance
    pub edit_label: String,
}

/// Everything a host needs to draw one frame of the editor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditorView {
    pub trigger: TriggerView,
    pub gate: GateView,
}

/// Build the view for the current model state
pub fn render(model: &EditorModel, strings: &dyn StringGetter) -> EditorView {
    let text = format_percent_label(model.current_value());
    let edit_label = strings.get(keys::EDIT_SLIPPAGE, &[("VALUE", text.as_str())]);

    EditorView {
        trigger: TriggerView { text, edit_label },
        gate: GateView::from_model(model, strings),
    }
}

impl EditorView {
    /// Plain-text rendering for terminals and logs
    pub fn to_text(&self) -> String {
        use crate::gate::GateContent;

        let mut out = format!("[{}] ✎", self.trigger.text);
        match &self.gate.content {
            GateContent::None => {}
            GateContent::Presets { items } => {
                let options: Vec<String> = items
                    .iter()
                    .map(|item| {
                        if item.selected {
                            format!("(•) {}", item.label)
                        } else {
                            format!("( ) {}", item.label)
                        }
                    })
                    .collect();
                out.push_str(&format!("\n  {}", options.join("  ")));
                out.push_str(&format!("\n  <{}>", self.gate.cancel_label));
            }
            GateContent::CustomEntry { text, max_percent } => {
                out.push_str(&format!("\n  |{}|% (max {})", text, max_percent));
                let confirm = if self.gate.confirm.is_some() {
                    format!("<{}>", self.gate.confirm_label)
                } else {
                    format!("<{}: disabled>", self.gate.confirm_label)
                };
                out.push_str(&format!("\n  <{}> {}", self.gate.cancel_label, confirm));
            }
        }
        out
    }
}
