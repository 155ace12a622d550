//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use tolerance_editor::model::{default_presets, EditorModel};
use tolerance_editor::runtime::{HeadlessFocus, ToleranceEditor};
use tolerance_editor::ToleranceValue;

/// Starting value used across the scenario tests (0.25%)
pub const START: f64 = 0.0025;

/// Resting model with the default `0.1% / 0.25% / Custom` presets
pub fn test_model(current: f64) -> EditorModel {
    EditorModel::new(ToleranceValue::new(current), default_presets())
}

/// Everything the caller's callbacks received
#[derive(Debug, Default)]
pub struct Recorded {
    pub commits: Vec<ToleranceValue>,
    pub editing: Vec<bool>,
}

pub type Recorder = Rc<RefCell<Recorded>>;

/// Editor wired to a headless focus host and a shared callback recorder
pub fn test_editor(current: f64) -> (ToleranceEditor<HeadlessFocus>, Recorder) {
    editor_for(test_model(current))
}

pub fn editor_for(model: EditorModel) -> (ToleranceEditor<HeadlessFocus>, Recorder) {
    let recorded: Recorder = Rc::new(RefCell::new(Recorded::default()));
    let commits = Rc::clone(&recorded);
    let editing = Rc::clone(&recorded);
    let editor = ToleranceEditor::new(model, HeadlessFocus::new())
        .on_commit(move |v| commits.borrow_mut().commits.push(v))
        .on_editing_changed(move |open| editing.borrow_mut().editing.push(open));
    (editor, recorded)
}

/// Committed values as plain fractions
pub fn commits(recorded: &Recorder) -> Vec<f64> {
    recorded.borrow().commits.iter().map(|v| v.get()).collect()
}

pub fn editing_events(recorded: &Recorder) -> Vec<bool> {
    recorded.borrow().editing.clone()
}
