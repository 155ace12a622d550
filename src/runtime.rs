//! Component runtime - executes commands against the host
//!
//! `ToleranceEditor` is what a host embeds. It owns the model, the caller's
//! callbacks, a focus host and the post-render task queue. Hosts feed it
//! gestures through [`ToleranceEditor::dispatch`], draw [`ToleranceEditor::view`]
//! and call [`ToleranceEditor::after_paint`] once the frame is on screen.

use std::collections::VecDeque;
use std::fmt;

use crate::commands::{Cmd, FocusTarget};
use crate::gate::GateAction;
use crate::messages::Msg;
use crate::model::EditorModel;
use crate::strings::StringGetter;
use crate::tolerance::ToleranceValue;
use crate::update::update;
use crate::view::{render, EditorView};

// ============================================================================
// Focus
// ============================================================================

/// Why a focus request could not be honoured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusError {
    /// The control is not (or no longer) in the render tree
    Detached(FocusTarget),
}

impl fmt::Display for FocusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FocusError::Detached(target) => write!(f, "{:?} is not attached", target),
        }
    }
}

impl std::error::Error for FocusError {}

/// The host's focus system
pub trait FocusHost {
    /// Move input focus to `target`
    fn focus(&mut self, target: FocusTarget) -> Result<(), FocusError>;
}

/// In-memory focus host that records every focus change
#[derive(Debug, Clone, Default)]
pub struct HeadlessFocus {
    focused: Option<FocusTarget>,
    history: Vec<FocusTarget>,
}

impl HeadlessFocus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently focused control
    pub fn focused(&self) -> Option<FocusTarget> {
        self.focused
    }

    /// Every successful focus, oldest first
    pub fn history(&self) -> &[FocusTarget] {
        &self.history
    }
}

impl FocusHost for HeadlessFocus {
    fn focus(&mut self, target: FocusTarget) -> Result<(), FocusError> {
        self.focused = Some(target);
        self.history.push(target);
        Ok(())
    }
}

// ============================================================================
// Post-render tasks
// ============================================================================

/// Work that must wait until the current render pass has completed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostRenderTask {
    Focus(FocusTarget),
}

/// FIFO of single-shot tasks drained once per paint
#[derive(Debug, Clone, Default)]
pub struct PostRenderQueue {
    tasks: VecDeque<PostRenderTask>,
}

impl PostRenderQueue {
    pub fn push(&mut self, task: PostRenderTask) {
        self.tasks.push_back(task);
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Take every pending task, leaving the queue empty
    ///
    /// Tasks scheduled while the drained ones run land in the next paint.
    pub fn drain(&mut self) -> Vec<PostRenderTask> {
        self.tasks.drain(..).collect()
    }
}

// ============================================================================
// Component
// ============================================================================

type CommitCallback = Box<dyn FnMut(ToleranceValue)>;
type EditingCallback = Box<dyn FnMut(bool)>;

/// An embeddable tolerance editor
pub struct ToleranceEditor<H: FocusHost> {
    model: EditorModel,
    host: H,
    post_render: PostRenderQueue,
    on_commit: Option<CommitCallback>,
    on_editing_changed: Option<EditingCallback>,
}

impl<H: FocusHost> ToleranceEditor<H> {
    pub fn new(model: EditorModel, host: H) -> Self {
        Self {
            model,
            host,
            post_render: PostRenderQueue::default(),
            on_commit: None,
            on_editing_changed: None,
        }
    }

    /// Receive committed values (builder pattern)
    pub fn on_commit(mut self, callback: impl FnMut(ToleranceValue) + 'static) -> Self {
        self.on_commit = Some(Box::new(callback));
        self
    }

    /// Be told when the editor opens or closes (builder pattern)
    pub fn on_editing_changed(mut self, callback: impl FnMut(bool) + 'static) -> Self {
        self.on_editing_changed = Some(Box::new(callback));
        self
    }

    pub fn model(&self) -> &EditorModel {
        &self.model
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Tasks waiting for the next paint
    pub fn pending_post_render(&self) -> usize {
        self.post_render.len()
    }

    /// Feed one gesture or signal through the state machine
    ///
    /// Returns whether the host should redraw.
    pub fn dispatch(&mut self, msg: Msg) -> bool {
        match update(&mut self.model, msg) {
            Some(cmd) => {
                let redraw = cmd.needs_redraw();
                self.process_cmd(cmd);
                redraw
            }
            None => false,
        }
    }

    /// Report a gate action, ignoring actions that are not currently bound
    pub fn gate_action(&mut self, action: GateAction) -> bool {
        match crate::gate::action_msg(&self.model, action) {
            Some(msg) => self.dispatch(msg),
            None => false,
        }
    }

    /// The caller re-rendered with a (possibly) new value
    pub fn set_current_value(&mut self, value: ToleranceValue) -> bool {
        if value == self.model.current_value() {
            return false;
        }
        self.dispatch(Msg::set_current_value(value))
    }

    /// Current render contract
    pub fn view(&self, strings: &dyn StringGetter) -> EditorView {
        render(&self.model, strings)
    }

    /// Run deferred work now that the frame has been painted
    pub fn after_paint(&mut self) {
        for task in self.post_render.drain() {
            match task {
                PostRenderTask::Focus(target) => self.focus_now(target),
            }
        }
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None | Cmd::Redraw => {}
            Cmd::Commit(value) => {
                tracing::debug!(value = value.get(), "commit");
                if let Some(callback) = self.on_commit.as_mut() {
                    callback(value);
                }
            }
            Cmd::EditingChanged(editing) => {
                if let Some(callback) = self.on_editing_changed.as_mut() {
                    callback(editing);
                }
            }
            Cmd::Focus(target) => self.focus_now(target),
            Cmd::FocusAfterPaint(target) => {
                tracing::trace!(target: "focus", focus = ?target, "deferred until after paint");
                self.post_render.push(PostRenderTask::Focus(target));
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }

    /// Focus a control, treating a detached target as a no-op
    fn focus_now(&mut self, target: FocusTarget) {
        if !self.model.is_mounted(target) {
            tracing::trace!(target: "focus", focus = ?target, "skipped, control not mounted");
            return;
        }
        if let Err(e) = self.host.focus(target) {
            tracing::trace!(target: "focus", error = %e, "skipped");
        }
    }
}

impl<H: FocusHost + fmt::Debug> fmt::Debug for ToleranceEditor<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToleranceEditor")
            .field("model", &self.model)
            .field("host", &self.host)
            .field("post_render", &self.post_render)
            .finish_non_exhaustive()
    }
}
