//! Terminal driver for the tolerance editor
//!
//! Reads gestures (one per line, or a `;`-separated `--exec` script), feeds
//! them through the editor and prints the resulting view after each step.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;

use tolerance_editor::cli::{
    CliArgs, Gesture, GestureSource, OutputFormat, PresetRef, StartupConfig,
};
use tolerance_editor::gate::{GateAction, GateContent};
use tolerance_editor::messages::{EditorMsg, InputMsg, Msg};
use tolerance_editor::runtime::{HeadlessFocus, ToleranceEditor};
use tolerance_editor::strings::{EnglishStrings, SupportedLocale};
use tolerance_editor::{EditorConfig, EditorModel, ToleranceValue};

/// Events the caller's callbacks have seen since the last step
#[derive(Debug, Default)]
struct Outbox {
    commits: Vec<ToleranceValue>,
    editing: Vec<bool>,
}

struct Driver {
    editor: ToleranceEditor<HeadlessFocus>,
    outbox: Rc<RefCell<Outbox>>,
    output: OutputFormat,
}

impl Driver {
    fn new(startup: &StartupConfig, config: &EditorConfig) -> Self {
        let outbox = Rc::new(RefCell::new(Outbox::default()));
        let model = EditorModel::from_config(startup.initial_value, config);

        let commits = Rc::clone(&outbox);
        let editing = Rc::clone(&outbox);
        let editor = ToleranceEditor::new(model, HeadlessFocus::new())
            .on_commit(move |value| commits.borrow_mut().commits.push(value))
            .on_editing_changed(move |open| editing.borrow_mut().editing.push(open));

        Self {
            editor,
            outbox,
            output: startup.output,
        }
    }

    /// Run one gesture. Returns false when the session should end.
    fn step(&mut self, gesture: Gesture, out: &mut impl Write) -> Result<bool> {
        let focus_before = self.editor.host().focused();

        match gesture {
            Gesture::Open => {
                self.editor.dispatch(Msg::activate());
            }
            Gesture::Pick(preset) => match self.resolve_preset(&preset) {
                Some(index) => {
                    self.editor.dispatch(Msg::Editor(EditorMsg::SelectPresetAt(index)));
                }
                None => writeln!(out, "no preset {:?} is showing", preset)?,
            },
            Gesture::Type(text) => {
                for ch in text.chars() {
                    self.editor.dispatch(Msg::insert_char(ch));
                }
            }
            Gesture::Backspace => {
                self.editor
                    .dispatch(Msg::Editor(EditorMsg::Input(InputMsg::DeleteBackward)));
            }
            Gesture::Clear => {
                self.editor
                    .dispatch(Msg::Editor(EditorMsg::Input(InputMsg::Clear)));
            }
            Gesture::Confirm => {
                self.editor.gate_action(GateAction::Confirm);
            }
            Gesture::Cancel => {
                self.editor.gate_action(GateAction::Cancel);
            }
            Gesture::Close => {
                self.editor.gate_action(GateAction::Escape);
            }
            Gesture::Paint => self.editor.after_paint(),
            Gesture::Value(v) => {
                self.editor.set_current_value(ToleranceValue::new(v));
            }
            Gesture::Show => {}
            Gesture::Quit => return Ok(false),
        }

        self.flush_outbox(out)?;

        let focus_after = self.editor.host().focused();
        if focus_after != focus_before {
            if let Some(target) = focus_after {
                writeln!(out, "focus -> {:?}", target)?;
            }
        }

        self.print_view(out)?;
        Ok(true)
    }

    /// Report callback activity, then play the caller: feed commits back as
    /// the new current value.
    fn flush_outbox(&mut self, out: &mut impl Write) -> Result<()> {
        let Outbox { commits, editing } = std::mem::take(&mut *self.outbox.borrow_mut());
        for open in editing {
            writeln!(out, "editing changed -> {}", open)?;
        }
        for value in commits {
            writeln!(out, "commit -> {} ({})", value.get(), value)?;
            self.editor.set_current_value(value);
        }
        Ok(())
    }

    fn resolve_preset(&self, preset: &PresetRef) -> Option<usize> {
        let view = self.editor.view(&EnglishStrings);
        let GateContent::Presets { items } = view.gate.content else {
            return None;
        };
        match preset {
            PresetRef::Index(i) => (*i < items.len()).then_some(*i),
            PresetRef::Label(label) => {
                let wanted = label.trim_end_matches('%');
                items.iter().position(|item| {
                    item.label.trim_end_matches('%').eq_ignore_ascii_case(wanted)
                        || item.value.eq_ignore_ascii_case(label)
                })
            }
        }
    }

    fn print_view(&self, out: &mut impl Write) -> Result<()> {
        let view = self.editor.view(&EnglishStrings);
        match self.output {
            OutputFormat::Text => writeln!(out, "{}", view.to_text())?,
            OutputFormat::Json => {
                let json = serde_json::to_string(&view).context("Failed to serialize view")?;
                writeln!(out, "{}", json)?;
            }
        }
        Ok(())
    }
}

fn load_config(startup: &StartupConfig) -> Result<EditorConfig> {
    match &startup.config_path {
        Some(path) => EditorConfig::load_from(path)
            .with_context(|| format!("Could not use config {}", path.display())),
        None => Ok(EditorConfig::load()),
    }
}

fn main() -> Result<()> {
    tolerance_editor::tracing::init();

    let startup = CliArgs::parse()
        .into_config()
        .map_err(anyhow::Error::msg)?;
    let config = load_config(&startup)?;
    if config.locale != SupportedLocale::En {
        tracing::warn!(
            "No bundled strings for {}, falling back to English",
            config.locale
        );
    }

    let mut driver = Driver::new(&startup, &config);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    driver.print_view(&mut out)?;

    match &startup.source {
        GestureSource::Script(gestures) => {
            for gesture in gestures.iter().cloned() {
                if !driver.step(gesture, &mut out)? {
                    break;
                }
            }
        }
        GestureSource::Stdin => {
            for line in io::stdin().lock().lines() {
                let line = line.context("Failed to read stdin")?;
                match line.parse::<Gesture>() {
                    Ok(gesture) => {
                        if !driver.step(gesture, &mut out)? {
                            break;
                        }
                    }
                    Err(e) => writeln!(out, "{}", e)?,
                }
                out.flush()?;
            }
        }
    }

    Ok(())
}
