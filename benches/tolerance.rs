//! Benchmarks for percent formatting and the Msg → Update → Cmd loop
//!
//! Run with: cargo bench tolerance

use tolerance_editor::messages::{EditorMsg, Msg};
use tolerance_editor::model::{default_presets, EditorModel};
use tolerance_editor::strings::EnglishStrings;
use tolerance_editor::tolerance::{parse_percent, to_display_percent};
use tolerance_editor::update::update;
use tolerance_editor::view::render;
use tolerance_editor::ToleranceValue;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

// ============================================================================
// Formatter / parser
// ============================================================================

#[divan::bench(args = [0.001, 0.0025, 0.07, 0.123456789])]
fn format_percent(value: f64) -> String {
    to_display_percent(divan::black_box(ToleranceValue::new(value)))
}

#[divan::bench(args = ["0.1", "12.5", " 5 ", "", "1e2", "abc"])]
fn parse(text: &str) -> ToleranceValue {
    parse_percent(divan::black_box(text))
}

// ============================================================================
// Update loop
// Measures a full open → custom → type → confirm episode
// ============================================================================

#[divan::bench(args = [100, 1000])]
fn update_custom_episode(iterations: usize) {
    let mut model = EditorModel::new(ToleranceValue::new(0.0025), default_presets());

    for _ in 0..iterations {
        divan::black_box(update(&mut model, Msg::activate()));
        divan::black_box(update(&mut model, Msg::select_custom()));
        divan::black_box(update(&mut model, Msg::set_text("")));
        for ch in "12.5".chars() {
            divan::black_box(update(&mut model, Msg::insert_char(ch)));
        }
        divan::black_box(update(&mut model, Msg::confirm()));
    }

    divan::black_box(&model);
}

#[divan::bench(args = [100, 1000])]
fn update_preset_pick(iterations: usize) {
    let mut model = EditorModel::new(ToleranceValue::new(0.0025), default_presets());

    for i in 0..iterations {
        divan::black_box(update(&mut model, Msg::activate()));
        let msg = Msg::Editor(EditorMsg::SelectPresetAt(i % 2));
        divan::black_box(update(&mut model, msg));
    }
}

// ============================================================================
// Render
// ============================================================================

#[divan::bench]
fn render_selecting(bencher: divan::Bencher) {
    let mut model = EditorModel::new(ToleranceValue::new(0.0025), default_presets());
    update(&mut model, Msg::activate());

    bencher.bench_local(|| render(divan::black_box(&model), &EnglishStrings));
}
