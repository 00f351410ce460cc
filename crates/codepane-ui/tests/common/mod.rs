#![allow(dead_code)]

use codepane_core::Language;
use codepane_ui::{App, StartupArgs};
use egui::epaint::TextShape;
use egui::Shape;
use egui_kittest::Harness;
use tempfile::TempDir;

/// Creates a standard test harness with the app at 1024x768.
///
/// The config lives in a fresh temp dir; keep the returned guard alive for
/// the duration of the test.
pub fn create_harness() -> (Harness<'static, App>, TempDir) {
    create_harness_with(StartupArgs::default())
}

pub fn create_harness_with(mut args: StartupArgs) -> (Harness<'static, App>, TempDir) {
    let dir = tempfile::tempdir().expect("create temp dir");
    args.config_path = Some(dir.path().join("codepane.json"));
    let harness = Harness::builder()
        .with_size(egui::Vec2::new(1024.0, 768.0))
        .build_eframe(move |cc| App::new(cc, args));
    (harness, dir)
}

/// Harness whose document starts with `text` in `language`.
pub fn harness_with_text(language: Language, text: &str) -> (Harness<'static, App>, TempDir) {
    create_harness_with(StartupArgs {
        language: Some(language),
        text: Some(text.to_string()),
        ..Default::default()
    })
}

/// Every text galley painted in the harness's last frame, in paint order.
pub fn painted_texts(harness: &Harness<'_, App>) -> Vec<TextShape> {
    let mut texts = Vec::new();
    for clipped in &harness.output().shapes {
        collect_texts(&clipped.shape, &mut texts);
    }
    texts
}

fn collect_texts(shape: &Shape, texts: &mut Vec<TextShape>) {
    match shape {
        Shape::Text(text) => texts.push(text.clone()),
        Shape::Vec(shapes) => shapes.iter().for_each(|s| collect_texts(s, texts)),
        _ => {}
    }
}

/// Colors of the gutter labels reading exactly `number`.
pub fn line_number_colors(harness: &Harness<'_, App>, number: usize) -> Vec<egui::Color32> {
    let label = number.to_string();
    painted_texts(harness)
        .into_iter()
        .filter(|t| t.galley.text() == label)
        .map(|t| t.fallback_color)
        .collect()
}
