/// Tests for the code surface through the full app harness.
///
/// The surface paints its own glyphs, so behavior is checked through host
/// state after synthetic input and through the shapes of the last frame.
mod common;

use codepane_core::{tokenize, Language, PresentationMode};
use codepane_ui::StartupArgs;
use egui::accesskit::Role;
use egui::{Key, Modifiers};
use egui_kittest::kittest::Queryable;

use common::{
    create_harness, create_harness_with, harness_with_text, line_number_colors, painted_texts,
};

#[test]
fn test_surface_renders_with_text() {
    let (mut harness, _dir) = harness_with_text(Language::Json, "{\"a\": 1}");
    harness.run();
    assert_eq!(harness.state().value, "{\"a\": 1}");
    assert!(harness.state().error_lines.is_empty());
}

#[test]
fn test_surface_takes_focus_on_start() {
    let (mut harness, _dir) = create_harness();
    harness.run();
    assert!(harness.ctx.memory(|m| m.focused().is_some()));
}

#[test]
fn test_tab_inserts_two_spaces_at_caret() {
    let (mut harness, _dir) = harness_with_text(Language::PlainText, "ab");
    harness.run();

    harness.key_press(Key::Tab);
    harness.run();

    let app = harness.state();
    assert_eq!(app.value, "ab  ");
    assert_eq!(app.caret, Some(4));
    assert_eq!(app.change_count, 1);
}

#[test]
fn test_tab_twice_keeps_caret_after_indent() {
    let (mut harness, _dir) = create_harness();
    harness.run();

    harness.key_press(Key::Tab);
    harness.run();
    harness.key_press(Key::Tab);
    harness.run();

    assert_eq!(harness.state().value, "    ");
    assert_eq!(harness.state().caret, Some(4));
    assert_eq!(harness.state().change_count, 2);
}

#[test]
fn test_tab_is_ignored_when_read_only() {
    let (mut harness, _dir) = create_harness_with(StartupArgs {
        text: Some("locked".to_string()),
        read_only: true,
        ..Default::default()
    });
    harness.run();

    harness.key_press(Key::Tab);
    harness.run();

    assert_eq!(harness.state().value, "locked");
    assert_eq!(harness.state().change_count, 0);
}

#[test]
fn test_shift_tab_is_left_to_the_input() {
    let (mut harness, _dir) = harness_with_text(Language::PlainText, "ab");
    harness.run();

    harness.key_press_modifiers(Modifiers::SHIFT, Key::Tab);
    harness.run();
    assert_eq!(harness.state().value, "ab");

    // The input's own Shift+Tab outdents a line that starts with spaces.
    let (mut harness, _dir) = harness_with_text(Language::PlainText, "    ab");
    harness.run();
    harness.key_press_modifiers(Modifiers::SHIFT, Key::Tab);
    harness.run();
    assert_eq!(harness.state().value, "ab");
}

#[test]
fn test_typing_reports_change_with_line_count() {
    let (mut harness, _dir) = create_harness();
    harness.run();

    harness.event(egui::Event::Text("x".to_string()));
    harness.run();
    harness.key_press(Key::Enter);
    harness.run();

    let app = harness.state();
    assert_eq!(app.value, "x\n");
    assert_eq!(app.line_count, 2);
    assert_eq!(app.change_count, 2);
}

#[test]
fn test_typing_is_ignored_when_read_only() {
    let (mut harness, _dir) = create_harness_with(StartupArgs {
        read_only: true,
        ..Default::default()
    });
    harness.run();

    harness.event(egui::Event::Text("x".to_string()));
    harness.run();

    assert_eq!(harness.state().value, "");
    assert_eq!(harness.state().change_count, 0);
}

#[test]
fn test_key_presses_reach_the_host() {
    let (mut harness, _dir) = create_harness();
    harness.run();

    harness.key_press(Key::F5);
    harness.run();

    assert_eq!(harness.state().last_key, Some(Key::F5));
}

#[test]
fn test_invalid_json_edit_flags_line() {
    let (mut harness, _dir) = harness_with_text(Language::Json, "{\n  \"a\": 1\n}");
    harness.run();
    assert!(harness.state().error_lines.is_empty());

    // Typed after the closing brace: trailing characters on line 3.
    harness.event(egui::Event::Text("x".to_string()));
    harness.run();

    let app = harness.state();
    assert_eq!(app.value, "{\n  \"a\": 1\n}x");
    assert_eq!(app.change_count, 1);
    assert!(app.error_lines.contains(3));
    assert_eq!(app.error_lines.len(), 1);
    assert!(app.validation.is_some());
    let error_color = app.theme.error_line_number_color;
    assert_eq!(line_number_colors(&harness, 3), vec![error_color, error_color]);
}

#[test]
fn test_error_line_numbers_use_attention_color() {
    let (mut harness, _dir) = harness_with_text(Language::Json, "{\n  \"a\": ,\n}");
    harness.run();

    let theme = harness.state().theme.clone();
    assert!(harness.state().error_lines.contains(2));
    assert_eq!(line_number_colors(&harness, 1), vec![theme.line_number_color]);
    assert_eq!(
        line_number_colors(&harness, 2),
        vec![theme.error_line_number_color, theme.error_line_number_color]
    );
    assert_eq!(line_number_colors(&harness, 3), vec![theme.line_number_color]);
}

#[test]
fn test_placeholder_disappears_once_typed() {
    let (mut harness, _dir) = create_harness();
    harness.run();
    let shows_placeholder = |harness: &egui_kittest::Harness<'_, codepane_ui::App>| {
        painted_texts(harness)
            .iter()
            .any(|t| t.galley.text().contains("Paste or type here"))
    };
    assert!(shows_placeholder(&harness));

    harness.event(egui::Event::Text("x".to_string()));
    harness.run();
    assert_eq!(harness.state().value, "x");
    assert!(!shows_placeholder(&harness));
}

#[test]
fn test_error_lines_do_not_change_the_text() {
    let (mut harness, _dir) = harness_with_text(Language::Json, "{\n  \"a\": ,\n}");
    harness.run();
    assert!(!harness.state().error_lines.is_empty());
    assert_eq!(harness.state().value, "{\n  \"a\": ,\n}");
}

#[test]
fn test_fill_height_without_line_numbers_fills_the_panel() {
    let (mut harness, _dir) = create_harness_with(StartupArgs {
        text: Some("one\ntwo".to_string()),
        fill_height: true,
        hide_line_numbers: true,
        ..Default::default()
    });
    harness.run();
    assert!(line_number_colors(&harness, 1).is_empty());
    assert!(line_number_colors(&harness, 2).is_empty());
    let filled = harness.get_by_role(Role::MultilineTextInput).rect().height();

    let (mut harness, _dir) = harness_with_text(Language::PlainText, "one\ntwo");
    harness.run();
    assert_eq!(line_number_colors(&harness, 2).len(), 1);
    let sized = harness.get_by_role(Role::MultilineTextInput).rect().height();

    // A two-line document sizes to the minimum box unless it fills the panel.
    assert!(filled > sized + 200.0, "filled {filled}, sized {sized}");
}

#[test]
fn test_random_string_mode_colors_character_classes() {
    let text = "aB3!xY9#";
    let (mut harness, _dir) = harness_with_text(Language::RandomString, text);
    harness.run();

    let theme = harness.state().theme.clone();
    let overlay = painted_texts(&harness)
        .into_iter()
        .find(|t| t.galley.text() == text && t.galley.job.sections.len() > 1)
        .expect("overlay galley painted");
    let painted: Vec<_> = overlay
        .galley
        .job
        .sections
        .iter()
        .map(|section| section.format.color)
        .collect();
    let expected: Vec<_> = tokenize(Language::RandomString, text)
        .iter()
        .map(|token| theme.token_color(token.kind, PresentationMode::RandomString))
        .collect();
    assert_eq!(painted.len(), 8);
    assert_eq!(painted, expected);
    assert_ne!(painted[0], painted[2]);
}

#[test]
fn test_tree_view_keeps_value() {
    let (mut harness, _dir) =
        harness_with_text(Language::Json, "{\"user\": {\"name\": \"Alice\", \"age\": 30}}");
    harness.state_mut().tree_view = true;
    harness.run();
    assert_eq!(
        harness.state().value,
        "{\"user\": {\"name\": \"Alice\", \"age\": 30}}"
    );
}
