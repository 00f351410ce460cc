//! Keyboard handling that runs before the input surface sees the frame's
//! events: host key passthrough and the Tab indent command.

use codepane_core::insert_indent;
use egui::text::{CCursor, CCursorRange};
use egui::text_edit::TextEditState;
use egui::{Event, Id, Key, Modifiers, Ui};

/// Hands every key press of this frame to the host.
pub(crate) fn forward_keys(ui: &Ui, on_key: &mut dyn FnMut(Key, Modifiers)) {
    let pressed: Vec<(Key, Modifiers)> = ui.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } => Some((*key, *modifiers)),
                _ => None,
            })
            .collect()
    });
    for (key, modifiers) in pressed {
        on_key(key, modifiers);
    }
}

/// Replaces the selection of input `id` with two spaces when Tab is pressed.
///
/// Only an unmodified Tab is consumed, so neither focus navigation nor the
/// input's own tab insertion sees it; Shift+Tab reaches the input untouched
/// and keeps its outdent behavior. The new caret is stored into the input's state
/// before the input runs this frame, so it lays out the new value with the
/// caret already in place. Returns the new caret char index.
pub(crate) fn handle_tab(ui: &Ui, id: Id, value: &mut String) -> Option<usize> {
    if !ui.input_mut(consume_plain_tab) {
        return None;
    }
    let mut state = TextEditState::load(ui.ctx(), id).unwrap_or_default();
    let selection = match state.cursor.char_range() {
        Some(range) => (range.primary.index, range.secondary.index),
        None => {
            let end = value.chars().count();
            (end, end)
        }
    };
    let splice = insert_indent(value, selection);
    *value = splice.value;
    state
        .cursor
        .set_char_range(Some(CCursorRange::one(CCursor::new(splice.caret))));
    state.store(ui.ctx(), id);
    tracing::debug!(
        "Indented at {}..{}, caret now {}",
        selection.0.min(selection.1),
        selection.0.max(selection.1),
        splice.caret
    );
    Some(splice.caret)
}

/// Removes unmodified Tab presses from this frame's events.
///
/// `consume_key` matches logically and would also swallow Shift+Tab.
fn consume_plain_tab(input: &mut egui::InputState) -> bool {
    let before = input.events.len();
    input.events.retain(|event| {
        !matches!(
            event,
            Event::Key {
                key: Key::Tab,
                pressed: true,
                modifiers,
                ..
            } if modifiers.matches_exact(Modifiers::NONE)
        )
    });
    input.events.len() != before
}
