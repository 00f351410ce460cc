//! Collapsible tree of a parsed JSON value, shown through the surface's
//! custom-content slot.

use eframe::egui;
use egui::RichText;
use serde_json::Value;

use codepane_core::{PresentationMode, TokenKind};

use crate::editor::EditorTheme;

/// Containers deeper than this start collapsed.
const OPEN_DEPTH: usize = 2;

pub(crate) fn show(ui: &mut egui::Ui, value: &Value, theme: &EditorTheme) {
    node(ui, "root", value, theme, 0, egui::Id::new("json_tree"));
}

fn node(
    ui: &mut egui::Ui,
    label: &str,
    value: &Value,
    theme: &EditorTheme,
    depth: usize,
    id: egui::Id,
) {
    match value {
        Value::Object(map) => {
            let header = key_text(format!("{label} {{{}}}", map.len()), theme);
            egui::CollapsingHeader::new(header)
                .id_salt(id)
                .default_open(depth < OPEN_DEPTH)
                .show(ui, |ui| {
                    for (name, child) in map {
                        node(ui, name, child, theme, depth + 1, id.with(name));
                    }
                });
        }
        Value::Array(items) => {
            let header = key_text(format!("{label} [{}]", items.len()), theme);
            egui::CollapsingHeader::new(header)
                .id_salt(id)
                .default_open(depth < OPEN_DEPTH)
                .show(ui, |ui| {
                    for (i, child) in items.iter().enumerate() {
                        node(ui, &i.to_string(), child, theme, depth + 1, id.with(i));
                    }
                });
        }
        leaf => {
            ui.horizontal(|ui| {
                ui.label(key_text(format!("{label}:"), theme));
                ui.label(
                    RichText::new(leaf.to_string())
                        .font(theme.font_id.clone())
                        .color(color(theme, leaf_kind(leaf))),
                );
            });
        }
    }
}

fn key_text(text: String, theme: &EditorTheme) -> RichText {
    RichText::new(text)
        .font(theme.font_id.clone())
        .color(color(theme, TokenKind::Key))
}

fn leaf_kind(value: &Value) -> TokenKind {
    match value {
        Value::String(_) => TokenKind::String,
        Value::Number(_) => TokenKind::Number,
        Value::Bool(_) => TokenKind::Boolean,
        Value::Null => TokenKind::Null,
        Value::Array(_) | Value::Object(_) => TokenKind::Bracket,
    }
}

fn color(theme: &EditorTheme, kind: TokenKind) -> egui::Color32 {
    theme.token_color(kind, PresentationMode::Syntactic)
}
