//! Editor theme configuration.
//!
//! Resolves a config `ThemeDefinition` into the egui colors the code surface
//! paints with, and answers token colors for both presentation modes.

use codepane_config::{style_of, HexColor, ThemeDefinition};
use codepane_core::{PresentationMode, TokenKind};
use egui::{Color32, FontId};

/// Converts a `HexColor` to egui `Color32`.
pub(crate) fn hex_to_color32(c: HexColor) -> Color32 {
    Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

/// Configuration for the code surface appearance.
#[derive(Debug, Clone)]
pub struct EditorTheme {
    pub font_size: f32,
    pub font_id: FontId,
    pub bg_color: Color32,
    pub text_color: Color32,
    pub caret_color: Color32,
    pub selection_color: Color32,
    pub placeholder_color: Color32,
    pub border_color: Color32,
    pub gutter_bg: Color32,
    pub gutter_separator_color: Color32,
    pub line_number_color: Color32,
    pub error_line_number_color: Color32,
    pub error_line_tint: Color32,
    definition: ThemeDefinition,
}

impl Default for EditorTheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl EditorTheme {
    pub fn dark() -> Self {
        Self::from_config(&codepane_config::builtin_dark(), 14.0)
    }

    pub fn light() -> Self {
        Self::from_config(&codepane_config::builtin_light(), 14.0)
    }

    /// Builds an `EditorTheme` from a theme definition and font size.
    pub fn from_config(def: &ThemeDefinition, font_size: f32) -> Self {
        let s = &def.surface;
        Self {
            font_size,
            font_id: FontId::monospace(font_size),
            bg_color: hex_to_color32(s.bg),
            text_color: hex_to_color32(s.text),
            caret_color: hex_to_color32(s.caret),
            selection_color: hex_to_color32(s.selection),
            placeholder_color: hex_to_color32(s.placeholder),
            border_color: hex_to_color32(s.border),
            gutter_bg: hex_to_color32(s.gutter_bg),
            gutter_separator_color: hex_to_color32(s.gutter_separator),
            line_number_color: hex_to_color32(s.line_number),
            error_line_number_color: hex_to_color32(s.error_line_number),
            error_line_tint: hex_to_color32(s.error_line_tint),
            definition: def.clone(),
        }
    }

    /// Same colors at a different font size.
    pub fn with_font_size(&self, font_size: f32) -> Self {
        Self {
            font_size,
            font_id: FontId::monospace(font_size),
            ..self.clone()
        }
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn dark_mode(&self) -> bool {
        self.definition.dark_mode
    }

    pub fn token_color(&self, kind: TokenKind, mode: PresentationMode) -> Color32 {
        hex_to_color32(style_of(&self.definition, kind, mode))
    }
}
