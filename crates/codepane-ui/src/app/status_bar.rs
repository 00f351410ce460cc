//! Status bar: caret position, line count, language and validation result.

use eframe::egui;
use egui::RichText;

use super::App;

/// 1-based `(line, column)` of a caret char index. Columns count chars.
pub(crate) fn caret_position(value: &str, caret: usize) -> (usize, usize) {
    let mut line = 1;
    let mut col = 1;
    for ch in value.chars().take(caret) {
        if ch == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }
    (line, col)
}

impl App {
    pub(crate) fn show_status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let (line, col) = caret_position(&self.value, self.caret.unwrap_or(0));
            ui.label(format!("Ln {line}, Col {col}"));
            ui.separator();
            ui.label(format!("{} lines", self.line_count));
            ui.separator();
            ui.label(format!("Syntax: {}", self.language.label()));
            if self.read_only {
                ui.separator();
                ui.label("Read-only");
            }
            if let Some(message) = &self.validation {
                ui.separator();
                ui.label(RichText::new(message).color(self.theme.error_line_number_color));
            }
        });
    }
}
