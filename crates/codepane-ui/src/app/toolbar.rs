//! Toolbar: language picker, surface toggles and theme picker.

use eframe::egui;
use egui::RichText;

use codepane_core::Language;

use super::{App, ThemeMode};

impl App {
    pub(crate) fn show_toolbar(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("codepane").strong().color(self.accent_color));
            ui.separator();

            let mut language = self.language;
            egui::ComboBox::from_label("Language")
                .selected_text(language.label())
                .show_ui(ui, |ui| {
                    for lang in Language::ALL {
                        ui.selectable_value(&mut language, lang, lang.label());
                    }
                });
            self.set_language(language);

            ui.separator();
            ui.checkbox(&mut self.read_only, "Read-only mode");
            ui.checkbox(&mut self.show_line_numbers, "Line numbers");
            ui.checkbox(&mut self.fill_height, "Fill height");
            ui.add_enabled(
                self.language == Language::Json,
                egui::Checkbox::new(&mut self.tree_view, "Tree view"),
            );

            ui.separator();
            let theme_names: Vec<String> = std::iter::once("System".to_string())
                .chain(self.available_themes.iter().map(|t| t.name.clone()))
                .collect();
            let current_label = self.theme_mode.0.clone();
            egui::ComboBox::from_label("Theme")
                .selected_text(&current_label)
                .show_ui(ui, |ui| {
                    for name in &theme_names {
                        if ui
                            .selectable_label(*name == current_label, name)
                            .clicked()
                        {
                            self.set_theme_mode(ThemeMode(name.clone()), ctx);
                        }
                    }
                });
        });
    }
}
