//! Demo host: one code surface with a toolbar, a status bar and JSON
//! validation wired to the error annotations.

mod status_bar;
mod toolbar;
mod tree_view;

use std::path::PathBuf;

use eframe::egui;
use egui::{Color32, Key};

use codepane_config::{ChromeColors, EditorConfig, ThemeDefinition};
use codepane_core::{ErrorLines, Language};

use crate::editor::{hex_to_color32, CodeSurface, EditorTheme};

/// Arguments passed from the command line to the application.
#[derive(Debug, Clone, Default)]
pub struct StartupArgs {
    /// Overrides the configured default language.
    pub language: Option<Language>,
    /// Initial document text.
    pub text: Option<String>,
    pub read_only: bool,
    pub fill_height: bool,
    pub hide_line_numbers: bool,
    /// Config file to use instead of the platform default.
    pub config_path: Option<PathBuf>,
}

/// Which color theme to use.
///
/// Wraps a string name. Special values: `"System"`, `"Dark"`, `"Light"`.
/// Any other value refers to a custom theme name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeMode(pub String);

impl Default for ThemeMode {
    fn default() -> Self {
        Self::system()
    }
}

impl ThemeMode {
    pub fn system() -> Self {
        Self("System".to_string())
    }

    pub fn dark() -> Self {
        Self("Dark".to_string())
    }

    pub fn light() -> Self {
        Self("Light".to_string())
    }

    pub fn is_system(&self) -> bool {
        self.0 == "System"
    }

    /// Resolves "System" to "Dark" or "Light" from the OS preference.
    /// Non-system modes return their own name.
    pub fn resolve(&self) -> &str {
        if self.is_system() {
            match dark_light::detect() {
                Ok(dark_light::Mode::Light) => "Light",
                _ => "Dark",
            }
        } else {
            &self.0
        }
    }
}

/// Host state. The surface owns nothing; everything it shows comes from here.
pub struct App {
    pub value: String,
    pub language: Language,
    pub read_only: bool,
    pub fill_height: bool,
    pub show_line_numbers: bool,
    /// Show parsed JSON as a tree instead of the editor.
    pub tree_view: bool,
    pub error_lines: ErrorLines,
    /// Parse failure of the current JSON value.
    pub validation: Option<String>,
    pub line_count: usize,
    pub caret: Option<usize>,
    /// Edits reported through `on_change`.
    pub change_count: usize,
    pub last_key: Option<Key>,
    pub theme: EditorTheme,
    pub theme_mode: ThemeMode,
    pub available_themes: Vec<ThemeDefinition>,
    parsed: Option<serde_json::Value>,
    min_height: f32,
    max_height: f32,
    accent_color: Color32,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, args: StartupArgs) -> Self {
        let config_path = args.config_path.clone().unwrap_or_else(EditorConfig::config_path);
        let config = EditorConfig::load_or_create(&config_path);
        let mut app = Self::from_config(&config, args);
        app.set_theme_mode(ThemeMode(config.current_theme.clone()), &cc.egui_ctx);
        tracing::info!(
            "Editing {} lines as {}",
            app.line_count,
            app.language.label()
        );
        app
    }

    fn from_config(config: &EditorConfig, args: StartupArgs) -> Self {
        let value = args.text.unwrap_or_default();
        let mut app = Self {
            line_count: codepane_core::compute_lines(&value).len(),
            value,
            language: args.language.unwrap_or_else(|| config.language()),
            read_only: args.read_only,
            fill_height: args.fill_height || config.fill_height,
            show_line_numbers: config.show_line_numbers && !args.hide_line_numbers,
            tree_view: false,
            error_lines: ErrorLines::new(),
            validation: None,
            caret: None,
            change_count: 0,
            last_key: None,
            theme: EditorTheme::dark().with_font_size(config.font_size),
            theme_mode: ThemeMode::dark(),
            available_themes: config.themes.clone(),
            parsed: None,
            min_height: config.min_height,
            max_height: config.max_height,
            accent_color: hex_to_color32(ChromeColors::default().accent),
        };
        app.validate();
        app
    }

    /// Re-checks the value for the current language. Only JSON is validated;
    /// a parse failure flags the reported line.
    pub fn validate(&mut self) {
        self.error_lines.clear();
        self.validation = None;
        self.parsed = None;
        if self.language != Language::Json || self.value.trim().is_empty() {
            return;
        }
        match serde_json::from_str::<serde_json::Value>(&self.value) {
            Ok(value) => self.parsed = Some(value),
            Err(e) => {
                self.error_lines.insert(e.line().max(1));
                self.validation = Some(format!("Invalid JSON: {e}"));
            }
        }
    }

    pub fn set_language(&mut self, language: Language) {
        if self.language != language {
            self.language = language;
            self.validate();
        }
    }

    /// Switches to a new theme mode and applies all theme changes.
    pub fn set_theme_mode(&mut self, mode: ThemeMode, ctx: &egui::Context) {
        self.theme_mode = mode;
        let resolved_name = self.theme_mode.resolve().to_string();

        let theme_def = match self
            .available_themes
            .iter()
            .find(|t| t.name == resolved_name)
            .cloned()
        {
            Some(def) => def,
            None => {
                tracing::warn!(
                    "Theme '{}' not found, falling back to System",
                    resolved_name
                );
                self.theme_mode = ThemeMode::system();
                let fallback_name = self.theme_mode.resolve().to_string();
                self.available_themes
                    .iter()
                    .find(|t| t.name == fallback_name)
                    .cloned()
                    .unwrap_or_else(codepane_config::builtin_dark)
            }
        };

        self.theme = EditorTheme::from_config(&theme_def, self.theme.font_size);
        Self::apply_theme_visuals(ctx, &theme_def.chrome, theme_def.dark_mode);
        self.accent_color = hex_to_color32(theme_def.chrome.accent);
    }

    /// Applies egui visuals from the theme's chrome colors.
    fn apply_theme_visuals(ctx: &egui::Context, chrome: &ChromeColors, dark_mode: bool) {
        let mut visuals = if dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.panel_fill = hex_to_color32(chrome.panel_fill);
        visuals.faint_bg_color = hex_to_color32(chrome.faint_bg);
        visuals.extreme_bg_color = hex_to_color32(chrome.extreme_bg);
        visuals.widgets.inactive.bg_fill = hex_to_color32(chrome.widget_inactive_bg);
        visuals.widgets.hovered.bg_fill = hex_to_color32(chrome.widget_hovered_bg);
        visuals.widgets.active.bg_fill = hex_to_color32(chrome.widget_active_bg);

        let widget_rounding = egui::CornerRadius::same(4);
        visuals.widgets.noninteractive.corner_radius = widget_rounding;
        visuals.widgets.inactive.corner_radius = widget_rounding;
        visuals.widgets.hovered.corner_radius = widget_rounding;
        visuals.widgets.active.corner_radius = widget_rounding;
        visuals.menu_corner_radius = egui::CornerRadius::same(4);

        ctx.set_visuals(visuals);

        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::Vec2::new(8.0, 6.0);
            style.spacing.button_padding = egui::Vec2::new(8.0, 4.0);
        });
    }

    /// Shows the surface, or the JSON tree in the same chrome.
    fn show_editor(&mut self, ui: &mut egui::Ui) {
        let mut edited: Option<usize> = None;
        let mut last_key = None;

        let surface = CodeSurface::new(&mut self.value)
            .language(self.language)
            .read_only(self.read_only)
            .placeholder("Paste or type here…")
            .error_lines(&self.error_lines)
            .fill_height(self.fill_height)
            .show_line_numbers(self.show_line_numbers)
            .height_range(self.min_height, self.max_height)
            .theme(&self.theme)
            .auto_focus(true)
            .on_change(|_, meta| edited = Some(meta.line_count))
            .on_key(|key, _| last_key = Some(key));

        let output = match (&self.parsed, self.tree_view) {
            (Some(parsed), true) => {
                let theme = &self.theme;
                surface
                    .custom_content(move |ui| tree_view::show(ui, parsed, theme))
                    .show(ui)
            }
            _ => surface.show(ui),
        };

        if output.caret.is_some() {
            self.caret = output.caret;
        }
        if last_key.is_some() {
            self.last_key = last_key;
        }
        if let Some(line_count) = edited {
            self.line_count = line_count;
            self.change_count += 1;
            self.validate();
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let panel_fill = ctx.style().visuals.panel_fill;
        let faint_bg = ctx.style().visuals.faint_bg_color;

        egui::TopBottomPanel::top("toolbar")
            .frame(
                egui::Frame::new()
                    .fill(panel_fill)
                    .inner_margin(egui::Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| self.show_toolbar(ui, ctx));

        egui::TopBottomPanel::bottom("status_bar")
            .max_height(24.0)
            .frame(
                egui::Frame::new()
                    .fill(faint_bg)
                    .inner_margin(egui::Margin::symmetric(8, 2)),
            )
            .show(ctx, |ui| self.show_status_bar(ui));

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(panel_fill)
                    .inner_margin(egui::Margin::same(8)),
            )
            .show(ctx, |ui| self.show_editor(ui));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app(language: Language, text: &str) -> App {
        App::from_config(
            &EditorConfig::default(),
            StartupArgs {
                language: Some(language),
                text: Some(text.to_string()),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_valid_json_has_no_error_lines() {
        let app = test_app(Language::Json, "{\"a\": [1, 2]}");
        assert!(app.error_lines.is_empty());
        assert!(app.validation.is_none());
        assert!(app.parsed.is_some());
    }

    #[test]
    fn test_invalid_json_flags_the_failing_line() {
        let app = test_app(Language::Json, "{\n  \"a\": 1,\n  \"b\": \n}");
        assert!(app.error_lines.contains(4));
        assert_eq!(app.error_lines.len(), 1);
        assert!(app.validation.as_deref().unwrap().starts_with("Invalid JSON"));
    }

    #[test]
    fn test_other_languages_are_not_validated() {
        let app = test_app(Language::Yaml, "{ not json");
        assert!(app.error_lines.is_empty());
    }

    #[test]
    fn test_switching_language_revalidates() {
        let mut app = test_app(Language::PlainText, "{oops");
        assert!(app.error_lines.is_empty());
        app.set_language(Language::Json);
        assert!(!app.error_lines.is_empty());
        app.set_language(Language::PlainText);
        assert!(app.error_lines.is_empty());
    }

    #[test]
    fn test_startup_args_override_config() {
        let config = EditorConfig {
            default_language: "sql".to_string(),
            ..Default::default()
        };
        let app = App::from_config(
            &config,
            StartupArgs {
                hide_line_numbers: true,
                read_only: true,
                ..Default::default()
            },
        );
        assert_eq!(app.language, Language::Sql);
        assert!(!app.show_line_numbers);
        assert!(app.read_only);
        assert_eq!(app.line_count, 1);
    }

    #[test]
    fn test_theme_mode_resolves_named_modes() {
        assert_eq!(ThemeMode::dark().resolve(), "Dark");
        assert_eq!(ThemeMode::light().resolve(), "Light");
        assert_eq!(ThemeMode("Solarized".into()).resolve(), "Solarized");
        assert!(ThemeMode::default().is_system());
    }
}
