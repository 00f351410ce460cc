//! Editor configuration: load, save, merge, and sanitize.
use std::path::{Path, PathBuf};

use anyhow::Context;
use codepane_core::Language;
use serde::{Deserialize, Serialize};

use crate::theme::{builtin_dark, builtin_light, ThemeDefinition};

/// Theme names accepted besides the user-defined ones.
const THEME_MODES: [&str; 3] = ["System", "Dark", "Light"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// "System", "Dark", "Light", or the name of an entry in `themes`.
    pub current_theme: String,
    pub font_size: f32,
    pub show_line_numbers: bool,
    /// Fill the host container instead of sizing to the content.
    pub fill_height: bool,
    /// Height bounds of the content-sized box, in points.
    pub min_height: f32,
    pub max_height: f32,
    /// Language identifier used when the host does not pick one.
    pub default_language: String,
    pub themes: Vec<ThemeDefinition>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            current_theme: "System".to_string(),
            font_size: 14.0,
            show_line_numbers: true,
            fill_height: false,
            min_height: 120.0,
            max_height: 600.0,
            default_language: Language::PlainText.id().to_string(),
            themes: vec![builtin_dark(), builtin_light()],
        }
    }
}

impl EditorConfig {
    /// `<config dir>/codepane/codepane.json`, or `codepane.json` in the
    /// working directory when the platform has no config dir.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join("codepane").join("codepane.json"))
            .unwrap_or_else(|| PathBuf::from("codepane.json"))
    }

    /// Loads config from `path`, writing a default file if none exists.
    /// Any read or parse failure is logged and yields defaults; a broken file
    /// is left untouched.
    pub fn load_or_create(path: &Path) -> Self {
        if !path.exists() {
            let config = Self::default();
            if let Err(e) = config.save(path) {
                tracing::warn!("Failed to create default config at {}: {e:#}", path.display());
            }
            return config;
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config at {}: {e:#}", path.display());
                Self::default()
            }
        }
    }

    /// Reads, sanitizes and merges the config at `path`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let mut config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("parsing {}", path.display()))?;
        config.with_builtins_merged();
        config.sanitize();
        Ok(config)
    }

    /// Writes pretty-printed JSON, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))
    }

    /// Ensures the built-in Dark and Light themes exist. A user theme with
    /// the same name wins over the built-in.
    pub fn with_builtins_merged(&mut self) {
        if self.find_theme("Dark").is_none() {
            self.themes.insert(0, builtin_dark());
        }
        if self.find_theme("Light").is_none() {
            let at = self.themes.len().min(1);
            self.themes.insert(at, builtin_light());
        }
    }

    pub fn find_theme(&self, name: &str) -> Option<&ThemeDefinition> {
        self.themes.iter().find(|t| t.name == name)
    }

    pub fn theme_names(&self) -> Vec<&str> {
        self.themes.iter().map(|t| t.name.as_str()).collect()
    }

    /// The configured default language; unknown identifiers mean plain text.
    pub fn language(&self) -> Language {
        Language::from_id_or_plain(&self.default_language)
    }

    /// Clamps values to valid ranges and resets invalid fields.
    pub fn sanitize(&mut self) {
        self.font_size = if self.font_size.is_finite() {
            self.font_size.clamp(6.0, 72.0)
        } else {
            Self::default().font_size
        };
        if !self.min_height.is_finite() {
            self.min_height = Self::default().min_height;
        }
        self.min_height = self.min_height.max(60.0);
        if !self.max_height.is_finite() {
            self.max_height = Self::default().max_height;
        }
        self.max_height = self.max_height.max(self.min_height);

        if !THEME_MODES.contains(&self.current_theme.as_str())
            && self.find_theme(&self.current_theme).is_none()
        {
            tracing::warn!("Unknown theme '{}', using System", self.current_theme);
            self.current_theme = "System".to_string();
        }
        if self.default_language.parse::<Language>().is_err() {
            tracing::warn!(
                "Unknown default language '{}', using plain text",
                self.default_language
            );
            self.default_language = Language::PlainText.id().to_string();
        }
    }
}
