//! Language identifiers and their presentation modes.
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which token-to-color palette a language is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PresentationMode {
    #[default]
    Syntactic,
    /// Character-class coloring for generated secrets.
    RandomString,
}

/// The closed set of grammars the editor can highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    Json,
    Xml,
    Html,
    Svg,
    Css,
    Sql,
    Yaml,
    Markdown,
    Env,
    Csv,
    /// Command-line invocations (curl, shell one-liners).
    Shell,
    /// Shared C-family source grammar.
    Code,
    #[default]
    PlainText,
    RandomString,
}

impl Language {
    pub const ALL: [Language; 14] = [
        Self::Json,
        Self::Xml,
        Self::Html,
        Self::Svg,
        Self::Css,
        Self::Sql,
        Self::Yaml,
        Self::Markdown,
        Self::Env,
        Self::Csv,
        Self::Shell,
        Self::Code,
        Self::PlainText,
        Self::RandomString,
    ];

    /// Canonical identifier, accepted by `FromStr`.
    pub fn id(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
            Self::Html => "html",
            Self::Svg => "svg",
            Self::Css => "css",
            Self::Sql => "sql",
            Self::Yaml => "yaml",
            Self::Markdown => "markdown",
            Self::Env => "env",
            Self::Csv => "csv",
            Self::Shell => "shell",
            Self::Code => "code",
            Self::PlainText => "plaintext",
            Self::RandomString => "random-string",
        }
    }

    /// Human-readable name for pickers and status bars.
    pub fn label(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Xml => "XML",
            Self::Html => "HTML",
            Self::Svg => "SVG",
            Self::Css => "CSS",
            Self::Sql => "SQL",
            Self::Yaml => "YAML",
            Self::Markdown => "Markdown",
            Self::Env => "Env",
            Self::Csv => "CSV",
            Self::Shell => "Shell",
            Self::Code => "Source code",
            Self::PlainText => "Plain text",
            Self::RandomString => "Random string",
        }
    }

    pub fn presentation(self) -> PresentationMode {
        match self {
            Self::RandomString => PresentationMode::RandomString,
            _ => PresentationMode::Syntactic,
        }
    }

    /// Total mapping from an identifier: unknown ids become plain text.
    pub fn from_id_or_plain(id: &str) -> Self {
        id.parse().unwrap_or(Self::PlainText)
    }

    /// Guesses the language from a file name's extension (or the bare name
    /// for dotfiles such as `.env`).
    pub fn from_extension(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        if name == ".env" || name.starts_with(".env.") {
            return Some(Self::Env);
        }
        let ext = path.extension()?.to_str()?;
        let lang = match ext.to_ascii_lowercase().as_str() {
            "json" | "jsonc" | "geojson" => Self::Json,
            "xml" | "xsd" | "xsl" | "plist" => Self::Xml,
            "html" | "htm" | "xhtml" | "vue" => Self::Html,
            "svg" => Self::Svg,
            "css" | "scss" | "less" => Self::Css,
            "sql" => Self::Sql,
            "yaml" | "yml" => Self::Yaml,
            "md" | "markdown" => Self::Markdown,
            "env" => Self::Env,
            "csv" => Self::Csv,
            "sh" | "bash" | "zsh" => Self::Shell,
            "txt" | "log" => Self::PlainText,
            "js" | "mjs" | "cjs" | "jsx" | "ts" | "tsx" | "java" | "c" | "h" | "cpp" | "cc"
            | "hpp" | "cs" | "go" | "rs" | "py" | "php" | "kt" | "swift" | "dart" | "scala" => {
                Self::Code
            }
            _ => return None,
        };
        Some(lang)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lang = match s.trim().to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            "xml" => Self::Xml,
            "html" | "htm" => Self::Html,
            "svg" => Self::Svg,
            "css" => Self::Css,
            "sql" => Self::Sql,
            "yaml" | "yml" => Self::Yaml,
            "markdown" | "md" => Self::Markdown,
            "env" | "dotenv" => Self::Env,
            "csv" => Self::Csv,
            "shell" | "bash" | "sh" | "curl" | "cli" => Self::Shell,
            "code" | "js" | "javascript" | "ts" | "typescript" | "java" | "c" | "cpp" | "c++"
            | "csharp" | "c#" | "go" | "rust" | "python" | "php" | "kotlin" | "swift" => {
                Self::Code
            }
            "plaintext" | "plain" | "text" | "txt" => Self::PlainText,
            "random-string" | "random" | "randomstring" => Self::RandomString,
            other => anyhow::bail!("unknown language identifier '{other}'"),
        };
        Ok(lang)
    }
}
