#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use codepane_core::Language;

/// A syntax-highlighting scratch editor built with Rust and egui.
#[derive(Parser, Debug)]
#[command(name = "codepane", version, about)]
struct Cli {
    /// Language to highlight (json, yaml, sql, random-string, ...).
    #[arg(long, short)]
    language: Option<String>,

    /// Initial document text.
    #[arg(long, short)]
    text: Option<String>,

    /// Open the document read-only.
    #[arg(long)]
    read_only: bool,

    /// Fill the window height instead of sizing to the content.
    #[arg(long)]
    fill_height: bool,

    /// Hide the line-number gutter.
    #[arg(long)]
    no_line_numbers: bool,

    /// Use this config file instead of the platform default.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let language = cli
        .language
        .as_deref()
        .map(str::parse::<Language>)
        .transpose()?;

    tracing::info!("Starting codepane");

    let startup_args = codepane_ui::StartupArgs {
        language,
        text: cli.text,
        read_only: cli.read_only,
        fill_height: cli.fill_height,
        hide_line_numbers: cli.no_line_numbers,
        config_path: cli.config,
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "codepane",
        native_options,
        Box::new(move |cc| Ok(Box::new(codepane_ui::App::new(cc, startup_args)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_all_flags() {
        let cli = Cli::parse_from([
            "codepane",
            "--language",
            "yaml",
            "--text",
            "a: 1",
            "--read-only",
            "--fill-height",
            "--no-line-numbers",
            "--config",
            "custom.json",
        ]);
        assert_eq!(cli.language.as_deref(), Some("yaml"));
        assert_eq!(cli.text.as_deref(), Some("a: 1"));
        assert!(cli.read_only && cli.fill_height && cli.no_line_numbers);
        assert_eq!(cli.config, Some(PathBuf::from("custom.json")));
    }

    #[test]
    fn test_unknown_language_is_an_error() {
        let err = "klingon".parse::<Language>().unwrap_err();
        assert!(err.to_string().contains("klingon"));
    }
}
