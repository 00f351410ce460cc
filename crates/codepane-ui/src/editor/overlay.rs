//! The highlight overlay: token-colored glyphs and error-row tints painted
//! underneath the transparent input surface.

use std::sync::Arc;

use codepane_core::{ErrorLines, LineSnapshot};
use egui::text::{LayoutJob, TextFormat};
use egui::{Color32, FontId, Galley, Pos2, Rect, Shape, TextBuffer, Ui};

use super::theme::EditorTheme;

/// Lays out the input's own text, unwrapped, with invisible glyphs. The
/// overlay galley is built with the same font and wrap, so both share one
/// glyph grid.
pub(crate) fn transparent_galley(ui: &Ui, text: &dyn TextBuffer, font_id: &FontId) -> Arc<Galley> {
    let job = LayoutJob::simple(
        text.as_str().to_owned(),
        font_id.clone(),
        Color32::TRANSPARENT,
        f32::INFINITY,
    );
    ui.fonts_mut(|f| f.layout_job(job))
}

/// One layout job for the whole document, each token in its kind's color.
pub(crate) fn highlight_job(snapshot: &LineSnapshot, theme: &EditorTheme) -> LayoutJob {
    let mode = snapshot.language.presentation();
    let mut job = LayoutJob::default();
    job.wrap.max_width = f32::INFINITY;
    for (idx, tokens) in snapshot.tokens.iter().enumerate() {
        if idx > 0 {
            job.append(
                "\n",
                0.0,
                TextFormat::simple(theme.font_id.clone(), theme.text_color),
            );
        }
        for token in tokens {
            let color = theme.token_color(token.kind, mode);
            job.append(
                &token.text,
                0.0,
                TextFormat::simple(theme.font_id.clone(), color),
            );
        }
    }
    job
}

/// Row tints for every annotated line that exists in the document.
///
/// `origin` is the top-left of the first glyph row; rows span `x_range`.
pub(crate) fn error_tints(
    errors: &ErrorLines,
    line_count: usize,
    origin: Pos2,
    row_height: f32,
    x_range: (f32, f32),
    tint: Color32,
) -> Vec<Shape> {
    errors
        .iter()
        .filter_map(|line| line.checked_sub(1))
        .filter(|&idx| idx < line_count)
        .map(|idx| {
            let top = origin.y + idx as f32 * row_height;
            let rect = Rect::from_min_max(
                Pos2::new(x_range.0, top),
                Pos2::new(x_range.1, top + row_height),
            );
            Shape::rect_filled(rect, 0.0, tint)
        })
        .collect()
}
