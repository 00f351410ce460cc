//! Line-number gutter, painted over the left edge of the viewport.
//!
//! The gutter never scrolls on its own; it is redrawn every frame from the
//! offset mirrored off the input surface.

use codepane_core::layout::GUTTER_H_PADDING;
use codepane_core::{row_top, visible_lines, ErrorLines, GutterLayout};
use egui::{Align2, Painter, Pos2, Rect, Stroke, Vec2};

use super::theme::EditorTheme;

/// Vertical geometry the gutter shares with the overlay and the input.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GutterRows {
    pub line_count: usize,
    pub row_height: f32,
    /// Distance from the top of the scrolled content to the first glyph row.
    pub inset_y: f32,
    /// Mirrored vertical offset of the input surface.
    pub scroll_y: f32,
}

pub(crate) fn paint(
    painter: &Painter,
    viewport: Rect,
    layout: &GutterLayout,
    rows: GutterRows,
    errors: &ErrorLines,
    theme: &EditorTheme,
) {
    if layout.gutter_width <= 0.0 {
        return;
    }
    let rect = Rect::from_min_size(
        viewport.min,
        Vec2::new(layout.gutter_width, viewport.height()),
    );
    let painter = painter.with_clip_rect(rect.intersect(painter.clip_rect()));
    painter.rect_filled(rect, 0.0, theme.gutter_bg);
    painter.line_segment(
        [
            Pos2::new(rect.max.x, rect.min.y),
            Pos2::new(rect.max.x, rect.max.y),
        ],
        Stroke::new(1.0, theme.gutter_separator_color),
    );

    let right = rect.max.x - GUTTER_H_PADDING;
    let range = visible_lines(
        rows.scroll_y - rows.inset_y,
        viewport.height(),
        rows.row_height,
        rows.line_count,
    );
    for idx in range {
        let y = viewport.min.y + row_top(idx, rows.row_height, rows.inset_y, rows.scroll_y);
        let label = (idx + 1).to_string();
        if errors.contains_index(idx) {
            // Drawn twice, one point apart, to read as bold.
            for dx in [0.0, 1.0] {
                painter.text(
                    Pos2::new(right - 1.0 + dx, y),
                    Align2::RIGHT_TOP,
                    &label,
                    theme.font_id.clone(),
                    theme.error_line_number_color,
                );
            }
        } else {
            painter.text(
                Pos2::new(right, y),
                Align2::RIGHT_TOP,
                label,
                theme.font_id.clone(),
                theme.line_number_color,
            );
        }
    }
}
