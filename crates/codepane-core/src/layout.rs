//! Geometry shared by the gutter, the highlight overlay and the input
//! surface.
//!
//! The three layers must agree on one left padding and one scroll offset.
//! Both are derived here, once per frame, and handed to every layer.
use std::ops::Range;

/// Horizontal padding on each side of the line numbers.
pub const GUTTER_H_PADDING: f32 = 8.0;
/// Gap between the gutter edge and the first text column.
pub const TEXT_INSET: f32 = 6.0;
/// Narrowest gutter, in points.
pub const MIN_GUTTER_WIDTH: f32 = 20.0;

/// Gutter width and the content padding that must accompany it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GutterLayout {
    /// Digits in the highest line number.
    pub digits: usize,
    pub gutter_width: f32,
    /// Left padding of both the overlay and the input surface.
    pub content_padding: f32,
}

impl GutterLayout {
    pub fn compute(line_count: usize, char_width: f32, show_line_numbers: bool) -> Self {
        let digits = digit_count(line_count.max(1));
        if !show_line_numbers {
            return Self {
                digits,
                gutter_width: 0.0,
                content_padding: TEXT_INSET,
            };
        }
        let gutter_width =
            (digits as f32 * char_width + 2.0 * GUTTER_H_PADDING).max(MIN_GUTTER_WIDTH);
        Self {
            digits,
            gutter_width,
            content_padding: gutter_width + TEXT_INSET,
        }
    }
}

/// Number of decimal digits needed to print `n`.
pub fn digit_count(n: usize) -> usize {
    n.checked_ilog10().map_or(1, |log| log as usize + 1)
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollOffset {
    pub x: f32,
    pub y: f32,
}

impl ScrollOffset {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollPhase {
    #[default]
    Idle,
    Scrolling,
}

/// Offsets the presentation layers apply this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LayerScroll {
    /// Overlay follows the input on both axes.
    pub overlay: ScrollOffset,
    /// Gutter follows the input vertically only.
    pub gutter_y: f32,
}

/// Mirrors the input surface's scroll offset onto the other layers.
///
/// The input surface is the only writer; the overlay and gutter only ever
/// read the mirrored offsets, so the layers cannot drift apart.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollSync {
    offset: ScrollOffset,
    phase: ScrollPhase,
}

impl ScrollSync {
    /// Records the input surface's offset for this frame. The phase is
    /// `Scrolling` on frames where the offset moved and `Idle` otherwise.
    pub fn observe(&mut self, offset: ScrollOffset) -> LayerScroll {
        self.phase = if offset == self.offset {
            ScrollPhase::Idle
        } else {
            ScrollPhase::Scrolling
        };
        self.offset = offset;
        self.layers()
    }

    pub fn layers(&self) -> LayerScroll {
        LayerScroll {
            overlay: self.offset,
            gutter_y: self.offset.y,
        }
    }

    pub fn phase(&self) -> ScrollPhase {
        self.phase
    }

    pub fn offset(&self) -> ScrollOffset {
        self.offset
    }
}

/// Line indices intersecting a viewport scrolled to `scroll_y`.
pub fn visible_lines(
    scroll_y: f32,
    viewport_height: f32,
    row_height: f32,
    line_count: usize,
) -> Range<usize> {
    if row_height.is_nan()
        || row_height <= 0.0
        || !scroll_y.is_finite()
        || !viewport_height.is_finite()
    {
        return 0..line_count;
    }
    let first = (scroll_y.max(0.0) / row_height).floor() as usize;
    let last = ((scroll_y.max(0.0) + viewport_height.max(0.0)) / row_height)
        .ceil() as usize;
    let last = last.saturating_add(1);
    first.min(line_count)..last.min(line_count)
}

/// Top edge of row `line_idx` relative to the viewport.
pub fn row_top(line_idx: usize, row_height: f32, inset_y: f32, scroll_y: f32) -> f32 {
    inset_y + line_idx as f32 * row_height - scroll_y
}
