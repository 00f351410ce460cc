//! The code surface widget: one frame and scroll area holding three aligned
//! layers.
//!
//! Paint order inside the scroll area is the overlay (error tints, then the
//! token-colored galley) followed by the input surface, a `TextEdit` whose
//! glyphs are transparent so only its caret and selection show. The gutter is
//! painted last, over the left edge of the viewport. The scroll area is the
//! only scroll state; the overlay lives in the same scrolled content as the
//! input and the gutter reads the mirrored offset, so no layer can drift.

use std::sync::Arc;

use codepane_core::{ChangeMeta, ErrorLines, GutterLayout, Language, ScrollOffset, ScrollPhase};
use egui::text::LayoutJob;
use egui::{
    Color32, CornerRadius, FontId, Galley, Id, Key, Modifiers, Response, RichText,
    ScrollArea, Shape, Stroke, TextBuffer, TextEdit, Ui, Vec2,
};

use super::gutter::{self, GutterRows};
use super::input;
use super::overlay;
use super::render_cache;
use super::theme::EditorTheme;

/// Default height bounds of the content-sized box, in points.
const DEFAULT_MIN_HEIGHT: f32 = 120.0;
const DEFAULT_MAX_HEIGHT: f32 = 600.0;
/// Border stroke of the outer frame.
const FRAME_STROKE: f32 = 1.0;

type ChangeHandler<'a> = Box<dyn FnMut(&str, &ChangeMeta) + 'a>;
type KeyHandler<'a> = Box<dyn FnMut(Key, Modifiers) + 'a>;
type CustomContent<'a> = Box<dyn FnOnce(&mut Ui) + 'a>;

/// What the surface reports back to the host after a frame.
#[derive(Debug, Clone)]
pub struct CodeSurfaceOutput {
    /// Response of the input surface, or of the frame when custom content
    /// replaced it.
    pub response: Response,
    /// Widget id of the input surface, for focus requests.
    pub input_id: Id,
    /// Id of the scroll area state, for programmatic scrolling.
    pub scroll_id: Id,
    /// Caret char index, while the input has a cursor.
    pub caret: Option<usize>,
    /// The value was edited this frame (typing or Tab).
    pub changed: bool,
    pub scroll_phase: ScrollPhase,
    /// Gutter width and the padding shared by overlay and input this frame.
    pub layout: GutterLayout,
}

/// Syntax-highlighting editor over a host-owned `String`.
///
/// ```ignore
/// let output = CodeSurface::new(&mut self.value)
///     .language(Language::Json)
///     .error_lines(&self.errors)
///     .on_change(|_, meta| line_count = meta.line_count)
///     .show(ui);
/// ```
pub struct CodeSurface<'a> {
    value: &'a mut String,
    language: Language,
    read_only: bool,
    placeholder: Option<String>,
    error_lines: Option<&'a ErrorLines>,
    fill_height: bool,
    show_line_numbers: bool,
    min_height: f32,
    max_height: f32,
    theme: Option<&'a EditorTheme>,
    custom_content: Option<CustomContent<'a>>,
    on_change: Option<ChangeHandler<'a>>,
    on_key: Option<KeyHandler<'a>>,
    auto_focus: bool,
    id_salt: Option<Id>,
}

impl<'a> CodeSurface<'a> {
    pub fn new(value: &'a mut String) -> Self {
        Self {
            value,
            language: Language::PlainText,
            read_only: false,
            placeholder: None,
            error_lines: None,
            fill_height: false,
            show_line_numbers: true,
            min_height: DEFAULT_MIN_HEIGHT,
            max_height: DEFAULT_MAX_HEIGHT,
            theme: None,
            custom_content: None,
            on_change: None,
            on_key: None,
            auto_focus: false,
            id_salt: None,
        }
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// A read-only surface keeps selection and copy but never edits the
    /// value, ignores Tab and never calls `on_change`.
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Shown only while the value is empty.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// 1-based lines to flag. Lines past the end are ignored.
    pub fn error_lines(mut self, error_lines: &'a ErrorLines) -> Self {
        self.error_lines = Some(error_lines);
        self
    }

    /// Fill the available height instead of sizing to the content.
    pub fn fill_height(mut self, fill_height: bool) -> Self {
        self.fill_height = fill_height;
        self
    }

    pub fn show_line_numbers(mut self, show: bool) -> Self {
        self.show_line_numbers = show;
        self
    }

    /// Bounds of the content-sized box. Ignored with `fill_height`.
    pub fn height_range(mut self, min: f32, max: f32) -> Self {
        self.min_height = min.max(0.0);
        self.max_height = max.max(self.min_height);
        self
    }

    pub fn theme(mut self, theme: &'a EditorTheme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Replaces gutter, overlay and input with `content` inside the same
    /// frame and scroll area.
    pub fn custom_content(mut self, content: impl FnOnce(&mut Ui) + 'a) -> Self {
        self.custom_content = Some(Box::new(content));
        self
    }

    /// Called after every edit with the new value and its line split.
    pub fn on_change(mut self, handler: impl FnMut(&str, &ChangeMeta) + 'a) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    /// Receives every key press while the input has focus, Tab included.
    pub fn on_key(mut self, handler: impl FnMut(Key, Modifiers) + 'a) -> Self {
        self.on_key = Some(Box::new(handler));
        self
    }

    /// Take keyboard focus when nothing else has it.
    pub fn auto_focus(mut self, auto_focus: bool) -> Self {
        self.auto_focus = auto_focus;
        self
    }

    /// Distinguishes several surfaces in one `Ui`.
    pub fn id_salt(mut self, salt: impl std::hash::Hash) -> Self {
        self.id_salt = Some(Id::new(salt));
        self
    }

    pub fn show(mut self, ui: &mut Ui) -> CodeSurfaceOutput {
        let default_theme;
        let theme = match self.theme {
            Some(theme) => theme,
            None => {
                default_theme = EditorTheme::default();
                &default_theme
            }
        };
        let id = ui.make_persistent_id(self.id_salt.unwrap_or_else(|| Id::new("code_surface")));
        let input_id = id.with("input");

        if let Some(content) = self.custom_content.take() {
            let height = self.box_height(ui, ui.spacing().interact_size.y * 4.0);
            let mut scroll_id = id.with("scroll");
            let response = framed(ui, theme, height, id, |ui| {
                scroll_id = ScrollArea::both()
                    .id_salt(id.with("scroll"))
                    .auto_shrink([false, false])
                    .show(ui, content)
                    .id;
            });
            return CodeSurfaceOutput {
                response,
                input_id,
                scroll_id,
                caret: None,
                changed: false,
                scroll_phase: ScrollPhase::Idle,
                layout: GutterLayout::compute(1, 0.0, false),
            };
        }

        let focused = ui.memory(|m| m.has_focus(input_id));
        if focused {
            if let Some(on_key) = self.on_key.as_mut() {
                input::forward_keys(ui, on_key.as_mut());
            }
        }
        let mut changed = false;
        if focused && !self.read_only && input::handle_tab(ui, input_id, self.value).is_some() {
            changed = true;
        }
        if self.auto_focus && ui.memory(|m| m.focused().is_none()) {
            ui.memory_mut(|m| m.request_focus(input_id));
        }

        let font_id = theme.font_id.clone();
        let (char_width, row_height) = glyph_metrics(ui, &font_id);
        let before = render_cache::snapshot(ui.ctx(), id, self.value.as_str(), self.language);
        let layout = GutterLayout::compute(before.line_count(), char_width, self.show_line_numbers);
        let height = self.box_height(ui, before.line_count() as f32 * row_height);

        let errors = self.error_lines.cloned().unwrap_or_default();
        let read_only = self.read_only;
        let language = self.language;
        let placeholder = self.placeholder.take();
        let value = &mut *self.value;

        let mut text_output = None;
        let mut inset_y = 0.0;
        let mut viewport = egui::Rect::NOTHING;
        let mut offset = Vec2::ZERO;
        let mut scroll_id = id.with("scroll");
        framed(ui, theme, height, id, |ui| {
            let scroll = ScrollArea::both()
                .id_salt(id.with("scroll"))
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.spacing_mut().item_spacing = Vec2::ZERO;
                    let visible = ui.available_size();
                    let content_top = ui.max_rect().min.y;
                    ui.horizontal_top(|ui| {
                        ui.add_space(layout.content_padding);
                        let slot = ui.painter().add(Shape::Noop);
                        let params = InputParams {
                            id: input_id,
                            font_id: &font_id,
                            placeholder: placeholder.as_deref(),
                            width: (visible.x - layout.content_padding).max(char_width),
                            min_height: visible.y,
                            theme,
                        };
                        let output = if read_only {
                            let mut view: &str = value.as_str();
                            show_input(ui, &mut view, &params)
                        } else {
                            show_input(ui, &mut *value, &params)
                        };

                        let after = render_cache::snapshot(ui.ctx(), id, value.as_str(), language);
                        let galley = ui.fonts_mut(|f| f.layout_job(overlay::highlight_job(&after, theme)));
                        let clip = ui.clip_rect();
                        let mut shapes = overlay::error_tints(
                            &errors,
                            after.line_count(),
                            output.galley_pos,
                            row_height,
                            (clip.min.x, clip.max.x),
                            theme.error_line_tint,
                        );
                        shapes.push(Shape::galley(output.galley_pos, galley, theme.text_color));
                        ui.painter().set(slot, Shape::Vec(shapes));

                        inset_y = output.galley_pos.y - content_top;
                        text_output = Some(output);
                    });
                });
            viewport = scroll.inner_rect;
            offset = scroll.state.offset;
            scroll_id = scroll.id;
        });

        let Some(output) = text_output else {
            // The scroll area always runs its body; this only guards the type.
            return CodeSurfaceOutput {
                response: ui.interact(viewport, id.with("frame"), egui::Sense::hover()),
                input_id,
                scroll_id,
                caret: None,
                changed,
                scroll_phase: ScrollPhase::Idle,
                layout,
            };
        };

        let sync = render_cache::observe_scroll(ui.ctx(), id, ScrollOffset::new(offset.x, offset.y));
        let after = render_cache::snapshot(ui.ctx(), id, self.value.as_str(), self.language);
        gutter::paint(
            ui.painter(),
            viewport,
            &layout,
            GutterRows {
                line_count: after.line_count(),
                row_height,
                inset_y,
                scroll_y: sync.layers().gutter_y,
            },
            &errors,
            theme,
        );
        if render_cache::is_scrolling(&sync) {
            ui.ctx().request_repaint();
        }

        changed |= !read_only && output.response.changed();
        if changed {
            let next = GutterLayout::compute(after.line_count(), char_width, self.show_line_numbers);
            if next != layout {
                // Digit count changed: relayout next frame with the new padding.
                ui.ctx().request_repaint();
            }
            if let Some(on_change) = self.on_change.as_mut() {
                let meta = ChangeMeta::for_value(self.value.as_str());
                on_change(self.value.as_str(), &meta);
            }
        }

        CodeSurfaceOutput {
            caret: output.cursor_range.map(|range| range.primary.index),
            response: output.response,
            input_id,
            scroll_id,
            changed,
            scroll_phase: sync.phase(),
            layout,
        }
    }

    /// Outer height: the container's with `fill_height`, otherwise the
    /// content height clamped to the configured bounds.
    fn box_height(&self, ui: &Ui, content_height: f32) -> f32 {
        if self.fill_height {
            ui.available_height()
        } else {
            let chrome = 2.0 * FRAME_STROKE + ui.spacing().scroll.bar_width;
            (content_height + chrome).clamp(self.min_height, self.max_height)
        }
    }
}

struct InputParams<'p> {
    id: Id,
    font_id: &'p FontId,
    placeholder: Option<&'p str>,
    width: f32,
    min_height: f32,
    theme: &'p EditorTheme,
}

/// The transparent input surface. Glyphs are invisible; caret and selection
/// use the theme colors.
fn show_input(
    ui: &mut Ui,
    buffer: &mut dyn TextBuffer,
    params: &InputParams<'_>,
) -> egui::text_edit::TextEditOutput {
    let font_id = params.font_id.clone();
    let mut layouter = move |ui: &Ui, text: &dyn TextBuffer, _wrap_width: f32| -> Arc<Galley> {
        overlay::transparent_galley(ui, text, &font_id)
    };

    let visuals = ui.visuals_mut();
    visuals.text_cursor.stroke.color = params.theme.caret_color;
    visuals.selection.bg_fill = params.theme.selection_color;
    visuals.selection.stroke.color = params.theme.text_color;

    let mut edit = TextEdit::multiline(buffer)
        .id(params.id)
        .font(params.font_id.clone())
        .text_color(Color32::TRANSPARENT)
        .frame(false)
        .lock_focus(true)
        .desired_width(params.width)
        .min_size(Vec2::new(0.0, params.min_height))
        .layouter(&mut layouter);
    if let Some(placeholder) = params.placeholder {
        edit = edit.hint_text(
            RichText::new(placeholder)
                .font(params.font_id.clone())
                .color(params.theme.placeholder_color),
        );
    }
    edit.show(ui)
}

/// Width of one monospace cell and the height of one row.
fn glyph_metrics(ui: &Ui, font_id: &FontId) -> (f32, f32) {
    let job = LayoutJob::simple_singleline("0".to_string(), font_id.clone(), Color32::WHITE);
    let galley = ui.fonts_mut(|f| f.layout_job(job));
    (galley.rect.width(), galley.rect.height())
}

/// The shared chrome: a bordered frame of fixed outer height around `body`.
fn framed(
    ui: &mut Ui,
    theme: &EditorTheme,
    height: f32,
    id: Id,
    body: impl FnOnce(&mut Ui),
) -> Response {
    let size = Vec2::new(ui.available_width(), height.max(0.0));
    ui.allocate_ui(size, |ui| {
        ui.set_min_size(size);
        egui::Frame::new()
            .fill(theme.bg_color)
            .stroke(Stroke::new(FRAME_STROKE, theme.border_color))
            .corner_radius(CornerRadius::same(4))
            .show(ui, |ui| {
                ui.set_min_size(ui.available_size());
                ui.push_id(id, body);
            })
            .response
    })
    .inner
}
