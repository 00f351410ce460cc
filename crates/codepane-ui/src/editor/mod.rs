mod gutter;
mod input;
mod overlay;
mod render_cache;
mod theme;
mod widget;

pub(crate) use theme::hex_to_color32;
pub use theme::EditorTheme;
pub use widget::{CodeSurface, CodeSurfaceOutput};

#[cfg(test)]
pub(crate) mod test_util {
    use egui::epaint::TextShape;
    use egui::{FullOutput, Shape};

    /// Every text galley painted in a frame, in paint order.
    pub(crate) fn painted_texts(output: &FullOutput) -> Vec<TextShape> {
        let mut texts = Vec::new();
        for clipped in &output.shapes {
            collect(&clipped.shape, &mut texts);
        }
        texts
    }

    fn collect(shape: &Shape, texts: &mut Vec<TextShape>) {
        match shape {
            Shape::Text(text) => texts.push(text.clone()),
            Shape::Vec(shapes) => shapes.iter().for_each(|s| collect(s, texts)),
            _ => {}
        }
    }
}
