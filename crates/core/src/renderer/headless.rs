use crate::renderer::{DEFAULT_TEXT_SIZE, Renderer};
use crate::Rectangle;

/// A drawing command recorded by a [`Headless`] renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// A filled quad.
    Quad {
        /// The bounds of the quad.
        bounds: Rectangle,
        /// The layer depth the quad was drawn at.
        layer: usize,
    },

    /// A run of text.
    Text {
        /// The text content.
        content: String,
        /// The bounds the text was drawn in.
        bounds: Rectangle,
        /// The layer depth the text was drawn at.
        layer: usize,
    },
}

/// A renderer that records primitives instead of drawing them.
///
/// Useful to inspect what an interface shows without a window or a GPU.
#[derive(Debug, Clone)]
pub struct Headless {
    primitives: Vec<Primitive>,
    layer: usize,
    text_size: f32,
}

impl Headless {
    /// Creates a new [`Headless`] renderer with the default text size.
    pub fn new() -> Self {
        Self::with_text_size(DEFAULT_TEXT_SIZE)
    }

    /// Creates a new [`Headless`] renderer with the given default text size.
    pub fn with_text_size(text_size: f32) -> Self {
        Self {
            primitives: Vec::new(),
            layer: 0,
            text_size,
        }
    }

    /// Returns the recorded primitives, in drawing order.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Returns the content of every recorded text, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            Primitive::Text { content, .. } => Some(content.as_str()),
            Primitive::Quad { .. } => None,
        })
    }

    /// Discards every recorded primitive.
    pub fn clear(&mut self) {
        self.primitives.clear();
        self.layer = 0;
    }
}

impl Default for Headless {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for Headless {
    fn start_layer(&mut self, _bounds: Rectangle) {
        self.layer += 1;
    }

    fn end_layer(&mut self) {
        self.layer = self.layer.saturating_sub(1);
    }

    fn fill_quad(&mut self, bounds: Rectangle) {
        self.primitives.push(Primitive::Quad {
            bounds,
            layer: self.layer,
        });
    }

    fn fill_text(&mut self, content: &str, bounds: Rectangle, _size: f32) {
        self.primitives.push(Primitive::Text {
            content: content.to_owned(),
            bounds,
            layer: self.layer,
        });
    }

    fn default_size(&self) -> f32 {
        self.text_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Point, Size};

    #[test]
    fn test_layers_are_tracked() {
        let mut renderer = Headless::new();
        let bounds = Rectangle::new(Point::ORIGIN, Size::new(10.0, 10.0));

        renderer.fill_text("below", bounds, 16.0);
        renderer.with_layer(bounds, |renderer| {
            renderer.fill_quad(bounds);
            renderer.fill_text("above", bounds, 16.0);
        });

        assert_eq!(renderer.texts().collect::<Vec<_>>(), ["below", "above"]);
        assert!(matches!(
            renderer.primitives()[1],
            Primitive::Quad { layer: 1, .. }
        ));
        assert!(matches!(
            renderer.primitives()[2],
            Primitive::Text { layer: 1, .. }
        ));

        renderer.clear();
        assert!(renderer.primitives().is_empty());
    }

    #[test]
    fn test_measure() {
        let renderer = Headless::with_text_size(10.0);
        let size = renderer.measure("IDL", renderer.default_size());

        assert!((size.width - 18.0).abs() < 1e-4);
        assert_eq!(size.height, 13.0);
    }
}
