//! Write your own renderer.
mod headless;

pub use headless::{Headless, Primitive};

use crate::{Rectangle, Size};

/// The default size of text, in logical pixels.
pub const DEFAULT_TEXT_SIZE: f32 = 16.0;

/// A component that can be used by widgets to draw themselves on a screen.
pub trait Renderer {
    /// Starts recording a new layer.
    fn start_layer(&mut self, bounds: Rectangle);

    /// Ends recording a new layer.
    ///
    /// The new layer will clip its contents to the provided `bounds`.
    fn end_layer(&mut self);

    /// Draws the primitives recorded in the given closure in a new layer.
    ///
    /// Overlays use layers to float above the rest of the interface.
    fn with_layer(&mut self, bounds: Rectangle, f: impl FnOnce(&mut Self)) {
        self.start_layer(bounds);
        f(self);
        self.end_layer();
    }

    /// Fills a quad with the given bounds.
    fn fill_quad(&mut self, bounds: Rectangle);

    /// Draws the given text content inside the given bounds.
    fn fill_text(&mut self, content: &str, bounds: Rectangle, size: f32);

    /// Returns the default size of text.
    fn default_size(&self) -> f32 {
        DEFAULT_TEXT_SIZE
    }

    /// Measures the given text content at the given size.
    ///
    /// The default implementation assumes a monospaced font with a line
    /// height of 1.3 times the text size.
    fn measure(&self, content: &str, size: f32) -> Size {
        let columns = content.chars().count() as f32;

        Size::new(columns * size * 0.6, (size * 1.3).round())
    }
}

/// A renderer that does nothing.
impl Renderer for () {
    fn start_layer(&mut self, _bounds: Rectangle) {}

    fn end_layer(&mut self) {}

    fn fill_quad(&mut self, _bounds: Rectangle) {}

    fn fill_text(&mut self, _content: &str, _bounds: Rectangle, _size: f32) {}
}
