//! Draw text.
use crate::core::layout::{self, Layout};
use crate::core::mouse;
use crate::core::{Element, Widget};

/// A line of text.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    content: String,
    size: Option<f32>,
}

impl Text {
    /// Creates a new [`Text`] with the given content.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            size: None,
        }
    }

    /// Sets the size of the [`Text`].
    ///
    /// By default, the renderer decides.
    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    /// Returns the content of the [`Text`].
    pub fn content(&self) -> &str {
        &self.content
    }

    fn resolve_size<Renderer: crate::core::Renderer>(&self, renderer: &Renderer) -> f32 {
        self.size.unwrap_or_else(|| renderer.default_size())
    }
}

impl<Message, Renderer> Widget<Message, Renderer> for Text
where
    Renderer: crate::core::Renderer,
{
    fn layout(&mut self, renderer: &Renderer, limits: &layout::Limits) -> layout::Node {
        let size = renderer.measure(&self.content, self.resolve_size(renderer));

        layout::Node::new(limits.resolve(size))
    }

    fn draw(&self, renderer: &mut Renderer, layout: Layout<'_>, _cursor: mouse::Cursor) {
        let size = self.resolve_size(renderer);

        renderer.fill_text(&self.content, layout.bounds(), size);
    }
}

impl<'a, Message, Renderer> From<Text> for Element<'a, Message, Renderer>
where
    Renderer: crate::core::Renderer,
{
    fn from(text: Text) -> Self {
        Element::new(text)
    }
}
