//! Distribute content vertically.
use crate::core::layout::{self, Layout};
use crate::core::mouse;
use crate::core::{Element, Event, Point, Shell, Size, Widget};

/// A container that distributes its contents vertically.
pub struct Column<'a, Message, Renderer = crate::Renderer> {
    children: Vec<Element<'a, Message, Renderer>>,
    spacing: f32,
}

impl<'a, Message, Renderer> Column<'a, Message, Renderer>
where
    Renderer: crate::core::Renderer,
{
    /// Creates an empty [`Column`].
    pub fn new() -> Self {
        Self::with_children(Vec::new())
    }

    /// Creates a [`Column`] with the given elements.
    pub fn with_children(
        children: impl IntoIterator<Item = Element<'a, Message, Renderer>>,
    ) -> Self {
        Self {
            children: children.into_iter().collect(),
            spacing: 0.0,
        }
    }

    /// Sets the vertical spacing between elements.
    #[must_use]
    pub fn spacing(mut self, amount: f32) -> Self {
        self.spacing = amount;
        self
    }

    /// Adds an element to the [`Column`].
    #[must_use]
    pub fn push(mut self, child: impl Into<Element<'a, Message, Renderer>>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Returns the amount of elements in the [`Column`].
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if the [`Column`] has no elements.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<Message, Renderer> Default for Column<'_, Message, Renderer>
where
    Renderer: crate::core::Renderer,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Message, Renderer> Widget<Message, Renderer> for Column<'_, Message, Renderer>
where
    Renderer: crate::core::Renderer,
{
    fn layout(&mut self, renderer: &Renderer, limits: &layout::Limits) -> layout::Node {
        let child_limits = layout::Limits::new(
            Size::new(limits.min().width, 0.0),
            limits.max(),
        );

        let mut y = 0.0;
        let mut width: f32 = 0.0;

        let nodes: Vec<_> = self
            .children
            .iter_mut()
            .enumerate()
            .map(|(i, child)| {
                if i > 0 {
                    y += self.spacing;
                }

                let node = child
                    .as_widget_mut()
                    .layout(renderer, &child_limits)
                    .move_to(Point::new(0.0, y));

                y += node.size().height;
                width = width.max(node.size().width);

                node
            })
            .collect();

        layout::Node::with_children(limits.resolve(Size::new(width, y)), nodes)
    }

    fn place(&mut self, layout: Layout<'_>) {
        for (child, layout) in self.children.iter_mut().zip(layout.children()) {
            child.as_widget_mut().place(layout);
        }
    }

    fn draw(&self, renderer: &mut Renderer, layout: Layout<'_>, cursor: mouse::Cursor) {
        for (child, layout) in self.children.iter().zip(layout.children()) {
            child.as_widget().draw(renderer, layout, cursor);
        }
    }

    fn update(
        &mut self,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        shell: &mut Shell<'_, Message>,
    ) {
        for (child, layout) in self.children.iter_mut().zip(layout.children()) {
            if shell.is_event_captured() {
                break;
            }

            child
                .as_widget_mut()
                .update(event, layout, cursor, renderer, shell);
        }
    }
}

impl<'a, Message, Renderer> From<Column<'a, Message, Renderer>> for Element<'a, Message, Renderer>
where
    Message: 'a,
    Renderer: crate::core::Renderer + 'a,
{
    fn from(column: Column<'a, Message, Renderer>) -> Self {
        Element::new(column)
    }
}
