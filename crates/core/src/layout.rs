//! Position your widgets properly.
mod limits;
mod node;

pub use limits::Limits;
pub use node::Node;

use crate::{Point, Rectangle, Size, Vector};

/// The bounds of a [`Node`] and its children, using absolute coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Layout<'a> {
    position: Point,
    node: &'a Node,
}

impl<'a> Layout<'a> {
    /// Creates a new [`Layout`] for the given [`Node`] at the origin.
    pub fn new(node: &'a Node) -> Self {
        Self::with_offset(Vector::ZERO, node)
    }

    /// Creates a new [`Layout`] for the given [`Node`] with the provided offset
    /// from the origin.
    pub fn with_offset(offset: Vector, node: &'a Node) -> Self {
        let bounds = node.bounds();

        Self {
            position: Point::new(bounds.x, bounds.y) + offset,
            node,
        }
    }

    /// Returns the bounds of the [`Layout`].
    ///
    /// The returned [`Rectangle`] describes the position and size of a
    /// [`Node`].
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(self.position, self.node.size())
    }

    /// Returns an iterator over the [`Layout`] of the children of a [`Node`].
    pub fn children(self) -> impl DoubleEndedIterator<Item = Layout<'a>> {
        let offset = self.position - Point::ORIGIN;

        self.node
            .children()
            .iter()
            .map(move |node| Layout::with_offset(offset, node))
    }

    /// Returns the [`Size`] of the underlying [`Node`].
    pub fn size(&self) -> Size {
        self.node.size()
    }
}
