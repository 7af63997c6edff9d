//! Create custom widgets and operate on them.
use crate::layout::{self, Layout};
use crate::mouse;
use crate::{Event, Shell};

/// A component that displays information and allows interaction.
///
/// If you want to build your own widgets, you will need to implement this
/// trait.
///
/// A widget goes through the following steps every time the interface is
/// rebuilt:
///
/// 1. [`layout`] computes its size and the relative position of its children.
/// 2. [`place`] hands it the final, absolute [`Layout`].
/// 3. [`update`] processes events, and [`draw`] draws it.
///
/// [`layout`]: Widget::layout
/// [`place`]: Widget::place
/// [`update`]: Widget::update
/// [`draw`]: Widget::draw
pub trait Widget<Message, Renderer>
where
    Renderer: crate::Renderer,
{
    /// Returns the [`layout::Node`] of the [`Widget`].
    ///
    /// This [`layout::Node`] is used by the runtime to compute the [`Layout`]
    /// of the user interface.
    fn layout(&mut self, renderer: &Renderer, limits: &layout::Limits) -> layout::Node;

    /// Informs the [`Widget`] of its absolute [`Layout`].
    ///
    /// This is called once after every layout pass, before any event is
    /// processed against the new layout.
    fn place(&mut self, _layout: Layout<'_>) {}

    /// Draws the [`Widget`] using the associated `Renderer`.
    fn draw(&self, renderer: &mut Renderer, layout: Layout<'_>, cursor: mouse::Cursor);

    /// Processes a runtime [`Event`].
    ///
    /// By default, it does nothing.
    fn update(
        &mut self,
        _event: &Event,
        _layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _renderer: &Renderer,
        _shell: &mut Shell<'_, Message>,
    ) {
    }
}
