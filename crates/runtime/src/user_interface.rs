//! Implement your own event loop to drive a user interface.
use crate::core::event::{self, Event};
use crate::core::layout::{self, Layout};
use crate::core::mouse;
use crate::core::outside::Document;
use crate::core::{Element, Shell, Size};

/// A set of interactive graphical elements with a specific [`Layout`].
///
/// It can be updated and drawn.
///
/// A [`UserInterface`] is built from the view of a program and is meant to
/// be short-lived: rebuild it after the program processes the messages it
/// produced.
///
/// Every layout of a [`UserInterface`] is reported to its [`Document`], so
/// overlays left open by a view that no longer mounts them are dismissed.
pub struct UserInterface<'a, Message, Renderer> {
    root: Element<'a, Message, Renderer>,
    base: layout::Node,
    bounds: Size,
    document: Document,
}

/// The current state of a [`UserInterface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// The [`UserInterface`] is outdated and needs to be rebuilt.
    Outdated,

    /// The [`UserInterface`] is up-to-date.
    Updated,
}

impl<'a, Message, Renderer> UserInterface<'a, Message, Renderer>
where
    Renderer: crate::core::Renderer,
{
    /// Builds a user interface for an [`Element`].
    ///
    /// The root is laid out within the given bounds and every widget is told
    /// its absolute [`Layout`]. Outside presses and layouts go through the
    /// given [`Document`].
    pub fn build(
        root: impl Into<Element<'a, Message, Renderer>>,
        bounds: Size,
        renderer: &Renderer,
        document: &Document,
    ) -> Self {
        let mut root = root.into();
        let base = Self::layout(&mut root, bounds, renderer, document);

        Self {
            root,
            base,
            bounds,
            document: document.clone(),
        }
    }

    /// Returns the bounds the [`UserInterface`] was laid out within.
    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// Updates the [`UserInterface`] by processing each provided [`Event`].
    ///
    /// Every event is dispatched to the [`Document`] before any widget sees
    /// it. If the [`Document`] dismissed an overlay, the [`UserInterface`] is
    /// laid out again before the widgets process the event.
    ///
    /// Published messages are pushed into `messages`. The returned [`State`]
    /// is [`State::Outdated`] if any was published.
    pub fn update(
        &mut self,
        events: &[Event],
        cursor: mouse::Cursor,
        renderer: &Renderer,
        messages: &mut Vec<Message>,
    ) -> (State, Vec<event::Status>) {
        let published = messages.len();

        let statuses = events
            .iter()
            .map(|event| {
                if self.document.dispatch(event, cursor) > 0 {
                    log::trace!("Relayout after outside dismissal");

                    self.relayout(renderer);
                }

                let mut shell = Shell::new(messages);

                self.root.as_widget_mut().update(
                    event,
                    Layout::new(&self.base),
                    cursor,
                    renderer,
                    &mut shell,
                );

                let status = shell.event_status();

                shell.revalidate_layout(|| self.relayout(renderer));

                status
            })
            .collect();

        let state = if messages.len() > published {
            State::Outdated
        } else {
            State::Updated
        };

        (state, statuses)
    }

    /// Draws the [`UserInterface`] with the provided [`Renderer`].
    pub fn draw(&self, renderer: &mut Renderer, cursor: mouse::Cursor) {
        self.root
            .as_widget()
            .draw(renderer, Layout::new(&self.base), cursor);
    }

    /// Lays out the [`UserInterface`] again.
    pub fn relayout(&mut self, renderer: &Renderer) {
        self.base = Self::layout(&mut self.root, self.bounds, renderer, &self.document);
    }

    fn layout(
        root: &mut Element<'a, Message, Renderer>,
        bounds: Size,
        renderer: &Renderer,
        document: &Document,
    ) -> layout::Node {
        let limits = layout::Limits::new(Size::ZERO, bounds);

        document.begin_layout();

        let node = root.as_widget_mut().layout(renderer, &limits);

        root.as_widget_mut().place(Layout::new(&node));

        let unmounted = document.end_layout();

        if unmounted > 0 {
            log::debug!("Dismissed {unmounted} unmounted overlay(s)");
        }

        node
    }
}
