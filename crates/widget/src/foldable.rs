//! Show or hide a body below a title.
use crate::core::layout::{self, Layout};
use crate::core::mouse;
use crate::core::visibility::{Cause, Transition};
use crate::core::{Element, Event, Point, Shell, Size, Visibility, Widget};

use std::cell::Cell;

/// The spacing between the title and the body of a [`Foldable`].
const SPACING: f32 = 4.0;

/// The state of a [`Foldable`].
///
/// Foldables are never dismissed from the outside: only their title changes
/// their [`Visibility`].
#[derive(Debug, Default)]
pub struct State {
    visibility: Cell<Visibility>,
}

impl State {
    /// Creates a new [`State`], open or closed.
    pub fn new(open: bool) -> Self {
        Self {
            visibility: Cell::new(Visibility::from(open)),
        }
    }

    /// Returns true if the [`Foldable`] is open.
    pub fn is_open(&self) -> bool {
        self.visibility.get().is_open()
    }

    /// Returns the [`Visibility`] of the [`Foldable`].
    pub fn visibility(&self) -> Visibility {
        self.visibility.get()
    }

    /// Opens the [`Foldable`] if closed, and closes it otherwise.
    pub fn toggle(&self) -> Option<Transition> {
        let mut visibility = self.visibility.get();
        let transition = visibility.apply(Cause::Trigger);

        self.visibility.set(visibility);

        if let Some(transition) = transition {
            log::debug!("Foldable {:?} -> {:?}", transition.from, transition.to);
        }

        transition
    }
}

/// A title that shows or hides a body below itself when pressed.
///
/// The body is built only while open.
pub struct Foldable<'a, Message, Renderer = crate::Renderer> {
    state: &'a State,
    title: Element<'a, Message, Renderer>,
    body: Box<dyn Fn() -> Element<'a, Message, Renderer> + 'a>,
    content: Option<Element<'a, Message, Renderer>>,
}

impl<'a, Message, Renderer> Foldable<'a, Message, Renderer>
where
    Renderer: crate::core::Renderer,
{
    /// Creates a new [`Foldable`] with the given [`State`], title and body
    /// builder.
    pub fn new(
        state: &'a State,
        title: impl Into<Element<'a, Message, Renderer>>,
        body: impl Fn() -> Element<'a, Message, Renderer> + 'a,
    ) -> Self {
        Self {
            state,
            title: title.into(),
            body: Box::new(body),
            content: None,
        }
    }

    /// Returns true if the body is currently mounted.
    pub fn is_mounted(&self) -> bool {
        self.content.is_some()
    }
}

impl<Message, Renderer> Widget<Message, Renderer> for Foldable<'_, Message, Renderer>
where
    Renderer: crate::core::Renderer,
{
    fn layout(&mut self, renderer: &Renderer, limits: &layout::Limits) -> layout::Node {
        let child_limits = limits.loose();

        let title = self.title.as_widget_mut().layout(renderer, &child_limits);
        let title_size = title.size();

        if !self.state.is_open() {
            self.content = None;

            return layout::Node::with_children(limits.resolve(title_size), vec![title]);
        }

        let content = self.content.get_or_insert_with(|| (self.body)());

        let body = content
            .as_widget_mut()
            .layout(renderer, &child_limits)
            .move_to(Point::new(0.0, title_size.height + SPACING));

        let size = Size::new(
            title_size.width.max(body.size().width),
            title_size.height + SPACING + body.size().height,
        );

        layout::Node::with_children(limits.resolve(size), vec![title, body])
    }

    fn place(&mut self, layout: Layout<'_>) {
        let mut children = layout.children();

        if let Some(title) = children.next() {
            self.title.as_widget_mut().place(title);
        }

        if let (Some(content), Some(layout)) = (&mut self.content, children.next()) {
            content.as_widget_mut().place(layout);
        }
    }

    fn draw(&self, renderer: &mut Renderer, layout: Layout<'_>, cursor: mouse::Cursor) {
        let mut children = layout.children();

        if let Some(title) = children.next() {
            self.title.as_widget().draw(renderer, title, cursor);
        }

        if let (Some(content), Some(layout)) = (&self.content, children.next()) {
            content.as_widget().draw(renderer, layout, cursor);
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
        let mut children = layout.children();
        let Some(title) = children.next() else {
            return;
        };

        if let (Some(content), Some(layout)) = (&mut self.content, children.next()) {
            content
                .as_widget_mut()
                .update(event, layout, cursor, renderer, shell);
        }

        if shell.is_event_captured() {
            return;
        }

        self.title
            .as_widget_mut()
            .update(event, title, cursor, renderer, shell);

        if shell.is_event_captured() {
            return;
        }

        if let Some(position) = event.primary_press(cursor)
            && title.bounds().contains(position)
        {
            let _ = self.state.toggle();

            shell.capture_event();
            shell.invalidate_layout();
        }
    }
}

impl<'a, Message, Renderer> From<Foldable<'a, Message, Renderer>> for Element<'a, Message, Renderer>
where
    Message: 'a,
    Renderer: crate::core::Renderer + 'a,
{
    fn from(foldable: Foldable<'a, Message, Renderer>) -> Self {
        Element::new(foldable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Text;
    use crate::core::renderer::Headless;

    #[test]
    fn test_state() {
        let state = State::default();

        assert!(!state.is_open());
        assert!(state.toggle().is_some());
        assert!(state.is_open());
        assert!(State::new(true).is_open());
        assert_eq!(State::new(false).visibility(), Visibility::Closed);
    }

    #[test]
    fn test_body_is_built_only_while_open() {
        let renderer = Headless::new();
        let state = State::new(false);
        let built = Cell::new(0);

        let mut foldable: Foldable<'_, ()> = Foldable::new(&state, Text::new("IDL"), || {
            built.set(built.get() + 1);

            Text::new("Interface description").into()
        });

        let node = foldable.layout(&renderer, &layout::Limits::NONE);
        assert!(!foldable.is_mounted());
        assert_eq!(node.children().len(), 1);
        assert_eq!(built.get(), 0);

        let _ = state.toggle();

        let node = foldable.layout(&renderer, &layout::Limits::NONE);
        let _ = foldable.layout(&renderer, &layout::Limits::NONE);

        assert!(foldable.is_mounted());
        assert_eq!(node.children().len(), 2);
        assert_eq!(built.get(), 1);

        let mut target = Headless::new();
        foldable.draw(&mut target, Layout::new(&node), mouse::Cursor::Unavailable);

        assert_eq!(
            target.texts().collect::<Vec<_>>(),
            ["IDL", "Interface description"]
        );
    }

    #[test]
    fn test_pressing_title_toggles() {
        let renderer = Headless::new();
        let state = State::new(false);

        let mut foldable: Foldable<'_, ()> =
            Foldable::new(&state, Text::new("Program ID"), || Text::new("Address").into());

        let node = foldable.layout(&renderer, &layout::Limits::NONE);

        let mut messages = Vec::new();
        let mut shell = Shell::new(&mut messages);

        foldable.update(
            &Event::Mouse(mouse::Event::ButtonPressed {
                button: mouse::Button::Left,
            }),
            Layout::new(&node),
            mouse::Cursor::Available(Point::new(1.0, 1.0)),
            &renderer,
            &mut shell,
        );

        assert!(state.is_open());
        assert!(shell.is_event_captured());
        assert!(shell.is_layout_invalid());
    }
}
