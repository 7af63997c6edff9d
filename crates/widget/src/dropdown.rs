//! Dropdowns float a menu of items below a trigger.
//!
//! # Example
//! ```no_run
//! use flyout_widget::core::outside::Document;
//! use flyout_widget::{Element, dropdown, menu, text};
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     Generate,
//!     Import,
//! }
//!
//! let document = Document::new();
//! let state = dropdown::State::new(document.clone())
//!     .on_hide(|| log::info!("Keypair menu closed"));
//!
//! let view: Element<'_, Message> = dropdown(&state, text("Keypair"))
//!     .push(menu::item("Generate new keypair", Message::Generate))
//!     .push(menu::item("Import keypair", Message::Import))
//!     .into();
//! ```
//!
//! The [`State`] of a dropdown outlives the views built from it: it holds the
//! open/closed [`Visibility`] and the registration of the dropdown in the
//! document-level [`Listener`] while open.
use crate::core::layout::{self, Layout};
use crate::core::mouse;
use crate::core::outside::{Detector, Listener};
use crate::core::visibility::{Cause, Lifecycle, Transition};
use crate::core::{Element, Event, Point, Rectangle, Shell, Size, Visibility, Widget};
use crate::menu;
use crate::Column;

use std::cell::RefCell;
use std::rc::Rc;

/// The state of a [`Dropdown`].
///
/// This is a cheap handle: clones share the same state.
#[derive(Debug, Clone)]
pub struct State {
    inner: Rc<RefCell<Controller>>,
}

#[derive(Debug)]
struct Controller {
    visibility: Visibility,
    lifecycle: Lifecycle,
    detector: Detector,
}

impl State {
    /// Creates a closed [`State`] listening for outside presses through the
    /// given [`Listener`] while open.
    pub fn new(listener: impl Listener + 'static) -> Self {
        Self::with_listener(Rc::new(listener))
    }

    /// Creates a closed [`State`] sharing the given [`Listener`].
    pub fn with_listener(listener: Rc<dyn Listener>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Controller {
                visibility: Visibility::Closed,
                lifecycle: Lifecycle::new(),
                detector: Detector::new(listener),
            })),
        }
    }

    /// Sets the listener called every time the dropdown opens.
    #[must_use]
    pub fn on_show(self, f: impl Fn() + 'static) -> Self {
        {
            let mut controller = self.inner.borrow_mut();
            let lifecycle = std::mem::take(&mut controller.lifecycle);

            controller.lifecycle = lifecycle.on_show(f);
        }

        self
    }

    /// Sets the listener called every time the dropdown closes.
    #[must_use]
    pub fn on_hide(self, f: impl Fn() + 'static) -> Self {
        {
            let mut controller = self.inner.borrow_mut();
            let lifecycle = std::mem::take(&mut controller.lifecycle);

            controller.lifecycle = lifecycle.on_hide(f);
        }

        self
    }

    /// Returns true if the dropdown is open.
    pub fn is_open(&self) -> bool {
        self.visibility().is_open()
    }

    /// Returns the [`Visibility`] of the dropdown.
    pub fn visibility(&self) -> Visibility {
        self.inner.borrow().visibility
    }

    /// Returns the region protected from outside presses: the trigger and,
    /// while open, the menu.
    pub fn region(&self) -> Rectangle {
        self.inner.borrow().detector.region()
    }

    /// Sets the region protected from outside presses.
    ///
    /// A [`Dropdown`] sets it after every layout.
    pub fn set_region(&self, region: Rectangle) {
        self.inner.borrow().detector.set_region(region);
    }

    /// Tells the [`Listener`] that the dropdown is still mounted.
    ///
    /// A [`Dropdown`] does it after every layout. An open dropdown that
    /// misses a layout is dismissed by listeners that track layouts.
    pub fn mark_placed(&self) {
        self.inner.borrow().detector.mark_placed();
    }

    /// Returns true if the dropdown is currently watching for outside presses.
    pub fn is_listening(&self) -> bool {
        self.inner.borrow().detector.is_active()
    }

    /// Opens the dropdown if closed, and closes it otherwise.
    pub fn toggle(&self) -> Option<Transition> {
        self.apply(Cause::Trigger)
    }

    /// Opens the dropdown, if closed.
    pub fn open(&self) -> Option<Transition> {
        if self.is_open() {
            return None;
        }

        self.apply(Cause::Trigger)
    }

    /// Closes the dropdown after one of its items was selected.
    pub fn close(&self) -> Option<Transition> {
        self.apply(Cause::Selection)
    }

    /// Closes the dropdown after a press outside of it.
    pub fn dismiss(&self) -> Option<Transition> {
        self.apply(Cause::Outside)
    }

    fn apply(&self, cause: Cause) -> Option<Transition> {
        let (transition, lifecycle) = {
            let mut controller = self.inner.borrow_mut();
            let transition = controller.visibility.apply(cause)?;

            let weak = Rc::downgrade(&self.inner);

            controller
                .detector
                .sync(transition.to.is_open(), move || {
                    if let Some(inner) = weak.upgrade() {
                        let _ = State { inner }.dismiss();
                    }
                });

            (transition, controller.lifecycle.clone())
        };

        log::debug!(
            "Dropdown {:?} -> {:?} ({:?})",
            transition.from,
            transition.to,
            transition.cause
        );

        lifecycle.notify(transition);

        Some(transition)
    }
}

/// A trigger that floats a menu of items below itself while open.
pub struct Dropdown<'a, Message, Renderer = crate::Renderer> {
    state: State,
    trigger: Element<'a, Message, Renderer>,
    items: Vec<menu::Item<Message>>,
    menu: Option<Column<'a, Message, Renderer>>,
}

impl<'a, Message, Renderer> Dropdown<'a, Message, Renderer>
where
    Message: Clone + 'a,
    Renderer: crate::core::Renderer + 'a,
{
    /// Creates a new [`Dropdown`] with the given [`State`] and trigger.
    pub fn new(state: &State, trigger: impl Into<Element<'a, Message, Renderer>>) -> Self {
        Self {
            state: state.clone(),
            trigger: trigger.into(),
            items: Vec::new(),
            menu: None,
        }
    }

    /// Adds an item to the menu of the [`Dropdown`].
    #[must_use]
    pub fn push(mut self, item: menu::Item<Message>) -> Self {
        self.items.push(item);
        self
    }

    /// Adds the given items to the menu of the [`Dropdown`].
    #[must_use]
    pub fn items(mut self, items: impl IntoIterator<Item = menu::Item<Message>>) -> Self {
        self.items.extend(items);
        self
    }

    /// Returns the amount of item widgets currently mounted.
    ///
    /// This is zero unless the [`Dropdown`] was laid out while open.
    pub fn mounted(&self) -> usize {
        self.menu.as_ref().map_or(0, Column::len)
    }

    fn mount(&self) -> Column<'a, Message, Renderer> {
        Column::with_children(
            self.items
                .iter()
                .cloned()
                .map(|item| Element::new(menu::Entry::new(item))),
        )
    }
}

impl<'a, Message, Renderer> Widget<Message, Renderer> for Dropdown<'a, Message, Renderer>
where
    Message: Clone + 'a,
    Renderer: crate::core::Renderer + 'a,
{
    fn layout(&mut self, renderer: &Renderer, limits: &layout::Limits) -> layout::Node {
        let trigger = self.trigger.as_widget_mut().layout(renderer, limits);
        let trigger_size = trigger.size();

        if !self.state.is_open() {
            self.menu = None;

            return layout::Node::with_children(trigger_size, vec![trigger]);
        }

        if self.menu.is_none() {
            self.menu = Some(self.mount());
        }

        let mut children = vec![trigger];

        if let Some(menu) = &mut self.menu {
            let limits = layout::Limits::new(Size::ZERO, Size::INFINITE).min_width(trigger_size.width);

            children.push(
                menu.layout(renderer, &limits)
                    .move_to(Point::new(0.0, trigger_size.height)),
            );
        }

        layout::Node::with_children(trigger_size, children)
    }

    fn place(&mut self, layout: Layout<'_>) {
        let mut children = layout.children();
        let mut region = Rectangle::ZERO;

        if let Some(trigger) = children.next() {
            region = trigger.bounds();
            self.trigger.as_widget_mut().place(trigger);
        }

        if let (Some(menu), Some(layout)) = (&mut self.menu, children.next()) {
            region = region.union(&layout.bounds());
            menu.place(layout);
        }

        self.state.set_region(region);
        self.state.mark_placed();
    }

    fn draw(&self, renderer: &mut Renderer, layout: Layout<'_>, cursor: mouse::Cursor) {
        let mut children = layout.children();

        if let Some(trigger) = children.next() {
            self.trigger.as_widget().draw(renderer, trigger, cursor);
        }

        if let (Some(menu), Some(layout)) = (&self.menu, children.next()) {
            renderer.with_layer(layout.bounds(), |renderer| {
                menu.draw(renderer, layout, cursor);
            });
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
        if shell.is_event_captured() {
            return;
        }

        let mut children = layout.children();
        let Some(trigger) = children.next() else {
            return;
        };

        if let (Some(menu), Some(layout)) = (&mut self.menu, children.next()) {
            let mut messages = Vec::new();
            let mut local_shell = Shell::new(&mut messages);

            menu.update(event, layout, cursor, renderer, &mut local_shell);

            if local_shell.take_close_request() && self.state.close().is_some() {
                local_shell.invalidate_layout();
            }

            shell.merge(local_shell, std::convert::identity);

            if shell.is_event_captured() {
                return;
            }
        }

        self.trigger
            .as_widget_mut()
            .update(event, trigger, cursor, renderer, shell);

        if shell.is_event_captured() {
            return;
        }

        if let Some(position) = event.primary_press(cursor)
            && trigger.bounds().contains(position)
        {
            let _ = self.state.toggle();

            shell.capture_event();
            shell.invalidate_layout();
        }
    }
}

impl<'a, Message, Renderer> From<Dropdown<'a, Message, Renderer>> for Element<'a, Message, Renderer>
where
    Message: Clone + 'a,
    Renderer: crate::core::Renderer + 'a,
{
    fn from(dropdown: Dropdown<'a, Message, Renderer>) -> Self {
        Element::new(dropdown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Text;
    use crate::core::outside::{Document, Watch, WatchId};
    use crate::core::renderer::Headless;

    use std::cell::Cell;

    /// A listener that counts registrations.
    struct Recorder {
        document: Document,
        registered: Cell<usize>,
    }

    impl Listener for Recorder {
        fn register(&self, watch: Watch) -> WatchId {
            self.registered.set(self.registered.get() + 1);
            self.document.register(watch)
        }

        fn deregister(&self, id: WatchId) -> bool {
            self.document.deregister(id)
        }

        fn is_registered(&self, id: WatchId) -> bool {
            self.document.is_registered(id)
        }

        fn mark_placed(&self, id: WatchId) {
            self.document.mark_placed(id);
        }
    }

    fn counter() -> (Rc<Cell<usize>>, impl Fn() + 'static) {
        let count = Rc::new(Cell::new(0));
        let callback = {
            let count = Rc::clone(&count);
            move || count.set(count.get() + 1)
        };

        (count, callback)
    }

    fn press(position: Point) -> (Event, mouse::Cursor) {
        (
            Event::Mouse(mouse::Event::ButtonPressed {
                button: mouse::Button::Left,
            }),
            mouse::Cursor::Available(position),
        )
    }

    #[test]
    fn test_toggle_without_listeners() {
        let state = State::new(Document::new());

        assert_eq!(state.visibility(), Visibility::Closed);
        assert!(state.toggle().is_some());
        assert!(state.is_open());
        assert!(state.is_listening());
    }

    #[test]
    fn test_toggle_notifies_lifecycle() {
        let (shown, on_show) = counter();
        let (hidden, on_hide) = counter();

        let state = State::new(Document::new()).on_show(on_show).on_hide(on_hide);

        for _ in 0..5 {
            let _ = state.toggle();
        }

        assert!(state.is_open());
        assert_eq!(shown.get(), 3);
        assert_eq!(hidden.get(), 2);
    }

    #[test]
    fn test_close_and_dismiss_never_open() {
        let (shown, on_show) = counter();
        let (hidden, on_hide) = counter();

        let state = State::new(Document::new()).on_show(on_show).on_hide(on_hide);

        assert_eq!(state.close(), None);
        assert_eq!(state.dismiss(), None);
        assert!(!state.is_open());
        assert_eq!((shown.get(), hidden.get()), (0, 0));

        let _ = state.open();
        assert_eq!(state.open(), None);

        let transition = state.dismiss();

        assert_eq!(transition.map(|transition| transition.cause), Some(Cause::Outside));
        assert_eq!((shown.get(), hidden.get()), (1, 1));
    }

    #[test]
    fn test_registered_exactly_while_open() {
        let document = Document::new();
        let listener = Rc::new(Recorder {
            document: document.clone(),
            registered: Cell::new(0),
        });

        let state = State::with_listener(Rc::clone(&listener) as Rc<dyn Listener>);
        assert!(document.is_empty());

        let _ = state.toggle();
        assert_eq!(document.len(), 1);

        let _ = state.close();
        assert!(document.is_empty());
        assert!(!state.is_listening());

        let _ = state.toggle();
        let _ = state.toggle();
        let _ = state.toggle();
        assert_eq!(document.len(), 1);
        assert_eq!(listener.registered.get(), 3);

        drop(state);
        assert!(document.is_empty());
    }

    #[test]
    fn test_outside_press_dismisses_once() {
        let document = Document::new();
        let (hidden, on_hide) = counter();

        let state = State::new(document.clone()).on_hide(on_hide);
        state.set_region(Rectangle::new(Point::ORIGIN, Size::new(100.0, 40.0)));

        let _ = state.toggle();

        let (event, cursor) = press(Point::new(10.0, 10.0));
        assert_eq!(document.dispatch(&event, cursor), 0);
        assert!(state.is_open());

        let (event, cursor) = press(Point::new(300.0, 300.0));
        assert_eq!(document.dispatch(&event, cursor), 1);
        assert!(!state.is_open());
        assert_eq!(hidden.get(), 1);

        assert_eq!(document.dispatch(&event, cursor), 0);
        assert_eq!(hidden.get(), 1);
    }

    #[test]
    fn test_listener_may_query_state() {
        let slot: Rc<RefCell<Option<State>>> = Rc::default();
        let observed = Rc::new(Cell::new(None));

        let state = State::new(Document::new()).on_show({
            let slot = Rc::clone(&slot);
            let observed = Rc::clone(&observed);

            move || observed.set(slot.borrow().as_ref().map(State::is_open))
        });

        *slot.borrow_mut() = Some(state.clone());

        let _ = state.toggle();
        assert_eq!(observed.get(), Some(true));

        let _ = slot.borrow_mut().take();
    }

    #[test]
    fn test_panicking_listener_leaves_state_consistent() {
        let document = Document::new();
        let state = State::new(document.clone()).on_show(|| panic!("listener failed"));

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| state.toggle()));

        assert!(result.is_err());
        assert!(state.is_open());
        assert!(state.is_listening());
        assert_eq!(document.len(), 1);

        let transition = state.toggle();

        assert_eq!(transition.map(|transition| transition.to), Some(Visibility::Closed));
        assert!(!state.is_open());
        assert!(!state.is_listening());
        assert!(document.is_empty());
    }

    #[test]
    fn test_place_keeps_an_open_dropdown_mounted() {
        let renderer = Headless::new();
        let document = Document::new();
        let (hidden, on_hide) = counter();
        let state = State::new(document.clone()).on_hide(on_hide);

        let mut dropdown: Dropdown<'_, u8> =
            Dropdown::new(&state, Text::new("Keypair")).push(menu::item("Generate", 1));

        let _ = state.toggle();

        document.begin_layout();
        let node = dropdown.layout(&renderer, &layout::Limits::NONE);
        dropdown.place(Layout::new(&node));
        assert_eq!(document.end_layout(), 0);
        assert!(state.is_open());

        // Unmounted: laid out without the dropdown
        drop(dropdown);
        document.begin_layout();

        assert_eq!(document.end_layout(), 1);
        assert!(!state.is_open());
        assert!(!state.is_listening());
        assert_eq!(hidden.get(), 1);
    }

    #[test]
    fn test_mounts_items_only_while_open() {
        let renderer = Headless::new();
        let state = State::new(Document::new());

        let mut dropdown: Dropdown<'_, u8> = Dropdown::new(&state, Text::new("Keypair"))
            .push(menu::item("Generate", 1))
            .push(menu::item("Import", 2));

        let node = dropdown.layout(&renderer, &layout::Limits::NONE);
        assert_eq!(dropdown.mounted(), 0);
        assert_eq!(node.children().len(), 1);

        let _ = state.toggle();

        let node = dropdown.layout(&renderer, &layout::Limits::NONE);
        assert_eq!(dropdown.mounted(), 2);
        assert_eq!(node.children().len(), 2);

        dropdown.place(Layout::new(&node));

        let trigger = node.children()[0].bounds();
        let menu = node.children()[1].bounds();

        assert_eq!(node.size(), trigger.size());
        assert_eq!(menu.y, trigger.height);
        assert!(menu.width >= trigger.width);
        assert_eq!(state.region(), trigger.union(&menu));

        let _ = state.close();

        let _ = dropdown.layout(&renderer, &layout::Limits::NONE);
        assert_eq!(dropdown.mounted(), 0);
    }
}
