//! Describe the items of a menu.
//!
//! An [`Item`] is a plain description: a label, an optional detail line and
//! the message to publish when it is selected. Overlays mount an [`Entry`] for
//! every item while they are open, and drop them all when they close.
use crate::core::layout::{self, Layout};
use crate::core::mouse;
use crate::core::{Element, Event, Rectangle, Shell, Size, Widget};

/// The padding around the content of an [`Entry`].
const PADDING: f32 = 4.0;

/// An item of a menu.
#[derive(Debug, Clone, PartialEq)]
pub struct Item<Message> {
    label: String,
    detail: Option<String>,
    on_select: Option<Message>,
}

impl<Message> Item<Message> {
    /// Creates a new [`Item`] with the given label and no action.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            detail: None,
            on_select: None,
        }
    }

    /// Sets a secondary line of text shown below the label.
    #[must_use]
    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Sets the message published when the [`Item`] is selected.
    #[must_use]
    pub fn on_select(mut self, message: Message) -> Self {
        self.on_select = Some(message);
        self
    }

    /// Returns the label of the [`Item`].
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the detail of the [`Item`], if any.
    pub fn detail_text(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

/// Creates an [`Item`] publishing the given message when selected.
pub fn item<Message>(label: impl Into<String>, on_select: Message) -> Item<Message> {
    Item::new(label).on_select(on_select)
}

/// The widget mounted for an [`Item`] inside an open overlay.
///
/// Selecting it publishes the message of the item, if any, and always asks
/// the overlay to close.
#[derive(Debug)]
pub struct Entry<Message> {
    item: Item<Message>,
}

impl<Message> Entry<Message> {
    /// Mounts the given [`Item`].
    pub fn new(item: Item<Message>) -> Self {
        Self { item }
    }
}

impl<Message, Renderer> Widget<Message, Renderer> for Entry<Message>
where
    Message: Clone,
    Renderer: crate::core::Renderer,
{
    fn layout(&mut self, renderer: &Renderer, limits: &layout::Limits) -> layout::Node {
        let size = renderer.default_size();
        let label = renderer.measure(&self.item.label, size);

        let detail = self
            .item
            .detail
            .as_deref()
            .map_or(Size::ZERO, |detail| renderer.measure(detail, size));

        let intrinsic = Size::new(
            label.width.max(detail.width) + PADDING * 2.0,
            label.height + detail.height + PADDING * 2.0,
        );

        layout::Node::new(limits.resolve(intrinsic))
    }

    fn draw(&self, renderer: &mut Renderer, layout: Layout<'_>, _cursor: mouse::Cursor) {
        let bounds = layout.bounds();
        let size = renderer.default_size();

        renderer.fill_quad(bounds);

        let label = renderer.measure(&self.item.label, size);

        renderer.fill_text(
            &self.item.label,
            Rectangle {
                x: bounds.x + PADDING,
                y: bounds.y + PADDING,
                width: label.width,
                height: label.height,
            },
            size,
        );

        if let Some(detail) = &self.item.detail {
            let measured = renderer.measure(detail, size);

            renderer.fill_text(
                detail,
                Rectangle {
                    x: bounds.x + PADDING,
                    y: bounds.y + PADDING + label.height,
                    width: measured.width,
                    height: measured.height,
                },
                size,
            );
        }
    }

    fn update(
        &mut self,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        shell: &mut Shell<'_, Message>,
    ) {
        let Some(position) = event.primary_press(cursor) else {
            return;
        };

        if !layout.bounds().contains(position) {
            return;
        }

        log::debug!("Selected menu item {:?}", self.item.label);

        if let Some(message) = &self.item.on_select {
            shell.publish(message.clone());
        }

        shell.request_close();
        shell.capture_event();
    }
}

impl<'a, Message, Renderer> From<Entry<Message>> for Element<'a, Message, Renderer>
where
    Message: Clone + 'a,
    Renderer: crate::core::Renderer,
{
    fn from(entry: Entry<Message>) -> Self {
        Element::new(entry)
    }
}
