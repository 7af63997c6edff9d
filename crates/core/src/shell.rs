use crate::event;

/// A connection to the state of a shell.
///
/// A [`Widget`] can leverage a [`Shell`] to trigger changes in an application,
/// like publishing messages, invalidating the current layout or asking the
/// overlay that mounted it to close.
///
/// [`Widget`]: crate::Widget
#[derive(Debug)]
pub struct Shell<'a, Message> {
    messages: &'a mut Vec<Message>,
    event_status: event::Status,
    is_layout_invalid: bool,
    is_close_requested: bool,
}

impl<'a, Message> Shell<'a, Message> {
    /// Creates a new [`Shell`] with the provided buffer of messages.
    pub fn new(messages: &'a mut Vec<Message>) -> Self {
        Self {
            messages,
            event_status: event::Status::Ignored,
            is_layout_invalid: false,
            is_close_requested: false,
        }
    }

    /// Publish the given `Message` for an application to process it.
    pub fn publish(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Marks the current event as captured. Prevents "event bubbling".
    ///
    /// A widget should capture an event when no sibling should
    /// handle it.
    pub fn capture_event(&mut self) {
        self.event_status = event::Status::Captured;
    }

    /// Returns the current [`event::Status`] of the [`Shell`].
    #[must_use]
    pub fn event_status(&self) -> event::Status {
        self.event_status
    }

    /// Returns whether the current event has been captured.
    #[must_use]
    pub fn is_event_captured(&self) -> bool {
        self.event_status == event::Status::Captured
    }

    /// Returns whether the current layout is invalid or not.
    #[must_use]
    pub fn is_layout_invalid(&self) -> bool {
        self.is_layout_invalid
    }

    /// Invalidates the current application layout.
    ///
    /// The shell will relayout the application widgets.
    pub fn invalidate_layout(&mut self) {
        self.is_layout_invalid = true;
    }

    /// Triggers the given function if the layout is invalid, cleaning it in the
    /// process.
    pub fn revalidate_layout(&mut self, f: impl FnOnce()) {
        if self.is_layout_invalid {
            self.is_layout_invalid = false;

            f();
        }
    }

    /// Asks the overlay that mounted the current widget to close.
    ///
    /// This is the close capability handed to the content of an overlay. It
    /// does not carry any write access to the overlay state; the overlay
    /// decides what to do with the request once the content is done
    /// processing the event.
    pub fn request_close(&mut self) {
        self.is_close_requested = true;
    }

    /// Returns whether a close request is pending.
    #[must_use]
    pub fn is_close_requested(&self) -> bool {
        self.is_close_requested
    }

    /// Takes the pending close request, if any.
    ///
    /// This is called by overlays after their content has processed an event.
    pub fn take_close_request(&mut self) -> bool {
        std::mem::take(&mut self.is_close_requested)
    }

    /// Merges the current [`Shell`] with another one by applying the given
    /// function to the messages of the latter.
    ///
    /// This method is useful for composition.
    ///
    /// Close requests are scoped to the overlay owning the other [`Shell`]
    /// and are never merged.
    pub fn merge<B>(&mut self, other: Shell<'_, B>, f: impl Fn(B) -> Message) {
        self.messages.extend(other.messages.drain(..).map(f));

        self.is_layout_invalid = self.is_layout_invalid || other.is_layout_invalid;
        self.event_status = self.event_status.merge(other.event_status);
    }
}
