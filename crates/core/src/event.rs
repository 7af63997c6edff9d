//! Handle events of a user interface.
use crate::mouse;
use crate::touch;
use crate::Point;

/// A user interface event.
///
/// _**Note:** This type is largely incomplete! Overlays only care about
/// pointer interactions, so only mouse and touch input is represented._
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A mouse event
    Mouse(mouse::Event),

    /// A touch event
    Touch(touch::Event),
}

impl Event {
    /// Returns the position of a primary press, if this [`Event`] is one.
    ///
    /// A primary press is either a left mouse button press while the
    /// [`mouse::Cursor`] is available, or a finger touching the screen.
    pub fn primary_press(&self, cursor: mouse::Cursor) -> Option<Point> {
        match self {
            Event::Mouse(mouse::Event::ButtonPressed {
                button: mouse::Button::Left,
            }) => cursor.position(),
            Event::Touch(touch::Event::FingerPressed { position, .. }) => Some(*position),
            _ => None,
        }
    }
}

/// The status of an [`Event`] after being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The [`Event`] was **NOT** handled by any widget.
    Ignored,

    /// The [`Event`] was handled and processed by a widget.
    Captured,
}

impl Status {
    /// Merges two [`Status`] into one.
    ///
    /// `Captured` takes precedence over `Ignored`:
    ///
    /// ```
    /// use flyout_core::event::Status;
    ///
    /// assert_eq!(Status::Ignored.merge(Status::Ignored), Status::Ignored);
    /// assert_eq!(Status::Ignored.merge(Status::Captured), Status::Captured);
    /// assert_eq!(Status::Captured.merge(Status::Ignored), Status::Captured);
    /// assert_eq!(Status::Captured.merge(Status::Captured), Status::Captured);
    /// ```
    pub fn merge(self, b: Self) -> Self {
        match self {
            Status::Ignored => b,
            Status::Captured => Status::Captured,
        }
    }
}
