use crate::event::Event;
use crate::mouse;
use crate::touch;
use crate::Point;

use bitflags::bitflags;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

bitflags! {
    /// A set of mouse buttons.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct Buttons: u8 {
        /// The left mouse button.
        const LEFT = 1;
        /// The right mouse button.
        const RIGHT = 1 << 1;
        /// The middle (wheel) button.
        const MIDDLE = 1 << 2;
        /// The back mouse button.
        const BACK = 1 << 3;
        /// The forward mouse button.
        const FORWARD = 1 << 4;
        /// Any other mouse button.
        const OTHER = 1 << 5;
    }
}

impl From<mouse::Button> for Buttons {
    fn from(button: mouse::Button) -> Self {
        match button {
            mouse::Button::Left => Buttons::LEFT,
            mouse::Button::Right => Buttons::RIGHT,
            mouse::Button::Middle => Buttons::MIDDLE,
            mouse::Button::Back => Buttons::BACK,
            mouse::Button::Forward => Buttons::FORWARD,
            mouse::Button::Other(_) => Buttons::OTHER,
        }
    }
}

/// The interactions that count as a press for outside detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Settings {
    /// The mouse buttons whose press is an interaction.
    ///
    /// By default, every button.
    pub buttons: Buttons,

    /// Whether a finger touching the screen is an interaction.
    ///
    /// By default, `true`.
    pub touch: bool,
}

impl Settings {
    /// Returns the position of the press described by the [`Event`], if
    /// it is an interaction under these [`Settings`].
    pub fn press_position(self, event: &Event, cursor: mouse::Cursor) -> Option<Point> {
        match event {
            Event::Mouse(mouse::Event::ButtonPressed { button })
                if self.buttons.contains(Buttons::from(*button)) =>
            {
                let position = cursor.position();

                if position.is_none() {
                    log::trace!("Ignoring {button:?} press: cursor unavailable");
                }

                position
            }
            Event::Touch(touch::Event::FingerPressed { position, .. }) if self.touch => {
                Some(*position)
            }
            _ => None,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            buttons: Buttons::all(),
            touch: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(button: mouse::Button) -> Event {
        Event::Mouse(mouse::Event::ButtonPressed { button })
    }

    #[test]
    fn test_default_accepts_every_press() {
        let settings = Settings::default();
        let cursor = mouse::Cursor::Available(Point::new(3.0, 4.0));

        for button in [
            mouse::Button::Left,
            mouse::Button::Right,
            mouse::Button::Middle,
            mouse::Button::Other(9),
        ] {
            assert_eq!(
                settings.press_position(&press(button), cursor),
                Some(Point::new(3.0, 4.0))
            );
        }

        let finger = Event::Touch(touch::Event::FingerPressed {
            id: touch::Finger(1),
            position: Point::new(7.0, 7.0),
        });

        assert_eq!(
            settings.press_position(&finger, cursor),
            Some(Point::new(7.0, 7.0))
        );
    }

    #[test]
    fn test_filters() {
        let settings = Settings {
            buttons: Buttons::LEFT,
            touch: false,
        };
        let cursor = mouse::Cursor::Available(Point::ORIGIN);

        assert!(
            settings
                .press_position(&press(mouse::Button::Left), cursor)
                .is_some()
        );
        assert!(
            settings
                .press_position(&press(mouse::Button::Right), cursor)
                .is_none()
        );
        assert!(
            settings
                .press_position(&press(mouse::Button::Left), mouse::Cursor::Unavailable)
                .is_none()
        );

        let finger = Event::Touch(touch::Event::FingerPressed {
            id: touch::Finger(1),
            position: Point::ORIGIN,
        });

        assert!(settings.press_position(&finger, cursor).is_none());
    }

    #[test]
    fn test_releases_and_moves_are_not_presses() {
        let settings = Settings::default();
        let cursor = mouse::Cursor::Available(Point::ORIGIN);

        let release = Event::Mouse(mouse::Event::ButtonReleased {
            button: mouse::Button::Left,
        });
        let moved = Event::Mouse(mouse::Event::CursorMoved {
            position: Point::ORIGIN,
        });

        assert!(settings.press_position(&release, cursor).is_none());
        assert!(settings.press_position(&moved, cursor).is_none());
    }
}
