//! Handle mouse events.
mod button;
mod cursor;
mod event;

pub use button::Button;
pub use cursor::Cursor;
pub use event::Event;
