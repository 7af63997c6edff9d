//! Build interactive programs using The Elm Architecture.
use crate::core::Element;

/// The state and logic of an interactive application.
pub trait Program {
    /// The type of messages the [`Program`] produces.
    type Message;

    /// The renderer the [`Program`] draws with.
    type Renderer: crate::core::Renderer;

    /// Handles a message and updates the state of the [`Program`].
    fn update(&mut self, message: Self::Message);

    /// Returns the widgets to display in the [`Program`].
    ///
    /// These widgets can produce messages based on user interaction.
    fn view(&self) -> Element<'_, Self::Message, Self::Renderer>;
}
