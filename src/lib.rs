//! flyout is a small toolkit of transient overlays: dropdown menus that close
//! when an item is selected or when a press lands outside of them, and
//! disclosure lists of independent foldable sections.
//!
//! # Overview
//! Overlays follow The Elm Architecture. A [`Program`] owns the state of its
//! overlays and builds its view from it:
//!
//! ```no_run
//! use flyout::widget::{dropdown, menu, text};
//! use flyout::{Document, Element, Program};
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     Generate,
//!     Import,
//! }
//!
//! struct Keypair {
//!     menu: dropdown::State,
//! }
//!
//! impl Program for Keypair {
//!     type Message = Message;
//!     type Renderer = flyout::widget::Renderer;
//!
//!     fn update(&mut self, message: Message) {
//!         log::info!("{message:?}");
//!     }
//!
//!     fn view(&self) -> Element<'_, Message> {
//!         dropdown(&self.menu, text("Keypair"))
//!             .push(menu::item("Generate new keypair", Message::Generate))
//!             .push(menu::item("Import keypair", Message::Import))
//!             .into()
//!     }
//! }
//!
//! let document = Document::new();
//! let program = Keypair {
//!     menu: dropdown::State::new(document.clone()),
//! };
//! ```
//!
//! Every overlay watches for outside presses through a shared [`Document`].
//! The runtime dispatches each event to the [`Document`] before any widget
//! processes it.
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use flyout_core as core;
pub use flyout_runtime as runtime;
pub use flyout_widget as widget;

pub mod settings;

pub use crate::core::outside::Document;
pub use crate::core::visibility::{Cause, Lifecycle, Transition};
pub use crate::core::{Point, Rectangle, Size, Visibility};
pub use runtime::{Program, UserInterface};
pub use settings::Settings;

/// A generic widget drawn with the default renderer.
pub type Element<'a, Message, Renderer = widget::Renderer> = core::Element<'a, Message, Renderer>;
