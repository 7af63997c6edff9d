//! The built-in widgets of [flyout].
//!
//! [`Dropdown`] floats a menu of items below a trigger and closes it when an
//! item is selected or when a press lands outside of it. [`Foldable`] shows or
//! hides a body below its title, and [`disclosure::List`] stacks independent
//! foldable sections.
//!
//! [flyout]: https://github.com/flyout-rs/flyout
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use flyout_core as core;

pub mod column;
pub mod disclosure;
pub mod dropdown;
pub mod foldable;
pub mod menu;
pub mod text;

mod helpers;

pub use column::Column;
pub use dropdown::Dropdown;
pub use foldable::Foldable;
pub use helpers::*;
pub use text::Text;

/// The default renderer of the widgets.
pub type Renderer = core::renderer::Headless;

/// A generic widget, using the default [`Renderer`] unless told otherwise.
pub type Element<'a, Message, Renderer = crate::Renderer> = core::Element<'a, Message, Renderer>;
