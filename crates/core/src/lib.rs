//! The core library of [flyout].
//!
//! This library holds the basic abstractions shared by every other crate of
//! the workspace: geometry, input events, the [`Shell`] a widget talks to,
//! layout nodes, the [`Renderer`] trait, and the [`Widget`] trait itself.
//!
//! It also holds the two ideas the rest of the workspace is built around:
//!
//! - [`visibility`]: the open/closed state machine of an overlay and the
//!   lifecycle notifications fired on each transition.
//! - [`outside`]: the document-level channel that detects pointer presses
//!   outside of a protected region and dismisses the overlay that owns it.
//!
//! [flyout]: https://github.com/flyout-rs/flyout
#![cfg_attr(docsrs, feature(doc_cfg))]
pub mod event;
pub mod layout;
pub mod mouse;
pub mod outside;
pub mod renderer;
pub mod touch;
pub mod visibility;
pub mod widget;

mod element;
mod point;
mod rectangle;
mod shell;
mod size;
mod vector;

pub use element::Element;
pub use event::Event;
pub use layout::Layout;
pub use outside::Document;
pub use point::Point;
pub use rectangle::Rectangle;
pub use renderer::Renderer;
pub use shell::Shell;
pub use size::Size;
pub use vector::Vector;
pub use visibility::Visibility;
pub use widget::Widget;
