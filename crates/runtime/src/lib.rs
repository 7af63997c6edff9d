//! A renderer-agnostic runtime for [flyout].
//!
//! The runtime owns the order in which an event travels: every event reaches
//! the document-level [`Document`] first, so open overlays are dismissed by
//! outside presses before any widget reacts to them. Every layout is reported
//! to the [`Document`] too: an open overlay that a new view no longer mounts
//! is dismissed once the layout ends.
//!
//! [flyout]: https://github.com/flyout-rs/flyout
//! [`Document`]: core::outside::Document
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use flyout_core as core;

pub mod program;
pub mod user_interface;

pub use program::Program;
pub use user_interface::UserInterface;
