//! Detect pointer presses outside of a region.
//!
//! An overlay protects a region of the interface (its trigger and its floating
//! content). While the overlay is open, a pointer press anywhere else must
//! dismiss it.
//!
//! The pieces involved are:
//!
//! - a [`Listener`]: the shared, document-level channel interactions go
//!   through. [`Document`] is the implementation used by the runtime; tests
//!   can provide their own to synthesize interactions.
//! - a [`Watch`]: a region and the callback to invoke when a press lands
//!   outside of it.
//! - a [`Registration`]: a guard keeping a [`Watch`] registered until it is
//!   dropped.
//! - a [`Detector`]: the per-overlay handle that turns an active flag into
//!   a registration.
//!
//! A [`Watch`] only observes interactions that start strictly after it was
//! registered. The press that opens an overlay can never dismiss it.
mod detector;
mod document;
mod settings;

pub use detector::{Detector, Registration};
pub use document::{Document, Interaction, Listener, Watch, WatchId};
pub use settings::{Buttons, Settings};
