//! Test your [flyout] programs in headless mode.
//!
//! A [`Simulator`] drives a [`Program`] without a window: it feeds it
//! synthetic pointer events through the same path a real event loop uses and
//! records what the program draws.
//!
//! ```no_run
//! # use flyout_runtime::Program;
//! # fn check<P: Program<Renderer = flyout_runtime::core::renderer::Headless>>(program: P) -> Result<(), flyout_test::Error> {
//! use flyout_runtime::core::outside::Document;
//!
//! let mut ui = flyout_test::simulator(program, Document::new());
//!
//! let _ = ui.click_on("Keypair")?;
//! assert!(ui.texts().iter().any(|text| text == "Generate new keypair"));
//! # Ok(())
//! # }
//! ```
//!
//! [flyout]: https://github.com/flyout-rs/flyout
#![cfg_attr(docsrs, feature(doc_cfg))]
pub use flyout_runtime as runtime;
pub use flyout_runtime::core;

mod simulator;

pub use simulator::Simulator;

use crate::core::outside::Document;
use crate::core::renderer::Headless;
use crate::runtime::Program;

/// Creates a new [`Simulator`] for the given [`Program`].
pub fn simulator<P>(program: P, document: Document) -> Simulator<P>
where
    P: Program<Renderer = Headless>,
{
    Simulator::new(program, document)
}

/// A test error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// No drawn text matched the given content.
    #[error("no text matching {0:?} was found")]
    NotFound(String),
}
