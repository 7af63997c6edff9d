//! Track whether an overlay is open.
//!
//! Every overlay (a dropdown menu, a foldable panel) is governed by a single
//! [`Visibility`]. The state only changes through [`Visibility::apply`], which
//! takes the [`Cause`] of the change and yields a [`Transition`] when the state
//! actually changed:
//!
//! | From     | Cause       | To       |
//! |----------|-------------|----------|
//! | `Closed` | `Trigger`   | `Open`   |
//! | `Open`   | `Trigger`   | `Closed` |
//! | `Open`   | `Outside`   | `Closed` |
//! | `Open`   | `Selection` | `Closed` |
//!
//! Outside interactions and selections never open an overlay; applied to a
//! closed one they are no-ops.
use std::fmt;
use std::rc::Rc;

/// Whether an overlay is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    /// The overlay content is not mounted.
    #[default]
    Closed,

    /// The overlay content is mounted.
    Open,
}

impl Visibility {
    /// Returns true if the [`Visibility`] is [`Visibility::Open`].
    pub fn is_open(self) -> bool {
        self == Visibility::Open
    }

    /// Returns the opposite [`Visibility`].
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Visibility::Closed => Visibility::Open,
            Visibility::Open => Visibility::Closed,
        }
    }

    /// Applies the given [`Cause`], returning the resulting [`Transition`]
    /// if the state changed.
    pub fn apply(&mut self, cause: Cause) -> Option<Transition> {
        let from = *self;

        let to = match (cause, from) {
            (Cause::Trigger, _) => from.toggled(),
            (Cause::Outside | Cause::Selection, Visibility::Open) => Visibility::Closed,
            (Cause::Outside | Cause::Selection, Visibility::Closed) => return None,
        };

        *self = to;

        Some(Transition { from, to, cause })
    }
}

impl From<bool> for Visibility {
    fn from(open: bool) -> Self {
        if open {
            Visibility::Open
        } else {
            Visibility::Closed
        }
    }
}

/// The reason an overlay is asked to change its [`Visibility`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cause {
    /// The trigger of the overlay was interacted with.
    Trigger,

    /// A pointer was pressed outside of the overlay.
    Outside,

    /// An item inside the overlay was selected.
    Selection,
}

/// A change of [`Visibility`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// The previous [`Visibility`].
    pub from: Visibility,

    /// The new [`Visibility`].
    pub to: Visibility,

    /// What caused the change.
    pub cause: Cause,
}

/// The lifecycle notifications of an overlay.
///
/// Listeners are plain notifications: they are called after a [`Transition`]
/// has happened and they cannot veto it. A panicking listener is not caught.
#[derive(Clone, Default)]
pub struct Lifecycle {
    on_show: Option<Rc<dyn Fn()>>,
    on_hide: Option<Rc<dyn Fn()>>,
}

impl Lifecycle {
    /// Creates a [`Lifecycle`] without listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the listener called when the overlay opens.
    #[must_use]
    pub fn on_show(mut self, f: impl Fn() + 'static) -> Self {
        self.on_show = Some(Rc::new(f));
        self
    }

    /// Sets the listener called when the overlay closes.
    #[must_use]
    pub fn on_hide(mut self, f: impl Fn() + 'static) -> Self {
        self.on_hide = Some(Rc::new(f));
        self
    }

    /// Calls the listener matching the new state of the [`Transition`].
    pub fn notify(&self, transition: Transition) {
        let listener = match transition.to {
            Visibility::Open => &self.on_show,
            Visibility::Closed => &self.on_hide,
        };

        if let Some(listener) = listener {
            listener();
        }
    }
}

impl fmt::Debug for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lifecycle")
            .field("on_show", &self.on_show.is_some())
            .field("on_hide", &self.on_hide.is_some())
            .finish()
    }
}
