use crate::event::Event;
use crate::mouse;
use crate::outside::Settings;
use crate::{Point, Rectangle};

use slotmap::SlotMap;

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

slotmap::new_key_type! {
    /// The identifier of a [`Watch`] registered in a [`Listener`].
    pub struct WatchId;
}

/// The sequence number of a pointer press seen by a [`Document`].
///
/// Interactions are numbered in the order they are dispatched, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Interaction(u64);

impl Interaction {
    /// The interaction preceding every dispatched one.
    pub const NONE: Self = Self(0);

    /// Returns the [`Interaction`] following this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// A region and the callback to invoke when a press lands outside of it.
#[derive(Clone)]
pub struct Watch {
    region: Rc<Cell<Rectangle>>,
    on_outside: Rc<dyn Fn()>,
}

impl Watch {
    /// Creates a new [`Watch`] over the given region.
    ///
    /// The region is shared: its owner may keep updating it (on every layout,
    /// for instance) while the [`Watch`] is registered.
    pub fn new(region: Rc<Cell<Rectangle>>, on_outside: impl Fn() + 'static) -> Self {
        Self {
            region,
            on_outside: Rc::new(on_outside),
        }
    }

    /// Returns the current region protected by the [`Watch`].
    pub fn region(&self) -> Rectangle {
        self.region.get()
    }

    /// Returns true if the given position lies outside the region.
    pub fn is_outside(&self, position: Point) -> bool {
        !self.region.get().contains(position)
    }

    /// Invokes the dismissal callback of the [`Watch`].
    pub fn dismiss(&self) {
        (self.on_outside)();
    }
}

impl fmt::Debug for Watch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Watch")
            .field("region", &self.region.get())
            .finish_non_exhaustive()
    }
}

/// A channel that interactions go through.
///
/// Implementors keep track of registered [`Watch`]es and invoke them when a
/// press lands outside of their region. Every method takes `&self`: a
/// [`Listener`] is a shared resource, handed to every overlay.
pub trait Listener {
    /// Registers a [`Watch`].
    ///
    /// The [`Watch`] must not observe the interaction currently being
    /// processed, if any; only the following ones.
    fn register(&self, watch: Watch) -> WatchId;

    /// Deregisters a [`Watch`], returning whether it was registered.
    ///
    /// Once this returns, the [`Watch`] must never be invoked again.
    fn deregister(&self, id: WatchId) -> bool;

    /// Returns true if the [`Watch`] with the given id is registered.
    fn is_registered(&self, id: WatchId) -> bool;

    /// Marks the [`Watch`] with the given id as placed in the current layout.
    ///
    /// Listeners that track layouts dismiss the watches that were not placed
    /// during a layout. Others may ignore it.
    fn mark_placed(&self, _id: WatchId) {}
}

/// The document-level [`Listener`].
///
/// A [`Document`] is a cheap handle: clones share the same registry.
///
/// The runtime [`dispatch`]es every event to the [`Document`] before any
/// widget processes it. It also wraps every layout in [`begin_layout`] and
/// [`end_layout`]: a watch that was not placed during a layout belongs to an
/// overlay that is no longer mounted, and is dismissed.
///
/// [`dispatch`]: Document::dispatch
/// [`begin_layout`]: Document::begin_layout
/// [`end_layout`]: Document::end_layout
#[derive(Clone, Default)]
pub struct Document {
    registry: Rc<RefCell<Registry>>,
}

#[derive(Default)]
struct Registry {
    watches: SlotMap<WatchId, Entry>,
    interaction: Interaction,
    layout: u64,
    settings: Settings,
}

struct Entry {
    watch: Watch,
    armed_after: Interaction,
    placed_in: u64,
}

impl Document {
    /// Creates a new [`Document`] with default [`Settings`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new [`Document`] with the given [`Settings`].
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                settings,
                ..Registry::default()
            })),
        }
    }

    /// Returns the [`Settings`] of the [`Document`].
    pub fn settings(&self) -> Settings {
        self.registry.borrow().settings
    }

    /// Returns the last [`Interaction`] dispatched to the [`Document`].
    pub fn interaction(&self) -> Interaction {
        self.registry.borrow().interaction
    }

    /// Returns the amount of registered [`Watch`]es.
    pub fn len(&self) -> usize {
        self.registry.borrow().watches.len()
    }

    /// Returns true if no [`Watch`] is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dispatches an [`Event`], invoking every armed [`Watch`] whose region
    /// does not contain the press.
    ///
    /// Events that are not presses under the [`Settings`] of the
    /// [`Document`] are ignored. Returns the amount of invoked watches.
    pub fn dispatch(&self, event: &Event, cursor: mouse::Cursor) -> usize {
        let (interaction, outside) = {
            let mut registry = self.registry.borrow_mut();

            let Some(position) = registry.settings.press_position(event, cursor) else {
                return 0;
            };

            registry.interaction = registry.interaction.next();

            let interaction = registry.interaction;

            let outside: Vec<(WatchId, Watch)> = registry
                .watches
                .iter()
                .filter(|(_, entry)| {
                    entry.armed_after < interaction && entry.watch.is_outside(position)
                })
                .map(|(id, entry)| (id, entry.watch.clone()))
                .collect();

            (interaction, outside)
        };

        let mut dismissed = 0;

        // The registry is released: callbacks may deregister any watch,
        // including the ones still pending here.
        for (id, watch) in outside {
            if !self.is_registered(id) {
                log::trace!("Skipping {id:?}: deregistered during {interaction:?}");
                continue;
            }

            log::debug!("Outside press ({interaction:?}) dismisses {id:?}");

            watch.dismiss();
            dismissed += 1;
        }

        dismissed
    }

    /// Starts a layout.
    ///
    /// Every registered [`Watch`] must be [`mark_placed`] before the layout
    /// ends, or it is dismissed.
    ///
    /// [`mark_placed`]: Listener::mark_placed
    pub fn begin_layout(&self) {
        let mut registry = self.registry.borrow_mut();

        registry.layout += 1;
    }

    /// Ends a layout, dismissing every [`Watch`] that was not placed during
    /// it. Returns the amount of dismissed watches.
    ///
    /// Watches registered since the layout started are left alone: they are
    /// placed in the next one.
    pub fn end_layout(&self) -> usize {
        let (layout, unplaced) = {
            let registry = self.registry.borrow();

            let unplaced: Vec<(WatchId, Watch)> = registry
                .watches
                .iter()
                .filter(|(_, entry)| entry.placed_in != registry.layout)
                .map(|(id, entry)| (id, entry.watch.clone()))
                .collect();

            (registry.layout, unplaced)
        };

        let mut dismissed = 0;

        for (id, watch) in unplaced {
            if !self.is_registered(id) {
                continue;
            }

            log::debug!("{id:?} was not placed in layout {layout}: dismissing");

            watch.dismiss();
            dismissed += 1;
        }

        dismissed
    }
}

impl Listener for Document {
    fn register(&self, watch: Watch) -> WatchId {
        let mut registry = self.registry.borrow_mut();
        let armed_after = registry.interaction;
        let placed_in = registry.layout;

        let id = registry.watches.insert(Entry {
            watch,
            armed_after,
            placed_in,
        });

        log::trace!("Registered {id:?} (armed after {armed_after:?})");

        id
    }

    fn deregister(&self, id: WatchId) -> bool {
        let removed = self.registry.borrow_mut().watches.remove(id);

        if removed.is_some() {
            log::trace!("Deregistered {id:?}");
        }

        // The entry is dropped after the registry is released, in case its
        // callback owns the last reference to something that deregisters.
        removed.is_some()
    }

    fn is_registered(&self, id: WatchId) -> bool {
        self.registry.borrow().watches.contains_key(id)
    }

    fn mark_placed(&self, id: WatchId) {
        let mut registry = self.registry.borrow_mut();
        let layout = registry.layout;

        if let Some(entry) = registry.watches.get_mut(id) {
            entry.placed_in = layout;
        }
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.registry.borrow();

        f.debug_struct("Document")
            .field("watches", &registry.watches.len())
            .field("interaction", &registry.interaction)
            .field("layout", &registry.layout)
            .field("settings", &registry.settings)
            .finish()
    }
}
