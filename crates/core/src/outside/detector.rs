use crate::Rectangle;
use crate::outside::{Listener, Watch, WatchId};

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// A registered [`Watch`].
///
/// The [`Watch`] is deregistered when the [`Registration`] is dropped.
pub struct Registration {
    id: WatchId,
    listener: Rc<dyn Listener>,
}

impl Registration {
    /// Registers the given [`Watch`] in the [`Listener`].
    pub fn new(listener: Rc<dyn Listener>, watch: Watch) -> Self {
        let id = listener.register(watch);

        Self { id, listener }
    }

    /// Returns the [`WatchId`] of the [`Registration`].
    pub fn id(&self) -> WatchId {
        self.id
    }

    /// Marks the [`Watch`] as placed in the current layout of its
    /// [`Listener`].
    pub fn mark_placed(&self) {
        self.listener.mark_placed(self.id);
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        let _ = self.listener.deregister(self.id);
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

/// Watches a region for outside presses while active.
///
/// A [`Detector`] owns the region it protects. Its owner keeps the region up
/// to date and [`sync`]s the detector with its own state: the detector is
/// registered in its [`Listener`] exactly while active.
///
/// [`sync`]: Detector::sync
pub struct Detector {
    listener: Rc<dyn Listener>,
    region: Rc<Cell<Rectangle>>,
    registration: Option<Registration>,
}

impl Detector {
    /// Creates an inactive [`Detector`] for the given [`Listener`].
    pub fn new(listener: Rc<dyn Listener>) -> Self {
        Self {
            listener,
            region: Rc::new(Cell::new(Rectangle::ZERO)),
            registration: None,
        }
    }

    /// Returns the protected region.
    pub fn region(&self) -> Rectangle {
        self.region.get()
    }

    /// Sets the protected region.
    ///
    /// An active [`Detector`] uses the new region from the next interaction.
    pub fn set_region(&self, region: Rectangle) {
        self.region.set(region);
    }

    /// Marks the [`Detector`] as placed in the current layout, if active.
    ///
    /// The owner of an active [`Detector`] calls this every time it is laid
    /// out; otherwise its [`Listener`] may consider it unmounted.
    pub fn mark_placed(&self) {
        if let Some(registration) = &self.registration {
            registration.mark_placed();
        }
    }

    /// Returns true if the [`Detector`] is registered in its [`Listener`].
    pub fn is_active(&self) -> bool {
        self.registration.is_some()
    }

    /// Activates or deactivates the [`Detector`].
    ///
    /// `on_outside` is only used when the [`Detector`] becomes active.
    pub fn sync(&mut self, active: bool, on_outside: impl Fn() + 'static) {
        match (active, self.registration.is_some()) {
            (true, false) => {
                let watch = Watch::new(Rc::clone(&self.region), on_outside);

                self.registration = Some(Registration::new(Rc::clone(&self.listener), watch));
            }
            (false, true) => {
                self.deactivate();
            }
            _ => {}
        }
    }

    /// Deactivates the [`Detector`].
    pub fn deactivate(&mut self) {
        self.registration = None;
    }
}

impl fmt::Debug for Detector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Detector")
            .field("region", &self.region.get())
            .field("registration", &self.registration)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Event;
    use crate::outside::Document;
    use crate::{Point, Size, mouse};

    fn press(document: &Document, position: Point) -> usize {
        document.dispatch(
            &Event::Mouse(mouse::Event::ButtonPressed {
                button: mouse::Button::Left,
            }),
            mouse::Cursor::Available(position),
        )
    }

    #[test]
    fn test_registration_drop_deregisters() {
        let document = Document::new();

        let registration = Registration::new(
            Rc::new(document.clone()),
            Watch::new(Rc::new(Cell::new(Rectangle::ZERO)), || {}),
        );

        let id = registration.id();
        assert!(document.is_registered(id));

        drop(registration);

        assert!(!document.is_registered(id));
        assert!(document.is_empty());
    }

    #[test]
    fn test_sync() {
        let document = Document::new();
        let fired = Rc::new(Cell::new(0));

        let mut detector = Detector::new(Rc::new(document.clone()));
        detector.set_region(Rectangle::new(Point::ORIGIN, Size::new(10.0, 10.0)));

        let on_outside = {
            let fired = Rc::clone(&fired);
            move || fired.set(fired.get() + 1)
        };

        detector.sync(true, on_outside.clone());
        detector.sync(true, on_outside.clone());
        assert!(detector.is_active());
        assert_eq!(document.len(), 1);

        let _ = press(&document, Point::new(5.0, 5.0));
        assert_eq!(fired.get(), 0);

        let _ = press(&document, Point::new(50.0, 5.0));
        assert_eq!(fired.get(), 1);

        detector.sync(false, on_outside);
        assert!(!detector.is_active());
        assert!(document.is_empty());

        let _ = press(&document, Point::new(50.0, 5.0));
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_dropping_detector_deregisters() {
        let document = Document::new();

        let mut detector = Detector::new(Rc::new(document.clone()));
        detector.sync(true, || {});
        assert_eq!(document.len(), 1);

        drop(detector);
        assert!(document.is_empty());
    }

    #[test]
    fn test_unplaced_detector_is_dismissed() {
        let document = Document::new();
        let fired = Rc::new(Cell::new(0));

        let mut detector = Detector::new(Rc::new(document.clone()));
        detector.sync(true, {
            let fired = Rc::clone(&fired);
            move || fired.set(fired.get() + 1)
        });

        document.begin_layout();
        detector.mark_placed();
        assert_eq!(document.end_layout(), 0);

        document.begin_layout();
        assert_eq!(document.end_layout(), 1);
        assert_eq!(fired.get(), 1);
    }
}
