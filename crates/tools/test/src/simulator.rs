use crate::Error;
use crate::core::event::{self, Event};
use crate::core::outside::Document;
use crate::core::renderer::{Headless, Primitive};
use crate::core::{Point, Rectangle, Size, mouse, touch};
use crate::runtime::{Program, UserInterface};

/// A headless driver for a [`Program`].
///
/// Every simulated event goes through a fresh [`UserInterface`] built from
/// the current view of the program; published messages are handed to the
/// program before the next event.
pub struct Simulator<P: Program<Renderer = Headless>> {
    program: P,
    document: Document,
    renderer: Headless,
    size: Size,
    cursor: mouse::Cursor,
}

impl<P> Simulator<P>
where
    P: Program<Renderer = Headless>,
{
    /// The default size of the simulated window.
    pub const DEFAULT_SIZE: Size = Size::new(1024.0, 768.0);

    /// Creates a new [`Simulator`] for the given [`Program`], dispatching
    /// outside presses through the given [`Document`].
    pub fn new(program: P, document: Document) -> Self {
        Self {
            program,
            document,
            renderer: Headless::new(),
            size: Self::DEFAULT_SIZE,
            cursor: mouse::Cursor::Unavailable,
        }
    }

    /// Sets the size of the simulated window.
    #[must_use]
    pub fn with_size(mut self, size: impl Into<Size>) -> Self {
        self.size = size.into();
        self
    }

    /// Sets the [`Headless`] renderer used to measure and record the program.
    ///
    /// Use it to simulate a configured text size.
    #[must_use]
    pub fn with_renderer(mut self, renderer: Headless) -> Self {
        self.renderer = renderer;
        self
    }

    /// Returns the [`Program`] being simulated.
    pub fn program(&self) -> &P {
        &self.program
    }

    /// Returns a mutable reference to the [`Program`] being simulated.
    pub fn program_mut(&mut self) -> &mut P {
        &mut self.program
    }

    /// Returns the [`Document`] of the [`Simulator`].
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Moves the cursor to the given position and clicks the left button.
    pub fn click(&mut self, position: impl Into<Point>) -> Vec<event::Status> {
        let position = position.into();

        self.simulate([
            Event::Mouse(mouse::Event::CursorMoved { position }),
            Event::Mouse(mouse::Event::ButtonPressed {
                button: mouse::Button::Left,
            }),
            Event::Mouse(mouse::Event::ButtonReleased {
                button: mouse::Button::Left,
            }),
        ])
    }

    /// Touches the screen at the given position and lifts the finger.
    pub fn tap(&mut self, position: impl Into<Point>) -> Vec<event::Status> {
        let position = position.into();
        let id = touch::Finger(0);

        self.simulate([
            Event::Touch(touch::Event::FingerPressed { id, position }),
            Event::Touch(touch::Event::FingerLifted { id, position }),
        ])
    }

    /// Clicks the center of the first drawn text matching `content`.
    pub fn click_on(&mut self, content: &str) -> Result<Vec<event::Status>, Error> {
        let bounds = self
            .find(content)
            .ok_or_else(|| Error::NotFound(content.to_owned()))?;

        Ok(self.click(bounds.center()))
    }

    /// Simulates the given events, one at a time.
    pub fn simulate(&mut self, events: impl IntoIterator<Item = Event>) -> Vec<event::Status> {
        let mut statuses = Vec::new();

        for event in events {
            log::trace!("Simulating {event:?}");

            if let Event::Mouse(mouse::Event::CursorMoved { position }) = event {
                self.cursor = mouse::Cursor::Available(position);
            }

            let mut messages = Vec::new();

            {
                let mut ui = UserInterface::build(
                    self.program.view(),
                    self.size,
                    &self.renderer,
                    &self.document,
                );

                let (_state, event_statuses) = ui.update(
                    std::slice::from_ref(&event),
                    self.cursor,
                    &self.renderer,
                    &mut messages,
                );

                statuses.extend(event_statuses);
            }

            for message in messages {
                self.program.update(message);
            }
        }

        statuses
    }

    /// Draws the current view of the [`Program`] and returns the recorded
    /// primitives.
    pub fn primitives(&mut self) -> &[Primitive] {
        self.renderer.clear();

        let ui = UserInterface::build(
            self.program.view(),
            self.size,
            &self.renderer,
            &self.document,
        );
        ui.draw(&mut self.renderer, self.cursor);

        self.renderer.primitives()
    }

    /// Draws the current view of the [`Program`] and returns its texts, in
    /// drawing order.
    pub fn texts(&mut self) -> Vec<String> {
        let _ = self.primitives();

        self.renderer.texts().map(str::to_owned).collect()
    }

    /// Returns the bounds of the first drawn text matching `content`.
    pub fn find(&mut self, content: &str) -> Option<Rectangle> {
        self.primitives()
            .iter()
            .find_map(|primitive| match primitive {
                Primitive::Text {
                    content: text,
                    bounds,
                    ..
                } if text == content => Some(*bounds),
                Primitive::Text { .. } | Primitive::Quad { .. } => None,
            })
    }
}
