//! Stack independent foldable sections.
//!
//! A disclosure [`List`] is a fixed, ordered sequence of [`Section`]s. Every
//! section owns its own [`foldable::State`]: opening one never closes another.
//!
//! # Example
//! ```no_run
//! use flyout_widget::disclosure::{List, Section};
//! use flyout_widget::{Element, text};
//!
//! let list: List<()> = List::new([
//!     Section::new("Program ID", "The address of the program", || {
//!         text("11111111111111111111111111111111").into()
//!     })
//!     .open(true),
//!     Section::new("IDL", "The interface description", || text("idl.json").into()),
//! ]);
//!
//! let view: Element<'_, ()> = list.view();
//! ```
use crate::column::Column;
use crate::core::visibility::Transition;
use crate::core::Element;
use crate::foldable::{self, Foldable};
use crate::text::Text;

use std::fmt;

/// The spacing between the sections of a [`List`].
const SPACING: f32 = 8.0;

/// A titled section of a [`List`].
pub struct Section<Message, Renderer = crate::Renderer> {
    title: String,
    description: String,
    content: Box<dyn Fn() -> Element<'static, Message, Renderer>>,
    state: foldable::State,
}

impl<Message, Renderer> Section<Message, Renderer>
where
    Renderer: crate::core::Renderer,
{
    /// Creates a new, closed [`Section`].
    ///
    /// `content` is called to build the body of the section every time it is
    /// opened.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        content: impl Fn() -> Element<'static, Message, Renderer> + 'static,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            content: Box::new(content),
            state: foldable::State::default(),
        }
    }

    /// Sets whether the [`Section`] starts open.
    #[must_use]
    pub fn open(mut self, open: bool) -> Self {
        self.state = foldable::State::new(open);
        self
    }

    /// Returns the title of the [`Section`].
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description of the [`Section`].
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns true if the [`Section`] is open.
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Opens the [`Section`] if closed, and closes it otherwise.
    pub fn toggle(&self) -> Option<Transition> {
        self.state.toggle()
    }
}

impl<Message, Renderer> fmt::Debug for Section<Message, Renderer> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Section")
            .field("title", &self.title)
            .field("description", &self.description)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// A fixed, ordered list of independent [`Section`]s.
pub struct List<Message, Renderer = crate::Renderer> {
    sections: Vec<Section<Message, Renderer>>,
}

impl<Message, Renderer> List<Message, Renderer>
where
    Renderer: crate::core::Renderer,
{
    /// Creates a new [`List`] with the given sections, in order.
    pub fn new(sections: impl IntoIterator<Item = Section<Message, Renderer>>) -> Self {
        Self {
            sections: sections.into_iter().collect(),
        }
    }

    /// Returns the amount of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns true if the [`List`] has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Returns an iterator over the sections, in order.
    pub fn iter(&self) -> impl Iterator<Item = &Section<Message, Renderer>> {
        self.sections.iter()
    }

    /// Returns the section at the given index, if any.
    pub fn get(&self, index: usize) -> Option<&Section<Message, Renderer>> {
        self.sections.get(index)
    }

    /// Returns true if the section at the given index exists and is open.
    pub fn is_open(&self, index: usize) -> bool {
        self.get(index).is_some_and(Section::is_open)
    }

    /// Toggles the section at the given index.
    ///
    /// Returns `None` if there is no such section.
    pub fn toggle(&self, index: usize) -> Option<Transition> {
        self.get(index)?.toggle()
    }

    /// Builds the widgets of the [`List`].
    ///
    /// Every section shows its title. Open sections also show their
    /// description and their content.
    pub fn view(&self) -> Element<'_, Message, Renderer>
    where
        Message: 'static,
        Renderer: 'static,
    {
        Column::with_children(self.sections.iter().map(|section| {
            Foldable::new(&section.state, Text::new(&section.title), move || {
                Column::new()
                    .spacing(SPACING / 2.0)
                    .push(Text::new(&section.description))
                    .push((section.content)())
                    .into()
            })
            .into()
        }))
        .spacing(SPACING)
        .into()
    }
}

impl<Message, Renderer> fmt::Debug for List<Message, Renderer> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.sections).finish()
    }
}
