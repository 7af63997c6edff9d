//! Helper functions to create widgets.
use crate::core::Element;
use crate::dropdown::{self, Dropdown};
use crate::foldable::{self, Foldable};
use crate::{Column, Text};

/// Creates a new [`Text`] widget with the provided content.
pub fn text(content: impl Into<String>) -> Text {
    Text::new(content)
}

/// Creates a new [`Column`] with the given children.
pub fn column<'a, Message, Renderer>(
    children: impl IntoIterator<Item = Element<'a, Message, Renderer>>,
) -> Column<'a, Message, Renderer>
where
    Renderer: crate::core::Renderer,
{
    Column::with_children(children)
}

/// Creates a new [`Dropdown`] with the given [`dropdown::State`] and trigger.
pub fn dropdown<'a, Message, Renderer>(
    state: &dropdown::State,
    trigger: impl Into<Element<'a, Message, Renderer>>,
) -> Dropdown<'a, Message, Renderer>
where
    Message: Clone + 'a,
    Renderer: crate::core::Renderer + 'a,
{
    Dropdown::new(state, trigger)
}

/// Creates a new [`Foldable`] with the given [`foldable::State`], title and
/// body builder.
pub fn foldable<'a, Message, Renderer>(
    state: &'a foldable::State,
    title: impl Into<Element<'a, Message, Renderer>>,
    body: impl Fn() -> Element<'a, Message, Renderer> + 'a,
) -> Foldable<'a, Message, Renderer>
where
    Renderer: crate::core::Renderer,
{
    Foldable::new(state, title, body)
}
