use crate::Size;

/// A set of size constraints for layouting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    min: Size,
    max: Size,
}

impl Limits {
    /// No limits
    pub const NONE: Limits = Limits {
        min: Size::ZERO,
        max: Size::INFINITE,
    };

    /// Creates new [`Limits`] with the given minimum and maximum [`Size`].
    pub const fn new(min: Size, max: Size) -> Limits {
        Limits { min, max }
    }

    /// Returns the minimum [`Size`] of the [`Limits`].
    pub fn min(&self) -> Size {
        self.min
    }

    /// Returns the maximum [`Size`] of the [`Limits`].
    pub fn max(&self) -> Size {
        self.max
    }

    /// Applies a minimum width constraint to the current [`Limits`].
    #[must_use]
    pub fn min_width(mut self, min_width: f32) -> Limits {
        self.min.width = self.min.width.max(min_width).min(self.max.width);

        self
    }

    /// Removes the minimum width constraint of the current [`Limits`].
    #[must_use]
    pub fn loose(self) -> Limits {
        Limits {
            min: Size::ZERO,
            max: self.max,
        }
    }

    /// Computes the resulting [`Size`] that fits the [`Limits`] given
    /// some intrinsic size of a widget.
    pub fn resolve(&self, intrinsic_size: Size) -> Size {
        Size::new(
            intrinsic_size
                .width
                .min(self.max.width)
                .max(self.min.width),
            intrinsic_size
                .height
                .min(self.max.height)
                .max(self.min.height),
        )
    }
}
