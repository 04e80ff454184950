//! Model a color in the CIE-Lab color space.

use crate::Component;

/// A color in the CIE L*a*b* perceptual color space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lab {
    /// The lightness component of the color, nominally in [0, 100].
    pub lightness: Component,
    /// The a (green to red) component of the color.
    pub a: Component,
    /// The b (blue to yellow) component of the color.
    pub b: Component,
}

impl Lab {
    /// Create a new color in the CIE-Lab color space.
    pub const fn new(lightness: Component, a: Component, b: Component) -> Self {
        Self { lightness, a, b }
    }
}
