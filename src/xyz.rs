//! Model a color in the CIE-XYZ color space.

use crate::Component;

/// A color in the CIE 1931 XYZ color space, D65 illuminant, with tristimulus
/// values scaled so that the reference white has Y = 100.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Xyz {
    /// The X component of the color.
    pub x: Component,
    /// The Y component of the color.
    pub y: Component,
    /// The Z component of the color.
    pub z: Component,
}

impl Xyz {
    /// The D65 reference white point.
    pub const WHITE_POINT: Xyz = Xyz {
        x: 95.047,
        y: 100.0,
        z: 108.883,
    };

    /// Create a new color in the CIE-XYZ color space.
    pub const fn new(x: Component, y: Component, z: Component) -> Self {
        Self { x, y, z }
    }
}
