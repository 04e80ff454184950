//! Model a color with the HSV notation in the sRGB color space.

use crate::Component;

/// A color specified with the HSV notation in the sRGB color space.
///
/// Components are stored as given; [`Hsv::to_rgb`](crate::Hsv::to_rgb)
/// normalizes the hue into [0, 360) and clamps saturation and value into
/// [0, 1], so an out-of-range [`Hsv`] is never rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    /// The hue component of the color, in degrees.
    pub hue: Component,
    /// The saturation component of the color.
    pub saturation: Component,
    /// The value component of the color.
    pub value: Component,
}

impl Hsv {
    /// Create a new color with the HSV notation.
    pub const fn new(hue: Component, saturation: Component, value: Component) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_are_stored_untouched() {
        let hsv = Hsv::new(420.0, 1.5, -0.25);
        assert_eq!(hsv.hue, 420.0);
        assert_eq!(hsv.saturation, 1.5);
        assert_eq!(hsv.value, -0.25);
    }
}
