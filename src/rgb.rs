//! Model a device color in the 8-bit sRGB color space.

/// A gamma encoded color in the 8-bit sRGB color space.
///
/// The channel type enforces the [0, 255] range; conversions producing an
/// [`Rgb`] clamp and round before constructing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    /// The red channel of the color.
    pub red: u8,
    /// The green channel of the color.
    pub green: u8,
    /// The blue channel of the color.
    pub blue: u8,
}

impl Rgb {
    /// Create a new color with RGB (red, green, blue) channels.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}
