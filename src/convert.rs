//! Conversions between the supported color models.
//!
//! Each conversion is a total function: inputs outside a model's nominal
//! range are normalized or clamped, never rejected. Conversions that end in
//! the 8-bit sRGB gamut additionally return [`ClipFlags`] describing any
//! channels that had to be clamped on the way.

use crate::gamut::{self, ClipFlags};
use crate::math::{almost_zero, normalize, normalize_hue, transform, transform_3x3, Transform};
use crate::{Component, Hsv, Lab, Rgb, Xyz};

impl Rgb {
    /// Convert this color to the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        let red = self.red as Component / 255.0;
        let green = self.green as Component / 255.0;
        let blue = self.blue as Component / 255.0;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        let hue = if almost_zero(delta) {
            0.0
        } else {
            let hue = 60.0
                * if max == red {
                    ((green - blue) / delta) % 6.0
                } else if max == green {
                    (blue - red) / delta + 2.0
                } else {
                    (red - green) / delta + 4.0
                };
            if hue < 0.0 {
                hue + 360.0
            } else {
                hue
            }
        };

        let saturation = if almost_zero(max) { 0.0 } else { delta / max };

        Hsv::new(hue, saturation, max)
    }

    /// Convert this color to the CIE-XYZ color space.
    ///
    /// Tristimulus values come out scaled to the [0, 100] nominal range.
    /// This direction never leaves the XYZ gamut, so no flags are reported.
    pub fn to_xyz(&self) -> Xyz {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const TO_XYZ: Transform = transform_3x3(
            0.4123907992659595,  0.21263900587151036, 0.01933081871559185,
            0.35758433938387796, 0.7151686787677559,  0.11919477979462599,
            0.1804807884018343,  0.07219231536073371, 0.9505321522496606,
        );

        let red = util::srgb_to_linear(self.red as Component / 255.0);
        let green = util::srgb_to_linear(self.green as Component / 255.0);
        let blue = util::srgb_to_linear(self.blue as Component / 255.0);

        let [x, y, z] = transform(&TO_XYZ, red, green, blue);

        Xyz::new(100.0 * x, 100.0 * y, 100.0 * z)
    }

    /// Convert this color to the CIE-Lab color space, going through CIE-XYZ.
    pub fn to_lab(&self) -> Lab {
        self.to_xyz().to_lab()
    }
}

impl Hsv {
    /// Convert this color from the HSV notation to the sRGB color space.
    ///
    /// The hue is wrapped into [0, 360) and saturation and value are clamped
    /// into [0, 1] first, so any HSV input maps to a valid color.
    pub fn to_rgb(&self) -> Rgb {
        let hue = normalize_hue(normalize(self.hue));
        let saturation = normalize(self.saturation).clamp(0.0, 1.0);
        let value = normalize(self.value).clamp(0.0, 1.0);

        let chroma = value * saturation;
        let x = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
        let m = value - chroma;

        let (red, green, blue) = if hue < 60.0 {
            (chroma, x, 0.0)
        } else if hue < 120.0 {
            (x, chroma, 0.0)
        } else if hue < 180.0 {
            (0.0, chroma, x)
        } else if hue < 240.0 {
            (0.0, x, chroma)
        } else if hue < 300.0 {
            (x, 0.0, chroma)
        } else {
            (chroma, 0.0, x)
        };

        Rgb::new(
            util::to_8bit(red + m),
            util::to_8bit(green + m),
            util::to_8bit(blue + m),
        )
    }
}

impl Xyz {
    /// Convert this color to the 8-bit sRGB color space.
    ///
    /// Linear-light components outside [0, 1] (by more than
    /// [`crate::GAMUT_EPSILON`]) mark their channel in the returned
    /// [`ClipFlags`]; the components are clamped into range either way.
    pub fn to_rgb(&self) -> (Rgb, ClipFlags) {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const FROM_XYZ: Transform = transform_3x3(
             3.2409699419045213, -0.9692436362808798,  0.05563007969699361,
            -1.5373831775700935,  1.8759675015077206, -0.20397695888897657,
            -0.4986107602930033,  0.04155505740717561, 1.0569715142428786,
        );

        let [red, green, blue] =
            transform(&FROM_XYZ, self.x / 100.0, self.y / 100.0, self.z / 100.0);

        let mut flags = ClipFlags::empty();
        let red = gamut::clip(red, &mut flags, ClipFlags::RED);
        let green = gamut::clip(green, &mut flags, ClipFlags::GREEN);
        let blue = gamut::clip(blue, &mut flags, ClipFlags::BLUE);

        let rgb = Rgb::new(
            util::to_8bit(util::linear_to_srgb(red)),
            util::to_8bit(util::linear_to_srgb(green)),
            util::to_8bit(util::linear_to_srgb(blue)),
        );

        (rgb, flags)
    }

    /// Convert this color to the CIE-Lab color space.
    pub fn to_lab(&self) -> Lab {
        let fx = util::f_lab(self.x / Xyz::WHITE_POINT.x);
        let fy = util::f_lab(self.y / Xyz::WHITE_POINT.y);
        let fz = util::f_lab(self.z / Xyz::WHITE_POINT.z);

        Lab::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
    }
}

impl Lab {
    /// Convert this color to the CIE-XYZ color space.
    pub fn to_xyz(&self) -> Xyz {
        let fy = (self.lightness + 16.0) / 116.0;
        let fx = fy + self.a / 500.0;
        let fz = fy - self.b / 200.0;

        Xyz::new(
            util::f_inv_lab(fx) * Xyz::WHITE_POINT.x,
            util::f_inv_lab(fy) * Xyz::WHITE_POINT.y,
            util::f_inv_lab(fz) * Xyz::WHITE_POINT.z,
        )
    }

    /// Convert this color to the 8-bit sRGB color space, going through
    /// CIE-XYZ. Clipped channels are reported in the returned [`ClipFlags`].
    pub fn to_rgb(&self) -> (Rgb, ClipFlags) {
        self.to_xyz().to_rgb()
    }
}

mod util {
    use crate::Component;

    /// Threshold of the CIE piecewise approximation, (6/29)^3. Below it the
    /// cube root is replaced with a linear segment to avoid the infinite
    /// slope near zero.
    pub const LAB_EPSILON: Component = 0.008856;

    /// Remove the sRGB gamma encoding from a [0, 1] component.
    pub fn srgb_to_linear(value: Component) -> Component {
        if value <= 0.04045 {
            value / 12.92
        } else {
            ((value + 0.055) / 1.055).powf(2.4)
        }
    }

    /// Apply the sRGB gamma encoding to a [0, 1] linear-light component.
    pub fn linear_to_srgb(value: Component) -> Component {
        if value <= 0.0031308 {
            12.92 * value
        } else {
            1.055 * value.powf(1.0 / 2.4) - 0.055
        }
    }

    /// The CIE Lab forward piecewise function.
    pub fn f_lab(t: Component) -> Component {
        if t >= LAB_EPSILON {
            t.cbrt()
        } else {
            7.787 * t + 16.0 / 116.0
        }
    }

    /// The inverse of [`f_lab`].
    pub fn f_inv_lab(t: Component) -> Component {
        let t3 = t * t * t;
        if t3 >= LAB_EPSILON {
            t3
        } else {
            (t - 16.0 / 116.0) / 7.787
        }
    }

    /// Quantize a [0, 1] component to an 8-bit channel, clamping first.
    pub fn to_8bit(value: Component) -> u8 {
        (value.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}
