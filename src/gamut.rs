//! Gamut clipping for conversions into the 8-bit sRGB color space.

use bitflags::bitflags;

use crate::Component;

/// Tolerance allowed on either side of the [0, 1] linear-light range before
/// a component counts as clipped.
pub const GAMUT_EPSILON: Component = 1.0e-6;

bitflags! {
    /// Flags to mark channels that had to be clamped while converting into
    /// the sRGB gamut.
    ///
    /// Clipping is an expected, recoverable occurrence (an XYZ or Lab value
    /// may simply have no 8-bit sRGB representation), so it is reported
    /// through these flags rather than an error.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct ClipFlags : u8 {
        /// Set when the red channel was clamped.
        const RED = 1 << 0;
        /// Set when the green channel was clamped.
        const GREEN = 1 << 1;
        /// Set when the blue channel was clamped.
        const BLUE = 1 << 2;
    }
}

impl ClipFlags {
    /// Whether any channel was clamped. Callers should surface a "clipped to
    /// gamut" warning when this is true.
    pub fn out_of_gamut(&self) -> bool {
        !self.is_empty()
    }
}

/// Clamp a linear-light component into [0, 1], recording `flag` when the
/// value was outside the range by more than [`GAMUT_EPSILON`].
pub(crate) fn clip(value: Component, flags: &mut ClipFlags, flag: ClipFlags) -> Component {
    if value < -GAMUT_EPSILON || value > 1.0 + GAMUT_EPSILON {
        *flags |= flag;
    }
    value.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_records_the_channel_that_was_clamped() {
        let mut flags = ClipFlags::empty();

        assert_eq!(clip(0.5, &mut flags, ClipFlags::RED), 0.5);
        assert!(flags.is_empty());

        assert_eq!(clip(1.25, &mut flags, ClipFlags::GREEN), 1.0);
        assert_eq!(flags, ClipFlags::GREEN);

        assert_eq!(clip(-0.25, &mut flags, ClipFlags::BLUE), 0.0);
        assert_eq!(flags, ClipFlags::GREEN | ClipFlags::BLUE);
        assert!(flags.out_of_gamut());
    }

    #[test]
    fn values_within_the_tolerance_are_not_flagged() {
        let mut flags = ClipFlags::empty();

        // Still clamped into [0, 1], but too close to the boundary to count
        // as out of gamut.
        assert_eq!(clip(1.0 + GAMUT_EPSILON / 2.0, &mut flags, ClipFlags::RED), 1.0);
        assert_eq!(clip(-GAMUT_EPSILON / 2.0, &mut flags, ClipFlags::GREEN), 0.0);
        assert!(!flags.out_of_gamut());

        assert_eq!(clip(1.0 + GAMUT_EPSILON * 2.0, &mut flags, ClipFlags::RED), 1.0);
        assert!(flags.out_of_gamut());
    }

    #[test]
    fn flags_are_empty_by_default() {
        assert!(!ClipFlags::default().out_of_gamut());
    }
}
