//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};

use crate::Component;

pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Build a [`Transform`] from the 9 values of a 3x3 matrix. Arguments are
/// given one matrix column per line, matching the layout used by the
/// conversion constants.
#[allow(clippy::too_many_arguments)]
#[rustfmt::skip]
pub const fn transform_3x3(
    m11: Component, m12: Component, m13: Component,
    m21: Component, m22: Component, m23: Component,
    m31: Component, m32: Component, m33: Component,
) -> Transform {
    Transform::new(
        m11, m12, m13, 0.0,
        m21, m22, m23, 0.0,
        m31, m32, m33, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(
    transform: &Transform,
    x: Component,
    y: Component,
    z: Component,
) -> [Component; 3] {
    let Vector { x, y, z, .. } = transform.transform_vector3d(Vector::new(x, y, z));
    [x, y, z]
}

/// Tolerance used when checking a delta or denominator for degeneracy.
pub const EPSILON: Component = 1.0e-12;

/// Check that a value is close enough to zero to have no usable magnitude.
pub fn almost_zero(value: Component) -> bool {
    value.abs() < EPSILON
}

/// Map NaN to zero, leaving any other value untouched.
pub fn normalize(value: Component) -> Component {
    if value.is_nan() {
        0.0
    } else {
        value
    }
}

/// Normalize a hue angle in degrees into the range [0, 360).
pub fn normalize_hue(hue: Component) -> Component {
    hue.rem_euclid(360.0)
}
