/// Affine remap of `value` from `[low1, high1]` onto `[low2, high2]`.
///
/// The result is not clamped. A degenerate input range maps everything to
/// `low2` rather than dividing by zero.
#[inline]
pub fn remap(value: f32, low1: f32, high1: f32, low2: f32, high2: f32) -> f32 {
    let span = high1 - low1;
    if span.abs() <= f32::EPSILON {
        return low2;
    }
    low2 + (high2 - low2) * (value - low1) / span
}

/// Rotate the point `(a, b)` clockwise by `angle` within its plane.
#[inline]
pub fn rotate_clockwise(a: f32, b: f32, angle: f32) -> (f32, f32) {
    let (s, c) = angle.sin_cos();
    (a * c + b * s, b * c - a * s)
}

/// Rotate the point `(a, b)` counter-clockwise by `angle` within its plane.
#[inline]
pub fn rotate_counter_clockwise(a: f32, b: f32, angle: f32) -> (f32, f32) {
    let (s, c) = angle.sin_cos();
    (a * c - b * s, b * c + a * s)
}
