//! Easing curves for viewport animation.

/// Fast start, gentle landing.
#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Interpolate between two rows. `t` is clamped to `0.0..=1.0`.
#[must_use]
pub fn lerp_rows(from: u16, to: u16, t: f32) -> u16 {
    let t = t.clamp(0.0, 1.0);
    let from_f = f32::from(from);
    let to_f = f32::from(to);
    let value = (from_f + (to_f - from_f) * t).round();
    value.clamp(0.0, f32::from(u16::MAX)) as u16
}
