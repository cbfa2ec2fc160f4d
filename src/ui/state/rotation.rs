// SPDX-License-Identifier: MPL-2.0
//! Rotation accumulator in 90° increments.
//!
//! The accumulator is not normalized: rotating clockwise four
//! times yields 360°, not 0°. Only the drawing and bounding-box code look at
//! the angle modulo 360.

use crate::config::ROTATION_STEP_DEGREES;

/// Rotation angle, always an integer multiple of 90°.
///
/// # Example
///
/// ```
/// use img_zoom::ui::state::RotationAngle;
///
/// let angle = RotationAngle::default().rotated(true);
/// assert_eq!(angle.degrees(), 90);
///
/// let full = angle.rotated(true).rotated(true).rotated(true);
/// assert_eq!(full.degrees(), 360);
/// assert_eq!(full.normalized_degrees(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RotationAngle(i32);

impl RotationAngle {
    /// No rotation (0°).
    pub const ZERO: Self = Self(0);

    /// Returns the accumulated angle in degrees.
    #[must_use]
    pub fn degrees(self) -> i32 {
        self.0
    }

    /// Returns the angle folded into `0..360`.
    #[must_use]
    pub fn normalized_degrees(self) -> i32 {
        self.0.rem_euclid(360)
    }

    /// Returns the angle in radians.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn radians(self) -> f32 {
        // Fold first so large accumulators keep full precision.
        (self.normalized_degrees() as f32).to_radians()
    }

    /// Adds 90° (clockwise) or subtracts 90° (counter-clockwise).
    #[must_use]
    pub fn rotated(self, clockwise: bool) -> Self {
        let delta = if clockwise {
            ROTATION_STEP_DEGREES
        } else {
            -ROTATION_STEP_DEGREES
        };
        Self(self.0.saturating_add(delta))
    }

    /// Returns true if width and height swap on screen (90° and 270° equivalents).
    #[must_use]
    pub fn swaps_dimensions(self) -> bool {
        self.normalized_degrees() % 180 == 90
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotated_accumulates_without_wrapping() {
        let mut angle = RotationAngle::ZERO;
        for _ in 0..5 {
            angle = angle.rotated(true);
        }
        assert_eq!(angle.degrees(), 450);
        assert_eq!(angle.normalized_degrees(), 90);
    }

    #[test]
    fn counterclockwise_goes_negative() {
        let angle = RotationAngle::ZERO.rotated(false);
        assert_eq!(angle.degrees(), -90);
        assert_eq!(angle.normalized_degrees(), 270);
    }

    #[test]
    fn rotation_is_reversible() {
        let angle = RotationAngle::ZERO.rotated(true).rotated(true);
        assert_eq!(angle.rotated(true).rotated(false), angle);
        assert_eq!(angle.rotated(false).rotated(true), angle);
    }

    #[test]
    fn swaps_dimensions_for_odd_quarter_turns() {
        assert!(!RotationAngle::ZERO.swaps_dimensions());
        assert!(RotationAngle::ZERO.rotated(true).swaps_dimensions());
        assert!(RotationAngle::ZERO.rotated(false).swaps_dimensions());
        assert!(!RotationAngle::ZERO
            .rotated(false)
            .rotated(false)
            .swaps_dimensions());
    }

    #[test]
    fn radians_conversion() {
        use std::f32::consts::PI;
        assert!((RotationAngle::ZERO.radians() - 0.0).abs() < f32::EPSILON);
        assert!((RotationAngle::ZERO.rotated(true).radians() - PI / 2.0).abs() < 0.001);
        assert!((RotationAngle::ZERO.rotated(false).radians() - 3.0 * PI / 2.0).abs() < 0.001);
    }
}
