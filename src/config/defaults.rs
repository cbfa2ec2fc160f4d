// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for the zoom widget settings.
//!
//! This module is the single source of truth for the defaults used by
//! [`crate::ui::state::ZoomSettings`] and the `settings.toml` loader.

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Fractional zoom increment per wheel tick or toolbar press (0.2 = 20%).
pub const DEFAULT_ZOOM_STEP: f32 = 0.2;

/// Minimum allowed zoom factor.
pub const DEFAULT_MIN_ZOOM: f32 = 0.125;

/// Maximum allowed zoom factor.
pub const DEFAULT_MAX_ZOOM: f32 = 1024.0;

/// Zoom factor restored by a reset (1.0 = baseline size).
pub const DEFAULT_INITIAL_ZOOM: f32 = 1.0;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Share of the host width the image occupies after a reset.
pub const BASELINE_WIDTH_RATIO: f32 = 0.9;

/// Degrees added or removed by a single rotation.
pub const ROTATION_STEP_DEGREES: i32 = 90;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_ZOOM_STEP > 0.0);
    assert!(DEFAULT_MIN_ZOOM > 0.0);
    assert!(DEFAULT_MAX_ZOOM >= DEFAULT_MIN_ZOOM);
    assert!(DEFAULT_INITIAL_ZOOM >= DEFAULT_MIN_ZOOM);
    assert!(DEFAULT_INITIAL_ZOOM <= DEFAULT_MAX_ZOOM);
    assert!(BASELINE_WIDTH_RATIO > 0.0);
    assert!(BASELINE_WIDTH_RATIO <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_defaults_match_widget_contract() {
        assert_eq!(DEFAULT_ZOOM_STEP, 0.2);
        assert_eq!(DEFAULT_MIN_ZOOM, 0.125);
        assert_eq!(DEFAULT_MAX_ZOOM, 1024.0);
        assert_eq!(DEFAULT_INITIAL_ZOOM, 1.0);
    }

    #[test]
    fn rotation_step_is_quarter_turn() {
        assert_eq!(ROTATION_STEP_DEGREES, 90);
    }
}
