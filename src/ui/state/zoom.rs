// SPDX-License-Identifier: MPL-2.0
//! Zoom settings and the clamped zoom factor.
//!
//! [`ZoomSettings`] is validated once at construction and immutable afterwards.
//! [`ZoomFactor`] can only be produced through the settings, so every stored
//! zoom value is already inside `[min, max]`.

use crate::config::{
    DEFAULT_INITIAL_ZOOM, DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, DEFAULT_ZOOM_STEP,
};
use crate::error::{Result, SettingsError};

/// Immutable zoom configuration: step size, bounds and reset value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomSettings {
    step: f32,
    min: f32,
    max: f32,
    initial: f32,
}

impl ZoomSettings {
    /// Creates validated settings.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::InvalidSettings`] unless
    /// `step > 0`, `min > 0`, `min <= max` and `min <= initial <= max`
    /// (all finite).
    pub fn new(step: f32, min: f32, max: f32, initial: f32) -> Result<Self> {
        if !step.is_finite() || step <= 0.0 {
            return Err(SettingsError::NonPositiveStep(step).into());
        }
        if !min.is_finite() || min <= 0.0 {
            return Err(SettingsError::NonPositiveMin(min).into());
        }
        if !max.is_finite() || max < min {
            return Err(SettingsError::MaxBelowMin { min, max }.into());
        }
        if !initial.is_finite() || initial < min || initial > max {
            return Err(SettingsError::InitialOutOfRange { initial, min, max }.into());
        }
        Ok(Self {
            step,
            min,
            max,
            initial,
        })
    }

    #[must_use]
    pub fn step(&self) -> f32 {
        self.step
    }

    #[must_use]
    pub fn min(&self) -> f32 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f32 {
        self.max
    }

    #[must_use]
    pub fn initial(&self) -> f32 {
        self.initial
    }

    /// Clamps an arbitrary value into a valid zoom factor.
    ///
    /// Non-finite input (NaN) collapses to `min`.
    #[must_use]
    pub fn clamp(&self, value: f32) -> ZoomFactor {
        if value.is_nan() {
            return ZoomFactor(self.min);
        }
        ZoomFactor(value.clamp(self.min, self.max))
    }

    /// The zoom factor a reset returns to.
    #[must_use]
    pub fn initial_factor(&self) -> ZoomFactor {
        ZoomFactor(self.initial)
    }
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            step: DEFAULT_ZOOM_STEP,
            min: DEFAULT_MIN_ZOOM,
            max: DEFAULT_MAX_ZOOM,
            initial: DEFAULT_INITIAL_ZOOM,
        }
    }
}

/// Zoom factor guaranteed to lie within the bounds of the settings that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ZoomFactor(f32);

impl ZoomFactor {
    /// Returns the raw multiplier (1.0 = baseline size).
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the factor as a percentage for display.
    #[must_use]
    pub fn as_percent(self) -> f32 {
        self.0 * 100.0
    }

    /// Multiplies by `1 + step` (in) or `1 - step` (out) and clamps.
    #[must_use]
    pub fn stepped(self, zooming_in: bool, settings: &ZoomSettings) -> Self {
        let factor = if zooming_in {
            1.0 + settings.step()
        } else {
            1.0 - settings.step()
        };
        settings.clamp(self.0 * factor)
    }

    #[must_use]
    pub fn is_min(self, settings: &ZoomSettings) -> bool {
        self.0 <= settings.min()
    }

    #[must_use]
    pub fn is_max(self, settings: &ZoomSettings) -> bool {
        self.0 >= settings.max()
    }
}

impl Default for ZoomFactor {
    fn default() -> Self {
        Self(DEFAULT_INITIAL_ZOOM)
    }
}

/// Formats a number for display (removes unnecessary decimal places).
#[must_use]
pub fn format_number(value: f32) -> String {
    if value.fract().abs() < f32::EPSILON {
        #[allow(clippy::cast_possible_truncation)]
        let int_value = value as i64;
        format!("{int_value}")
    } else {
        format!("{value:.1}")
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}
