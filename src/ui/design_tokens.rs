// SPDX-License-Identifier: MPL-2.0
//! Spacing and sizing constants shared by the views.
//!
//! ```
//! use img_zoom::ui::design_tokens::spacing;
//!
//! assert_eq!(spacing::MD, spacing::XS * 2.0);
//! ```

/// Spacing scale on an 8px grid.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
}

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;
    /// Toolbar row height including padding.
    pub const TOOLBAR_HEIGHT: f32 = BUTTON_HEIGHT + 2.0 * super::spacing::XS;
    pub const STATUS_BAR_HEIGHT: f32 = 28.0;
}

pub mod typography {
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}
