// SPDX-License-Identifier: MPL-2.0
//! UI state for the zoom view.
//!
//! Pure state and geometry with no widget code, so every rule about zoom
//! bounds, rotation and cursor anchoring can be tested without a renderer.

pub mod drag;
pub mod rotation;
pub mod transform;
pub mod zoom;

pub use drag::{DragSession, DragState, ReleaseReason};
pub use rotation::RotationAngle;
pub use transform::{BoxGeometry, PanOffset, ViewTransform};
pub use zoom::{ZoomFactor, ZoomSettings};
