// SPDX-License-Identifier: MPL-2.0
//! View transform and the geometry of the displayed image.
//!
//! The transform is held as a plain record. It is only turned into the
//! `translate(..) rotate(..)` text form for display and logging, so reading
//! the offset back never goes through a parse step.
//!
//! Layout model:
//! - the *wrapper* sits at the host's top-left corner, translated by the pan
//!   offset and rotated around its own centre;
//! - the *image* fills the wrapper and carries the zoom, so the wrapper is
//!   `base_size × zoom`;
//! - the *image box* is the axis-aligned bounding box of the rotated wrapper.
//!   For 90°/270° equivalents width and height swap around the centre.

use super::{RotationAngle, ZoomFactor, ZoomSettings};
use iced::{Point, Rectangle, Size};
use std::fmt;

/// Pan offset in pixels applied to the wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanOffset {
    pub x: f32,
    pub y: f32,
}

impl PanOffset {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the offset moved by the given pointer delta.
    #[must_use]
    pub fn translated(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Combined zoom, pan offset and rotation of one widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewTransform {
    pub zoom: ZoomFactor,
    pub offset: PanOffset,
    pub rotation: RotationAngle,
}

impl ViewTransform {
    /// The transform a reset produces.
    #[must_use]
    pub fn initial(settings: &ZoomSettings) -> Self {
        Self {
            zoom: settings.initial_factor(),
            offset: PanOffset::ZERO,
            rotation: RotationAngle::ZERO,
        }
    }

    #[must_use]
    pub fn with_zoom(self, zoom: ZoomFactor) -> Self {
        Self { zoom, ..self }
    }

    /// Replaces the offset, keeping zoom and rotation.
    #[must_use]
    pub fn with_offset(self, offset: PanOffset) -> Self {
        Self { offset, ..self }
    }

    #[must_use]
    pub fn with_rotation(self, rotation: RotationAngle) -> Self {
        Self { rotation, ..self }
    }
}

/// Formats the wrapper part of the transform, e.g. `translate(10px,-4px) rotate(90deg)`.
impl fmt::Display for ViewTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate({}px,{}px) rotate({}deg)",
            self.offset.x,
            self.offset.y,
            self.rotation.degrees()
        )
    }
}

/// Where the wrapper lives before any transform is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxGeometry {
    /// Host top-left corner in window coordinates.
    pub origin: Point,
    /// Wrapper size at zoom 1.0 (baseline width by baseline height).
    pub base_size: Size,
}

impl BoxGeometry {
    /// Builds the geometry for a host, a baseline width and the image aspect
    /// ratio (`height / width`).
    #[must_use]
    pub fn new(origin: Point, baseline_width: f32, aspect_ratio: f32) -> Self {
        Self {
            origin,
            base_size: Size::new(baseline_width, baseline_width * aspect_ratio),
        }
    }

    /// Wrapper rectangle after translation and zoom, before rotation.
    #[must_use]
    pub fn wrapper_bounds(&self, transform: &ViewTransform) -> Rectangle {
        let zoom = transform.zoom.value();
        Rectangle {
            x: self.origin.x + transform.offset.x,
            y: self.origin.y + transform.offset.y,
            width: self.base_size.width * zoom,
            height: self.base_size.height * zoom,
        }
    }

    /// Axis-aligned bounding box of the rotated wrapper.
    #[must_use]
    pub fn image_box(&self, transform: &ViewTransform) -> Rectangle {
        let wrapper = self.wrapper_bounds(transform);
        if !transform.rotation.swaps_dimensions() {
            return wrapper;
        }
        let center = wrapper.center();
        Rectangle {
            x: center.x - wrapper.height / 2.0,
            y: center.y - wrapper.width / 2.0,
            width: wrapper.height,
            height: wrapper.width,
        }
    }
}

/// Position of `point` as a fraction of `rect`, or `None` when the point
/// lies outside the rectangle on either axis or the rectangle is empty.
#[must_use]
pub fn relative_position(rect: Rectangle, point: Point) -> Option<Point> {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    let rel_x = (point.x - rect.x) / rect.width;
    let rel_y = (point.y - rect.y) / rect.height;
    let inside = (0.0..=1.0).contains(&rel_x) && (0.0..=1.0).contains(&rel_y);
    inside.then(|| Point::new(rel_x, rel_y))
}

/// Zooms one step while keeping the image point under `cursor` fixed.
///
/// Returns `None` when the cursor is not over the image box, in which case
/// the caller must leave its state untouched. At a zoom bound the transform
/// comes back unchanged.
#[must_use]
pub fn zoom_at_cursor(
    transform: &ViewTransform,
    settings: &ZoomSettings,
    geometry: &BoxGeometry,
    cursor: Point,
    zooming_in: bool,
) -> Option<ViewTransform> {
    let old_box = geometry.image_box(transform);
    let rel = relative_position(old_box, cursor)?;

    let zoomed = transform.with_zoom(transform.zoom.stepped(zooming_in, settings));
    if zoomed.zoom == transform.zoom {
        // Saturated: keep the offset bit-for-bit.
        return Some(*transform);
    }
    let new_box = geometry.image_box(&zoomed);

    // Where the same physical point now sits, relative to the previous offset.
    let anchor_x = cursor.x - new_box.x + transform.offset.x;
    let anchor_y = cursor.y - new_box.y + transform.offset.y;

    let offset = PanOffset::new(
        anchor_x - new_box.width * rel.x,
        anchor_y - new_box.height * rel.y,
    );
    Some(zoomed.with_offset(offset))
}
