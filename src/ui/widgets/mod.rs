// SPDX-License-Identifier: MPL-2.0
//! Custom widgets.

pub mod zoom_surface;

pub use zoom_surface::ZoomSurface;
