// SPDX-License-Identifier: MPL-2.0
//! Image loading for the zoom view.

pub mod image;

pub use image::{load_image, ImageSource};
