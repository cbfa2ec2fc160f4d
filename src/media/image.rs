// SPDX-License-Identifier: MPL-2.0
//! Image decoding (PNG, JPEG, GIF, SVG, ...) into a handle the widget can draw.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use resvg::usvg;
use std::fs;
use std::path::Path;

/// A decoded image ready for display, with its natural size.
#[derive(Debug, Clone)]
pub struct ImageSource {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageSource {
    /// Creates a source from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Height divided by width, used to size the wrapper from its width.
    ///
    /// Returns `None` for images with a zero dimension.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn aspect_ratio(&self) -> Option<f32> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        Some(self.height as f32 / self.width as f32)
    }
}

/// Load an image from the given path.
///
/// SVG files are rasterized with resvg at their intrinsic size.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Image`] if it
/// cannot be decoded or has empty dimensions.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageSource> {
    let path = path.as_ref();
    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");
    let bytes = fs::read(path)?;

    if extension.eq_ignore_ascii_case("svg") {
        rasterize_svg(&bytes)
    } else {
        let img = image_rs::load_from_memory(&bytes)?;
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(Error::Image("image has empty dimensions".into()));
        }
        Ok(ImageSource::from_rgba(width, height, img.to_rgba8().into_vec()))
    }
}

fn rasterize_svg(bytes: &[u8]) -> Result<ImageSource> {
    let tree = usvg::Tree::from_data(bytes, &usvg::Options::default())
        .map_err(|e| Error::Image(e.to_string()))?;

    let size = tree.size().to_int_size();
    let (width, height) = (size.width(), size.height());
    if width == 0 || height == 0 {
        return Err(Error::Image("SVG has empty dimensions".into()));
    }

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Image("failed to allocate SVG pixmap".into()))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    // tiny-skia stores premultiplied alpha; iced expects straight RGBA.
    let pixels = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();

    Ok(ImageSource::from_rgba(width, height, pixels))
}
