// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::ImageSource;
use crate::ui::state::ZoomSettings;
use crate::ui::toolbar;
use crate::ui::zoom_view::component;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    ZoomView(component::Message),
    Toolbar(toolbar::Message),
    /// Result of decoding the image passed on the command line.
    ImageLoaded(Result<ImageSource, Error>),
}

/// Runtime flags resolved by `main` from the CLI and the config file.
#[derive(Debug, Default)]
pub struct Flags {
    /// Image to display.
    pub file_path: Option<PathBuf>,
    /// Alternate text; defaults to the file name.
    pub alt: Option<String>,
    pub settings: ZoomSettings,
}
