// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Image(String),
    Config(String),
    InvalidSettings(SettingsError),
}

/// Reasons a set of zoom settings is rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettingsError {
    /// `step` must be a finite value greater than zero.
    NonPositiveStep(f32),
    /// `min` must be a finite value greater than zero.
    NonPositiveMin(f32),
    /// `max` must not be lower than `min`.
    MaxBelowMin { min: f32, max: f32 },
    /// `initial` must lie within `[min, max]`.
    InitialOutOfRange { initial: f32, min: f32, max: f32 },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::NonPositiveStep(step) => {
                write!(f, "zoom step must be greater than zero (got {step})")
            }
            SettingsError::NonPositiveMin(min) => {
                write!(f, "minimum zoom must be greater than zero (got {min})")
            }
            SettingsError::MaxBelowMin { min, max } => {
                write!(f, "maximum zoom {max} is lower than minimum zoom {min}")
            }
            SettingsError::InitialOutOfRange { initial, min, max } => {
                write!(f, "initial zoom {initial} is outside [{min}, {max}]")
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {e}"),
            Error::Image(e) => write!(f, "Image Error: {e}"),
            Error::Config(e) => write!(f, "Config Error: {e}"),
            Error::InvalidSettings(e) => write!(f, "Invalid Settings: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<SettingsError> for Error {
    fn from(err: SettingsError) -> Self {
        Error::InvalidSettings(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
