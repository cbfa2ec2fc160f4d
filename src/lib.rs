// SPDX-License-Identifier: MPL-2.0
//! `img_zoom` is an image view with cursor-anchored wheel zoom, drag-to-pan and
//! 90° rotation, built with the Iced GUI framework.
//!
//! The reusable piece is [`ui::zoom_view`]; [`app`] is a small viewer around it.

#![doc(html_root_url = "https://docs.rs/img_zoom/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod media;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
