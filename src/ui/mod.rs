// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Elm-style "state down, messages up": components own their state, expose a
//! `Message` enum and a `handle`/`update` entry point, and report back to the
//! application through effects or events.
//!
//! - [`zoom_view`] - Image view with cursor-anchored zoom, drag-to-pan and rotation
//! - [`state`] - Zoom, rotation, transform and drag state
//! - [`widgets`] - Custom Iced widgets (zoom surface)
//! - [`toolbar`] - Zoom and rotation buttons above the view
//! - [`design_tokens`] - Spacing and sizing constants

pub mod design_tokens;
pub mod state;
pub mod toolbar;
pub mod widgets;
pub mod zoom_view;
