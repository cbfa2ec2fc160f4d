// SPDX-License-Identifier: MPL-2.0
//! Zoom view: an image that zooms around the cursor, pans by dragging and
//! rotates in quarter turns.
//!
//! ```text
//! component.rs (State / Message / Effect)
//!     ├── ui::state           - settings, transform, drag session
//!     └── ui::widgets         - ZoomSurface drawing and input
//! ```

pub mod component;

pub use component::{Effect, Message, State};
