// SPDX-License-Identifier: MPL-2.0
//! Drag-to-pan session state.
//!
//! A session holds window-wide input capture from pointer-down until it is
//! released. Every way out of a drag (pointer-up, cancel, reset, teardown)
//! goes through [`DragState::release`], so acquire and release stay paired.

use iced::Point;

/// Why a drag session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseReason {
    /// The left button was released.
    PointerUp,
    /// The pointer left the window, the window lost focus or the touch was lost.
    PointerCancel,
    /// The widget was reset while dragging.
    Reset,
    /// The widget was removed from display.
    Teardown,
}

/// A live drag session. Only exists between acquire and release.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    last_position: Point,
}

impl DragSession {
    /// Last pointer position observed in window coordinates.
    #[must_use]
    pub fn last_position(&self) -> Point {
        self.last_position
    }

    /// Records `position` and returns the movement since the previous one.
    pub fn advance(&mut self, position: Point) -> (f32, f32) {
        let delta = (
            position.x - self.last_position.x,
            position.y - self.last_position.y,
        );
        self.last_position = position;
        delta
    }
}

/// Idle or dragging, plus a count of captures currently held.
#[derive(Debug, Clone, Default)]
pub struct DragState {
    session: Option<DragSession>,
    captures_held: u32,
}

impl DragState {
    /// Starts a session anchored at `position`.
    ///
    /// Returns `true` if capture was newly acquired. A press while already
    /// dragging only re-anchors the existing session.
    pub fn acquire(&mut self, position: Point) -> bool {
        if let Some(session) = self.session.as_mut() {
            session.last_position = position;
            return false;
        }
        self.session = Some(DragSession {
            last_position: position,
        });
        self.captures_held += 1;
        tracing::debug!(x = position.x, y = position.y, "drag capture acquired");
        true
    }

    /// Advances the active session, returning the pointer delta.
    ///
    /// Returns `None` when idle.
    pub fn track(&mut self, position: Point) -> Option<(f32, f32)> {
        self.session.as_mut().map(|session| session.advance(position))
    }

    /// Ends the active session, if any. This is the only place capture is released.
    pub fn release(&mut self, reason: ReleaseReason) -> Option<DragSession> {
        let session = self.session.take()?;
        self.captures_held -= 1;
        tracing::debug!(?reason, "drag capture released");
        Some(session)
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Number of captures currently held (0 or 1).
    #[must_use]
    pub fn captures_held(&self) -> u32 {
        self.captures_held
    }

    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }
}
