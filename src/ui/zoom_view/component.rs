// SPDX-License-Identifier: MPL-2.0
//! Zoom view component: state, messages, effects and the drag subscription.
//!
//! Input arrives from two places:
//! - the [`ZoomSurface`] widget publishes host bounds, wheel and pointer-down;
//! - while a drag is active, [`State::subscription`] listens to the whole
//!   window for pointer moves, releases and cancellations. The subscription
//!   disappears as soon as the session is released, whatever the reason.

use crate::config::BASELINE_WIDTH_RATIO;
use crate::media::ImageSource;
use crate::ui::state::transform::{self, relative_position};
use crate::ui::state::{
    BoxGeometry, DragState, PanOffset, ReleaseReason, ViewTransform, ZoomFactor, ZoomSettings,
};
use crate::ui::widgets::zoom_surface::{Placement, ZoomSurface};
use iced::widget::{center, stack, text};
use iced::{event, mouse, touch, window, Element, Event, Length, Point, Rectangle, Subscription};

/// Messages handled by the zoom view.
#[derive(Debug, Clone)]
pub enum Message {
    /// The widget was laid out inside this host rectangle.
    HostResolved(Rectangle),
    /// Wheel scrolled with the cursor at `cursor` (window coordinates).
    /// `delta_y` follows the DOM convention: negative means zoom in.
    Wheel { cursor: Point, delta_y: f32 },
    /// Left button pressed over the image.
    PointerPressed(Point),
    /// Pointer moved anywhere in the window during a drag.
    PointerMoved(Point),
    /// Left button released anywhere in the window during a drag.
    PointerReleased,
    /// The pointer can no longer be tracked (left the window, focus lost).
    PointerCancelled,
    ZoomIn,
    ZoomOut,
    RotateClockwise,
    RotateCounterClockwise,
    Reset,
}

/// Effects produced by [`State::handle`].
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// Zoom, offset or rotation changed.
    TransformChanged(ViewTransform),
    /// A drag session started and window-wide capture is held.
    DragStarted,
    /// The drag session ended.
    DragEnded(ReleaseReason),
}

/// State of one zoom view instance.
#[derive(Debug)]
pub struct State {
    settings: ZoomSettings,
    transform: ViewTransform,
    drag: DragState,
    /// Last host rectangle reported by the widget.
    host: Option<Rectangle>,
    /// Image width at zoom 1.0. `None` until the widget is first shown.
    baseline_width: Option<f32>,
    image: Option<ImageSource>,
    alt: String,
}

impl State {
    #[must_use]
    pub fn new(settings: ZoomSettings) -> Self {
        Self {
            settings,
            transform: ViewTransform::initial(&settings),
            drag: DragState::default(),
            host: None,
            baseline_width: None,
            image: None,
            alt: String::new(),
        }
    }

    /// Sets the image and its alternate text. Neither is modified.
    #[must_use]
    pub fn with_image(mut self, image: ImageSource, alt: impl Into<String>) -> Self {
        self.image = Some(image);
        self.alt = alt.into();
        self
    }

    pub fn set_image(&mut self, image: Option<ImageSource>) {
        self.image = image;
    }

    pub fn set_alt(&mut self, alt: impl Into<String>) {
        self.alt = alt.into();
    }

    #[must_use]
    pub fn alt(&self) -> &str {
        &self.alt
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageSource> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn settings(&self) -> &ZoomSettings {
        &self.settings
    }

    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    #[must_use]
    pub fn zoom(&self) -> ZoomFactor {
        self.transform.zoom
    }

    #[must_use]
    pub fn rotation_degrees(&self) -> i32 {
        self.transform.rotation.degrees()
    }

    /// Current pan offset; (0, 0) until something writes one.
    #[must_use]
    pub fn offset(&self) -> PanOffset {
        self.transform.offset
    }

    /// Writes the offset together with the current rotation.
    pub fn set_offset(&mut self, offset: PanOffset) {
        self.apply(self.transform.with_offset(offset));
    }

    /// Clamps `value` into the configured bounds and applies it.
    pub fn set_zoom(&mut self, value: f32) {
        self.apply(self.transform.with_zoom(self.settings.clamp(value)));
    }

    /// Multiplies the zoom by `1 ± step`, saturating at the bounds.
    pub fn zoom_step(&mut self, zooming_in: bool) {
        let zoom = self.transform.zoom.stepped(zooming_in, &self.settings);
        self.apply(self.transform.with_zoom(zoom));
    }

    /// Adds or removes 90° and re-applies the current offset unchanged.
    ///
    /// The offset is not compensated for the new angle, so a panned image
    /// visibly jumps when rotated.
    pub fn rotate(&mut self, clockwise: bool) {
        let rotation = self.transform.rotation.rotated(clockwise);
        let offset = self.offset();
        self.apply(self.transform.with_rotation(rotation).with_offset(offset));
    }

    /// Restores the baseline: width at 90% of the host, initial zoom, no
    /// rotation, no offset. Ends any drag in progress.
    pub fn reset(&mut self) {
        self.end_drag(ReleaseReason::Reset);
        if let Some(host) = self.host {
            self.baseline_width = Some(host.width * BASELINE_WIDTH_RATIO);
        }
        self.apply(ViewTransform::initial(&self.settings));
    }

    /// Releases any input capture. Call when the widget leaves the display.
    pub fn teardown(&mut self) {
        self.end_drag(ReleaseReason::Teardown);
    }

    /// Whether the widget has been shown and the baseline established.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.baseline_width.is_some()
    }

    #[must_use]
    pub fn baseline_width(&self) -> Option<f32> {
        self.baseline_width
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Window-wide captures currently held (0 or 1).
    #[must_use]
    pub fn captures_held(&self) -> u32 {
        self.drag.captures_held()
    }

    /// Wrapper geometry in window coordinates, once both the host and the
    /// image are known.
    #[must_use]
    pub fn geometry(&self) -> Option<BoxGeometry> {
        let host = self.host?;
        self.geometry_at(host.position())
    }

    /// Bounding box of the displayed image in window coordinates.
    #[must_use]
    pub fn image_box(&self) -> Option<Rectangle> {
        self.geometry().map(|g| g.image_box(&self.transform))
    }

    /// Part of the image box inside the host, where the image is actually drawn.
    fn visible_image_box(&self) -> Option<Rectangle> {
        self.image_box()?.intersection(&self.host?)
    }

    fn geometry_at(&self, origin: Point) -> Option<BoxGeometry> {
        let baseline = self.baseline_width?;
        let aspect = self.image.as_ref()?.aspect_ratio()?;
        Some(BoxGeometry::new(origin, baseline, aspect))
    }

    /// Handle a zoom view message.
    ///
    /// Takes `Message` by value following Iced's `update(message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::HostResolved(bounds) => {
                self.host = Some(bounds);
                if self.is_initialized() {
                    Effect::None
                } else {
                    self.reset();
                    Effect::TransformChanged(self.transform)
                }
            }
            Message::Wheel { cursor, delta_y } => self.handle_wheel(cursor, delta_y),
            Message::PointerPressed(position) => self.handle_pointer_pressed(position),
            Message::PointerMoved(position) => match self.drag.track(position) {
                Some((dx, dy)) => {
                    self.set_offset(self.offset().translated(dx, dy));
                    Effect::TransformChanged(self.transform)
                }
                None => Effect::None,
            },
            Message::PointerReleased => self.end_drag(ReleaseReason::PointerUp),
            Message::PointerCancelled => self.end_drag(ReleaseReason::PointerCancel),
            Message::ZoomIn => self.changed(|state| state.zoom_step(true)),
            Message::ZoomOut => self.changed(|state| state.zoom_step(false)),
            Message::RotateClockwise => self.changed(|state| state.rotate(true)),
            Message::RotateCounterClockwise => self.changed(|state| state.rotate(false)),
            Message::Reset => self.changed(State::reset),
        }
    }

    fn changed(&mut self, operation: impl FnOnce(&mut Self)) -> Effect {
        let before = self.transform;
        operation(self);
        if self.transform == before {
            Effect::None
        } else {
            Effect::TransformChanged(self.transform)
        }
    }

    fn handle_wheel(&mut self, cursor: Point, delta_y: f32) -> Effect {
        if delta_y == 0.0 || !delta_y.is_finite() {
            return Effect::None;
        }
        let Some(geometry) = self.geometry() else {
            return Effect::None;
        };
        let zooming_in = delta_y < 0.0;

        match transform::zoom_at_cursor(
            &self.transform,
            &self.settings,
            &geometry,
            cursor,
            zooming_in,
        ) {
            Some(next) if next != self.transform => {
                self.apply(next);
                Effect::TransformChanged(self.transform)
            }
            _ => Effect::None,
        }
    }

    fn handle_pointer_pressed(&mut self, position: Point) -> Effect {
        let over_image = self
            .visible_image_box()
            .and_then(|rect| relative_position(rect, position))
            .is_some();
        if !over_image {
            return Effect::None;
        }
        if self.drag.acquire(position) {
            Effect::DragStarted
        } else {
            Effect::None
        }
    }

    /// Single exit path for drag sessions.
    fn end_drag(&mut self, reason: ReleaseReason) -> Effect {
        match self.drag.release(reason) {
            Some(_) => Effect::DragEnded(reason),
            None => Effect::None,
        }
    }

    fn apply(&mut self, next: ViewTransform) {
        if next != self.transform {
            tracing::trace!(transform = %next, zoom = next.zoom.value(), "view transform updated");
        }
        self.transform = next;
    }

    /// Window-wide pointer tracking, present only while a drag is active.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.drag.is_dragging() {
            event::listen_with(drag_event)
        } else {
            Subscription::none()
        }
    }

    /// Renders the image inside its positioning wrapper.
    pub fn view(&self) -> Element<'_, Message> {
        let placement = self.geometry_at(Point::ORIGIN).map(|geometry| Placement {
            wrapper: geometry.wrapper_bounds(&self.transform),
            image_box: geometry.image_box(&self.transform),
            rotation: self.transform.rotation.radians(),
        });

        let surface = ZoomSurface::new(
            self.image.as_ref().map(|image| image.handle.clone()),
            placement,
            self.host,
            self.drag.is_dragging(),
        );

        if self.image.is_some() {
            surface.into()
        } else {
            stack![surface, center(text(self.alt.as_str()))]
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        }
    }
}

impl Drop for State {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn drag_event(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::PointerMoved(position))
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::PointerReleased)
        }
        Event::Mouse(mouse::Event::CursorLeft)
        | Event::Window(window::Event::Unfocused)
        | Event::Touch(touch::Event::FingerLost { .. }) => Some(Message::PointerCancelled),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use iced::Size;

    fn square_image() -> ImageSource {
        ImageSource::from_rgba(2, 2, vec![0; 16])
    }

    /// A shown widget whose image box is (0, 0, 200, 200) at zoom 1.
    fn shown_state() -> State {
        let mut state = State::new(ZoomSettings::default()).with_image(square_image(), "square");
        state.handle(Message::HostResolved(Rectangle::new(
            Point::ORIGIN,
            Size::new(200.0 / BASELINE_WIDTH_RATIO, 400.0),
        )));
        state
    }

    #[test]
    fn first_host_report_establishes_baseline() {
        let mut state = State::new(ZoomSettings::default()).with_image(square_image(), "");
        assert!(!state.is_initialized());

        let effect = state.handle(Message::HostResolved(Rectangle::new(
            Point::ORIGIN,
            Size::new(1000.0, 500.0),
        )));

        assert!(matches!(effect, Effect::TransformChanged(_)));
        assert_abs_diff_eq!(state.baseline_width().unwrap_or_default(), 900.0);
    }

    #[test]
    fn later_host_reports_do_not_rebaseline() {
        let mut state = shown_state();
        state.set_zoom(3.0);
        let effect = state.handle(Message::HostResolved(Rectangle::new(
            Point::ORIGIN,
            Size::new(5000.0, 400.0),
        )));
        assert_eq!(effect, Effect::None);
        assert_abs_diff_eq!(state.baseline_width().unwrap_or_default(), 200.0, epsilon = 1e-3);
        assert_abs_diff_eq!(state.zoom().value(), 3.0);
    }

    #[test]
    fn reset_picks_up_new_host_width() {
        let mut state = shown_state();
        state.handle(Message::HostResolved(Rectangle::new(
            Point::ORIGIN,
            Size::new(1000.0, 400.0),
        )));
        state.reset();
        assert_abs_diff_eq!(state.baseline_width().unwrap_or_default(), 900.0);
    }

    #[test]
    fn image_box_matches_baseline() {
        let state = shown_state();
        let rect = state.image_box().expect("geometry is known");
        assert_abs_diff_eq!(rect.width, 200.0, epsilon = 1e-3);
        assert_abs_diff_eq!(rect.height, 200.0, epsilon = 1e-3);
    }

    #[test]
    fn wheel_up_zooms_in_around_cursor() {
        let mut state = shown_state();
        let effect = state.handle(Message::Wheel {
            cursor: Point::new(100.0, 100.0),
            delta_y: -1.0,
        });
        assert!(matches!(effect, Effect::TransformChanged(_)));
        assert_abs_diff_eq!(state.zoom().value(), 1.2);
        assert_abs_diff_eq!(state.offset().x, -20.0, epsilon = 1e-3);
    }

    #[test]
    fn wheel_down_zooms_out() {
        let mut state = shown_state();
        state.handle(Message::Wheel {
            cursor: Point::new(100.0, 100.0),
            delta_y: 3.0,
        });
        assert_abs_diff_eq!(state.zoom().value(), 0.8);
    }

    #[test]
    fn wheel_with_zero_delta_is_ignored() {
        let mut state = shown_state();
        let effect = state.handle(Message::Wheel {
            cursor: Point::new(100.0, 100.0),
            delta_y: 0.0,
        });
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn wheel_before_shown_is_ignored() {
        let mut state = State::new(ZoomSettings::default()).with_image(square_image(), "");
        let effect = state.handle(Message::Wheel {
            cursor: Point::new(10.0, 10.0),
            delta_y: -1.0,
        });
        assert_eq!(effect, Effect::None);
        assert_abs_diff_eq!(state.zoom().value(), 1.0);
    }

    #[test]
    fn press_outside_image_does_not_start_drag() {
        let mut state = shown_state();
        let effect = state.handle(Message::PointerPressed(Point::new(210.0, 50.0)));
        assert_eq!(effect, Effect::None);
        assert!(!state.is_dragging());
    }

    #[test]
    fn press_on_hidden_part_of_image_outside_host_does_not_start_drag() {
        let mut state = State::new(ZoomSettings::default()).with_image(square_image(), "");
        state.handle(Message::HostResolved(Rectangle::new(
            Point::new(0.0, 52.0),
            Size::new(400.0, 300.0),
        )));
        state.set_zoom(4.0);
        state.set_offset(PanOffset::new(0.0, -400.0));
        let press = Point::new(20.0, 20.0);
        assert!(state.image_box().is_some_and(|rect| rect.contains(press)));

        assert_eq!(state.handle(Message::PointerPressed(press)), Effect::None);
        assert!(!state.is_dragging());
        assert_eq!(state.captures_held(), 0);
    }

    #[test]
    fn wheel_at_max_zoom_leaves_transform_untouched() {
        let settings = ZoomSettings::new(0.5, 0.5, 2.0, 2.0).expect("valid settings");
        let mut state = State::new(settings).with_image(square_image(), "");
        state.handle(Message::HostResolved(Rectangle::new(
            Point::ORIGIN,
            Size::new(400.0, 400.0),
        )));
        state.set_offset(PanOffset::new(-13.0, 7.0));
        let before = state.transform();

        for _ in 0..5 {
            let effect = state.handle(Message::Wheel {
                cursor: Point::new(100.0, 100.0),
                delta_y: -1.0,
            });
            assert_eq!(effect, Effect::None);
        }
        assert_eq!(state.transform(), before);
    }

    #[test]
    fn drag_moves_offset_by_pointer_delta() {
        let mut state = shown_state();
        assert_eq!(
            state.handle(Message::PointerPressed(Point::new(50.0, 50.0))),
            Effect::DragStarted
        );
        state.handle(Message::PointerMoved(Point::new(70.0, 40.0)));
        state.handle(Message::PointerMoved(Point::new(75.0, 45.0)));

        assert_eq!(state.offset(), PanOffset::new(25.0, -5.0));
        assert_eq!(
            state.handle(Message::PointerReleased),
            Effect::DragEnded(ReleaseReason::PointerUp)
        );

        // No momentum after release.
        state.handle(Message::PointerMoved(Point::new(500.0, 500.0)));
        assert_eq!(state.offset(), PanOffset::new(25.0, -5.0));
    }

    #[test]
    fn drag_preserves_rotation() {
        let mut state = shown_state();
        state.rotate(true);
        state.handle(Message::PointerPressed(Point::new(100.0, 100.0)));
        state.handle(Message::PointerMoved(Point::new(90.0, 100.0)));
        assert_eq!(state.rotation_degrees(), 90);
        assert_eq!(state.offset(), PanOffset::new(-10.0, 0.0));
    }

    #[test]
    fn cancel_ends_drag_and_releases_capture() {
        let mut state = shown_state();
        state.handle(Message::PointerPressed(Point::new(50.0, 50.0)));
        assert_eq!(state.captures_held(), 1);

        let effect = state.handle(Message::PointerCancelled);
        assert_eq!(effect, Effect::DragEnded(ReleaseReason::PointerCancel));
        assert_eq!(state.captures_held(), 0);
    }

    #[test]
    fn reset_during_drag_releases_capture() {
        let mut state = shown_state();
        state.handle(Message::PointerPressed(Point::new(50.0, 50.0)));
        state.handle(Message::Reset);
        assert!(!state.is_dragging());
        assert_eq!(state.captures_held(), 0);
    }

    #[test]
    fn teardown_releases_capture() {
        let mut state = shown_state();
        state.handle(Message::PointerPressed(Point::new(50.0, 50.0)));
        state.teardown();
        assert_eq!(state.captures_held(), 0);
        // A second teardown has nothing left to release.
        state.teardown();
        assert_eq!(state.captures_held(), 0);
    }

    #[test]
    fn release_without_drag_is_noop() {
        let mut state = shown_state();
        assert_eq!(state.handle(Message::PointerReleased), Effect::None);
        assert_eq!(state.captures_held(), 0);
    }

    #[test]
    fn zoom_in_at_max_reports_no_change() {
        let settings = ZoomSettings::new(0.5, 1.0, 1.0, 1.0).expect("valid settings");
        let mut state = State::new(settings);
        assert_eq!(state.handle(Message::ZoomIn), Effect::None);
    }

    #[test]
    fn drag_event_routes_window_events() {
        let window = window::Id::unique();
        let moved = drag_event(
            Event::Mouse(mouse::Event::CursorMoved {
                position: Point::new(3.0, 4.0),
            }),
            event::Status::Ignored,
            window,
        );
        assert!(matches!(moved, Some(Message::PointerMoved(p)) if p == Point::new(3.0, 4.0)));

        let released = drag_event(
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)),
            event::Status::Ignored,
            window,
        );
        assert!(matches!(released, Some(Message::PointerReleased)));

        let left = drag_event(
            Event::Mouse(mouse::Event::CursorLeft),
            event::Status::Captured,
            window,
        );
        assert!(matches!(left, Some(Message::PointerCancelled)));

        let unfocused = drag_event(
            Event::Window(window::Event::Unfocused),
            event::Status::Ignored,
            window,
        );
        assert!(matches!(unfocused, Some(Message::PointerCancelled)));

        let right = drag_event(
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Right)),
            event::Status::Ignored,
            window,
        );
        assert!(right.is_none());
    }
}
