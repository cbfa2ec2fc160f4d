// SPDX-License-Identifier: MPL-2.0
//! Drawing surface for the zoom view.
//!
//! Fills its host area, draws the image inside the positioning wrapper and
//! turns wheel and pointer-down input into zoom view messages. Pointer moves
//! and releases during a drag are not handled here; they come from the
//! window-wide subscription of the component.

use crate::ui::zoom_view::component::Message;
use iced::advanced::image::{self as advanced_image, Renderer as _};
use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer::{self, Renderer as _};
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::widget::image;
use iced::{mouse, Element, Event, Length, Point, Radians, Rectangle, Size, Theme, Vector};

/// Where to draw the image, relative to the host's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Wrapper after translation and zoom, before rotation.
    pub wrapper: Rectangle,
    /// Axis-aligned bounding box of the rotated wrapper (hit area).
    pub image_box: Rectangle,
    /// Rotation applied around the wrapper centre.
    pub rotation: f32,
}

pub struct ZoomSurface {
    handle: Option<image::Handle>,
    placement: Option<Placement>,
    /// Host rectangle the component last heard about.
    known_host: Option<Rectangle>,
    dragging: bool,
}

impl ZoomSurface {
    #[must_use]
    pub fn new(
        handle: Option<image::Handle>,
        placement: Option<Placement>,
        known_host: Option<Rectangle>,
        dragging: bool,
    ) -> Self {
        Self {
            handle,
            placement,
            known_host,
            dragging,
        }
    }

    /// Drawn part of the image: its bounding box clipped to the host.
    fn hit_area(&self, bounds: Rectangle) -> Option<Rectangle> {
        self.placement
            .and_then(|p| (p.image_box + Vector::new(bounds.x, bounds.y)).intersection(&bounds))
    }

    fn cursor_over_image(&self, bounds: Rectangle, cursor: mouse::Cursor) -> Option<Point> {
        let position = cursor.position_over(bounds)?;
        self.hit_area(bounds)
            .is_some_and(|area| area.contains(position))
            .then_some(position)
    }

    /// Turns a window event into zoom view messages.
    ///
    /// The input message, when present, is the one the event is captured for.
    fn route(&mut self, event: &Event, bounds: Rectangle, cursor: mouse::Cursor) -> Routed {
        let host = (self.known_host != Some(bounds)).then(|| {
            self.known_host = Some(bounds);
            Message::HostResolved(bounds)
        });

        let input = match event {
            Event::Mouse(mouse::Event::WheelScrolled { delta }) => self
                .cursor_over_image(bounds, cursor)
                .map(|position| Message::Wheel {
                    cursor: position,
                    delta_y: dom_delta_y(delta),
                }),
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => self
                .cursor_over_image(bounds, cursor)
                .map(Message::PointerPressed),
            _ => None,
        };

        Routed { host, input }
    }
}

/// Messages produced for one event.
#[derive(Debug, Default)]
struct Routed {
    host: Option<Message>,
    input: Option<Message>,
}

impl Widget<Message, Theme, iced::Renderer> for ZoomSurface {
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fill)
    }

    fn layout(
        &mut self,
        _tree: &mut widget::Tree,
        _renderer: &iced::Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::Node::new(limits.max())
    }

    fn draw(
        &self,
        _tree: &widget::Tree,
        renderer: &mut iced::Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let (Some(handle), Some(placement)) = (&self.handle, self.placement) else {
            return;
        };
        let bounds = layout.bounds();
        let wrapper = placement.wrapper + Vector::new(bounds.x, bounds.y);

        renderer.with_layer(bounds, |renderer| {
            let image = advanced_image::Image::<image::Handle> {
                handle: handle.clone(),
                filter_method: advanced_image::FilterMethod::Linear,
                rotation: Radians(placement.rotation),
                opacity: 1.0,
                snap: true,
                border_radius: iced::border::Radius::default(),
            };
            renderer.draw_image(image, wrapper, bounds);
        });
    }

    fn update(
        &mut self,
        _tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &iced::Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let routed = self.route(event, layout.bounds(), cursor);
        if let Some(message) = routed.host {
            shell.publish(message);
        }
        if let Some(message) = routed.input {
            shell.publish(message);
            shell.capture_event();
        }
    }

    fn mouse_interaction(
        &self,
        _tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &iced::Renderer,
    ) -> mouse::Interaction {
        if self.dragging {
            return mouse::Interaction::Grabbing;
        }
        if self.cursor_over_image(layout.bounds(), cursor).is_some() {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a> From<ZoomSurface> for Element<'a, Message> {
    fn from(surface: ZoomSurface) -> Self {
        Element::new(surface)
    }
}

/// Converts an iced scroll delta to the DOM `deltaY` sign convention.
///
/// Iced reports scrolling up (away from the user) as positive `y`; the DOM
/// reports it as negative. Negative therefore means "zoom in".
fn dom_delta_y(delta: &mouse::ScrollDelta) -> f32 {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } | mouse::ScrollDelta::Pixels { y, .. } => -*y,
    }
}
