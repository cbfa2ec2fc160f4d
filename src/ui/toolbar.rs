// SPDX-License-Identifier: MPL-2.0
//! Toolbar with zoom and rotation controls shown above the zoom view.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::ZoomFactor;
use crate::ui::zoom_view::component;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, Container, Row, Text},
    Element, Length, Theme,
};

/// Contextual data needed to render the toolbar.
pub struct ViewContext {
    pub zoom: ZoomFactor,
    pub at_min: bool,
    pub at_max: bool,
    /// Whether an image is displayed; every button is disabled otherwise.
    pub has_image: bool,
}

/// Messages emitted by the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ZoomIn,
    ZoomOut,
    RotateLeft,
    RotateRight,
    Reset,
}

/// Translates a toolbar message into the zoom view message it triggers.
#[must_use]
pub fn update(message: Message) -> component::Message {
    match message {
        Message::ZoomIn => component::Message::ZoomIn,
        Message::ZoomOut => component::Message::ZoomOut,
        Message::RotateLeft => component::Message::RotateCounterClockwise,
        Message::RotateRight => component::Message::RotateClockwise,
        Message::Reset => component::Message::Reset,
    }
}

/// Render the toolbar.
pub fn view<'a>(ctx: &ViewContext) -> Element<'a, Message> {
    let zoom_out = action_button("−", Message::ZoomOut, ctx.has_image && !ctx.at_min);
    let zoom_in = action_button("+", Message::ZoomIn, ctx.has_image && !ctx.at_max);
    let rotate_left = action_button("⟲", Message::RotateLeft, ctx.has_image);
    let rotate_right = action_button("⟳", Message::RotateRight, ctx.has_image);
    let reset = action_button("Reset", Message::Reset, ctx.has_image);

    let zoom_label = Text::new(format!("{}%", ctx.zoom.as_percent().round()))
        .size(typography::BODY)
        .width(Length::Fixed(64.0))
        .align_x(Horizontal::Center);

    let row = Row::new()
        .spacing(spacing::XS)
        .padding(spacing::XS)
        .align_y(Vertical::Center)
        .push(zoom_out)
        .push(zoom_label)
        .push(zoom_in)
        .push(rotate_left)
        .push(rotate_right)
        .push(reset);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TOOLBAR_HEIGHT))
        .align_x(Horizontal::Center)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            ..Default::default()
        })
        .into()
}

fn action_button<'a>(label: &'a str, message: Message, enabled: bool) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .padding([spacing::XXS, spacing::SM])
        .style(button::secondary)
        .on_press_maybe(enabled.then_some(message))
        .into()
}
