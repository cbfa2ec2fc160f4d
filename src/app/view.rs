// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Toolbar on top, zoom view in the middle, status bar at the bottom.

use super::Message;
use crate::error::Error;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::zoom::format_number;
use crate::ui::toolbar;
use crate::ui::zoom_view::component;
use iced::{
    alignment::Vertical,
    widget::{center, container, Column, Container, Row, Text},
    Element, Length, Theme,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub zoom_view: &'a component::State,
    pub load_error: Option<&'a Error>,
    pub loading: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let settings = ctx.zoom_view.settings();
    let zoom = ctx.zoom_view.zoom();
    let toolbar = toolbar::view(&toolbar::ViewContext {
        zoom,
        at_min: zoom.is_min(settings),
        at_max: zoom.is_max(settings),
        has_image: ctx.zoom_view.image().is_some(),
    })
    .map(Message::Toolbar);

    let content: Element<'_, Message> = match ctx.load_error {
        Some(error) => center(Text::new(load_error_text(ctx.zoom_view.alt(), error))).into(),
        None if ctx.loading => center(Text::new("Loading…")).into(),
        None => ctx.zoom_view.view().map(Message::ZoomView),
    };

    Column::new()
        .push(toolbar)
        .push(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .clip(true),
        )
        .push(view_status_bar(ctx.zoom_view))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Transform string and zoom percentage.
fn view_status_bar(zoom_view: &component::State) -> Element<'_, Message> {
    let row = Row::new()
        .spacing(spacing::MD)
        .padding([0.0, spacing::SM])
        .align_y(Vertical::Center)
        .push(Text::new(status_text(zoom_view)).size(typography::CAPTION));

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::STATUS_BAR_HEIGHT))
        .align_y(Vertical::Center)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            ..Default::default()
        })
        .into()
}

fn status_text(zoom_view: &component::State) -> String {
    format!(
        "{}  |  {}%",
        zoom_view.transform(),
        format_number(zoom_view.zoom().as_percent())
    )
}

fn load_error_text(alt: &str, error: &Error) -> String {
    if alt.is_empty() {
        error.to_string()
    } else {
        format!("{alt}: {error}")
    }
}
