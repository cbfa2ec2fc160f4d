// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::Message;
use crate::error::{Error, Result};
use crate::media::{self, ImageSource};
use crate::ui::toolbar;
use crate::ui::zoom_view::component::{self, Effect};
use iced::Task;
use std::path::PathBuf;

/// Mutable application state handed to the update handlers.
pub struct UpdateContext<'a> {
    pub zoom_view: &'a mut component::State,
    pub load_error: &'a mut Option<Error>,
    pub loading: &'a mut bool,
}

/// Routes a top-level message to its handler.
pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::ZoomView(msg) => handle_zoom_view_message(ctx, msg),
        Message::Toolbar(msg) => handle_zoom_view_message(ctx, toolbar::update(msg)),
        Message::ImageLoaded(result) => handle_image_loaded(ctx, result),
    }
}

fn handle_zoom_view_message(
    ctx: &mut UpdateContext<'_>,
    msg: component::Message,
) -> Task<Message> {
    match ctx.zoom_view.handle(msg) {
        Effect::DragStarted => tracing::debug!("pan started"),
        Effect::DragEnded(reason) => tracing::debug!(?reason, "pan ended"),
        Effect::TransformChanged(transform) => {
            tracing::trace!(%transform, "zoom view changed");
        }
        Effect::None => {}
    }
    Task::none()
}

fn handle_image_loaded(ctx: &mut UpdateContext<'_>, result: Result<ImageSource>) -> Task<Message> {
    *ctx.loading = false;
    match result {
        Ok(image) => {
            tracing::info!(width = image.width, height = image.height, "image loaded");
            *ctx.load_error = None;
            ctx.zoom_view.set_image(Some(image));
            // The baseline depends on the image aspect ratio, re-derive it.
            ctx.zoom_view.reset();
        }
        Err(error) => {
            tracing::error!(%error, "failed to load image");
            *ctx.load_error = Some(error);
        }
    }
    Task::none()
}

/// Decodes `path` off the UI thread.
pub fn load_image_task(path: PathBuf) -> Task<Message> {
    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || media::load_image(&path))
                .await
                .unwrap_or_else(|e| Err(Error::Io(e.to_string())))
        },
        Message::ImageLoaded,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::state::ZoomSettings;
    use iced::{Point, Rectangle, Size};

    struct Fixture {
        zoom_view: component::State,
        load_error: Option<Error>,
        loading: bool,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                zoom_view: component::State::new(ZoomSettings::default()),
                load_error: None,
                loading: true,
            }
        }

        fn update(&mut self, message: Message) {
            let mut ctx = UpdateContext {
                zoom_view: &mut self.zoom_view,
                load_error: &mut self.load_error,
                loading: &mut self.loading,
            };
            let _ = update(&mut ctx, message);
        }
    }

    fn sample_image() -> ImageSource {
        ImageSource::from_rgba(4, 2, vec![0; 32])
    }

    #[test]
    fn image_loaded_ok_sets_image_and_clears_loading() {
        let mut fixture = Fixture::new();
        fixture.update(Message::ImageLoaded(Ok(sample_image())));

        assert!(!fixture.loading);
        assert!(fixture.load_error.is_none());
        assert_eq!(fixture.zoom_view.image().map(|i| i.width), Some(4));
    }

    #[test]
    fn image_loaded_err_records_error() {
        let mut fixture = Fixture::new();
        fixture.update(Message::ImageLoaded(Err(Error::Io("boom".into()))));

        assert!(!fixture.loading);
        assert_eq!(fixture.load_error, Some(Error::Io("boom".into())));
        assert!(fixture.zoom_view.image().is_none());
    }

    #[test]
    fn toolbar_zoom_in_steps_zoom() {
        let mut fixture = Fixture::new();
        fixture.update(Message::Toolbar(toolbar::Message::ZoomIn));
        assert!(fixture.zoom_view.zoom().value() > 1.0);
    }

    #[test]
    fn toolbar_reset_restores_initial_transform() {
        let mut fixture = Fixture::new();
        fixture.update(Message::ImageLoaded(Ok(sample_image())));
        fixture.update(Message::ZoomView(component::Message::HostResolved(
            Rectangle::new(Point::ORIGIN, Size::new(400.0, 300.0)),
        )));
        fixture.update(Message::Toolbar(toolbar::Message::RotateRight));
        fixture.update(Message::Toolbar(toolbar::Message::ZoomOut));
        fixture.update(Message::Toolbar(toolbar::Message::Reset));

        assert_eq!(fixture.zoom_view.rotation_degrees(), 0);
        assert_eq!(
            fixture.zoom_view.transform(),
            crate::ui::state::ViewTransform::initial(fixture.zoom_view.settings())
        );
    }
}
