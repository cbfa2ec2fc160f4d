// SPDX-License-Identifier: MPL-2.0
//! Application root state wiring the zoom view, toolbar and image loading.
//!
//! The `App` struct owns one zoom view, starts decoding the image given on the
//! command line and forwards toolbar, keyboard and pointer input to it.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{Config, ZoomOverrides};
use crate::error::Error;
use crate::ui::state::ZoomSettings;
use crate::ui::zoom_view::component;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    zoom_view: component::State,
    image_path: Option<PathBuf>,
    load_error: Option<Error>,
    loading: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("image_path", &self.image_path)
            .field("has_image", &self.zoom_view.image().is_some())
            .field("loading", &self.loading)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 900.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 700.0;
pub const MIN_WINDOW_WIDTH: f32 = 400.0;
pub const MIN_WINDOW_HEIGHT: f32 = 300.0;

/// Builds the window settings.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Builds zoom settings from the config file and CLI overrides.
///
/// Settings that fail validation fall back to the defaults with a warning.
#[must_use]
pub fn resolve_settings(config: Config, overrides: ZoomOverrides) -> ZoomSettings {
    match config.with_overrides(overrides).zoom_settings() {
        Ok(settings) => settings,
        Err(error) => {
            tracing::warn!(%error, "invalid zoom settings, using defaults");
            ZoomSettings::default()
        }
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes state and kicks off asynchronous image loading when a path
    /// was given.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let alt = flags.alt.clone().unwrap_or_else(|| {
            flags
                .file_path
                .as_deref()
                .and_then(|p| p.file_name())
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default()
        });

        let mut zoom_view = component::State::new(flags.settings);
        zoom_view.set_alt(alt);

        let task = match &flags.file_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading image");
                update::load_image_task(path.clone())
            }
            None => Task::none(),
        };

        let app = Self {
            zoom_view,
            loading: flags.file_path.is_some(),
            image_path: flags.file_path,
            load_error: None,
        };
        (app, task)
    }

    fn title(&self) -> String {
        match self.image_path.as_deref().and_then(|p| p.file_name()) {
            Some(name) => format!("{} - ImgZoom", name.to_string_lossy()),
            None => "ImgZoom".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_shortcut_subscription(),
            self.zoom_view.subscription().map(Message::ZoomView),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            zoom_view: &mut self.zoom_view,
            load_error: &mut self.load_error,
            loading: &mut self.loading,
        };
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            zoom_view: &self.zoom_view,
            load_error: self.load_error.as_ref(),
            loading: self.loading,
        })
    }
}
