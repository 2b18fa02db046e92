//! Main application module for Boolean Optimizer Studio.
//!
//! Implements the Iced 0.14.0 application using the builder pattern. The
//! architecture follows the Elm pattern: State → Message → Update → View.
//! All state changes happen in `update()`; views are pure functions.

pub mod handler;

use iced::keyboard;
use iced::{Element, Subscription, Task, Theme};

use crate::config::Config;
use crate::message::Message;
use crate::state::{AppState, Page};
use crate::theme::studio_theme;
use crate::view::view_page;

/// Main application struct.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create a new application instance.
    ///
    /// The first command-line argument may name a page to open on, mirroring
    /// a fragment link; anything unknown falls back to the landing page.
    pub fn new() -> (Self, Task<Message>) {
        let config = Config::from_env();
        tracing::info!(endpoint = %config.endpoint, "starting");

        let initial = std::env::args()
            .nth(1)
            .and_then(|arg| Page::from_fragment(&arg))
            .unwrap_or_default();

        let app = Self {
            state: AppState::new(config, initial),
        };
        (app, Task::none())
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(page) => handler::navigation::handle_navigate(&mut self.state, page),

            Message::NavigateBack => handler::navigation::handle_back(&mut self.state),

            Message::Calculator(calc_msg) => handler::calculator::handle(&mut self.state, calc_msg),

            Message::Export(export_msg) => handler::export::handle(&mut self.state, export_msg),

            Message::KeyPressed(key, _modifiers) => {
                // Escape steps back, like the browser back control it stands
                // in for. Enter is handled by the focused input itself.
                if matches!(
                    key,
                    keyboard::Key::Named(keyboard::key::Named::Escape)
                ) && self.state.history.can_go_back()
                {
                    return handler::navigation::handle_back(&mut self.state);
                }
                Task::none()
            }

            Message::Noop => Task::none(),
        }
    }

    /// Render the current page.
    pub fn view(&self) -> Element<'_, Message> {
        view_page(&self.state)
    }

    /// Window title, reflecting the active page.
    pub fn title(&self) -> String {
        match self.state.page() {
            Page::Landing => "Boolean Optimizer Studio".to_string(),
            page => format!("{} - Boolean Optimizer Studio", page.label()),
        }
    }

    /// Application theme.
    pub fn theme(&self) -> Theme {
        studio_theme()
    }

    /// Subscribe to runtime events.
    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::listen().map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Message::KeyPressed(key, modifiers)
            }
            _ => Message::Noop,
        })
    }
}
