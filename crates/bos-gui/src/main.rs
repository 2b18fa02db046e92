//! Boolean Optimizer Studio - Desktop GUI Application
//!
//! A desktop client for an interactive Boolean-expression simplification
//! service: truth tables, Karnaugh maps, and Quine–McCluskey derivations.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message,
//! Update, View).

use bos_gui::app::App;
use iced::Size;
use iced::window;

/// Application entry point.
pub fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting Boolean Optimizer Studio");

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .window(window::Settings {
            size: Size::new(1100.0, 760.0),
            min_size: Some(Size::new(900.0, 600.0)),
            ..Default::default()
        })
        .run()
}
