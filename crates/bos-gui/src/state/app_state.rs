//! Top-level application state.

use crate::config::Config;
use crate::state::calculator::CalculatorState;
use crate::state::navigation::{History, Page};

/// All application state.
pub struct AppState {
    /// Endpoint configuration, resolved once at startup.
    pub config: Config,
    /// Visible page and the back-navigation stack.
    pub history: History,
    /// Calculator page state.
    pub calculator: CalculatorState,
}

impl AppState {
    /// Build the initial state, starting on `initial`.
    pub fn new(config: Config, initial: Page) -> Self {
        Self {
            config,
            history: History::new(initial),
            calculator: CalculatorState::default(),
        }
    }

    /// The page currently shown.
    pub fn page(&self) -> Page {
        self.history.current()
    }
}
