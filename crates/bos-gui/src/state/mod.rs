//! Application state types.

mod app_state;
mod calculator;
mod navigation;

pub use app_state::AppState;
pub use calculator::CalculatorState;
pub use navigation::{History, Page};
