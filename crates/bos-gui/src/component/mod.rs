//! Reusable UI components.

mod badge;
mod simple_table;

pub use badge::badge;
pub use simple_table::{owned_table, simple_table};
