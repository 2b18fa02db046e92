//! Message handlers organized by category.
//!
//! - `navigation` - page transitions and back stepping
//! - `calculator` - input, validation, dispatch, and result commits
//! - `export` - the truth-table CSV export flow

pub mod calculator;
pub mod export;
pub mod navigation;
