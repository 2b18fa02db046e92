//! Boolean Optimizer Studio - GUI Library
//!
//! Core application types and modules for the Boolean Optimizer Studio
//! desktop application.
//!
//! Built with Iced 0.14.0 using the Elm architecture.

pub mod app;
pub mod component;
pub mod config;
pub mod error;
pub mod message;
pub mod state;
pub mod theme;
pub mod view;

// Service modules for background tasks
pub mod service;
