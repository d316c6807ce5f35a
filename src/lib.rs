//! Pixora - a terminal explorer for an image search backend
//!
//! Browse pre-computed topic clusters page by page, or run free-text
//! searches filtered by city, month and year. This library exposes the
//! modules for use in integration tests and benches.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod client;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod locator;
pub mod logging;
pub mod models;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
