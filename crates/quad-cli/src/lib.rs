//! Command-line host for the four-team chess engine.
//!
//! # Modules
//!
//! - [`config`] - `quad.toml` loading and game setup
//! - [`render`] - ASCII board, wall and status rendering
//! - [`script`] - move script parsing and playback with JSON event output

pub mod config;
pub mod render;
pub mod script;
