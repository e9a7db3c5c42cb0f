//! Passgen: a password generator with per-user stored passwords.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod database;
pub mod logging;
pub mod navigation;
pub mod platform;
pub mod services;
pub mod types;
pub mod ui;
