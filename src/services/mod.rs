// Passgen services
// Services provide core functionality: generation, storage, authentication, crypto, clipboard, settings.

pub mod auth_service;
pub mod clipboard;
pub mod crypto_service;
pub mod password_generator;
pub mod password_store;
pub mod settings_engine;
