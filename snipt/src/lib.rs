mod app;
pub mod app_core;
mod background;
pub mod commands;
pub mod config;
pub mod events;
pub mod input;
pub mod log_buffer;
pub mod logging;
pub mod state;
pub mod ui;

pub use app::App;
pub use config::Settings;

// Always expose testing module (integration tests need it)
pub mod testing;
