pub mod cli;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod logging;
pub mod tui;

pub use palette_core as core;
pub use palette_core::model;
pub use palette_core::parser;

pub use palette_core::AppConfig;
