pub use palette_tui::cli;
pub use palette_tui::clipboard;
pub use palette_tui::commands;
pub use palette_tui::config;
pub use palette_tui::logging;
pub use palette_tui::tui;
pub use palette_tui::AppConfig;

pub use palette_core as core;
pub use palette_core::model;
pub use palette_core::parser;
