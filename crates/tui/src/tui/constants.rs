use std::time::Duration;

pub(crate) const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub(crate) const TICK_RATE: Duration = Duration::from_millis(200);
pub(crate) const STATUS_TTL: Duration = Duration::from_secs(5);

pub(crate) const COMMAND_HELP: &str =
    "Commands: /help, /search <color>, /shuffle, /steps <n>, /quit";

pub(crate) const SEARCH_HINT: &str = "fff, #ffffff, rgb(255,255,255)";
pub(crate) const SEARCH_ERROR: &str =
    "Please enter a valid color (e.g. fff, #ffffff, rgb(255,255,255))";
pub(crate) const COPIED_LABEL: &str = "Copied!";

pub(crate) const STATUS_SEARCH: &str = "Type a color • Enter: open • Esc: cancel";
pub(crate) const STATUS_COMMAND_PALETTE: &str =
    "Type a /command • Up/Down: navigate • Tab/Right: complete • Enter: run • Esc: cancel";
pub(crate) const STATUS_DETAIL: &str = "↑/↓ choose a value • Enter/c: copy • Esc: close";
pub(crate) const STATUS_HELP: &str = "Keyboard reference • Enter/Esc to close";
pub(crate) const STATUS_SHUFFLED: &str = "Generated a new palette";
