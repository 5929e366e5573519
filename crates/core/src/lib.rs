pub mod commands;
pub mod config;
pub mod convert;
pub mod detail;
pub mod error;
pub mod model;
pub mod palette;
pub mod parser;
pub mod shades;

pub use commands::{inspect_color, ColorReport};
pub use config::AppConfig;
pub use convert::{color_formats, to_hex, to_rgb_string, to_rgba_string};
pub use detail::{ColorDetail, Swatch, SwatchRole};
pub use error::{ColorError, InvalidReason};
pub use model::*;
pub use palette::{GridGeometry, GridMetrics, Palette, Viewport};
pub use parser::{parse_search_input, validate_and_format};
pub use shades::{generate_shades, DEFAULT_STEPS};
