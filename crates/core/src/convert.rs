use crate::model::{ColorFormat, ColorValue, FormatLabel, HexColor};

/// Canonical hex for any color. Alpha is dropped.
pub fn to_hex(color: &ColorValue) -> HexColor {
    match color {
        ColorValue::Hex { hex } => hex.clone(),
        ColorValue::Rgb { channels, .. } | ColorValue::Rgba { channels, .. } => {
            HexColor::from_rgb(*channels)
        }
    }
}

pub fn to_rgb_string(hex: &HexColor) -> String {
    let c = hex.channels();
    format!("rgb({}, {}, {})", c.r, c.g, c.b)
}

/// Hex carries no alpha, so the rendered alpha is always exactly `1`.
pub fn to_rgba_string(hex: &HexColor) -> String {
    let c = hex.channels();
    format!("rgba({}, {}, {}, 1)", c.r, c.g, c.b)
}

/// Rewrite an `rgb(...)` literal as `rgba(..., 1)`, keeping the user's spacing.
pub fn rgb_literal_to_rgba(literal: &str) -> String {
    literal.replacen("rgb", "rgba", 1).replacen(')', ", 1)", 1)
}

/// The labelled formats shown for a color.
///
/// Hex colors get HEX, RGB and RGBA. Colors typed as `rgb(...)` or `rgba(...)`
/// lead with their original text; an `rgb` original also gets an RGBA form
/// derived from that text.
pub fn color_formats(color: &ColorValue) -> Vec<ColorFormat> {
    match color {
        ColorValue::Hex { hex } => vec![
            ColorFormat::new(FormatLabel::Hex, hex.as_str()),
            ColorFormat::new(FormatLabel::Rgb, to_rgb_string(hex)),
            ColorFormat::new(FormatLabel::Rgba, to_rgba_string(hex)),
        ],
        ColorValue::Rgb { literal, .. } => vec![
            ColorFormat::new(FormatLabel::Original, literal.as_str()),
            ColorFormat::new(FormatLabel::Hex, to_hex(color).as_str()),
            ColorFormat::new(FormatLabel::Rgba, rgb_literal_to_rgba(literal)),
        ],
        ColorValue::Rgba { literal, .. } => vec![
            ColorFormat::new(FormatLabel::Original, literal.as_str()),
            ColorFormat::new(FormatLabel::Hex, to_hex(color).as_str()),
        ],
    }
}

/// Look up one labelled format, if the color offers it.
pub fn format_value(color: &ColorValue, label: FormatLabel) -> Option<String> {
    color_formats(color)
        .into_iter()
        .find(|format| format.label == label)
        .map(|format| format.value)
}
