use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use crate::convert::{color_formats, to_hex};
use crate::error::ColorError;
use crate::model::{ColorFormat, ColorKind, ColorValue, HexColor, ShadeSet};
use crate::parser::parse_search_input;
use crate::shades::generate_shades;

/// Everything known about one color typed by a user.
#[derive(Debug, Clone, Serialize)]
pub struct ColorReport {
    pub input: String,
    pub kind: ColorKind,
    pub hex: HexColor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
    pub formats: Vec<ColorFormat>,
    pub shades: ShadeSet,
    #[serde(skip)]
    pub color: ColorValue,
}

impl ColorReport {
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Parse search-box style text and compute its formats and shades.
pub fn inspect_color(text: &str, steps: u32) -> Result<ColorReport, ColorError> {
    let color = match parse_search_input(text) {
        Ok(color) => color,
        Err(err) => {
            debug!(input = text, error = %err, "rejected color input");
            return Err(err);
        }
    };

    let shades = generate_shades(&color, steps);
    debug!(
        input = text,
        kind = color.kind().as_str(),
        lighter = shades.lighter.len(),
        darker = shades.darker.len(),
        "inspected color"
    );

    Ok(ColorReport {
        input: text.to_string(),
        kind: color.kind(),
        hex: to_hex(&color),
        alpha: color.alpha(),
        formats: color_formats(&color),
        shades,
        color,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FormatLabel;
    use pretty_assertions::assert_eq;

    #[test]
    fn inspect_reports_hex_formats_and_shades() {
        let report = inspect_color("808080", 5).expect("valid");
        assert_eq!(report.kind, ColorKind::Hex);
        assert_eq!(report.hex.as_str(), "#808080");
        assert_eq!(report.formats[0].label, FormatLabel::Hex);
        assert_eq!(report.shades.lighter.len(), 5);
        assert_eq!(report.shades.darker.len(), 5);
    }

    #[test]
    fn inspect_rejects_invalid_text() {
        assert!(inspect_color("rgb(256,0,0)", 5).is_err());
    }

    #[test]
    fn json_omits_alpha_for_opaque_colors() {
        let report = inspect_color("rgb(10, 20, 30)", 5).expect("valid");
        let json: serde_json::Value =
            serde_json::from_str(&report.to_json_pretty().unwrap()).unwrap();
        assert_eq!(json["kind"], "rgb");
        assert_eq!(json["hex"], "#0a141e");
        assert!(json.get("alpha").is_none());
        assert_eq!(json["formats"][0]["label"], "Original");
        assert_eq!(json["formats"][0]["value"], "rgb(10, 20, 30)");
    }
}
