use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

/// The three integer channels of a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Canonical `#rrggbb` hex text, always lowercase and always six digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self(format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b))
    }

    /// Wraps text the parser has already checked to be `#` plus six lowercase hex digits.
    pub(crate) fn from_canonical(text: String) -> Self {
        debug_assert!(text.len() == 7 && text.starts_with('#'));
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Re-derives the channels from the digit pairs at byte offsets 1-2, 3-4 and 5-6.
    pub fn channels(&self) -> Rgb {
        let bytes = self.0.as_bytes();
        let pair = |at: usize| -> u8 {
            let hi = bytes.get(at).copied().and_then(hex_digit).unwrap_or(0);
            let lo = bytes.get(at + 1).copied().and_then(hex_digit).unwrap_or(0);
            hi << 4 | lo
        };
        Rgb::new(pair(1), pair(3), pair(5))
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

pub(crate) fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorKind {
    Hex,
    Rgb,
    Rgba,
}

impl ColorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorKind::Hex => "hex",
            ColorKind::Rgb => "rgb",
            ColorKind::Rgba => "rgba",
        }
    }
}

impl fmt::Display for ColorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validated color in exactly one of its accepted textual representations.
///
/// `Rgb` and `Rgba` keep the text the user typed so it can be surfaced
/// unchanged as the "Original" format.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ColorValue {
    Hex {
        hex: HexColor,
    },
    Rgb {
        channels: Rgb,
        literal: String,
    },
    Rgba {
        channels: Rgb,
        alpha: f64,
        literal: String,
    },
}

impl ColorValue {
    pub fn hex(rgb: Rgb) -> Self {
        ColorValue::Hex {
            hex: HexColor::from_rgb(rgb),
        }
    }

    /// Builds an `rgb(r, g, b)` value in the same spacing the palette generator uses.
    pub fn rgb(channels: Rgb) -> Self {
        ColorValue::Rgb {
            channels,
            literal: format!("rgb({}, {}, {})", channels.r, channels.g, channels.b),
        }
    }

    /// Builds an `rgba(r, g, b, a)` value with the alpha rendered to two decimals.
    /// Returns `None` when `alpha` is outside `[0, 1]`.
    pub fn rgba(channels: Rgb, alpha: f64) -> Option<Self> {
        if !(0.0..=1.0).contains(&alpha) {
            return None;
        }
        let text = format!("{alpha:.2}");
        let alpha = text.parse::<f64>().ok()?;
        Some(ColorValue::Rgba {
            channels,
            alpha,
            literal: format!(
                "rgba({}, {}, {}, {})",
                channels.r, channels.g, channels.b, text
            ),
        })
    }

    pub fn kind(&self) -> ColorKind {
        match self {
            ColorValue::Hex { .. } => ColorKind::Hex,
            ColorValue::Rgb { .. } => ColorKind::Rgb,
            ColorValue::Rgba { .. } => ColorKind::Rgba,
        }
    }

    pub fn channels(&self) -> Rgb {
        match self {
            ColorValue::Hex { hex } => hex.channels(),
            ColorValue::Rgb { channels, .. } | ColorValue::Rgba { channels, .. } => *channels,
        }
    }

    pub fn alpha(&self) -> Option<f64> {
        match self {
            ColorValue::Rgba { alpha, .. } => Some(*alpha),
            _ => None,
        }
    }

    /// The text this value was created from: canonical hex, or the verbatim rgb/rgba literal.
    pub fn as_text(&self) -> &str {
        match self {
            ColorValue::Hex { hex } => hex.as_str(),
            ColorValue::Rgb { literal, .. } | ColorValue::Rgba { literal, .. } => literal,
        }
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_text())
    }
}

impl From<HexColor> for ColorValue {
    fn from(hex: HexColor) -> Self {
        ColorValue::Hex { hex }
    }
}

/// Lighter and darker stops derived from one source color.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShadeSet {
    pub lighter: Vec<HexColor>,
    pub darker: Vec<HexColor>,
}

impl ShadeSet {
    pub fn len(&self) -> usize {
        self.lighter.len() + self.darker.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lighter.is_empty() && self.darker.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FormatLabel {
    Original,
    #[serde(rename = "HEX")]
    Hex,
    #[serde(rename = "RGB")]
    Rgb,
    #[serde(rename = "RGBA")]
    Rgba,
}

impl FormatLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatLabel::Original => "Original",
            FormatLabel::Hex => "HEX",
            FormatLabel::Rgb => "RGB",
            FormatLabel::Rgba => "RGBA",
        }
    }

    /// Lowercase name accepted by `--only`.
    pub const fn cli_name(&self) -> &'static str {
        match self {
            FormatLabel::Original => "original",
            FormatLabel::Hex => "hex",
            FormatLabel::Rgb => "rgb",
            FormatLabel::Rgba => "rgba",
        }
    }
}

impl fmt::Display for FormatLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ValueEnum for FormatLabel {
    fn value_variants<'a>() -> &'a [Self] {
        const VARIANTS: [FormatLabel; 4] = [
            FormatLabel::Original,
            FormatLabel::Hex,
            FormatLabel::Rgb,
            FormatLabel::Rgba,
        ];
        &VARIANTS
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.cli_name()))
    }
}

/// One labelled, copyable rendering of a color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorFormat {
    pub label: FormatLabel,
    pub value: String,
}

impl ColorFormat {
    pub fn new<T: Into<String>>(label: FormatLabel, value: T) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;
    use pretty_assertions::assert_eq;

    #[test]
    fn hex_color_pads_and_lowercases() {
        let hex = HexColor::from_rgb(Rgb::new(10, 171, 255));
        assert_eq!(hex.as_str(), "#0aabff");
        assert_eq!(hex.channels(), Rgb::new(10, 171, 255));
    }

    #[test]
    fn rgba_constructor_rejects_out_of_range_alpha() {
        assert!(ColorValue::rgba(Rgb::new(1, 2, 3), 1.2).is_none());
        assert!(ColorValue::rgba(Rgb::new(1, 2, 3), -0.1).is_none());

        let value = ColorValue::rgba(Rgb::new(1, 2, 3), 0.456).expect("in range");
        assert_eq!(value.as_text(), "rgba(1, 2, 3, 0.46)");
        assert_eq!(value.alpha(), Some(0.46));
    }

    #[test]
    fn format_label_cli_names_match_value_enum() {
        for label in FormatLabel::value_variants() {
            let value = label.to_possible_value().expect("visible");
            assert_eq!(value.get_name(), label.cli_name());
            assert_eq!(FormatLabel::from_str(label.cli_name(), false).unwrap(), *label);
        }
        assert!(FormatLabel::from_str("cmyk", false).is_err());
    }

    #[test]
    fn color_value_serializes_with_kind_tag() {
        let json = serde_json::to_value(ColorValue::hex(Rgb::new(255, 0, 0))).unwrap();
        assert_eq!(json["kind"], "hex");
        assert_eq!(json["hex"], "#ff0000");
    }
}
