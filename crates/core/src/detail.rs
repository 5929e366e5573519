use serde::Serialize;

use crate::convert::color_formats;
use crate::model::{ColorFormat, ColorValue};
use crate::shades::generate_shades;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SwatchRole {
    Lighter,
    Selected,
    Darker,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Swatch {
    pub color: ColorValue,
    pub role: SwatchRole,
    pub formats: Vec<ColorFormat>,
}

impl Swatch {
    fn new(color: ColorValue, role: SwatchRole) -> Self {
        let formats = color_formats(&color);
        Self {
            color,
            role,
            formats,
        }
    }

    pub fn is_selected(&self) -> bool {
        self.role == SwatchRole::Selected
    }
}

/// Everything the detail panel shows for one selected color: its own formats,
/// then a column of swatches running lighter shades, the color itself, darker shades.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorDetail {
    pub selected: ColorValue,
    pub formats: Vec<ColorFormat>,
    pub swatches: Vec<Swatch>,
}

impl ColorDetail {
    pub fn for_color(color: &ColorValue, steps: u32) -> Self {
        let shades = generate_shades(color, steps);
        let mut swatches = Vec::with_capacity(shades.len() + 1);
        swatches.extend(
            shades
                .lighter
                .into_iter()
                .map(|hex| Swatch::new(hex.into(), SwatchRole::Lighter)),
        );
        swatches.push(Swatch::new(color.clone(), SwatchRole::Selected));
        swatches.extend(
            shades
                .darker
                .into_iter()
                .map(|hex| Swatch::new(hex.into(), SwatchRole::Darker)),
        );

        Self {
            selected: color.clone(),
            formats: color_formats(color),
            swatches,
        }
    }

    /// Every copyable value in display order: the selected color's formats first,
    /// then each swatch's formats top to bottom.
    pub fn format_entries(&self) -> Vec<&ColorFormat> {
        self.formats
            .iter()
            .chain(self.swatches.iter().flat_map(|s| s.formats.iter()))
            .collect()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.swatches.iter().position(Swatch::is_selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FormatLabel;
    use crate::parser::validate_and_format;
    use crate::shades::DEFAULT_STEPS;
    use pretty_assertions::assert_eq;

    #[test]
    fn selected_color_sits_between_lighter_and_darker() {
        let color = validate_and_format("#808080").unwrap();
        let detail = ColorDetail::for_color(&color, DEFAULT_STEPS);

        assert_eq!(detail.swatches.len(), 11);
        assert_eq!(detail.selected_index(), Some(5));
        assert_eq!(detail.swatches[0].color.as_text(), "#ffffff");
        assert_eq!(detail.swatches[5].color, color);
        assert_eq!(detail.swatches[10].color.as_text(), "#000000");
        assert!(detail.swatches[..5]
            .iter()
            .all(|s| s.role == SwatchRole::Lighter));
        assert!(detail.swatches[6..]
            .iter()
            .all(|s| s.role == SwatchRole::Darker));
    }

    #[test]
    fn rgb_selection_keeps_original_text_in_its_swatch() {
        let color = validate_and_format("rgb(10, 20, 30)").unwrap();
        let detail = ColorDetail::for_color(&color, DEFAULT_STEPS);

        assert_eq!(detail.formats[0].label, FormatLabel::Original);
        assert_eq!(detail.formats[0].value, "rgb(10, 20, 30)");

        let idx = detail.selected_index().unwrap();
        assert_eq!(detail.swatches[idx].formats, detail.formats);
        for swatch in detail.swatches.iter().filter(|s| !s.is_selected()) {
            assert_eq!(swatch.formats[0].label, FormatLabel::Hex);
        }
    }

    #[test]
    fn black_detail_has_no_darker_swatches() {
        let color = validate_and_format("000").unwrap();
        let detail = ColorDetail::for_color(&color, DEFAULT_STEPS);
        assert_eq!(detail.selected_index(), Some(detail.swatches.len() - 1));
    }

    #[test]
    fn format_entries_start_with_selected_formats() {
        let color = validate_and_format("#123456").unwrap();
        let detail = ColorDetail::for_color(&color, 1);
        let entries = detail.format_entries();

        // 3 selected formats, then 3 per swatch (white, the color, black).
        assert_eq!(entries.len(), 3 + 3 * 3);
        assert_eq!(entries[0].value, "#123456");
        assert_eq!(entries[3].value, "#ffffff");
    }
}
