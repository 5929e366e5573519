use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::model::{ColorValue, Rgb};

pub const DEFAULT_PALETTE_SIZE: usize = 254;

/// A random color, as `rgb(r, g, b)` or, half of the time, `rgba(r, g, b, a)`
/// with a two-decimal alpha. Channels are drawn from `0..255`.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> ColorValue {
    let channels = Rgb::new(
        rng.gen_range(0..255),
        rng.gen_range(0..255),
        rng.gen_range(0..255),
    );

    if rng.gen_bool(0.5) {
        let alpha: f64 = rng.gen();
        if let Some(color) = ColorValue::rgba(channels, alpha) {
            return color;
        }
    }
    ColorValue::rgb(channels)
}

/// The stable set of colors behind the swatch grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palette {
    colors: Vec<ColorValue>,
}

impl Palette {
    pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let count = count.max(1);
        let colors = (0..count).map(|_| random_color(rng)).collect();
        Self { colors }
    }

    /// Same seed, same palette. Without a seed the thread RNG is used.
    pub fn seeded(count: usize, seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::generate(count, &mut StdRng::seed_from_u64(seed)),
            None => Self::generate(count, &mut rand::thread_rng()),
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Grid positions past the end wrap around to the start.
    pub fn get(&self, index: usize) -> &ColorValue {
        &self.colors[index % self.colors.len()]
    }

    pub fn colors(&self) -> &[ColorValue] {
        &self.colors
    }
}

impl From<Vec<ColorValue>> for Palette {
    fn from(colors: Vec<ColorValue>) -> Self {
        if colors.is_empty() {
            return Self {
                colors: vec![ColorValue::rgb(Rgb::default())],
            };
        }
        Self { colors }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

/// Sizes the grid is laid out with, in whatever unit the viewport uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridMetrics {
    pub sidebar_width: u16,
    pub box_width: u16,
    pub box_height: u16,
    /// At or below this width the sidebar is hidden and boxes may shrink.
    pub compact_breakpoint: u16,
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self {
            sidebar_width: 64,
            box_width: 36,
            box_height: 36,
            compact_breakpoint: 768,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridGeometry {
    pub cols: usize,
    pub rows: usize,
    pub box_width: u16,
    pub compact: bool,
    /// Number of swatches to lay out; never fewer than the palette holds.
    pub box_count: usize,
}

impl GridGeometry {
    pub fn fit(viewport: Viewport, metrics: &GridMetrics, palette_len: usize) -> Self {
        let compact = viewport.width <= metrics.compact_breakpoint;
        let sidebar = if compact { 0 } else { metrics.sidebar_width };
        let available_width = viewport.width.saturating_sub(sidebar);
        let box_width = if compact {
            (available_width / 6).min(metrics.box_width)
        } else {
            metrics.box_width
        }
        .max(1);
        let box_height = metrics.box_height.max(1);

        let cols = usize::from(available_width / box_width);
        let rows = usize::from(viewport.height / box_height);

        Self {
            cols,
            rows,
            box_width,
            compact,
            box_count: palette_len.max(cols * rows),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ColorKind;
    use crate::parser::validate_and_format;
    use pretty_assertions::assert_eq;

    #[test]
    fn seeded_palettes_repeat() {
        let a = Palette::seeded(32, Some(7));
        let b = Palette::seeded(32, Some(7));
        assert_eq!(a, b);
        assert_eq!(a.len(), 32);
    }

    #[test]
    fn random_colors_are_valid_and_reparse() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let color = random_color(&mut rng);
            assert!(matches!(color.kind(), ColorKind::Rgb | ColorKind::Rgba));
            let channels = color.channels();
            assert!(channels.r < 255 && channels.g < 255 && channels.b < 255);

            let reparsed = validate_and_format(color.as_text()).expect("generated text parses");
            assert_eq!(reparsed, color);
        }
    }

    #[test]
    fn palette_index_wraps() {
        let palette = Palette::seeded(3, Some(1));
        assert_eq!(palette.get(4), palette.get(1));
    }

    #[test]
    fn wide_viewport_reserves_sidebar() {
        let geometry = GridGeometry::fit(
            Viewport {
                width: 1024,
                height: 720,
            },
            &GridMetrics::default(),
            DEFAULT_PALETTE_SIZE,
        );
        assert!(!geometry.compact);
        assert_eq!(geometry.cols, (1024 - 64) / 36);
        assert_eq!(geometry.rows, 720 / 36);
        assert_eq!(geometry.box_count, 26 * 20);
    }

    #[test]
    fn compact_viewport_drops_sidebar_and_shrinks_boxes() {
        let geometry = GridGeometry::fit(
            Viewport {
                width: 120,
                height: 400,
            },
            &GridMetrics::default(),
            DEFAULT_PALETTE_SIZE,
        );
        assert!(geometry.compact);
        assert_eq!(geometry.box_width, 20);
        assert_eq!(geometry.cols, 6);
        assert_eq!(geometry.box_count, DEFAULT_PALETTE_SIZE);
    }

    #[test]
    fn tiny_viewport_never_divides_by_zero() {
        let geometry = GridGeometry::fit(
            Viewport {
                width: 3,
                height: 0,
            },
            &GridMetrics::default(),
            10,
        );
        assert_eq!(geometry.rows, 0);
        assert_eq!(geometry.box_count, 10);
    }
}
