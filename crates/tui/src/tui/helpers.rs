use std::cmp::min;

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::model::{ColorValue, Rgb};

pub const BG_BASE: Color = Color::Rgb(14, 17, 23);
pub const BG_PANEL: Color = Color::Rgb(22, 26, 34);
pub const BG_ACCENT: Color = Color::Rgb(32, 37, 47);
pub const FG_ACCENT: Color = Color::Rgb(120, 161, 255);

const BASE_RGB: Rgb = Rgb::new(14, 17, 23);

pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = min(width, area.width);
    let h = min(height, area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    }
}

pub fn inset_rect(area: Rect, padding: u16) -> Rect {
    if area.width == 0 || area.height == 0 {
        return area;
    }
    let px = padding.min(area.width / 2);
    let py = padding.min(area.height / 2);
    Rect {
        x: area.x + px,
        y: area.y + py,
        width: area.width.saturating_sub(px * 2),
        height: area.height.saturating_sub(py * 2),
    }
}

/// Terminal cells have no alpha, so translucent colors are composited over the base background.
pub fn blended_rgb(color: &ColorValue) -> Rgb {
    let rgb = color.channels();
    match color.alpha() {
        Some(alpha) => {
            let mix = |fg: u8, bg: u8| {
                (f64::from(fg) * alpha + f64::from(bg) * (1.0 - alpha)).round() as u8
            };
            Rgb::new(
                mix(rgb.r, BASE_RGB.r),
                mix(rgb.g, BASE_RGB.g),
                mix(rgb.b, BASE_RGB.b),
            )
        }
        None => rgb,
    }
}

pub fn swatch_color(color: &ColorValue) -> Color {
    let rgb = blended_rgb(color);
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Black or white, whichever reads better on top of `color`.
pub fn contrast_fg(color: &ColorValue) -> Color {
    let rgb = blended_rgb(color);
    let luma = 0.299 * f64::from(rgb.r) + 0.587 * f64::from(rgb.g) + 0.114 * f64::from(rgb.b);
    if luma > 140.0 {
        Color::Black
    } else {
        Color::White
    }
}

pub fn build_help_lines() -> Vec<(&'static str, &'static str)> {
    vec![
        ("←↑↓→ / h j k l", "Move between swatches"),
        ("Enter", "Open the detail drawer for the selected swatch"),
        ("/ or s", "Search for a color"),
        (":", "Command palette"),
        ("r", "Generate a new palette"),
        ("?", "Toggle this help overlay"),
        ("↑ / ↓ (detail)", "Choose a format value"),
        ("Enter / c (detail)", "Copy the chosen value"),
        ("Esc", "Close drawers and overlays"),
        ("q / Ctrl+C", "Quit"),
    ]
}

pub fn accent_title(text: &str) -> Line<'static> {
    Line::from(vec![Span::styled(
        text.to_owned(),
        Style::default().fg(FG_ACCENT).add_modifier(Modifier::BOLD),
    )])
}
