use crate::convert::to_hex;
use crate::model::{ColorValue, HexColor, Rgb, ShadeSet};

pub const DEFAULT_STEPS: u32 = 5;

/// Derive lighter and darker stops for a color.
///
/// Each list has `steps + 1` candidates before any stop equal to the source
/// hex is removed. `lighter` runs from near-white toward the source, `darker`
/// from the source toward black. Alpha is ignored. A `steps` of 0 is treated as 1.
pub fn generate_shades(color: &ColorValue, steps: u32) -> ShadeSet {
    let steps = steps.max(1);
    let base = color.channels();
    let base_hex = to_hex(color);
    let total = f64::from(steps);

    let lighter = (0..=steps)
        .map(|i| {
            let ratio = f64::from(steps - i) / total;
            HexColor::from_rgb(map_channels(base, |c| c + (255.0 - c) * ratio))
        })
        .filter(|shade| *shade != base_hex)
        .collect();

    let darker = (0..=steps)
        .map(|i| {
            let ratio = f64::from(i) / total;
            HexColor::from_rgb(map_channels(base, |c| c * (1.0 - ratio)))
        })
        .filter(|shade| *shade != base_hex)
        .collect();

    ShadeSet { lighter, darker }
}

fn map_channels(rgb: Rgb, f: impl Fn(f64) -> f64) -> Rgb {
    let apply = |c: u8| round_channel(f(f64::from(c)));
    Rgb::new(apply(rgb.r), apply(rgb.g), apply(rgb.b))
}

/// Round half up. Interpolating between a channel and 0 or 255 never leaves [0, 255].
fn round_channel(value: f64) -> u8 {
    let rounded = (value + 0.5).floor();
    debug_assert!((0.0..=255.0).contains(&rounded), "channel {rounded} out of range");
    rounded as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::validate_and_format;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn shades_of(text: &str) -> ShadeSet {
        generate_shades(&validate_and_format(text).unwrap(), DEFAULT_STEPS)
    }

    fn strs(list: &[HexColor]) -> Vec<&str> {
        list.iter().map(HexColor::as_str).collect()
    }

    #[test]
    fn mid_gray_yields_five_stops_each_way() {
        let shades = shades_of("#808080");
        assert_eq!(
            strs(&shades.lighter),
            vec!["#ffffff", "#e6e6e6", "#cccccc", "#b3b3b3", "#999999"]
        );
        assert_eq!(
            strs(&shades.darker),
            vec!["#666666", "#4d4d4d", "#333333", "#1a1a1a", "#000000"]
        );
    }

    #[test]
    fn lists_move_monotonically_away_from_white() {
        let shades = shades_of("#3366cc");
        for pair in shades.lighter.windows(2) {
            let (a, b) = (pair[0].channels(), pair[1].channels());
            assert!(a.r >= b.r && a.g >= b.g && a.b >= b.b);
        }
        for pair in shades.darker.windows(2) {
            let (a, b) = (pair[0].channels(), pair[1].channels());
            assert!(a.r >= b.r && a.g >= b.g && a.b >= b.b);
        }
    }

    #[test]
    fn black_has_no_darker_shades() {
        let shades = shades_of("#000000");
        assert!(shades.darker.is_empty());
        assert_eq!(shades.lighter.len(), 5);
    }

    #[test]
    fn white_has_no_lighter_shades() {
        let shades = shades_of("fff");
        assert!(shades.lighter.is_empty());
        assert_eq!(shades.darker.len(), 5);
    }

    #[rstest]
    #[case("rgb(200, 10, 90)")]
    #[case("rgba(200, 10, 90, 0.2)")]
    #[case("#c80a5a")]
    fn source_notation_does_not_change_shades(#[case] input: &str) {
        assert_eq!(shades_of(input), shades_of("#c80a5a"));
        let shades = shades_of(input);
        assert!(!strs(&shades.lighter).contains(&"#c80a5a"));
        assert!(!strs(&shades.darker).contains(&"#c80a5a"));
    }

    #[test]
    fn custom_step_counts_change_length() {
        let color = validate_and_format("#808080").unwrap();
        let shades = generate_shades(&color, 2);
        assert_eq!(strs(&shades.lighter), vec!["#ffffff", "#c0c0c0"]);
        assert_eq!(strs(&shades.darker), vec!["#404040", "#000000"]);
    }

    #[test]
    fn zero_steps_behaves_like_one() {
        let color = validate_and_format("#808080").unwrap();
        assert_eq!(generate_shades(&color, 0), generate_shades(&color, 1));
    }

    #[test]
    fn half_values_round_up() {
        // 1 * (1 - 0.5) = 0.5 rounds to 1, which equals the source and is dropped.
        let color = validate_and_format("#010101").unwrap();
        let shades = generate_shades(&color, 2);
        assert_eq!(strs(&shades.darker), vec!["#000000"]);
    }
}
