use std::str::FromStr;

use crate::error::{ColorError, InvalidReason};
use crate::model::{hex_digit, ColorValue, HexColor, Rgb};

/// Validate free-form color text and turn it into a [`ColorValue`].
///
/// Grammars are tried in order and the first match wins:
/// * `#rgb` / `rgb` shorthand, expanded to six lowercase digits
/// * `#rrggbb` / `rrggbb`, lowercased
/// * `rgb(r, g, b)` with 1-3 digit channels up to 255, kept verbatim
/// * `rgba(r, g, b, a)` with `a` as `0`, `1` or a decimal up to 1, kept verbatim
///
/// Every grammar is anchored at both ends.
pub fn validate_and_format(text: &str) -> Result<ColorValue, ColorError> {
    let digits = text.strip_prefix('#').unwrap_or(text);

    if let Some(hex) = expand_shorthand(digits) {
        return Ok(hex.into());
    }
    if let Some(hex) = full_hex(digits) {
        return Ok(hex.into());
    }

    let mut reason = InvalidReason::Unrecognized;

    if let Some(args) = match_function(text, "rgb", false) {
        match parse_channels(&args.channels) {
            Some(channels) => {
                return Ok(ColorValue::Rgb {
                    channels,
                    literal: text.to_string(),
                })
            }
            None => reason = InvalidReason::ChannelOutOfRange,
        }
    }

    if let Some(args) = match_function(text, "rgba", true) {
        let channels = parse_channels(&args.channels);
        let alpha = args
            .alpha
            .and_then(|a| a.parse::<f64>().ok())
            .filter(|a| *a <= 1.0);
        match (channels, alpha) {
            (Some(channels), Some(alpha)) => {
                return Ok(ColorValue::Rgba {
                    channels,
                    alpha,
                    literal: text.to_string(),
                })
            }
            (None, _) => reason = InvalidReason::ChannelOutOfRange,
            (Some(_), None) => reason = InvalidReason::AlphaOutOfRange,
        }
    }

    Err(ColorError::invalid(text, reason))
}

/// Validate text typed into the search box.
///
/// Text that starts with neither `#` nor `rgb` gets a `#` prefix first, so bare
/// digits like `0af` are read as hex. Errors report the text as typed.
pub fn parse_search_input(text: &str) -> Result<ColorValue, ColorError> {
    if text.starts_with('#') || text.starts_with("rgb") {
        return validate_and_format(text);
    }
    validate_and_format(&format!("#{text}"))
        .map_err(|err| ColorError::invalid(text, err.reason()))
}

impl FromStr for ColorValue {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_and_format(s)
    }
}

impl TryFrom<&str> for ColorValue {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        validate_and_format(value)
    }
}

fn is_hex_digits(s: &str) -> bool {
    s.bytes().all(|c| hex_digit(c).is_some())
}

fn expand_shorthand(digits: &str) -> Option<HexColor> {
    if digits.len() != 3 || !is_hex_digits(digits) {
        return None;
    }
    let mut out = String::with_capacity(7);
    out.push('#');
    for c in digits.chars() {
        let c = c.to_ascii_lowercase();
        out.push(c);
        out.push(c);
    }
    Some(HexColor::from_canonical(out))
}

fn full_hex(digits: &str) -> Option<HexColor> {
    if digits.len() != 6 || !is_hex_digits(digits) {
        return None;
    }
    Some(HexColor::from_canonical(format!(
        "#{}",
        digits.to_ascii_lowercase()
    )))
}

fn parse_channels(raw: &[&str; 3]) -> Option<Rgb> {
    let channel = |s: &str| s.parse::<u16>().ok().filter(|v| *v <= 255).map(|v| v as u8);
    Some(Rgb::new(channel(raw[0])?, channel(raw[1])?, channel(raw[2])?))
}

#[derive(Debug)]
struct FunctionArgs<'a> {
    channels: [&'a str; 3],
    alpha: Option<&'a str>,
}

/// Match `name(` ch `,` ch `,` ch [`,` alpha] `)` with optional whitespace around
/// every component. Only the shape is checked here; ranges are checked by the caller.
fn match_function<'a>(text: &'a str, name: &str, with_alpha: bool) -> Option<FunctionArgs<'a>> {
    let mut scan = Scanner::new(text);
    if !scan.eat(name) || !scan.eat("(") {
        return None;
    }

    let mut channels = [""; 3];
    for (idx, slot) in channels.iter_mut().enumerate() {
        scan.skip_whitespace();
        *slot = scan.digits(1, 3)?;
        scan.skip_whitespace();
        let last = idx == 2 && !with_alpha;
        if !scan.eat(if last { ")" } else { "," }) {
            return None;
        }
    }

    let alpha = if with_alpha {
        scan.skip_whitespace();
        let value = scan.alpha()?;
        scan.skip_whitespace();
        if !scan.eat(")") {
            return None;
        }
        Some(value)
    } else {
        None
    };

    scan.is_empty().then_some(FunctionArgs { channels, alpha })
}

/// The whitespace class of ECMAScript `\s`: the Unicode `Zs` separators plus
/// tab, line feed, vertical tab, form feed, carriage return, the two line and
/// paragraph separators and the byte order mark. NEL (U+0085) is not included.
fn is_pattern_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0b}' | '\u{0c}' | '\r' | ' ' | '\u{a0}' | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}' | '\u{2029}' | '\u{202f}' | '\u{205f}' | '\u{3000}' | '\u{feff}'
    )
}

struct Scanner<'a> {
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self { rest: text }
    }

    fn is_empty(&self) -> bool {
        self.rest.is_empty()
    }

    fn eat(&mut self, token: &str) -> bool {
        match self.rest.strip_prefix(token) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    fn skip_whitespace(&mut self) {
        self.rest = self.rest.trim_start_matches(is_pattern_space);
    }

    fn count_digits(&self) -> usize {
        self.rest.bytes().take_while(u8::is_ascii_digit).count()
    }

    /// Take between `min` and `max` ASCII digits. A longer run is a mismatch.
    fn digits(&mut self, min: usize, max: usize) -> Option<&'a str> {
        let count = self.count_digits();
        if count < min || count > max {
            return None;
        }
        let (digits, rest) = self.rest.split_at(count);
        self.rest = rest;
        Some(digits)
    }

    /// `[0-1](\.\d+)?`
    fn alpha(&mut self) -> Option<&'a str> {
        let start = self.rest;
        if !(self.eat("0") || self.eat("1")) {
            return None;
        }
        if self.eat(".") {
            let count = self.count_digits();
            if count == 0 {
                return None;
            }
            self.rest = &self.rest[count..];
        }
        Some(&start[..start.len() - self.rest.len()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn canonical(text: &str) -> String {
        validate_and_format(text)
            .map(|v| v.as_text().to_string())
            .unwrap_or_else(|err| panic!("expected '{text}' to parse: {err}"))
    }

    #[rstest]
    #[case("fff", "#ffffff")]
    #[case("FFF", "#ffffff")]
    #[case("#a1B", "#aa11bb")]
    #[case("#0F0", "#00ff00")]
    fn expands_shorthand_hex(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(canonical(input), expected);
    }

    #[rstest]
    #[case("ABCDEF", "#abcdef")]
    #[case("#FfA500", "#ffa500")]
    #[case("#000000", "#000000")]
    fn lowercases_full_hex(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(canonical(input), expected);
    }

    #[rstest]
    #[case("rgb(10, 20, 30)")]
    #[case("rgb(10,20,30)")]
    #[case("rgb( 0 ,  255 , 007 )")]
    fn keeps_rgb_text_verbatim(#[case] input: &str) {
        let value = validate_and_format(input).unwrap();
        assert_eq!(value.kind(), crate::model::ColorKind::Rgb);
        assert_eq!(value.as_text(), input);
    }

    #[rstest]
    #[case("rgb(\u{feff}1,2,3)")]
    #[case("rgb(\t1,\u{a0}2 ,\u{3000}3\n)")]
    #[case("rgb(1,\u{2028}2,3)")]
    fn skips_pattern_whitespace(#[case] input: &str) {
        assert_eq!(validate_and_format(input).unwrap().channels(), Rgb::new(1, 2, 3));
    }

    #[rstest]
    #[case("rgb(\u{85}1,2,3)")]
    #[case("rgb(1,\u{200b}2,3)")]
    fn rejects_other_unicode_spacing(#[case] input: &str) {
        assert_eq!(
            validate_and_format(input).unwrap_err().reason(),
            InvalidReason::Unrecognized
        );
    }

    #[test]
    fn rgb_channels_allow_leading_zeros() {
        let value = validate_and_format("rgb(007,010,255)").unwrap();
        assert_eq!(value.channels(), Rgb::new(7, 10, 255));
    }

    #[rstest]
    #[case("rgba(0, 0, 0, 0)", 0.0)]
    #[case("rgba(0,0,0,1)", 1.0)]
    #[case("rgba(12, 34, 56, 0.25)", 0.25)]
    #[case("rgba(12, 34, 56, 1.000)", 1.0)]
    fn accepts_rgba_alpha_in_range(#[case] input: &str, #[case] alpha: f64) {
        let value = validate_and_format(input).unwrap();
        assert_eq!(value.alpha(), Some(alpha));
        assert_eq!(value.as_text(), input);
    }

    #[rstest]
    #[case("rgb(256,0,0)", InvalidReason::ChannelOutOfRange)]
    #[case("rgb(0, 0, 999)", InvalidReason::ChannelOutOfRange)]
    #[case("rgba(0,0,0,1.5)", InvalidReason::AlphaOutOfRange)]
    #[case("rgba(300,0,0,0.5)", InvalidReason::ChannelOutOfRange)]
    #[case("rgb(1000,0,0)", InvalidReason::Unrecognized)]
    #[case("rgba(0,0,0,.5)", InvalidReason::Unrecognized)]
    #[case("rgba(0,0,0,2)", InvalidReason::Unrecognized)]
    #[case("rgba(0,0,0,0.)", InvalidReason::Unrecognized)]
    #[case("rgb(0,0)", InvalidReason::Unrecognized)]
    #[case("rgb(0,0,0,0)", InvalidReason::Unrecognized)]
    #[case("RGB(0,0,0)", InvalidReason::Unrecognized)]
    #[case("rgb(-1,0,0)", InvalidReason::Unrecognized)]
    fn rejects_malformed_functions(#[case] input: &str, #[case] reason: InvalidReason) {
        let err = validate_and_format(input).unwrap_err();
        assert_eq!(err.reason(), reason);
    }

    #[rstest]
    #[case("")]
    #[case("#")]
    #[case("ff")]
    #[case("ffff")]
    #[case("#ggg")]
    #[case("##fff")]
    #[case(" fff")]
    #[case("fff ")]
    #[case("#ffffff0")]
    #[case("rgb(1,2,3) ")]
    #[case(" rgb(1,2,3)")]
    #[case("red")]
    fn rejects_unanchored_or_unknown_text(#[case] input: &str) {
        assert!(validate_and_format(input).is_err(), "{input:?} should be rejected");
    }

    #[test]
    fn hex_round_trips_for_every_case_mix() {
        for input in ["0a0B0c", "FFFFFF", "123abc", "#DEADbe"] {
            let digits = input.trim_start_matches('#');
            let value = validate_and_format(input).unwrap();
            assert_eq!(value.as_text(), format!("#{}", digits.to_lowercase()));
        }
    }

    #[test]
    fn search_input_prefixes_bare_text() {
        assert_eq!(parse_search_input("0af").unwrap().as_text(), "#00aaff");
        assert_eq!(
            parse_search_input("rgb(1, 2, 3)").unwrap().as_text(),
            "rgb(1, 2, 3)"
        );

        let err = parse_search_input("nope").unwrap_err();
        assert_eq!(
            err,
            ColorError::InvalidColorFormat {
                input: "nope".into(),
                reason: InvalidReason::Unrecognized,
            }
        );
    }

    #[test]
    fn from_str_delegates_to_validator() {
        let value: ColorValue = "#ABC".parse().unwrap();
        assert_eq!(value.as_text(), "#aabbcc");
        assert!("rgb(256,0,0)".parse::<ColorValue>().is_err());
    }
}
