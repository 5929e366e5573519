use std::fmt;
use std::io::Write;

use anyhow::{anyhow, Context, Result};
use serde_json::json;

use crate::cli::{CliCommand, InspectArgs, RandomArgs, ShadesArgs, ValidateArgs};
use crate::config::AppConfig;
use crate::core::commands as core_commands;
use crate::core::convert::format_value;
use crate::core::{generate_shades, parse_search_input, Palette};
use crate::model::{HexColor, ShadeSet};

pub fn execute<W: Write>(config: &AppConfig, command: CliCommand, mut writer: W) -> Result<()> {
    match command {
        CliCommand::Inspect(args) => handle_inspect(config, &args, &mut writer),
        CliCommand::Shades(args) => handle_shades(config, &args, &mut writer),
        CliCommand::Validate(args) => handle_validate(&args, &mut writer),
        CliCommand::Random(args) => handle_random(&args, &mut writer),
        CliCommand::Tui(_) => Err(anyhow!("launch interactive surfaces directly")),
    }
}

fn handle_inspect<W: Write>(config: &AppConfig, args: &InspectArgs, mut writer: W) -> Result<()> {
    let report = core_commands::inspect_color(&args.color, config.shade_steps())?;

    if let Some(label) = args.only {
        let value = format_value(&report.color, label)
            .ok_or_else(|| anyhow!("{} has no {} format", report.color, label))?;
        writeln!(writer, "{value}")?;
        return Ok(());
    }

    if args.json {
        writeln!(writer, "{}", report.to_json_pretty()?)?;
        return Ok(());
    }

    for format in &report.formats {
        writeln!(writer, "{:<9}{}", format!("{}:", format.label), format.value)?;
    }
    writeln!(writer)?;
    ShadeColumns(&report.shades).write_to(&mut writer)?;
    Ok(())
}

fn handle_shades<W: Write>(config: &AppConfig, args: &ShadesArgs, mut writer: W) -> Result<()> {
    let color = parse_search_input(&args.color)?;
    let shades = generate_shades(&color, config.shade_steps());

    if args.json {
        let body = serde_json::to_string_pretty(&shades).context("failed to encode shades")?;
        writeln!(writer, "{body}")?;
    } else {
        ShadeColumns(&shades).write_to(&mut writer)?;
    }
    Ok(())
}

fn handle_validate<W: Write>(args: &ValidateArgs, mut writer: W) -> Result<()> {
    let color = parse_search_input(&args.color)?;
    writeln!(writer, "{color}")?;
    Ok(())
}

fn handle_random<W: Write>(args: &RandomArgs, mut writer: W) -> Result<()> {
    let palette = Palette::seeded(args.count, args.seed);
    if args.json {
        let body = json!({ "seed": args.seed, "colors": palette.colors() });
        writeln!(writer, "{}", serde_json::to_string_pretty(&body)?)?;
        return Ok(());
    }
    for color in palette.colors() {
        writeln!(writer, "{color}")?;
    }
    Ok(())
}

struct ShadeColumns<'a>(&'a ShadeSet);

impl ShadeColumns<'_> {
    fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        writeln!(writer, "{}", ShadeLine::new("Lighter", &self.0.lighter))?;
        writeln!(writer, "{}", ShadeLine::new("Darker", &self.0.darker))?;
        Ok(())
    }
}

struct ShadeLine<'a> {
    label: &'static str,
    shades: &'a [HexColor],
}

impl<'a> ShadeLine<'a> {
    fn new(label: &'static str, shades: &'a [HexColor]) -> Self {
        Self { label, shades }
    }
}

impl fmt::Display for ShadeLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<9}", format!("{}:", self.label))?;
        for (idx, shade) in self.shades.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{shade}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::TuiArgs;
    use crate::model::FormatLabel;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn config() -> AppConfig {
        AppConfig::from_data_dir(PathBuf::from("/tmp/palette-tests"))
    }

    fn run(command: CliCommand) -> Result<String> {
        let mut output = Vec::new();
        execute(&config(), command, &mut output)?;
        Ok(String::from_utf8(output).expect("utf8"))
    }

    #[test]
    fn inspect_prints_formats_then_shades() {
        let output = run(CliCommand::Inspect(InspectArgs {
            color: "808080".into(),
            json: false,
            only: None,
        }))
        .expect("inspect");

        assert_eq!(
            output,
            "HEX:     #808080\n\
             RGB:     rgb(128, 128, 128)\n\
             RGBA:    rgba(128, 128, 128, 1)\n\
             \n\
             Lighter: #ffffff #e6e6e6 #cccccc #b3b3b3 #999999\n\
             Darker:  #666666 #4d4d4d #333333 #1a1a1a #000000\n"
        );
    }

    #[test]
    fn inspect_only_prints_a_single_value() {
        let output = run(CliCommand::Inspect(InspectArgs {
            color: "rgb(1,2,3)".into(),
            json: false,
            only: Some(FormatLabel::Rgba),
        }))
        .expect("inspect");
        assert_eq!(output, "rgba(1,2,3, 1)\n");
    }

    #[test]
    fn inspect_only_rejects_missing_format() {
        let err = run(CliCommand::Inspect(InspectArgs {
            color: "rgba(1, 2, 3, 0.5)".into(),
            json: false,
            only: Some(FormatLabel::Rgb),
        }))
        .unwrap_err();
        assert!(err.to_string().contains("has no RGB format"));
    }

    #[test]
    fn inspect_rejects_invalid_color() {
        let err = run(CliCommand::Inspect(InspectArgs {
            color: "zzz".into(),
            json: false,
            only: None,
        }))
        .unwrap_err();
        assert!(err.to_string().contains("invalid color"));
    }

    #[test]
    fn shades_json_for_black_drops_every_darker_stop() {
        let output = run(CliCommand::Shades(ShadesArgs {
            color: "#000000".into(),
            json: true,
        }))
        .expect("shades");
        let value: serde_json::Value = serde_json::from_str(&output).expect("json");
        let lighter = value["lighter"].as_array().expect("lighter list");
        assert_eq!(lighter.len(), 5);
        assert_eq!(lighter[0], "#ffffff");
        assert!(value["darker"].as_array().expect("darker list").is_empty());
    }

    #[test]
    fn validate_prints_canonical_form() {
        let output = run(CliCommand::Validate(ValidateArgs {
            color: "ABC".into(),
        }))
        .expect("validate");
        assert_eq!(output, "#aabbcc\n");
    }

    #[test]
    fn random_with_seed_is_repeatable() {
        let args = RandomArgs {
            count: 4,
            seed: Some(7),
            json: false,
        };
        let first = run(CliCommand::Random(args.clone())).expect("random");
        let second = run(CliCommand::Random(args)).expect("random");
        assert_eq!(first, second);
        assert_eq!(first.lines().count(), 4);
    }

    #[test]
    fn tui_is_not_a_batch_command() {
        assert!(run(CliCommand::Tui(TuiArgs::default())).is_err());
    }
}
