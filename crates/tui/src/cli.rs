use std::path::PathBuf;

use clap::{value_parser, Args, Parser, Subcommand};

use crate::core::config::MAX_SHADE_STEPS;
use crate::core::palette::DEFAULT_PALETTE_SIZE;
use crate::core::DEFAULT_STEPS;
use crate::model::FormatLabel;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "palette",
    version,
    about = "Explore color swatches, formats and shades from the terminal.",
    after_help = "Examples:\n  palette                          Launch the explorer (same as `palette tui`)\n  palette inspect fff\n  palette inspect 'rgb(10, 20, 30)' --only hex\n  palette shades '#3366cc' --steps 8 --json\n  palette random --count 5 --seed 42"
)]
pub struct Cli {
    /// Override the data directory used for the log file (defaults to platform-specific app dir)
    #[arg(long, value_name = "PATH", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Number of shade steps toward white and toward black
    #[arg(long, value_name = "N", global = true, default_value_t = DEFAULT_STEPS, value_parser = value_parser!(u32).range(1..=i64::from(MAX_SHADE_STEPS)))]
    pub steps: u32,

    /// Override the tracing filter (e.g. "info", "palette_core=debug")
    #[arg(long = "log", value_name = "DIRECTIVE", global = true)]
    pub log_filter: Option<String>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CliCommand {
    /// Launch the swatch grid explorer (default command)
    Tui(TuiArgs),
    /// Show every format and the generated shades of a color
    Inspect(InspectArgs),
    /// Print only the lighter and darker shades of a color
    Shades(ShadesArgs),
    /// Print the canonical form of a color, or fail if it is not valid
    Validate(ValidateArgs),
    /// Print random palette colors
    Random(RandomArgs),
}

#[derive(Args, Debug, Clone)]
pub struct TuiArgs {
    /// Seed for a repeatable palette (falls back to PALETTE_SEED)
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Number of distinct swatches in the palette
    #[arg(long, value_name = "N", default_value_t = DEFAULT_PALETTE_SIZE, value_parser = value_parser!(usize))]
    pub count: usize,
}

impl Default for TuiArgs {
    fn default() -> Self {
        Self {
            seed: None,
            count: DEFAULT_PALETTE_SIZE,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    /// Color text: fff, #ffffff, rgb(255, 255, 255) or rgba(255, 255, 255, 0.5)
    #[arg(value_name = "COLOR")]
    pub color: String,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Print a single format value, e.g. for piping into a clipboard tool
    #[arg(long, value_enum, value_name = "FORMAT", conflicts_with = "json")]
    pub only: Option<FormatLabel>,
}

#[derive(Args, Debug, Clone)]
pub struct ShadesArgs {
    #[arg(value_name = "COLOR")]
    pub color: String,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    #[arg(value_name = "COLOR")]
    pub color: String,
}

#[derive(Args, Debug, Clone)]
pub struct RandomArgs {
    /// How many colors to print
    #[arg(long, value_name = "N", default_value_t = 10, value_parser = value_parser!(usize))]
    pub count: usize,

    /// Seed for repeatable output
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults_to_explorer_with_five_steps() {
        let cli = Cli::try_parse_from(["palette"]).expect("parse");
        assert!(cli.command.is_none());
        assert_eq!(cli.steps, 5);
    }

    #[rstest]
    #[case("1", Some(1))]
    #[case("32", Some(32))]
    #[case("0", None)]
    #[case("33", None)]
    #[case("five", None)]
    fn steps_are_bounded(#[case] steps: &str, #[case] expected: Option<u32>) {
        let parsed = Cli::try_parse_from(["palette", "--steps", steps, "inspect", "fff"]);
        assert_eq!(parsed.ok().map(|cli| cli.steps), expected);
    }

    #[rstest]
    #[case("original", FormatLabel::Original)]
    #[case("hex", FormatLabel::Hex)]
    #[case("rgb", FormatLabel::Rgb)]
    #[case("rgba", FormatLabel::Rgba)]
    fn parses_inspect_only_format(#[case] name: &str, #[case] expected: FormatLabel) {
        let cli = Cli::try_parse_from(["palette", "inspect", "fff", "--only", name]).expect("parse");
        match cli.command {
            Some(CliCommand::Inspect(args)) => {
                assert_eq!(args.color, "fff");
                assert_eq!(args.only, Some(expected));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn only_conflicts_with_json() {
        assert!(Cli::try_parse_from(["palette", "inspect", "fff", "--only", "hex", "--json"]).is_err());
    }
}
