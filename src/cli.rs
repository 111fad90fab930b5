//! Command-line interface.

use std::io::Read;
use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use clap_complete::Shell;

use crate::error::{Result, SwatchError};
use crate::extract::from_css;
use crate::options::{ColorFormat, Options, SortOrder};

/// swatch - list the colours used by a CSS stylesheet
#[derive(Parser, Debug)]
#[command(name = "swatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Stylesheet to read, or `-` for stdin
    #[arg(required_unless_present = "completions")]
    pub input: Option<PathBuf>,

    /// Omit greys (monochrome colours other than black and white)
    #[arg(short = 'g', long)]
    pub without_grey: bool,

    /// Omit monochrome colours, black and white included
    #[arg(short = 'm', long)]
    pub without_monochrome: bool,

    /// Keep every occurrence instead of deduplicating
    #[arg(short = 'a', long)]
    pub all_colors: bool,

    /// Output encoding (original text when omitted)
    #[arg(long, value_enum)]
    pub format: Option<ColorFormat>,

    /// Ordering of the colour list (input order when omitted)
    #[arg(long, value_enum)]
    pub sort: Option<SortOrder>,

    /// Emit a JSON array instead of one colour per line
    #[arg(long)]
    pub json: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

pub fn run(cli: Cli) -> Result<()> {
    if let Some(shell) = cli.completions {
        generate_completions(shell);
        return Ok(());
    }

    // clap guarantees the input is present when --completions is absent.
    let Some(path) = cli.input else {
        return Ok(());
    };

    let css = read_input(&path)?;

    let options = Options {
        without_grey: cli.without_grey,
        without_monochrome: cli.without_monochrome,
        all_colors: cli.all_colors,
        color_format: cli.format,
        sort: cli.sort,
    };

    let colours = from_css(&css, &options)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&colours)?);
    } else {
        for colour in &colours {
            println!("{}", colour);
        }
    }

    Ok(())
}

fn read_input(path: &PathBuf) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    std::fs::read_to_string(path).map_err(|e| SwatchError::Io {
        path: path.clone(),
        message: e.to_string(),
    })
}

fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::try_parse_from([
            "swatch",
            "styles.css",
            "-g",
            "--all-colors",
            "--format",
            "hex",
            "--sort",
            "frequency",
        ])
        .unwrap();
        assert!(cli.without_grey);
        assert!(!cli.without_monochrome);
        assert!(cli.all_colors);
        assert_eq!(cli.format, Some(ColorFormat::HexString));
        assert_eq!(cli.sort, Some(SortOrder::Frequency));
    }

    #[test]
    fn test_cli_requires_input_without_completions() {
        assert!(Cli::try_parse_from(["swatch"]).is_err());
        assert!(Cli::try_parse_from(["swatch", "--completions", "bash"]).is_ok());
    }

    #[test]
    fn test_format_value_names() {
        assert_eq!(
            ColorFormat::from_str("keyword", false).unwrap(),
            ColorFormat::Keyword
        );
        assert_eq!(
            ColorFormat::from_str("hexa", false).unwrap(),
            ColorFormat::HexaString
        );
    }
}
