//! Command-line interface definition

use std::path::PathBuf;

use clap::Parser;

/// Generate the QA checklist workbook for the Confluent Cloud Java
/// developer workshop.
#[derive(Parser, Debug)]
#[command(name = "qa-checklist-cli", version, about)]
pub struct Cli {
    /// Where to write the generated workbook
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "docs/workshop/QA-Checklist.xlsx"
    )]
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_the_fixed_workshop_path() {
        let cli = Cli::parse_from(["qa-checklist-cli"]);
        assert_eq!(cli.output, PathBuf::from("docs/workshop/QA-Checklist.xlsx"));
    }

    #[test]
    fn output_path_can_be_overridden() {
        let cli = Cli::parse_from(["qa-checklist-cli", "--output", "/tmp/out.xlsx"]);
        assert_eq!(cli.output, PathBuf::from("/tmp/out.xlsx"));
    }
}
