use clap::Parser;
use deploy_common::CommaList;

use crate::config::Config;

/// Deployment template renderer
///
/// Reads a template, replaces every `%%#N#%%` placeholder with the N-th value
/// of `--list` and writes the result to the output file.
///
/// ## Example
/// ```bash
/// deploy-render -i nginx.conf.tmpl -o nginx.conf -l example.com,8080
/// ```
///
/// ## Environment Variables
/// - `RUST_LOG`: Controls logging verbosity (trace, debug, info, warn, error)
#[derive(Parser, Debug, Clone)]
#[command(name = "deploy-render")]
#[command(about = "Render a deployment template by positional placeholder substitution")]
#[command(version)]
#[command(
    long_about = "Render a deployment template by positional placeholder substitution. \nEvery %%#N#%% token in the input file is replaced by the N-th comma separated value of --list. \nTokens without a value are left untouched."
)]
pub struct Cli {
    /// Template file to read
    #[arg(
        short = 'i',
        long = "input_file",
        visible_alias = "input-file",
        value_name = "PATH"
    )]
    pub input_file: Option<String>,

    /// File to write the rendered template to
    ///
    /// Created if absent, replaced if present.
    #[arg(
        short = 'o',
        long = "output_file",
        visible_alias = "output-file",
        value_name = "PATH"
    )]
    pub output_file: Option<String>,

    /// Comma separated substitution values, in placeholder index order
    #[arg(
        short = 'l',
        long = "list",
        value_name = "VALUES",
        allow_hyphen_values = true
    )]
    pub list: Option<CommaList>,

    /// Do not print progress messages
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Convert parsed arguments into the render configuration
    ///
    /// Absent paths become empty paths, which validation reports as missing.
    pub fn into_config(self) -> Config {
        Config::new(
            self.input_file.unwrap_or_default(),
            self.output_file.unwrap_or_default(),
            self.list.map(CommaList::into_inner).unwrap_or_default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::Path;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from([
            "deploy-render",
            "-i",
            "in.tmpl",
            "-o",
            "out.conf",
            "-l",
            "Alice,Wonderland",
        ])
        .unwrap();
        assert!(!cli.quiet);

        let config = cli.into_config();
        assert_eq!(config.input_file(), Path::new("in.tmpl"));
        assert_eq!(config.output_file(), Path::new("out.conf"));
        assert_eq!(config.substitutions(), &vec!["Alice", "Wonderland"]);
    }

    #[test]
    fn test_long_flags_and_aliases() {
        let config = Cli::try_parse_from([
            "deploy-render",
            "--input_file=a",
            "--output-file",
            "b",
            "--list",
            "-x,,y",
        ])
        .unwrap()
        .into_config();
        assert_eq!(config.input_file(), Path::new("a"));
        assert_eq!(config.output_file(), Path::new("b"));
        assert_eq!(config.substitutions(), &vec!["-x", "", "y"]);
    }

    #[test]
    fn test_absent_arguments_become_empty() {
        let config = Cli::try_parse_from(["deploy-render", "-q"])
            .unwrap()
            .into_config();
        assert!(config.input_file().as_os_str().is_empty());
        assert!(config.output_file().as_os_str().is_empty());
        assert!(config.substitutions().is_empty());
    }
}
