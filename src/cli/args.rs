use std::fmt::Write;
use std::path::PathBuf;

use clap::{
    ArgAction, ColorChoice, CommandFactory, FromArgMatches, Parser, ValueEnum,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use rolodex_core::app_dirs;

/// Produce the full version banner including config and cache directories.
fn long_version() -> &'static str {
    let config_dir = match app_dirs::get_config_dir() {
        Ok(path) => path.display().to_string(),
        Err(err) => format!("unavailable ({err})"),
    };
    let cache_dir = match app_dirs::get_cache_dir() {
        Ok(path) => path.display().to_string(),
        Err(err) => format!("unavailable ({err})"),
    };

    let mut details = format!("rolodex {}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(details);
    let _ = writeln!(details, "config directory: {config_dir}");
    let _ = writeln!(details, "cache directory: {cache_dir}");

    Box::leak(details.into_boxed_str())
}

/// Create the clap styles used for custom colour output.
fn cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
    let mut matches = CliArgs::command().get_matches();
    CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

#[derive(Parser, Debug)]
#[command(
    name = "rolodex",
    version,
    long_version = long_version(),
    about = "Interactive browser for a character-record API",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
/// Command-line arguments accepted by the `rolodex` binary.
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "ROLODEX_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'q',
        long,
        value_name = "QUERY",
        help = "Provide an initial search query (default: the last submitted query)"
    )]
    pub(crate) query: Option<String>,
    #[arg(
        long,
        value_name = "NUM",
        help = "Open on a specific page of results (default: 1)"
    )]
    pub(crate) page: Option<u64>,
    #[arg(
        long,
        value_name = "THEME",
        help = "Select a theme by name (default: the stored preference)"
    )]
    pub(crate) theme: Option<String>,
    #[arg(
        long = "base-url",
        value_name = "URL",
        env = "ROLODEX_BASE_URL",
        help = "Override the character API base URL (default: the public endpoint)"
    )]
    pub(crate) base_url: Option<String>,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'l',
        long = "list-themes",
        help = "List supported themes and exit (default: disabled)"
    )]
    pub(crate) list_themes: bool,
    #[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, help = "Choose how to print the exported selection")]
    pub(crate) output: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats supported by the CLI utility.
pub(crate) enum OutputFormat {
    Plain,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_cli_accepts_default_arguments() {
        let command = CliArgs::command();
        let mut matches = command.get_matches_from(vec!["rolodex"]);
        let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
        assert_eq!(parsed.output, OutputFormat::Plain);
        assert!(parsed.query.is_none());
    }

    #[test]
    fn parse_cli_reads_query_and_page() {
        let command = CliArgs::command();
        let mut matches = command.get_matches_from(vec!["rolodex", "-q", "rick", "--page", "3"]);
        let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
        assert_eq!(parsed.query.as_deref(), Some("rick"));
        assert_eq!(parsed.page, Some(3));
    }
}
