use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;

pub use global::{ColorMode, GlobalFlags, OutputFormat};

/// Top-level CLI parser for the `peek` binary.
#[derive(Debug, Parser)]
#[command(
    name = "peek",
    version,
    about = "PricePeek - compare prices across Amazon and Flipkart"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Color table output: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Comparison service base URL (overrides config and env)
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            color: self.color,
            quiet: self.quiet,
            verbose: self.verbose,
            base_url: self.base_url.clone(),
        }
    }
}

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Compare prices for one product and exit.
    Compare(CompareArgs),
    /// Read product names from stdin, one per line, and follow each request.
    Shell,
    /// Dump the JSON schema of a data contract type.
    Schema(SchemaArgs),
}

/// Arguments for `peek compare`.
#[derive(Clone, Debug, Args)]
pub struct CompareArgs {
    /// Product description, e.g. "iPhone 15 Pro Max 256GB Natural Titanium".
    #[arg(required = true, num_args = 1.., value_name = "QUERY")]
    pub query: Vec<String>,
}

impl CompareArgs {
    /// Words joined back into the text the user typed.
    #[must_use]
    pub fn raw_query(&self) -> String {
        self.query.join(" ")
    }
}

/// Arguments for `peek schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Which type to describe.
    #[arg(value_enum, default_value = "response")]
    pub type_name: SchemaType,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    /// Body returned by `GET /compare/<query>`.
    Response,
    /// Request lifecycle state.
    State,
    /// Derived comparison facts.
    Facts,
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, ColorMode, Commands, GlobalFlags, OutputFormat, SchemaType};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn compare_joins_words() {
        let cli = Cli::try_parse_from(["peek", "compare", "iPhone", "15", "Pro"])
            .expect("cli should parse");
        let Commands::Compare(args) = cli.command else {
            panic!("expected compare");
        };
        assert_eq!(args.raw_query(), "iPhone 15 Pro");
    }

    #[test]
    fn compare_requires_a_query() {
        assert!(Cli::try_parse_from(["peek", "compare"]).is_err());
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "peek",
            "--format",
            "json",
            "--verbose",
            "--base-url",
            "http://localhost:8000",
            "shell",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:8000"));
        assert!(matches!(cli.command, Commands::Shell));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["peek", "shell", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn defaults_to_table_with_auto_color() {
        let cli = Cli::try_parse_from(["peek", "shell"]).expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.format, OutputFormat::Table);
        assert_eq!(flags.color, ColorMode::Auto);
        assert!(flags.base_url.is_none());
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["peek", "--format", "xml", "shell"]).is_err());
    }

    #[test]
    fn schema_type_defaults_to_response() {
        let cli = Cli::try_parse_from(["peek", "schema"]).expect("cli should parse");
        let Commands::Schema(args) = cli.command else {
            panic!("expected schema");
        };
        assert_eq!(args.type_name, SchemaType::Response);
    }
}
