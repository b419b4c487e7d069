//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "acs-profile",
    version,
    about = "ACS profile variable tree - classify, explore and export the catalog",
    long_about = "Builds a topic tree from the Census ACS data-profile variable catalog.\n\n\
                  Variables are grouped into families (estimate, MOE, percent forms,\n\
                  annotations), arranged by their label hierarchy, and can be exported\n\
                  as XML or queried from the command line."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

/// Where the catalog comes from. A local file takes precedence over the
/// network endpoint.
#[derive(Args)]
pub struct SourceArgs {
    /// Load the catalog from a local variables.json instead of the network.
    #[arg(long = "catalog-file", value_name = "PATH")]
    pub catalog_file: Option<PathBuf>,

    /// Catalog endpoint URL.
    #[arg(long = "url", value_name = "URL", default_value = acs_catalog::DEFAULT_CATALOG_URL)]
    pub url: String,

    /// Fetch timeout in seconds.
    #[arg(long = "timeout", value_name = "SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Census API key (defaults to the CENSUS_API_KEY environment variable).
    #[arg(long = "api-key", value_name = "KEY")]
    pub api_key: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build the tree and write it as an XML document.
    Dump(DumpArgs),

    /// Look up the family owning a variable code.
    Family(FamilyArgs),

    /// Show the subtree and families at a label path.
    Branch(BranchArgs),

    /// List the families of a topic group.
    Group(GroupArgs),

    /// Resolve an annotation/attribute code to its owning family.
    Attribute(AttributeArgs),

    /// Print a capped plain-text preview of the topic tree.
    Preview(PreviewArgs),
}

#[derive(Parser)]
pub struct DumpArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Destination file for the XML document.
    #[arg(long = "output", value_name = "PATH", default_value = "acs_profile_tree.xml")]
    pub output: PathBuf,

    /// Root element name.
    #[arg(long = "root-name", value_name = "NAME", default_value = "ACSProfile")]
    pub root_name: String,

    /// Omit FamilyLabel and member Label elements.
    #[arg(long = "no-labels")]
    pub no_labels: bool,

    /// Omit member Attributes lists.
    #[arg(long = "no-attributes")]
    pub no_attributes: bool,

    /// Write without indentation.
    #[arg(long = "compact")]
    pub compact: bool,
}

#[derive(Parser)]
pub struct FamilyArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Any member variable code, e.g. DP02_0126E.
    #[arg(value_name = "CODE")]
    pub code: String,
}

#[derive(Parser)]
pub struct BranchArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Slash-delimited label path, e.g. "ANCESTRY/Total population/Arab".
    #[arg(value_name = "PATH")]
    pub path: String,
}

#[derive(Parser)]
pub struct GroupArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Topic group code, e.g. DP02.
    #[arg(value_name = "GROUP")]
    pub group: String,
}

#[derive(Parser)]
pub struct AttributeArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Attribute code, e.g. DP05_0050PMA.
    #[arg(value_name = "CODE")]
    pub code: String,
}

#[derive(Parser)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Maximum child nodes shown per level.
    #[arg(long = "max-children", value_name = "N", default_value_t = 8)]
    pub max_children: usize,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
