//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "idb",
    version,
    about = "IndustryDB lead filters - pick industries and build search requests",
    long_about = "Pick industries and sub-niches within your plan's limits, combine them\n\
                  with location, quality and specialty filters, and print the\n\
                  resulting lead search request."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Settings file (default: platform config dir).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// JSON industry catalog to use instead of the built-in one.
    #[arg(long = "catalog", value_name = "PATH", global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show selection limits per subscription tier.
    Tiers,

    /// Apply industry picks in order and show what each one did.
    Select(SelectArgs),

    /// Build a lead search request and print it as JSON.
    Filter(FilterArgs),

    /// Browse or search the industry catalog.
    Catalog(CatalogArgs),

    /// List countries grouped by region.
    Countries(CountriesArgs),
}

#[derive(Args)]
pub struct TierArg {
    /// Subscription tier (free, starter, pro, business). Defaults to the settings file.
    #[arg(long = "tier", value_name = "TIER")]
    pub tier: Option<String>,
}

#[derive(Args)]
pub struct SelectArgs {
    #[command(flatten)]
    pub tier: TierArg,

    /// Picks as INDUSTRY or INDUSTRY/SUB_NICHE, applied in order.
    #[arg(value_name = "PICK")]
    pub picks: Vec<String>,
}

#[derive(Args)]
pub struct FilterArgs {
    #[command(flatten)]
    pub tier: TierArg,

    /// Picks as INDUSTRY or INDUSTRY/SUB_NICHE, applied in order.
    #[arg(value_name = "PICK")]
    pub picks: Vec<String>,

    /// ISO country code (default from settings).
    #[arg(long = "country")]
    pub country: Option<String>,

    #[arg(long = "city")]
    pub city: Option<String>,

    /// Radius around the city in kilometres.
    #[arg(long = "radius", value_name = "KM")]
    pub radius: Option<u32>,

    #[arg(long = "has-email")]
    pub has_email: bool,

    #[arg(long = "has-phone")]
    pub has_phone: bool,

    #[arg(long = "has-website")]
    pub has_website: bool,

    #[arg(long = "verified")]
    pub verified: bool,

    #[arg(long = "min-score", value_name = "0-100")]
    pub min_score: Option<u8>,

    #[arg(long = "max-score", value_name = "0-100")]
    pub max_score: Option<u8>,

    /// Specialty tag (repeatable).
    #[arg(long = "specialty", value_name = "TAG")]
    pub specialties: Vec<String>,

    #[arg(long = "page", default_value_t = 1)]
    pub page: u32,

    /// Results per page (default from settings).
    #[arg(long = "per-page")]
    pub per_page: Option<u32>,
}

#[derive(Args)]
pub struct CatalogArgs {
    /// Only show industries and sub-niches matching this text.
    #[arg(long = "search", value_name = "TEXT")]
    pub search: Option<String>,
}

#[derive(Args)]
pub struct CountriesArgs {
    /// Only show countries whose name contains, or code equals, this text.
    #[arg(long = "filter", value_name = "TEXT")]
    pub filter: Option<String>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
