//! IndustryDB lead filter CLI.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use idb_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use idb_cli::commands::{AppContext, run_filter, run_select};
use idb_cli::logging::{LogConfig, LogFormat, init_logging};
use idb_cli::summary::{
    catalog_table, countries_table, error_line, print_select_report, tiers_table,
};
use idb_filter::CountrySelector;
use tracing::level_filters::LevelFilter;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("{}", error_line(&error));
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Tiers => {
            println!("{}", tiers_table());
        }
        Command::Select(args) => {
            let ctx = AppContext::load(cli.config.as_deref(), cli.catalog.as_deref())?;
            let report = run_select(&ctx, args.tier.tier.as_deref(), &args.picks)?;
            print_select_report(&report);
        }
        Command::Filter(args) => {
            let ctx = AppContext::load(cli.config.as_deref(), cli.catalog.as_deref())?;
            let request = run_filter(&ctx, args)?;
            println!("{}", serde_json::to_string_pretty(&request)?);
        }
        Command::Catalog(args) => {
            let ctx = AppContext::load(cli.config.as_deref(), cli.catalog.as_deref())?;
            println!("{}", catalog_table(&ctx.catalog, args.search.as_deref()));
        }
        Command::Countries(args) => {
            let mut selector = CountrySelector::builtin();
            if let Some(filter) = &args.filter {
                selector.set_query(filter.as_str());
            }
            println!("{}", countries_table(&selector));
        }
    }
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
