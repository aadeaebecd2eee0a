//! Domain Tree CLI
//!
//! Argument parsing, logging setup and subcommands for the `domtree`
//! binary.

#![warn(missing_docs)]

pub mod commands;

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub use commands::{BuildOptions, Outcome};

/// Command-line definition
#[must_use]
pub fn cli() -> Command {
    let input = Arg::new("input")
        .long("input")
        .short('i')
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("JSON listing: an array of lookup rows or a paged result");
    let separator = Arg::new("separator")
        .long("separator")
        .value_parser(value_parser!(char))
        .help("Hierarchy separator (default '/')");

    Command::new("domtree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Build navigation menu trees from pre-ordered domain path listings")
        .subcommand_required(true)
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON (filter with RUST_LOG)"),
        )
        .subcommand(
            Command::new("build")
                .about("Build and print the menu tree of a listing")
                .arg(input.clone())
                .arg(
                    Arg::new("root")
                        .long("root")
                        .default_value("/")
                        .help("Only list records below this path"),
                )
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .action(ArgAction::SetTrue)
                        .help("Fail on the first ordering violation"),
                )
                .arg(
                    Arg::new("raw-prefix")
                        .long("raw-prefix")
                        .action(ArgAction::SetTrue)
                        .help("Match plain string prefixes ('/a-extra' nests under '/a')"),
                )
                .arg(separator.clone())
                .arg(
                    Arg::new("batch-size")
                        .long("batch-size")
                        .value_parser(value_parser!(usize))
                        .help("Rows fetched per page"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .value_parser(value_parser!(PathBuf))
                        .help("TOML config file"),
                ),
        )
        .subcommand(
            Command::new("validate")
                .about("Check that a listing is in pre-order with ascending siblings")
                .arg(input)
                .arg(separator),
        )
        .subcommand(
            Command::new("check-config")
                .about("Parse a config file and print the effective settings")
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("TOML config file"),
                ),
        )
}

impl BuildOptions {
    /// Read `build` options from parsed arguments
    #[must_use]
    pub fn from_matches(args: &ArgMatches) -> Self {
        Self {
            input: args.get_one::<PathBuf>("input").cloned().unwrap_or_default(),
            root: args
                .get_one::<String>("root")
                .cloned()
                .unwrap_or_else(|| "/".to_string()),
            strict: args.get_flag("strict"),
            raw_prefix: args.get_flag("raw-prefix"),
            separator: args.get_one::<char>("separator").copied(),
            batch_size: args.get_one::<usize>("batch-size").copied(),
            json: args.get_flag("json"),
            config: args.get_one::<PathBuf>("config").cloned(),
        }
    }
}

/// Install the global subscriber; `RUST_LOG` filters, default `warn`
pub fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);
    let result = if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };
    if let Err(e) = result {
        eprintln!("logging disabled: {e}");
    }
}

/// Dispatch parsed arguments to a subcommand
///
/// # Errors
/// Returns error for IO, parse or configuration failures.
pub async fn run(matches: &ArgMatches) -> anyhow::Result<Outcome> {
    match matches.subcommand() {
        Some(("build", args)) => commands::build(&BuildOptions::from_matches(args)).await,
        Some(("validate", args)) => {
            let input = args
                .get_one::<PathBuf>("input")
                .ok_or_else(|| anyhow::anyhow!("--input is required"))?;
            commands::validate(input, args.get_one::<char>("separator").copied()).await
        }
        Some(("check-config", args)) => {
            let config = args
                .get_one::<PathBuf>("config")
                .ok_or_else(|| anyhow::anyhow!("--config is required"))?;
            commands::check_config(config)
        }
        Some((other, _)) => anyhow::bail!("unknown command '{other}'"),
        None => anyhow::bail!("no command given"),
    }
}
