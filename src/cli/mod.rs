use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

mod classify;
mod resolve;
mod rules;

#[derive(Parser)]
#[command(
    name = "provider-resolve",
    version,
    about = "Resolve the active LLM provider and its credentials"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Show project information
    #[arg(long)]
    about: bool,

    /// Enable debug logging on stderr (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Output format for resolution results.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum Format {
    /// Human-readable text output (default)
    #[default]
    Text,
    /// JSON object
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the active provider from a config file
    Resolve {
        /// Path to a JSON or YAML config file (missing file = empty config)
        #[arg(long, short)]
        config: Option<PathBuf>,
        /// Override the configured default model
        #[arg(long, short)]
        model: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Classify an explicit key / base / model triple
    Classify {
        /// API key to classify
        #[arg(long)]
        api_key: String,
        /// API base URL
        #[arg(long)]
        api_base: Option<String>,
        /// Default model name
        #[arg(long, default_value = provider_resolve::models::DEFAULT_MODEL)]
        model: String,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// List classification rules in evaluation order
    Rules,
}

/// Install the stderr log subscriber.
pub fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

pub fn run(cli: Cli) {
    if cli.about {
        print_about();
        return;
    }

    match cli.command {
        Some(Commands::Resolve {
            config,
            model,
            format,
        }) => resolve::run(config, model, format),
        Some(Commands::Classify {
            api_key,
            api_base,
            model,
            format,
        }) => classify::run(&api_key, api_base.as_deref(), &model, format),
        Some(Commands::Rules) => rules::run(),
        None => {
            eprintln!("Usage: provider-resolve <command> [args]");
            eprintln!("Run `provider-resolve --help` for details.");
            std::process::exit(1);
        }
    }
}

fn print_about() {
    println!(
        "provider-resolve: LLM provider resolution\n\
         ├─ version:    {}\n\
         └─ licence:    {} https://www.apache.org/licenses/LICENSE-2.0",
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_LICENSE"),
    );
}

/// Print a report in the requested format.
fn print_report(report: &provider_resolve::ResolutionReport, format: Format) {
    match format {
        Format::Text => print!("{}", provider_resolve::format_report(report)),
        Format::Json => match serde_json::to_string_pretty(report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("provider-resolve: {e}");
                std::process::exit(1);
            }
        },
    }
}
