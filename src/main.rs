use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, CommandFactory, Parser, Subcommand};
use fixerio::Currency;
use fixerio::cli::rates::RequestOverrides;
use fixerio::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct RequestArgs {
    /// Base currency, e.g. USD
    #[arg(short, long)]
    base: Option<Currency>,

    /// Comma separated list of currencies to return
    #[arg(short, long, value_delimiter = ',', num_args = 0..)]
    symbols: Option<Vec<Currency>>,

    /// Historical date (YYYY-MM-DD) instead of the latest rates
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Use plain http instead of https
    #[arg(long)]
    insecure: bool,
}

impl From<RequestArgs> for RequestOverrides {
    fn from(args: RequestArgs) -> RequestOverrides {
        RequestOverrides {
            base: args.base,
            symbols: args.symbols,
            date: args.date,
            insecure: args.insecure,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Display exchange rates
    Rates(RequestArgs),
    /// Print the request URL without fetching it
    Url(RequestArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => fixerio::cli::setup::setup(),
        Some(Commands::Rates(args)) => {
            fixerio::run_command(
                fixerio::AppCommand::Rates(args.into()),
                cli.config_path.as_deref(),
            )
            .await
        }
        Some(Commands::Url(args)) => {
            fixerio::run_command(
                fixerio::AppCommand::Url(args.into()),
                cli.config_path.as_deref(),
            )
            .await
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
