//! Crypto CLI — prints cryptocurrency market data from the CoinMarketCap Pro API.
//!
//! Three subcommands are supported: a single-currency quote, the top-100 market
//! listing and a name → symbol lookup. Each one performs at most two GETs, resolves
//! the requested record and prints a table to stdout. Logs go to stderr.
//!
//! Usage example (CLI):
//! ```bash
//! export CMARKETCAP_API_KEY=...
//! crypto-cli get-currency-data --symbol ETH
//! crypto-cli get-market-data
//! crypto-cli get-currency-symbol --name bitcoin
//! ```
//!
//! Exit status is 0 on success and 1 on any failure, including flag validation.
#![warn(missing_docs)]
mod api_client;
mod args;
mod presenter;
mod table;

use crate::api_client::HttpFetcher;
use crate::args::{Cli, Commands};
use crate::presenter::{currency_table, market_table};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use crypto_common::{MarketError, MarketService, Result};
use log::{debug, info};
use std::io::{self, Write};
use std::process::ExitCode;

const CURRENCY_DATA_USAGE: &str =
    "Please provide either the --symbol or --name flag along with a corresponding currency symbol or name.";
const CURRENCY_SYMBOL_USAGE: &str = "Please provide the --name flag with the name of the currency you want the symbol for (e.g. --name 'bitcoin').";

fn main() -> ExitCode {
    init_logger();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return handle_parse_error(e),
    };

    let Some(command) = &cli.command else {
        print_help();
        return ExitCode::FAILURE;
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(&cli, command, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(e),
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Executes `command`, writing its output to `out`.
///
/// Flags are validated before any network client is built, so a validation
/// failure never touches the network.
fn run<W: Write>(cli: &Cli, command: &Commands, out: &mut W) -> Result<()> {
    match command {
        Commands::GetCurrencyData { name, symbol } => {
            let query = select_currency_query(name, symbol)?;
            let service = connect(cli)?;
            let record = service.currency_data(query)?;
            currency_table(&record).render(out)?;
        }
        Commands::GetMarketData => {
            let service = connect(cli)?;
            let table = market_table(&service.market_data()?);
            info!("Showing {} listings", table.len());
            table.render(out)?;
        }
        Commands::GetCurrencySymbol { name } => {
            let name = required_name(name)?;
            let service = connect(cli)?;
            for symbol in service.currency_symbols(name)? {
                writeln!(out, "{}", symbol)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn connect(cli: &Cli) -> Result<MarketService<HttpFetcher>> {
    let config = cli.client_config();
    debug!("Client config: {:?}", config);
    Ok(MarketService::new(HttpFetcher::new(&config)?))
}

/// Picks the currency query: `--name` wins over `--symbol`; both empty is an error.
fn select_currency_query<'a>(name: &'a str, symbol: &'a str) -> Result<&'a str> {
    [name.trim(), symbol.trim()]
        .into_iter()
        .find(|q| !q.is_empty())
        .ok_or_else(|| MarketError::InvalidArguments(CURRENCY_DATA_USAGE.to_string()))
}

fn required_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(MarketError::InvalidArguments(CURRENCY_SYMBOL_USAGE.to_string()));
    }
    Ok(name)
}

/// Maps an error to its user-facing message and the failure status.
fn report(err: MarketError) -> ExitCode {
    match &err {
        MarketError::InvalidArguments(usage) => println!("{}", usage),
        e if e.is_not_found() => eprintln!("{}", e),
        e => eprintln!("Error: {}", e),
    }
    ExitCode::FAILURE
}

fn handle_parse_error(err: clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            ExitCode::SUCCESS
        }
        ErrorKind::InvalidSubcommand => {
            println!("The subcommand you provided was invalid. Please provide a valid subcommand.");
            print_help();
            ExitCode::FAILURE
        }
        _ => {
            let _ = err.print();
            ExitCode::FAILURE
        }
    }
}

fn print_help() {
    println!("Expected 'get-currency-data', 'get-market-data', or 'get-currency-symbol' subcommands.");
    let _ = Cli::command().print_help();
    println!();
}
