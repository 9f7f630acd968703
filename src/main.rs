//! # Run one decision cycle against staged data
//! spread-pilot run --data data/live --state portfolio_state.json --log tradelog.jsonl
//!
//! # Override strategy parameters
//! spread-pilot run --data data/live --config config/strategy.toml
//!
//! # Show the persisted portfolio without running
//! spread-pilot status --state portfolio_state.json

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use spread_pilot::data::LocalDataProvider;
use spread_pilot::engine::{RunAction, StrategyConfig, TradeEngine};
use spread_pilot::portfolio::{Portfolio, PortfolioStore, TradeLog};

#[derive(Parser)]
#[command(name = "spread-pilot")]
#[command(about = "Live single-position bull put spread decision engine")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute one decision cycle and persist the result
    Run {
        /// Directory with staged market data (series.json, expiries.json, chains)
        #[arg(short, long)]
        data: PathBuf,

        /// Portfolio ledger file
        #[arg(short, long, default_value = "portfolio_state.json")]
        state: PathBuf,

        /// Append-only trade log file
        #[arg(short, long, default_value = "tradelog.jsonl")]
        log: PathBuf,

        /// Optional TOML file overriding strategy parameters
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the persisted portfolio state
    Status {
        /// Portfolio ledger file
        #[arg(short, long, default_value = "portfolio_state.json")]
        state: PathBuf,

        /// Optional TOML file overriding strategy parameters
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<StrategyConfig> {
    match path {
        Some(p) => {
            let content = fs::read_to_string(p)
                .with_context(|| format!("reading config file {}", p.display()))?;
            toml::from_str(&content).with_context(|| format!("parsing config file {}", p.display()))
        }
        None => Ok(StrategyConfig::default()),
    }
}

fn print_portfolio(portfolio: &Portfolio) {
    println!("\n--- Current Portfolio State ---");
    println!("Cash: {:.2}", portfolio.cash);
    match portfolio.holdings.as_open() {
        Some(position) => {
            println!("Live Position:");
            println!("  - Strategy: Bull Put Spread");
            println!(
                "  - Entry Date: {}",
                position.entry_date.format("%Y-%m-%d %H:%M")
            );
            println!("  - Expiry: {}", position.expiry.format("%Y-%m-%d"));
            println!("  - Sell Strike: {:.2}", position.sell_strike);
            println!("  - Buy Strike: {:.2}", position.buy_strike);
            println!("  - Credit Received: {:.2}", position.credit_received);
        }
        None => println!("Live Position: None (currently in cash)"),
    }
    println!("-------------------------------");
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("spread_pilot=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            data,
            state,
            log,
            config,
        } => {
            let config = load_config(config.as_ref())?;
            let store = PortfolioStore::new(&state);
            let trade_log = TradeLog::new(&log);
            let provider = LocalDataProvider::new(&data);

            let mut portfolio = store.load(config.starting_capital);
            let engine = TradeEngine::new(config);

            let report = engine
                .run(&provider, &mut portfolio, &trade_log)
                .context("run aborted, persisted state left untouched")?;

            store.save(&portfolio).context("persisting portfolio")?;

            println!("Run complete as of {}", report.as_of.format("%Y-%m-%d %H:%M"));
            match report.action {
                RunAction::NoChange => println!("Action: none"),
                RunAction::Entered => println!("Action: entered bull put spread"),
                RunAction::Exited { pnl } => println!("Action: closed at expiry, P&L {:.2}", pnl),
                RunAction::ExitedAndEntered { pnl } => println!(
                    "Action: closed at expiry (P&L {:.2}) and entered a new spread",
                    pnl
                ),
            }
            print_portfolio(&portfolio);
        }

        Commands::Status { state, config } => {
            let config = load_config(config.as_ref())?;
            let portfolio = PortfolioStore::new(&state).load(config.starting_capital);
            print_portfolio(&portfolio);
        }
    }

    Ok(())
}
