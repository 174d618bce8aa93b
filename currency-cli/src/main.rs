//! Currency CLI
//!
//! Command-line interface for the Currency API.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use currency_client::CurrencyClient;
use currency_types::{CurrencyCode, PageRequest};

#[derive(Parser)]
#[command(name = "fx")]
#[command(author, version, about = "Currency exchange API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Currency API
    #[arg(
        long,
        env = "CURRENCY_API_URL",
        default_value = "http://localhost:3000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Latest rates for a base currency
    Latest {
        /// Base currency code (e.g. EUR)
        base: String,
    },
    /// Convert an amount between two currencies
    Convert {
        /// Source currency code
        from: String,
        /// Target currency code
        to: String,
        /// Amount of the source currency
        amount: Decimal,
    },
    /// Historical rates over a date range
    Historical {
        /// Base currency code
        base: String,
        /// First day of the range (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,
        /// Last day of the range (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,
        #[arg(long, default_value_t = 1)]
        page: i64,
        #[arg(long, default_value_t = 10)]
        page_size: i64,
    },
    /// Check API health
    Health,
}

fn parse_currency(s: &str) -> CurrencyCode {
    CurrencyCode::from(s.to_uppercase())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let client = CurrencyClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Latest { base } => {
            let rates = client.latest(&parse_currency(&base)).await?;
            println!("{}", serde_json::to_string_pretty(&rates)?);
        }

        Commands::Convert { from, to, amount } => {
            let result = client
                .convert(&parse_currency(&from), &parse_currency(&to), amount)
                .await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }

        Commands::Historical {
            base,
            start,
            end,
            page,
            page_size,
        } => {
            let rates = client
                .historical(
                    &parse_currency(&base),
                    start,
                    end,
                    PageRequest::new(page, page_size),
                )
                .await?;
            println!("{}", serde_json::to_string_pretty(&rates)?);
        }
    }

    Ok(())
}
