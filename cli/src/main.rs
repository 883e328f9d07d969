//! Cinema tickets console.
//!
//! # Usage
//!
//! ```bash
//! cinema-tickets <ACCOUNT_NUMBER> <ADULT> <CHILD> <INFANT>
//!
//! # Two adults and a child on account 1
//! cinema-tickets 1 2 1 0
//! ```

use cinema_tickets::{build_ticket_service, Config, ConsoleAdaptor, TicketOrderRequest};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Buy cinema tickets for an account
#[derive(Parser, Debug)]
#[command(name = "cinema-tickets")]
#[command(version, about = "Buy cinema tickets for an account", long_about = None)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Account to charge
    account_number: i64,

    /// Number of adult tickets
    adult: i64,

    /// Number of child tickets
    child: i64,

    /// Number of infant tickets
    infant: i64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env();
    config.validate()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!(max_tickets = config.max_tickets, "Configuration loaded");

    let service = build_ticket_service(&config);
    let order = TicketOrderRequest::new(Some(cli.adult), Some(cli.child), Some(cli.infant));

    let mut adaptor = ConsoleAdaptor::new(service, std::io::stdout().lock());
    let outcome = adaptor.process_purchase(cli.account_number, &order)?;

    info!(purchased = outcome.is_purchased(), "Order processed");
    Ok(())
}
