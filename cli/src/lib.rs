//! # Cinema Tickets
//!
//! Console front end for the cinema ticket service.
//!
//! ```text
//! argv ──► TicketOrderRequest ──► TicketTypeRequestFactory ──► TicketService
//!                                                                │
//!                                      ┌─────────────────────────┤
//!                                      ▼                         ▼
//!                              reserve seats ──────────────► take payment
//!
//! outcome ──► ConsoleAdaptor ──► one line on stdout
//! ```
//!
//! Logging goes to stderr so stdout carries only the customer-facing line.

#![forbid(unsafe_code)]

pub mod adaptor;
pub mod config;
pub mod intake;
pub mod thirdparty;

pub use adaptor::{ConsoleAdaptor, PurchaseOutcome, render_outcome};
pub use config::{Config, ConfigError};
pub use intake::{TicketOrderRequest, TicketTypeRequestFactory};

use cinema_tickets_core::{PurchaseEnvironment, TicketService};
use thirdparty::{LoggingSeatReservationService, LoggingTicketPaymentService};

/// Wire the ticket service to the in-process collaborators.
#[must_use]
pub fn build_ticket_service(config: &Config) -> TicketService {
    let env = PurchaseEnvironment::new(
        LoggingSeatReservationService::shared(),
        LoggingTicketPaymentService::shared(),
    );
    TicketService::with_config(config.ticket_service(), env)
}
