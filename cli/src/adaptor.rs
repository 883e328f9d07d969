//! Console adaptor: runs an order through a purchaser and prints the outcome.

use crate::intake::{TicketOrderRequest, TicketTypeRequestFactory};
use cinema_tickets_core::{PurchaseError, PurchaseSummary, TicketPurchaser};
use std::io::{self, Write};

/// Result of one order, as reported back to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOutcome {
    /// Seats were reserved and payment taken
    Purchased(PurchaseSummary),
    /// The order was refused; nothing happened
    Rejected(PurchaseError),
}

impl PurchaseOutcome {
    /// `true` for [`PurchaseOutcome::Purchased`]
    #[must_use]
    pub const fn is_purchased(&self) -> bool {
        matches!(self, Self::Purchased(_))
    }
}

/// Format the one-line message shown to the customer.
#[must_use]
pub fn render_outcome(account_number: i64, outcome: &PurchaseOutcome) -> String {
    match outcome {
        PurchaseOutcome::Purchased(summary) => format!(
            "Purchasing {} tickets with {} seats at a cost of {} for accountId={}",
            summary.total_tickets, summary.total_seats, summary.total_cost, summary.account_id
        ),
        PurchaseOutcome::Rejected(PurchaseError::InvalidAccountNumber) => {
            format!("Tickets ordering failed - invalid accountNumber={account_number}")
        }
        PurchaseOutcome::Rejected(PurchaseError::MaximumTicketsExceeded { maximum, requested }) => format!(
            "Tickets ordering failed - too many tickets requested maximumAllowed={maximum} numberOrdered={requested}"
        ),
        PurchaseOutcome::Rejected(PurchaseError::NoTicketsOrdered) => {
            "Tickets ordering failed - no tickets were ordered".to_string()
        }
        PurchaseOutcome::Rejected(PurchaseError::NoAdultTicketsRequested) => {
            "Tickets ordering failed - no adult tickets were ordered".to_string()
        }
    }
}

/// Feeds console orders to a [`TicketPurchaser`] and writes one line per order.
#[derive(Debug)]
pub struct ConsoleAdaptor<P, W> {
    purchaser: P,
    factory: TicketTypeRequestFactory,
    out: W,
}

impl<P: TicketPurchaser, W: Write> ConsoleAdaptor<P, W> {
    /// Creates an adaptor writing to `out`
    pub const fn new(purchaser: P, out: W) -> Self {
        Self {
            purchaser,
            factory: TicketTypeRequestFactory::new(),
            out,
        }
    }

    /// Process one order and print its outcome.
    ///
    /// A rejected order is a normal outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing the outcome fails.
    pub fn process_purchase(
        &mut self,
        account_number: i64,
        order: &TicketOrderRequest,
    ) -> io::Result<PurchaseOutcome> {
        let requests = self.factory.create(order);
        tracing::debug!(account_number, requests = ?requests, "Submitting ticket order");

        let outcome = match self.purchaser.purchase_tickets(Some(account_number), &requests) {
            Ok(summary) => PurchaseOutcome::Purchased(summary),
            Err(error) => PurchaseOutcome::Rejected(error),
        };

        writeln!(self.out, "{}", render_outcome(account_number, &outcome))?;
        self.out.flush()?;
        Ok(outcome)
    }

    /// The purchaser orders are sent to
    pub const fn purchaser(&self) -> &P {
        &self.purchaser
    }

    /// Consume the adaptor and return its writer
    pub fn into_writer(self) -> W {
        self.out
    }
}
