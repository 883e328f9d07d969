//! Ticket purchase validation and execution.
//!
//! [`TicketService`] is the only place that decides whether an order is
//! allowed. Checks run in a fixed order, and the first failing check decides
//! the error:
//!
//! ```text
//! 1. total tickets == 0          → NoTicketsOrdered
//! 2. no adult with count > 0     → NoAdultTicketsRequested
//! 3. account missing or < 1      → InvalidAccountNumber
//! 4. total tickets > max_tickets → MaximumTicketsExceeded
//! 5. reserve seats, then take payment
//! ```
//!
//! The adult check runs before the account check, so an order with no adults
//! and a bad account reports the missing adult.

use crate::config::TicketServiceConfig;
use crate::environment::PurchaseEnvironment;
use crate::error::{PurchaseError, Result};
use crate::types::{AccountId, Money, TicketCategory, TicketTypeRequest};
use serde::{Deserialize, Serialize};

/// What an accepted order came to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseSummary {
    /// Account that was charged
    pub account_id: AccountId,
    /// Tickets bought, infants included
    pub total_tickets: u32,
    /// Seats reserved, infants excluded
    pub total_seats: u32,
    /// Amount charged
    pub total_cost: Money,
}

/// Anything that can take a ticket order.
///
/// Implemented by [`TicketService`]; intake adaptors depend on this trait so
/// they can be tested against a stub.
pub trait TicketPurchaser {
    /// Validate an order and, if it is allowed, reserve seats and take payment.
    ///
    /// # Errors
    ///
    /// Returns a [`PurchaseError`] describing the first rule the order breaks.
    /// No collaborator is called when an error is returned.
    fn purchase_tickets(
        &self,
        account_id: Option<i64>,
        requests: &[TicketTypeRequest],
    ) -> Result<PurchaseSummary>;
}

/// Validates, prices and executes ticket orders.
///
/// Holds no per-order state, so one instance can serve any number of
/// unrelated purchases.
#[derive(Debug, Clone)]
pub struct TicketService {
    config: TicketServiceConfig,
    env: PurchaseEnvironment,
}

impl TicketService {
    /// Creates a service with the default ticket ceiling
    #[must_use]
    pub fn new(env: PurchaseEnvironment) -> Self {
        Self::with_config(TicketServiceConfig::default(), env)
    }

    /// Creates a service with an explicit configuration
    #[must_use]
    pub const fn with_config(config: TicketServiceConfig, env: PurchaseEnvironment) -> Self {
        Self { config, env }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &TicketServiceConfig {
        &self.config
    }

    fn validate(&self, account_id: Option<i64>, requests: &[TicketTypeRequest]) -> Result<AccountId> {
        let requested = total_tickets(requests);

        if requested == 0 {
            return Err(PurchaseError::NoTicketsOrdered);
        }

        if !contains_adult(requests) {
            return Err(PurchaseError::NoAdultTicketsRequested);
        }

        let Some(account_id) = AccountId::parse(account_id) else {
            return Err(PurchaseError::InvalidAccountNumber);
        };

        if requested > u64::from(self.config.max_tickets) {
            return Err(PurchaseError::MaximumTicketsExceeded {
                maximum: self.config.max_tickets,
                requested,
            });
        }

        Ok(account_id)
    }
}

impl TicketPurchaser for TicketService {
    fn purchase_tickets(
        &self,
        account_id: Option<i64>,
        requests: &[TicketTypeRequest],
    ) -> Result<PurchaseSummary> {
        let account_id = match self.validate(account_id, requests) {
            Ok(account_id) => account_id,
            Err(error) => {
                tracing::warn!(
                    account_id = ?account_id,
                    requests = requests.len(),
                    reason = %error,
                    "Ticket purchase rejected"
                );
                return Err(error);
            }
        };

        // Validation bounds every total by max_tickets, so these fit in u32.
        let total_tickets = u32::try_from(total_tickets(requests)).unwrap_or(u32::MAX);
        let total_seats = u32::try_from(total_seats(requests)).unwrap_or(u32::MAX);
        let total_cost = total_cost(requests);

        tracing::info!(
            account_id = %account_id,
            total_tickets,
            total_seats,
            total_cost = total_cost.units(),
            "Purchasing tickets"
        );

        self.env.seat_reservation.reserve_seat(account_id, total_seats);
        self.env.payment.make_payment(account_id, total_cost);

        Ok(PurchaseSummary {
            account_id,
            total_tickets,
            total_seats,
            total_cost,
        })
    }
}

/// Sum of every request's count.
#[must_use]
pub fn total_tickets(requests: &[TicketTypeRequest]) -> u64 {
    requests.iter().map(|request| u64::from(request.count())).sum()
}

/// Sum of counts for categories that occupy a seat.
#[must_use]
pub fn total_seats(requests: &[TicketTypeRequest]) -> u64 {
    requests.iter().map(|request| u64::from(request.seats())).sum()
}

/// Sum of every request's cost.
#[must_use]
pub fn total_cost(requests: &[TicketTypeRequest]) -> Money {
    requests.iter().map(TicketTypeRequest::cost).sum()
}

fn contains_adult(requests: &[TicketTypeRequest]) -> bool {
    requests
        .iter()
        .any(|request| request.category() == TicketCategory::Adult && request.count() > 0)
}
