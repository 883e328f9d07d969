//! In-process seat booking and payment collaborators.
//!
//! Stand-ins for the real seat booking and payment providers. Both always
//! succeed and only record the call as a structured log event. Replace them
//! with real integrations by implementing the core collaborator traits.

use cinema_tickets_core::{AccountId, Money, SeatReservationService, TicketPaymentService};
use std::sync::Arc;

/// Seat reservation collaborator that logs and always succeeds.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingSeatReservationService;

impl LoggingSeatReservationService {
    /// Creates a new service
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Creates an Arc-wrapped instance for sharing
    #[must_use]
    pub fn shared() -> Arc<dyn SeatReservationService> {
        Arc::new(Self::new())
    }
}

impl SeatReservationService for LoggingSeatReservationService {
    fn reserve_seat(&self, account_id: AccountId, seats: u32) {
        tracing::info!(account_id = %account_id, seats, "Seats reserved");
    }
}

/// Payment collaborator that logs and always succeeds.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingTicketPaymentService;

impl LoggingTicketPaymentService {
    /// Creates a new service
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Creates an Arc-wrapped instance for sharing
    #[must_use]
    pub fn shared() -> Arc<dyn TicketPaymentService> {
        Arc::new(Self::new())
    }
}

impl TicketPaymentService for LoggingTicketPaymentService {
    fn make_payment(&self, account_id: AccountId, amount: Money) {
        tracing::info!(account_id = %account_id, amount = amount.units(), "Payment taken");
    }
}
