//! Collaborators injected into the ticket service.
//!
//! Seat booking and payment live outside this crate. The service only sees
//! them through these traits, so tests can swap in recording mocks and the
//! binary can plug in whatever implementation it ships with.

use crate::types::{AccountId, Money};
use std::sync::Arc;

/// Reserves physical seats for an account.
///
/// Calls are assumed to always succeed.
pub trait SeatReservationService: Send + Sync {
    /// Reserve `seats` seats for `account_id`
    fn reserve_seat(&self, account_id: AccountId, seats: u32);
}

/// Charges an account for tickets.
///
/// Calls are assumed to always succeed.
pub trait TicketPaymentService: Send + Sync {
    /// Charge `amount` to `account_id`
    fn make_payment(&self, account_id: AccountId, amount: Money);
}

/// Environment dependencies for the ticket service
#[derive(Clone)]
pub struct PurchaseEnvironment {
    /// Seat booking collaborator
    pub seat_reservation: Arc<dyn SeatReservationService>,
    /// Payment collaborator
    pub payment: Arc<dyn TicketPaymentService>,
}

impl PurchaseEnvironment {
    /// Creates a new `PurchaseEnvironment`
    #[must_use]
    pub fn new(
        seat_reservation: Arc<dyn SeatReservationService>,
        payment: Arc<dyn TicketPaymentService>,
    ) -> Self {
        Self {
            seat_reservation,
            payment,
        }
    }
}

impl std::fmt::Debug for PurchaseEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PurchaseEnvironment").finish_non_exhaustive()
    }
}
