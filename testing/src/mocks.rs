//! Recording collaborators and stubs for purchase tests
//!
//! - [`CallLog`]: ordered, shared record of collaborator calls
//! - [`RecordingSeatReservationService`] / [`RecordingPaymentService`]: write to a [`CallLog`]
//! - [`StubPurchaser`]: returns a canned outcome, for testing intake adaptors

#![allow(clippy::unwrap_used)] // Test infrastructure uses unwrap for simplicity
#![allow(clippy::missing_panics_doc)] // Panics only on a poisoned lock

use cinema_tickets_core::{
    AccountId, Money, PurchaseEnvironment, PurchaseError, PurchaseSummary,
    SeatReservationService, TicketPaymentService, TicketPurchaser, TicketTypeRequest,
};
use std::sync::{Arc, Mutex};

/// One call made to a collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollaboratorCall {
    /// `reserve_seat(account_id, seats)`
    ReserveSeat {
        /// Account the seats were reserved for
        account_id: AccountId,
        /// Seats reserved
        seats: u32,
    },
    /// `make_payment(account_id, amount)`
    MakePayment {
        /// Account charged
        account_id: AccountId,
        /// Amount charged
        amount: Money,
    },
}

/// Shared, ordered log of collaborator calls.
///
/// Both recording collaborators append to the same log, so tests can assert
/// on the relative order of reservation and payment.
#[derive(Clone, Debug, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<CollaboratorCall>>>,
}

impl CallLog {
    /// Create an empty log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, call: CollaboratorCall) {
        self.calls.lock().unwrap().push(call);
    }

    /// Every call so far, oldest first
    #[must_use]
    pub fn calls(&self) -> Vec<CollaboratorCall> {
        self.calls.lock().unwrap().clone()
    }

    /// `true` if no collaborator has been called
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calls.lock().unwrap().is_empty()
    }

    /// Number of calls recorded
    #[must_use]
    pub fn len(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Only the seat reservations, as `(account, seats)`
    #[must_use]
    pub fn reservations(&self) -> Vec<(AccountId, u32)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                CollaboratorCall::ReserveSeat { account_id, seats } => Some((account_id, seats)),
                CollaboratorCall::MakePayment { .. } => None,
            })
            .collect()
    }

    /// Only the payments, as `(account, amount)`
    #[must_use]
    pub fn payments(&self) -> Vec<(AccountId, Money)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                CollaboratorCall::MakePayment { account_id, amount } => Some((account_id, amount)),
                CollaboratorCall::ReserveSeat { .. } => None,
            })
            .collect()
    }
}

/// Seat reservation collaborator that records every call.
#[derive(Clone, Debug)]
pub struct RecordingSeatReservationService {
    log: CallLog,
}

impl RecordingSeatReservationService {
    /// Record into `log`
    #[must_use]
    pub const fn new(log: CallLog) -> Self {
        Self { log }
    }
}

impl SeatReservationService for RecordingSeatReservationService {
    fn reserve_seat(&self, account_id: AccountId, seats: u32) {
        self.log.record(CollaboratorCall::ReserveSeat { account_id, seats });
    }
}

/// Payment collaborator that records every call.
#[derive(Clone, Debug)]
pub struct RecordingPaymentService {
    log: CallLog,
}

impl RecordingPaymentService {
    /// Record into `log`
    #[must_use]
    pub const fn new(log: CallLog) -> Self {
        Self { log }
    }
}

impl TicketPaymentService for RecordingPaymentService {
    fn make_payment(&self, account_id: AccountId, amount: Money) {
        self.log.record(CollaboratorCall::MakePayment { account_id, amount });
    }
}

/// Build an environment whose collaborators both write to the returned log.
///
/// # Example
///
/// ```
/// use cinema_tickets_core::{TicketCategory, TicketPurchaser, TicketService, TicketTypeRequest};
/// use cinema_tickets_testing::recording_environment;
///
/// let (env, log) = recording_environment();
/// let service = TicketService::new(env);
///
/// let _ = service.purchase_tickets(Some(1), &[TicketTypeRequest::new(TicketCategory::Adult, 1)]);
/// assert_eq!(log.len(), 2);
/// ```
#[must_use]
pub fn recording_environment() -> (PurchaseEnvironment, CallLog) {
    let log = CallLog::new();
    let env = PurchaseEnvironment::new(
        Arc::new(RecordingSeatReservationService::new(log.clone())),
        Arc::new(RecordingPaymentService::new(log.clone())),
    );
    (env, log)
}

/// A purchase request as seen by [`StubPurchaser`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseCall {
    /// Raw account number passed in
    pub account_id: Option<i64>,
    /// Requests passed in, in order
    pub requests: Vec<TicketTypeRequest>,
}

/// Purchaser that returns a fixed outcome and remembers what it was asked.
#[derive(Clone, Debug)]
pub struct StubPurchaser {
    outcome: Result<PurchaseSummary, PurchaseError>,
    calls: Arc<Mutex<Vec<PurchaseCall>>>,
}

impl StubPurchaser {
    /// Always accept with `summary`
    #[must_use]
    pub fn accepting(summary: PurchaseSummary) -> Self {
        Self::returning(Ok(summary))
    }

    /// Always reject with `error`
    #[must_use]
    pub fn rejecting(error: PurchaseError) -> Self {
        Self::returning(Err(error))
    }

    fn returning(outcome: Result<PurchaseSummary, PurchaseError>) -> Self {
        Self {
            outcome,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every purchase request received, oldest first
    #[must_use]
    pub fn calls(&self) -> Vec<PurchaseCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl TicketPurchaser for StubPurchaser {
    fn purchase_tickets(
        &self,
        account_id: Option<i64>,
        requests: &[TicketTypeRequest],
    ) -> Result<PurchaseSummary, PurchaseError> {
        self.calls.lock().unwrap().push(PurchaseCall {
            account_id,
            requests: requests.to_vec(),
        });
        self.outcome
    }
}
