//! # Cinema Tickets Testing
//!
//! Testing utilities and helpers for cinema ticket purchases.
//!
//! This crate provides:
//! - Recording collaborators that capture reservation and payment calls
//! - A stub purchaser for testing intake adaptors in isolation
//! - Property-based testing strategies for orders
//!
//! ## Example
//!
//! ```
//! use cinema_tickets_core::{TicketCategory, TicketPurchaser, TicketService, TicketTypeRequest};
//! use cinema_tickets_testing::recording_environment;
//!
//! let (env, log) = recording_environment();
//! let service = TicketService::new(env);
//!
//! let result = service.purchase_tickets(Some(1), &[]);
//! assert!(result.is_err());
//! assert!(log.is_empty());
//! ```

pub mod mocks;

/// Property-based testing strategies built on proptest.
pub mod properties {
    use cinema_tickets_core::{TicketCategory, TicketTypeRequest};
    use proptest::prelude::*;

    /// Any ticket category
    pub fn arb_category() -> impl Strategy<Value = TicketCategory> {
        prop::sample::select(TicketCategory::ALL.to_vec())
    }

    /// A request of any category with `0..=max_count` tickets
    pub fn arb_request(max_count: u32) -> impl Strategy<Value = TicketTypeRequest> {
        (arb_category(), 0..=max_count).prop_map(|(category, count)| TicketTypeRequest::new(category, count))
    }

    /// An order of up to `max_entries` requests, categories may repeat
    pub fn arb_order(max_entries: usize, max_count: u32) -> impl Strategy<Value = Vec<TicketTypeRequest>> {
        prop::collection::vec(arb_request(max_count), 0..=max_entries)
    }

    /// An order with one entry per category, in Adult, Child, Infant order
    pub fn arb_order_per_category(max_count: u32) -> impl Strategy<Value = Vec<TicketTypeRequest>> {
        (0..=max_count, 0..=max_count, 0..=max_count).prop_map(|(adult, child, infant)| {
            vec![
                TicketTypeRequest::new(TicketCategory::Adult, adult),
                TicketTypeRequest::new(TicketCategory::Child, child),
                TicketTypeRequest::new(TicketCategory::Infant, infant),
            ]
        })
    }

    /// A raw account number that fails validation (`< 1`) or is missing
    pub fn arb_invalid_account() -> impl Strategy<Value = Option<i64>> {
        prop_oneof![Just(None::<i64>), (i64::MIN..=0).prop_map(Some)]
    }

    /// A raw account number that passes validation
    pub fn arb_valid_account() -> impl Strategy<Value = Option<i64>> {
        (1..=i64::MAX).prop_map(Some)
    }
}

/// Install a `tracing` subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cinema_tickets_core=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

// Re-export commonly used items
pub use mocks::{
    CallLog, CollaboratorCall, PurchaseCall, RecordingPaymentService,
    RecordingSeatReservationService, StubPurchaser, recording_environment,
};
