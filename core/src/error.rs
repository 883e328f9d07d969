//! Purchase rejection reasons.

use thiserror::Error;

/// Why an order was rejected.
///
/// Every variant rejects the whole order: when the service returns one of
/// these, neither collaborator has been called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PurchaseError {
    /// The order contained no tickets at all
    #[error("no tickets were ordered")]
    NoTicketsOrdered,

    /// The order contained no adult ticket
    #[error("no adult tickets were requested")]
    NoAdultTicketsRequested,

    /// The account number was missing or below 1
    #[error("invalid account number")]
    InvalidAccountNumber,

    /// More tickets were requested than a single order allows
    #[error("maximum number of tickets exceeded: {requested} requested, {maximum} allowed")]
    MaximumTicketsExceeded {
        /// Configured ceiling
        maximum: u32,
        /// Total tickets actually requested
        requested: u64,
    },
}

/// Result type for purchase operations
pub type Result<T> = std::result::Result<T, PurchaseError>;
