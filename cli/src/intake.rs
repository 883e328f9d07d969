//! Turning raw per-category counts into ticket requests.

use cinema_tickets_core::{TicketCategory, TicketTypeRequest};
use serde::{Deserialize, Serialize};

/// Ticket counts as entered by the customer, one per category.
///
/// Counts are kept raw: they may be missing, zero or negative. Only
/// [`TicketTypeRequestFactory`] decides what they mean.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketOrderRequest {
    /// Adult tickets requested
    pub adult: Option<i64>,
    /// Child tickets requested
    pub child: Option<i64>,
    /// Infant tickets requested
    pub infant: Option<i64>,
}

impl TicketOrderRequest {
    /// Creates an order from three entered counts
    #[must_use]
    pub const fn new(adult: Option<i64>, child: Option<i64>, infant: Option<i64>) -> Self {
        Self {
            adult,
            child,
            infant,
        }
    }

    /// Raw count entered for `category`
    #[must_use]
    pub const fn requested(&self, category: TicketCategory) -> Option<i64> {
        match category {
            TicketCategory::Adult => self.adult,
            TicketCategory::Child => self.child,
            TicketCategory::Infant => self.infant,
        }
    }
}

/// Builds the request list handed to the ticket service.
#[derive(Clone, Copy, Debug, Default)]
pub struct TicketTypeRequestFactory;

impl TicketTypeRequestFactory {
    /// Creates a new factory
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// One request per category that has a positive count, in Adult, Child,
    /// Infant order.
    ///
    /// Missing, zero and negative counts are treated as "not requested".
    /// Counts too large for `u32` saturate, which the service then rejects as
    /// over the ticket ceiling.
    #[must_use]
    pub fn create(&self, order: &TicketOrderRequest) -> Vec<TicketTypeRequest> {
        TicketCategory::ALL
            .into_iter()
            .filter_map(|category| {
                let count = order.requested(category).filter(|count| *count > 0)?;
                let count = u32::try_from(count).unwrap_or(u32::MAX);
                Some(TicketTypeRequest::new(category, count))
            })
            .collect()
    }
}
