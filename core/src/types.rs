//! Domain types for cinema ticket orders.
//!
//! Value objects only: ticket categories with their fixed prices, per-category
//! requests, account identifiers and money. Nothing here validates business
//! limits; that is the job of [`crate::service::TicketService`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;

// ============================================================================
// Identifiers
// ============================================================================

/// Identifier of the account a purchase is charged to.
///
/// Only constructed by the service once the raw account number has passed
/// validation, so an `AccountId` is always `>= 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountId(i64);

impl AccountId {
    /// Smallest valid account number.
    pub const MIN: i64 = 1;

    /// Validates a raw account number.
    ///
    /// Returns `None` when the number is missing or below [`AccountId::MIN`].
    #[must_use]
    pub const fn parse(raw: Option<i64>) -> Option<Self> {
        match raw {
            Some(value) if value >= Self::MIN => Some(Self(value)),
            _ => None,
        }
    }

    /// Returns the raw account number
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Money Value Object (whole currency units)
// ============================================================================

/// Represents money in whole currency units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(u64);

impl Money {
    /// Zero amount
    pub const ZERO: Self = Self(0);

    /// Creates a `Money` value from whole units
    #[must_use]
    pub const fn from_units(units: u64) -> Self {
        Self(units)
    }

    /// Returns the amount in whole units
    #[must_use]
    pub const fn units(&self) -> u64 {
        self.0
    }

    /// Checks if the amount is zero
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Adds two money amounts with overflow checking
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(result) => Some(Self(result)),
            None => None,
        }
    }

    /// Multiplies money by a quantity with overflow checking
    #[must_use]
    pub const fn checked_multiply(self, quantity: u32) -> Option<Self> {
        match self.0.checked_mul(quantity as u64) {
            Some(result) => Some(Self(result)),
            None => None,
        }
    }

    /// Multiplies money by a quantity, saturating at `u64::MAX` units
    #[must_use]
    pub const fn saturating_multiply(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity as u64))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.fold(0u64, |total, money| total.saturating_add(money.0)))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "£{}", self.0)
    }
}

// ============================================================================
// Ticket Categories
// ============================================================================

/// The kinds of ticket that can be bought.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TicketCategory {
    /// Adult ticket, occupies a seat
    Adult,
    /// Child ticket, occupies a seat
    Child,
    /// Infant ticket, sits on an adult's lap
    Infant,
}

impl TicketCategory {
    /// Every category, in the order orders are assembled.
    pub const ALL: [Self; 3] = [Self::Adult, Self::Child, Self::Infant];

    /// Price of a single ticket of this category
    #[must_use]
    pub const fn unit_price(self) -> Money {
        match self {
            Self::Adult => Money::from_units(20),
            Self::Child => Money::from_units(10),
            Self::Infant => Money::ZERO,
        }
    }

    /// Whether a ticket of this category needs a reserved seat
    #[must_use]
    pub const fn occupies_seat(self) -> bool {
        !matches!(self, Self::Infant)
    }
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Adult => write!(f, "ADULT"),
            Self::Child => write!(f, "CHILD"),
            Self::Infant => write!(f, "INFANT"),
        }
    }
}

// ============================================================================
// Ticket Type Request
// ============================================================================

/// A request for `count` tickets of one category.
///
/// Immutable once built. A count of zero is allowed and simply contributes
/// nothing to the order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TicketTypeRequest {
    category: TicketCategory,
    count: u32,
}

impl TicketTypeRequest {
    /// Creates a new request
    #[must_use]
    pub const fn new(category: TicketCategory, count: u32) -> Self {
        Self { category, count }
    }

    /// Requested category
    #[must_use]
    pub const fn category(&self) -> TicketCategory {
        self.category
    }

    /// Number of tickets requested
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Total price of this request: `count * unit_price(category)`.
    ///
    /// Unit prices are small enough that this cannot overflow for any `u32`
    /// count.
    #[must_use]
    pub const fn cost(&self) -> Money {
        self.category.unit_price().saturating_multiply(self.count)
    }

    /// Seats this request needs reserved (zero for infants)
    #[must_use]
    pub const fn seats(&self) -> u32 {
        if self.category.occupies_seat() {
            self.count
        } else {
            0
        }
    }
}

impl fmt::Display for TicketTypeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.category, self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_unit_prices() {
        assert_eq!(TicketCategory::Adult.unit_price(), Money::from_units(20));
        assert_eq!(TicketCategory::Child.unit_price(), Money::from_units(10));
        assert!(TicketCategory::Infant.unit_price().is_zero());
    }

    #[test]
    fn test_cost_per_category() {
        assert_eq!(
            TicketTypeRequest::new(TicketCategory::Adult, 2).cost(),
            Money::from_units(40)
        );
        assert_eq!(
            TicketTypeRequest::new(TicketCategory::Child, 2).cost(),
            Money::from_units(20)
        );
        assert_eq!(
            TicketTypeRequest::new(TicketCategory::Infant, 2).cost(),
            Money::ZERO
        );
    }

    #[test]
    fn test_zero_count_request() {
        let request = TicketTypeRequest::new(TicketCategory::Adult, 0);
        assert!(request.cost().is_zero());
        assert_eq!(request.seats(), 0);
    }

    #[test]
    fn test_infants_need_no_seat() {
        assert_eq!(TicketTypeRequest::new(TicketCategory::Infant, 4).seats(), 0);
        assert_eq!(TicketTypeRequest::new(TicketCategory::Child, 4).seats(), 4);
    }

    #[test]
    fn test_requests_compare_by_value() {
        let a = TicketTypeRequest::new(TicketCategory::Child, 3);
        let b = TicketTypeRequest::new(TicketCategory::Child, 3);
        assert_eq!(a, b);
        assert_ne!(a, TicketTypeRequest::new(TicketCategory::Child, 4));
        assert_ne!(a, TicketTypeRequest::new(TicketCategory::Adult, 3));
    }

    #[test]
    fn test_account_id_parse() {
        assert_eq!(AccountId::parse(Some(1)).map(|id| id.value()), Some(1));
        assert!(AccountId::parse(Some(0)).is_none());
        assert!(AccountId::parse(Some(-1)).is_none());
        assert!(AccountId::parse(None).is_none());
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_units(40).to_string(), "£40");
    }

    #[test]
    fn test_money_sum() {
        let total: Money = [Money::from_units(20), Money::from_units(10), Money::ZERO]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_units(30));
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_request_serializes_category_by_name() {
        let request = TicketTypeRequest::new(TicketCategory::Infant, 1);
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"category":"Infant","count":1}"#);
    }

    fn arb_category() -> impl Strategy<Value = TicketCategory> {
        prop::sample::select(TicketCategory::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn cost_is_count_times_unit_price(category in arb_category(), count in 0u32..10_000) {
            let request = TicketTypeRequest::new(category, count);
            prop_assert_eq!(
                request.cost().units(),
                u64::from(count) * category.unit_price().units()
            );
        }

        #[test]
        fn infant_cost_is_always_zero(count in any::<u32>()) {
            prop_assert!(TicketTypeRequest::new(TicketCategory::Infant, count).cost().is_zero());
        }
    }
}
