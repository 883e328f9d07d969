//! # Cinema Tickets Core
//!
//! Validation, pricing and seat aggregation for cinema ticket orders.
//!
//! An order is an account number plus one [`TicketTypeRequest`] per ticket
//! category. [`TicketService`] checks the order against the business rules
//! and, only if every rule holds, reserves seats and takes payment through
//! the collaborators held in its [`PurchaseEnvironment`].
//!
//! ## Rules
//!
//! - At least one ticket must be ordered
//! - At least one adult ticket must be ordered
//! - The account number must be 1 or greater
//! - No more than [`MAX_TICKETS`] tickets per order (configurable)
//!
//! Infants pay nothing and do not get a seat.
//!
//! ## Example
//!
//! ```ignore
//! use cinema_tickets_core::*;
//!
//! let service = TicketService::new(PurchaseEnvironment::new(seats, payments));
//! let summary = service.purchase_tickets(
//!     Some(1),
//!     &[
//!         TicketTypeRequest::new(TicketCategory::Adult, 2),
//!         TicketTypeRequest::new(TicketCategory::Infant, 1),
//!     ],
//! )?;
//! assert_eq!(summary.total_seats, 2);
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod environment;
pub mod error;
pub mod service;
pub mod types;

pub use config::{MAX_TICKETS, TicketServiceConfig};
pub use environment::{PurchaseEnvironment, SeatReservationService, TicketPaymentService};
pub use error::PurchaseError;
pub use service::{PurchaseSummary, TicketPurchaser, TicketService};
pub use types::{AccountId, Money, TicketCategory, TicketTypeRequest};
