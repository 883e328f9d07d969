//! Ticket service configuration.

use serde::{Deserialize, Serialize};

/// Largest number of tickets a single order may contain by default.
pub const MAX_TICKETS: u32 = 20;

/// Tunables for [`crate::service::TicketService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketServiceConfig {
    /// Maximum tickets per order
    pub max_tickets: u32,
}

impl TicketServiceConfig {
    /// Creates a config with a custom ticket ceiling
    #[must_use]
    pub const fn with_max_tickets(max_tickets: u32) -> Self {
        Self { max_tickets }
    }
}

impl Default for TicketServiceConfig {
    fn default() -> Self {
        Self {
            max_tickets: MAX_TICKETS,
        }
    }
}
