//! Configuration management for the console application.
//!
//! Loads configuration from environment variables with sensible defaults.

use cinema_tickets_core::{MAX_TICKETS, TicketServiceConfig};
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

/// Configuration problems detected at startup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Ticket ceiling of zero would reject every order
    #[error("CINEMA_MAX_TICKETS must be at least 1")]
    ZeroMaxTickets,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Maximum tickets per order (`CINEMA_MAX_TICKETS`, default 20)
    pub max_tickets: u32,
    /// Log filter directive (`RUST_LOG`, default `cinema_tickets=info`)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unparseable values fall back to their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            max_tickets: lookup("CINEMA_MAX_TICKETS")
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(MAX_TICKETS),
            log_level: lookup("RUST_LOG")
                .unwrap_or_else(|| "cinema_tickets=info,cinema_tickets_core=info".to_string()),
        }
    }

    /// Check the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroMaxTickets`] if the ticket ceiling is zero.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.max_tickets == 0 {
            return Err(ConfigError::ZeroMaxTickets);
        }
        Ok(())
    }

    /// Settings for the ticket service
    #[must_use]
    pub const fn ticket_service(&self) -> TicketServiceConfig {
        TicketServiceConfig::with_max_tickets(self.max_tickets)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
