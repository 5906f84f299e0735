//! Port traits for infrastructure boundaries.
//!
//! Ports exist for:
//! - Clock/Random (for testing)
//!
//! Snapshot storage is a concrete type; see [`super::snapshot`].

use chrono::{DateTime, Utc};

// =============================================================================
// Testability Ports
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[cfg_attr(test, mockall::automock)]
pub trait RandomPort: Send + Sync {
    /// Uniform sample in `0.0..1.0`.
    fn gen_probability(&self) -> f64;
}
