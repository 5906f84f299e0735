//! Infrastructure implementations.
//!
//! Contains port trait implementations, snapshot file storage and
//! configuration.

pub mod clock;
pub mod config;
pub mod ports;
pub mod snapshot;
