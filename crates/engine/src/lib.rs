//! Follout Engine library.
//!
//! ## Structure
//!
//! - `infrastructure/` - ports, clock/random, snapshot files, configuration
//! - `app` - settlement composition (every extent plus the ports)
//! - `demo` - scenario run by the `follout` binary

pub mod app;
pub mod demo;
pub mod infrastructure;
