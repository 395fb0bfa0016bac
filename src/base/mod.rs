//! Base types and error handling.
//!
//! Provides the foundational types shared by the rest of the crate:
//! - [`WireError`]: errors surfaced by the client API and driver
//! - [`ConnState`]: connection lifecycle states
//!
//! [`WireError`]: error::WireError
//! [`ConnState`]: state::ConnState

pub mod error;
pub mod state;

#[cfg(test)]
mod tests;
