//! In-process signaling hub for coordinating concurrent tasks.
//!
//! A registry of named, single-slot notification channels: independent
//! workers register to receive wake-up signals under a unique signature,
//! get signaled individually by name or all at once via broadcast, and
//! deregister when done. Signals carry no payload and no history; see
//! [`hub::SignalHub`] for the contract and the caller-side coordination
//! patterns.

pub mod error;
pub mod hub;
pub mod signal;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
