//! mixlib-test-harness: Test utilities and mock transports for mixlib.
//!
//! This crate provides [`MockDatagramTransport`] for deterministic unit
//! testing of the console driver without requiring a real mixer on the
//! network.

pub mod mock_datagram;

pub use mock_datagram::MockDatagramTransport;
