//! mixlib-core: Core traits, types, and error definitions for mixlib.
//!
//! This crate defines the console-agnostic abstractions that mixlib drivers
//! build on. Applications that only consume cached console state can depend
//! on these types without pulling in a specific driver or transport.
//!
//! # Key types
//!
//! - [`Message`] -- one control-protocol message (address + typed arguments)
//! - [`DatagramTransport`] -- datagram-level communication channel
//! - [`Error`] / [`Result`] -- error handling

pub mod error;
pub mod message;
pub mod transport;

// Re-export key types at crate root for ergonomic `use mixlib_core::*`.
pub use error::{Error, Result};
pub use message::{Arg, Message};
pub use transport::DatagramTransport;
