//! Transport trait for mixer communication.
//!
//! The [`DatagramTransport`] trait abstracts over the datagram link to a
//! mixer. The real implementation is the UDP socket in `mixlib-transport`;
//! `mixlib-test-harness` provides a mock for deterministic unit testing of
//! the driver without hardware.
//!
//! The trait is datagram-oriented by design: the mixer control protocol
//! gives no delivery guarantee, no ordering guarantee, and no
//! request/response ticket, so the driver never blocks waiting for a reply.
//! Instead it sends, waits a fixed settling delay, and then drains whatever
//! datagrams have arrived via [`try_recv`](DatagramTransport::try_recv).

use async_trait::async_trait;
use std::net::SocketAddr;

use crate::error::Result;

/// Asynchronous datagram transport to a mixer.
///
/// Implementations handle socket lifecycle and buffering. Protocol-level
/// concerns (OSC encoding, address dispatch) live in the driver crates that
/// consume this trait.
#[async_trait]
pub trait DatagramTransport: Send + Sync {
    /// Send one datagram to the given remote address.
    ///
    /// The entire slice is sent as a single datagram; it either arrives in
    /// full or not at all.
    async fn send_to(&self, data: &[u8], addr: SocketAddr) -> Result<()>;

    /// Poll for one queued inbound datagram without blocking.
    ///
    /// Returns `Ok(Some(bytes))` if a datagram was waiting, `Ok(None)` if
    /// nothing is queued right now. Callers drain a backlog by looping
    /// until `Ok(None)`.
    fn try_recv(&self) -> Result<Option<Vec<u8>>>;

    /// The local address this transport is bound to.
    fn local_addr(&self) -> Result<SocketAddr>;
}
