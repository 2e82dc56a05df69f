//! mixlib-transport: Transport implementations for mixlib.
//!
//! Currently provides [`UdpTransport`], the datagram transport used by the
//! X-Air/X32 driver. The mixers speak OSC over UDP exclusively, so there is
//! no stream-oriented transport here.

pub mod udp;

pub use udp::UdpTransport;
