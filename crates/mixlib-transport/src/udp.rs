//! UDP transport for mixer communication.
//!
//! This module provides [`UdpTransport`], the datagram transport the
//! X-Air/X32 driver runs over. The mixers listen for OSC datagrams on a
//! fixed UDP port (10024 for the X-Air family, 10023 for the X32) and send
//! replies back to the source port of the request, so one bound socket
//! serves both directions.
//!
//! Receiving is a non-blocking poll rather than a timed wait: the driver's
//! reply handling is "settle, then drain everything that arrived", so the
//! transport only needs to report whether a datagram is queued right now.
//!
//! # Example
//!
//! ```no_run
//! use mixlib_transport::UdpTransport;
//! use mixlib_core::DatagramTransport;
//!
//! # async fn example() -> mixlib_core::Result<()> {
//! let transport = UdpTransport::bind_port(8888).await?;
//!
//! let remote = "192.168.1.40:10024".parse().unwrap();
//! transport.send_to(b"...osc bytes...", remote).await?;
//!
//! // Later: drain whatever replies have arrived.
//! while let Some(datagram) = transport.try_recv()? {
//!     println!("got {} bytes", datagram.len());
//! }
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use std::net::SocketAddr;
use tokio::net::UdpSocket;

use mixlib_core::error::{Error, Result};
use mixlib_core::transport::DatagramTransport;

/// Receive buffer size. OSC control replies are well under 100 bytes; 8 KiB
/// leaves headroom for bulk replies without truncation.
const RECV_BUF_LEN: usize = 8192;

/// UDP transport for datagram-based mixer communication.
///
/// Wraps a [`tokio::net::UdpSocket`] with error mapping and logging
/// consistent with the rest of the mixlib transport layer.
#[derive(Debug)]
pub struct UdpTransport {
    /// The underlying UDP socket.
    socket: UdpSocket,
    /// The local address the socket is bound to.
    local_addr: SocketAddr,
}

impl UdpTransport {
    /// Bind to a local address.
    ///
    /// Use `"0.0.0.0:0"` to bind to any available port on all interfaces,
    /// or a fixed port like `"0.0.0.0:8888"` so the mixer's replies land on
    /// a known listen port.
    pub async fn bind(addr: &str) -> Result<Self> {
        tracing::debug!(addr = %addr, "Binding UDP socket");

        let socket = UdpSocket::bind(addr).await.map_err(|e| {
            tracing::error!(addr = %addr, error = %e, "Failed to bind UDP socket");
            Error::Io(e)
        })?;

        let local_addr = socket.local_addr().map_err(|e| {
            tracing::error!(error = %e, "Failed to get local address");
            Error::Io(e)
        })?;

        tracing::debug!(local_addr = %local_addr, "UDP socket bound");

        Ok(Self { socket, local_addr })
    }

    /// Bind to a specific port on all interfaces.
    ///
    /// Convenience method equivalent to `bind(&format!("0.0.0.0:{port}"))`.
    pub async fn bind_port(port: u16) -> Result<Self> {
        Self::bind(&format!("0.0.0.0:{}", port)).await
    }
}

#[async_trait]
impl DatagramTransport for UdpTransport {
    async fn send_to(&self, data: &[u8], addr: SocketAddr) -> Result<()> {
        tracing::trace!(
            local = %self.local_addr,
            remote = %addr,
            bytes = data.len(),
            "Sending datagram"
        );

        self.socket.send_to(data, addr).await.map_err(|e| {
            tracing::error!(
                local = %self.local_addr,
                remote = %addr,
                error = %e,
                "Failed to send datagram"
            );
            Error::Io(e)
        })?;

        Ok(())
    }

    fn try_recv(&self) -> Result<Option<Vec<u8>>> {
        let mut buf = [0u8; RECV_BUF_LEN];

        match self.socket.try_recv_from(&mut buf) {
            Ok((n, src)) => {
                tracing::trace!(
                    local = %self.local_addr,
                    remote = %src,
                    bytes = n,
                    "Received datagram"
                );
                Ok(Some(buf[..n].to_vec()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => Ok(None),
            Err(e) => {
                tracing::error!(
                    local = %self.local_addr,
                    error = %e,
                    "Failed to receive datagram"
                );
                Err(Error::Io(e))
            }
        }
    }

    fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.local_addr)
    }
}
