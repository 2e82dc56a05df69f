//! XAirBuilder -- fluent builder for constructing [`XAirConsole`] instances.
//!
//! Separates configuration from construction so that callers can set the
//! console's IP address, the local listen port, and the reply settling
//! delay before the UDP socket is bound.
//!
//! # Example
//!
//! ```no_run
//! use mixlib_xair::builder::XAirBuilder;
//! use mixlib_xair::models::xair_16;
//! use std::time::Duration;
//!
//! # async fn example() -> mixlib_core::Result<()> {
//! let console = XAirBuilder::new(xair_16())
//!     .remote_ip("192.168.1.40".parse().unwrap())
//!     .settle_delay(Duration::from_millis(50))
//!     .build()
//!     .await?;
//! # Ok(())
//! # }
//! ```

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use mixlib_core::error::{Error, Result};
use mixlib_core::transport::DatagramTransport;
use mixlib_transport::UdpTransport;

use crate::console::XAirConsole;
use crate::models::XAirModel;

/// Default local UDP port for inbound replies.
pub const DEFAULT_LOCAL_PORT: u16 = 8888;

/// Default settling delay between sending a request and draining replies.
///
/// 50 ms is comfortably above the round-trip time of a console on the same
/// LAN segment; raise it on lossy or routed networks.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(50);

/// Fluent builder for [`XAirConsole`].
///
/// All configuration has sensible defaults except the console's IP address,
/// which is required for [`build()`](Self::build). The remote OSC port is
/// taken from the model, never configured directly.
pub struct XAirBuilder {
    model: XAirModel,
    remote_ip: Option<IpAddr>,
    local_port: u16,
    settle_delay: Duration,
}

impl XAirBuilder {
    /// Create a new builder for the given console model.
    pub fn new(model: XAirModel) -> Self {
        XAirBuilder {
            model,
            remote_ip: None,
            local_port: DEFAULT_LOCAL_PORT,
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }

    /// Set the console's IP address. Required for [`build()`](Self::build).
    pub fn remote_ip(mut self, ip: IpAddr) -> Self {
        self.remote_ip = Some(ip);
        self
    }

    /// Override the local listen port (default: 8888).
    ///
    /// Replies land on whatever port the query was sent from, so the only
    /// reason to change this is a conflict with another local service.
    pub fn local_port(mut self, port: u16) -> Self {
        self.local_port = port;
        self
    }

    /// Override the reply settling delay (default: 50 ms).
    pub fn settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Build an [`XAirConsole`] with a caller-provided transport.
    ///
    /// This is the primary entry point for testing (pass a
    /// `MockDatagramTransport` from `mixlib-test-harness`) and for advanced
    /// use cases where the caller manages the socket directly. The remote
    /// IP defaults to loopback when unset.
    pub async fn build_with_transport(
        self,
        transport: Box<dyn DatagramTransport>,
    ) -> Result<XAirConsole> {
        let ip = self
            .remote_ip
            .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST));
        let remote_addr = SocketAddr::new(ip, self.model.remote_port);

        Ok(XAirConsole::new(
            transport,
            self.model,
            remote_addr,
            self.settle_delay,
        ))
    }

    /// Build an [`XAirConsole`] over a freshly bound UDP socket.
    ///
    /// Requires that [`remote_ip()`](Self::remote_ip) has been called.
    pub async fn build(self) -> Result<XAirConsole> {
        if self.remote_ip.is_none() {
            return Err(Error::InvalidParameter(
                "remote_ip is required for build()".into(),
            ));
        }

        let transport = UdpTransport::bind_port(self.local_port).await?;
        self.build_with_transport(Box::new(transport)).await
    }
}
