//! Mock datagram transport for deterministic testing of the driver.
//!
//! [`MockDatagramTransport`] implements the [`DatagramTransport`] trait
//! entirely in memory. Tests can pre-load inbound datagrams, script
//! request/response expectations, and inspect every datagram the driver
//! sent -- without a mixer or a socket.
//!
//! The transport is a cloneable handle over shared state: the driver takes
//! one clone at build time, the test keeps another as a spy.
//!
//! # Example
//!
//! ```
//! use mixlib_test_harness::MockDatagramTransport;
//!
//! let mock = MockDatagramTransport::new();
//! // Simulate a reply already sitting in the socket buffer.
//! mock.push_inbound(b"...osc bytes...");
//! // Hand `Box::new(mock.clone())` to the builder, keep `mock` to assert
//! // on `mock.sent_data()` afterwards.
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use mixlib_core::error::{Error, Result};
use mixlib_core::transport::DatagramTransport;

/// A scripted request/response pair.
#[derive(Debug, Clone)]
struct Expectation {
    /// The exact datagram we expect to be sent.
    request: Vec<u8>,
    /// The datagram to queue for the next poll when the request matches.
    response: Vec<u8>,
}

#[derive(Debug, Default)]
struct Inner {
    /// Datagrams waiting to be polled, oldest first.
    inbound: VecDeque<Vec<u8>>,
    /// Log of every datagram sent through this transport.
    sent: Vec<(Vec<u8>, SocketAddr)>,
    /// Ordered queue of scripted request/response pairs.
    expectations: VecDeque<Expectation>,
}

/// A mock [`DatagramTransport`] for testing the driver without hardware.
///
/// Two ways to feed the driver replies:
///
/// - [`push_inbound`](Self::push_inbound) queues a datagram directly, as if
///   it had already arrived on the socket.
/// - [`expect`](Self::expect) scripts an ordered request/response pair:
///   when `send_to` is called with the matching bytes, the response is
///   queued for the next poll. A send that does not match the front
///   expectation is an error; sends with no expectations pending are simply
///   recorded (fire-and-forget commands).
#[derive(Debug, Clone, Default)]
pub struct MockDatagramTransport {
    inner: Arc<Mutex<Inner>>,
}

impl MockDatagramTransport {
    /// Create a new, empty mock transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an inbound datagram for the next `try_recv` poll.
    pub fn push_inbound(&self, datagram: &[u8]) {
        self.inner
            .lock()
            .unwrap()
            .inbound
            .push_back(datagram.to_vec());
    }

    /// Script an expected request and the response it should trigger.
    pub fn expect(&self, request: &[u8], response: &[u8]) {
        self.inner.lock().unwrap().expectations.push_back(Expectation {
            request: request.to_vec(),
            response: response.to_vec(),
        });
    }

    /// All datagrams sent through this transport, in order.
    pub fn sent_data(&self) -> Vec<Vec<u8>> {
        self.inner
            .lock()
            .unwrap()
            .sent
            .iter()
            .map(|(data, _)| data.clone())
            .collect()
    }

    /// The destination addresses of every sent datagram, in order.
    pub fn sent_addrs(&self) -> Vec<SocketAddr> {
        self.inner
            .lock()
            .unwrap()
            .sent
            .iter()
            .map(|(_, addr)| *addr)
            .collect()
    }

    /// The number of scripted expectations not yet consumed.
    pub fn remaining_expectations(&self) -> usize {
        self.inner.lock().unwrap().expectations.len()
    }
}

#[async_trait]
impl DatagramTransport for MockDatagramTransport {
    async fn send_to(&self, data: &[u8], addr: SocketAddr) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.sent.push((data.to_vec(), addr));

        if let Some(expectation) = inner.expectations.pop_front() {
            if data != expectation.request.as_slice() {
                return Err(Error::Protocol(format!(
                    "unexpected send data: expected {:02X?}, got {:02X?}",
                    expectation.request, data
                )));
            }
            inner.inbound.push_back(expectation.response);
        }

        Ok(())
    }

    fn try_recv(&self) -> Result<Option<Vec<u8>>> {
        Ok(self.inner.lock().unwrap().inbound.pop_front())
    }

    fn local_addr(&self) -> Result<SocketAddr> {
        Ok("127.0.0.1:8888".parse().expect("valid literal"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr() -> SocketAddr {
        "192.168.1.40:10024".parse().unwrap()
    }

    #[tokio::test]
    async fn records_sent_datagrams() {
        let mock = MockDatagramTransport::new();
        mock.send_to(b"one", addr()).await.unwrap();
        mock.send_to(b"two", addr()).await.unwrap();

        assert_eq!(mock.sent_data(), vec![b"one".to_vec(), b"two".to_vec()]);
        assert_eq!(mock.sent_addrs(), vec![addr(), addr()]);
    }

    #[tokio::test]
    async fn pushed_inbound_datagrams_poll_in_order() {
        let mock = MockDatagramTransport::new();
        mock.push_inbound(b"first");
        mock.push_inbound(b"second");

        assert_eq!(mock.try_recv().unwrap(), Some(b"first".to_vec()));
        assert_eq!(mock.try_recv().unwrap(), Some(b"second".to_vec()));
        assert_eq!(mock.try_recv().unwrap(), None);
    }

    #[tokio::test]
    async fn expectation_queues_response_on_matching_send() {
        let mock = MockDatagramTransport::new();
        mock.expect(b"query", b"reply");

        assert_eq!(mock.try_recv().unwrap(), None, "nothing before the send");
        mock.send_to(b"query", addr()).await.unwrap();
        assert_eq!(mock.try_recv().unwrap(), Some(b"reply".to_vec()));
        assert_eq!(mock.remaining_expectations(), 0);
    }

    #[tokio::test]
    async fn mismatched_expectation_errors() {
        let mock = MockDatagramTransport::new();
        mock.expect(b"expected", b"reply");

        let result = mock.send_to(b"something else", addr()).await;
        assert!(matches!(result, Err(Error::Protocol(_))));
    }

    #[tokio::test]
    async fn sends_without_expectations_are_recorded_only() {
        let mock = MockDatagramTransport::new();
        mock.send_to(b"fire and forget", addr()).await.unwrap();

        assert_eq!(mock.sent_data().len(), 1);
        assert_eq!(mock.try_recv().unwrap(), None);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let mock = MockDatagramTransport::new();
        let driver_side = mock.clone();

        driver_side.send_to(b"ping", addr()).await.unwrap();
        mock.push_inbound(b"pong");

        assert_eq!(mock.sent_data().len(), 1);
        assert_eq!(driver_side.try_recv().unwrap(), Some(b"pong".to_vec()));
    }
}
