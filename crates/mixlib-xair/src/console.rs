//! XAirConsole -- the controller for one X-Air / X32 console.
//!
//! This module ties the OSC codec ([`protocol`]), the address templates
//! ([`address`]), and the reply dispatcher ([`dispatch`]) to a
//! [`DatagramTransport`] to produce a working console driver.
//!
//! The protocol offers no delivery guarantee and no request ticket, so the
//! controller works strictly one request at a time: send, sleep a fixed
//! settling delay, then drain and dispatch every datagram that arrived.
//! All public operations take `&mut self`, which makes the
//! one-outstanding-request rule a compile-time property rather than a
//! runtime convention.
//!
//! Error policy: transport and codec failures are logged and absorbed here.
//! Public operations return plain values -- on a lost or late reply the
//! accessors simply return the last cached value (which may still be the
//! default). Callers that need delivery guarantees will not find them in
//! this protocol.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::time;
use tracing::{debug, warn};

use mixlib_core::message::{Arg, Message};
use mixlib_core::transport::DatagramTransport;
use mixlib_core::Result;

use crate::address::{self, AddressPattern};
use crate::dispatch;
use crate::models::XAirModel;
use crate::protocol;
use crate::state::{ConsoleState, TapeStatus};

/// A connected X-Air or X32 console.
///
/// Constructed via [`XAirBuilder`](crate::builder::XAirBuilder). All console
/// communication goes through the [`DatagramTransport`] provided at build
/// time.
pub struct XAirConsole {
    transport: Box<dyn DatagramTransport>,
    model: XAirModel,
    remote_addr: SocketAddr,
    settle_delay: Duration,
    state: ConsoleState,
}

impl XAirConsole {
    /// Create a new `XAirConsole` from its constituent parts.
    ///
    /// This is called by [`XAirBuilder`](crate::builder::XAirBuilder);
    /// callers should use the builder API instead.
    pub(crate) fn new(
        transport: Box<dyn DatagramTransport>,
        model: XAirModel,
        remote_addr: SocketAddr,
        settle_delay: Duration,
    ) -> Self {
        let state = ConsoleState::new(model.channel_count, model.mute_group_count);
        XAirConsole {
            transport,
            model,
            remote_addr,
            settle_delay,
            state,
        }
    }

    /// The model this controller was built for.
    pub fn model(&self) -> &XAirModel {
        &self.model
    }

    /// The remote endpoint commands are sent to.
    pub fn remote_addr(&self) -> SocketAddr {
        self.remote_addr
    }

    /// The local address of the underlying transport.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.transport.local_addr()
    }

    /// Warm up the name cache by querying every channel in sequence.
    ///
    /// Channel 1 through N are queried in ascending order, each request
    /// followed by its own settling window. The protocol has no request
    /// identifiers, so overlapping two name queries would make their
    /// replies indistinguishable; the sequential protocol trades linear
    /// startup latency for unambiguous correlation.
    ///
    /// A channel whose reply is lost keeps its default empty name. That is
    /// not an error -- names refresh on the next `initialize()`.
    pub async fn initialize(&mut self) {
        debug!(model = %self.model.name, channels = self.model.channel_count, "reading channel names");
        for channel in 1..=self.model.channel_count {
            let addr = address::CHANNEL_NAME.format(channel);
            self.request_and_drain(&addr, &address::CHANNEL_NAME, Self::apply_name_reply)
                .await;
        }
    }

    /// The cached display name of a channel. No network I/O.
    ///
    /// Returns `None` for out-of-range channels, and `Some("")` for
    /// channels whose name has not been seen yet.
    pub fn channel_name(&self, channel: u16) -> Option<&str> {
        self.state.channel_name(channel)
    }

    /// Query a channel's fader level.
    ///
    /// Sends a fader query, waits the settling delay, drains any pending
    /// replies, and returns the cached level. If no reply arrived in the
    /// window the previous cached value is returned (0.0 if none was ever
    /// seen). An out-of-range channel returns the 0.0 sentinel immediately
    /// without touching the network.
    pub async fn get_fader(&mut self, channel: u16) -> f32 {
        if !self.valid_channel(channel) {
            debug!(channel, "fader query for out-of-range channel");
            return 0.0;
        }
        let addr = address::CHANNEL_FADER.format(channel);
        self.request_and_drain(&addr, &address::CHANNEL_FADER, Self::apply_fader_reply)
            .await;
        self.state.fader(channel).unwrap_or(0.0)
    }

    /// Set a channel's fader level (fire-and-forget).
    ///
    /// The console does not acknowledge writes, so no reply is awaited.
    /// The value is clamped to 0.0..=1.0; an out-of-range channel is
    /// rejected before any network I/O.
    pub async fn set_fader(&mut self, channel: u16, value: f32) {
        if !self.valid_channel(channel) {
            debug!(channel, "fader command for out-of-range channel");
            return;
        }
        let addr = address::CHANNEL_FADER.format(channel);
        self.send_command_logged(&addr, value.clamp(0.0, 1.0)).await;
    }

    /// Query a mute group's engaged state.
    ///
    /// Same request/settle/drain shape as [`get_fader`](Self::get_fader);
    /// out-of-range groups return `false` without network I/O.
    pub async fn get_mute_group(&mut self, group: u16) -> bool {
        if !self.valid_mute_group(group) {
            debug!(group, "mute group query out of range");
            return false;
        }
        let addr = address::MUTE_GROUP.format(group);
        self.request_and_drain(&addr, &address::MUTE_GROUP, Self::apply_mute_reply)
            .await;
        self.state.mute_group(group).unwrap_or(false)
    }

    /// Engage or release a mute group (fire-and-forget).
    ///
    /// The wire argument is the console's 0/1 integer convention.
    pub async fn set_mute_group(&mut self, group: u16, engaged: bool) {
        if !self.valid_mute_group(group) {
            debug!(group, "mute group command out of range");
            return;
        }
        let addr = address::MUTE_GROUP.format(group);
        self.send_command_logged(&addr, i32::from(engaged)).await;
    }

    /// Query the USB recorder transport state.
    pub async fn get_tape_status(&mut self) -> TapeStatus {
        let addr = address::TAPE_STATE.format(0);
        self.request_and_drain(&addr, &address::TAPE_STATE, Self::apply_tape_reply)
            .await;
        self.state.tape()
    }

    /// Set the USB recorder transport state (fire-and-forget).
    pub async fn set_tape_status(&mut self, status: TapeStatus) {
        let addr = address::TAPE_STATE.format(0);
        self.send_command_logged(&addr, status.code()).await;
    }

    fn valid_channel(&self, channel: u16) -> bool {
        (1..=self.model.channel_count).contains(&channel)
    }

    fn valid_mute_group(&self, group: u16) -> bool {
        (1..=self.model.mute_group_count).contains(&group)
    }

    // -----------------------------------------------------------------
    // Reply handlers: bounds-check the raw dispatched index, then write
    // the cache. A reply for a channel outside this model is dropped --
    // the console is authoritative about addresses, but the cache is
    // never indexed out of range.
    // -----------------------------------------------------------------

    fn apply_name_reply(state: &mut ConsoleState, raw: Option<i32>, msg: &Message) {
        let Some(raw) = raw else { return };
        let Some(name) = msg.first_str() else {
            debug!(addr = %msg.addr, "name reply without string argument");
            return;
        };
        let stored = u16::try_from(raw)
            .ok()
            .and_then(|ch| state.set_channel_name(ch, name).ok());
        match stored {
            Some(()) => debug!(channel = raw, name = %name, "cached channel name"),
            None => debug!(channel = raw, "name reply for channel outside this model"),
        }
    }

    fn apply_fader_reply(state: &mut ConsoleState, raw: Option<i32>, msg: &Message) {
        let Some(raw) = raw else { return };
        let Some(value) = msg.first_float() else {
            debug!(addr = %msg.addr, "fader reply without float argument");
            return;
        };
        let stored = u16::try_from(raw)
            .ok()
            .and_then(|ch| state.set_fader(ch, value).ok());
        match stored {
            Some(()) => debug!(channel = raw, value, "cached fader level"),
            None => debug!(channel = raw, "fader reply for channel outside this model"),
        }
    }

    fn apply_mute_reply(state: &mut ConsoleState, raw: Option<i32>, msg: &Message) {
        let Some(raw) = raw else { return };
        let Some(value) = msg.first_int() else {
            debug!(addr = %msg.addr, "mute group reply without int argument");
            return;
        };
        let stored = u16::try_from(raw)
            .ok()
            .and_then(|g| state.set_mute_group(g, value != 0).ok());
        if stored.is_none() {
            debug!(group = raw, "mute group reply outside this model");
        }
    }

    fn apply_tape_reply(state: &mut ConsoleState, _raw: Option<i32>, msg: &Message) {
        let Some(code) = msg.first_int() else {
            debug!(addr = %msg.addr, "tape state reply without int argument");
            return;
        };
        match TapeStatus::from_code(code) {
            Some(status) => state.set_tape(status),
            None => debug!(code, "unknown tape state code"),
        }
    }

    // -----------------------------------------------------------------
    // Request/reply primitives
    // -----------------------------------------------------------------

    /// Send a query, wait the settling delay, then drain replies against
    /// the given pattern. Returns whether anything matched.
    async fn request_and_drain<F>(
        &mut self,
        addr: &str,
        pattern: &AddressPattern,
        apply: F,
    ) -> bool
    where
        F: FnMut(&mut ConsoleState, Option<i32>, &Message),
    {
        if let Err(e) = self.send_request(addr).await {
            warn!(addr = %addr, error = %e, "query send failed");
            return false;
        }
        time::sleep(self.settle_delay).await;
        self.drain_and_dispatch(pattern, apply).await
    }

    /// Encode and send an argument-less query datagram.
    async fn send_request(&self, addr: &str) -> Result<()> {
        debug!(addr = %addr, "sending query");
        let bytes = protocol::encode(&Message::request(addr))?;
        self.transport.send_to(&bytes, self.remote_addr).await
    }

    /// Encode and send a one-argument command datagram.
    async fn send_command(&self, addr: &str, value: impl Into<Arg>) -> Result<()> {
        let arg = value.into();
        debug!(addr = %addr, value = %arg, "sending command");
        let bytes = protocol::encode(&Message::with_arg(addr, arg))?;
        self.transport.send_to(&bytes, self.remote_addr).await
    }

    /// Fire-and-forget wrapper around [`send_command`](Self::send_command):
    /// failures are logged, never surfaced.
    async fn send_command_logged(&self, addr: &str, value: impl Into<Arg>) {
        if let Err(e) = self.send_command(addr, value).await {
            warn!(addr = %addr, error = %e, "command send failed");
        }
    }

    /// Drain every pending datagram and dispatch each against `pattern`.
    ///
    /// The loop runs until the transport reports nothing queued -- however
    /// many datagrams accumulated since the last poll. Malformed datagrams
    /// are logged and skipped without aborting the drain, so one corrupt
    /// packet cannot shadow the reply behind it. When several matching
    /// replies are pending, the last one processed wins the cache write.
    async fn drain_and_dispatch<F>(&mut self, pattern: &AddressPattern, mut apply: F) -> bool
    where
        F: FnMut(&mut ConsoleState, Option<i32>, &Message),
    {
        let mut matched = false;
        loop {
            let datagram = match self.transport.try_recv() {
                Ok(Some(datagram)) => datagram,
                Ok(None) => break,
                Err(e) => {
                    warn!(error = %e, "receive poll failed, abandoning drain");
                    break;
                }
            };

            let msg = match protocol::decode(&datagram) {
                Ok(msg) => msg,
                Err(e) => {
                    warn!(error = %e, "discarding malformed datagram");
                    continue;
                }
            };

            let state = &mut self.state;
            if dispatch::dispatch(pattern, &msg, |raw, m| apply(state, raw, m)) {
                matched = true;
            }
        }
        matched
    }
}
