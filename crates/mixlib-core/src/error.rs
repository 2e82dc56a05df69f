//! Error types for mixlib.
//!
//! All fallible operations across the library return [`Result<T>`], which
//! uses [`Error`] as the error type. Transport-layer and protocol-layer
//! errors are both captured here.

/// The error type for all mixlib operations.
///
/// Variants cover the failure modes of talking to a mixer over a datagram
/// link: socket-level I/O failures, malformed inbound packets, and invalid
/// parameters supplied by the caller.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An underlying socket I/O error (bind, send, receive).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A protocol-level error (malformed OSC packet, unexpected payload).
    ///
    /// Inbound datagrams that fail to decode produce this variant; the
    /// driver logs and discards them rather than surfacing them to callers.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// An invalid parameter was passed to a library call.
    ///
    /// Covers out-of-range channel and mute-group indices on cache writes
    /// as well as builder misconfiguration.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// A convenience `Result` alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;
