//! Control-protocol messages.
//!
//! A [`Message`] is one OSC-style message: a hierarchical address string
//! (e.g. `/ch/07/mix/fader`) plus an ordered list of typed arguments.
//! Messages are transient -- one is built per send and one per received
//! datagram; they are never persisted.
//!
//! [`Arg`] is the closed set of argument values the wire format can carry.
//! The `From` impls let request builders accept any wire-representable type
//! through a single `impl Into<Arg>` bound instead of one method per type.

use std::fmt;

/// One typed argument in a control message.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// 32-bit signed integer.
    Int(i32),
    /// 32-bit float. Mixer levels use the normalized range 0.0..=1.0.
    Float(f32),
    /// UTF-8 string (channel names, scene names).
    Str(String),
    /// Boolean.
    Bool(bool),
    /// Opaque binary blob.
    Blob(Vec<u8>),
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Int(v) => write!(f, "{v}"),
            Arg::Float(v) => write!(f, "{v}"),
            Arg::Str(v) => write!(f, "{v:?}"),
            Arg::Bool(v) => write!(f, "{v}"),
            Arg::Blob(v) => write!(f, "<{} bytes>", v.len()),
        }
    }
}

impl From<i32> for Arg {
    fn from(v: i32) -> Self {
        Arg::Int(v)
    }
}

impl From<f32> for Arg {
    fn from(v: f32) -> Self {
        Arg::Float(v)
    }
}

impl From<bool> for Arg {
    fn from(v: bool) -> Self {
        Arg::Bool(v)
    }
}

impl From<&str> for Arg {
    fn from(v: &str) -> Self {
        Arg::Str(v.to_string())
    }
}

impl From<String> for Arg {
    fn from(v: String) -> Self {
        Arg::Str(v)
    }
}

/// One control-protocol message: an address plus typed arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    /// Hierarchical parameter address (e.g. `/ch/07/mix/fader`).
    pub addr: String,
    /// Ordered argument list. Empty for parameter queries.
    pub args: Vec<Arg>,
}

impl Message {
    /// Build a parameter query: an address with no arguments.
    ///
    /// Mixers treat an argument-less message as "report the current value
    /// of this parameter back to the sender".
    pub fn request(addr: impl Into<String>) -> Self {
        Message {
            addr: addr.into(),
            args: Vec::new(),
        }
    }

    /// Build a parameter command: an address with a single argument.
    pub fn with_arg(addr: impl Into<String>, arg: impl Into<Arg>) -> Self {
        Message {
            addr: addr.into(),
            args: vec![arg.into()],
        }
    }

    /// The first argument as a float, if present and float-typed.
    pub fn first_float(&self) -> Option<f32> {
        match self.args.first() {
            Some(Arg::Float(v)) => Some(*v),
            _ => None,
        }
    }

    /// The first argument as an integer, if present and int-typed.
    pub fn first_int(&self) -> Option<i32> {
        match self.args.first() {
            Some(Arg::Int(v)) => Some(*v),
            _ => None,
        }
    }

    /// The first argument as a string slice, if present and string-typed.
    pub fn first_str(&self) -> Option<&str> {
        match self.args.first() {
            Some(Arg::Str(v)) => Some(v.as_str()),
            _ => None,
        }
    }
}
