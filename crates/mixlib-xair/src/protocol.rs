//! OSC wire codec boundary.
//!
//! The consoles speak plain OSC 1.0 over UDP: one message per datagram, the
//! address as a null-padded string, a type tag string, and big-endian
//! argument payloads. The `rosc` crate handles that framing; this module is
//! the thin boundary that maps between [`Message`]/[`Arg`] and rosc's types
//! so the rest of the driver never touches the wire format directly.
//!
//! OSC bundles are rejected: the X-Air/X32 control protocol sends single
//! messages only, and a bundle in the inbound queue is as malformed, for
//! our purposes, as a truncated packet. Both decode to [`Error::Protocol`]
//! and are discarded by the drain loop.

use rosc::{decoder, encoder, OscMessage, OscPacket, OscType};

use mixlib_core::error::{Error, Result};
use mixlib_core::message::{Arg, Message};

/// Encode a message into OSC wire bytes ready for one datagram.
pub fn encode(msg: &Message) -> Result<Vec<u8>> {
    let packet = OscPacket::Message(OscMessage {
        addr: msg.addr.clone(),
        args: msg.args.iter().map(to_osc).collect(),
    });

    encoder::encode(&packet).map_err(|e| Error::Protocol(format!("OSC encode failed: {e}")))
}

/// Decode one received datagram into a message.
///
/// Fails with [`Error::Protocol`] on malformed packets, bundles, and
/// argument types outside the driver's wire set.
pub fn decode(data: &[u8]) -> Result<Message> {
    let (_rest, packet) = decoder::decode_udp(data)
        .map_err(|e| Error::Protocol(format!("OSC decode failed: {e}")))?;

    match packet {
        OscPacket::Message(msg) => {
            let args = msg
                .args
                .into_iter()
                .map(from_osc)
                .collect::<Result<Vec<_>>>()?;
            Ok(Message {
                addr: msg.addr,
                args,
            })
        }
        OscPacket::Bundle(_) => Err(Error::Protocol("unexpected OSC bundle".into())),
    }
}

fn to_osc(arg: &Arg) -> OscType {
    match arg {
        Arg::Int(v) => OscType::Int(*v),
        Arg::Float(v) => OscType::Float(*v),
        Arg::Str(v) => OscType::String(v.clone()),
        Arg::Bool(v) => OscType::Bool(*v),
        Arg::Blob(v) => OscType::Blob(v.clone()),
    }
}

fn from_osc(arg: OscType) -> Result<Arg> {
    match arg {
        OscType::Int(v) => Ok(Arg::Int(v)),
        OscType::Float(v) => Ok(Arg::Float(v)),
        OscType::String(v) => Ok(Arg::Str(v)),
        OscType::Bool(v) => Ok(Arg::Bool(v)),
        OscType::Blob(v) => Ok(Arg::Blob(v)),
        other => Err(Error::Protocol(format!(
            "unsupported OSC argument type: {other:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---------------------------------------------------------------
    // Encoding
    // ---------------------------------------------------------------

    #[test]
    fn encode_query_wire_layout() {
        // "/ch/01/config/name" (18 chars) pads to 20 bytes, followed by
        // the type tag string "," padded to 4.
        let bytes = encode(&Message::request("/ch/01/config/name")).unwrap();

        assert_eq!(bytes.len(), 24);
        assert_eq!(&bytes[..18], b"/ch/01/config/name");
        assert_eq!(&bytes[18..20], &[0, 0]);
        assert_eq!(&bytes[20..24], b",\0\0\0");
    }

    #[test]
    fn encode_float_command_type_tag() {
        let bytes = encode(&Message::with_arg("/ch/07/mix/fader", 0.5_f32)).unwrap();

        // Address (16 chars) pads to 20, ",f" pads to 4, float payload is 4.
        assert_eq!(bytes.len(), 28);
        assert_eq!(&bytes[20..22], b",f");
        assert_eq!(&bytes[24..28], &0.5_f32.to_be_bytes());
    }

    #[test]
    fn encode_int_command_type_tag() {
        let bytes = encode(&Message::with_arg("/config/mute/1", 1)).unwrap();
        assert_eq!(&bytes[16..18], b",i");
        assert_eq!(&bytes[20..24], &1_i32.to_be_bytes());
    }

    // ---------------------------------------------------------------
    // Decoding
    // ---------------------------------------------------------------

    #[test]
    fn decode_fader_reply() {
        let wire = encoder::encode(&OscPacket::Message(OscMessage {
            addr: "/ch/07/mix/fader".into(),
            args: vec![OscType::Float(0.42)],
        }))
        .unwrap();

        let msg = decode(&wire).unwrap();
        assert_eq!(msg.addr, "/ch/07/mix/fader");
        assert_eq!(msg.first_float(), Some(0.42));
    }

    #[test]
    fn decode_name_reply() {
        let wire = encoder::encode(&OscPacket::Message(OscMessage {
            addr: "/ch/03/config/name".into(),
            args: vec![OscType::String("Kick".into())],
        }))
        .unwrap();

        let msg = decode(&wire).unwrap();
        assert_eq!(msg.first_str(), Some("Kick"));
    }

    #[test]
    fn decode_garbage_is_protocol_error() {
        let result = decode(&[0x01, 0x02, 0x03]);
        assert!(matches!(result, Err(Error::Protocol(_))));
    }

    #[test]
    fn decode_non_osc_text_is_protocol_error() {
        let result = decode(b"not an osc packet at all");
        assert!(matches!(result, Err(Error::Protocol(_))));
    }

    #[test]
    fn decode_bundle_is_protocol_error() {
        let wire = encoder::encode(&OscPacket::Bundle(rosc::OscBundle {
            timetag: rosc::OscTime {
                seconds: 0,
                fractional: 1,
            },
            content: vec![],
        }))
        .unwrap();

        let result = decode(&wire);
        assert!(matches!(result, Err(Error::Protocol(_))));
    }

    #[test]
    fn round_trip_command() {
        let original = Message::with_arg("/ch/18/mix/fader", 0.82_f32);
        let decoded = decode(&encode(&original).unwrap()).unwrap();
        assert_eq!(decoded, original);
    }
}
