//! Reply dispatch: matching inbound messages against an address pattern.
//!
//! The console's protocol carries no request/response ticket, so a reply can
//! only be correlated by its address. The controller therefore supplies
//! exactly one [`AddressPattern`] per receive attempt -- the pattern of the
//! request it just sent -- and every drained datagram is matched against
//! that single pattern. There is no registry of simultaneously active
//! patterns; the one-outstanding-request execution model makes one enough.
//!
//! Matching checks the literal prefix and suffix and parses the fixed-width
//! decimal channel field in between. It deliberately does not validate the
//! rest of the address grammar: the console is the authority on its own
//! address tree, and the channel substring is all the driver needs. The
//! parsed index is reported raw -- bounds-checking against the model's
//! channel count happens at the cache write, never here.

use tracing::debug;

use mixlib_core::Message;

use crate::address::AddressPattern;

/// Outcome of matching one reply address against one pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Address matched; the raw parsed channel number (not bounds-checked).
    Channel(i32),
    /// Address matched a pattern with no channel field.
    Global,
    /// Address did not match the pattern.
    NoMatch,
}

/// Match a concrete address against a pattern.
///
/// The address must have exactly the pattern's length, share its literal
/// prefix and suffix, and carry decimal digits in the channel field. A
/// non-digit channel field is reported as [`MatchOutcome::NoMatch`] with a
/// diagnostic log; it is never a fault.
pub fn match_address(pattern: &AddressPattern, addr: &str) -> MatchOutcome {
    if addr.len() != pattern.address_len()
        || !addr.starts_with(pattern.prefix())
        || !addr.ends_with(pattern.suffix())
    {
        return MatchOutcome::NoMatch;
    }

    if pattern.channel_digits() == 0 {
        return MatchOutcome::Global;
    }

    let offset = pattern.channel_offset();
    let field = &addr.as_bytes()[offset..offset + pattern.channel_digits()];

    if !field.iter().all(|b| b.is_ascii_digit()) {
        debug!(addr = %addr, "non-numeric channel field in reply address");
        return MatchOutcome::NoMatch;
    }

    // One or two ASCII digits; cannot overflow an i32.
    let channel = field
        .iter()
        .fold(0i32, |acc, b| acc * 10 + i32::from(b - b'0'));
    MatchOutcome::Channel(channel)
}

/// Dispatch one decoded message against one pattern.
///
/// On a match the handler is invoked with the raw channel number (`None`
/// for channel-less patterns) and the message, and `true` is returned.
/// Unmatched messages are dropped with a debug log.
pub fn dispatch<F>(pattern: &AddressPattern, msg: &Message, handler: F) -> bool
where
    F: FnOnce(Option<i32>, &Message),
{
    match match_address(pattern, &msg.addr) {
        MatchOutcome::Channel(channel) => {
            handler(Some(channel), msg);
            true
        }
        MatchOutcome::Global => {
            handler(None, msg);
            true
        }
        MatchOutcome::NoMatch => {
            // TODO: route unmatched replies to a generic handler once the
            // driver grows subscriptions (/xremote) and unsolicited updates.
            debug!(addr = %msg.addr, "dropping unmatched message");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::{CHANNEL_FADER, CHANNEL_NAME, MUTE_GROUP, TAPE_STATE};
    use mixlib_core::Arg;

    // ---------------------------------------------------------------
    // Channel extraction
    // ---------------------------------------------------------------

    #[test]
    fn extracts_every_valid_channel_number() {
        for ch in 1..=32u16 {
            let addr = CHANNEL_FADER.format(ch);
            assert_eq!(
                match_address(&CHANNEL_FADER, &addr),
                MatchOutcome::Channel(ch as i32),
                "channel {ch}"
            );
        }
    }

    #[test]
    fn leading_zero_is_stripped() {
        assert_eq!(
            match_address(&CHANNEL_FADER, "/ch/07/mix/fader"),
            MatchOutcome::Channel(7)
        );
        assert_eq!(
            match_address(&CHANNEL_NAME, "/ch/01/config/name"),
            MatchOutcome::Channel(1)
        );
    }

    #[test]
    fn each_pattern_uses_its_own_offset() {
        assert_eq!(
            match_address(&CHANNEL_NAME, "/ch/12/config/name"),
            MatchOutcome::Channel(12)
        );
        assert_eq!(
            match_address(&MUTE_GROUP, "/config/mute/3"),
            MatchOutcome::Channel(3)
        );
        assert_eq!(
            match_address(&TAPE_STATE, "/-stat/tape/state"),
            MatchOutcome::Global
        );
    }

    // ---------------------------------------------------------------
    // Rejection cases
    // ---------------------------------------------------------------

    #[test]
    fn non_numeric_channel_field_is_no_match() {
        assert_eq!(
            match_address(&CHANNEL_FADER, "/ch/ab/mix/fader"),
            MatchOutcome::NoMatch
        );
        assert_eq!(
            match_address(&CHANNEL_FADER, "/ch/-1/mix/fader"),
            MatchOutcome::NoMatch
        );
        assert_eq!(
            match_address(&CHANNEL_FADER, "/ch/+5/mix/fader"),
            MatchOutcome::NoMatch
        );
    }

    #[test]
    fn wrong_suffix_is_no_match() {
        assert_eq!(
            match_address(&CHANNEL_FADER, "/ch/07/mix/pan"),
            MatchOutcome::NoMatch
        );
        assert_eq!(
            match_address(&CHANNEL_FADER, "/ch/07/config/name"),
            MatchOutcome::NoMatch
        );
    }

    #[test]
    fn wrong_prefix_is_no_match() {
        assert_eq!(
            match_address(&CHANNEL_FADER, "/bus/07/mix/fader"),
            MatchOutcome::NoMatch
        );
    }

    #[test]
    fn wrong_length_is_no_match() {
        // Three-digit channel field does not fit the two-digit template.
        assert_eq!(
            match_address(&CHANNEL_FADER, "/ch/007/mix/fader"),
            MatchOutcome::NoMatch
        );
        assert_eq!(match_address(&CHANNEL_FADER, "/ch/07"), MatchOutcome::NoMatch);
    }

    #[test]
    fn out_of_range_index_is_still_reported_raw() {
        // 99 is beyond any model's channel count; the dispatcher reports it
        // anyway and leaves bounds-checking to the cache write.
        assert_eq!(
            match_address(&CHANNEL_FADER, "/ch/99/mix/fader"),
            MatchOutcome::Channel(99)
        );
        assert_eq!(
            match_address(&CHANNEL_FADER, "/ch/00/mix/fader"),
            MatchOutcome::Channel(0)
        );
    }

    // ---------------------------------------------------------------
    // Dispatch
    // ---------------------------------------------------------------

    #[test]
    fn dispatch_invokes_handler_on_match() {
        let msg = Message {
            addr: "/ch/07/mix/fader".into(),
            args: vec![Arg::Float(0.42)],
        };

        let mut seen = None;
        let matched = dispatch(&CHANNEL_FADER, &msg, |ch, m| {
            seen = Some((ch, m.first_float()));
        });

        assert!(matched);
        assert_eq!(seen, Some((Some(7), Some(0.42))));
    }

    #[test]
    fn dispatch_passes_none_for_channel_less_pattern() {
        let msg = Message {
            addr: "/-stat/tape/state".into(),
            args: vec![Arg::Int(2)],
        };

        let mut seen = None;
        let matched = dispatch(&TAPE_STATE, &msg, |ch, m| {
            seen = Some((ch, m.first_int()));
        });

        assert!(matched);
        assert_eq!(seen, Some((None, Some(2))));
    }

    #[test]
    fn dispatch_skips_handler_on_no_match() {
        let msg = Message::request("/ch/07/mix/pan");

        let mut called = false;
        let matched = dispatch(&CHANNEL_FADER, &msg, |_, _| called = true);

        assert!(!matched);
        assert!(!called);
    }
}
