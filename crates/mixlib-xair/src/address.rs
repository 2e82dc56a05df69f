//! OSC address templates for the X-Air / X32 parameter tree.
//!
//! Every controllable parameter lives at a fixed path of the form
//! `/<category>/<NN>/<path...>`, where `<NN>` is a zero-padded decimal
//! channel number. An [`AddressPattern`] captures one such template --
//! the literal prefix up to the channel field, the field's digit width,
//! and the literal suffix after it -- and is used in both directions:
//! [`format`](AddressPattern::format) renders an outgoing request address,
//! and the dispatcher parses the channel number back out of a reply address
//! at the same fixed offset.
//!
//! All functions are pure; no I/O happens here.

/// One address template with a numeric channel placeholder.
///
/// `channel_digits` is the width of the decimal channel field: 2 for the
/// per-channel tree (`/ch/07/...`), 1 for mute groups (`/config/mute/3`),
/// and 0 for global parameters with no channel field at all
/// (`/-stat/tape/state`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressPattern {
    prefix: &'static str,
    channel_digits: usize,
    suffix: &'static str,
}

/// Channel display name: `/ch/NN/config/name`, reply argument: string.
pub const CHANNEL_NAME: AddressPattern = AddressPattern::new("/ch/", 2, "/config/name");

/// Channel fader level: `/ch/NN/mix/fader`, reply argument: float 0.0..=1.0.
pub const CHANNEL_FADER: AddressPattern = AddressPattern::new("/ch/", 2, "/mix/fader");

/// Mute group state: `/config/mute/N`, reply argument: int 0/1.
pub const MUTE_GROUP: AddressPattern = AddressPattern::new("/config/mute/", 1, "");

/// USB recorder transport state: `/-stat/tape/state`, reply argument: int code.
pub const TAPE_STATE: AddressPattern = AddressPattern::new("/-stat/tape/state", 0, "");

impl AddressPattern {
    /// Define a pattern from its literal parts.
    pub const fn new(prefix: &'static str, channel_digits: usize, suffix: &'static str) -> Self {
        AddressPattern {
            prefix,
            channel_digits,
            suffix,
        }
    }

    /// The literal part before the channel field.
    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// The literal part after the channel field.
    pub fn suffix(&self) -> &'static str {
        self.suffix
    }

    /// Width of the decimal channel field (0 for channel-less patterns).
    pub fn channel_digits(&self) -> usize {
        self.channel_digits
    }

    /// Character offset of the channel field within a concrete address.
    ///
    /// The field always starts immediately after the prefix.
    pub fn channel_offset(&self) -> usize {
        self.prefix.len()
    }

    /// Total length of any concrete address produced by this pattern.
    pub fn address_len(&self) -> usize {
        self.prefix.len() + self.channel_digits + self.suffix.len()
    }

    /// Render a concrete address for the given channel number.
    ///
    /// The channel is zero-padded to the pattern's field width:
    /// `CHANNEL_FADER.format(7)` yields `/ch/07/mix/fader`. For a
    /// channel-less pattern the argument is ignored and the fixed address
    /// is returned.
    pub fn format(&self, channel: u16) -> String {
        if self.channel_digits == 0 {
            return format!("{}{}", self.prefix, self.suffix);
        }
        format!(
            "{}{:0width$}{}",
            self.prefix,
            channel,
            self.suffix,
            width = self.channel_digits
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_zero_pads_channel() {
        assert_eq!(CHANNEL_NAME.format(1), "/ch/01/config/name");
        assert_eq!(CHANNEL_NAME.format(18), "/ch/18/config/name");
        assert_eq!(CHANNEL_FADER.format(7), "/ch/07/mix/fader");
        assert_eq!(CHANNEL_FADER.format(32), "/ch/32/mix/fader");
    }

    #[test]
    fn format_single_digit_field() {
        assert_eq!(MUTE_GROUP.format(1), "/config/mute/1");
        assert_eq!(MUTE_GROUP.format(4), "/config/mute/4");
    }

    #[test]
    fn format_channel_less_pattern() {
        assert_eq!(TAPE_STATE.format(0), "/-stat/tape/state");
        // The channel argument is ignored for channel-less patterns.
        assert_eq!(TAPE_STATE.format(99), "/-stat/tape/state");
    }

    #[test]
    fn channel_offset_is_prefix_len() {
        assert_eq!(CHANNEL_NAME.channel_offset(), 4);
        assert_eq!(CHANNEL_FADER.channel_offset(), 4);
        assert_eq!(MUTE_GROUP.channel_offset(), 13);
    }

    #[test]
    fn address_len_matches_format() {
        for pattern in [CHANNEL_NAME, CHANNEL_FADER, MUTE_GROUP, TAPE_STATE] {
            assert_eq!(pattern.format(1).len(), pattern.address_len());
        }
    }
}
