//! Cached console state.
//!
//! The driver keeps the last-known value of every parameter it has seen a
//! reply for. Accessors on [`XAirConsole`](crate::console::XAirConsole)
//! refresh the cache from the drain window and then read it, so a missing
//! or lost reply degrades to "return the previous value" instead of an
//! error -- the protocol offers nothing better.
//!
//! All storage is sized once at construction from the model's channel and
//! mute-group counts and lives for the controller's lifetime. Indices are
//! 1-based throughout, matching the console's own addressing: reads outside
//! the valid range return `None`, writes outside it are rejected.

use mixlib_core::error::{Error, Result};

/// Maximum stored channel name length in characters.
///
/// The consoles store names in 12-byte buffers (11 characters plus the
/// terminator); longer reply payloads are truncated to match.
pub const MAX_NAME_LEN: usize = 11;

/// USB recorder transport state, as reported at `/-stat/tape/state`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TapeStatus {
    /// Transport stopped.
    #[default]
    Stop,
    /// Playback paused.
    Pause,
    /// Playing.
    Play,
    /// Record paused (armed).
    PauseRecord,
    /// Recording.
    Record,
    /// Fast-forwarding.
    FastForward,
    /// Rewinding.
    Rewind,
}

impl TapeStatus {
    /// Map a wire code to a transport state. Unknown codes return `None`.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(TapeStatus::Stop),
            1 => Some(TapeStatus::Pause),
            2 => Some(TapeStatus::Play),
            3 => Some(TapeStatus::PauseRecord),
            4 => Some(TapeStatus::Record),
            5 => Some(TapeStatus::FastForward),
            6 => Some(TapeStatus::Rewind),
            _ => None,
        }
    }

    /// The wire code for this transport state.
    pub fn code(&self) -> i32 {
        match self {
            TapeStatus::Stop => 0,
            TapeStatus::Pause => 1,
            TapeStatus::Play => 2,
            TapeStatus::PauseRecord => 3,
            TapeStatus::Record => 4,
            TapeStatus::FastForward => 5,
            TapeStatus::Rewind => 6,
        }
    }
}

/// Last-known state of a single input channel.
#[derive(Debug, Clone, Default)]
pub struct ChannelState {
    /// Display name ("" until a name reply has been seen).
    pub name: String,
    /// Fader level, normalized 0.0..=1.0 (0.0 until a reply has been seen).
    pub fader: f32,
}

/// Complete cached state of the console.
#[derive(Debug, Clone)]
pub struct ConsoleState {
    /// Per-channel state, index 0 holding channel 1.
    channels: Vec<ChannelState>,
    /// Mute group engaged flags, index 0 holding group 1.
    mute_groups: Vec<bool>,
    /// USB recorder transport state.
    tape: TapeStatus,
}

impl ConsoleState {
    /// Allocate state for a console with the given channel and mute-group
    /// complement. Every entry starts at its default (empty name, fader at
    /// 0.0, mute groups off, tape stopped).
    pub fn new(channel_count: u16, mute_group_count: u16) -> Self {
        ConsoleState {
            channels: vec![ChannelState::default(); channel_count as usize],
            mute_groups: vec![false; mute_group_count as usize],
            tape: TapeStatus::default(),
        }
    }

    /// Number of channels this cache covers.
    pub fn channel_count(&self) -> u16 {
        self.channels.len() as u16
    }

    /// Number of mute groups this cache covers.
    pub fn mute_group_count(&self) -> u16 {
        self.mute_groups.len() as u16
    }

    fn channel_slot(&self, channel: u16) -> Option<usize> {
        if (1..=self.channel_count()).contains(&channel) {
            Some(channel as usize - 1)
        } else {
            None
        }
    }

    /// Cached display name of a channel. `None` if out of range.
    pub fn channel_name(&self, channel: u16) -> Option<&str> {
        self.channel_slot(channel)
            .map(|i| self.channels[i].name.as_str())
    }

    /// Store a channel's display name, truncated to [`MAX_NAME_LEN`]
    /// characters.
    pub fn set_channel_name(&mut self, channel: u16, name: &str) -> Result<()> {
        let slot = self.channel_slot(channel).ok_or_else(|| {
            Error::InvalidParameter(format!("channel {channel} out of range"))
        })?;
        self.channels[slot].name = name.chars().take(MAX_NAME_LEN).collect();
        Ok(())
    }

    /// Cached fader level of a channel. `None` if out of range.
    pub fn fader(&self, channel: u16) -> Option<f32> {
        self.channel_slot(channel).map(|i| self.channels[i].fader)
    }

    /// Store a channel's fader level, clamped to 0.0..=1.0.
    pub fn set_fader(&mut self, channel: u16, value: f32) -> Result<()> {
        let slot = self.channel_slot(channel).ok_or_else(|| {
            Error::InvalidParameter(format!("channel {channel} out of range"))
        })?;
        self.channels[slot].fader = value.clamp(0.0, 1.0);
        Ok(())
    }

    /// Cached engaged flag of a mute group. `None` if out of range.
    pub fn mute_group(&self, group: u16) -> Option<bool> {
        if (1..=self.mute_group_count()).contains(&group) {
            Some(self.mute_groups[group as usize - 1])
        } else {
            None
        }
    }

    /// Store a mute group's engaged flag.
    pub fn set_mute_group(&mut self, group: u16, engaged: bool) -> Result<()> {
        if !(1..=self.mute_group_count()).contains(&group) {
            return Err(Error::InvalidParameter(format!(
                "mute group {group} out of range"
            )));
        }
        self.mute_groups[group as usize - 1] = engaged;
        Ok(())
    }

    /// Cached recorder transport state.
    pub fn tape(&self) -> TapeStatus {
        self.tape
    }

    /// Store the recorder transport state.
    pub fn set_tape(&mut self, status: TapeStatus) {
        self.tape = status;
    }
}
