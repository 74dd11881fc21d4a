//! The status byte and the message types it encodes.

use crate::prelude::*;

/// The type of a MIDI message, as encoded in its status byte.
///
/// For Channel Voice messages the discriminant is the high nibble of the status byte, for system
/// messages it is the whole status byte.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[repr(u8)]
pub enum MsgType {
    /// Indicates that the given key should stop playing.
    NoteOff = 0x80,
    /// Indicates that the given key should start playing with the given velocity.
    NoteOn = 0x90,
    /// Indicates that the pressure on a given key has changed.
    PolyKeyPressure = 0xA0,
    /// Changes the value of a particular controller.
    ControlChange = 0xB0,
    /// Indicates that the current channel should change program.
    ProgramChange = 0xC0,
    /// Indicates that the pressure of the entire channel has changed.
    ChannelPressure = 0xD0,
    /// Indicates a new pitch bend for the entire channel.
    PitchBend = 0xE0,
    /// Starts a variable-length System Exclusive message.
    SystemExclusive = 0xF0,
    /// A single piece of a MIDI Time Code value.
    MtcQuarterFrame = 0xF1,
    /// The number of sixteenth notes that have elapsed since the start of the song.
    SongPositionPointer = 0xF2,
    /// Selects a given song index.
    SongSelect = 0xF3,
    /// Used with analog synthesizers to request that all oscillators be tuned.
    OscillatorTuneRequest = 0xF6,
    /// Terminates a System Exclusive message.
    EndOfSystemExclusive = 0xF7,
    /// If sent, these should be sent 24 times per quarter note.
    TimingClock = 0xF8,
    /// Request the devices to start playing at the beginning of the sequence.
    Start = 0xFA,
    /// Request the devices to continue playing from the current song position.
    Continue = 0xFB,
    /// Request the devices to stop playing, keeping the position where they stopped.
    Stop = 0xFC,
    /// Once one of these messages is transmitted, a message should arrive every 300ms or else the
    /// connection is considered broken.
    ActiveSensing = 0xFE,
    /// Request the devices to reset to their power-up condition.
    SystemReset = 0xFF,
}
impl MsgType {
    /// Every message type, in status byte order.
    pub const ALL: [MsgType; 19] = [
        MsgType::NoteOff,
        MsgType::NoteOn,
        MsgType::PolyKeyPressure,
        MsgType::ControlChange,
        MsgType::ProgramChange,
        MsgType::ChannelPressure,
        MsgType::PitchBend,
        MsgType::SystemExclusive,
        MsgType::MtcQuarterFrame,
        MsgType::SongPositionPointer,
        MsgType::SongSelect,
        MsgType::OscillatorTuneRequest,
        MsgType::EndOfSystemExclusive,
        MsgType::TimingClock,
        MsgType::Start,
        MsgType::Continue,
        MsgType::Stop,
        MsgType::ActiveSensing,
        MsgType::SystemReset,
    ];

    /// Classify a status byte, returning `None` for data bytes and for the undefined system
    /// status bytes `0xF4`, `0xF5`, `0xF9` and `0xFD`.
    #[inline]
    pub fn from_status_byte(status: u8) -> Option<MsgType> {
        use self::MsgType::*;
        Some(match status {
            0x80..=0x8F => NoteOff,
            0x90..=0x9F => NoteOn,
            0xA0..=0xAF => PolyKeyPressure,
            0xB0..=0xBF => ControlChange,
            0xC0..=0xCF => ProgramChange,
            0xD0..=0xDF => ChannelPressure,
            0xE0..=0xEF => PitchBend,
            0xF0 => SystemExclusive,
            0xF1 => MtcQuarterFrame,
            0xF2 => SongPositionPointer,
            0xF3 => SongSelect,
            0xF6 => OscillatorTuneRequest,
            0xF7 => EndOfSystemExclusive,
            0xF8 => TimingClock,
            0xFA => Start,
            0xFB => Continue,
            0xFC => Stop,
            0xFE => ActiveSensing,
            0xFF => SystemReset,
            _ => return None,
        })
    }

    /// The status byte for system types, or the status byte of channel 0 for channel types.
    #[inline]
    pub fn as_byte(self) -> u8 {
        self as u8
    }

    /// The high nibble of the status byte.
    #[inline]
    pub fn status_nibble(self) -> u8 {
        self as u8 >> 4
    }

    /// Whether messages of this type carry a channel in their status byte.
    #[inline]
    pub fn is_channel_specific(self) -> bool {
        (self as u8) < 0xF0
    }

    /// Same as [`is_channel_specific`](#method.is_channel_specific).
    #[inline]
    pub fn is_channel_voice(self) -> bool {
        self.is_channel_specific()
    }

    /// System Common messages, including System Exclusive and its terminator.
    #[inline]
    pub fn is_system_common(self) -> bool {
        (0xF0..0xF8).contains(&(self as u8))
    }

    /// One-byte System Real-Time messages.
    #[inline]
    pub fn is_system_realtime(self) -> bool {
        self as u8 >= 0xF8
    }

    /// The fixed number of data bytes following the status byte, or `None` for the
    /// variable-length System Exclusive message.
    #[inline]
    pub fn num_data_bytes(self) -> Option<usize> {
        use self::MsgType::*;
        Some(match self {
            NoteOff | NoteOn | PolyKeyPressure | ControlChange | PitchBend => 2,
            ProgramChange | ChannelPressure => 1,
            SystemExclusive => return None,
            MtcQuarterFrame | SongSelect => 1,
            SongPositionPointer => 2,
            OscillatorTuneRequest | EndOfSystemExclusive => 0,
            TimingClock | Start | Continue | Stop | ActiveSensing | SystemReset => 0,
        })
    }
}
impl From<MsgType> for u8 {
    #[inline]
    fn from(ty: MsgType) -> u8 {
        ty.as_byte()
    }
}

/// The first byte of every MIDI message, fusing a [`MsgType`](enum.MsgType.html) with the
/// channel for Channel Voice messages.
///
/// Always holds a defined status byte (`>= 0x80` and not one of the undefined system bytes).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Status(u8);
impl Status {
    /// The status of a Channel Voice message.
    ///
    /// # Panics
    ///
    /// Panics if `ty` is not a Channel Voice type or `channel` is not a normal channel.
    #[inline]
    #[track_caller]
    pub fn channel_voice(ty: MsgType, channel: Channel) -> Status {
        assert!(
            ty.is_channel_specific(),
            "channel voice status needs a channel voice type"
        );
        Status(ty as u8 | channel.index())
    }

    /// The status of a system message.
    ///
    /// # Panics
    ///
    /// Panics if `ty` is a Channel Voice type.
    #[inline]
    #[track_caller]
    pub fn system(ty: MsgType) -> Status {
        assert!(
            !ty.is_channel_specific(),
            "system status cannot have a channel voice type"
        );
        Status(ty as u8)
    }

    /// Interpret a raw byte as a status byte.
    ///
    /// Returns `None` for data bytes and undefined system status bytes.
    #[inline]
    pub fn try_from_byte(byte: u8) -> Option<Status> {
        MsgType::from_status_byte(byte).map(|_| Status(byte))
    }

    /// Only for bytes already checked to be defined status bytes.
    #[inline]
    pub(crate) fn from_byte_unchecked(byte: u8) -> Status {
        debug_assert!(MsgType::from_status_byte(byte).is_some());
        Status(byte)
    }

    /// The raw status byte.
    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn msg_type(self) -> MsgType {
        match MsgType::from_status_byte(self.0) {
            Some(ty) => ty,
            None => unreachable!("status holds an undefined status byte"),
        }
    }

    #[inline]
    pub fn is_channel_specific(self) -> bool {
        self.0 < 0xF0
    }

    /// The channel of a Channel Voice status, or `Channel::none()` for system statuses.
    #[inline]
    pub fn channel(self) -> Channel {
        if self.is_channel_specific() {
            Channel::from_status_nibble(self.0)
        } else {
            Channel::none()
        }
    }

    /// Same as `MsgType::num_data_bytes` on this status' type.
    #[inline]
    pub fn num_data_bytes(self) -> Option<usize> {
        self.msg_type().num_data_bytes()
    }
}
impl From<Status> for u8 {
    #[inline]
    fn from(status: Status) -> u8 {
        status.0
    }
}
impl fmt::Debug for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_channel_specific() {
            write!(
                f,
                "Status({:?}, {:?}: 0x{:02X})",
                self.msg_type(),
                self.channel(),
                self.0
            )
        } else {
            write!(f, "Status({:?}: 0x{:02X})", self.msg_type(), self.0)
        }
    }
}
