//! Channel Voice messages: the bulk of most MIDI traffic.

use crate::prelude::*;

#[inline]
fn data(bytes: &[u8], index: usize) -> DataValue {
    DataValue::from_int_lossy(bytes[index])
}

#[inline]
#[track_caller]
fn normal_key(key: KeyNumber) -> u8 {
    match key.try_number() {
        Some(number) => number,
        None => panic!("a message can only carry a normal key"),
    }
}

#[inline]
fn channel_voice_bytes<const N: usize>(ty: MsgType, channel: Channel, data: [u8; N]) -> [u8; N] {
    let mut bytes = data;
    bytes[0] = Status::channel_voice(ty, channel).value();
    bytes
}

/// Channel accessors shared by every Channel Voice message type, and the upcast into the
/// generic [`ChanMsg`](struct.ChanMsg.html).
macro_rules! channel_accessors {
    ($name:ident) => {
        impl<B: AsRef<[u8]>> $name<B> {
            #[inline]
            pub fn channel(&self) -> Channel {
                self.status().channel()
            }
        }
        impl<B: AsRef<[u8]> + AsMut<[u8]>> $name<B> {
            /// # Panics
            ///
            /// Panics if `channel` is not a normal channel.
            #[inline]
            #[track_caller]
            pub fn set_channel(&mut self, channel: Channel) {
                let bytes = self.bytes.as_mut();
                bytes[0] = bytes[0] & 0xF0 | channel.index();
            }
        }
        impl<B> From<$name<B>> for ChanMsg<B> {
            #[inline]
            fn from(msg: $name<B>) -> ChanMsg<B> {
                ChanMsg { bytes: msg.bytes }
            }
        }
    };
}

typed_msg! {
    /// Any Channel Voice message, of 2 or 3 bytes.
    ///
    /// Owned channel messages are `ChanMsg<[u8; 2]>` or `ChanMsg<[u8; 3]>`.
    pub struct ChanMsg;
    view ChanMsgView;
    ref ChanMsgRef;
    check |status, bytes| status.is_channel_specific() => "channel voice message";
}

impl<B: AsRef<[u8]>> ChanMsg<B> {
    #[inline]
    pub fn channel(&self) -> Channel {
        self.status().channel()
    }

    #[inline]
    pub fn data1(&self) -> DataValue {
        data(self.bytes.as_ref(), 1)
    }

    /// # Panics
    ///
    /// Panics for the 2-byte Program Change and Channel Pressure messages.
    #[inline]
    #[track_caller]
    pub fn data2(&self) -> DataValue {
        assert_eq!(self.bytes.as_ref().len(), 3, "data2() called on a 2-byte message");
        data(self.bytes.as_ref(), 2)
    }
}
impl<B: AsRef<[u8]> + AsMut<[u8]>> ChanMsg<B> {
    /// # Panics
    ///
    /// Panics if `channel` is not a normal channel.
    #[inline]
    #[track_caller]
    pub fn set_channel(&mut self, channel: Channel) {
        let bytes = self.bytes.as_mut();
        bytes[0] = bytes[0] & 0xF0 | channel.index();
    }

    #[inline]
    pub fn set_data1(&mut self, value: DataValue) {
        self.bytes.as_mut()[1] = value.value();
    }

    /// # Panics
    ///
    /// Panics for 2-byte messages.
    #[inline]
    #[track_caller]
    pub fn set_data2(&mut self, value: DataValue) {
        let bytes = self.bytes.as_mut();
        assert_eq!(bytes.len(), 3, "set_data2() called on a 2-byte message");
        bytes[2] = value.value();
    }
}
impl ChanMsg<[u8; 2]> {
    /// # Panics
    ///
    /// Panics unless `ty` is a 2-byte Channel Voice type and `channel` is normal.
    #[track_caller]
    pub fn new(ty: MsgType, channel: Channel, data1: DataValue) -> ChanMsg<[u8; 2]> {
        assert_eq!(ty.num_data_bytes(), Some(1), "type does not take one data byte");
        ChanMsg {
            bytes: channel_voice_bytes(ty, channel, [0, data1.value()]),
        }
    }
}
impl ChanMsg<[u8; 3]> {
    /// # Panics
    ///
    /// Panics unless `ty` is a 3-byte Channel Voice type and `channel` is normal.
    #[track_caller]
    pub fn new(
        ty: MsgType,
        channel: Channel,
        data1: DataValue,
        data2: DataValue,
    ) -> ChanMsg<[u8; 3]> {
        assert!(ty.is_channel_specific(), "not a channel voice type");
        assert_eq!(ty.num_data_bytes(), Some(2), "type does not take two data bytes");
        ChanMsg {
            bytes: channel_voice_bytes(ty, channel, [0, data1.value(), data2.value()]),
        }
    }
}
macro_rules! owned_chan_msg {
    ($n:literal) => {
        impl FromMsg<$n> for ChanMsg<[u8; $n]> {
            #[inline]
            fn try_from_msg(msg: Msg<$n>) -> Result<ChanMsg<[u8; $n]>> {
                ChanMsg::try_from_bytes(msg.into_bytes())
            }
        }
        impl From<ChanMsg<[u8; $n]>> for Msg<$n> {
            #[inline]
            fn from(msg: ChanMsg<[u8; $n]>) -> Msg<$n> {
                Msg::from_bytes_unchecked(msg.bytes)
            }
        }
    };
}
owned_chan_msg!(2);
owned_chan_msg!(3);

typed_msg! {
    /// A Note On or Note Off message.
    ///
    /// A Note On with velocity zero is logically a Note Off: `is_note_off()` reports it as such,
    /// while the stored status byte is left untouched.
    ///
    /// ```
    /// # use midimsg::{NoteMsg, Channel, KeyNumber, DataValue, MidiBytes};
    /// let mut note = NoteMsg::note_on(Channel::new(2), KeyNumber::new(69), DataValue::new(90));
    /// assert_eq!(note.msg_bytes(), &[0x92, 0x45, 0x5A]);
    /// note.set_velocity(DataValue::new(0));
    /// assert!(note.is_note_off());
    /// assert_eq!(note.msg_bytes()[0], 0x92);
    /// ```
    pub struct NoteMsg<[u8; 3]>;
    view NoteMsgView;
    ref NoteMsgRef;
    check |status, bytes| matches!(status.msg_type(), MsgType::NoteOn | MsgType::NoteOff)
        => "note message";
}
channel_accessors!(NoteMsg);

impl NoteMsg<[u8; 3]> {
    /// # Panics
    ///
    /// Panics unless `ty` is `NoteOn` or `NoteOff`, and `channel` and `key` are normal.
    #[track_caller]
    pub fn new(ty: MsgType, channel: Channel, key: KeyNumber, velocity: DataValue) -> NoteMsg {
        assert!(
            matches!(ty, MsgType::NoteOn | MsgType::NoteOff),
            "note message type must be NoteOn or NoteOff"
        );
        NoteMsg {
            bytes: channel_voice_bytes(ty, channel, [0, normal_key(key), velocity.value()]),
        }
    }

    #[track_caller]
    pub fn note_on(channel: Channel, key: KeyNumber, velocity: DataValue) -> NoteMsg {
        NoteMsg::new(MsgType::NoteOn, channel, key, velocity)
    }

    #[track_caller]
    pub fn note_off(channel: Channel, key: KeyNumber, velocity: DataValue) -> NoteMsg {
        NoteMsg::new(MsgType::NoteOff, channel, key, velocity)
    }
}
impl<B: AsRef<[u8]>> NoteMsg<B> {
    #[inline]
    pub fn key(&self) -> KeyNumber {
        KeyNumber::from(data(self.bytes.as_ref(), 1))
    }

    #[inline]
    pub fn velocity(&self) -> DataValue {
        data(self.bytes.as_ref(), 2)
    }

    /// A Note Off, or a Note On with velocity zero.
    #[inline]
    pub fn is_note_off(&self) -> bool {
        self.msg_type() == MsgType::NoteOff || self.velocity().value() == 0
    }

    #[inline]
    pub fn is_note_on(&self) -> bool {
        !self.is_note_off()
    }
}
impl<B: AsRef<[u8]> + AsMut<[u8]>> NoteMsg<B> {
    /// Switch between `NoteOn` and `NoteOff`, keeping the channel.
    ///
    /// # Panics
    ///
    /// Panics if `ty` is neither `NoteOn` nor `NoteOff`.
    #[track_caller]
    pub fn set_type(&mut self, ty: MsgType) {
        assert!(
            matches!(ty, MsgType::NoteOn | MsgType::NoteOff),
            "note message type must be NoteOn or NoteOff"
        );
        let bytes = self.bytes.as_mut();
        bytes[0] = ty.as_byte() | bit_range(bytes[0], 0..4);
    }

    /// # Panics
    ///
    /// Panics if `key` is not a normal key.
    #[inline]
    #[track_caller]
    pub fn set_key(&mut self, key: KeyNumber) {
        self.bytes.as_mut()[1] = normal_key(key);
    }

    #[inline]
    pub fn set_velocity(&mut self, velocity: DataValue) {
        self.bytes.as_mut()[2] = velocity.value();
    }
}

typed_msg! {
    /// A Polyphonic Key Pressure (aftertouch) message.
    pub struct KeyPressureMsg<[u8; 3]>;
    view KeyPressureMsgView;
    ref KeyPressureMsgRef;
    check |status, bytes| status.msg_type() == MsgType::PolyKeyPressure
        => "polyphonic key pressure message";
}
channel_accessors!(KeyPressureMsg);

impl KeyPressureMsg<[u8; 3]> {
    /// # Panics
    ///
    /// Panics if `channel` or `key` are not normal.
    #[track_caller]
    pub fn new(channel: Channel, key: KeyNumber, pressure: DataValue) -> KeyPressureMsg {
        KeyPressureMsg {
            bytes: channel_voice_bytes(
                MsgType::PolyKeyPressure,
                channel,
                [0, normal_key(key), pressure.value()],
            ),
        }
    }
}
impl<B: AsRef<[u8]>> KeyPressureMsg<B> {
    #[inline]
    pub fn key(&self) -> KeyNumber {
        KeyNumber::from(data(self.bytes.as_ref(), 1))
    }

    #[inline]
    pub fn pressure(&self) -> DataValue {
        data(self.bytes.as_ref(), 2)
    }
}
impl<B: AsRef<[u8]> + AsMut<[u8]>> KeyPressureMsg<B> {
    /// # Panics
    ///
    /// Panics if `key` is not a normal key.
    #[inline]
    #[track_caller]
    pub fn set_key(&mut self, key: KeyNumber) {
        self.bytes.as_mut()[1] = normal_key(key);
    }

    #[inline]
    pub fn set_pressure(&mut self, pressure: DataValue) {
        self.bytes.as_mut()[2] = pressure.value();
    }
}

typed_msg! {
    /// A Control Change message, including the channel mode messages.
    ///
    /// ```
    /// # use midimsg::{ControlChangeMsg, Channel, Control, DataValue, MidiBytes};
    /// let cc = ControlChangeMsg::new(Channel::new(12), Control::MOD_WHEEL, DataValue::new(37));
    /// assert_eq!(cc.msg_bytes(), &[0xBC, 0x01, 0x25]);
    /// ```
    pub struct ControlChangeMsg<[u8; 3]>;
    view ControlChangeMsgView;
    ref ControlChangeMsgRef;
    check |status, bytes| status.msg_type() == MsgType::ControlChange
        => "control change message";
}
channel_accessors!(ControlChangeMsg);

impl ControlChangeMsg<[u8; 3]> {
    /// # Panics
    ///
    /// Panics if `channel` is not normal.
    #[track_caller]
    pub fn new(channel: Channel, control: Control, value: DataValue) -> ControlChangeMsg {
        ControlChangeMsg {
            bytes: channel_voice_bytes(
                MsgType::ControlChange,
                channel,
                [0, control.number().value(), value.value()],
            ),
        }
    }
}
impl<B: AsRef<[u8]>> ControlChangeMsg<B> {
    #[inline]
    pub fn control(&self) -> Control {
        Control::from_number(data(self.bytes.as_ref(), 1))
    }

    #[inline]
    pub fn value(&self) -> DataValue {
        data(self.bytes.as_ref(), 2)
    }
}
impl<B: AsRef<[u8]> + AsMut<[u8]>> ControlChangeMsg<B> {
    #[inline]
    pub fn set_control(&mut self, control: Control) {
        self.bytes.as_mut()[1] = control.number().value();
    }

    #[inline]
    pub fn set_value(&mut self, value: DataValue) {
        self.bytes.as_mut()[2] = value.value();
    }
}

typed_msg! {
    /// A Program Change message, selecting a preset.
    pub struct ProgramChangeMsg<[u8; 2]>;
    view ProgramChangeMsgView;
    ref ProgramChangeMsgRef;
    check |status, bytes| status.msg_type() == MsgType::ProgramChange
        => "program change message";
}
channel_accessors!(ProgramChangeMsg);

impl ProgramChangeMsg<[u8; 2]> {
    /// # Panics
    ///
    /// Panics if `channel` or `preset` are not normal.
    #[track_caller]
    pub fn new(channel: Channel, preset: PresetNumber) -> ProgramChangeMsg {
        ProgramChangeMsg {
            bytes: channel_voice_bytes(MsgType::ProgramChange, channel, [0, preset.number()]),
        }
    }
}
impl<B: AsRef<[u8]>> ProgramChangeMsg<B> {
    #[inline]
    pub fn preset(&self) -> PresetNumber {
        PresetNumber::from(data(self.bytes.as_ref(), 1))
    }
}
impl<B: AsRef<[u8]> + AsMut<[u8]>> ProgramChangeMsg<B> {
    /// # Panics
    ///
    /// Panics if `preset` is not normal.
    #[inline]
    #[track_caller]
    pub fn set_preset(&mut self, preset: PresetNumber) {
        self.bytes.as_mut()[1] = preset.number();
    }
}

typed_msg! {
    /// A Channel Pressure (channel aftertouch) message.
    pub struct ChanPressureMsg<[u8; 2]>;
    view ChanPressureMsgView;
    ref ChanPressureMsgRef;
    check |status, bytes| status.msg_type() == MsgType::ChannelPressure
        => "channel pressure message";
}
channel_accessors!(ChanPressureMsg);

impl ChanPressureMsg<[u8; 2]> {
    /// # Panics
    ///
    /// Panics if `channel` is not normal.
    #[track_caller]
    pub fn new(channel: Channel, pressure: DataValue) -> ChanPressureMsg {
        ChanPressureMsg {
            bytes: channel_voice_bytes(MsgType::ChannelPressure, channel, [0, pressure.value()]),
        }
    }
}
impl<B: AsRef<[u8]>> ChanPressureMsg<B> {
    #[inline]
    pub fn pressure(&self) -> DataValue {
        data(self.bytes.as_ref(), 1)
    }
}
impl<B: AsRef<[u8]> + AsMut<[u8]>> ChanPressureMsg<B> {
    #[inline]
    pub fn set_pressure(&mut self, pressure: DataValue) {
        self.bytes.as_mut()[1] = pressure.value();
    }
}

typed_msg! {
    /// A Pitch Bend message, carrying the bend LSB first.
    pub struct PitchBendMsg<[u8; 3]>;
    view PitchBendMsgView;
    ref PitchBendMsgRef;
    check |status, bytes| status.msg_type() == MsgType::PitchBend => "pitch bend message";
}
channel_accessors!(PitchBendMsg);

impl PitchBendMsg<[u8; 3]> {
    /// # Panics
    ///
    /// Panics if `channel` is not normal.
    #[track_caller]
    pub fn new(channel: Channel, bend: PitchBend) -> PitchBendMsg {
        PitchBendMsg {
            bytes: channel_voice_bytes(
                MsgType::PitchBend,
                channel,
                [0, bend.lsb().value(), bend.msb().value()],
            ),
        }
    }
}
impl<B: AsRef<[u8]>> PitchBendMsg<B> {
    /// The bend, with a raw zero read as `PitchBend::min()`.
    #[inline]
    pub fn pitch_bend(&self) -> PitchBend {
        let bytes = self.bytes.as_ref();
        PitchBend::from_lsb_msb(bytes[1], bytes[2])
    }
}
impl<B: AsRef<[u8]> + AsMut<[u8]>> PitchBendMsg<B> {
    #[inline]
    pub fn set_pitch_bend(&mut self, bend: PitchBend) {
        let bytes = self.bytes.as_mut();
        bytes[1] = bend.lsb().value();
        bytes[2] = bend.msb().value();
    }
}
