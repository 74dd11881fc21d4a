//! System Common messages with data bytes.

use crate::{
    mtc::{MtcFullFrame, QuarterFramePiece},
    prelude::*,
};

typed_msg! {
    /// One piece of a MIDI Time Code frame, sent four times per frame.
    ///
    /// The data byte is `0nnn dddd`: the piece in the upper 3 bits, its value in the lower 4.
    pub struct MtcQuarterFrameMsg<[u8; 2]>;
    view MtcQuarterFrameMsgView;
    ref MtcQuarterFrameMsgRef;
    check |status, bytes| status.msg_type() == MsgType::MtcQuarterFrame
        => "mtc quarter frame message";
}

impl MtcQuarterFrameMsg<[u8; 2]> {
    /// # Panics
    ///
    /// Panics if `value` does not fit in 4 bits.
    #[track_caller]
    pub fn new(piece: QuarterFramePiece, value: u8) -> MtcQuarterFrameMsg {
        assert!(value <= 0x0F, "quarter frame value does not fit in 4 bits");
        MtcQuarterFrameMsg::with_data_byte(DataValue::from_int_lossy(piece.as_code() << 4 | value))
    }

    /// The quarter frame carrying `piece` of `full`.
    #[inline]
    pub fn piece_of(full: &MtcFullFrame, piece: QuarterFramePiece) -> MtcQuarterFrameMsg {
        MtcQuarterFrameMsg::with_data_byte(full.quarter_frame_data_byte_for(piece))
    }

    #[inline]
    fn with_data_byte(data_byte: DataValue) -> MtcQuarterFrameMsg {
        MtcQuarterFrameMsg {
            bytes: [MsgType::MtcQuarterFrame.as_byte(), data_byte.value()],
        }
    }
}
impl<B: AsRef<[u8]>> MtcQuarterFrameMsg<B> {
    #[inline]
    pub fn data_byte(&self) -> DataValue {
        DataValue::from_int_lossy(self.bytes.as_ref()[1])
    }

    #[inline]
    pub fn piece(&self) -> QuarterFramePiece {
        QuarterFramePiece::ALL[bit_range(self.data_byte().value(), 4..7) as usize]
    }

    #[inline]
    pub fn value_in_lower_4_bits(&self) -> u8 {
        bit_range(self.data_byte().value(), 0..4)
    }
}
impl<B: AsRef<[u8]> + AsMut<[u8]>> MtcQuarterFrameMsg<B> {
    #[inline]
    pub fn set_data_byte(&mut self, data_byte: DataValue) {
        self.bytes.as_mut()[1] = data_byte.value();
    }

    #[inline]
    pub fn set_piece(&mut self, piece: QuarterFramePiece) {
        let value = self.value_in_lower_4_bits();
        self.set_data_byte(DataValue::from_int_lossy(piece.as_code() << 4 | value));
    }

    /// Only the lower 4 bits of `value` are used.
    #[inline]
    pub fn set_value_from_lower_4_bits(&mut self, value: u8) {
        let piece = self.piece().as_code();
        self.set_data_byte(DataValue::from_int_lossy(piece << 4 | value & 0x0F));
    }
}

typed_msg! {
    /// The Song Position Pointer: how many sixteenth notes (6 MIDI clocks) since the start of
    /// the song.
    pub struct SongPosMsg<[u8; 3]>;
    view SongPosMsgView;
    ref SongPosMsgRef;
    check |status, bytes| status.msg_type() == MsgType::SongPositionPointer
        => "song position pointer message";
}

impl SongPosMsg<[u8; 3]> {
    #[inline]
    pub fn new(sixteenths_after_start: DoubleDataValue) -> SongPosMsg {
        SongPosMsg {
            bytes: [
                MsgType::SongPositionPointer.as_byte(),
                sixteenths_after_start.lsb().value(),
                sixteenths_after_start.msb().value(),
            ],
        }
    }
}
impl<B: AsRef<[u8]>> SongPosMsg<B> {
    #[inline]
    pub fn sixteenths_after_start(&self) -> DoubleDataValue {
        let bytes = self.bytes.as_ref();
        DoubleDataValue::from_lsb_msb(bytes[1], bytes[2])
    }
}
impl<B: AsRef<[u8]> + AsMut<[u8]>> SongPosMsg<B> {
    #[inline]
    pub fn set_sixteenths_after_start(&mut self, sixteenths: DoubleDataValue) {
        let bytes = self.bytes.as_mut();
        bytes[1] = sixteenths.lsb().value();
        bytes[2] = sixteenths.msb().value();
    }
}

typed_msg! {
    /// Selects the song or sequence to play.
    pub struct SongSelectMsg<[u8; 2]>;
    view SongSelectMsgView;
    ref SongSelectMsgRef;
    check |status, bytes| status.msg_type() == MsgType::SongSelect => "song select message";
}

impl SongSelectMsg<[u8; 2]> {
    /// # Panics
    ///
    /// Panics if `song` is not a normal preset number.
    #[track_caller]
    pub fn new(song: PresetNumber) -> SongSelectMsg {
        SongSelectMsg {
            bytes: [MsgType::SongSelect.as_byte(), song.number()],
        }
    }
}
impl<B: AsRef<[u8]>> SongSelectMsg<B> {
    #[inline]
    pub fn song(&self) -> PresetNumber {
        PresetNumber::from(DataValue::from_int_lossy(self.bytes.as_ref()[1]))
    }
}
impl<B: AsRef<[u8]> + AsMut<[u8]>> SongSelectMsg<B> {
    /// # Panics
    ///
    /// Panics if `song` is not a normal preset number.
    #[inline]
    #[track_caller]
    pub fn set_song(&mut self, song: PresetNumber) {
        self.bytes.as_mut()[1] = song.number();
    }
}
