//! MIDI Time Code: a packed `HH:MM:SS:FF` frame with its rate, and the eight quarter-frame
//! pieces it is transmitted as.

use crate::{
    id::{Device, UniversalType},
    prelude::*,
    sysex::{UniversalSysExBuilder, UniversalSysExMsg, UniversalSysExMsgRef},
};

/// One of the four frame rates MIDI Time Code can carry, as the 2-bit code stored with the hour.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum MtcRate {
    /// 24 frames per second.
    Fps24NonDrop = 0,
    /// 25 frames per second.
    Fps25NonDrop = 1,
    /// Actually `29.97 = 30 / 1.001` frames per second, counted as 30 with frames `0` and `1`
    /// skipped at the start of every minute not divisible by ten.
    Fps29_97Drop = 2,
    /// 30 frames per second.
    Fps30NonDrop = 3,
}
impl MtcRate {
    /// Does the conversion from a 2-bit rate code. The upper bits are ignored.
    #[inline]
    pub fn from_code(code: u8) -> MtcRate {
        match code & 0b11 {
            0 => MtcRate::Fps24NonDrop,
            1 => MtcRate::Fps25NonDrop,
            2 => MtcRate::Fps29_97Drop,
            _ => MtcRate::Fps30NonDrop,
        }
    }

    /// Does the conversion to a 2-bit rate code.
    #[inline]
    pub fn as_code(self) -> u8 {
        self as u8
    }

    /// Converts an integer representing the semantic fps to a rate (ie. `24` -> `Fps24NonDrop`).
    #[inline]
    pub fn from_int(fps: u8) -> Option<MtcRate> {
        Some(match fps {
            24 => MtcRate::Fps24NonDrop,
            25 => MtcRate::Fps25NonDrop,
            29 => MtcRate::Fps29_97Drop,
            30 => MtcRate::Fps30NonDrop,
            _ => return None,
        })
    }

    /// The number of frame numbers in a second: 30 for 29.97 drop frame.
    #[inline]
    pub fn nominal_fps(self) -> u8 {
        match self {
            MtcRate::Fps24NonDrop => 24,
            MtcRate::Fps25NonDrop => 25,
            MtcRate::Fps29_97Drop | MtcRate::Fps30NonDrop => 30,
        }
    }

    /// The highest valid frame number.
    #[inline]
    pub fn max_frame(self) -> u8 {
        self.nominal_fps() - 1
    }

    /// Get the actual fps out.
    #[inline]
    pub fn frames_per_second(self) -> f64 {
        match self {
            MtcRate::Fps29_97Drop => 30.0 / 1.001,
            _ => self.nominal_fps() as f64,
        }
    }

    #[inline]
    pub fn is_drop_frame_rate(self) -> bool {
        self == MtcRate::Fps29_97Drop
    }
}
impl Default for MtcRate {
    fn default() -> MtcRate {
        MtcRate::Fps24NonDrop
    }
}

/// The different slices of an MTC frame that a quarter-frame message can carry.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum QuarterFramePiece {
    /// The low nibble of the frame count.
    FrameLowerBits = 0,
    /// The top bit of the frame count.
    FrameUpperBit = 1,
    /// The low nibble of the second count.
    SecLowerBits = 2,
    /// The top two bits of the second count.
    SecUpperBits = 3,
    /// The low nibble of the minute count.
    MinLowerBits = 4,
    /// The top two bits of the minute count.
    MinUpperBits = 5,
    /// The low nibble of the hour count.
    HourLowerBits = 6,
    /// The rate code and the top bit of the hour count.
    RateHourUpperBits = 7,
}
impl QuarterFramePiece {
    /// The pieces in transmission order.
    pub const ALL: [QuarterFramePiece; 8] = [
        QuarterFramePiece::FrameLowerBits,
        QuarterFramePiece::FrameUpperBit,
        QuarterFramePiece::SecLowerBits,
        QuarterFramePiece::SecUpperBits,
        QuarterFramePiece::MinLowerBits,
        QuarterFramePiece::MinUpperBits,
        QuarterFramePiece::HourLowerBits,
        QuarterFramePiece::RateHourUpperBits,
    ];

    /// The piece encoded in the upper 3 bits of a quarter-frame data byte.
    #[inline]
    pub fn from_code(code: u8) -> Option<QuarterFramePiece> {
        QuarterFramePiece::ALL.get(code as usize).copied()
    }

    #[inline]
    pub fn as_code(self) -> u8 {
        self as u8
    }

    /// Where this piece lives inside `MtcFullFrame`: byte index and bit mask.
    #[inline]
    fn location(self) -> (usize, u8) {
        use self::QuarterFramePiece::*;
        match self {
            FrameLowerBits => (3, 0b0000_1111),
            FrameUpperBit => (3, 0b0001_0000),
            SecLowerBits => (2, 0b0000_1111),
            SecUpperBits => (2, 0b0011_0000),
            MinLowerBits => (1, 0b0000_1111),
            MinUpperBits => (1, 0b0011_0000),
            HourLowerBits => (0, 0b0000_1111),
            RateHourUpperBits => (0, 0b0111_0000),
        }
    }
}

/// A MIDI Time Code frame, packed the way it travels: `[0rrh hhhh, 00mm mmmm, 00ss ssss,
/// 000f ffff]`.
///
/// Setters check the plain ranges (`HH <= 23`, `MM <= 59`, `SS <= 59`, `FF <= 29`), but not the
/// frame limit of the rate nor dropped frames: a frame assembled from quarter frames goes through
/// invalid states while its pieces arrive. Call [`is_valid`](#method.is_valid) once it is complete.
///
/// ```
/// # use midimsg::{MtcFullFrame, MtcRate, QuarterFramePiece};
/// let frame = MtcFullFrame::new(MtcRate::Fps25NonDrop, 23, 59, 7, 24);
/// assert!(frame.is_valid());
///
/// let mut received = MtcFullFrame::default();
/// for &piece in QuarterFramePiece::ALL.iter().rev() {
///     received.set_piece_from_quarter_frame_data_byte(frame.quarter_frame_data_byte_for(piece));
/// }
/// assert_eq!(received, frame);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct MtcFullFrame {
    bytes: [u8; 4],
}
impl MtcFullFrame {
    const HOUR_MASK: u8 = 0b0001_1111;
    const RATE_MASK: u8 = 0b0110_0000;
    const MIN_SEC_MASK: u8 = 0b0011_1111;
    const FRAME_MASK: u8 = 0b0001_1111;

    /// # Panics
    ///
    /// Panics if any field is out of its plain range.
    #[track_caller]
    pub fn new(rate: MtcRate, hh: u8, mm: u8, ss: u8, ff: u8) -> MtcFullFrame {
        let mut frame = MtcFullFrame::default();
        frame.set_rate(rate);
        frame.set_hh(hh);
        frame.set_mm(mm);
        frame.set_ss(ss);
        frame.set_ff(ff);
        frame
    }

    /// Take the packed bytes as they are, dropping the bits outside of the layout.
    ///
    /// Nothing else is checked; see [`is_valid`](#method.is_valid).
    #[inline]
    pub fn from_packed_bytes(bytes: [u8; 4]) -> MtcFullFrame {
        MtcFullFrame {
            bytes: [
                bytes[0] & (Self::RATE_MASK | Self::HOUR_MASK),
                bytes[1] & Self::MIN_SEC_MASK,
                bytes[2] & Self::MIN_SEC_MASK,
                bytes[3] & Self::FRAME_MASK,
            ],
        }
    }

    #[inline]
    pub fn packed_bytes(&self) -> [u8; 4] {
        self.bytes
    }

    #[inline]
    pub fn rate(&self) -> MtcRate {
        MtcRate::from_code(bit_range(self.bytes[0], 5..7))
    }

    #[inline]
    pub fn hh(&self) -> u8 {
        self.bytes[0] & Self::HOUR_MASK
    }

    #[inline]
    pub fn mm(&self) -> u8 {
        self.bytes[1] & Self::MIN_SEC_MASK
    }

    #[inline]
    pub fn ss(&self) -> u8 {
        self.bytes[2] & Self::MIN_SEC_MASK
    }

    #[inline]
    pub fn ff(&self) -> u8 {
        self.bytes[3] & Self::FRAME_MASK
    }

    #[inline]
    pub fn set_rate(&mut self, rate: MtcRate) {
        self.bytes[0] = self.bytes[0] & Self::HOUR_MASK | rate.as_code() << 5;
    }

    /// # Panics
    ///
    /// Panics if `hh > 23`.
    #[inline]
    #[track_caller]
    pub fn set_hh(&mut self, hh: u8) {
        assert!(hh <= 23, "mtc hours out of range");
        self.bytes[0] = self.bytes[0] & Self::RATE_MASK | hh & Self::HOUR_MASK;
    }

    /// # Panics
    ///
    /// Panics if `mm > 59`.
    #[inline]
    #[track_caller]
    pub fn set_mm(&mut self, mm: u8) {
        assert!(mm <= 59, "mtc minutes out of range");
        self.bytes[1] = mm & Self::MIN_SEC_MASK;
    }

    /// # Panics
    ///
    /// Panics if `ss > 59`.
    #[inline]
    #[track_caller]
    pub fn set_ss(&mut self, ss: u8) {
        assert!(ss <= 59, "mtc seconds out of range");
        self.bytes[2] = ss & Self::MIN_SEC_MASK;
    }

    /// Accepts up to frame 29 whatever the rate.
    ///
    /// # Panics
    ///
    /// Panics if `ff > 29`.
    #[inline]
    #[track_caller]
    pub fn set_ff(&mut self, ff: u8) {
        assert!(ff <= 29, "mtc frames out of range");
        self.bytes[3] = ff & Self::FRAME_MASK;
    }

    /// The highest valid frame number at `rate`.
    #[inline]
    pub fn max_frame(rate: MtcRate) -> u8 {
        rate.max_frame()
    }

    /// Whether `mm:ss:ff` is one of the frame numbers skipped by 29.97 drop-frame counting.
    /// Never true for the other rates.
    #[inline]
    pub fn is_drop_frame(rate: MtcRate, mm: u8, ss: u8, ff: u8) -> bool {
        rate.is_drop_frame_rate() && ss == 0 && mm % 10 != 0 && ff < 2
    }

    /// Every field in range for the rate, and not a dropped frame.
    pub fn is_valid(&self) -> bool {
        let rate = self.rate();
        self.hh() <= 23
            && self.mm() <= 59
            && self.ss() <= 59
            && self.ff() <= rate.max_frame()
            && !MtcFullFrame::is_drop_frame(rate, self.mm(), self.ss(), self.ff())
    }

    /// The data byte of the quarter-frame message carrying `piece`: the piece code in the upper
    /// 3 bits, its slice of the frame in the lower 4.
    #[inline]
    pub fn quarter_frame_data_byte_for(&self, piece: QuarterFramePiece) -> DataValue {
        let (index, mask) = piece.location();
        let shift = mask.trailing_zeros();
        let value = (self.bytes[index] & mask) >> shift;
        DataValue::from_int_lossy(piece.as_code() << 4 | value)
    }

    /// Store the slice of the frame carried by a quarter-frame data byte.
    ///
    /// The frame can be invalid until all eight pieces have been set.
    #[inline]
    pub fn set_piece_from_quarter_frame_data_byte(&mut self, data_byte: DataValue) {
        let byte = data_byte.value();
        let piece = QuarterFramePiece::ALL[bit_range(byte, 4..7) as usize];
        let (index, mask) = piece.location();
        let shift = mask.trailing_zeros();
        let value = (bit_range(byte, 0..4) << shift) & mask;
        self.bytes[index] = self.bytes[index] & !mask | value;
    }

    /// The actual frame rate, `30 / 1.001` for 29.97 drop frame.
    #[inline]
    pub fn frames_per_second(&self) -> f64 {
        self.rate().frames_per_second()
    }

    /// The number of frames actually elapsed since `00:00:00:00`, skipping dropped frames.
    pub fn total_frames(&self) -> u32 {
        let rate = self.rate();
        let minutes = self.hh() as u32 * 60 + self.mm() as u32;
        let seconds = minutes * 60 + self.ss() as u32;
        let nominal = seconds * rate.nominal_fps() as u32 + self.ff() as u32;
        if rate.is_drop_frame_rate() {
            nominal - 2 * (minutes - minutes / 10)
        } else {
            nominal
        }
    }

    /// The time since `00:00:00:00` in seconds.
    #[inline]
    pub fn as_seconds(&self) -> f64 {
        self.total_frames() as f64 / self.frames_per_second()
    }

    /// Number of bytes in the full message, `F0 7F dev 01 01 hr mn sc fr F7`.
    pub const FULL_MESSAGE_LEN: usize = 10;

    fn full_message_builder(device: Device) -> UniversalSysExBuilder {
        UniversalSysExBuilder::new(device, UniversalType::MTC_FULL_MESSAGE)
            .with_num_payload_bytes(4)
    }

    /// Write the realtime universal full message carrying this frame into `buf`.
    ///
    /// # Panics
    ///
    /// Panics if `buf` is not exactly [`FULL_MESSAGE_LEN`](#associatedconstant.FULL_MESSAGE_LEN)
    /// bytes long.
    #[track_caller]
    pub fn write_full_message<'a>(
        &self,
        device: Device,
        buf: &'a mut [u8],
    ) -> UniversalSysExMsgRef<'a> {
        let mut msg = Self::full_message_builder(device).build_as_ref_to_bytes(buf);
        msg.raw_payload_bytes_mut().copy_from_slice(&self.bytes);
        msg
    }

    /// The realtime universal full message carrying this frame.
    #[cfg(feature = "alloc")]
    pub fn to_full_message(&self, device: Device) -> UniversalSysExMsg<Vec<u8>> {
        let mut msg = Self::full_message_builder(device).build_on_heap();
        msg.raw_payload_bytes_mut().copy_from_slice(&self.bytes);
        msg
    }

    /// Read the frame out of a full message.
    pub fn try_from_full_message<B: AsRef<[u8]>>(
        msg: &UniversalSysExMsg<B>,
    ) -> Result<MtcFullFrame> {
        ensure!(
            msg.universal_type() == UniversalType::MTC_FULL_MESSAGE,
            err_mismatch!("not an mtc full message")
        );
        let payload = msg.raw_payload_bytes();
        ensure!(
            payload.len() == 4,
            err_malformed!("mtc full message payload is not 4 bytes")
        );
        let mut bytes = [0; 4];
        bytes.copy_from_slice(payload);
        Ok(MtcFullFrame::from_packed_bytes(bytes))
    }

    /// # Panics
    ///
    /// Panics if `msg` is not an MTC full message with a 4-byte payload.
    #[track_caller]
    pub fn from_full_message<B: AsRef<[u8]>>(msg: &UniversalSysExMsg<B>) -> MtcFullFrame {
        precondition(Self::try_from_full_message(msg))
    }
}
impl fmt::Debug for MtcFullFrame {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "MtcFullFrame({:?} {})", self.rate(), self)
    }
}
impl fmt::Display for MtcFullFrame {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.hh(),
            self.mm(),
            self.ss(),
            self.ff()
        )
    }
}
