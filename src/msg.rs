//! Plain owned messages of a fixed size.

use crate::{prelude::*, reference::check_msg_bytes};

/// An owned MIDI message of exactly `N` bytes, `N` being 1, 2 or 3.
///
/// The first byte is always a status byte whose type requires `N - 1` data bytes, so SysEx
/// messages are never a `Msg<N>` (see [`MfrSysExMsg`](struct.MfrSysExMsg.html) and
/// [`UniversalSysExMsg`](struct.UniversalSysExMsg.html) instead).
///
/// Data byte accessors only exist for sizes that have them: `data1()` for `Msg<2>` and `Msg<3>`,
/// `data2()` for `Msg<3>`.
///
/// ```
/// # use midimsg::{Msg, Status, MsgType, Channel, DataValue, NoteMsg};
/// let msg = Msg::<3>::new(
///     Status::channel_voice(MsgType::NoteOn, Channel::new(2)),
///     DataValue::new(69),
///     DataValue::new(90),
/// );
/// assert_eq!(msg.bytes(), &[0x92, 0x45, 0x5A]);
///
/// let note = msg.to::<NoteMsg>();
/// assert!(note.is_note_on());
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Msg<const N: usize> {
    bytes: [u8; N],
}
impl<const N: usize> Msg<N> {
    /// Build a message from its raw bytes, checking that they form a complete message.
    pub fn try_from_bytes(bytes: [u8; N]) -> Result<Msg<N>> {
        let status =
            check_msg_bytes(&bytes).context(err_malformed!("invalid fixed-size message"))?;
        ensure!(
            status.num_data_bytes().is_some(),
            err_malformed!("sysex message stored as a fixed-size message")
        );
        Ok(Msg { bytes })
    }

    /// Build a message from its raw bytes.
    ///
    /// # Panics
    ///
    /// Panics if the bytes are not a complete message of `N` bytes.
    #[inline]
    #[track_caller]
    pub fn from_bytes(bytes: [u8; N]) -> Msg<N> {
        precondition(Self::try_from_bytes(bytes))
    }

    /// Only for bytes that already passed the checks of a fixed-size message.
    #[inline]
    pub(crate) fn from_bytes_unchecked(bytes: [u8; N]) -> Msg<N> {
        Msg { bytes }
    }

    #[inline]
    pub fn bytes(&self) -> &[u8; N] {
        &self.bytes
    }

    #[inline]
    pub fn into_bytes(self) -> [u8; N] {
        self.bytes
    }

    /// A read-only reference to the bytes of this message.
    #[inline]
    pub fn view(&self) -> MsgView<'_> {
        MsgView::from_checked(&self.bytes[..])
    }

    /// An independent copy of this message, typed as `T`.
    ///
    /// # Panics
    ///
    /// Panics if the message is not of the kind `T` represents.
    #[inline]
    #[track_caller]
    pub fn to<T: FromMsg<N>>(self) -> T {
        precondition(T::try_from_msg(self))
    }

    #[inline]
    pub fn try_to<T: FromMsg<N>>(self) -> Result<T> {
        T::try_from_msg(self)
    }
}

impl Msg<1> {
    /// A message without data bytes.
    ///
    /// # Panics
    ///
    /// Panics if messages with this status carry data bytes.
    #[inline]
    #[track_caller]
    pub fn new(status: Status) -> Msg<1> {
        assert_eq!(status.num_data_bytes(), Some(0), "status requires data bytes");
        Msg {
            bytes: [status.value()],
        }
    }

    #[inline]
    fn system(ty: MsgType) -> Msg<1> {
        Msg { bytes: [ty.as_byte()] }
    }

    #[inline]
    pub fn tune_request() -> Msg<1> {
        Msg::system(MsgType::OscillatorTuneRequest)
    }

    #[inline]
    pub fn timing_clock() -> Msg<1> {
        Msg::system(MsgType::TimingClock)
    }

    #[inline]
    pub fn start() -> Msg<1> {
        Msg::system(MsgType::Start)
    }

    #[inline]
    pub fn continue_() -> Msg<1> {
        Msg::system(MsgType::Continue)
    }

    #[inline]
    pub fn stop() -> Msg<1> {
        Msg::system(MsgType::Stop)
    }

    #[inline]
    pub fn active_sensing() -> Msg<1> {
        Msg::system(MsgType::ActiveSensing)
    }

    #[inline]
    pub fn system_reset() -> Msg<1> {
        Msg::system(MsgType::SystemReset)
    }
}

impl Msg<2> {
    /// A message with a single data byte.
    ///
    /// # Panics
    ///
    /// Panics if messages with this status do not carry exactly one data byte.
    #[inline]
    #[track_caller]
    pub fn new(status: Status, data1: DataValue) -> Msg<2> {
        assert_eq!(status.num_data_bytes(), Some(1), "status requires one data byte");
        Msg {
            bytes: [status.value(), data1.value()],
        }
    }

    #[inline]
    pub fn data1(&self) -> DataValue {
        DataValue::from_int_lossy(self.bytes[1])
    }

    #[inline]
    pub fn set_data1(&mut self, value: DataValue) {
        self.bytes[1] = value.value();
    }
}

impl Msg<3> {
    /// A message with two data bytes.
    ///
    /// # Panics
    ///
    /// Panics if messages with this status do not carry exactly two data bytes.
    #[inline]
    #[track_caller]
    pub fn new(status: Status, data1: DataValue, data2: DataValue) -> Msg<3> {
        assert_eq!(status.num_data_bytes(), Some(2), "status requires two data bytes");
        Msg {
            bytes: [status.value(), data1.value(), data2.value()],
        }
    }

    #[inline]
    pub fn data1(&self) -> DataValue {
        DataValue::from_int_lossy(self.bytes[1])
    }

    #[inline]
    pub fn data2(&self) -> DataValue {
        DataValue::from_int_lossy(self.bytes[2])
    }

    #[inline]
    pub fn set_data1(&mut self, value: DataValue) {
        self.bytes[1] = value.value();
    }

    #[inline]
    pub fn set_data2(&mut self, value: DataValue) {
        self.bytes[2] = value.value();
    }
}

impl<const N: usize> MidiBytes for Msg<N> {
    #[inline]
    fn msg_bytes(&self) -> &[u8] {
        &self.bytes
    }
}
impl<const N: usize> crate::reference::sealed::RawBytesMut for Msg<N> {
    #[inline]
    fn raw_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }
}
impl<const N: usize> MidiBytesMut for Msg<N> {}
impl<const N: usize> FromMsg<N> for Msg<N> {
    #[inline]
    fn try_from_msg(msg: Msg<N>) -> Result<Msg<N>> {
        Ok(msg)
    }
}
impl<'a, const N: usize> From<&'a Msg<N>> for MsgView<'a> {
    #[inline]
    fn from(msg: &'a Msg<N>) -> MsgView<'a> {
        msg.view()
    }
}
impl<const N: usize> fmt::Debug for Msg<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        crate::reference::fmt_msg("Msg", &self.bytes, f)
    }
}
