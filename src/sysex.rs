//! System Exclusive messages: variable length, framed by `0xF0 .. 0xF7`.
//!
//! Besides the references over caller-owned bytes, SysEx messages can own their bytes in a
//! `Vec<u8>` (with the `alloc` feature). The builders write the framing and header and leave the
//! payload zero-filled for the caller to populate.

use crate::{
    id::{Device, Manufacturer, UniversalCategory, UniversalType},
    prelude::*,
};

const SYSEX: u8 = 0xF0;
const EOX: u8 = 0xF7;

/// The bytes between `0xF0` and `0xF7`. Only called on bytes that passed `check_msg_bytes`.
#[inline]
fn body(bytes: &[u8]) -> &[u8] {
    &bytes[1..bytes.len() - 1]
}

typed_msg! {
    /// Any System Exclusive message, manufacturer-specific or universal.
    pub struct SysExMsg;
    view SysExMsgView;
    ref SysExMsgRef;
    check |status, bytes| status.msg_type() == MsgType::SystemExclusive => "sysex message";
}

impl<B: AsRef<[u8]>> SysExMsg<B> {
    /// The byte following `0xF0`, or `None` for the empty message `F0 F7`.
    #[inline]
    pub fn sys_ex_id(&self) -> Option<u8> {
        body(self.bytes.as_ref()).first().copied()
    }

    /// Whether this is a non-realtime (`0x7E`) or realtime (`0x7F`) universal message.
    #[inline]
    pub fn is_universal(&self) -> bool {
        self.sys_ex_id()
            .and_then(UniversalCategory::from_sys_ex_id)
            .is_some()
    }

    /// All the bytes between `0xF0` and `0xF7`.
    #[inline]
    pub fn data_bytes(&self) -> &[u8] {
        body(self.bytes.as_ref())
    }

    #[cfg(feature = "alloc")]
    pub fn to_owned_msg(&self) -> SysExMsg<Vec<u8>> {
        SysExMsg {
            bytes: self.bytes.as_ref().to_vec(),
        }
    }
}
impl<B> From<MfrSysExMsg<B>> for SysExMsg<B> {
    #[inline]
    fn from(msg: MfrSysExMsg<B>) -> SysExMsg<B> {
        SysExMsg { bytes: msg.bytes }
    }
}
impl<B> From<UniversalSysExMsg<B>> for SysExMsg<B> {
    #[inline]
    fn from(msg: UniversalSysExMsg<B>) -> SysExMsg<B> {
        SysExMsg { bytes: msg.bytes }
    }
}

typed_msg! {
    /// A manufacturer-specific SysEx message: `F0`, the manufacturer ID, the payload, `F7`.
    ///
    /// ```
    /// # use midimsg::{MfrSysExBuilder, Manufacturer, MidiBytes};
    /// let mut bytes = [0; 6];
    /// let mut msg = MfrSysExBuilder::new(Manufacturer::NON_COMMERCIAL)
    ///     .with_num_payload_bytes(3)
    ///     .build_as_ref_to_bytes(&mut bytes);
    /// msg.raw_payload_bytes_mut().copy_from_slice(&[0x20, 0x21, 0x22]);
    /// assert_eq!(msg.msg_bytes(), &[0xF0, 0x7D, 0x20, 0x21, 0x22, 0xF7]);
    /// ```
    pub struct MfrSysExMsg;
    view MfrSysExMsgView;
    ref MfrSysExMsgRef;
    check |status, bytes| status.msg_type() == MsgType::SystemExclusive
        && Manufacturer::from_id_bytes(body(bytes)).is_some()
        => "manufacturer sysex message";
}

impl<B: AsRef<[u8]>> MfrSysExMsg<B> {
    #[inline]
    fn id(&self) -> Manufacturer {
        match Manufacturer::from_id_bytes(body(self.bytes.as_ref())) {
            Some(mfr) => mfr,
            None => unreachable!("manufacturer sysex without manufacturer id"),
        }
    }

    /// The first manufacturer ID byte.
    #[inline]
    pub fn sys_ex_id(&self) -> u8 {
        self.bytes.as_ref()[1]
    }

    /// Always `false`.
    #[inline]
    pub fn is_universal(&self) -> bool {
        false
    }

    #[inline]
    pub fn manufacturer(&self) -> Manufacturer {
        self.id()
    }

    /// `0xF0` plus the 1 or 3 manufacturer ID bytes.
    #[inline]
    pub fn num_header_bytes(&self) -> usize {
        1 + self.id().num_id_bytes()
    }

    #[inline]
    pub fn raw_payload_bytes(&self) -> &[u8] {
        let bytes = self.bytes.as_ref();
        &bytes[self.num_header_bytes()..bytes.len() - 1]
    }

    #[inline]
    pub fn num_payload_bytes(&self) -> usize {
        self.bytes.as_ref().len() - 1 - self.num_header_bytes()
    }

    #[cfg(feature = "alloc")]
    pub fn to_owned_msg(&self) -> MfrSysExMsg<Vec<u8>> {
        MfrSysExMsg {
            bytes: self.bytes.as_ref().to_vec(),
        }
    }
}
impl<B: AsRef<[u8]> + AsMut<[u8]>> MfrSysExMsg<B> {
    /// The payload, for the caller to fill in. Bytes are not checked: keep them below `0x80`.
    #[inline]
    pub fn raw_payload_bytes_mut(&mut self) -> &mut [u8] {
        let start = self.num_header_bytes();
        let bytes = self.bytes.as_mut();
        let end = bytes.len() - 1;
        &mut bytes[start..end]
    }
}

typed_msg! {
    /// A universal SysEx message: `F0`, category, device, sub-ID#1, sub-ID#2 for the types that
    /// have one, the payload, `F7`.
    ///
    /// ```
    /// # use midimsg::{UniversalSysExMsgView, UniversalType, UniversalCategory, Device};
    /// let bytes = [0xF0, 0x7E, 0x16, 0x7F, 0x3D, 0xF7];
    /// let ack = UniversalSysExMsgView::from_bytes(&bytes[..]);
    /// assert_eq!(ack.category(), UniversalCategory::NonRealTime);
    /// assert_eq!(ack.universal_type(), UniversalType::ACK);
    /// assert_eq!(ack.device(), Device::new(0x16));
    /// assert_eq!(ack.raw_payload_bytes(), &[0x3D]);
    /// ```
    pub struct UniversalSysExMsg;
    view UniversalSysExMsgView;
    ref UniversalSysExMsgRef;
    check |status, bytes| status.msg_type() == MsgType::SystemExclusive
        && UniversalType::from_header_bytes(body(bytes)).is_some()
        => "universal sysex message";
}

impl<B: AsRef<[u8]>> UniversalSysExMsg<B> {
    /// Either `0x7E` or `0x7F`.
    #[inline]
    pub fn sys_ex_id(&self) -> u8 {
        self.bytes.as_ref()[1]
    }

    /// Always `true`.
    #[inline]
    pub fn is_universal(&self) -> bool {
        true
    }

    #[inline]
    pub fn category(&self) -> UniversalCategory {
        self.universal_type().category()
    }

    #[inline]
    pub fn device(&self) -> Device {
        Device::from(DataValue::from_int_lossy(self.bytes.as_ref()[2]))
    }

    #[inline]
    pub fn universal_type(&self) -> UniversalType {
        match UniversalType::from_header_bytes(body(self.bytes.as_ref())) {
            Some(ty) => ty,
            None => unreachable!("universal sysex without universal header"),
        }
    }

    /// `0xF0` plus 3 or 4 header bytes.
    #[inline]
    pub fn num_header_bytes(&self) -> usize {
        1 + self.universal_type().num_id_bytes()
    }

    #[inline]
    pub fn raw_payload_bytes(&self) -> &[u8] {
        let bytes = self.bytes.as_ref();
        &bytes[self.num_header_bytes()..bytes.len() - 1]
    }

    #[inline]
    pub fn num_payload_bytes(&self) -> usize {
        self.bytes.as_ref().len() - 1 - self.num_header_bytes()
    }

    #[cfg(feature = "alloc")]
    pub fn to_owned_msg(&self) -> UniversalSysExMsg<Vec<u8>> {
        UniversalSysExMsg {
            bytes: self.bytes.as_ref().to_vec(),
        }
    }
}
impl<B: AsRef<[u8]> + AsMut<[u8]>> UniversalSysExMsg<B> {
    /// The device can change in place: it never changes the length of the header.
    #[inline]
    pub fn set_device(&mut self, device: Device) {
        self.bytes.as_mut()[2] = device.value();
    }

    /// The payload, for the caller to fill in. Bytes are not checked: keep them below `0x80`.
    #[inline]
    pub fn raw_payload_bytes_mut(&mut self) -> &mut [u8] {
        let start = self.num_header_bytes();
        let bytes = self.bytes.as_mut();
        let end = bytes.len() - 1;
        &mut bytes[start..end]
    }
}

/// Lay out `F0`, the header, a zeroed payload and `F7` over `out`.
fn frame_into(out: &mut [u8], write_header: impl FnOnce(&mut [u8]) -> usize) {
    out[0] = SYSEX;
    let header_len = write_header(&mut out[1..]);
    let last = out.len() - 1;
    for byte in &mut out[1 + header_len..last] {
        *byte = 0;
    }
    out[last] = EOX;
}

#[inline]
#[track_caller]
fn check_buf_len(buf: &[u8], expected: usize) {
    assert_eq!(
        buf.len(),
        expected,
        "buffer size does not match the sysex message size"
    );
}

/// Builds manufacturer SysEx messages on the heap or over a caller buffer.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct MfrSysExBuilder {
    manufacturer: Manufacturer,
    num_payload_bytes: usize,
}
impl MfrSysExBuilder {
    #[inline]
    pub fn new(manufacturer: Manufacturer) -> MfrSysExBuilder {
        MfrSysExBuilder {
            manufacturer,
            num_payload_bytes: 0,
        }
    }

    /// # Panics
    ///
    /// Panics if `num_payload_bytes` is zero.
    #[inline]
    #[track_caller]
    pub fn with_num_payload_bytes(self, num_payload_bytes: usize) -> MfrSysExBuilder {
        assert!(num_payload_bytes >= 1, "sysex payload must not be empty");
        MfrSysExBuilder {
            num_payload_bytes,
            ..self
        }
    }

    /// The size of the buffer `build_as_ref_to_bytes` expects.
    #[inline]
    pub fn num_msg_bytes_including_eox(&self) -> usize {
        1 + self.manufacturer.num_id_bytes() + self.num_payload_bytes + 1
    }

    #[track_caller]
    fn check_payload(&self) {
        assert!(
            self.num_payload_bytes >= 1,
            "with_num_payload_bytes() must be called before building"
        );
    }

    /// # Panics
    ///
    /// Panics if no payload size was given.
    #[cfg(feature = "alloc")]
    #[track_caller]
    pub fn build_on_heap(&self) -> MfrSysExMsg<Vec<u8>> {
        self.check_payload();
        let mut bytes = alloc::vec![0; self.num_msg_bytes_including_eox()];
        let manufacturer = self.manufacturer;
        frame_into(&mut bytes, |out| manufacturer.write_id(out));
        MfrSysExMsg { bytes }
    }

    /// # Panics
    ///
    /// Panics if no payload size was given, or if `buf` is not exactly
    /// `num_msg_bytes_including_eox()` bytes long.
    #[track_caller]
    pub fn build_as_ref_to_bytes<'a>(&self, buf: &'a mut [u8]) -> MfrSysExMsgRef<'a> {
        self.check_payload();
        check_buf_len(buf, self.num_msg_bytes_including_eox());
        let manufacturer = self.manufacturer;
        frame_into(buf, |out| manufacturer.write_id(out));
        MfrSysExMsg { bytes: buf }
    }
}

/// Builds universal SysEx messages on the heap or over a caller buffer.
///
/// ```
/// # use midimsg::{UniversalSysExBuilder, UniversalType, Device, MidiBytes};
/// let mut ack = UniversalSysExBuilder::new(Device::new(0x16), UniversalType::ACK)
///     .with_num_payload_bytes(1)
///     .build_on_heap();
/// ack.raw_payload_bytes_mut()[0] = 61;
/// assert_eq!(ack.msg_bytes(), &[0xF0, 0x7E, 0x16, 0x7F, 0x3D, 0xF7]);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct UniversalSysExBuilder {
    device: Device,
    ty: UniversalType,
    num_payload_bytes: usize,
}
impl UniversalSysExBuilder {
    #[inline]
    pub fn new(device: Device, ty: UniversalType) -> UniversalSysExBuilder {
        UniversalSysExBuilder {
            device,
            ty,
            num_payload_bytes: 0,
        }
    }

    /// # Panics
    ///
    /// Panics if `num_payload_bytes` is zero.
    #[inline]
    #[track_caller]
    pub fn with_num_payload_bytes(self, num_payload_bytes: usize) -> UniversalSysExBuilder {
        assert!(num_payload_bytes >= 1, "sysex payload must not be empty");
        UniversalSysExBuilder {
            num_payload_bytes,
            ..self
        }
    }

    #[inline]
    pub fn num_msg_bytes_including_eox(&self) -> usize {
        1 + self.ty.num_id_bytes() + self.num_payload_bytes + 1
    }

    #[track_caller]
    fn check_payload(&self) {
        assert!(
            self.num_payload_bytes >= 1,
            "with_num_payload_bytes() must be called before building"
        );
    }

    fn write_header(&self, out: &mut [u8]) -> usize {
        out[0] = self.ty.category().sys_ex_id();
        out[1] = self.device.value();
        out[2] = self.ty.sub_id1();
        match self.ty.sub_id2() {
            Some(sub_id2) => {
                out[3] = sub_id2;
                4
            }
            None => 3,
        }
    }

    /// # Panics
    ///
    /// Panics if no payload size was given.
    #[cfg(feature = "alloc")]
    #[track_caller]
    pub fn build_on_heap(&self) -> UniversalSysExMsg<Vec<u8>> {
        self.check_payload();
        let mut bytes = alloc::vec![0; self.num_msg_bytes_including_eox()];
        frame_into(&mut bytes, |out| self.write_header(out));
        UniversalSysExMsg { bytes }
    }

    /// # Panics
    ///
    /// Panics if no payload size was given, or if `buf` is not exactly
    /// `num_msg_bytes_including_eox()` bytes long.
    #[track_caller]
    pub fn build_as_ref_to_bytes<'a>(&self, buf: &'a mut [u8]) -> UniversalSysExMsgRef<'a> {
        self.check_payload();
        check_buf_len(buf, self.num_msg_bytes_including_eox());
        frame_into(buf, |out| self.write_header(out));
        UniversalSysExMsg { bytes: buf }
    }
}
