//! The identifiers carried in SysEx headers: manufacturers, devices and universal message types.

use crate::prelude::*;

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
enum ManufacturerRepr {
    Short(u8),
    Extended(u8, u8),
}

/// The manufacturer ID at the start of a manufacturer-specific SysEx message.
///
/// Short IDs take a single byte in `0x01 ..= 0x7D` (`0x7D` being reserved for non-commercial
/// use). Extended IDs take three bytes, `00 b1 b2`.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Manufacturer(ManufacturerRepr);
impl Manufacturer {
    pub const SEQUENTIAL: Manufacturer = Manufacturer(ManufacturerRepr::Short(0x01));
    pub const MOOG: Manufacturer = Manufacturer(ManufacturerRepr::Short(0x04));
    pub const KURZWEIL: Manufacturer = Manufacturer(ManufacturerRepr::Short(0x07));
    pub const ENSONIQ: Manufacturer = Manufacturer(ManufacturerRepr::Short(0x0F));
    pub const OBERHEIM: Manufacturer = Manufacturer(ManufacturerRepr::Short(0x10));
    pub const APPLE: Manufacturer = Manufacturer(ManufacturerRepr::Short(0x11));
    pub const E_MU: Manufacturer = Manufacturer(ManufacturerRepr::Short(0x18));
    pub const KAWAI: Manufacturer = Manufacturer(ManufacturerRepr::Short(0x40));
    pub const ROLAND: Manufacturer = Manufacturer(ManufacturerRepr::Short(0x41));
    pub const KORG: Manufacturer = Manufacturer(ManufacturerRepr::Short(0x42));
    pub const YAMAHA: Manufacturer = Manufacturer(ManufacturerRepr::Short(0x43));
    pub const CASIO: Manufacturer = Manufacturer(ManufacturerRepr::Short(0x44));
    pub const AKAI: Manufacturer = Manufacturer(ManufacturerRepr::Short(0x47));
    /// For schools, research and private experiments. Never used in released products.
    pub const NON_COMMERCIAL: Manufacturer = Manufacturer(ManufacturerRepr::Short(0x7D));
    pub const ALESIS: Manufacturer = Manufacturer(ManufacturerRepr::Extended(0x00, 0x0E));
    pub const ELEKTRON: Manufacturer = Manufacturer(ManufacturerRepr::Extended(0x20, 0x3C));
    pub const ARTURIA: Manufacturer = Manufacturer(ManufacturerRepr::Extended(0x20, 0x6B));
    pub const NATIVE_INSTRUMENTS: Manufacturer =
        Manufacturer(ManufacturerRepr::Extended(0x21, 0x09));

    /// A one-byte manufacturer ID.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not in `0x01 ..= 0x7D`.
    #[inline]
    #[track_caller]
    pub fn short(id: u8) -> Manufacturer {
        match Manufacturer::try_short(id) {
            Some(mfr) => mfr,
            None => panic!("short manufacturer id out of range"),
        }
    }

    #[inline]
    pub fn try_short(id: u8) -> Option<Manufacturer> {
        if (0x01..=0x7D).contains(&id) {
            Some(Manufacturer(ManufacturerRepr::Short(id)))
        } else {
            None
        }
    }

    /// A three-byte manufacturer ID, `00 b1 b2`.
    #[inline]
    pub fn extended(b1: DataValue, b2: DataValue) -> Manufacturer {
        Manufacturer(ManufacturerRepr::Extended(b1.value(), b2.value()))
    }

    /// Recover the manufacturer from the bytes following `0xF0`.
    ///
    /// Returns `None` for the universal IDs `0x7E`/`0x7F`, for truncated extended IDs and for
    /// bytes with the top bit set.
    pub fn from_id_bytes(bytes: &[u8]) -> Option<Manufacturer> {
        match *bytes {
            [0x00, b1, b2, ..] if b1 < 0x80 && b2 < 0x80 => {
                Some(Manufacturer(ManufacturerRepr::Extended(b1, b2)))
            }
            [id, ..] => Manufacturer::try_short(id),
            [] => None,
        }
    }

    #[inline]
    pub fn is_extended(self) -> bool {
        matches!(self.0, ManufacturerRepr::Extended(..))
    }

    #[inline]
    pub fn is_non_commercial(self) -> bool {
        self == Manufacturer::NON_COMMERCIAL
    }

    /// 1 for short IDs, 3 for extended ones.
    #[inline]
    pub fn num_id_bytes(self) -> usize {
        match self.0 {
            ManufacturerRepr::Short(_) => 1,
            ManufacturerRepr::Extended(..) => 3,
        }
    }

    /// The first ID byte, the one that directly follows `0xF0`.
    #[inline]
    pub fn sys_ex_id(self) -> u8 {
        match self.0 {
            ManufacturerRepr::Short(id) => id,
            ManufacturerRepr::Extended(..) => 0x00,
        }
    }

    /// Write the ID bytes to the start of `out`, returning how many were written.
    pub(crate) fn write_id(self, out: &mut [u8]) -> usize {
        match self.0 {
            ManufacturerRepr::Short(id) => {
                out[0] = id;
                1
            }
            ManufacturerRepr::Extended(b1, b2) => {
                out[..3].copy_from_slice(&[0x00, b1, b2]);
                3
            }
        }
    }
}
impl fmt::Debug for Manufacturer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            ManufacturerRepr::Short(id) => write!(f, "Manufacturer({:02X})", id),
            ManufacturerRepr::Extended(b1, b2) => {
                write!(f, "Manufacturer(00 {:02X} {:02X})", b1, b2)
            }
        }
    }
}

/// The target device of a universal SysEx message: a 7-bit device ID, or `0x7F` for all devices.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Device(DataValue);
impl Device {
    /// Every device listening, `0x7F`.
    pub const ALL: Device = Device(DataValue::MAX);

    /// # Panics
    ///
    /// Panics if `id` has the top bit set.
    #[inline]
    #[track_caller]
    pub fn new(id: u8) -> Device {
        Device(DataValue::new(id))
    }

    #[inline]
    pub fn try_new(id: u8) -> Option<Device> {
        DataValue::try_from(id).map(Device)
    }

    #[inline]
    pub fn is_all(self) -> bool {
        self == Device::ALL
    }

    #[inline]
    pub fn value(self) -> u8 {
        self.0.value()
    }
}
impl From<DataValue> for Device {
    #[inline]
    fn from(id: DataValue) -> Device {
        Device(id)
    }
}
impl fmt::Debug for Device {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_all() {
            f.write_str("Device(all)")
        } else {
            write!(f, "Device({:02X})", self.value())
        }
    }
}

/// The two universal SysEx IDs.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[repr(u8)]
pub enum UniversalCategory {
    NonRealTime = 0x7E,
    RealTime = 0x7F,
}
impl UniversalCategory {
    #[inline]
    pub fn from_sys_ex_id(id: u8) -> Option<UniversalCategory> {
        match id {
            0x7E => Some(UniversalCategory::NonRealTime),
            0x7F => Some(UniversalCategory::RealTime),
            _ => None,
        }
    }

    #[inline]
    pub fn sys_ex_id(self) -> u8 {
        self as u8
    }
}

/// The sub-ID#1 values whose messages carry a sub-ID#2 byte, per category.
///
/// Every other sub-ID#1 value (sample dump header/packet/request, the handshaking
/// EOF/Wait/Cancel/NAK/ACK messages, and the MIDI Machine Control command and response
/// messages) is followed directly by the payload.
const TYPES_WITH_SUB_ID2: &[(UniversalCategory, u8)] = &[
    // MTC cueing, sample dump extensions, general information, file dump, tuning standard,
    // GM system, DLS, file reference, MIDI visual control, capability inquiry.
    (UniversalCategory::NonRealTime, 0x04),
    (UniversalCategory::NonRealTime, 0x05),
    (UniversalCategory::NonRealTime, 0x06),
    (UniversalCategory::NonRealTime, 0x07),
    (UniversalCategory::NonRealTime, 0x08),
    (UniversalCategory::NonRealTime, 0x09),
    (UniversalCategory::NonRealTime, 0x0A),
    (UniversalCategory::NonRealTime, 0x0B),
    (UniversalCategory::NonRealTime, 0x0C),
    (UniversalCategory::NonRealTime, 0x0D),
    // MIDI time code, show control, notation information, device control, real time MTC cueing,
    // tuning standard, controller destination, key-based instrument control, scalable
    // polyphony, mobile phone control.
    (UniversalCategory::RealTime, 0x01),
    (UniversalCategory::RealTime, 0x02),
    (UniversalCategory::RealTime, 0x03),
    (UniversalCategory::RealTime, 0x04),
    (UniversalCategory::RealTime, 0x05),
    (UniversalCategory::RealTime, 0x08),
    (UniversalCategory::RealTime, 0x09),
    (UniversalCategory::RealTime, 0x0A),
    (UniversalCategory::RealTime, 0x0B),
    (UniversalCategory::RealTime, 0x0C),
];

/// Whether universal messages of the given category and sub-ID#1 carry a sub-ID#2.
pub fn type_has_sub_id2(category: UniversalCategory, sub_id1: u8) -> bool {
    TYPES_WITH_SUB_ID2
        .iter()
        .any(|&(cat, id)| cat == category && id == sub_id1)
}

/// The kind of a universal SysEx message: its category, sub-ID#1 and, for the types that have
/// one, sub-ID#2.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct UniversalType {
    category: UniversalCategory,
    sub_id1: u8,
    sub_id2: Option<u8>,
}
impl UniversalType {
    pub const SAMPLE_DUMP_HEADER: UniversalType = UniversalType::nrt(0x01, None);
    pub const SAMPLE_DATA_PACKET: UniversalType = UniversalType::nrt(0x02, None);
    pub const SAMPLE_DUMP_REQUEST: UniversalType = UniversalType::nrt(0x03, None);
    pub const IDENTITY_REQUEST: UniversalType = UniversalType::nrt(0x06, Some(0x01));
    pub const IDENTITY_REPLY: UniversalType = UniversalType::nrt(0x06, Some(0x02));
    pub const FILE_DUMP_HEADER: UniversalType = UniversalType::nrt(0x07, Some(0x01));
    pub const FILE_DUMP_DATA_PACKET: UniversalType = UniversalType::nrt(0x07, Some(0x02));
    pub const FILE_DUMP_REQUEST: UniversalType = UniversalType::nrt(0x07, Some(0x03));
    pub const BULK_TUNING_DUMP_REQUEST: UniversalType = UniversalType::nrt(0x08, Some(0x00));
    pub const BULK_TUNING_DUMP: UniversalType = UniversalType::nrt(0x08, Some(0x01));
    pub const GM_SYSTEM_ON: UniversalType = UniversalType::nrt(0x09, Some(0x01));
    pub const GM_SYSTEM_OFF: UniversalType = UniversalType::nrt(0x09, Some(0x02));
    pub const GM2_SYSTEM_ON: UniversalType = UniversalType::nrt(0x09, Some(0x03));
    pub const EOF: UniversalType = UniversalType::nrt(0x7B, None);
    pub const WAIT: UniversalType = UniversalType::nrt(0x7C, None);
    pub const CANCEL: UniversalType = UniversalType::nrt(0x7D, None);
    pub const NAK: UniversalType = UniversalType::nrt(0x7E, None);
    pub const ACK: UniversalType = UniversalType::nrt(0x7F, None);

    pub const MTC_FULL_MESSAGE: UniversalType = UniversalType::rt(0x01, Some(0x01));
    pub const MTC_USER_BITS: UniversalType = UniversalType::rt(0x01, Some(0x02));
    pub const MMC_COMMAND: UniversalType = UniversalType::rt(0x06, None);
    pub const MMC_RESPONSE: UniversalType = UniversalType::rt(0x07, None);
    pub const MASTER_VOLUME: UniversalType = UniversalType::rt(0x04, Some(0x01));
    pub const MASTER_BALANCE: UniversalType = UniversalType::rt(0x04, Some(0x02));
    pub const MASTER_FINE_TUNING: UniversalType = UniversalType::rt(0x04, Some(0x03));
    pub const MASTER_COARSE_TUNING: UniversalType = UniversalType::rt(0x04, Some(0x04));
    pub const SINGLE_NOTE_TUNING_CHANGE: UniversalType = UniversalType::rt(0x08, Some(0x02));

    const fn nrt(sub_id1: u8, sub_id2: Option<u8>) -> UniversalType {
        UniversalType {
            category: UniversalCategory::NonRealTime,
            sub_id1,
            sub_id2,
        }
    }

    const fn rt(sub_id1: u8, sub_id2: Option<u8>) -> UniversalType {
        UniversalType {
            category: UniversalCategory::RealTime,
            sub_id1,
            sub_id2,
        }
    }

    /// Returns `None` if any ID has the top bit set, or if `sub_id2` is present exactly when the
    /// type does not take one.
    pub fn try_new(
        category: UniversalCategory,
        sub_id1: u8,
        sub_id2: Option<u8>,
    ) -> Option<UniversalType> {
        if sub_id1 >= 0x80 || sub_id2.map_or(false, |id| id >= 0x80) {
            return None;
        }
        if type_has_sub_id2(category, sub_id1) != sub_id2.is_some() {
            return None;
        }
        Some(UniversalType {
            category,
            sub_id1,
            sub_id2,
        })
    }

    /// # Panics
    ///
    /// Panics on the conditions for which [`try_new`](#method.try_new) returns `None`.
    #[track_caller]
    pub fn new(category: UniversalCategory, sub_id1: u8, sub_id2: Option<u8>) -> UniversalType {
        match UniversalType::try_new(category, sub_id1, sub_id2) {
            Some(ty) => ty,
            None => panic!("invalid universal sysex type"),
        }
    }

    /// Recover the type from the bytes following `0xF0`: category, device, sub-ID#1 and
    /// sub-ID#2 when the type has one.
    pub(crate) fn from_header_bytes(bytes: &[u8]) -> Option<UniversalType> {
        let category = UniversalCategory::from_sys_ex_id(*bytes.get(0)?)?;
        if *bytes.get(1)? >= 0x80 {
            return None;
        }
        let sub_id1 = *bytes.get(2)?;
        let sub_id2 = if type_has_sub_id2(category, sub_id1) {
            Some(*bytes.get(3)?)
        } else {
            None
        };
        UniversalType::try_new(category, sub_id1, sub_id2)
    }

    #[inline]
    pub fn category(self) -> UniversalCategory {
        self.category
    }

    #[inline]
    pub fn sub_id1(self) -> u8 {
        self.sub_id1
    }

    #[inline]
    pub fn sub_id2(self) -> Option<u8> {
        self.sub_id2
    }

    /// The header bytes after `0xF0`: category, device, sub-ID#1 and maybe sub-ID#2.
    #[inline]
    pub fn num_id_bytes(self) -> usize {
        if self.sub_id2.is_some() {
            4
        } else {
            3
        }
    }
}
impl fmt::Debug for UniversalType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "UniversalType({:?}, {:02X}", self.category, self.sub_id1)?;
        if let Some(sub_id2) = self.sub_id2 {
            write!(f, " {:02X}", sub_id2)?;
        }
        f.write_str(")")
    }
}
