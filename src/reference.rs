//! Non-owning references to complete MIDI messages stored in caller-managed bytes.
//!
//! Every message type in this crate is generic over its byte storage `B`:
//!
//! - `[u8; N]` (or `Vec<u8>` for SysEx) owns the bytes,
//! - `&'a [u8]` is a read-only *view* into bytes owned elsewhere,
//! - `&'a mut [u8]` is a read-write *ref* into bytes owned elsewhere.
//!
//! Getters are available for any `B: AsRef<[u8]>`, while setters require `B: AsMut<[u8]>` too,
//! so mutating through a view does not compile. A ref can always be turned into a view (through
//! `From`), never the other way around.
//!
//! The untyped [`MsgReference`] can be refined into a typed reference through
//! [`MidiBytes::view_as`] or [`MidiBytesMut::ref_as`], which check that the status byte matches
//! the requested type. Refining into the wrong type is a precondition violation and panics; the
//! `try_*` variants return an [`Error`](../struct.Error.html) instead.
//!
//! [`MsgReference`]: struct.MsgReference.html
//! [`MidiBytes::view_as`]: trait.MidiBytes.html#method.view_as
//! [`MidiBytesMut::ref_as`]: trait.MidiBytesMut.html#method.ref_as

use crate::{
    chan::{
        ChanPressureMsg, ControlChangeMsg, KeyPressureMsg, NoteMsg, PitchBendMsg,
        ProgramChangeMsg,
    },
    prelude::*,
    sysex::{MfrSysExMsg, UniversalSysExMsg},
    system::{MtcQuarterFrameMsg, SongPosMsg, SongSelectMsg},
};

/// Check that `bytes` hold exactly one complete, well-formed message and return its status.
///
/// Fixed-size messages must have exactly as many data bytes as their status requires, each with
/// its top bit clear. SysEx messages must end with `0xF7`; their payload is not inspected.
pub(crate) fn check_msg_bytes(bytes: &[u8]) -> StdResult<Status, &'static ErrorKind> {
    let (&first, data) = bytes
        .split_first()
        .ok_or(err_malformed!("no status byte"))?;
    let status = Status::try_from_byte(first).ok_or(err_malformed!("invalid status byte"))?;
    match status.num_data_bytes() {
        Some(count) => {
            ensure!(
                data.len() == count,
                err_malformed!("data byte count does not match the status")
            );
            ensure!(
                DataValue::slice_try_from_int(data).is_some(),
                err_malformed!("data byte with top bit set")
            );
        }
        None => {
            ensure!(
                data.last() == Some(&MsgType::EndOfSystemExclusive.as_byte()),
                err_malformed!("sysex without end of exclusive")
            );
        }
    }
    Ok(status)
}

pub(crate) mod sealed {
    /// Raw mutable access. Not public: writing arbitrary bytes could turn a typed reference into
    /// a different message type.
    pub trait RawBytesMut {
        fn raw_bytes_mut(&mut self) -> &mut [u8];
    }
}
use self::sealed::RawBytesMut;

/// Read access to the bytes of one complete MIDI message.
///
/// Implemented by owned messages, views, refs and SysEx messages alike.
pub trait MidiBytes {
    /// The complete message, status byte first.
    fn msg_bytes(&self) -> &[u8];

    #[inline]
    fn status(&self) -> Status {
        Status::from_byte_unchecked(self.msg_bytes()[0])
    }

    #[inline]
    fn msg_type(&self) -> MsgType {
        self.status().msg_type()
    }

    /// The size of the message in bytes, status byte included.
    #[inline]
    fn num_msg_bytes(&self) -> usize {
        self.msg_bytes().len()
    }

    /// An untyped read-only view of this message.
    #[inline]
    fn as_msg_view(&self) -> MsgView<'_> {
        MsgReference {
            bytes: self.msg_bytes(),
        }
    }

    /// A read-only view of this message, refined to `T`.
    ///
    /// # Panics
    ///
    /// Panics if the message is not of the kind `T` represents.
    #[inline]
    #[track_caller]
    fn view_as<'s, T: FromView<'s>>(&'s self) -> T {
        precondition(T::try_from_view(self.as_msg_view()))
    }

    /// A read-only view of this message refined to `T`, or an error if the message is not of
    /// the kind `T` represents.
    #[inline]
    fn try_view_as<'s, T: FromView<'s>>(&'s self) -> Result<T> {
        T::try_from_view(self.as_msg_view())
    }

    /// Byte-for-byte comparison with any other message, whatever its storage.
    #[inline]
    fn has_same_value_as<O: MidiBytes + ?Sized>(&self, other: &O) -> bool {
        self.msg_bytes() == other.msg_bytes()
    }

    /// Write the exact wire bytes of this message.
    #[inline]
    fn write<W: Write>(&self, out: &mut W) -> IoResult<W> {
        out.write_all(self.msg_bytes())
    }

    /// Write the exact wire bytes of this message to the given `std::io::Write` output.
    ///
    /// This method is only available with the `std` feature enabled.
    #[cfg(feature = "std")]
    #[inline]
    fn write_std<W: io::Write>(&self, out: W) -> io::Result<()> {
        self.write(&mut crate::io::IoWrap(out))
    }
}

/// Read-write access to the bytes of one complete MIDI message.
pub trait MidiBytesMut: MidiBytes + RawBytesMut {
    /// An untyped read-write reference to this message.
    ///
    /// Only data bytes can be written through it, so a typed message keeps its type:
    ///
    /// ```compile_fail
    /// # use midimsg::{Channel, DataValue, KeyNumber, MidiBytesMut, NoteMsg};
    /// let mut note = NoteMsg::note_on(Channel::new(2), KeyNumber::new(69), DataValue::new(90));
    /// note.msg_ref().into_inner()[0] = 0xB2;
    /// ```
    #[inline]
    fn msg_ref(&mut self) -> MsgRef<'_> {
        MsgReference {
            bytes: self.raw_bytes_mut(),
        }
    }

    /// A read-write reference to this message, refined to `T`.
    ///
    /// # Panics
    ///
    /// Panics if the message is not of the kind `T` represents.
    #[inline]
    #[track_caller]
    fn ref_as<'s, T: FromRef<'s>>(&'s mut self) -> T {
        precondition(T::try_from_ref(self.msg_ref()))
    }

    #[inline]
    fn try_ref_as<'s, T: FromRef<'s>>(&'s mut self) -> Result<T> {
        T::try_from_ref(self.msg_ref())
    }
}

/// Read-only references that can be refined from an untyped view.
pub trait FromView<'a>: Sized {
    fn try_from_view(view: MsgView<'a>) -> Result<Self>;
}

/// Read-write references that can be refined from an untyped ref.
pub trait FromRef<'a>: Sized {
    fn try_from_ref(msg: MsgRef<'a>) -> Result<Self>;
}

/// Owned messages that can be built as an independent copy of a `Msg<N>`.
pub trait FromMsg<const N: usize>: Sized {
    fn try_from_msg(msg: Msg<N>) -> Result<Self>;
}

pub(crate) fn fmt_msg(name: &str, bytes: &[u8], f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}[", name)?;
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{:02X}", byte)?;
    }
    f.write_str("]")
}

/// An untyped reference to any complete MIDI message.
///
/// `B` is the byte storage: `&[u8]` for a read-only view, `&mut [u8]` for a read-write ref.
///
/// ```
/// # use midimsg::{MsgView, MsgType, MidiBytes, Channel};
/// let bytes = [0xBC, 0x01, 0x25];
/// let view = MsgView::new(&bytes[..]);
/// assert_eq!(view.msg_type(), MsgType::ControlChange);
/// assert_eq!(view.channel(), Channel::new(12));
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct MsgReference<B> {
    bytes: B,
}

/// An untyped read-only reference.
pub type MsgView<'a> = MsgReference<&'a [u8]>;

/// An untyped read-write reference.
pub type MsgRef<'a> = MsgReference<&'a mut [u8]>;

impl<B: AsRef<[u8]>> MsgReference<B> {
    /// Refer to the message in `bytes`, checking that they hold exactly one complete message.
    pub fn try_new(bytes: B) -> Result<MsgReference<B>> {
        check_msg_bytes(bytes.as_ref()).context(err_malformed!("invalid message reference"))?;
        Ok(MsgReference { bytes })
    }

    /// Refer to the message in `bytes`.
    ///
    /// # Panics
    ///
    /// Panics if the bytes are not exactly one complete message: empty, unknown status, a data
    /// byte count that does not match the status, or a SysEx without its final `0xF7`.
    #[inline]
    #[track_caller]
    pub fn new(bytes: B) -> MsgReference<B> {
        precondition(Self::try_new(bytes))
    }

    #[inline]
    pub fn bytes(&self) -> &[u8] {
        self.bytes.as_ref()
    }

    /// A read-only reborrow.
    #[inline]
    pub fn view(&self) -> MsgView<'_> {
        MsgReference {
            bytes: self.bytes.as_ref(),
        }
    }

    /// The channel of Channel Voice messages, `Channel::none()` otherwise.
    #[inline]
    pub fn channel(&self) -> Channel {
        self.status().channel()
    }

    #[inline]
    pub fn is_sys_ex(&self) -> bool {
        self.msg_type() == MsgType::SystemExclusive
    }

    /// The number of bytes following the status byte.
    #[inline]
    pub fn num_data_bytes(&self) -> usize {
        self.bytes().len() - 1
    }

    /// # Panics
    ///
    /// Panics for SysEx messages and for messages without data bytes.
    #[inline]
    #[track_caller]
    pub fn data1(&self) -> DataValue {
        assert!(!self.is_sys_ex(), "data1() called on a sysex message");
        assert!(self.num_data_bytes() >= 1, "data1() called on a message without data");
        DataValue::from_int_lossy(self.bytes()[1])
    }

    /// # Panics
    ///
    /// Panics for SysEx messages and for messages with less than two data bytes.
    #[inline]
    #[track_caller]
    pub fn data2(&self) -> DataValue {
        assert!(!self.is_sys_ex(), "data2() called on a sysex message");
        assert!(self.num_data_bytes() >= 2, "data2() called on a short message");
        DataValue::from_int_lossy(self.bytes()[2])
    }

    /// Refine into the discriminated enum of every known message kind.
    pub fn classify(self) -> AnyMsg<B> {
        let bytes = self.bytes;
        match Status::from_byte_unchecked(bytes.as_ref()[0]).msg_type() {
            MsgType::NoteOff | MsgType::NoteOn => AnyMsg::Note(NoteMsg { bytes }),
            MsgType::PolyKeyPressure => AnyMsg::KeyPressure(KeyPressureMsg { bytes }),
            MsgType::ControlChange => AnyMsg::ControlChange(ControlChangeMsg { bytes }),
            MsgType::ProgramChange => AnyMsg::ProgramChange(ProgramChangeMsg { bytes }),
            MsgType::ChannelPressure => AnyMsg::ChanPressure(ChanPressureMsg { bytes }),
            MsgType::PitchBend => AnyMsg::PitchBend(PitchBendMsg { bytes }),
            MsgType::MtcQuarterFrame => AnyMsg::MtcQuarterFrame(MtcQuarterFrameMsg { bytes }),
            MsgType::SongPositionPointer => AnyMsg::SongPos(SongPosMsg { bytes }),
            MsgType::SongSelect => AnyMsg::SongSelect(SongSelectMsg { bytes }),
            MsgType::SystemExclusive => {
                if UniversalSysExMsg::<B>::check(bytes.as_ref()).is_ok() {
                    AnyMsg::UniversalSysEx(UniversalSysExMsg { bytes })
                } else if MfrSysExMsg::<B>::check(bytes.as_ref()).is_ok() {
                    AnyMsg::MfrSysEx(MfrSysExMsg { bytes })
                } else {
                    AnyMsg::Other(MsgReference { bytes })
                }
            }
            _ => AnyMsg::Other(MsgReference { bytes }),
        }
    }
}
impl<B: AsRef<[u8]> + AsMut<[u8]>> MsgReference<B> {
    /// A read-write reborrow.
    #[inline]
    pub fn view_mut(&mut self) -> MsgRef<'_> {
        MsgReference {
            bytes: self.bytes.as_mut(),
        }
    }

    /// # Panics
    ///
    /// Panics for SysEx messages and for messages without data bytes.
    #[track_caller]
    pub fn set_data1(&mut self, value: DataValue) {
        assert!(!self.is_sys_ex(), "set_data1() called on a sysex message");
        assert!(self.num_data_bytes() >= 1, "set_data1() called on a message without data");
        self.bytes.as_mut()[1] = value.value();
    }

    /// # Panics
    ///
    /// Panics for SysEx messages and for messages with less than two data bytes.
    #[track_caller]
    pub fn set_data2(&mut self, value: DataValue) {
        assert!(!self.is_sys_ex(), "set_data2() called on a sysex message");
        assert!(self.num_data_bytes() >= 2, "set_data2() called on a short message");
        self.bytes.as_mut()[2] = value.value();
    }
}
impl<B: AsRef<[u8]>> MidiBytes for MsgReference<B> {
    #[inline]
    fn msg_bytes(&self) -> &[u8] {
        self.bytes.as_ref()
    }
}
impl<B: AsRef<[u8]> + AsMut<[u8]>> RawBytesMut for MsgReference<B> {
    #[inline]
    fn raw_bytes_mut(&mut self) -> &mut [u8] {
        self.bytes.as_mut()
    }
}
impl<B: AsRef<[u8]> + AsMut<[u8]>> MidiBytesMut for MsgReference<B> {}
impl<'a> FromView<'a> for MsgView<'a> {
    #[inline]
    fn try_from_view(view: MsgView<'a>) -> Result<MsgView<'a>> {
        Ok(view)
    }
}
impl<'a> FromRef<'a> for MsgRef<'a> {
    #[inline]
    fn try_from_ref(msg: MsgRef<'a>) -> Result<MsgRef<'a>> {
        Ok(msg)
    }
}
impl<'a> From<MsgRef<'a>> for MsgView<'a> {
    #[inline]
    fn from(msg: MsgRef<'a>) -> MsgView<'a> {
        MsgReference { bytes: msg.bytes }
    }
}
impl<B: AsRef<[u8]>> fmt::Debug for MsgReference<B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_msg("MsgReference", self.bytes.as_ref(), f)
    }
}

/// `into_inner` for every storage a message can live in. Owned and read-only storage is handed
/// back as is, but a read-write reference only gives up its bytes read-only: raw writes could
/// change the status byte and with it the type of the message.
macro_rules! into_inner_impls {
    ($name:ident) => {
        impl<const N: usize> $name<[u8; N]> {
            #[inline]
            pub fn into_inner(self) -> [u8; N] {
                self.bytes
            }
        }
        #[cfg(feature = "alloc")]
        impl $name<alloc::vec::Vec<u8>> {
            #[inline]
            pub fn into_inner(self) -> alloc::vec::Vec<u8> {
                self.bytes
            }
        }
        impl<'a> $name<&'a [u8]> {
            #[inline]
            pub fn into_inner(self) -> &'a [u8] {
                self.bytes
            }
        }
        impl<'a> $name<&'a mut [u8]> {
            #[inline]
            pub fn into_inner(self) -> &'a [u8] {
                self.bytes
            }
        }
    };
}

/// Declares a message type refined by its status, generic over its byte storage.
///
/// Generates the struct, its `View`/`Ref` aliases, checked construction, reborrows, the
/// `MidiBytes`/`MidiBytesMut` implementations, refinement from untyped references and the
/// upcasts back to them. With an owned array size, also the conversions from and to `Msg<N>`.
macro_rules! typed_msg {
    {
        $(#[$attr:meta])*
        pub struct $name:ident $(<[u8; $n:literal]>)?;
        $(#[$view_attr:meta])*
        view $view:ident;
        $(#[$ref_attr:meta])*
        ref $ref_:ident;
        check |$status:ident, $bytes:ident| $check:expr => $what:literal;
    } => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash)]
        pub struct $name<B $(= [u8; $n])?> {
            pub(crate) bytes: B,
        }

        $(#[$view_attr])*
        pub type $view<'a> = $name<&'a [u8]>;

        $(#[$ref_attr])*
        pub type $ref_<'a> = $name<&'a mut [u8]>;

        impl<B> $name<B> {
            #[allow(unused_variables)]
            pub(crate) fn check($bytes: &[u8]) -> StdResult<(), &'static ErrorKind> {
                let $status = $crate::reference::check_msg_bytes($bytes)?;
                ensure!($check, err_mismatch!(concat!("not a ", $what)));
                Ok(())
            }
        }

        impl<B: AsRef<[u8]>> $name<B> {
            #[doc = concat!("Interpret `bytes` as a ", $what, ", checking the bytes and status.")]
            pub fn try_from_bytes(bytes: B) -> Result<$name<B>> {
                Self::check(bytes.as_ref())?;
                Ok($name { bytes })
            }

            #[doc = concat!("Interpret `bytes` as a ", $what, ".")]
            ///
            /// # Panics
            ///
            /// Panics if the bytes are not a complete message of this kind.
            #[inline]
            #[track_caller]
            pub fn from_bytes(bytes: B) -> $name<B> {
                precondition(Self::try_from_bytes(bytes))
            }

            /// A read-only reborrow.
            #[inline]
            pub fn view(&self) -> $name<&[u8]> {
                $name { bytes: self.bytes.as_ref() }
            }
        }
        into_inner_impls!($name);
        impl<B: AsRef<[u8]> + AsMut<[u8]>> $name<B> {
            /// A read-write reborrow.
            #[inline]
            pub fn view_mut(&mut self) -> $name<&mut [u8]> {
                $name { bytes: self.bytes.as_mut() }
            }
        }
        impl<B: AsRef<[u8]>> MidiBytes for $name<B> {
            #[inline]
            fn msg_bytes(&self) -> &[u8] {
                self.bytes.as_ref()
            }
        }
        impl<B: AsRef<[u8]> + AsMut<[u8]>> $crate::reference::sealed::RawBytesMut for $name<B> {
            #[inline]
            fn raw_bytes_mut(&mut self) -> &mut [u8] {
                self.bytes.as_mut()
            }
        }
        impl<B: AsRef<[u8]> + AsMut<[u8]>> MidiBytesMut for $name<B> {}
        impl<'a> FromView<'a> for $name<&'a [u8]> {
            #[inline]
            fn try_from_view(view: MsgView<'a>) -> Result<$name<&'a [u8]>> {
                $name::try_from_bytes(view.into_storage())
            }
        }
        impl<'a> FromRef<'a> for $name<&'a mut [u8]> {
            #[inline]
            fn try_from_ref(msg: MsgRef<'a>) -> Result<$name<&'a mut [u8]>> {
                $name::try_from_bytes(msg.into_storage())
            }
        }
        impl<'a> From<$name<&'a mut [u8]>> for $name<&'a [u8]> {
            #[inline]
            fn from(msg: $name<&'a mut [u8]>) -> $name<&'a [u8]> {
                $name { bytes: msg.bytes }
            }
        }
        impl<'a> From<$name<&'a [u8]>> for MsgView<'a> {
            #[inline]
            fn from(msg: $name<&'a [u8]>) -> MsgView<'a> {
                MsgView::from_checked(msg.bytes)
            }
        }
        impl<'a> From<$name<&'a mut [u8]>> for MsgView<'a> {
            #[inline]
            fn from(msg: $name<&'a mut [u8]>) -> MsgView<'a> {
                MsgView::from_checked(msg.bytes)
            }
        }
        impl<'a> From<$name<&'a mut [u8]>> for MsgRef<'a> {
            #[inline]
            fn from(msg: $name<&'a mut [u8]>) -> MsgRef<'a> {
                MsgRef::from_checked(msg.bytes)
            }
        }
        impl<B: AsRef<[u8]>> fmt::Debug for $name<B> {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                $crate::reference::fmt_msg(stringify!($name), self.bytes.as_ref(), f)
            }
        }

        $(
            impl FromMsg<$n> for $name<[u8; $n]> {
                #[inline]
                fn try_from_msg(msg: Msg<$n>) -> Result<$name<[u8; $n]>> {
                    $name::try_from_bytes(msg.into_bytes())
                }
            }
            impl $name<[u8; $n]> {
                #[doc = concat!("Copy a plain message, which must be a ", $what, ".")]
                ///
                /// # Panics
                ///
                /// Panics if the message is not of this kind.
                #[inline]
                #[track_caller]
                pub fn from_msg(msg: Msg<$n>) -> $name<[u8; $n]> {
                    precondition(Self::try_from_msg(msg))
                }
            }
            impl<B: AsRef<[u8]>> $name<B> {
                /// An independent owned copy of the referenced message.
                #[inline]
                pub fn to_owned_msg(&self) -> $name<[u8; $n]> {
                    let mut bytes = [0; $n];
                    bytes.copy_from_slice(self.bytes.as_ref());
                    $name { bytes }
                }
            }
            impl From<$name<[u8; $n]>> for Msg<$n> {
                #[inline]
                fn from(msg: $name<[u8; $n]>) -> Msg<$n> {
                    Msg::from_bytes_unchecked(msg.bytes)
                }
            }
        )?
    };
}

impl<B> MsgReference<B> {
    /// Only for bytes that already passed `check_msg_bytes`.
    #[inline]
    pub(crate) fn from_checked(bytes: B) -> MsgReference<B> {
        MsgReference { bytes }
    }

    #[inline]
    pub(crate) fn into_storage(self) -> B {
        self.bytes
    }
}
into_inner_impls!(MsgReference);

/// Every kind of message an untyped reference can be refined into, as returned by
/// [`MsgReference::classify`](struct.MsgReference.html#method.classify).
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub enum AnyMsg<B> {
    Note(NoteMsg<B>),
    KeyPressure(KeyPressureMsg<B>),
    ControlChange(ControlChangeMsg<B>),
    ProgramChange(ProgramChangeMsg<B>),
    ChanPressure(ChanPressureMsg<B>),
    PitchBend(PitchBendMsg<B>),
    MtcQuarterFrame(MtcQuarterFrameMsg<B>),
    SongPos(SongPosMsg<B>),
    SongSelect(SongSelectMsg<B>),
    MfrSysEx(MfrSysExMsg<B>),
    UniversalSysEx(UniversalSysExMsg<B>),
    /// Messages without a refined type: tune request, end of exclusive, the System Real-Time
    /// messages, and SysEx messages too short to carry a manufacturer or universal header.
    Other(MsgReference<B>),
}
impl<B: AsRef<[u8]>> fmt::Debug for AnyMsg<B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AnyMsg::Note(msg) => fmt::Debug::fmt(msg, f),
            AnyMsg::KeyPressure(msg) => fmt::Debug::fmt(msg, f),
            AnyMsg::ControlChange(msg) => fmt::Debug::fmt(msg, f),
            AnyMsg::ProgramChange(msg) => fmt::Debug::fmt(msg, f),
            AnyMsg::ChanPressure(msg) => fmt::Debug::fmt(msg, f),
            AnyMsg::PitchBend(msg) => fmt::Debug::fmt(msg, f),
            AnyMsg::MtcQuarterFrame(msg) => fmt::Debug::fmt(msg, f),
            AnyMsg::SongPos(msg) => fmt::Debug::fmt(msg, f),
            AnyMsg::SongSelect(msg) => fmt::Debug::fmt(msg, f),
            AnyMsg::MfrSysEx(msg) => fmt::Debug::fmt(msg, f),
            AnyMsg::UniversalSysEx(msg) => fmt::Debug::fmt(msg, f),
            AnyMsg::Other(msg) => fmt::Debug::fmt(msg, f),
        }
    }
}
