//! # Overview
//!
//! `midimsg` is a strongly-typed representation of MIDI 1.0 messages. It focuses on the bytes:
//! every message is stored exactly as it travels on the wire, and typed accessors read and write
//! those bytes in place.
//!
//! ```rust
//! use midimsg::{Channel, Control, ControlChangeMsg, DataValue, MidiBytes};
//!
//! let mut cc = ControlChangeMsg::new(Channel::new(12), Control::MOD_WHEEL, DataValue::new(37));
//! assert_eq!(cc.msg_bytes(), &[0xBC, 0x01, 0x25]);
//!
//! cc.set_value(DataValue::new(126));
//! assert_eq!(cc.msg_bytes(), &[0xBC, 0x01, 0x7E]);
//! ```
//!
//! # Owned messages, views and refs
//!
//! Fixed-size messages can be stored as a plain [`Msg<N>`](struct.Msg.html), with `N` the
//! number of bytes including the status byte. Every typed message (`NoteMsg`,
//! `ControlChangeMsg`, `MfrSysExMsg`, ...) is generic over its byte storage instead:
//!
//! - `NoteMsg` (that is, `NoteMsg<[u8; 3]>`) owns its bytes,
//! - `NoteMsgView<'a>` is a read-only reference into bytes owned elsewhere,
//! - `NoteMsgRef<'a>` is a read-write reference into bytes owned elsewhere.
//!
//! References are built from an untyped [`MsgView`](type.MsgView.html) or
//! [`MsgRef`](type.MsgRef.html) by refining them into the expected kind of message:
//!
//! ```rust
//! use midimsg::{MidiBytesMut, MsgRef, NoteMsgRef, DataValue};
//!
//! // Bytes received from somewhere else
//! let mut bytes = [0x92, 0x45, 0x5A];
//!
//! let mut msg = MsgRef::new(&mut bytes[..]);
//! let mut note: NoteMsgRef = msg.ref_as();
//! note.set_velocity(DataValue::new(0));
//! assert!(note.is_note_off());
//!
//! assert_eq!(bytes, [0x92, 0x45, 0x00]);
//! ```
//!
//! Refining into the wrong kind of message is a programming error and panics. When the bytes
//! come from an untrusted source, use the `try_*` variants, which return an
//! [`Error`](struct.Error.html), or
//! [`MsgReference::classify`](struct.MsgReference.html#method.classify).
//!
//! # System Exclusive
//!
//! SysEx messages have a variable length, so they are built through
//! [`MfrSysExBuilder`](struct.MfrSysExBuilder.html) and
//! [`UniversalSysExBuilder`](struct.UniversalSysExBuilder.html), either into a caller buffer
//! or on the heap. The builders write the framing and header, leaving the payload zeroed:
//!
//! ```rust
//! # #[cfg(feature = "alloc")] {
//! use midimsg::{Manufacturer, MfrSysExBuilder, MidiBytes};
//!
//! let mut msg = MfrSysExBuilder::new(Manufacturer::NON_COMMERCIAL)
//!     .with_num_payload_bytes(3)
//!     .build_on_heap();
//! msg.raw_payload_bytes_mut().copy_from_slice(&[0x20, 0x21, 0x22]);
//! assert_eq!(msg.msg_bytes(), &[0xF0, 0x7D, 0x20, 0x21, 0x22, 0xF7]);
//! # }
//! ```
//!
//! # Cargo features
//!
//! `alloc` and `std` are both enabled by default.
//!
//! - The `alloc` feature
//!
//!   Enables SysEx messages that own their bytes on the heap (`build_on_heap`,
//!   `to_owned_msg`), writing into `Vec<u8>`, and error chains in debug builds.
//!
//! - The `std` feature
//!
//!   Implements `std::error::Error` for [`Error`](struct.Error.html) and adds `write_std` to
//!   write messages into any `std::io::Write`.
//!
//! Disabling both with `default-features = false` makes the crate `no_std`. Fixed-size
//! messages, references, MIDI Time Code and SysEx built into caller buffers keep working.
//!
//! # Byte streams
//!
//! This crate does not split byte streams into messages: running status and System Real-Time
//! bytes interleaved with other messages must be handled upstream. Every reference expects its
//! bytes to hold exactly one complete message.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

macro_rules! bail {
    ($err:expr) => {{
        return Err($err.into());
    }};
}
macro_rules! ensure {
    ($cond:expr, $err:expr) => {{
        if !$cond {
            bail!($err)
        }
    }};
}

/// All of the errors this crate produces.
#[macro_use]
mod error;

mod prelude {
    pub(crate) use crate::{
        channel::Channel,
        control::Control,
        error::{precondition, Error, ErrorKind, Result, ResultExt, StdResult},
        io::{IoResult, Write},
        key::{KeyNumber, PresetNumber},
        msg::Msg,
        pitch::{PitchBend, PitchBendRange},
        primitive::{DataValue, DoubleDataValue},
        reference::{FromMsg, FromRef, FromView, MidiBytes, MidiBytesMut, MsgRef, MsgView},
        status::{MsgType, Status},
    };
    #[cfg(feature = "alloc")]
    pub(crate) use alloc::vec::Vec;
    pub(crate) use core::{fmt, mem, ops};
    #[cfg(feature = "std")]
    pub(crate) use std::io;

    pub(crate) fn bit_range<T>(val: T, range: ops::Range<u32>) -> T
    where
        T: From<u8>
            + ops::Shr<u32, Output = T>
            + ops::Shl<u32, Output = T>
            + ops::Not<Output = T>
            + ops::BitAnd<Output = T>,
    {
        let mask = !((!T::from(0)) << (range.end - range.start));
        (val >> range.start) & mask
    }
}

#[macro_use]
mod reference;

mod chan;
mod channel;
mod control;
mod id;
pub mod io;
mod key;
mod msg;
mod mtc;
mod pitch;
mod primitive;
mod status;
mod sysex;
mod system;
mod timed;

pub use crate::{
    chan::{
        ChanMsg, ChanMsgRef, ChanMsgView, ChanPressureMsg, ChanPressureMsgRef,
        ChanPressureMsgView, ControlChangeMsg, ControlChangeMsgRef, ControlChangeMsgView,
        KeyPressureMsg, KeyPressureMsgRef, KeyPressureMsgView, NoteMsg, NoteMsgRef, NoteMsgView,
        PitchBendMsg, PitchBendMsgRef, PitchBendMsgView, ProgramChangeMsg, ProgramChangeMsgRef,
        ProgramChangeMsgView,
    },
    channel::{Channel, Channels},
    control::Control,
    error::{Error, ErrorKind, Result},
    id::{type_has_sub_id2, Device, Manufacturer, UniversalCategory, UniversalType},
    key::{KeyNumber, PresetNumber},
    msg::Msg,
    mtc::{MtcFullFrame, MtcRate, QuarterFramePiece},
    pitch::{PitchBend, PitchBendRange},
    primitive::{DataValue, DoubleDataValue, NormalizedFloat},
    reference::{
        AnyMsg, FromMsg, FromRef, FromView, MidiBytes, MidiBytesMut, MsgRef, MsgReference, MsgView,
    },
    status::{MsgType, Status},
    sysex::{
        MfrSysExBuilder, MfrSysExMsg, MfrSysExMsgRef, MfrSysExMsgView, SysExMsg, SysExMsgRef,
        SysExMsgView, UniversalSysExBuilder, UniversalSysExMsg, UniversalSysExMsgRef,
        UniversalSysExMsgView,
    },
    system::{
        MtcQuarterFrameMsg, MtcQuarterFrameMsgRef, MtcQuarterFrameMsgView, SongPosMsg,
        SongPosMsgRef, SongPosMsgView, SongSelectMsg, SongSelectMsgRef, SongSelectMsgView,
    },
    timed::Timed,
};

#[cfg(test)]
mod test;
