//! Output sinks for the exact wire bytes of a message.
//!
//! Every message-like type in this crate can be written through [`MidiBytes::write`], which works
//! with any implementor of the [`Write`] trait defined here. This keeps the crate usable without
//! `std`: writing into a fixed `&mut [u8]` or a [`Cursor`] never allocates.
//!
//! [`MidiBytes::write`]: ../trait.MidiBytes.html#method.write

use crate::prelude::*;

/// The result of a write operation on the output `W`.
pub type IoResult<W> = StdResult<(), <W as Write>::Error>;

/// A sink for raw MIDI bytes.
pub trait Write {
    /// The error produced when the bytes cannot be written.
    type Error;

    /// Write all of the given bytes, or fail.
    fn write_all(&mut self, buf: &[u8]) -> IoResult<Self>;
}

#[cfg(feature = "alloc")]
impl Write for Vec<u8> {
    /// Growing a vector never fails.
    type Error = core::convert::Infallible;
    #[inline]
    fn write_all(&mut self, buf: &[u8]) -> IoResult<Self> {
        self.extend_from_slice(buf);
        Ok(())
    }
}

/// The error produced when writing into fixed buffers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CursorError {
    /// The buffer is too small for the message.
    /// Whatever fit has been written anyway.
    OutOfSpace,
}
impl fmt::Display for CursorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("midi message does not fit in the output buffer")
    }
}
#[cfg(feature = "std")]
impl std::error::Error for CursorError {}

/// Copy as much of `src` as fits at the start of `dst`, returning how many bytes were copied.
fn copy_prefix(dst: &mut [u8], src: &[u8]) -> usize {
    let len = src.len().min(dst.len());
    dst[..len].copy_from_slice(&src[..len]);
    len
}

/// Writes messages back to back into a fixed buffer, remembering where the next one goes.
///
/// ```
/// # use midimsg::{io::Cursor, Msg, MidiBytes};
/// let mut buf = [0; 4];
/// let mut out = Cursor::new(&mut buf);
/// Msg::timing_clock().write(&mut out).unwrap();
/// Msg::start().write(&mut out).unwrap();
/// assert_eq!(out.written(), &[0xF8, 0xFA]);
/// ```
pub struct Cursor<'a> {
    buf: &'a mut [u8],
    pos: usize,
}
impl<'a> Cursor<'a> {
    /// Start writing at the beginning of `buf`.
    #[inline]
    pub fn new(buf: &'a mut [u8]) -> Cursor<'a> {
        Cursor { buf, pos: 0 }
    }

    /// The bytes written so far.
    #[inline]
    pub fn written(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    /// How many more bytes fit in the buffer.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Give the buffer back, along with the number of bytes written into it.
    #[inline]
    pub fn into_inner(self) -> (&'a mut [u8], usize) {
        (self.buf, self.pos)
    }
}
impl<'a> Write for Cursor<'a> {
    type Error = CursorError;
    fn write_all(&mut self, buf: &[u8]) -> IoResult<Self> {
        let len = copy_prefix(&mut self.buf[self.pos..], buf);
        self.pos += len;
        ensure!(len == buf.len(), CursorError::OutOfSpace);
        Ok(())
    }
}

/// Writing into a plain slice advances it past the written bytes.
impl<'a> Write for &'a mut [u8] {
    type Error = CursorError;
    fn write_all(&mut self, buf: &[u8]) -> IoResult<Self> {
        let len = copy_prefix(self, buf);
        let rest = mem::replace(self, &mut []);
        *self = &mut rest[len..];
        ensure!(len == buf.len(), CursorError::OutOfSpace);
        Ok(())
    }
}

/// Adapts any `std::io::Write` into a MIDI byte sink.
#[cfg(feature = "std")]
pub struct IoWrap<T>(pub T);
#[cfg(feature = "std")]
impl<T: io::Write> Write for IoWrap<T> {
    type Error = io::Error;
    #[inline]
    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.0.write_all(buf)
    }
}
