use core::cmp::Ordering;

use crate::prelude::*;

/// A value paired with a timestamp.
///
/// The timestamp is carried along untouched; its unit and origin are up to the caller.
/// Refinements of timed messages keep the timestamp:
///
/// ```
/// # use midimsg::{Timed, MsgView, NoteMsgView, KeyNumber};
/// let bytes = [0x92, 0x45, 0x5A];
/// let timed = Timed::new(1.5, MsgView::new(&bytes[..]));
/// let note: Timed<NoteMsgView> = timed.view_as();
/// assert_eq!(note.time, 1.5);
/// assert_eq!(note.value.key(), KeyNumber::new(69));
/// ```
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct Timed<T> {
    pub time: f64,
    pub value: T,
}
impl<T> Timed<T> {
    #[inline]
    pub fn new(time: f64, value: T) -> Timed<T> {
        Timed { time, value }
    }

    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }

    #[inline]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Transform the value, keeping the timestamp.
    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Timed<U> {
        Timed {
            time: self.time,
            value: f(self.value),
        }
    }

    #[inline]
    pub fn try_map<U, E, F: FnOnce(T) -> StdResult<U, E>>(self, f: F) -> StdResult<Timed<U>, E> {
        Ok(Timed {
            time: self.time,
            value: f(self.value)?,
        })
    }

    #[inline]
    pub fn as_ref(&self) -> Timed<&T> {
        Timed {
            time: self.time,
            value: &self.value,
        }
    }

    #[inline]
    pub fn as_mut(&mut self) -> Timed<&mut T> {
        Timed {
            time: self.time,
            value: &mut self.value,
        }
    }

    /// Order by timestamp alone. Unordered timestamps (NaN) compare as equal.
    #[inline]
    pub fn cmp_time<U>(&self, other: &Timed<U>) -> Ordering {
        self.time
            .partial_cmp(&other.time)
            .unwrap_or(Ordering::Equal)
    }
}
impl<T: MidiBytes> Timed<T> {
    /// An untyped view of the timed message.
    #[inline]
    pub fn as_view(&self) -> Timed<MsgView<'_>> {
        Timed {
            time: self.time,
            value: self.value.as_msg_view(),
        }
    }

    /// A read-only view refined to `U`, with the same timestamp.
    ///
    /// # Panics
    ///
    /// Panics if the message is not of the kind `U` represents.
    #[inline]
    #[track_caller]
    pub fn view_as<'s, U: FromView<'s>>(&'s self) -> Timed<U> {
        Timed {
            time: self.time,
            value: self.value.view_as(),
        }
    }

    #[inline]
    pub fn try_view_as<'s, U: FromView<'s>>(&'s self) -> Result<Timed<U>> {
        Ok(Timed {
            time: self.time,
            value: self.value.try_view_as()?,
        })
    }
}
impl<T: MidiBytesMut> Timed<T> {
    /// An untyped read-write reference to the timed message.
    #[inline]
    pub fn msg_ref(&mut self) -> Timed<MsgRef<'_>> {
        Timed {
            time: self.time,
            value: self.value.msg_ref(),
        }
    }

    /// A read-write reference refined to `U`, with the same timestamp.
    ///
    /// # Panics
    ///
    /// Panics if the message is not of the kind `U` represents.
    #[inline]
    #[track_caller]
    pub fn ref_as<'s, U: FromRef<'s>>(&'s mut self) -> Timed<U> {
        Timed {
            time: self.time,
            value: self.value.ref_as(),
        }
    }

    #[inline]
    pub fn try_ref_as<'s, U: FromRef<'s>>(&'s mut self) -> Result<Timed<U>> {
        Ok(Timed {
            time: self.time,
            value: self.value.try_ref_as()?,
        })
    }
}
impl<T> From<(f64, T)> for Timed<T> {
    #[inline]
    fn from((time, value): (f64, T)) -> Timed<T> {
        Timed { time, value }
    }
}
