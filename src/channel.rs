use crate::prelude::*;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
enum Repr {
    None,
    Normal(u8),
    Omni,
}

/// A MIDI channel, or one of the two special values `none` and `omni`.
///
/// Channels are ordered with `none` below every normal channel and `omni` above them.
///
/// ```
/// # use midimsg::Channel;
/// assert!(Channel::none() < Channel::first());
/// assert!(Channel::last() < Channel::omni());
/// assert_eq!(Channel::new(12).display_number(), 13);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Channel(Repr);
impl Channel {
    /// The number of normal channels.
    pub const COUNT: u8 = 16;

    /// A normal channel, by zero-based index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `0..16`.
    #[inline]
    #[track_caller]
    pub fn new(index: u8) -> Channel {
        assert!(index < Self::COUNT, "channel index out of range");
        Channel(Repr::Normal(index))
    }

    /// A normal channel, or `None` if `index` is not in `0..16`.
    #[inline]
    pub fn try_new(index: u8) -> Option<Channel> {
        if index < Self::COUNT {
            Some(Channel(Repr::Normal(index)))
        } else {
            None
        }
    }

    /// A normal channel from the low nibble of a status byte.
    #[inline]
    pub(crate) fn from_status_nibble(status: u8) -> Channel {
        Channel(Repr::Normal(bit_range(status, 0..4)))
    }

    /// No channel at all, as for system messages.
    #[inline]
    pub const fn none() -> Channel {
        Channel(Repr::None)
    }

    /// All channels at once.
    #[inline]
    pub const fn omni() -> Channel {
        Channel(Repr::Omni)
    }

    #[inline]
    pub const fn first() -> Channel {
        Channel(Repr::Normal(0))
    }

    #[inline]
    pub const fn last() -> Channel {
        Channel(Repr::Normal(Self::COUNT - 1))
    }

    #[inline]
    pub fn is_normal(self) -> bool {
        matches!(self.0, Repr::Normal(_))
    }

    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == Repr::None
    }

    #[inline]
    pub fn is_omni(self) -> bool {
        self.0 == Repr::Omni
    }

    /// The zero-based index of a normal channel.
    ///
    /// # Panics
    ///
    /// Panics if the channel is `none` or `omni`.
    #[inline]
    #[track_caller]
    pub fn index(self) -> u8 {
        match self.0 {
            Repr::Normal(index) => index,
            _ => panic!("index() called on a non-normal channel"),
        }
    }

    /// The zero-based index of a normal channel, or `None` for `none` and `omni`.
    #[inline]
    pub fn try_index(self) -> Option<u8> {
        match self.0 {
            Repr::Normal(index) => Some(index),
            _ => None,
        }
    }

    /// The one-based number usually shown to users.
    #[inline]
    #[track_caller]
    pub fn display_number(self) -> u8 {
        self.index() + 1
    }

    /// Iterate over the 16 normal channels, in order.
    #[inline]
    pub fn all() -> Channels {
        Channels { range: 0..Self::COUNT }
    }
}
impl fmt::Debug for Channel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Repr::None => f.write_str("Channel(none)"),
            Repr::Normal(index) => write!(f, "Channel({})", index),
            Repr::Omni => f.write_str("Channel(omni)"),
        }
    }
}
impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Repr::None => f.write_str("none"),
            Repr::Normal(index) => write!(f, "{}", index + 1),
            Repr::Omni => f.write_str("omni"),
        }
    }
}

/// Iterator over the normal channels, returned by [`Channel::all`].
#[derive(Clone, Debug)]
pub struct Channels {
    range: ops::Range<u8>,
}
impl Iterator for Channels {
    type Item = Channel;
    #[inline]
    fn next(&mut self) -> Option<Channel> {
        self.range.next().map(|i| Channel(Repr::Normal(i)))
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}
impl DoubleEndedIterator for Channels {
    #[inline]
    fn next_back(&mut self) -> Option<Channel> {
        self.range.next_back().map(|i| Channel(Repr::Normal(i)))
    }
}
impl ExactSizeIterator for Channels {}
