//! Key and preset numbers, which share the "normal values plus a one-past-the-end sentinel"
//! arithmetic used to iterate over them.

use crate::prelude::*;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
enum KeyRepr {
    Normal(u8),
    None,
    All,
}

/// A MIDI key (note) number in `0..=127`, or one of the sentinels `none` and `all`.
///
/// `none` sorts after every normal key and acts as the one-past-the-end value: incrementing the
/// last key yields `none`, and decrementing `none` yields the last key. `all` sorts after `none`
/// and cannot be incremented or decremented.
///
/// ```
/// # use midimsg::KeyNumber;
/// let mut key = KeyNumber::last();
/// key.increment();
/// assert_eq!(key, KeyNumber::none());
/// key.decrement();
/// assert_eq!(key, KeyNumber::new(127));
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyNumber(KeyRepr);
impl KeyNumber {
    /// The number of normal keys.
    pub const COUNT: u8 = 128;

    /// # Panics
    ///
    /// Panics if `number` is not in `0..=127`.
    #[inline]
    #[track_caller]
    pub fn new(number: u8) -> KeyNumber {
        assert!(number < Self::COUNT, "key number out of range");
        KeyNumber(KeyRepr::Normal(number))
    }

    #[inline]
    pub fn try_new(number: u8) -> Option<KeyNumber> {
        if number < Self::COUNT {
            Some(KeyNumber(KeyRepr::Normal(number)))
        } else {
            None
        }
    }

    #[inline]
    pub const fn none() -> KeyNumber {
        KeyNumber(KeyRepr::None)
    }

    #[inline]
    pub const fn all() -> KeyNumber {
        KeyNumber(KeyRepr::All)
    }

    #[inline]
    pub const fn first() -> KeyNumber {
        KeyNumber(KeyRepr::Normal(0))
    }

    #[inline]
    pub const fn last() -> KeyNumber {
        KeyNumber(KeyRepr::Normal(Self::COUNT - 1))
    }

    #[inline]
    pub fn is_normal(self) -> bool {
        matches!(self.0, KeyRepr::Normal(_))
    }

    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == KeyRepr::None
    }

    #[inline]
    pub fn is_all(self) -> bool {
        self.0 == KeyRepr::All
    }

    /// The key number of a normal key.
    ///
    /// # Panics
    ///
    /// Panics on `none` and `all`.
    #[inline]
    #[track_caller]
    pub fn number(self) -> u8 {
        match self.0 {
            KeyRepr::Normal(number) => number,
            _ => panic!("number() called on a non-normal key"),
        }
    }

    #[inline]
    pub fn try_number(self) -> Option<u8> {
        match self.0 {
            KeyRepr::Normal(number) => Some(number),
            _ => None,
        }
    }

    /// Step forward in place and return the new value (`++key`).
    ///
    /// # Panics
    ///
    /// Panics on `none` and `all`.
    #[track_caller]
    pub fn increment(&mut self) -> KeyNumber {
        self.0 = match self.0 {
            KeyRepr::Normal(n) if n + 1 < Self::COUNT => KeyRepr::Normal(n + 1),
            KeyRepr::Normal(_) => KeyRepr::None,
            KeyRepr::None => panic!("cannot increment past the end key sentinel"),
            KeyRepr::All => panic!("cannot increment the all-keys sentinel"),
        };
        *self
    }

    /// Step backward in place and return the new value (`--key`).
    ///
    /// # Panics
    ///
    /// Panics on the first key and on `all`.
    #[track_caller]
    pub fn decrement(&mut self) -> KeyNumber {
        self.0 = match self.0 {
            KeyRepr::Normal(n) if n > 0 => KeyRepr::Normal(n - 1),
            KeyRepr::Normal(_) => panic!("cannot decrement the first key"),
            KeyRepr::None => KeyRepr::Normal(Self::COUNT - 1),
            KeyRepr::All => panic!("cannot decrement the all-keys sentinel"),
        };
        *self
    }

    /// Step forward in place and return the previous value (`key++`).
    #[track_caller]
    pub fn post_increment(&mut self) -> KeyNumber {
        let old = *self;
        self.increment();
        old
    }

    /// Step backward in place and return the previous value (`key--`).
    #[track_caller]
    pub fn post_decrement(&mut self) -> KeyNumber {
        let old = *self;
        self.decrement();
        old
    }

    /// Iterate over the 128 normal keys, in order.
    #[inline]
    pub fn normals() -> impl DoubleEndedIterator<Item = KeyNumber> + ExactSizeIterator + Clone {
        (0..Self::COUNT).map(|n| KeyNumber(KeyRepr::Normal(n)))
    }
}
impl From<DataValue> for KeyNumber {
    #[inline]
    fn from(v: DataValue) -> KeyNumber {
        KeyNumber(KeyRepr::Normal(v.value()))
    }
}
impl fmt::Debug for KeyNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            KeyRepr::Normal(n) => write!(f, "KeyNumber({})", n),
            KeyRepr::None => f.write_str("KeyNumber(none)"),
            KeyRepr::All => f.write_str("KeyNumber(all)"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
enum PresetRepr {
    Normal(u8),
    None,
}

/// A program (preset) or song number in `0..=127`, or the one-past-the-end sentinel `none`.
///
/// Behaves like [`KeyNumber`](struct.KeyNumber.html) without the `all` sentinel.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PresetNumber(PresetRepr);
impl PresetNumber {
    /// The number of normal presets.
    pub const COUNT: u8 = 128;

    /// # Panics
    ///
    /// Panics if `number` is not in `0..=127`.
    #[inline]
    #[track_caller]
    pub fn new(number: u8) -> PresetNumber {
        assert!(number < Self::COUNT, "preset number out of range");
        PresetNumber(PresetRepr::Normal(number))
    }

    #[inline]
    pub fn try_new(number: u8) -> Option<PresetNumber> {
        if number < Self::COUNT {
            Some(PresetNumber(PresetRepr::Normal(number)))
        } else {
            None
        }
    }

    #[inline]
    pub const fn none() -> PresetNumber {
        PresetNumber(PresetRepr::None)
    }

    #[inline]
    pub const fn first() -> PresetNumber {
        PresetNumber(PresetRepr::Normal(0))
    }

    #[inline]
    pub const fn last() -> PresetNumber {
        PresetNumber(PresetRepr::Normal(Self::COUNT - 1))
    }

    #[inline]
    pub fn is_normal(self) -> bool {
        matches!(self.0, PresetRepr::Normal(_))
    }

    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == PresetRepr::None
    }

    /// # Panics
    ///
    /// Panics on `none`.
    #[inline]
    #[track_caller]
    pub fn number(self) -> u8 {
        match self.0 {
            PresetRepr::Normal(number) => number,
            PresetRepr::None => panic!("number() called on the none preset"),
        }
    }

    #[inline]
    pub fn try_number(self) -> Option<u8> {
        match self.0 {
            PresetRepr::Normal(number) => Some(number),
            PresetRepr::None => None,
        }
    }

    /// The number as shown on most devices, counting from one.
    #[inline]
    #[track_caller]
    pub fn display_number(self) -> u8 {
        self.number() + 1
    }

    /// `++preset`. Incrementing the last preset yields `none`.
    #[track_caller]
    pub fn increment(&mut self) -> PresetNumber {
        self.0 = match self.0 {
            PresetRepr::Normal(n) if n + 1 < Self::COUNT => PresetRepr::Normal(n + 1),
            PresetRepr::Normal(_) => PresetRepr::None,
            PresetRepr::None => panic!("cannot increment past the end preset sentinel"),
        };
        *self
    }

    /// `--preset`. Decrementing `none` yields the last preset.
    #[track_caller]
    pub fn decrement(&mut self) -> PresetNumber {
        self.0 = match self.0 {
            PresetRepr::Normal(n) if n > 0 => PresetRepr::Normal(n - 1),
            PresetRepr::Normal(_) => panic!("cannot decrement the first preset"),
            PresetRepr::None => PresetRepr::Normal(Self::COUNT - 1),
        };
        *self
    }

    /// `preset++`.
    #[track_caller]
    pub fn post_increment(&mut self) -> PresetNumber {
        let old = *self;
        self.increment();
        old
    }

    /// `preset--`.
    #[track_caller]
    pub fn post_decrement(&mut self) -> PresetNumber {
        let old = *self;
        self.decrement();
        old
    }

    #[inline]
    pub fn normals() -> impl DoubleEndedIterator<Item = PresetNumber> + ExactSizeIterator + Clone
    {
        (0..Self::COUNT).map(|n| PresetNumber(PresetRepr::Normal(n)))
    }
}
impl From<DataValue> for PresetNumber {
    #[inline]
    fn from(v: DataValue) -> PresetNumber {
        PresetNumber(PresetRepr::Normal(v.value()))
    }
}
impl fmt::Debug for PresetNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            PresetRepr::Normal(n) => write!(f, "PresetNumber({})", n),
            PresetRepr::None => f.write_str("PresetNumber(none)"),
        }
    }
}
