//! The restricted integers carried by MIDI data bytes.
//! `DataValue` is the 7-bit quantity of a single data byte, `DoubleDataValue` the 14-bit quantity
//! split over a LSB/MSB pair of data bytes.

use crate::prelude::*;

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Floating point types that a `DataValue` can be normalized into.
///
/// Implemented for `f32` and `f64`.
pub trait NormalizedFloat: sealed::Sealed + Copy {
    #[doc(hidden)]
    fn from_ratio(num: u16, den: u16) -> Self;
}
impl NormalizedFloat for f32 {
    #[inline]
    fn from_ratio(num: u16, den: u16) -> f32 {
        num as f32 / den as f32
    }
}
impl NormalizedFloat for f64 {
    #[inline]
    fn from_ratio(num: u16, den: u16) -> f64 {
        num as f64 / den as f64
    }
}

/// Defines an unsigned integer newtype limited to its low `$bits` bits, the way MIDI data bytes
/// keep their top bit clear.
macro_rules! restricted_int {
    {$(#[$attr:meta])* $name:ident : $inner:tt => $bits:expr} => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Default)]
        #[repr(transparent)]
        pub struct $name($inner);

        impl $name {
            const MASK: $inner = (1 << $bits) - 1;

            /// Zero.
            pub const MIN: $name = $name(0);

            #[doc = concat!("All ", stringify!($bits), " bits set.")]
            pub const MAX: $name = $name(Self::MASK);

            /// Wrap `raw`, which must fit in the available bits.
            ///
            /// # Panics
            ///
            /// Panics if `raw` is larger than `MAX`.
            #[inline]
            #[track_caller]
            pub fn new(raw: $inner) -> $name {
                assert!(raw <= Self::MASK, concat!(stringify!($name), " out of range"));
                $name(raw)
            }

            /// Wrap `raw`, discarding any bits above `MAX`.
            #[inline]
            pub const fn from_int_lossy(raw: $inner) -> $name {
                $name(raw & Self::MASK)
            }

            /// Wrap `raw`, or `None` if it is larger than `MAX`.
            #[inline]
            pub fn try_from(raw: $inner) -> Option<$name> {
                if raw <= Self::MASK {
                    Some($name(raw))
                } else {
                    None
                }
            }

            #[inline]
            pub const fn value(self) -> $inner {
                self.0
            }

            /// Reinterpret raw data bytes as values, or `None` if any of them is out of range.
            #[inline]
            pub fn slice_try_from_int(raw: &[$inner]) -> Option<&[$name]> {
                if raw.iter().all(|&int| int <= Self::MASK) {
                    // Same layout, and every element was just checked.
                    Some(unsafe { &*(raw as *const [$inner] as *const [$name]) })
                } else {
                    None
                }
            }
        }

        impl From<$name> for $inner {
            #[inline]
            fn from(val: $name) -> $inner {
                val.0
            }
        }
        impl fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl PartialEq<$inner> for $name {
            #[inline]
            fn eq(&self, other: &$inner) -> bool {
                self.0 == *other
            }
        }
        impl PartialEq<$name> for $inner {
            #[inline]
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }
        impl PartialOrd<$inner> for $name {
            #[inline]
            fn partial_cmp(&self, other: &$inner) -> Option<core::cmp::Ordering> {
                Some(self.0.cmp(other))
            }
        }
        impl PartialOrd<$name> for $inner {
            #[inline]
            fn partial_cmp(&self, other: &$name) -> Option<core::cmp::Ordering> {
                Some(self.cmp(&other.0))
            }
        }
    };
}
restricted_int! {
    /// The 7-bit value of a single MIDI data byte: velocities, controller values, program
    /// numbers and so on.
    DataValue: u8 => 7
}
restricted_int! {
    /// A 14-bit value transmitted as two data bytes, least significant 7 bits first.
    DoubleDataValue: u16 => 14
}

impl DataValue {
    /// Map a value in `[0, 1]` to the nearest of the 128 data values.
    ///
    /// # Panics
    ///
    /// Panics if `x` is outside of `[0, 1]` (or NaN).
    #[track_caller]
    pub fn from_normalized01(x: f64) -> DataValue {
        match DataValue::try_from_normalized01(x) {
            Some(val) => val,
            None => panic!("normalized data value outside of [0, 1]"),
        }
    }

    /// Map a value in `[0, 1]` to the nearest of the 128 data values, returning `None` if `x`
    /// is out of range.
    pub fn try_from_normalized01(x: f64) -> Option<DataValue> {
        if !(0.0..=1.0).contains(&x) {
            return None;
        }
        let scaled = x * Self::MASK as f64 + 0.5;
        Some(DataValue((scaled as u8).min(Self::MASK)))
    }

    /// The value divided by 127, in the requested floating point precision.
    ///
    /// ```
    /// # use midimsg::DataValue;
    /// assert_eq!(DataValue::new(127).to_normalized01::<f64>(), 1.0);
    /// assert_eq!(DataValue::new(0).to_normalized01::<f32>(), 0.0);
    /// ```
    #[inline]
    pub fn to_normalized01<F: NormalizedFloat>(self) -> F {
        F::from_ratio(self.0 as u16, Self::MASK as u16)
    }
}

impl DoubleDataValue {
    /// The center of the 14-bit range, `0x2000`.
    pub const MIDPOINT: DoubleDataValue = DoubleDataValue(0x2000);

    /// Pack two data bytes into a 14-bit value.
    /// The top bit of each byte is ignored.
    #[inline]
    pub const fn from_lsb_msb(lsb: u8, msb: u8) -> DoubleDataValue {
        DoubleDataValue(((msb & 0x7F) as u16) << 7 | (lsb & 0x7F) as u16)
    }

    /// The least significant 7 bits, sent first.
    #[inline]
    pub const fn lsb(self) -> DataValue {
        DataValue((self.0 & 0x7F) as u8)
    }

    /// The most significant 7 bits, sent second.
    #[inline]
    pub const fn msb(self) -> DataValue {
        DataValue((self.0 >> 7) as u8)
    }
}
impl From<DataValue> for DoubleDataValue {
    #[inline]
    fn from(v: DataValue) -> DoubleDataValue {
        DoubleDataValue(v.0 as u16)
    }
}
