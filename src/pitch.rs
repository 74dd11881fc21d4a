use crate::prelude::*;

/// How far a receiver bends for a full pitch-bend deflection, in semitones.
///
/// The two directions are independent: either may be zero, and they need not be equal.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct PitchBendRange {
    max_down: f64,
    max_up: f64,
}
impl PitchBendRange {
    /// Bends by at most `semitones` in both directions.
    ///
    /// # Panics
    ///
    /// Panics if `semitones` is negative or NaN.
    #[inline]
    #[track_caller]
    pub fn symmetrical(semitones: f64) -> PitchBendRange {
        PitchBendRange::asymmetrical(semitones, semitones)
    }

    /// Bends down by at most `max_down` and up by at most `max_up` semitones.
    ///
    /// # Panics
    ///
    /// Panics if either bound is negative or NaN.
    #[inline]
    #[track_caller]
    pub fn asymmetrical(max_down: f64, max_up: f64) -> PitchBendRange {
        assert!(max_down >= 0.0, "pitch bend range below zero");
        assert!(max_up >= 0.0, "pitch bend range below zero");
        PitchBendRange { max_down, max_up }
    }

    #[inline]
    pub fn max_down(&self) -> f64 {
        self.max_down
    }

    #[inline]
    pub fn max_up(&self) -> f64 {
        self.max_up
    }

    /// Whether a bend of `semitones` (negative for down) fits in this range.
    #[inline]
    pub fn can_bend_by_semitones(&self, semitones: f64) -> bool {
        if semitones < 0.0 {
            -semitones <= self.max_down
        } else {
            semitones <= self.max_up
        }
    }
}
impl Default for PitchBendRange {
    /// The General MIDI default of two semitones in both directions.
    fn default() -> PitchBendRange {
        PitchBendRange::symmetrical(2.0)
    }
}

/// A pitch-bend amount, stored as the 14-bit value of a Pitch Bend message.
///
/// The raw value `0` is never stored: it is read as `1`, so that `min()` and `max()` are at the
/// same distance from the `midpoint()` of `8192`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct PitchBend(DoubleDataValue);
impl PitchBend {
    const MID: u16 = 0x2000;
    const HALF_SPAN: u16 = 0x1FFF;

    /// Full bend downwards, `1`.
    #[inline]
    pub const fn min() -> PitchBend {
        PitchBend(DoubleDataValue::from_lsb_msb(1, 0))
    }

    /// No bend, `8192`.
    #[inline]
    pub const fn midpoint() -> PitchBend {
        PitchBend(DoubleDataValue::MIDPOINT)
    }

    /// Full bend upwards, `16383`.
    #[inline]
    pub const fn max() -> PitchBend {
        PitchBend(DoubleDataValue::MAX)
    }

    #[inline]
    pub fn new(value: DoubleDataValue) -> PitchBend {
        if value.value() == 0 {
            PitchBend::min()
        } else {
            PitchBend(value)
        }
    }

    /// From the two data bytes of a Pitch Bend message.
    /// The top bit of each byte is ignored.
    #[inline]
    pub fn from_lsb_msb(lsb: u8, msb: u8) -> PitchBend {
        PitchBend::new(DoubleDataValue::from_lsb_msb(lsb, msb))
    }

    #[inline]
    pub fn value(self) -> DoubleDataValue {
        self.0
    }

    #[inline]
    pub fn lsb(self) -> DataValue {
        self.0.lsb()
    }

    #[inline]
    pub fn msb(self) -> DataValue {
        self.0.msb()
    }

    /// The bend that makes a receiver with the given range bend by `semitones`.
    ///
    /// Bends beyond the range saturate at `min()` or `max()`, including bends in a direction in
    /// which the range is zero. A bend of exactly zero semitones is always the midpoint, even
    /// when the range above it is zero.
    pub fn semitone_bend(semitones: f64, range: PitchBendRange) -> PitchBend {
        let fraction = if semitones < 0.0 {
            if range.max_down == 0.0 {
                -1.0
            } else {
                (semitones / range.max_down).max(-1.0)
            }
        } else if semitones == 0.0 {
            0.0
        } else if range.max_up == 0.0 {
            1.0
        } else {
            (semitones / range.max_up).min(1.0)
        };
        // Always positive, so truncating after adding a half rounds to nearest.
        let raw = (Self::MID as f64 + fraction * Self::HALF_SPAN as f64 + 0.5) as u16;
        let raw = raw.max(1).min(DoubleDataValue::MAX.value());
        PitchBend(DoubleDataValue::from_int_lossy(raw))
    }

    /// The bend in semitones for a receiver with the given range, negative when bending down.
    pub fn semitones_within(self, range: PitchBendRange) -> f64 {
        let fraction = self.as_f64();
        if fraction >= 0.0 {
            fraction * range.max_up
        } else {
            (fraction * range.max_down).max(-range.max_down)
        }
    }

    /// The bend as a floating-point value in `-1.0 ..= 1.0`, where `0.0` is the midpoint.
    #[inline]
    pub fn as_f64(self) -> f64 {
        (self.0.value() as f64 - Self::MID as f64) / Self::HALF_SPAN as f64
    }
}
impl Default for PitchBend {
    fn default() -> PitchBend {
        PitchBend::midpoint()
    }
}
impl From<DoubleDataValue> for PitchBend {
    #[inline]
    fn from(value: DoubleDataValue) -> PitchBend {
        PitchBend::new(value)
    }
}
