use crate::prelude::*;

/// A Control Change controller number.
///
/// Every one of the 128 numbers is a valid controller, so the mapping to and from `DataValue`
/// is the identity. The standard assignments are available as associated constants, some of them
/// under several names.
///
/// ```
/// # use midimsg::{Control, DataValue};
/// assert_eq!(Control::MOD_WHEEL.number(), DataValue::new(1));
/// assert_eq!(Control::SUSTAIN, Control::DAMPER_PEDAL);
/// assert_eq!(Control::from_number(DataValue::new(7)), Control::CHANNEL_VOLUME);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Control(DataValue);

macro_rules! controls {
    ($( $(#[$attr:meta])* $name:ident = $num:expr, $display:expr; )*) => {
        impl Control {
            $(
                $(#[$attr])*
                pub const $name: Control = Control(DataValue::from_int_lossy($num));
            )*

            /// The standard name of this controller, if it has one.
            ///
            /// For numbers with several aliases, the first assigned name is returned.
            pub fn name(self) -> Option<&'static str> {
                $(
                    if self.0.value() == $num {
                        return Some($display);
                    }
                )*
                None
            }
        }
    };
}

controls! {
    BANK_SELECT = 0, "Bank Select";
    MOD_WHEEL = 1, "Modulation Wheel";
    BREATH = 2, "Breath Controller";
    FOOT = 4, "Foot Controller";
    PORTAMENTO_TIME = 5, "Portamento Time";
    DATA_ENTRY = 6, "Data Entry";
    CHANNEL_VOLUME = 7, "Channel Volume";
    BALANCE = 8, "Balance";
    PAN = 10, "Pan";
    EXPRESSION = 11, "Expression";
    EFFECT_CONTROL_1 = 12, "Effect Control 1";
    EFFECT_CONTROL_2 = 13, "Effect Control 2";
    GENERAL_PURPOSE_1 = 16, "General Purpose 1";
    GENERAL_PURPOSE_2 = 17, "General Purpose 2";
    GENERAL_PURPOSE_3 = 18, "General Purpose 3";
    GENERAL_PURPOSE_4 = 19, "General Purpose 4";
    BANK_SELECT_LSB = 32, "Bank Select LSB";
    MOD_WHEEL_LSB = 33, "Modulation Wheel LSB";
    BREATH_LSB = 34, "Breath Controller LSB";
    FOOT_LSB = 36, "Foot Controller LSB";
    PORTAMENTO_TIME_LSB = 37, "Portamento Time LSB";
    DATA_ENTRY_LSB = 38, "Data Entry LSB";
    CHANNEL_VOLUME_LSB = 39, "Channel Volume LSB";
    BALANCE_LSB = 40, "Balance LSB";
    PAN_LSB = 42, "Pan LSB";
    EXPRESSION_LSB = 43, "Expression LSB";
    SUSTAIN = 64, "Sustain Pedal";
    DAMPER_PEDAL = 64, "Damper Pedal";
    PORTAMENTO = 65, "Portamento On/Off";
    SOSTENUTO = 66, "Sostenuto";
    SOFT_PEDAL = 67, "Soft Pedal";
    LEGATO = 68, "Legato Footswitch";
    HOLD_2 = 69, "Hold 2";
    SOUND_VARIATION = 70, "Sound Variation";
    SOUND_CONTROLLER_1 = 70, "Sound Controller 1";
    RESONANCE = 71, "Resonance";
    TIMBRE = 71, "Timbre/Harmonic Intensity";
    RELEASE_TIME = 72, "Release Time";
    ATTACK_TIME = 73, "Attack Time";
    BRIGHTNESS = 74, "Brightness";
    CUTOFF = 74, "Cutoff";
    DECAY_TIME = 75, "Decay Time";
    VIBRATO_RATE = 76, "Vibrato Rate";
    VIBRATO_DEPTH = 77, "Vibrato Depth";
    VIBRATO_DELAY = 78, "Vibrato Delay";
    SOUND_CONTROLLER_10 = 79, "Sound Controller 10";
    GENERAL_PURPOSE_5 = 80, "General Purpose 5";
    GENERAL_PURPOSE_6 = 81, "General Purpose 6";
    GENERAL_PURPOSE_7 = 82, "General Purpose 7";
    GENERAL_PURPOSE_8 = 83, "General Purpose 8";
    PORTAMENTO_CONTROL = 84, "Portamento Control";
    HIGH_RES_VELOCITY_PREFIX = 88, "High Resolution Velocity Prefix";
    REVERB = 91, "Reverb Send";
    EFFECTS_1_DEPTH = 91, "Effects 1 Depth";
    TREMOLO = 92, "Tremolo Depth";
    EFFECTS_2_DEPTH = 92, "Effects 2 Depth";
    CHORUS = 93, "Chorus Send";
    EFFECTS_3_DEPTH = 93, "Effects 3 Depth";
    DETUNE = 94, "Detune Depth";
    EFFECTS_4_DEPTH = 94, "Effects 4 Depth";
    PHASER = 95, "Phaser Depth";
    EFFECTS_5_DEPTH = 95, "Effects 5 Depth";
    DATA_INCREMENT = 96, "Data Increment";
    DATA_DECREMENT = 97, "Data Decrement";
    NRPN_LSB = 98, "Non-Registered Parameter Number LSB";
    NRPN_MSB = 99, "Non-Registered Parameter Number MSB";
    RPN_LSB = 100, "Registered Parameter Number LSB";
    RPN_MSB = 101, "Registered Parameter Number MSB";
    /// Channel mode message: mute every sounding voice immediately.
    ALL_SOUND_OFF = 120, "All Sound Off";
    /// Channel mode message.
    RESET_ALL_CONTROLLERS = 121, "Reset All Controllers";
    /// Channel mode message.
    LOCAL_CONTROL = 122, "Local Control";
    /// Channel mode message.
    ALL_NOTES_OFF = 123, "All Notes Off";
    /// Channel mode message.
    OMNI_OFF = 124, "Omni Mode Off";
    /// Channel mode message.
    OMNI_ON = 125, "Omni Mode On";
    /// Channel mode message.
    MONO_ON = 126, "Mono Mode On";
    /// Channel mode message.
    POLY_ON = 127, "Poly Mode On";
}

impl Control {
    /// The controller with the given number.
    #[inline]
    pub const fn from_number(number: DataValue) -> Control {
        Control(number)
    }

    /// The controller number.
    #[inline]
    pub const fn number(self) -> DataValue {
        self.0
    }

    /// Controllers `120..=127` are channel mode messages rather than regular controllers.
    #[inline]
    pub fn is_channel_mode(self) -> bool {
        self.0.value() >= 120
    }

    /// For the 14-bit controllers `0..=31`, the controller carrying the least significant 7 bits.
    #[inline]
    pub fn lsb_pair(self) -> Option<Control> {
        if self.0.value() < 32 {
            Some(Control(DataValue::from_int_lossy(self.0.value() + 32)))
        } else {
            None
        }
    }

    /// For the LSB controllers `32..=63`, the controller carrying the most significant 7 bits.
    #[inline]
    pub fn msb_pair(self) -> Option<Control> {
        match self.0.value() {
            32..=63 => Some(Control(DataValue::from_int_lossy(self.0.value() - 32))),
            _ => None,
        }
    }
}
impl From<DataValue> for Control {
    #[inline]
    fn from(number: DataValue) -> Control {
        Control(number)
    }
}
impl From<Control> for DataValue {
    #[inline]
    fn from(control: Control) -> DataValue {
        control.0
    }
}
impl fmt::Debug for Control {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "Control({}: {})", self.0, name),
            None => write!(f, "Control({})", self.0),
        }
    }
}
