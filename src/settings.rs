//! Symbolic values of the configuration register fields.
//!
//! Every discriminant is already shifted into its field's bit position, so a
//! setting can be OR-ed straight into a configuration word.

use crate::register::Field;

/// A typed value of one configuration register field
pub trait Setting: Copy {
    /// The field this setting lives in
    const FIELD: Field;

    /// Pre-shifted register bits
    fn bits(self) -> u16;

    /// Interpret the (in-place) bits of [`Self::FIELD`]
    ///
    /// Bits outside the field are ignored.
    fn from_bits(bits: u16) -> Self;
}

/// Full resolution of the converter
pub const RESOLUTION: u32 = 1 << 16;

/// Operational status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum Status {
    /// A conversion is in progress
    Busy = 0,
    /// No conversion is in progress.
    ///
    /// Writing this value in single-shot mode starts a conversion.
    Idle = 1 << 15,
}

/// Input multiplexer configuration, positive then negative input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum InputMux {
    /// AIN0 and AIN1 (default)
    Ain0Ain1 = 0 << 12,
    /// AIN0 and AIN3
    Ain0Ain3 = 1 << 12,
    /// AIN1 and AIN3
    Ain1Ain3 = 2 << 12,
    /// AIN2 and AIN3
    Ain2Ain3 = 3 << 12,
    /// AIN0 and GND
    Ain0Gnd = 4 << 12,
    /// AIN1 and GND
    Ain1Gnd = 5 << 12,
    /// AIN2 and GND
    Ain2Gnd = 6 << 12,
    /// AIN3 and GND
    Ain3Gnd = 7 << 12,
}

/// Full-scale range of the programmable gain amplifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum FullScaleRange {
    /// ±6.144V
    Fs6_144V = 0 << 9,
    /// ±4.096V
    Fs4_096V = 1 << 9,
    /// ±2.048V (default)
    Fs2_048V = 2 << 9,
    /// ±1.024V
    Fs1_024V = 3 << 9,
    /// ±0.512V
    Fs0_512V = 4 << 9,
    /// ±0.256V
    ///
    /// Codes `0b110` and `0b111` both select this range.
    Fs0_256V = 5 << 9,
}

impl FullScaleRange {
    /// Minimum and maximum input voltage of the range
    #[must_use]
    pub const fn min_max(self) -> (f64, f64) {
        let max = match self {
            FullScaleRange::Fs6_144V => 6.144,
            FullScaleRange::Fs4_096V => 4.096,
            FullScaleRange::Fs2_048V => 2.048,
            FullScaleRange::Fs1_024V => 1.024,
            FullScaleRange::Fs0_512V => 0.512,
            FullScaleRange::Fs0_256V => 0.256,
        };
        (-max, max)
    }

    /// Difference between maximum and minimum voltage
    #[must_use]
    pub fn span(self) -> f64 {
        let (min, max) = self.min_max();
        max - min
    }

    /// Voltage represented by one count
    #[must_use]
    pub fn volts_per_count(self) -> f64 {
        self.span() / f64::from(RESOLUTION)
    }
}

/// Operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum Mode {
    /// Continuous conversion
    Continuous = 0,
    /// Power-down single-shot (default)
    SingleShot = 1 << 8,
}

/// Data rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum DataRate {
    /// 8 SPS
    Sps8 = 0 << 5,
    /// 16 SPS
    Sps16 = 1 << 5,
    /// 32 SPS
    Sps32 = 2 << 5,
    /// 64 SPS
    Sps64 = 3 << 5,
    /// 128 SPS (default)
    Sps128 = 4 << 5,
    /// 250 SPS
    Sps250 = 5 << 5,
    /// 475 SPS
    Sps475 = 6 << 5,
    /// 860 SPS
    Sps860 = 7 << 5,
}

impl DataRate {
    /// Nominal samples per second
    #[must_use]
    pub const fn samples_per_second(self) -> u32 {
        match self {
            DataRate::Sps8 => 8,
            DataRate::Sps16 => 16,
            DataRate::Sps32 => 32,
            DataRate::Sps64 => 64,
            DataRate::Sps128 => 128,
            DataRate::Sps250 => 250,
            DataRate::Sps475 => 475,
            DataRate::Sps860 => 860,
        }
    }

    /// Nominal duration of one conversion in microseconds, rounded up
    #[must_use]
    pub const fn conversion_time_us(self) -> u32 {
        1_000_000u32.div_ceil(self.samples_per_second())
    }
}

/// Comparator mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum ComparatorMode {
    /// Traditional comparator with hysteresis (default)
    Traditional = 0,
    /// Window comparator
    Window = 1 << 4,
}

/// Polarity of the ALERT/RDY pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum ComparatorPolarity {
    /// Active low (default)
    ActiveLow = 0,
    /// Active high
    ActiveHigh = 1 << 3,
}

/// Comparator latching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum ComparatorLatching {
    /// Non-latching (default)
    NonLatching = 0,
    /// Latching: ALERT/RDY stays asserted until the conversion is read
    Latching = 1 << 2,
}

/// Successive conversions beyond a threshold before ALERT/RDY is asserted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum ComparatorQueue {
    /// Assert after one conversion
    One = 0,
    /// Assert after two conversions
    Two = 1,
    /// Assert after four conversions
    Four = 2,
    /// Disable the comparator (default)
    Disabled = 3,
}

impl Setting for Status {
    const FIELD: Field = Field::Status;

    fn bits(self) -> u16 {
        self as u16
    }

    fn from_bits(bits: u16) -> Self {
        if bits & Self::FIELD.mask() == 0 {
            Status::Busy
        } else {
            Status::Idle
        }
    }
}

impl Setting for InputMux {
    const FIELD: Field = Field::Mux;

    fn bits(self) -> u16 {
        self as u16
    }

    fn from_bits(bits: u16) -> Self {
        match (bits & Self::FIELD.mask()) >> Self::FIELD.lsb() {
            0 => InputMux::Ain0Ain1,
            1 => InputMux::Ain0Ain3,
            2 => InputMux::Ain1Ain3,
            3 => InputMux::Ain2Ain3,
            4 => InputMux::Ain0Gnd,
            5 => InputMux::Ain1Gnd,
            6 => InputMux::Ain2Gnd,
            _ => InputMux::Ain3Gnd,
        }
    }
}

impl Setting for FullScaleRange {
    const FIELD: Field = Field::Scale;

    fn bits(self) -> u16 {
        self as u16
    }

    fn from_bits(bits: u16) -> Self {
        match (bits & Self::FIELD.mask()) >> Self::FIELD.lsb() {
            0 => FullScaleRange::Fs6_144V,
            1 => FullScaleRange::Fs4_096V,
            2 => FullScaleRange::Fs2_048V,
            3 => FullScaleRange::Fs1_024V,
            4 => FullScaleRange::Fs0_512V,
            _ => FullScaleRange::Fs0_256V,
        }
    }
}

impl Setting for Mode {
    const FIELD: Field = Field::Mode;

    fn bits(self) -> u16 {
        self as u16
    }

    fn from_bits(bits: u16) -> Self {
        if bits & Self::FIELD.mask() == 0 {
            Mode::Continuous
        } else {
            Mode::SingleShot
        }
    }
}

impl Setting for DataRate {
    const FIELD: Field = Field::DataRate;

    fn bits(self) -> u16 {
        self as u16
    }

    fn from_bits(bits: u16) -> Self {
        match (bits & Self::FIELD.mask()) >> Self::FIELD.lsb() {
            0 => DataRate::Sps8,
            1 => DataRate::Sps16,
            2 => DataRate::Sps32,
            3 => DataRate::Sps64,
            4 => DataRate::Sps128,
            5 => DataRate::Sps250,
            6 => DataRate::Sps475,
            _ => DataRate::Sps860,
        }
    }
}

impl Setting for ComparatorMode {
    const FIELD: Field = Field::ComparatorMode;

    fn bits(self) -> u16 {
        self as u16
    }

    fn from_bits(bits: u16) -> Self {
        if bits & Self::FIELD.mask() == 0 {
            ComparatorMode::Traditional
        } else {
            ComparatorMode::Window
        }
    }
}

impl Setting for ComparatorPolarity {
    const FIELD: Field = Field::ComparatorPolarity;

    fn bits(self) -> u16 {
        self as u16
    }

    fn from_bits(bits: u16) -> Self {
        if bits & Self::FIELD.mask() == 0 {
            ComparatorPolarity::ActiveLow
        } else {
            ComparatorPolarity::ActiveHigh
        }
    }
}

impl Setting for ComparatorLatching {
    const FIELD: Field = Field::ComparatorLatching;

    fn bits(self) -> u16 {
        self as u16
    }

    fn from_bits(bits: u16) -> Self {
        if bits & Self::FIELD.mask() == 0 {
            ComparatorLatching::NonLatching
        } else {
            ComparatorLatching::Latching
        }
    }
}

impl Setting for ComparatorQueue {
    const FIELD: Field = Field::ComparatorQueue;

    fn bits(self) -> u16 {
        self as u16
    }

    fn from_bits(bits: u16) -> Self {
        match bits & Self::FIELD.mask() {
            0 => ComparatorQueue::One,
            1 => ComparatorQueue::Two,
            2 => ComparatorQueue::Four,
            _ => ComparatorQueue::Disabled,
        }
    }
}
