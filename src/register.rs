//! Register addresses and the configuration register field codec.

use core::str::FromStr;

use crate::error::Error;

/// Configuration the device boots with.
pub const DEFAULT_CONFIG: u16 = 0x8583;

/// Register addresses for ADS111x
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    /// Last conversion result
    Conversion = 0x00,
    /// Configuration register
    Config = 0x01,
    /// Comparator low threshold
    LoThresh = 0x02,
    /// Comparator high threshold
    HiThresh = 0x03,
}

impl From<Register> for u8 {
    fn from(reg: Register) -> u8 {
        reg as u8
    }
}

/// A field of the configuration register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    /// Operational status / single-shot conversion start
    Status,
    /// Input multiplexer
    Mux,
    /// Programmable gain amplifier (full-scale range)
    Scale,
    /// Operating mode
    Mode,
    /// Data rate
    DataRate,
    /// Comparator mode
    ComparatorMode,
    /// Comparator polarity
    ComparatorPolarity,
    /// Latching comparator
    ComparatorLatching,
    /// Comparator queue and disable
    ComparatorQueue,
}

impl Field {
    /// Every field, from the most significant to the least significant.
    pub const ALL: [Field; 9] = [
        Field::Status,
        Field::Mux,
        Field::Scale,
        Field::Mode,
        Field::DataRate,
        Field::ComparatorMode,
        Field::ComparatorPolarity,
        Field::ComparatorLatching,
        Field::ComparatorQueue,
    ];

    /// Position of the field's least significant bit
    #[must_use]
    pub const fn lsb(self) -> u8 {
        match self {
            Field::Status => 15,
            Field::Mux => 12,
            Field::Scale => 9,
            Field::Mode => 8,
            Field::DataRate => 5,
            Field::ComparatorMode => 4,
            Field::ComparatorPolarity => 3,
            Field::ComparatorLatching => 2,
            Field::ComparatorQueue => 0,
        }
    }

    /// Number of bits occupied by the field
    #[must_use]
    pub const fn width(self) -> u8 {
        match self {
            Field::Mux | Field::Scale | Field::DataRate => 3,
            Field::ComparatorQueue => 2,
            Field::Status
            | Field::Mode
            | Field::ComparatorMode
            | Field::ComparatorPolarity
            | Field::ComparatorLatching => 1,
        }
    }

    /// Mask of the field's bits, in place
    #[must_use]
    pub const fn mask(self) -> u16 {
        ((1u16 << self.width()) - 1) << self.lsb()
    }

    /// Name accepted by [`Field::from_str`]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Field::Status => "status",
            Field::Mux => "mux",
            Field::Scale => "scale",
            Field::Mode => "mode",
            Field::DataRate => "data_rate",
            Field::ComparatorMode => "comparator_mode",
            Field::ComparatorPolarity => "comparator_polarity",
            Field::ComparatorLatching => "comparator_latching",
            Field::ComparatorQueue => "comparator_queue",
        }
    }
}

impl FromStr for Field {
    type Err = Error<core::convert::Infallible>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or(Error::UnknownField)
    }
}

/// Isolate a field of a configuration word.
///
/// The result keeps its bit position, so it compares directly against the
/// pre-shifted setting values.
#[must_use]
#[inline]
pub const fn decode(register: u16, field: Field) -> u16 {
    register & field.mask()
}

/// Replace a field of a configuration word with a pre-shifted value.
///
/// Bits of `value` outside the field are discarded, so every other field of
/// `register` comes back unchanged.
#[must_use]
#[inline]
pub const fn encode(register: u16, field: Field, value: u16) -> u16 {
    let mask = field.mask();
    (register & !mask) | (value & mask)
}

/// Payload accepted by the generic register write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterValue<'a> {
    /// A 16-bit word, sent big-endian
    Word(u16),
    /// Raw bytes, sent as-is. Must be exactly two bytes long.
    Bytes(&'a [u8]),
}

impl RegisterValue<'_> {
    /// Wire representation of the payload
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPayload`] if a byte payload is not two bytes long
    pub fn to_be_bytes<E>(self) -> Result<[u8; 2], Error<E>> {
        match self {
            RegisterValue::Word(word) => Ok(word.to_be_bytes()),
            RegisterValue::Bytes(bytes) => {
                <[u8; 2]>::try_from(bytes).map_err(|_| Error::InvalidPayload { len: bytes.len() })
            }
        }
    }
}

impl From<u16> for RegisterValue<'_> {
    fn from(word: u16) -> Self {
        RegisterValue::Word(word)
    }
}

impl<'a> From<&'a [u8]> for RegisterValue<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        RegisterValue::Bytes(bytes)
    }
}

bitfield::bitfield! {
    /// CONFIG
    ///
    /// Right-aligned view of a whole configuration word
    #[derive(Clone, Copy, PartialEq, Eq)]
    pub struct ConfigRegister(u16);
    impl Debug;
    u8;
    /// Operational status
    ///
    /// - `0` = conversion in progress
    /// - `1` = idle
    pub os, _: 15;
    /// Input multiplexer configuration
    pub mux, _: 14, 12;
    /// Programmable gain amplifier configuration
    pub pga, _: 11, 9;
    /// Operating mode
    ///
    /// - `0` = continuous conversion
    /// - `1` = single-shot
    pub mode, _: 8;
    /// Data rate
    pub dr, _: 7, 5;
    /// Comparator mode
    pub comp_mode, _: 4;
    /// Comparator polarity
    pub comp_pol, _: 3;
    /// Latching comparator
    pub comp_lat, _: 2;
    /// Comparator queue and disable
    pub comp_que, _: 1, 0;
}

impl ConfigRegister {
    /// The raw configuration word
    #[must_use]
    pub fn raw(&self) -> u16 {
        self.0
    }

    /// Check whether a conversion is in progress
    #[must_use]
    pub fn is_busy(&self) -> bool {
        !self.os()
    }

    /// Check whether the device is in single-shot mode
    #[must_use]
    pub fn is_single_shot(&self) -> bool {
        self.mode()
    }
}

impl Default for ConfigRegister {
    fn default() -> Self {
        ConfigRegister(DEFAULT_CONFIG)
    }
}

impl From<u16> for ConfigRegister {
    fn from(raw: u16) -> Self {
        ConfigRegister(raw)
    }
}
