//! Driver for the ADS1113, ADS1114 and ADS1115 16-bit analog-to-digital
//! converters.
//!
//! Settings live in the device's configuration register and are never cached
//! here: getters read the register, setters read-modify-write it. Callers that
//! share a device between several tasks must serialize access themselves.

#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

mod asynch;
mod driver;
mod error;
mod register;
mod settings;
mod transport;
mod utils;

pub use asynch::Ads111xAsync;
pub use driver::Ads111x;
pub use error::Error;
pub use register::{
    ConfigRegister, DEFAULT_CONFIG, Field, Register, RegisterValue, decode, encode,
};
pub use settings::{
    ComparatorLatching, ComparatorMode, ComparatorPolarity, ComparatorQueue, DataRate,
    FullScaleRange, InputMux, Mode, RESOLUTION, Setting, Status,
};
pub use transport::{I2cTransport, SlaveAddress, Transport};
pub use utils::counts_to_volts;
