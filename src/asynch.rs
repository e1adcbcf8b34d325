//! Asynchronous driver for ADS111x analog-to-digital converters

use embedded_hal::i2c::SevenBitAddress;
use embedded_hal_async::i2c::I2c;

use crate::{
    error::Error,
    register::{Field, Register, decode, encode},
    settings::{FullScaleRange, InputMux, Setting, Status},
    utils,
};

/// ADS111x driver instance (asynchronous)
///
/// Same register semantics as [`crate::Ads111x`]: no cached configuration,
/// one read-modify-write per setter.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ads111xAsync<I2C> {
    i2c: I2C,
    address: SevenBitAddress,
}

impl<I2C, E> Ads111xAsync<I2C>
where
    I2C: I2c<Error = E>,
{
    /// Create a new ADS111x driver instance
    pub fn new(i2c: I2C, address: impl Into<SevenBitAddress>) -> Self {
        Self {
            i2c,
            address: address.into(),
        }
    }

    /// Release the I2C bus, consuming the driver
    pub fn release(self) -> I2C {
        self.i2c
    }

    async fn read_register(&mut self, register: Register) -> Result<[u8; 2], Error<E>> {
        let mut buf = [0u8; 2];
        self.i2c
            .write_read(self.address, &[register.into()], &mut buf)
            .await
            .map_err(Error::Transport)?;

        #[cfg(feature = "defmt")]
        defmt::trace!("Register {} value: {:02X}", register, buf);

        Ok(buf)
    }

    /// Read the configuration register
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub async fn config(&mut self) -> Result<u16, Error<E>> {
        self.read_register(Register::Config)
            .await
            .map(u16::from_be_bytes)
    }

    /// Write the configuration register
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub async fn write_config(&mut self, config: u16) -> Result<(), Error<E>> {
        let [msb, lsb] = config.to_be_bytes();

        #[cfg(feature = "defmt")]
        defmt::trace!("Writing 0x{:04X} to config", config);

        self.i2c
            .write(self.address, &[Register::Config.into(), msb, lsb])
            .await
            .map_err(Error::Transport)
    }

    /// Read the in-place bits of one configuration field
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub async fn field(&mut self, field: Field) -> Result<u16, Error<E>> {
        Ok(decode(self.config().await?, field))
    }

    /// Replace one configuration field, leaving the others untouched
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub async fn set_field(&mut self, field: Field, value: u16) -> Result<(), Error<E>> {
        let config = self.config().await?;
        self.write_config(encode(config, field, value)).await
    }

    /// Read a typed configuration setting
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub async fn setting<S: Setting>(&mut self) -> Result<S, Error<E>> {
        self.field(S::FIELD).await.map(S::from_bits)
    }

    /// Write a typed configuration setting
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub async fn set_setting<S: Setting>(&mut self, setting: S) -> Result<(), Error<E>> {
        self.set_field(S::FIELD, setting.bits()).await
    }

    /// Check whether a conversion is in progress
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub async fn is_busy(&mut self) -> Result<bool, Error<E>> {
        Ok(self.setting::<Status>().await? == Status::Busy)
    }

    /// Start a single conversion
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub async fn start_conversion(&mut self) -> Result<(), Error<E>> {
        self.set_setting(Status::Idle).await
    }

    /// Read the conversion register for an input pair
    ///
    /// Switches the multiplexer first if needed, without waiting for the new
    /// input's conversion.
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub async fn read_raw(&mut self, input: InputMux) -> Result<i16, Error<E>> {
        let config = self.config().await?;

        if decode(config, Field::Mux) != input.bits() {
            #[cfg(feature = "defmt")]
            defmt::debug!("Switching input to {}", input);

            self.write_config(encode(config, Field::Mux, input.bits()))
                .await?;
        }

        self.read_register(Register::Conversion)
            .await
            .map(i16::from_be_bytes)
    }

    /// Read an input pair in volts
    ///
    /// # Errors
    ///
    /// Returns an error if I2C communication fails
    pub async fn read_volts(&mut self, input: InputMux) -> Result<f64, Error<E>> {
        let range = self.setting::<FullScaleRange>().await?;
        let count = self.read_raw(input).await?;
        Ok(utils::counts_to_volts(count, range))
    }
}
