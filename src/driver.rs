//! Blocking driver for ADS111x analog-to-digital converters

use embedded_hal::delay::DelayNs;

use crate::{
    error::Error,
    register::{ConfigRegister, Field, Register, RegisterValue, decode, encode},
    settings::{
        ComparatorLatching, ComparatorMode, ComparatorPolarity, ComparatorQueue, DataRate,
        FullScaleRange, InputMux, Mode, Setting, Status,
    },
    transport::Transport,
    utils,
};

/// ADS111x driver instance (blocking)
///
/// The configuration register is never cached: every getter reads it from the
/// device and every setter performs a read-modify-write. Those round trips are
/// not atomic, so a handle shared between several writers must be serialized
/// by the caller.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ads111x<T> {
    transport: T,
}

impl<T, E> Ads111x<T>
where
    T: Transport<Error = E>,
{
    /// Create a new ADS111x driver instance
    ///
    /// Nothing is written to the device.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Release the transport, consuming the driver
    pub fn release(self) -> T {
        self.transport
    }

    /// Close the underlying transport
    ///
    /// Closing twice is left to the transport to handle.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport fails to close
    pub fn close(&mut self) -> Result<(), Error<E>> {
        self.transport.close().map_err(Error::Transport)
    }

    /// Read raw bytes from the currently addressed register
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails
    pub fn read(&mut self, buf: &mut [u8]) -> Result<(), Error<E>> {
        self.transport.read(buf).map_err(Error::Transport)
    }

    /// Write raw bytes to the device
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails
    pub fn write(&mut self, buf: &[u8]) -> Result<(), Error<E>> {
        self.transport.write(buf).map_err(Error::Transport)
    }

    /// Read `buf.len()` bytes starting at a register
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails
    pub fn read_register_bytes(
        &mut self,
        register: Register,
        buf: &mut [u8],
    ) -> Result<(), Error<E>> {
        self.transport
            .read_register(register.into(), buf)
            .map_err(Error::Transport)
    }

    /// Read a 16-bit register
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails
    pub fn read_register(&mut self, register: Register) -> Result<u16, Error<E>> {
        let mut buf = [0u8; 2];
        self.read_register_bytes(register, &mut buf)?;
        let value = u16::from_be_bytes(buf);

        #[cfg(feature = "defmt")]
        defmt::trace!("Register {} value: 0x{:04X}", register, value);

        Ok(value)
    }

    fn read_signed(&mut self, register: Register) -> Result<i16, Error<E>> {
        let mut buf = [0u8; 2];
        self.read_register_bytes(register, &mut buf)?;
        Ok(i16::from_be_bytes(buf))
    }

    /// Write a 16-bit register
    ///
    /// Accepts either a word or a two byte big-endian buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPayload`] without touching the bus if a byte
    /// payload is not two bytes long, or an error if communication fails
    pub fn write_register<'a>(
        &mut self,
        register: Register,
        value: impl Into<RegisterValue<'a>>,
    ) -> Result<(), Error<E>> {
        let bytes = value.into().to_be_bytes()?;

        #[cfg(feature = "defmt")]
        defmt::trace!("Writing {:02X} to register {}", bytes, register);

        self.transport
            .write_register(register.into(), &bytes)
            .map_err(Error::Transport)
    }

    /// Read the configuration register
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails
    pub fn config(&mut self) -> Result<u16, Error<E>> {
        self.read_register(Register::Config)
    }

    /// Write the configuration register
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails
    pub fn write_config(&mut self, config: u16) -> Result<(), Error<E>> {
        self.write_register(Register::Config, config)
    }

    /// Read the configuration register as a decoded view of every field
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails
    pub fn snapshot(&mut self) -> Result<ConfigRegister, Error<E>> {
        self.config().map(ConfigRegister::from)
    }

    /// Read the in-place bits of one configuration field
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails
    pub fn field(&mut self, field: Field) -> Result<u16, Error<E>> {
        self.config().map(|config| decode(config, field))
    }

    /// Replace one configuration field, leaving the others untouched
    ///
    /// `value` is pre-shifted into the field's position. It is not validated;
    /// bits outside the field are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails
    pub fn set_field(&mut self, field: Field, value: u16) -> Result<(), Error<E>> {
        let config = self.config()?;
        let updated = encode(config, field, value);

        #[cfg(feature = "defmt")]
        defmt::debug!("{}: 0x{:04X} -> 0x{:04X}", field, config, updated);

        self.write_config(updated)
    }

    /// Read a configuration field by name
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownField`] without touching the bus if the name is
    /// not a field, or an error if communication fails
    pub fn field_by_name(&mut self, name: &str) -> Result<u16, Error<E>> {
        let field = name.parse::<Field>().map_err(|_| Error::UnknownField)?;
        self.field(field)
    }

    /// Replace a configuration field selected by name
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownField`] without touching the bus if the name is
    /// not a field, or an error if communication fails
    pub fn set_field_by_name(&mut self, name: &str, value: u16) -> Result<(), Error<E>> {
        let field = name.parse::<Field>().map_err(|_| Error::UnknownField)?;
        self.set_field(field, value)
    }

    /// Read a typed configuration setting
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails
    pub fn setting<S: Setting>(&mut self) -> Result<S, Error<E>> {
        self.field(S::FIELD).map(S::from_bits)
    }

    /// Write a typed configuration setting
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails
    pub fn set_setting<S: Setting>(&mut self, setting: S) -> Result<(), Error<E>> {
        self.set_field(S::FIELD, setting.bits())
    }

    /// Get the operational status
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails
    pub fn status(&mut self) -> Result<Status, Error<E>> {
        self.setting()
    }

    /// Check whether a conversion is in progress
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails
    pub fn is_busy(&mut self) -> Result<bool, Error<E>> {
        Ok(self.status()? == Status::Busy)
    }

    /// Start a single conversion
    ///
    /// Only meaningful in single-shot mode.
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails
    pub fn start_conversion(&mut self) -> Result<(), Error<E>> {
        self.set_setting(Status::Idle)
    }

    /// Poll the status bit until the current conversion finishes
    ///
    /// Waits `poll_interval_us` after every busy reading and gives up after
    /// `max_polls` of them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Timeout`] if the device is still busy after
    /// `max_polls` polls, or an error if communication fails
    pub fn wait_until_idle(
        &mut self,
        delay: &mut impl DelayNs,
        poll_interval_us: u32,
        max_polls: u32,
    ) -> Result<(), Error<E>> {
        for _ in 0..max_polls {
            if !self.is_busy()? {
                return Ok(());
            }
            delay.delay_us(poll_interval_us);
        }

        #[cfg(feature = "defmt")]
        defmt::warn!("Conversion still running after {} polls", max_polls);

        Err(Error::Timeout)
    }

    /// Get the selected input pair
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails
    pub fn input(&mut self) -> Result<InputMux, Error<E>> {
        self.setting()
    }

    /// Select the input pair
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails
    pub fn set_input(&mut self, input: InputMux) -> Result<(), Error<E>> {
        self.set_setting(input)
    }

    /// Get the full-scale range
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails
    pub fn scale(&mut self) -> Result<FullScaleRange, Error<E>> {
        self.setting()
    }

    /// Set the full-scale range
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails
    pub fn set_scale(&mut self, range: FullScaleRange) -> Result<(), Error<E>> {
        self.set_setting(range)
    }

    /// Get the operating mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails
    pub fn mode(&mut self) -> Result<Mode, Error<E>> {
        self.setting()
    }

    /// Set the operating mode (continuous or single-shot)
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails
    pub fn set_mode(&mut self, mode: Mode) -> Result<(), Error<E>> {
        self.set_setting(mode)
    }

    /// Get the data rate
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails
    pub fn data_rate(&mut self) -> Result<DataRate, Error<E>> {
        self.setting()
    }

    /// Set the data rate
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails
    pub fn set_data_rate(&mut self, rate: DataRate) -> Result<(), Error<E>> {
        self.set_setting(rate)
    }

    /// Get the comparator mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails
    pub fn comparator_mode(&mut self) -> Result<ComparatorMode, Error<E>> {
        self.setting()
    }

    /// Set the comparator mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails
    pub fn set_comparator_mode(&mut self, mode: ComparatorMode) -> Result<(), Error<E>> {
        self.set_setting(mode)
    }

    /// Get the comparator polarity
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails
    pub fn comparator_polarity(&mut self) -> Result<ComparatorPolarity, Error<E>> {
        self.setting()
    }

    /// Set the comparator polarity
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails
    pub fn set_comparator_polarity(
        &mut self,
        polarity: ComparatorPolarity,
    ) -> Result<(), Error<E>> {
        self.set_setting(polarity)
    }

    /// Get the comparator latching
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails
    pub fn comparator_latching(&mut self) -> Result<ComparatorLatching, Error<E>> {
        self.setting()
    }

    /// Set the comparator latching
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails
    pub fn set_comparator_latching(
        &mut self,
        latching: ComparatorLatching,
    ) -> Result<(), Error<E>> {
        self.set_setting(latching)
    }

    /// Get the comparator queue
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails
    pub fn comparator_queue(&mut self) -> Result<ComparatorQueue, Error<E>> {
        self.setting()
    }

    /// Set the comparator queue
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails
    pub fn set_comparator_queue(&mut self, queue: ComparatorQueue) -> Result<(), Error<E>> {
        self.set_setting(queue)
    }

    /// Get the comparator low threshold
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails
    pub fn low_threshold(&mut self) -> Result<i16, Error<E>> {
        self.read_signed(Register::LoThresh)
    }

    /// Set the comparator low threshold
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails
    pub fn set_low_threshold(&mut self, threshold: i16) -> Result<(), Error<E>> {
        self.write_register(Register::LoThresh, &threshold.to_be_bytes()[..])
    }

    /// Get the comparator high threshold
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails
    pub fn high_threshold(&mut self) -> Result<i16, Error<E>> {
        self.read_signed(Register::HiThresh)
    }

    /// Set the comparator high threshold
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails
    pub fn set_high_threshold(&mut self, threshold: i16) -> Result<(), Error<E>> {
        self.write_register(Register::HiThresh, &threshold.to_be_bytes()[..])
    }

    /// Read the conversion register for an input pair
    ///
    /// Switches the multiplexer first if another input is selected. The new
    /// input's conversion is not waited for: in continuous mode the value read
    /// right after a switch may still belong to the previous input. Use
    /// [`Self::wait_until_idle`] or a delay when a fresh sample matters.
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails
    pub fn read_raw(&mut self, input: InputMux) -> Result<i16, Error<E>> {
        let config = self.config()?;

        if decode(config, Field::Mux) != input.bits() {
            #[cfg(feature = "defmt")]
            defmt::debug!("Switching input to {}", input);

            self.write_config(encode(config, Field::Mux, input.bits()))?;
        }

        self.read_signed(Register::Conversion)
    }

    /// Read an input pair in volts
    ///
    /// The full-scale range is taken from a configuration read made just
    /// before the conversion is fetched. The two reads are not atomic.
    ///
    /// # Errors
    ///
    /// Returns an error if communication fails
    pub fn read_volts(&mut self, input: InputMux) -> Result<f64, Error<E>> {
        let range = self.scale()?;
        let count = self.read_raw(input)?;
        Ok(utils::counts_to_volts(count, range))
    }
}
