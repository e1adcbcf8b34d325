//! Bus access used by the blocking driver.

use embedded_hal::i2c::{I2c, Operation, SevenBitAddress};

/// Device address selected by the ADDR pin strapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum SlaveAddress {
    /// ADDR connected to GND
    #[default]
    Gnd = 0x48,
    /// ADDR connected to VDD
    Vdd = 0x49,
    /// ADDR connected to SDA
    Sda = 0x4A,
    /// ADDR connected to SCL
    Scl = 0x4B,
}

impl From<SlaveAddress> for u8 {
    fn from(address: SlaveAddress) -> u8 {
        address as u8
    }
}

/// Byte-level access to a single device on the bus
///
/// Implementations talk to exactly one device; addressing is their concern.
pub trait Transport {
    /// Bus error type
    type Error;

    /// Release the connection to the device
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying bus reports one
    fn close(&mut self) -> Result<(), Self::Error>;

    /// Read from the currently addressed register
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying bus reports one
    fn read(&mut self, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Read `buf.len()` bytes starting at `register`
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying bus reports one
    fn read_register(&mut self, register: u8, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Write raw bytes to the device
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying bus reports one
    fn write(&mut self, buf: &[u8]) -> Result<(), Self::Error>;

    /// Write `buf` to `register`
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying bus reports one
    fn write_register(&mut self, register: u8, buf: &[u8]) -> Result<(), Self::Error>;
}

/// [`Transport`] over an `embedded-hal` I2C bus
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cTransport<I2C> {
    i2c: I2C,
    address: SevenBitAddress,
}

impl<I2C: I2c> I2cTransport<I2C> {
    /// Bind a bus to a device address
    ///
    /// The address is not validated.
    pub fn new(i2c: I2C, address: impl Into<SevenBitAddress>) -> Self {
        Self {
            i2c,
            address: address.into(),
        }
    }

    /// Device address in use
    #[must_use]
    pub fn address(&self) -> SevenBitAddress {
        self.address
    }

    /// Release the I2C bus, consuming the transport
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> Transport for I2cTransport<I2C> {
    type Error = I2C::Error;

    fn close(&mut self) -> Result<(), Self::Error> {
        // The bus is owned, nothing to tear down until `release`.
        Ok(())
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.read(self.address, buf)
    }

    fn read_register(&mut self, register: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.write_read(self.address, &[register], buf)
    }

    fn write(&mut self, buf: &[u8]) -> Result<(), Self::Error> {
        self.i2c.write(self.address, buf)
    }

    fn write_register(&mut self, register: u8, buf: &[u8]) -> Result<(), Self::Error> {
        // Adjacent writes in one transaction go out as a single frame.
        self.i2c.transaction(
            self.address,
            &mut [Operation::Write(&[register]), Operation::Write(buf)],
        )
    }
}
