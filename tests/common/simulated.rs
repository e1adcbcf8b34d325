//! Register-level simulation of an ADS111x behind the `Transport` trait.

#![allow(dead_code)]

use ads111x::{DEFAULT_CONFIG, Register, Transport};
use embedded_hal::delay::DelayNs;

/// Transport call, recorded in the order it was issued
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Close,
    Read(usize),
    ReadRegister(u8, usize),
    Write(Vec<u8>),
    WriteRegister(u8, Vec<u8>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusError;

/// Simulated device holding the four registers
#[derive(Debug)]
pub struct SimulatedAds {
    pub registers: [u16; 4],
    pub calls: Vec<Call>,
    /// Register addressed by the last access
    pub pointer: u8,
    /// Number of upcoming config reads that report a conversion in progress
    pub busy_reads: u32,
    /// Fail every call from now on
    pub fail: bool,
}

impl SimulatedAds {
    pub fn new() -> Self {
        Self::with_config(DEFAULT_CONFIG)
    }

    pub fn with_config(config: u16) -> Self {
        let mut registers = [0; 4];
        registers[usize::from(u8::from(Register::Config))] = config;
        registers[usize::from(u8::from(Register::LoThresh))] = 0x8000;
        registers[usize::from(u8::from(Register::HiThresh))] = 0x7FFF;
        Self {
            registers,
            calls: Vec::new(),
            pointer: 0,
            busy_reads: 0,
            fail: false,
        }
    }

    pub fn with_conversion(mut self, count: i16) -> Self {
        self.registers[usize::from(u8::from(Register::Conversion))] = count as u16;
        self
    }

    pub fn config(&self) -> u16 {
        self.registers[usize::from(u8::from(Register::Config))]
    }

    pub fn config_writes(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| {
                matches!(call, Call::WriteRegister(reg, _) if *reg == u8::from(Register::Config))
            })
            .count()
    }

    fn load(&mut self, register: u8, buf: &mut [u8]) {
        let mut value = self.registers[usize::from(register & 0x03)];
        if register == u8::from(Register::Config) && self.busy_reads > 0 {
            self.busy_reads -= 1;
            value &= !0x8000;
        }
        let bytes = value.to_be_bytes();
        for (dst, src) in buf.iter_mut().zip(bytes) {
            *dst = src;
        }
    }

    fn store(&mut self, register: u8, data: &[u8]) {
        self.pointer = register;
        // Conversion register is read-only.
        if register == u8::from(Register::Conversion) || data.len() != 2 {
            return;
        }
        self.registers[usize::from(register & 0x03)] = u16::from_be_bytes([data[0], data[1]]);
    }

    fn check(&self) -> Result<(), BusError> {
        if self.fail { Err(BusError) } else { Ok(()) }
    }
}

impl Transport for SimulatedAds {
    type Error = BusError;

    fn close(&mut self) -> Result<(), Self::Error> {
        self.calls.push(Call::Close);
        self.check()
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.calls.push(Call::Read(buf.len()));
        self.check()?;
        self.load(self.pointer, buf);
        Ok(())
    }

    fn read_register(&mut self, register: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.calls.push(Call::ReadRegister(register, buf.len()));
        self.check()?;
        self.pointer = register;
        self.load(register, buf);
        Ok(())
    }

    fn write(&mut self, buf: &[u8]) -> Result<(), Self::Error> {
        self.calls.push(Call::Write(buf.to_vec()));
        self.check()?;
        if let Some((&register, data)) = buf.split_first() {
            self.store(register, data);
        }
        Ok(())
    }

    fn write_register(&mut self, register: u8, buf: &[u8]) -> Result<(), Self::Error> {
        self.calls.push(Call::WriteRegister(register, buf.to_vec()));
        self.check()?;
        self.store(register, buf);
        Ok(())
    }
}

/// Delay that only counts how long it was asked to wait
#[derive(Debug, Default)]
pub struct CountingDelay {
    pub total_ns: u64,
    pub calls: u32,
}

impl DelayNs for CountingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
        self.calls += 1;
    }
}
