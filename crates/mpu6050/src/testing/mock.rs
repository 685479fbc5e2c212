extern crate std;

use std::vec::Vec;

use embedded_hal::delay::DelayNs;

use crate::error::Error;
use crate::interface::Interface;

#[derive(Clone, Debug)]
pub(crate) struct MockInterface {
    regs: [u8; 256],
    writes: Vec<(u8, u8)>,
    reads: Vec<(u8, usize)>,
    fail_write_reg: Option<u8>,
    fail_reads: bool,
    short_read: Option<usize>,
}

impl Default for MockInterface {
    fn default() -> Self {
        Self {
            regs: [0u8; 256],
            writes: Vec::new(),
            reads: Vec::new(),
            fail_write_reg: None,
            fail_reads: false,
            short_read: None,
        }
    }
}

impl MockInterface {
    pub(crate) fn with_reg(mut self, reg: u8, value: u8) -> Self {
        self.set_reg(reg, value);
        self
    }

    pub(crate) fn with_block(mut self, reg: u8, bytes: &[u8]) -> Self {
        for (offset, value) in bytes.iter().enumerate() {
            self.set_reg(reg.wrapping_add(offset as u8), *value);
        }
        self
    }

    /// Every write to `reg` is NACKed.
    pub(crate) fn failing_write(mut self, reg: u8) -> Self {
        self.fail_write_reg = Some(reg);
        self
    }

    pub(crate) fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Burst reads stop after `len` bytes.
    pub(crate) fn short_reads(mut self, len: usize) -> Self {
        self.short_read = Some(len);
        self
    }

    pub(crate) fn set_reg(&mut self, reg: u8, value: u8) {
        self.regs[reg as usize] = value;
    }

    pub(crate) fn reg(&self, reg: u8) -> u8 {
        self.regs[reg as usize]
    }

    pub(crate) fn set_fail_write_reg(&mut self, reg: Option<u8>) {
        self.fail_write_reg = reg;
    }

    pub(crate) fn writes(&self) -> &[(u8, u8)] {
        &self.writes
    }

    pub(crate) fn reads(&self) -> &[(u8, usize)] {
        &self.reads
    }
}

impl Interface for MockInterface {
    fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Error> {
        if self.fail_write_reg == Some(reg) {
            return Err(Error::Bus);
        }
        self.regs[reg as usize] = value;
        self.writes.push((reg, value));
        Ok(())
    }

    fn read_regs(&mut self, reg: u8, buffer: &mut [u8]) -> Result<usize, Error> {
        if self.fail_reads {
            return Err(Error::Bus);
        }
        self.reads.push((reg, buffer.len()));
        let len = match self.short_read {
            Some(limit) => buffer.len().min(limit),
            None => buffer.len(),
        };
        for (offset, slot) in buffer[..len].iter_mut().enumerate() {
            let addr = reg.wrapping_add(offset as u8);
            *slot = self.regs[addr as usize];
        }
        Ok(len)
    }
}

#[derive(Default, Debug)]
pub(crate) struct MockDelay {
    pub(crate) calls: u32,
    pub(crate) total_ns: u64,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.calls += 1;
        self.total_ns += u64::from(ns);
    }
}
