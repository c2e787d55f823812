//! Memory-mapped parallel bus (FSMC style).
//!
//! The external memory controller drives CS, RS, WR and RD itself. One address
//! line is wired to the panel's RS input, so accessing the base address is a
//! command transaction and accessing the address with that line set is a data
//! transaction. Bus timing is programmed once by the board layer; the only
//! runtime adjustment is the faster write timing applied through
//! [`TimingControl`] after a high-capability controller is detected.

use super::ParallelBus;

/// Base address of bank 1 (NOR/SRAM 1) of the STM32 FSMC.
pub const BANK1_BASE: usize = 0x6000_0000;

/// Address line wired to the panel's register-select input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterSelectLine {
    /// FSMC A16 (pin PD11 on STM32F1/F4).
    A16,
    /// FSMC A18 (pin PD13 on STM32F1/F4).
    A18,
}

impl RegisterSelectLine {
    /// Byte offset from the bank base at which RS reads high.
    ///
    /// The bus is 16 bits wide, so address line `An` is byte address bit `n + 1`.
    pub const fn data_offset(self) -> usize {
        match self {
            RegisterSelectLine::A16 => 0x0002_0000,
            RegisterSelectLine::A18 => 0x0008_0000,
        }
    }
}

/// Write cycle timing, in HCLK cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteTiming {
    /// Address setup time (ADDSET).
    pub address_setup: u8,
    /// Data setup time (DATAST).
    pub data_setup: u8,
}

impl WriteTiming {
    pub const fn new(address_setup: u8, data_setup: u8) -> Self {
        WriteTiming {
            address_setup,
            data_setup,
        }
    }
}

/// Write timing used once an ILI9341 or ST7796 has been detected.
pub const FAST_WRITE_TIMING: WriteTiming = WriteTiming::new(4, 4);

/// Hook for reprogramming the memory controller's write timing.
pub trait TimingControl {
    /// Applies `timing` to all following write cycles.
    fn set_write_timing(&mut self, timing: WriteTiming);
}

/// Timing control for boards where the write timing is fixed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTimingControl;

impl TimingControl for NoTimingControl {
    fn set_write_timing(&mut self, _timing: WriteTiming) {}
}

/// Memory-mapped bus with separate command and data addresses.
pub struct FsmcBus<T = NoTimingControl> {
    command: *mut u16,
    data: *mut u16,
    timing: T,
}

impl FsmcBus<NoTimingControl> {
    /// Creates a bus from the raw command (RS low) and data (RS high) addresses.
    ///
    /// # Safety
    ///
    /// Both pointers must be valid for volatile `u16` reads and writes for as
    /// long as the bus exists, and nothing else may access them concurrently.
    pub unsafe fn new(command: *mut u16, data: *mut u16) -> Self {
        FsmcBus {
            command,
            data,
            timing: NoTimingControl,
        }
    }

    /// Creates a bus for a panel on FSMC bank 1 with RS wired to `rs`.
    ///
    /// # Safety
    ///
    /// The FSMC bank must be enabled and configured for a 16-bit SRAM/NOR
    /// device, and the caller must own that bank exclusively.
    pub unsafe fn bank1(rs: RegisterSelectLine) -> Self {
        let command = BANK1_BASE as *mut u16;
        let data = (BANK1_BASE + rs.data_offset()) as *mut u16;
        // SAFETY: forwarded from the caller.
        unsafe { Self::new(command, data) }
    }
}

impl<T> FsmcBus<T> {
    /// Attaches a write-timing controller.
    pub fn with_timing_control<U: TimingControl>(self, timing: U) -> FsmcBus<U> {
        FsmcBus {
            command: self.command,
            data: self.data,
            timing,
        }
    }

    /// Returns the attached timing controller.
    pub fn timing_control(&self) -> &T {
        &self.timing
    }
}

impl<T: TimingControl> ParallelBus for FsmcBus<T> {
    #[inline]
    fn write_command(&mut self, index: u16) {
        // SAFETY: validity of the address is guaranteed by the constructor contract.
        unsafe { core::ptr::write_volatile(self.command, index) }
    }

    #[inline]
    fn write_data(&mut self, value: u16) {
        // SAFETY: see `write_command`.
        unsafe { core::ptr::write_volatile(self.data, value) }
    }

    #[inline]
    fn write_data_repeated(&mut self, value: u16, count: u32) {
        for _ in 0..count {
            // SAFETY: see `write_command`.
            unsafe { core::ptr::write_volatile(self.data, value) }
        }
    }

    #[inline]
    fn read_data(&mut self) -> u16 {
        // SAFETY: see `write_command`.
        unsafe { core::ptr::read_volatile(self.data) }
    }

    fn use_fast_write_timing(&mut self) {
        self.timing.set_write_timing(FAST_WRITE_TIMING);
    }
}
