//! Bus support for HY-STM32 style boards (STM32F103 with a 16-bit parallel LCD).
//!
//! Two wirings exist. The FSMC boards put the panel on bank 1 with RS on A16
//! and use [`fsmc_bus`]. The bit-banged boards put the low data byte on
//! PC0..PC7, the high data byte on PB8..PB15 and CS/RS/WR/RD on PC8..PC11,
//! driven by [`Stm32f1SplitPort`].
//!
//! Clocks and pin modes (FSMC alternate functions, PC8..PC11 as outputs) are
//! left to the board setup code.

use stm32f1::stm32f103::{FSMC, GPIOB, GPIOC};

use crate::bus::bitband::bit_band_alias;
use crate::bus::{
    BitBandBus, ControlLine, DataDirection, FsmcBus, RegisterSelectLine, SplitPort,
    TimingControl, WriteTiming,
};

/// Port configuration nibbles: floating input, push-pull output 50 MHz.
const CONFIG_INPUT: u32 = 0x4444_4444;
const CONFIG_OUTPUT: u32 = 0x3333_3333;

/// Bank 1 read timing (BTR1): ADDSET 0xF, DATAST 60 HCLK.
pub const READ_TIMING: WriteTiming = WriteTiming::new(0xF, 60);
/// Bank 1 write timing (BWTR1) until a faster controller is detected.
pub const WRITE_TIMING: WriteTiming = WriteTiming::new(9, 8);

/// GPIOB/GPIOC ownership for the bit-banged HY-STM32 wiring.
pub struct Stm32f1SplitPort {
    gpiob: GPIOB,
    gpioc: GPIOC,
}

impl Stm32f1SplitPort {
    /// Takes the two data ports. GPIOB and GPIOC must be clocked.
    pub fn new(gpiob: GPIOB, gpioc: GPIOC) -> Self {
        Stm32f1SplitPort { gpiob, gpioc }
    }

    /// Returns the ports.
    pub fn free(self) -> (GPIOB, GPIOC) {
        (self.gpiob, self.gpioc)
    }

    const fn control_bit(line: ControlLine) -> u8 {
        match line {
            ControlLine::ChipSelect => 8,
            ControlLine::RegisterSelect => 9,
            ControlLine::Write => 10,
            ControlLine::Read => 11,
        }
    }

    /// Bit-band alias word of the GPIOC output bit driving `line`.
    fn control_alias(line: ControlLine) -> u32 {
        // SAFETY: only the field address is taken, nothing is dereferenced.
        let odr = unsafe { core::ptr::addr_of!((*GPIOC::ptr()).odr) } as usize as u32;
        bit_band_alias(odr, Self::control_bit(line))
    }
}

impl SplitPort for Stm32f1SplitPort {
    #[inline]
    fn set_line(&mut self, line: ControlLine, high: bool) {
        let alias = Self::control_alias(line) as *mut u32;
        // SAFETY: bit-band alias of a GPIOC output bit; GPIOC is owned by this port.
        unsafe { core::ptr::write_volatile(alias, high as u32) }
    }

    #[inline]
    fn write_low(&mut self, byte: u8) {
        self.gpioc
            .odr
            .modify(|r, w| unsafe { w.bits((r.bits() & !0x00FF) | byte as u32) });
    }

    #[inline]
    fn write_high(&mut self, byte: u8) {
        self.gpiob
            .odr
            .modify(|r, w| unsafe { w.bits((r.bits() & !0xFF00) | ((byte as u32) << 8)) });
    }

    #[inline]
    fn read_low(&mut self) -> u8 {
        self.gpioc.idr.read().bits() as u8
    }

    #[inline]
    fn read_high(&mut self) -> u8 {
        (self.gpiob.idr.read().bits() >> 8) as u8
    }

    fn set_data_direction(&mut self, direction: DataDirection) {
        let config = match direction {
            DataDirection::Input => CONFIG_INPUT,
            DataDirection::Output => CONFIG_OUTPUT,
        };
        self.gpiob.crh.write(|w| unsafe { w.bits(config) });
        self.gpioc.crl.write(|w| unsafe { w.bits(config) });
    }
}

/// Bit-banged bus of the HY-STM32 boards.
pub type HyStm32BitBandBus = BitBandBus<Stm32f1SplitPort>;

/// Creates the bit-banged bus. PC8..PC11 must already be push-pull outputs.
pub fn bitband_bus(gpiob: GPIOB, gpioc: GPIOC) -> HyStm32BitBandBus {
    BitBandBus::new(Stm32f1SplitPort::new(gpiob, gpioc))
}

/// Owns the FSMC and reprograms ADDSET/DATAST of bank 1's extended write
/// timing register.
pub struct Bank1WriteTiming {
    fsmc: FSMC,
}

impl Bank1WriteTiming {
    /// Configures bank 1 for a 16-bit SRAM in extended mode (mode A), with
    /// separate read and write timings, and enables it.
    pub fn new(fsmc: FSMC) -> Self {
        // BTR1/BWTR1 reset to all ones; start from zero so only the setup
        // times are non-zero and access mode A is selected.
        fsmc.btr1.write(|w| unsafe {
            w.bits(0)
                .addset()
                .bits(READ_TIMING.address_setup)
                .datast()
                .bits(READ_TIMING.data_setup)
        });
        fsmc.bwtr1.write(|w| unsafe {
            w.bits(0)
                .addset()
                .bits(WRITE_TIMING.address_setup)
                .datast()
                .bits(WRITE_TIMING.data_setup)
        });
        fsmc.bcr1.write(|w| unsafe {
            w.muxen()
                .clear_bit()
                .mtyp()
                .bits(0b00)
                .mwid()
                .bits(0b01)
                .faccen()
                .clear_bit()
                .wren()
                .set_bit()
                .waiten()
                .clear_bit()
                .extmod()
                .set_bit()
                .mbken()
                .set_bit()
        });
        Bank1WriteTiming { fsmc }
    }

    /// Returns the FSMC.
    pub fn free(self) -> FSMC {
        self.fsmc
    }
}

impl TimingControl for Bank1WriteTiming {
    fn set_write_timing(&mut self, timing: WriteTiming) {
        self.fsmc.bwtr1.modify(|_, w| unsafe {
            w.addset()
                .bits(timing.address_setup & 0xF)
                .datast()
                .bits(timing.data_setup)
        });
    }
}

/// Memory-mapped bus of the FSMC boards: bank 1, RS on A16.
///
/// Takes the FSMC so that the bank configuration and the write timing hook
/// stay with the bus. The FSMC clock and pins must be set up beforehand.
pub fn fsmc_bus(fsmc: FSMC) -> FsmcBus<Bank1WriteTiming> {
    let timing = Bank1WriteTiming::new(fsmc);
    // SAFETY: bank 1 was just configured and its controller is owned by `timing`.
    unsafe { FsmcBus::bank1(RegisterSelectLine::A16) }.with_timing_control(timing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_lines_alias_gpioc_output_bits() {
        // GPIOC ODR is 0x4001_100C
        assert_eq!(
            Stm32f1SplitPort::control_alias(ControlLine::ChipSelect),
            0x4222_01A0
        );
        assert_eq!(
            Stm32f1SplitPort::control_alias(ControlLine::RegisterSelect),
            0x4222_01A4
        );
        assert_eq!(Stm32f1SplitPort::control_alias(ControlLine::Write), 0x4222_01A8);
        assert_eq!(Stm32f1SplitPort::control_alias(ControlLine::Read), 0x4222_01AC);
    }

    #[test]
    fn bank1_timings_fit_their_fields() {
        assert!(READ_TIMING.address_setup <= 0xF);
        assert!(WRITE_TIMING.address_setup <= 0xF);
        assert!(WRITE_TIMING.data_setup > crate::bus::fsmc::FAST_WRITE_TIMING.data_setup);
    }
}
