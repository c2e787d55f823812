//! Physical bus transports.
//!
//! Every transport implements the same four primitives defined by [`ParallelBus`]:
//! write a command (index) word, write a data word, write the same data word many
//! times and read a data word. The controller code never knows which transport it
//! is talking to; the transport is picked when the driver is composed.
//!
//! | Transport | Module | Data lines |
//! |-----------|--------|------------|
//! | Memory-mapped parallel bus (FSMC) | [`fsmc`] | external memory controller |
//! | Bit-band direct register | [`bitband`] | two 8-bit GPIO ports |
//! | Bit-banged GPIO | [`gpio`] | 16 independent pins |

use core::convert::Infallible;

pub mod bitband;
pub mod fsmc;
pub mod gpio;

pub use bitband::{BitBandBus, ControlLine, DataDirection, SplitPort};
pub use fsmc::{FsmcBus, NoTimingControl, RegisterSelectLine, TimingControl, WriteTiming};
pub use gpio::{FlexPin, GpioBus};

/// The four bus primitives shared by every transport.
///
/// All operations are blocking and cannot fail: a wiring or timing fault is a
/// deployment defect that this layer has no way to observe.
pub trait ParallelBus {
    /// Writes an index (command) word with register-select low.
    fn write_command(&mut self, index: u16);

    /// Writes a data word with register-select high.
    fn write_data(&mut self, value: u16);

    /// Writes the same data word `count` times.
    ///
    /// Used for solid fills. Transports that can hold the data lines stable and
    /// only pulse the write strobe should override this.
    fn write_data_repeated(&mut self, value: u16, count: u32) {
        for _ in 0..count {
            self.write_data(value);
        }
    }

    /// Reads a data word with register-select high.
    fn read_data(&mut self) -> u16;

    /// Called once after a controller that tolerates faster write cycles has
    /// been identified. Transports without adjustable timing ignore it.
    fn use_fast_write_timing(&mut self) {}

    /// Writes `value` into register `index`.
    #[inline]
    fn write_register(&mut self, index: u16, value: u16) {
        self.write_command(index);
        self.write_data(value);
    }

    /// Writes register `index` followed by each word of `words`.
    #[inline]
    fn write_register_words(&mut self, index: u16, words: &[u16]) {
        self.write_command(index);
        for &word in words {
            self.write_data(word);
        }
    }

    /// Selects register `index` and reads one data word back.
    #[inline]
    fn read_register(&mut self, index: u16) -> u16 {
        self.write_command(index);
        self.read_data()
    }
}

impl<T: ParallelBus + ?Sized> ParallelBus for &mut T {
    #[inline]
    fn write_command(&mut self, index: u16) {
        T::write_command(self, index)
    }

    #[inline]
    fn write_data(&mut self, value: u16) {
        T::write_data(self, value)
    }

    #[inline]
    fn write_data_repeated(&mut self, value: u16, count: u32) {
        T::write_data_repeated(self, value, count)
    }

    #[inline]
    fn read_data(&mut self) -> u16 {
        T::read_data(self)
    }

    #[inline]
    fn use_fast_write_timing(&mut self) {
        T::use_fast_write_timing(self)
    }
}

/// Unwraps the result of a pin operation whose error type is uninhabited.
#[inline(always)]
pub(crate) fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
