//! Bit-banged bus over independent GPIO pins.
//!
//! Slow but works on any pin assignment: 4 control lines and 16 data lines, each
//! driven through `embedded-hal` pin traits. The data lines are switched to
//! inputs for the duration of every read and back to outputs afterwards.

use core::convert::Infallible;

use embedded_hal::digital::{InputPin, OutputPin};

use super::{ParallelBus, infallible};

/// A pin whose direction can be switched at runtime.
pub trait FlexPin: OutputPin<Error = Infallible> + InputPin<Error = Infallible> {
    /// Reconfigures the pin as a floating input.
    fn set_as_input(&mut self);

    /// Reconfigures the pin as a push-pull output.
    fn set_as_output(&mut self);
}

/// Parallel bus built from 20 individual GPIO pins.
pub struct GpioBus<CS, RS, WR, RD, D> {
    cs: CS,
    rs: RS,
    wr: WR,
    rd: RD,
    /// Data lines, `data[0]` is D0.
    data: [D; 16],
}

impl<CS, RS, WR, RD, D> GpioBus<CS, RS, WR, RD, D>
where
    CS: OutputPin<Error = Infallible>,
    RS: OutputPin<Error = Infallible>,
    WR: OutputPin<Error = Infallible>,
    RD: OutputPin<Error = Infallible>,
    D: FlexPin,
{
    /// Takes ownership of the pins and drives them into the idle state:
    /// data lines as outputs, CS, WR and RD deasserted (high).
    pub fn new(cs: CS, rs: RS, wr: WR, rd: RD, data: [D; 16]) -> Self {
        let mut bus = GpioBus {
            cs,
            rs,
            wr,
            rd,
            data,
        };
        for pin in bus.data.iter_mut() {
            pin.set_as_output();
        }
        infallible(bus.cs.set_high());
        infallible(bus.wr.set_high());
        infallible(bus.rd.set_high());
        bus
    }

    /// Returns the pins.
    pub fn release(self) -> (CS, RS, WR, RD, [D; 16]) {
        (self.cs, self.rs, self.wr, self.rd, self.data)
    }

    fn put_word(&mut self, word: u16) {
        for (bit, pin) in self.data.iter_mut().enumerate() {
            if word & (1 << bit) != 0 {
                infallible(pin.set_high());
            } else {
                infallible(pin.set_low());
            }
        }
    }

    fn sample_word(&mut self) -> u16 {
        let mut word = 0;
        for (bit, pin) in self.data.iter_mut().enumerate() {
            if infallible(pin.is_high()) {
                word |= 1 << bit;
            }
        }
        word
    }

    fn strobe_write(&mut self) {
        infallible(self.wr.set_low());
        infallible(self.wr.set_high());
    }

    fn begin(&mut self, data_phase: bool) {
        infallible(self.cs.set_low());
        if data_phase {
            infallible(self.rs.set_high());
        } else {
            infallible(self.rs.set_low());
        }
    }

    fn end(&mut self) {
        infallible(self.cs.set_high());
    }
}

impl<CS, RS, WR, RD, D> ParallelBus for GpioBus<CS, RS, WR, RD, D>
where
    CS: OutputPin<Error = Infallible>,
    RS: OutputPin<Error = Infallible>,
    WR: OutputPin<Error = Infallible>,
    RD: OutputPin<Error = Infallible>,
    D: FlexPin,
{
    fn write_command(&mut self, index: u16) {
        self.begin(false);
        self.put_word(index);
        self.strobe_write();
        self.end();
    }

    fn write_data(&mut self, value: u16) {
        self.begin(true);
        self.put_word(value);
        self.strobe_write();
        self.end();
    }

    fn write_data_repeated(&mut self, value: u16, count: u32) {
        self.begin(true);
        self.put_word(value);
        for _ in 0..count {
            self.strobe_write();
        }
        self.end();
    }

    fn read_data(&mut self) -> u16 {
        for pin in self.data.iter_mut() {
            pin.set_as_input();
        }
        self.begin(true);
        infallible(self.rd.set_low());
        let word = self.sample_word();
        infallible(self.rd.set_high());
        self.end();
        for pin in self.data.iter_mut() {
            pin.set_as_output();
        }
        word
    }
}
