//! Direct register bus: control lines as single output bits, data split across
//! two 8-bit GPIO ports.
//!
//! On Cortex-M3/M4 parts the control lines are usually toggled through the
//! bit-band alias region so that each edge is a single store. The register
//! access itself is delegated to a [`SplitPort`] implementation supplied by the
//! board layer (see `displays::hy_stm32` for the STM32F1 one).

use super::ParallelBus;

/// Start of the peripheral region that has a bit-band alias.
pub const PERIPH_BASE: u32 = 0x4000_0000;
/// Start of the peripheral bit-band alias region.
pub const PERIPH_BB_BASE: u32 = 0x4200_0000;

/// Returns the bit-band alias word address for bit `bit` of the peripheral
/// register at `register`.
pub const fn bit_band_alias(register: u32, bit: u8) -> u32 {
    (register & 0xF000_0000) + 0x0200_0000 + ((register & 0x000F_FFFF) << 5) + ((bit as u32) << 2)
}

/// Panel control lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlLine {
    ChipSelect,
    RegisterSelect,
    Write,
    Read,
}

/// Direction of the 16 data lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataDirection {
    Input,
    Output,
}

/// Register-level access to the two data ports and the control bits.
pub trait SplitPort {
    /// Drives a control line.
    fn set_line(&mut self, line: ControlLine, high: bool);

    /// Replaces the 8 data bits held by the low-byte port, keeping its other bits.
    fn write_low(&mut self, byte: u8);

    /// Replaces the 8 data bits held by the high-byte port, keeping its other bits.
    fn write_high(&mut self, byte: u8);

    /// Samples the data bits of the low-byte port.
    fn read_low(&mut self) -> u8;

    /// Samples the data bits of the high-byte port.
    fn read_high(&mut self) -> u8;

    /// Switches all 16 data lines between input and output.
    fn set_data_direction(&mut self, direction: DataDirection);
}

/// Parallel bus driven through a [`SplitPort`].
pub struct BitBandBus<P> {
    port: P,
}

impl<P: SplitPort> BitBandBus<P> {
    /// Wraps `port`, configuring the data lines as outputs and deasserting the
    /// control strobes.
    pub fn new(mut port: P) -> Self {
        port.set_data_direction(DataDirection::Output);
        port.set_line(ControlLine::ChipSelect, true);
        port.set_line(ControlLine::Write, true);
        port.set_line(ControlLine::Read, true);
        BitBandBus { port }
    }

    /// Returns the underlying port.
    pub fn release(self) -> P {
        self.port
    }

    #[inline]
    fn put_word(&mut self, word: u16) {
        self.port.write_low(word as u8);
        self.port.write_high((word >> 8) as u8);
    }

    #[inline]
    fn strobe_write(&mut self) {
        self.port.set_line(ControlLine::Write, false);
        self.port.set_line(ControlLine::Write, true);
    }

    #[inline]
    fn select(&mut self, data_phase: bool) {
        self.port.set_line(ControlLine::ChipSelect, false);
        self.port.set_line(ControlLine::RegisterSelect, data_phase);
    }

    #[inline]
    fn deselect(&mut self) {
        self.port.set_line(ControlLine::ChipSelect, true);
    }
}

impl<P: SplitPort> ParallelBus for BitBandBus<P> {
    fn write_command(&mut self, index: u16) {
        self.select(false);
        self.put_word(index);
        self.strobe_write();
        self.deselect();
    }

    fn write_data(&mut self, value: u16) {
        self.select(true);
        self.put_word(value);
        self.strobe_write();
        self.deselect();
    }

    fn write_data_repeated(&mut self, value: u16, count: u32) {
        self.select(true);
        self.put_word(value);
        for _ in 0..count {
            self.strobe_write();
        }
        self.deselect();
    }

    fn read_data(&mut self) -> u16 {
        self.port.set_data_direction(DataDirection::Input);
        self.select(true);
        self.port.set_line(ControlLine::Read, false);
        let word = ((self.port.read_high() as u16) << 8) | self.port.read_low() as u16;
        self.port.set_line(ControlLine::Read, true);
        self.deselect();
        self.port.set_data_direction(DataDirection::Output);
        word
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        Line(ControlLine, bool),
        Low(u8),
        High(u8),
        Direction(DataDirection),
        Sample,
    }

    #[derive(Default)]
    struct RecordingPort {
        events: Vec<Event>,
        input: u16,
    }

    impl SplitPort for RecordingPort {
        fn set_line(&mut self, line: ControlLine, high: bool) {
            self.events.push(Event::Line(line, high));
        }

        fn write_low(&mut self, byte: u8) {
            self.events.push(Event::Low(byte));
        }

        fn write_high(&mut self, byte: u8) {
            self.events.push(Event::High(byte));
        }

        fn read_low(&mut self) -> u8 {
            self.events.push(Event::Sample);
            self.input as u8
        }

        fn read_high(&mut self) -> u8 {
            (self.input >> 8) as u8
        }

        fn set_data_direction(&mut self, direction: DataDirection) {
            self.events.push(Event::Direction(direction));
        }
    }

    #[test]
    fn alias_matches_reference_formula() {
        // GPIOC ODR bit 8 on STM32F1.
        assert_eq!(bit_band_alias(0x4001_100C, 8), 0x4222_01A0);
        assert_eq!(bit_band_alias(PERIPH_BASE, 0), PERIPH_BB_BASE);
    }

    #[test]
    fn command_write_is_framed_by_chip_select() {
        let mut bus = BitBandBus::new(RecordingPort::default());
        bus.write_command(0x1234);
        let events = bus.release().events;

        assert_eq!(
            &events[4..],
            &[
                Event::Line(ControlLine::ChipSelect, false),
                Event::Line(ControlLine::RegisterSelect, false),
                Event::Low(0x34),
                Event::High(0x12),
                Event::Line(ControlLine::Write, false),
                Event::Line(ControlLine::Write, true),
                Event::Line(ControlLine::ChipSelect, true),
            ]
        );
    }

    #[test]
    fn repeated_write_pulses_strobe_only() {
        let mut bus = BitBandBus::new(RecordingPort::default());
        bus.write_data_repeated(0xFFFF, 5);
        let events = bus.release().events;

        let strobes = events
            .iter()
            .filter(|e| **e == Event::Line(ControlLine::Write, false))
            .count();
        let data_writes = events
            .iter()
            .filter(|e| matches!(e, Event::Low(_) | Event::High(_)))
            .count();
        assert_eq!(strobes, 5);
        assert_eq!(data_writes, 2);
    }

    #[test]
    fn read_switches_direction_around_sample() {
        let mut bus = BitBandBus::new(RecordingPort {
            input: 0x9325,
            ..Default::default()
        });
        assert_eq!(bus.read_data(), 0x9325);
        let events = bus.release().events;

        let sample = events.iter().position(|e| *e == Event::Sample).unwrap();
        let to_input = events
            .iter()
            .rposition(|e| *e == Event::Direction(DataDirection::Input))
            .unwrap();
        let to_output = events
            .iter()
            .rposition(|e| *e == Event::Direction(DataDirection::Output))
            .unwrap();
        assert!(to_input < sample && sample < to_output);
        assert!(events.contains(&Event::Line(ControlLine::Read, false)));
    }
}
