//! Controller bring-up sequences.
//!
//! Two encodings are supported. [`InitProgram`] is the compact byte form used
//! by the MIPI-DCS style controllers, where every step is a register with a
//! handful of 8-bit parameters or a fixed wait after the register write.
//! [`Step`] lists are used for the older index/data controllers whose power
//! stages need waits at arbitrary points between 16-bit register writes.

use embedded_hal::delay::DelayNs;

use crate::bus::ParallelBus;

/// Highest parameter count a compact step can carry. Larger values in the
/// count position are delays in milliseconds.
pub const MAX_PARAMS: u8 = 15;

/// Register value that terminates a compact program.
pub const SENTINEL: u8 = 0;

/// One decoded step of an [`InitProgram`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitStep<'a> {
    /// Write `register`, then each byte of `params` as a data word.
    Params { register: u8, params: &'a [u8] },
    /// Write `register` without data, then wait `ms` milliseconds.
    Delay { register: u8, ms: u8 },
}

impl InitStep<'_> {
    pub fn register(&self) -> u8 {
        match *self {
            InitStep::Params { register, .. } | InitStep::Delay { register, .. } => register,
        }
    }
}

/// Problems found by [`InitProgram::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramError {
    /// The step starting at `offset` needs more bytes than the program has.
    Truncated { offset: usize },
    /// The program ends without a sentinel register.
    MissingSentinel,
}

/// Compact initialization program: `register, count, params[count]` or
/// `register, ms` (with `ms > 15`), terminated by a zero register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitProgram {
    bytes: &'static [u8],
}

impl InitProgram {
    pub const fn new(bytes: &'static [u8]) -> Self {
        InitProgram { bytes }
    }

    pub const fn as_bytes(&self) -> &'static [u8] {
        self.bytes
    }

    /// Iterates the decoded steps, stopping at the sentinel or at the first
    /// step that would read past the end of the program.
    pub fn steps(&self) -> Steps<'static> {
        Steps {
            bytes: self.bytes,
            offset: 0,
        }
    }

    /// Checks that the program terminates at a sentinel without overrunning.
    ///
    /// Returns the number of bytes consumed, sentinel included.
    pub fn validate(&self) -> Result<usize, ProgramError> {
        let mut steps = self.steps();
        while steps.next().is_some() {}
        match self.bytes.get(steps.offset) {
            Some(&SENTINEL) => Ok(steps.offset + 1),
            Some(_) => Err(ProgramError::Truncated {
                offset: steps.offset,
            }),
            None => Err(ProgramError::MissingSentinel),
        }
    }
}

/// Iterator over the steps of an [`InitProgram`].
#[derive(Debug, Clone)]
pub struct Steps<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl Steps<'_> {
    /// Offset of the next undecoded byte.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl<'a> Iterator for Steps<'a> {
    type Item = InitStep<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let register = *self.bytes.get(self.offset)?;
        if register == SENTINEL {
            return None;
        }
        let count = *self.bytes.get(self.offset + 1)?;
        if count > MAX_PARAMS {
            self.offset += 2;
            return Some(InitStep::Delay {
                register,
                ms: count,
            });
        }
        let start = self.offset + 2;
        let params = self.bytes.get(start..start + count as usize)?;
        self.offset = start + count as usize;
        Some(InitStep::Params { register, params })
    }
}

/// One step of an explicit bring-up list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Write `value` into register `index`.
    Write(u16, u16),
    /// Wait the given number of milliseconds.
    DelayMs(u16),
    /// Short settle pause between power-stage writes, in microseconds.
    DelayUs(u16),
}

/// Replays a compact program on `bus`.
pub fn play_program<BUS, DELAY>(bus: &mut BUS, delay: &mut DELAY, program: &InitProgram)
where
    BUS: ParallelBus + ?Sized,
    DELAY: DelayNs,
{
    for step in program.steps() {
        match step {
            InitStep::Params { register, params } => {
                bus.write_command(register as u16);
                for &param in params {
                    bus.write_data(param as u16);
                }
            }
            InitStep::Delay { register, ms } => {
                bus.write_command(register as u16);
                delay.delay_ms(ms as u32);
            }
        }
    }
}

/// Replays an explicit step list on `bus`.
pub fn play_steps<BUS, DELAY>(bus: &mut BUS, delay: &mut DELAY, steps: &[Step])
where
    BUS: ParallelBus + ?Sized,
    DELAY: DelayNs,
{
    for step in steps {
        match *step {
            Step::Write(index, value) => bus.write_register(index, value),
            Step::DelayMs(ms) => delay.delay_ms(ms as u32),
            Step::DelayUs(us) => delay.delay_us(us as u32),
        }
    }
}
