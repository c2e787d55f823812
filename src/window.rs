//! Translation of logical coordinates into controller register writes.
//!
//! Everything here is pure: the cursor and window setters produce a [`WritePlan`]
//! which the driver then applies to the bus. Controllers other than the MIPI DCS
//! ones scan GRAM right to left relative to the panel glass, so X is mirrored
//! before being written.

use crate::GraphicsContext;
use crate::bus::ParallelBus;
use crate::registry::Family;
use crate::sequences::dcs;

/// Most register writes any single plan needs (the Himax window).
pub const MAX_WRITES: usize = 8;

/// A register index followed by up to four data words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterWrite {
    pub register: u16,
    data: [u16; 4],
    len: u8,
}

impl RegisterWrite {
    pub const fn word(register: u16, value: u16) -> Self {
        RegisterWrite {
            register,
            data: [value, 0, 0, 0],
            len: 1,
        }
    }

    /// Two big-endian bytes of `value`, one per data word.
    pub const fn pair(register: u16, value: u16) -> Self {
        RegisterWrite {
            register,
            data: [value >> 8, value & 0xFF, 0, 0],
            len: 2,
        }
    }

    /// Start and end addresses, each as two big-endian bytes.
    pub const fn range(register: u16, start: u16, end: u16) -> Self {
        RegisterWrite {
            register,
            data: [start >> 8, start & 0xFF, end >> 8, end & 0xFF],
            len: 4,
        }
    }

    pub fn data(&self) -> &[u16] {
        &self.data[..self.len as usize]
    }
}

/// Ordered register writes for one cursor or window update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WritePlan {
    writes: [RegisterWrite; MAX_WRITES],
    len: usize,
}

impl Default for WritePlan {
    fn default() -> Self {
        WritePlan {
            writes: [RegisterWrite::word(0, 0); MAX_WRITES],
            len: 0,
        }
    }
}

impl WritePlan {
    fn push(&mut self, write: RegisterWrite) {
        debug_assert!(self.len < MAX_WRITES);
        self.writes[self.len] = write;
        self.len += 1;
    }

    fn with(mut self, write: RegisterWrite) -> Self {
        self.push(write);
        self
    }

    pub fn writes(&self) -> &[RegisterWrite] {
        &self.writes[..self.len]
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sends every write to `bus` in order.
    pub fn apply<BUS: ParallelBus + ?Sized>(&self, bus: &mut BUS) {
        for write in self.writes() {
            bus.write_register_words(write.register, write.data());
        }
    }
}

/// Maps logical X to the controller's column address.
///
/// An involution for every family.
#[inline]
pub fn mirror_x(family: Family, width: u16, x: u16) -> u16 {
    if family.mirrors_x() {
        (width - 1) - x
    } else {
        x
    }
}

/// Register writes that move the GRAM address counter to `(x, y)`.
pub fn cursor_plan(family: Family, ctx: &GraphicsContext, x: u16, y: u16) -> WritePlan {
    let x = mirror_x(family, ctx.width, x);
    let plan = WritePlan::default();
    match family {
        Family::Ili932x => plan
            .with(RegisterWrite::word(0x20, y))
            .with(RegisterWrite::word(0x21, x)),
        Family::MipiDcs => plan
            .with(RegisterWrite::pair(dcs::CASET as u16, x))
            .with(RegisterWrite::pair(dcs::PASET as u16, y)),
        Family::Ssd1289 => plan
            .with(RegisterWrite::word(0x4E, y))
            .with(RegisterWrite::word(0x4F, x)),
        Family::Hx834x => plan
            .with(RegisterWrite::word(0x02, y >> 8))
            .with(RegisterWrite::word(0x03, y & 0xFF))
            .with(RegisterWrite::word(0x06, x >> 8))
            .with(RegisterWrite::word(0x07, x & 0xFF)),
        // address counter follows the window
        Family::Ssd2119 => plan,
    }
}

/// Register writes that restrict GRAM access to the inclusive rectangle
/// `(x1, y1)..=(x2, y2)`.
pub fn window_plan(
    family: Family,
    ctx: &GraphicsContext,
    x1: u16,
    y1: u16,
    x2: u16,
    y2: u16,
) -> WritePlan {
    debug_assert!(x1 <= x2 && y1 <= y2);
    let x1 = mirror_x(family, ctx.width, x1);
    let x2 = mirror_x(family, ctx.width, x2);
    let plan = WritePlan::default();
    match family {
        Family::Ili932x | Family::Ssd2119 => plan
            .with(RegisterWrite::word(0x50, y1))
            .with(RegisterWrite::word(0x51, y2))
            .with(RegisterWrite::word(0x52, x2))
            .with(RegisterWrite::word(0x53, x1)),
        Family::MipiDcs => plan
            .with(RegisterWrite::range(dcs::CASET as u16, x1, x2))
            .with(RegisterWrite::range(dcs::PASET as u16, y1, y2)),
        Family::Ssd1289 => plan
            .with(RegisterWrite::word(0x44, y1 | (y2 << 8)))
            .with(RegisterWrite::word(0x45, x2))
            .with(RegisterWrite::word(0x46, x1)),
        Family::Hx834x => plan
            .with(RegisterWrite::word(0x02, y1 >> 8))
            .with(RegisterWrite::word(0x03, y1 & 0xFF))
            .with(RegisterWrite::word(0x04, y2 >> 8))
            .with(RegisterWrite::word(0x05, y2 & 0xFF))
            .with(RegisterWrite::word(0x06, x2 >> 8))
            .with(RegisterWrite::word(0x07, x2 & 0xFF))
            .with(RegisterWrite::word(0x08, x1 >> 8))
            .with(RegisterWrite::word(0x09, x1 & 0xFF)),
    }
}

/// Window covering the whole display.
pub fn full_window_plan(family: Family, ctx: &GraphicsContext) -> WritePlan {
    window_plan(family, ctx, 0, 0, ctx.width - 1, ctx.height - 1)
}
