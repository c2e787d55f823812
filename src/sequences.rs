//! Per-controller initialization data.
//!
//! ILI9341 and ST7796 use the compact [`InitProgram`] encoding. Everything else
//! is an explicit [`Step`] list, because the power stages of those controllers
//! need waits between individual register writes.

use crate::init::{InitProgram, Step};
use Step::{DelayMs, DelayUs, Write};

/// Pause inserted between power-stage writes on boards that need a short settle.
pub const SETTLE_US: u16 = 10;

/// MIPI DCS command set shared by ILI9341 and ST7796.
pub mod dcs {
    pub const SLPIN: u8 = 0x10;
    pub const SLPOUT: u8 = 0x11;
    pub const GAMSET: u8 = 0x26;
    pub const DISPOFF: u8 = 0x28;
    pub const DISPON: u8 = 0x29;
    pub const CASET: u8 = 0x2A;
    pub const PASET: u8 = 0x2B;
    pub const RAMWR: u8 = 0x2C;
    pub const RAMRD: u8 = 0x2E;
    pub const MADCTL: u8 = 0x36;
    pub const PIXSET: u8 = 0x3A;
    pub const FRMCTR1: u8 = 0xB1;
    pub const INVCTR: u8 = 0xB4;
    pub const DISCTRL: u8 = 0xB6;
    pub const ENTRYMODE: u8 = 0xB7;
    pub const PWCTRL1: u8 = 0xC0;
    pub const PWCTRL2: u8 = 0xC1;
    pub const PWCTRL3: u8 = 0xC2;
    pub const VMCTRL1: u8 = 0xC5;
    pub const VMCTRL2: u8 = 0xC7;
    pub const PCA: u8 = 0xCB;
    pub const PCB: u8 = 0xCF;
    pub const RDID4: u8 = 0xD3;
    pub const PGAMCTRL: u8 = 0xE0;
    pub const NGAMCTRL: u8 = 0xE1;
    pub const DTCA: u8 = 0xE8;
    pub const DTCB: u8 = 0xEA;
    pub const POSC: u8 = 0xED;
    pub const CSCON: u8 = 0xF0;
    pub const E3G: u8 = 0xF2;
    pub const PRC: u8 = 0xF7;
}

use dcs::*;

#[rustfmt::skip]
const ILI9341_BYTES: [u8; 117] = [
    PCB, 3, 0x00, 0xC1, 0x30,
    POSC, 4, 0x64, 0x03, 0x12, 0x81,
    DTCA, 3, 0x85, 0x10, 0x7A,
    PCA, 5, 0x39, 0x2C, 0x00, 0x34, 0x02,
    PRC, 1, 0x20,
    DTCB, 2, 0x00, 0x00,
    PWCTRL1, 1, 0x1B,
    PWCTRL2, 1, 0x01,
    VMCTRL1, 2, 0x30, 0x30,
    VMCTRL2, 1, 0xB7,
    MADCTL, 1, 0x48,
    PIXSET, 1, 0x55,
    FRMCTR1, 2, 0x00, 0x1A,
    DISCTRL, 2, 0x0A, 0xA2,
    E3G, 1, 0x00,
    GAMSET, 1, 0x01,
    PGAMCTRL, 15, 0x0F, 0x2A, 0x28, 0x08, 0x0E, 0x08, 0x54, 0xA9, 0x43, 0x0A, 0x0F, 0x00, 0x00, 0x00, 0x00,
    NGAMCTRL, 15, 0x00, 0x15, 0x17, 0x07, 0x11, 0x06, 0x2B, 0x56, 0x3C, 0x05, 0x10, 0x0F, 0x3F, 0x3F, 0x0F,
    PASET, 4, 0x00, 0x00, 0x01, 0x3F,
    CASET, 4, 0x00, 0x00, 0x00, 0xEF,
    SLPOUT, 120,
    DISPON, 0,
    // landscape, BGR
    MADCTL, 1, 0x68,
    0,
];

#[rustfmt::skip]
const ST7796_BYTES: [u8; 80] = [
    CSCON, 1, 0xC3,
    CSCON, 1, 0x96,
    MADCTL, 1, 0x28,
    PIXSET, 1, 0x55,
    INVCTR, 1, 0x01,
    ENTRYMODE, 1, 0xC6,
    DTCA, 8, 0x40, 0x8A, 0x00, 0x00, 0x29, 0x19, 0xA5, 0x33,
    PWCTRL2, 1, 0x06,
    PWCTRL3, 1, 0xA7,
    VMCTRL1, 1, 0x18,
    PGAMCTRL, 14, 0xF0, 0x09, 0x0B, 0x06, 0x04, 0x15, 0x2F, 0x54, 0x42, 0x3C, 0x17, 0x14, 0x18, 0x1B,
    NGAMCTRL, 14, 0xF0, 0x09, 0x0B, 0x06, 0x04, 0x03, 0x2D, 0x43, 0x42, 0x3B, 0x16, 0x14, 0x17, 0x1B,
    CSCON, 1, 0x3C,
    CSCON, 1, 0x69,
    SLPOUT, 120,
    DISPON, 0,
    0,
];

pub const ILI9341: InitProgram = InitProgram::new(&ILI9341_BYTES);
pub const ST7796: InitProgram = InitProgram::new(&ST7796_BYTES);

// The 2.4" HY-STM32 boards report 0x4532 but take an ILI9325-style bring-up.
pub const ILI9325_HY24: &[Step] = &[
    Write(0x0000, 0x0001),
    DelayUs(SETTLE_US),
    Write(0x0015, 0x0030),
    Write(0x0011, 0x0040),
    Write(0x0010, 0x1628),
    Write(0x0012, 0x0000),
    Write(0x0013, 0x104D),
    DelayUs(SETTLE_US),
    Write(0x0012, 0x0010),
    DelayUs(SETTLE_US),
    Write(0x0010, 0x2620),
    Write(0x0013, 0x344D),
    DelayUs(SETTLE_US),
    Write(0x0001, 0x0100),
    Write(0x0002, 0x0300),
    Write(0x0003, 0x1030),
    Write(0x0008, 0x0604),
    Write(0x0009, 0x0000),
    Write(0x000A, 0x0008),
    Write(0x0041, 0x0002),
    Write(0x0060, 0x2700),
    Write(0x0061, 0x0001),
    Write(0x0090, 0x0182),
    Write(0x0093, 0x0001),
    Write(0x00A3, 0x0010),
    DelayUs(SETTLE_US),
    Write(0x0030, 0x0000),
    Write(0x0031, 0x0502),
    Write(0x0032, 0x0307),
    Write(0x0033, 0x0305),
    Write(0x0034, 0x0004),
    Write(0x0035, 0x0402),
    Write(0x0036, 0x0707),
    Write(0x0037, 0x0503),
    Write(0x0038, 0x1505),
    Write(0x0039, 0x1505),
    DelayUs(SETTLE_US),
    Write(0x0007, 0x0001),
    DelayUs(SETTLE_US),
    Write(0x0007, 0x0021),
    Write(0x0007, 0x0023),
    DelayUs(SETTLE_US),
    Write(0x0007, 0x0033),
    DelayUs(SETTLE_US),
    Write(0x0007, 0x0133),
];

pub const ILI9325: &[Step] = &[
    Write(0x00E7, 0x0010),
    Write(0x0000, 0x0001),
    Write(0x0001, 0x0100),
    Write(0x0002, 0x0700),
    Write(0x0003, 0x1030),
    Write(0x0004, 0x0000),
    Write(0x0008, 0x0207),
    Write(0x0009, 0x0000),
    Write(0x000A, 0x0000),
    Write(0x000C, 0x0001),
    Write(0x000D, 0x0000),
    Write(0x000F, 0x0000),
    Write(0x0010, 0x0000),
    Write(0x0011, 0x0007),
    Write(0x0012, 0x0000),
    Write(0x0013, 0x0000),
    DelayMs(50),
    Write(0x0010, 0x1590),
    Write(0x0011, 0x0227),
    DelayMs(50),
    Write(0x0012, 0x009C),
    DelayMs(50),
    Write(0x0013, 0x1900),
    Write(0x0029, 0x0023),
    Write(0x002B, 0x000E),
    DelayMs(50),
    Write(0x0020, 0x0000),
    Write(0x0021, 0x0000),
    DelayMs(50),
    Write(0x0030, 0x0007),
    Write(0x0031, 0x0707),
    Write(0x0032, 0x0006),
    Write(0x0035, 0x0704),
    Write(0x0036, 0x1F04),
    Write(0x0037, 0x0004),
    Write(0x0038, 0x0000),
    Write(0x0039, 0x0706),
    Write(0x003C, 0x0701),
    Write(0x003D, 0x000F),
    DelayMs(50),
    Write(0x0050, 0x0000),
    Write(0x0051, 0x00EF),
    Write(0x0052, 0x0000),
    Write(0x0053, 0x013F),
    Write(0x0060, 0xA700),
    Write(0x0061, 0x0001),
    Write(0x006A, 0x0000),
    Write(0x0080, 0x0000),
    Write(0x0081, 0x0000),
    Write(0x0082, 0x0000),
    Write(0x0083, 0x0000),
    Write(0x0084, 0x0000),
    Write(0x0085, 0x0000),
    Write(0x0090, 0x0010),
    Write(0x0092, 0x0000),
    Write(0x0093, 0x0003),
    Write(0x0095, 0x0110),
    Write(0x0097, 0x0000),
    Write(0x0098, 0x0000),
    Write(0x0007, 0x0133),
    Write(0x0020, 0x0000),
    Write(0x0021, 0x0000),
];

pub const ILI9320: &[Step] = &[
    Write(0x0000, 0x0000),
    Write(0x0001, 0x0100),
    Write(0x0002, 0x0700),
    Write(0x0003, 0x1018),
    Write(0x0004, 0x0000),
    Write(0x0008, 0x0202),
    Write(0x0009, 0x0000),
    Write(0x000A, 0x0000),
    Write(0x000C, 0x0001),
    Write(0x000D, 0x0000),
    Write(0x000F, 0x0000),
    DelayMs(100),
    Write(0x0007, 0x0101),
    DelayMs(100),
    Write(0x0010, 0x10C0),
    Write(0x0011, 0x0007),
    Write(0x0012, 0x0110),
    Write(0x0013, 0x0B00),
    Write(0x0029, 0x0000),
    Write(0x002B, 0x4010),
    Write(0x0050, 0x0000),
    Write(0x0051, 0x00EF),
    Write(0x0052, 0x0000),
    Write(0x0053, 0x013F),
    Write(0x0060, 0x2700),
    Write(0x0061, 0x0001),
    Write(0x006A, 0x0000),
    Write(0x0080, 0x0000),
    Write(0x0081, 0x0000),
    Write(0x0082, 0x0000),
    Write(0x0083, 0x0000),
    Write(0x0084, 0x0000),
    Write(0x0085, 0x0000),
    Write(0x0090, 0x0010),
    Write(0x0092, 0x0000),
    Write(0x0093, 0x0001),
    Write(0x0095, 0x0110),
    Write(0x0097, 0x0000),
    Write(0x0098, 0x0000),
    Write(0x0007, 0x0173),
];

pub const ILI9331: &[Step] = &[
    Write(0x00E7, 0x1014),
    Write(0x0001, 0x0100),
    Write(0x0002, 0x0200),
    Write(0x0003, 0x1030),
    Write(0x0008, 0x0202),
    Write(0x0009, 0x0000),
    Write(0x000A, 0x0000),
    Write(0x000C, 0x0000),
    Write(0x000D, 0x0000),
    Write(0x000F, 0x0000),
    Write(0x0010, 0x0000),
    Write(0x0011, 0x0007),
    Write(0x0012, 0x0000),
    Write(0x0013, 0x0000),
    DelayMs(200),
    Write(0x0010, 0x1690),
    Write(0x0011, 0x0227),
    DelayMs(50),
    Write(0x0012, 0x000C),
    DelayMs(50),
    Write(0x0013, 0x0800),
    Write(0x0029, 0x0011),
    Write(0x002B, 0x000B),
    DelayMs(50),
    Write(0x0020, 0x0000),
    Write(0x0021, 0x0000),
    Write(0x0030, 0x0000),
    Write(0x0031, 0x0106),
    Write(0x0032, 0x0000),
    Write(0x0035, 0x0204),
    Write(0x0036, 0x160A),
    Write(0x0037, 0x0707),
    Write(0x0038, 0x0106),
    Write(0x0039, 0x0707),
    Write(0x003C, 0x0402),
    Write(0x003D, 0x0C0F),
    Write(0x0050, 0x0000),
    Write(0x0051, 0x00EF),
    Write(0x0052, 0x0000),
    Write(0x0053, 0x013F),
    Write(0x0060, 0x2700),
    Write(0x0061, 0x0001),
    Write(0x006A, 0x0000),
    Write(0x0080, 0x0000),
    Write(0x0081, 0x0000),
    Write(0x0082, 0x0000),
    Write(0x0083, 0x0000),
    Write(0x0084, 0x0000),
    Write(0x0085, 0x0000),
    Write(0x0090, 0x0010),
    Write(0x0092, 0x0600),
    Write(0x0007, 0x0021),
    DelayMs(50),
    Write(0x0007, 0x0061),
    DelayMs(50),
    Write(0x0007, 0x0133),
];

pub const SSD2119: &[Step] = &[
    Write(0x0028, 0x0006),
    Write(0x0000, 0x0001),
    Write(0x0010, 0x0000),
    Write(0x0001, 0x72EF),
    Write(0x0002, 0x0600),
    Write(0x0003, 0x6A38),
    Write(0x0011, 0x6874),
    Write(0x000F, 0x0000),
    Write(0x000B, 0x5308),
    Write(0x000C, 0x0003),
    Write(0x000D, 0x000A),
    Write(0x000E, 0x2E00),
    Write(0x001E, 0x00BE),
    Write(0x0025, 0x8000),
    Write(0x0026, 0x7800),
    Write(0x0027, 0x0078),
    Write(0x004E, 0x0000),
    Write(0x004F, 0x0000),
    Write(0x0012, 0x08D9),
    Write(0x0030, 0x0000),
    Write(0x0031, 0x0104),
    Write(0x0032, 0x0100),
    Write(0x0033, 0x0305),
    Write(0x0034, 0x0505),
    Write(0x0035, 0x0305),
    Write(0x0036, 0x0707),
    Write(0x0037, 0x0300),
    Write(0x003A, 0x1200),
    Write(0x003B, 0x0800),
    Write(0x0007, 0x0033),
];

pub const R61505U: &[Step] = &[
    Write(0x00E5, 0x8000),
    Write(0x0000, 0x0001),
    Write(0x002B, 0x0010),
    Write(0x0001, 0x0100),
    Write(0x0002, 0x0700),
    Write(0x0003, 0x1018),
    Write(0x0004, 0x0000),
    Write(0x0008, 0x0202),
    Write(0x0009, 0x0000),
    Write(0x000A, 0x0000),
    Write(0x000C, 0x0000),
    Write(0x000D, 0x0000),
    Write(0x000F, 0x0000),
    Write(0x0050, 0x0000),
    Write(0x0051, 0x00EF),
    Write(0x0052, 0x0000),
    Write(0x0053, 0x013F),
    Write(0x0060, 0x2700),
    Write(0x0061, 0x0001),
    Write(0x006A, 0x0000),
    Write(0x0080, 0x0000),
    Write(0x0081, 0x0000),
    Write(0x0082, 0x0000),
    Write(0x0083, 0x0000),
    Write(0x0084, 0x0000),
    Write(0x0085, 0x0000),
    Write(0x0090, 0x0010),
    Write(0x0092, 0x0000),
    Write(0x0093, 0x0003),
    Write(0x0095, 0x0110),
    Write(0x0097, 0x0000),
    Write(0x0098, 0x0000),
    Write(0x0010, 0x0000),
    Write(0x0011, 0x0000),
    Write(0x0012, 0x0000),
    Write(0x0013, 0x0000),
    DelayMs(100),
    Write(0x0010, 0x17B0),
    Write(0x0011, 0x0004),
    DelayMs(50),
    Write(0x0012, 0x013E),
    DelayMs(50),
    Write(0x0013, 0x1F00),
    Write(0x0029, 0x000F),
    DelayMs(50),
    Write(0x0020, 0x0000),
    Write(0x0021, 0x0000),
    Write(0x0030, 0x0204),
    Write(0x0031, 0x0001),
    Write(0x0032, 0x0000),
    Write(0x0035, 0x0206),
    Write(0x0036, 0x0600),
    Write(0x0037, 0x0500),
    Write(0x0038, 0x0505),
    Write(0x0039, 0x0407),
    Write(0x003C, 0x0500),
    Write(0x003D, 0x0503),
    Write(0x0007, 0x0173),
];

pub const SSD1289: &[Step] = &[
    Write(0x0000, 0x0001),
    DelayMs(50),
    Write(0x0003, 0xA8A4),
    DelayMs(50),
    Write(0x000C, 0x0000),
    DelayMs(50),
    Write(0x000D, 0x080C),
    DelayMs(50),
    Write(0x000E, 0x2B00),
    DelayMs(50),
    Write(0x001E, 0x00B0),
    DelayMs(50),
    Write(0x0001, 0x2B3F),
    DelayMs(50),
    Write(0x0002, 0x0600),
    DelayMs(50),
    Write(0x0010, 0x0000),
    DelayMs(50),
    Write(0x0011, 0x6070),
    DelayMs(50),
    Write(0x0005, 0x0000),
    DelayMs(50),
    Write(0x0006, 0x0000),
    DelayMs(50),
    Write(0x0016, 0xEF1C),
    DelayMs(50),
    Write(0x0017, 0x0003),
    DelayMs(50),
    Write(0x0007, 0x0133),
    DelayMs(50),
    Write(0x000B, 0x0000),
    DelayMs(50),
    Write(0x000F, 0x0000),
    DelayMs(50),
    Write(0x0041, 0x0000),
    DelayMs(50),
    Write(0x0042, 0x0000),
    DelayMs(50),
    Write(0x0048, 0x0000),
    DelayMs(50),
    Write(0x0049, 0x013F),
    DelayMs(50),
    Write(0x004A, 0x0000),
    DelayMs(50),
    Write(0x004B, 0x0000),
    DelayMs(50),
    Write(0x0044, 0xEF00),
    DelayMs(50),
    Write(0x0045, 0x0000),
    DelayMs(50),
    Write(0x0046, 0x013F),
    DelayMs(50),
    Write(0x0030, 0x0707),
    DelayMs(50),
    Write(0x0031, 0x0204),
    DelayMs(50),
    Write(0x0032, 0x0204),
    DelayMs(50),
    Write(0x0033, 0x0502),
    DelayMs(50),
    Write(0x0034, 0x0507),
    DelayMs(50),
    Write(0x0035, 0x0204),
    DelayMs(50),
    Write(0x0036, 0x0204),
    DelayMs(50),
    Write(0x0037, 0x0502),
    DelayMs(50),
    Write(0x003A, 0x0302),
    DelayMs(50),
    Write(0x003B, 0x0302),
    DelayMs(50),
    Write(0x0023, 0x0000),
    DelayMs(50),
    Write(0x0024, 0x0000),
    DelayMs(50),
    Write(0x0025, 0x8000),
    DelayMs(50),
    Write(0x004F, 0x0000),
    Write(0x004E, 0x0000),
];

pub const SSD1298: &[Step] = &[
    Write(0x0028, 0x0006),
    Write(0x0000, 0x0001),
    Write(0x0003, 0xAEA4),
    Write(0x000C, 0x0004),
    Write(0x000D, 0x000C),
    Write(0x000E, 0x2800),
    Write(0x001E, 0x00B5),
    Write(0x0001, 0x3B3F),
    Write(0x0002, 0x0600),
    Write(0x0010, 0x0000),
    Write(0x0011, 0x6830),
    Write(0x0005, 0x0000),
    Write(0x0006, 0x0000),
    Write(0x0016, 0xEF1C),
    Write(0x0007, 0x0033),
    Write(0x000B, 0x0000),
    Write(0x000F, 0x0000),
    Write(0x0041, 0x0000),
    Write(0x0042, 0x0000),
    Write(0x0048, 0x0000),
    Write(0x0049, 0x013F),
    Write(0x004A, 0x0000),
    Write(0x004B, 0x0000),
    Write(0x0044, 0xEF00),
    Write(0x0045, 0x0000),
    Write(0x0046, 0x013F),
    Write(0x004E, 0x0000),
    Write(0x004F, 0x0000),
    Write(0x0030, 0x0707),
    Write(0x0031, 0x0202),
    Write(0x0032, 0x0204),
    Write(0x0033, 0x0502),
    Write(0x0034, 0x0507),
    Write(0x0035, 0x0204),
    Write(0x0036, 0x0204),
    Write(0x0037, 0x0502),
    Write(0x003A, 0x0302),
    Write(0x003B, 0x0302),
    Write(0x0023, 0x0000),
    Write(0x0024, 0x0000),
    Write(0x0025, 0x8000),
    Write(0x0026, 0x7000),
    Write(0x0020, 0xB0EB),
    Write(0x0027, 0x007C),
];

pub const SPFD5408B: &[Step] = &[
    Write(0x0001, 0x0100),
    Write(0x0002, 0x0700),
    Write(0x0003, 0x1030),
    Write(0x0004, 0x0000),
    Write(0x0008, 0x0207),
    Write(0x0009, 0x0000),
    Write(0x000A, 0x0000),
    Write(0x000C, 0x0000),
    Write(0x000D, 0x0000),
    Write(0x000F, 0x0000),
    DelayMs(50),
    Write(0x0007, 0x0101),
    DelayMs(50),
    Write(0x0010, 0x16B0),
    Write(0x0011, 0x0001),
    Write(0x0017, 0x0001),
    Write(0x0012, 0x0138),
    Write(0x0013, 0x0800),
    Write(0x0029, 0x0009),
    Write(0x002A, 0x0009),
    Write(0x00A4, 0x0000),
    Write(0x0050, 0x0000),
    Write(0x0051, 0x00EF),
    Write(0x0052, 0x0000),
    Write(0x0053, 0x013F),
    Write(0x0060, 0x2700),
    Write(0x0061, 0x0003),
    Write(0x006A, 0x0000),
    Write(0x0080, 0x0000),
    Write(0x0081, 0x0000),
    Write(0x0082, 0x0000),
    Write(0x0083, 0x0000),
    Write(0x0084, 0x0000),
    Write(0x0085, 0x0000),
    Write(0x0090, 0x0013),
    Write(0x0092, 0x0000),
    Write(0x0093, 0x0003),
    Write(0x0095, 0x0110),
    Write(0x0007, 0x0173),
];

pub const LGDP4531: &[Step] = &[
    Write(0x0000, 0x0001),
    Write(0x0010, 0x0628),
    Write(0x0012, 0x0006),
    Write(0x0013, 0x0A32),
    Write(0x0011, 0x0040),
    Write(0x0015, 0x0050),
    Write(0x0012, 0x0016),
    DelayMs(50),
    Write(0x0010, 0x5660),
    DelayMs(50),
    Write(0x0013, 0x2A4E),
    Write(0x0001, 0x0100),
    Write(0x0002, 0x0300),
    Write(0x0003, 0x1030),
    Write(0x0008, 0x0202),
    Write(0x000A, 0x0000),
    Write(0x0030, 0x0000),
    Write(0x0031, 0x0402),
    Write(0x0032, 0x0106),
    Write(0x0033, 0x0700),
    Write(0x0034, 0x0104),
    Write(0x0035, 0x0301),
    Write(0x0036, 0x0707),
    Write(0x0037, 0x0305),
    Write(0x0038, 0x0208),
    Write(0x0039, 0x0F0B),
    DelayMs(50),
    Write(0x0041, 0x0002),
    Write(0x0060, 0x2700),
    Write(0x0061, 0x0001),
    Write(0x0090, 0x0119),
    Write(0x0092, 0x010A),
    Write(0x0093, 0x0004),
    Write(0x00A0, 0x0100),
    DelayMs(50),
    Write(0x0007, 0x0133),
    DelayMs(50),
    Write(0x00A0, 0x0000),
];

pub const LGDP4535: &[Step] = &[
    Write(0x0015, 0x0030),
    Write(0x009A, 0x0010),
    Write(0x0011, 0x0020),
    Write(0x0010, 0x3428),
    Write(0x0012, 0x0002),
    Write(0x0013, 0x1038),
    DelayMs(40),
    Write(0x0012, 0x0012),
    DelayMs(40),
    Write(0x0010, 0x3420),
    Write(0x0013, 0x3045),
    DelayMs(70),
    Write(0x0030, 0x0000),
    Write(0x0031, 0x0402),
    Write(0x0032, 0x0307),
    Write(0x0033, 0x0304),
    Write(0x0034, 0x0004),
    Write(0x0035, 0x0401),
    Write(0x0036, 0x0707),
    Write(0x0037, 0x0305),
    Write(0x0038, 0x0610),
    Write(0x0039, 0x0610),
    Write(0x0001, 0x0100),
    Write(0x0002, 0x0300),
    Write(0x0003, 0x1030),
    Write(0x0008, 0x0808),
    Write(0x000A, 0x0008),
    Write(0x0060, 0x2700),
    Write(0x0061, 0x0001),
    Write(0x0090, 0x013E),
    Write(0x0092, 0x0100),
    Write(0x0093, 0x0100),
    Write(0x00A0, 0x3000),
    Write(0x00A3, 0x0010),
    Write(0x0007, 0x0001),
    Write(0x0007, 0x0021),
    Write(0x0007, 0x0023),
    Write(0x0007, 0x0033),
    Write(0x0007, 0x0133),
];

pub const HX8347D: &[Step] = &[
    Write(0x00EA, 0x0000),
    Write(0x00EB, 0x0020),
    Write(0x00EC, 0x000C),
    Write(0x00ED, 0x00C4),
    Write(0x00E8, 0x0040),
    Write(0x00E9, 0x0038),
    Write(0x00F1, 0x0001),
    Write(0x00F2, 0x0010),
    Write(0x0027, 0x00A3),
    Write(0x0040, 0x0001),
    Write(0x0041, 0x0000),
    Write(0x0042, 0x0000),
    Write(0x0043, 0x0010),
    Write(0x0044, 0x000E),
    Write(0x0045, 0x0024),
    Write(0x0046, 0x0004),
    Write(0x0047, 0x0050),
    Write(0x0048, 0x0002),
    Write(0x0049, 0x0013),
    Write(0x004A, 0x0019),
    Write(0x004B, 0x0019),
    Write(0x004C, 0x0016),
    Write(0x0050, 0x001B),
    Write(0x0051, 0x0031),
    Write(0x0052, 0x002F),
    Write(0x0053, 0x003F),
    Write(0x0054, 0x003F),
    Write(0x0055, 0x003E),
    Write(0x0056, 0x002F),
    Write(0x0057, 0x007B),
    Write(0x0058, 0x0009),
    Write(0x0059, 0x0006),
    Write(0x005A, 0x0006),
    Write(0x005B, 0x000C),
    Write(0x005C, 0x001D),
    Write(0x005D, 0x00CC),
    Write(0x001B, 0x0018),
    Write(0x001A, 0x0001),
    Write(0x0024, 0x0015),
    Write(0x0025, 0x0050),
    Write(0x0023, 0x008B),
    Write(0x0018, 0x0036),
    Write(0x0019, 0x0001),
    Write(0x0001, 0x0000),
    Write(0x001F, 0x0088),
    DelayMs(50),
    Write(0x001F, 0x0080),
    DelayMs(50),
    Write(0x001F, 0x0090),
    DelayMs(50),
    Write(0x001F, 0x00D0),
    DelayMs(50),
    Write(0x0017, 0x0005),
    Write(0x0036, 0x0000),
    Write(0x0028, 0x0038),
    DelayMs(50),
    Write(0x0028, 0x003C),
];

pub const ST7781: &[Step] = &[
    Write(0x00FF, 0x0001),
    Write(0x00F3, 0x0008),
    Write(0x0001, 0x0100),
    Write(0x0002, 0x0700),
    Write(0x0003, 0x1030),
    Write(0x0008, 0x0302),
    Write(0x0008, 0x0207),
    Write(0x0009, 0x0000),
    Write(0x000A, 0x0000),
    Write(0x0010, 0x0000),
    Write(0x0011, 0x0005),
    Write(0x0012, 0x0000),
    Write(0x0013, 0x0000),
    DelayMs(50),
    Write(0x0010, 0x12B0),
    DelayMs(50),
    Write(0x0011, 0x0007),
    DelayMs(50),
    Write(0x0012, 0x008B),
    DelayMs(50),
    Write(0x0013, 0x1700),
    DelayMs(50),
    Write(0x0029, 0x0022),
    Write(0x0030, 0x0000),
    Write(0x0031, 0x0707),
    Write(0x0032, 0x0505),
    Write(0x0035, 0x0107),
    Write(0x0036, 0x0008),
    Write(0x0037, 0x0000),
    Write(0x0038, 0x0202),
    Write(0x0039, 0x0106),
    Write(0x003C, 0x0202),
    Write(0x003D, 0x0408),
    DelayMs(50),
    Write(0x0050, 0x0000),
    Write(0x0051, 0x00EF),
    Write(0x0052, 0x0000),
    Write(0x0053, 0x013F),
    Write(0x0060, 0xA700),
    Write(0x0061, 0x0001),
    Write(0x0090, 0x0033),
    Write(0x002B, 0x000B),
    Write(0x0007, 0x0133),
];

pub const HX8346A: &[Step] = &[
    Write(0x0046, 0x0094),
    Write(0x0047, 0x0041),
    Write(0x0048, 0x0000),
    Write(0x0049, 0x0033),
    Write(0x004A, 0x0023),
    Write(0x004B, 0x0045),
    Write(0x004C, 0x0044),
    Write(0x004D, 0x0077),
    Write(0x004E, 0x0012),
    Write(0x004F, 0x00CC),
    Write(0x0050, 0x0046),
    Write(0x0051, 0x0082),
    Write(0x0002, 0x0000),
    Write(0x0003, 0x0000),
    Write(0x0004, 0x0001),
    Write(0x0005, 0x003F),
    Write(0x0006, 0x0000),
    Write(0x0007, 0x0000),
    Write(0x0008, 0x0000),
    Write(0x0009, 0x00EF),
    Write(0x0001, 0x0006),
    Write(0x0016, 0x00C8),
    Write(0x0023, 0x0095),
    Write(0x0024, 0x0095),
    Write(0x0025, 0x00FF),
    Write(0x0027, 0x0002),
    Write(0x0028, 0x0002),
    Write(0x0029, 0x0002),
    Write(0x002A, 0x0002),
    Write(0x002C, 0x0002),
    Write(0x002D, 0x0002),
    Write(0x003A, 0x0001),
    Write(0x003B, 0x0001),
    Write(0x003C, 0x00F0),
    Write(0x003D, 0x0000),
    DelayMs(2),
    Write(0x0035, 0x0038),
    Write(0x0036, 0x0078),
    Write(0x003E, 0x0038),
    Write(0x0040, 0x000F),
    Write(0x0041, 0x00F0),
    Write(0x0019, 0x0049),
    Write(0x0093, 0x000F),
    DelayMs(1),
    Write(0x0020, 0x0030),
    Write(0x001D, 0x0007),
    Write(0x001E, 0x0000),
    Write(0x001F, 0x0007),
    Write(0x0044, 0x004D),
    Write(0x0045, 0x0013),
    DelayMs(1),
    Write(0x001C, 0x0004),
    DelayMs(2),
    Write(0x0043, 0x0080),
    DelayMs(5),
    Write(0x001B, 0x0008),
    DelayMs(4),
    Write(0x001B, 0x0010),
    DelayMs(4),
    Write(0x0090, 0x007F),
    Write(0x0026, 0x0004),
    DelayMs(4),
    Write(0x0026, 0x0024),
    Write(0x0026, 0x002C),
    DelayMs(4),
    Write(0x0026, 0x003C),
    Write(0x0057, 0x0002),
    Write(0x0055, 0x0000),
    Write(0x0057, 0x0000),
];

pub const HX8347A: &[Step] = &[
    Write(0x0042, 0x0008),
    Write(0x0046, 0x00B4),
    Write(0x0047, 0x0043),
    Write(0x0048, 0x0013),
    Write(0x0049, 0x0047),
    Write(0x004A, 0x0014),
    Write(0x004B, 0x0036),
    Write(0x004C, 0x0003),
    Write(0x004D, 0x0046),
    Write(0x004E, 0x0005),
    Write(0x004F, 0x0010),
    Write(0x0050, 0x0008),
    Write(0x0051, 0x000A),
    Write(0x0002, 0x0000),
    Write(0x0003, 0x0000),
    Write(0x0004, 0x0000),
    Write(0x0005, 0x00EF),
    Write(0x0006, 0x0000),
    Write(0x0007, 0x0000),
    Write(0x0008, 0x0001),
    Write(0x0009, 0x003F),
    DelayMs(10),
    Write(0x0001, 0x0006),
    Write(0x0016, 0x00C8),
    Write(0x0023, 0x0095),
    Write(0x0024, 0x0095),
    Write(0x0025, 0x00FF),
    Write(0x0027, 0x0002),
    Write(0x0028, 0x0002),
    Write(0x0029, 0x0002),
    Write(0x002A, 0x0002),
    Write(0x002C, 0x0002),
    Write(0x002D, 0x0002),
    Write(0x003A, 0x0001),
    Write(0x003B, 0x0001),
    Write(0x003C, 0x00F0),
    Write(0x003D, 0x0000),
    DelayMs(20),
    Write(0x0035, 0x0038),
    Write(0x0036, 0x0078),
    Write(0x003E, 0x0038),
    Write(0x0040, 0x000F),
    Write(0x0041, 0x00F0),
    Write(0x0038, 0x0000),
    Write(0x0019, 0x0049),
    Write(0x0093, 0x000A),
    DelayMs(10),
    Write(0x0020, 0x0020),
    Write(0x001D, 0x0003),
    Write(0x001E, 0x0000),
    Write(0x001F, 0x0009),
    Write(0x0044, 0x0053),
    Write(0x0045, 0x0010),
    DelayMs(10),
    Write(0x001C, 0x0004),
    DelayMs(20),
    Write(0x0043, 0x0080),
    DelayMs(5),
    Write(0x001B, 0x000A),
    DelayMs(40),
    Write(0x001B, 0x0012),
    DelayMs(40),
    Write(0x0090, 0x007F),
    Write(0x0026, 0x0004),
    DelayMs(40),
    Write(0x0026, 0x0024),
    Write(0x0026, 0x002C),
    DelayMs(40),
    Write(0x0070, 0x0008),
    Write(0x0026, 0x003C),
    Write(0x0057, 0x0002),
    Write(0x0055, 0x0000),
    Write(0x0057, 0x0000),
];
