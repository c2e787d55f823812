//! Supported controllers and how each one is recognized, addressed and brought up.

use crate::init::{InitProgram, Step};
use crate::sequences;

/// Controller chips known to the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Controller {
    Ili9320,
    Ili9325,
    Ili9328,
    Ili9331,
    Ili9341,
    St7796,
    St7781,
    Ssd1289,
    Ssd1298,
    Ssd2119,
    R61505U,
    Spfd5408B,
    Lgdp4531,
    Lgdp4535,
    Hx8346A,
    Hx8347A,
    Hx8347D,
}

/// Groups of controllers sharing cursor/window register layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// ILI932x register layout, also used by most ILI932x clones.
    Ili932x,
    /// MIPI DCS command set (column/page address set).
    MipiDcs,
    /// SSD1289 style packed vertical window register.
    Ssd1289,
    /// Himax byte-wide address registers.
    Hx834x,
    /// SSD2119: window like ILI932x, no cursor registers.
    Ssd2119,
}

impl Family {
    /// Whether logical X is mirrored before it reaches the controller.
    pub const fn mirrors_x(self) -> bool {
        !matches!(self, Family::MipiDcs)
    }

    /// Command that starts a GRAM write.
    pub const fn write_ram_command(self) -> u16 {
        match self {
            Family::MipiDcs => sequences::dcs::RAMWR as u16,
            _ => 0x22,
        }
    }

    /// Command that starts a GRAM read.
    pub const fn read_ram_command(self) -> u16 {
        match self {
            Family::MipiDcs => sequences::dcs::RAMRD as u16,
            _ => 0x22,
        }
    }

    /// Whether a windowed write must also position the cursor at the window start.
    pub const fn needs_cursor_in_window(self) -> bool {
        !matches!(self, Family::MipiDcs)
    }

    /// Whether sleep/display on-off commands are available.
    pub const fn supports_power_control(self) -> bool {
        matches!(self, Family::MipiDcs)
    }
}

/// Identification register that reports a controller's code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Probe {
    /// Register 0xD3 (RDID4).
    Id4,
    /// Register 0x00 (device code read).
    Id2,
    /// Register 0x67, Himax parts.
    Tertiary,
}

/// How a controller is initialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitSequence {
    Program(InitProgram),
    Steps(&'static [Step]),
}

/// Static description of one supported controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceDescriptor {
    pub controller: Controller,
    pub probe: Probe,
    /// Codes the probe returns for this controller.
    pub codes: &'static [u16],
    pub family: Family,
    pub init: InitSequence,
}

impl DeviceDescriptor {
    const fn new(
        controller: Controller,
        probe: Probe,
        codes: &'static [u16],
        family: Family,
        init: InitSequence,
    ) -> Self {
        DeviceDescriptor {
            controller,
            probe,
            codes,
            family,
            init,
        }
    }

    /// Whether the bus may switch to the fast write timing for this controller.
    pub const fn tolerates_fast_writes(&self) -> bool {
        matches!(self.family, Family::MipiDcs)
    }
}

use Controller::*;
use InitSequence::{Program, Steps};

/// All supported controllers. ILI9325 appears twice because the 2.4" HY-STM32
/// boards report 0x4532 and need their own bring-up.
///
/// Codes are unique per probe register. 0x0047 appears twice, once as the
/// ID2 code of the HX8347D and once as the tertiary code of the HX8347A.
#[rustfmt::skip]
pub static REGISTRY: [DeviceDescriptor; 18] = [
    DeviceDescriptor::new(Ili9341, Probe::Id4, &[0x9341], Family::MipiDcs, Program(sequences::ILI9341)),
    DeviceDescriptor::new(St7796, Probe::Id4, &[0x7796], Family::MipiDcs, Program(sequences::ST7796)),
    DeviceDescriptor::new(Ili9325, Probe::Id2, &[0x4532], Family::Ili932x, Steps(sequences::ILI9325_HY24)),
    DeviceDescriptor::new(Ili9325, Probe::Id2, &[0x9325], Family::Ili932x, Steps(sequences::ILI9325)),
    DeviceDescriptor::new(Ili9328, Probe::Id2, &[0x9328], Family::Ili932x, Steps(sequences::ILI9325)),
    DeviceDescriptor::new(Ili9320, Probe::Id2, &[0x9320, 0x9300], Family::Ili932x, Steps(sequences::ILI9320)),
    DeviceDescriptor::new(Ili9331, Probe::Id2, &[0x9331], Family::Ili932x, Steps(sequences::ILI9331)),
    DeviceDescriptor::new(Ssd2119, Probe::Id2, &[0x9919], Family::Ssd2119, Steps(sequences::SSD2119)),
    DeviceDescriptor::new(R61505U, Probe::Id2, &[0x1505, 0x0505], Family::Ili932x, Steps(sequences::R61505U)),
    DeviceDescriptor::new(Ssd1289, Probe::Id2, &[0x8989], Family::Ssd1289, Steps(sequences::SSD1289)),
    DeviceDescriptor::new(Ssd1298, Probe::Id2, &[0x8999], Family::Ssd1289, Steps(sequences::SSD1298)),
    DeviceDescriptor::new(Spfd5408B, Probe::Id2, &[0x5408], Family::Ili932x, Steps(sequences::SPFD5408B)),
    DeviceDescriptor::new(Lgdp4531, Probe::Id2, &[0x4531], Family::Ili932x, Steps(sequences::LGDP4531)),
    DeviceDescriptor::new(Lgdp4535, Probe::Id2, &[0x4535], Family::Ili932x, Steps(sequences::LGDP4535)),
    DeviceDescriptor::new(Hx8347D, Probe::Id2, &[0x0047], Family::Hx834x, Steps(sequences::HX8347D)),
    DeviceDescriptor::new(St7781, Probe::Id2, &[0x7783], Family::Ili932x, Steps(sequences::ST7781)),
    DeviceDescriptor::new(Hx8346A, Probe::Tertiary, &[0x0046], Family::Hx834x, Steps(sequences::HX8346A)),
    DeviceDescriptor::new(Hx8347A, Probe::Tertiary, &[0x0047], Family::Hx834x, Steps(sequences::HX8347A)),
];

/// Finds the controller reporting `code` on `probe`.
pub fn lookup(probe: Probe, code: u16) -> Option<&'static DeviceDescriptor> {
    REGISTRY
        .iter()
        .find(|d| d.probe == probe && d.codes.contains(&code))
}
