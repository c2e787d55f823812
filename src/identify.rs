//! Controller identification.
//!
//! Probes run in a fixed order, stopping at the first recognized code:
//!
//! 1. `RDID4` (0xD3), answered by the MIPI DCS parts. The controller returns a
//!    dummy word and a manufacturer byte before the two ID bytes.
//! 2. Register 0x00, the device code register of the ILI932x family and most
//!    of its clones.
//! 3. Register 0x67, where the Himax parts keep their ID.

use log::{debug, info, warn};

use crate::bus::ParallelBus;
use crate::registry::{self, DeviceDescriptor, Probe};
use crate::sequences::dcs;

pub const ID4_REGISTER: u16 = dcs::RDID4 as u16;
pub const ID2_REGISTER: u16 = 0x00;
pub const TERTIARY_REGISTER: u16 = 0x67;

/// Codes read back from a controller that matched no registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnrecognizedDevice {
    pub id4: u16,
    pub id2: u16,
    pub tertiary: u16,
}

/// Reads the ID4 code: two discarded words, then the low bytes of the next two
/// reads combined big-endian.
pub fn read_id4<BUS: ParallelBus + ?Sized>(bus: &mut BUS) -> u16 {
    bus.write_command(ID4_REGISTER);
    let _dummy = bus.read_data();
    let _manufacturer = bus.read_data();
    let hi = bus.read_data() & 0xFF;
    let lo = bus.read_data() & 0xFF;
    (hi << 8) | lo
}

/// Reads the legacy device code register.
pub fn read_id2<BUS: ParallelBus + ?Sized>(bus: &mut BUS) -> u16 {
    bus.read_register(ID2_REGISTER)
}

/// Reads the Himax ID register.
pub fn read_tertiary<BUS: ParallelBus + ?Sized>(bus: &mut BUS) -> u16 {
    bus.read_register(TERTIARY_REGISTER)
}

/// Probes the attached controller and returns its registry entry.
pub fn identify<BUS>(bus: &mut BUS) -> Result<&'static DeviceDescriptor, UnrecognizedDevice>
where
    BUS: ParallelBus + ?Sized,
{
    let id4 = read_id4(bus);
    debug!("lcd: ID4 (0xD3) = {:#06x}", id4);
    if let Some(descriptor) = registry::lookup(Probe::Id4, id4) {
        info!("lcd: detected {:?} by ID4", descriptor.controller);
        return Ok(descriptor);
    }

    let id2 = read_id2(bus);
    debug!("lcd: ID2 (0x00) = {:#06x}", id2);
    if let Some(descriptor) = registry::lookup(Probe::Id2, id2) {
        info!("lcd: detected {:?} by code {:#06x}", descriptor.controller, id2);
        return Ok(descriptor);
    }

    let tertiary = read_tertiary(bus);
    debug!("lcd: ID (0x67) = {:#06x}", tertiary);
    if let Some(descriptor) = registry::lookup(Probe::Tertiary, tertiary) {
        info!(
            "lcd: detected {:?} by code {:#06x}",
            descriptor.controller, tertiary
        );
        return Ok(descriptor);
    }

    warn!(
        "lcd: unknown controller, codes {:#06x} {:#06x}",
        id2, tertiary
    );
    Err(UnrecognizedDevice { id4, id2, tertiary })
}
