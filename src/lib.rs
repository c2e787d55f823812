//! # LCD FSMC Driver Crate
//!
//! A driver for 16-bit parallel ("8080" style) LCD controllers found on cheap
//! STM32 development boards: the ILI932x family and its clones, the MIPI DCS
//! ILI9341 and ST7796, the SSD1289/SSD1298/SSD2119 and the Himax HX834x parts.
//!
//! The controller is not configured up front. At construction the driver
//! probes the identification registers, picks the matching entry of
//! [`registry::REGISTRY`] and replays that chip's initialization sequence.
//! Afterwards all drawing goes through a chip-agnostic API: single pixels,
//! solid rectangles and palette-indexed bitmaps.
//!
//! The bus itself is abstracted by [`bus::ParallelBus`]. Three transports are
//! provided:
//!
//! - [`bus::FsmcBus`]: the external memory controller of STM32 parts, one
//!   volatile access per transfer.
//! - [`bus::BitBandBus`]: direct port register access, data split over two
//!   8-bit ports, control lines driven through the bit-band alias region.
//! - [`bus::GpioBus`]: 20 `embedded-hal` pins, for any wiring.
//!
//! ## Usage
//!
//! 1. Build a transport for your board (or use `displays::hy_stm32`).
//! 2. Wrap the reset and backlight lines in [`ResetPin`] / [`BacklightPin`], or
//!    use [`NoReset`] / [`NoBacklight`] when they are not wired.
//! 3. Create an [`LcdDriver`] with a [`GraphicsContext`] describing the panel.
//! 4. Draw directly, or through `embedded-graphics` with the `graphics` feature.
//!
//! ```ignore
//! use embedded_graphics::prelude::*;
//! use embedded_graphics::pixelcolor::Rgb565;
//! use embedded_graphics::primitives::{Circle, PrimitiveStyle};
//! use lcd_fsmc::{GraphicsContext, LcdDriver, NoReset, BacklightPin, Orientation};
//! use lcd_fsmc::bus::{FsmcBus, RegisterSelectLine};
//!
//! let bus = unsafe { FsmcBus::bank1(RegisterSelectLine::A16) };
//! let mut lcd = LcdDriver::new(
//!     bus,
//!     NoReset,
//!     BacklightPin::new(backlight),
//!     GraphicsContext::new(320, 240, Orientation::Landscape),
//!     &mut delay,
//! )?;
//!
//! if let Some(device) = lcd.device() {
//!     log::info!("running on {:?}", device.controller);
//! }
//!
//! Circle::new(Point::new(100, 100), 50)
//!     .into_styled(PrimitiveStyle::with_fill(Rgb565::RED))
//!     .draw(&mut lcd)?;
//! ```
//!
//! A controller that answers none of the probes is logged and left
//! uninitialized: every drawing call becomes a no-op and reads return 0.
//!
//! ## Feature Flags
#![doc = document_features::document_features!()]
//!

#![cfg_attr(not(test), no_std)]

#[cfg(feature = "hy_stm32")]
pub mod displays;

#[cfg(feature = "graphics")]
mod graphics_core;

pub mod blit;
pub mod bus;
pub mod identify;
pub mod init;
pub mod registry;
pub mod sequences;
pub mod window;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use log::{debug, info};

use blit::{BitDepth, Bitmap, Palette, PixelStream, RowCallback};
use bus::ParallelBus;
use registry::{DeviceDescriptor, Family, InitSequence};
use sequences::dcs;

/// Scan orientation the panel was initialized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Panel geometry and pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphicsContext {
    /// Width in pixels, as seen by the caller.
    pub width: u16,
    /// Height in pixels, as seen by the caller.
    pub height: u16,
    /// Only 16 (RGB565) is supported.
    pub bits_per_pixel: u8,
    pub orientation: Orientation,
}

impl GraphicsContext {
    pub const fn new(width: u16, height: u16, orientation: Orientation) -> Self {
        GraphicsContext {
            width,
            height,
            bits_per_pixel: 16,
            orientation,
        }
    }
}

/// LCD Driver Errors
#[derive(Debug)]
pub enum DriverError<ResetError, BacklightError> {
    /// Error originating from the reset line.
    ResetError(ResetError),
    /// Error originating from the backlight line.
    BacklightError(BacklightError),
    /// Invalid configuration provided to the driver.
    InvalidConfiguration(&'static str),
}

/// Trait for controlling the panel's hardware reset line.
pub trait ResetInterface {
    /// The specific error type for this reset implementation.
    type Error;

    /// Resets the controller and waits until it accepts commands.
    fn reset<DELAY: DelayNs>(&mut self, delay: &mut DELAY) -> Result<(), Self::Error>;
}

/// Time the reset line is held low, and the time allowed afterwards.
pub const RESET_PULSE_MS: u32 = 50;

/// Reset line driven by a GPIO output, active low.
pub struct ResetPin<P>(P);

impl<P: OutputPin> ResetPin<P> {
    pub fn new(pin: P) -> Self {
        ResetPin(pin)
    }

    pub fn release(self) -> P {
        self.0
    }
}

impl<P: OutputPin> ResetInterface for ResetPin<P> {
    type Error = P::Error;

    fn reset<DELAY: DelayNs>(&mut self, delay: &mut DELAY) -> Result<(), Self::Error> {
        self.0.set_low()?;
        delay.delay_ms(RESET_PULSE_MS);
        self.0.set_high()?;
        delay.delay_ms(RESET_PULSE_MS);
        Ok(())
    }
}

/// For boards that tie the reset line to the MCU reset. Only waits.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoReset;

impl ResetInterface for NoReset {
    type Error = core::convert::Infallible;

    fn reset<DELAY: DelayNs>(&mut self, delay: &mut DELAY) -> Result<(), Self::Error> {
        delay.delay_ms(RESET_PULSE_MS);
        Ok(())
    }
}

/// Trait for switching the panel backlight.
pub trait BacklightInterface {
    type Error;

    fn set_backlight(&mut self, on: bool) -> Result<(), Self::Error>;
}

/// Backlight switched by a GPIO output, active high.
pub struct BacklightPin<P>(P);

impl<P: OutputPin> BacklightPin<P> {
    pub fn new(pin: P) -> Self {
        BacklightPin(pin)
    }

    pub fn release(self) -> P {
        self.0
    }
}

impl<P: OutputPin> BacklightInterface for BacklightPin<P> {
    type Error = P::Error;

    fn set_backlight(&mut self, on: bool) -> Result<(), Self::Error> {
        if on {
            self.0.set_high()
        } else {
            self.0.set_low()
        }
    }
}

/// For boards with a permanently lit or externally managed backlight.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBacklight;

impl BacklightInterface for NoBacklight {
    type Error = core::convert::Infallible;

    fn set_backlight(&mut self, _on: bool) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Settle time after the init sequence before the backlight comes on.
pub const POST_INIT_DELAY_MS: u32 = 50;

/// Wait between the sleep and display on/off commands.
pub const POWER_SWITCH_DELAY_US: u32 = 20;

/// Main Driver for a 16-bit parallel LCD controller.
///
/// Generic over the bus transport (`BUS`), reset line (`RST`) and backlight
/// (`BL`).
pub struct LcdDriver<BUS, RST = NoReset, BL = NoBacklight>
where
    BUS: ParallelBus,
    RST: ResetInterface,
    BL: BacklightInterface,
{
    bus: BUS,
    reset: RST,
    backlight: BL,
    context: GraphicsContext,
    device: Option<&'static DeviceDescriptor>,
}

impl<BUS, RST, BL> LcdDriver<BUS, RST, BL>
where
    BUS: ParallelBus,
    RST: ResetInterface,
    BL: BacklightInterface,
{
    /// Brings the panel up.
    ///
    /// The backlight stays off until a controller has been identified and
    /// initialized. An unknown controller is not an error: the driver is
    /// returned without a device and ignores drawing calls.
    pub fn new<DELAY>(
        bus: BUS,
        reset: RST,
        backlight: BL,
        context: GraphicsContext,
        delay: &mut DELAY,
    ) -> Result<Self, DriverError<RST::Error, BL::Error>>
    where
        DELAY: DelayNs,
    {
        if context.bits_per_pixel != 16 {
            return Err(DriverError::InvalidConfiguration(
                "Only 16 bits per pixel is supported",
            ));
        }
        if context.width == 0 || context.height == 0 {
            return Err(DriverError::InvalidConfiguration(
                "Display width/height cannot be zero",
            ));
        }

        let mut driver = Self {
            bus,
            reset,
            backlight,
            context,
            device: None,
        };
        driver.set_backlight(false)?;
        driver.hard_reset(delay)?;
        driver.initialize_display(delay);
        delay.delay_ms(POST_INIT_DELAY_MS);
        if driver.device.is_some() {
            driver.set_backlight(true)?;
        }
        driver.set_full_window();
        Ok(driver)
    }

    /// Performs a hardware reset using the provided `ResetInterface` implementation.
    pub fn hard_reset<DELAY: DelayNs>(
        &mut self,
        delay: &mut DELAY,
    ) -> Result<(), DriverError<RST::Error, BL::Error>> {
        self.reset.reset(delay).map_err(DriverError::ResetError)
    }

    /// Identifies the controller and replays its initialization sequence.
    ///
    /// Returns the detected controller, which is also remembered for all
    /// further drawing.
    pub fn initialize_display<DELAY: DelayNs>(
        &mut self,
        delay: &mut DELAY,
    ) -> Option<&'static DeviceDescriptor> {
        self.device = identify::identify(&mut self.bus).ok();
        let device = self.device?;

        if device.tolerates_fast_writes() {
            self.bus.use_fast_write_timing();
        }
        match device.init {
            InitSequence::Program(ref program) => init::play_program(&mut self.bus, delay, program),
            InitSequence::Steps(steps) => init::play_steps(&mut self.bus, delay, steps),
        }
        info!("lcd: {:?} initialized", device.controller);
        Some(device)
    }

    fn set_backlight(&mut self, on: bool) -> Result<(), DriverError<RST::Error, BL::Error>> {
        self.backlight
            .set_backlight(on)
            .map_err(DriverError::BacklightError)
    }

    /// The controller found at construction, if any.
    pub fn device(&self) -> Option<&'static DeviceDescriptor> {
        self.device
    }

    pub fn context(&self) -> &GraphicsContext {
        &self.context
    }

    /// Gives direct access to the bus, bypassing the controller abstraction.
    pub fn bus_mut(&mut self) -> &mut BUS {
        &mut self.bus
    }

    /// Returns the bus, reset and backlight implementations.
    pub fn release(self) -> (BUS, RST, BL) {
        (self.bus, self.reset, self.backlight)
    }

    fn family(&self) -> Option<Family> {
        self.device.map(|d| d.family)
    }

    fn set_cursor(&mut self, family: Family, x: u16, y: u16) {
        window::cursor_plan(family, &self.context, x, y).apply(&mut self.bus);
    }

    fn set_full_window(&mut self) {
        if let Some(family) = self.family() {
            window::full_window_plan(family, &self.context).apply(&mut self.bus);
        }
    }

    /// Writes one RGB565 pixel.
    pub fn set_pixel(&mut self, x: u16, y: u16, color: u16) {
        let Some(family) = self.family() else {
            return;
        };
        self.set_cursor(family, x, y);
        self.bus.write_command(family.write_ram_command());
        self.bus.write_data(color);
    }

    /// Reads one RGB565 pixel back from GRAM. Returns 0 without a controller.
    pub fn get_pixel(&mut self, x: u16, y: u16) -> u16 {
        let Some(family) = self.family() else {
            return 0;
        };
        self.set_cursor(family, x, y);
        self.bus.write_command(family.read_ram_command());
        let _dummy = self.bus.read_data();
        self.bus.read_data()
    }

    /// Fills the inclusive rectangle `(x1, y1)..=(x2, y2)` with `color`.
    ///
    /// A single line along the GRAM scan direction is written without touching
    /// the window registers.
    pub fn fill_rect(&mut self, x1: u16, y1: u16, x2: u16, y2: u16, color: u16) {
        let Some(family) = self.family() else {
            return;
        };
        debug_assert!(x1 <= x2 && y1 <= y2);

        let run = match self.context.orientation {
            Orientation::Portrait if x1 == x2 => Some(1 + (y2 - y1) as u32),
            Orientation::Landscape if y1 == y2 => Some(1 + (x2 - x1) as u32),
            _ => None,
        };
        if let Some(length) = run {
            self.set_cursor(family, x1, y1);
            self.bus.write_command(family.write_ram_command());
            self.bus.write_data_repeated(color, length);
            return;
        }

        let count = (1 + (x2 - x1) as u32) * (1 + (y2 - y1) as u32);
        if let Some(mut window) = self.open_window(x1, y1, x2, y2) {
            window.write_repeated(color, count);
        }
    }

    /// Switches the panel in or out of sleep. Only MIPI DCS controllers
    /// support this; for all others the call does nothing.
    pub fn set_power<DELAY: DelayNs>(
        &mut self,
        on: bool,
        delay: &mut DELAY,
    ) -> Result<(), DriverError<RST::Error, BL::Error>> {
        match self.family() {
            Some(family) if family.supports_power_control() => {}
            _ => return Ok(()),
        }
        debug!("lcd: power {}", if on { "on" } else { "off" });

        if on {
            self.bus.write_command(dcs::SLPOUT as u16);
            delay.delay_us(POWER_SWITCH_DELAY_US);
            self.bus.write_command(dcs::DISPON as u16);
            self.set_backlight(true)
        } else {
            self.set_backlight(false)?;
            self.bus.write_command(dcs::DISPOFF as u16);
            delay.delay_us(POWER_SWITCH_DELAY_US);
            self.bus.write_command(dcs::SLPIN as u16);
            Ok(())
        }
    }

    fn open_window(&mut self, x1: u16, y1: u16, x2: u16, y2: u16) -> Option<Window<'_, BUS>> {
        let family = self.family()?;
        window::window_plan(family, &self.context, x1, y1, x2, y2).apply(&mut self.bus);
        if family.needs_cursor_in_window() {
            self.set_cursor(family, x1, y1);
        }
        self.bus.write_command(family.write_ram_command());
        Some(Window {
            writer: PixelWriter { bus: &mut self.bus },
            family,
            context: self.context,
        })
    }

    /// Opens a `width` x `height` window at `(x, y)` and starts a GRAM write.
    ///
    /// Pixels are then streamed row by row through the returned [`Window`].
    /// The full-screen window is restored when it is dropped. Returns `None`
    /// without a controller.
    pub fn begin_blit(&mut self, x: u16, y: u16, width: u16, height: u16) -> Option<Window<'_, BUS>> {
        if width == 0 || height == 0 {
            return None;
        }
        self.open_window(x, y, x + width - 1, y + height - 1)
    }

    /// Moves the cursor to `(x, y)` and starts a GRAM write with the current
    /// window.
    pub fn begin_write_at(&mut self, x: u16, y: u16) -> Option<PixelWriter<'_, BUS>> {
        let family = self.family()?;
        self.set_cursor(family, x, y);
        self.bus.write_command(family.write_ram_command());
        Some(PixelWriter { bus: &mut self.bus })
    }

    /// Draws a 4 bit per pixel bitmap, two pixels per byte, high nibble first.
    ///
    /// `width` must be even. Each source pixel becomes a `scale` x `scale`
    /// block. `row_callback` runs before every display row and may change
    /// the palette.
    #[allow(clippy::too_many_arguments)]
    pub fn blit_4bit<S: PixelStream + ?Sized>(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        scale: u16,
        stream: &mut S,
        palette: &mut Palette,
        row_callback: Option<RowCallback<'_>>,
    ) {
        let bitmap = Bitmap {
            depth: BitDepth::Bpp4,
            width,
            height,
            scale,
        };
        self.blit(x, y, bitmap, stream, palette, row_callback);
    }

    /// Draws a 2 bit per pixel bitmap, four pixels per byte, high bits first.
    ///
    /// `width` must be a multiple of 4. Only palette entries 0 to 3 are used.
    #[allow(clippy::too_many_arguments)]
    pub fn blit_2bit<S: PixelStream + ?Sized>(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        scale: u16,
        stream: &mut S,
        palette: &mut Palette,
        row_callback: Option<RowCallback<'_>>,
    ) {
        let bitmap = Bitmap {
            depth: BitDepth::Bpp2,
            width,
            height,
            scale,
        };
        self.blit(x, y, bitmap, stream, palette, row_callback);
    }

    fn blit<S: PixelStream + ?Sized>(
        &mut self,
        x: u16,
        y: u16,
        bitmap: Bitmap,
        stream: &mut S,
        palette: &mut Palette,
        row_callback: Option<RowCallback<'_>>,
    ) {
        let width = bitmap.width * bitmap.scale;
        let height = bitmap.height * bitmap.scale;
        if let Some(window) = self.begin_blit(x, y, width, height) {
            blit::emit(
                &mut *window.writer.bus,
                bitmap,
                y,
                stream,
                palette,
                row_callback,
            );
        }
    }
}

/// An open GRAM write started by [`LcdDriver::begin_write_at`].
pub struct PixelWriter<'a, BUS: ParallelBus> {
    bus: &'a mut BUS,
}

impl<BUS: ParallelBus> PixelWriter<'_, BUS> {
    /// Writes the next pixel.
    #[inline]
    pub fn write_pixel(&mut self, color: u16) {
        self.bus.write_data(color);
    }

    /// Writes `count` pixels of the same color.
    pub fn write_repeated(&mut self, color: u16, count: u32) {
        self.bus.write_data_repeated(color, count);
    }
}

/// An open GRAM write confined to a window. Dropping it restores the
/// full-screen window.
pub struct Window<'a, BUS: ParallelBus> {
    writer: PixelWriter<'a, BUS>,
    family: Family,
    context: GraphicsContext,
}

impl<BUS: ParallelBus> Window<'_, BUS> {
    /// Writes the next pixel of the window, row-major.
    #[inline]
    pub fn write_pixel(&mut self, color: u16) {
        self.writer.write_pixel(color);
    }

    /// Writes `count` pixels of the same color.
    pub fn write_repeated(&mut self, color: u16, count: u32) {
        self.writer.write_repeated(color, count);
    }
}

impl<BUS: ParallelBus> Drop for Window<'_, BUS> {
    fn drop(&mut self) {
        window::full_window_plan(self.family, &self.context).apply(&mut *self.writer.bus);
    }
}
