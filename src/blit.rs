//! Palette-indexed bitmap blitting.
//!
//! Bitmaps are packed 4 or 2 bits per pixel, most significant sample first,
//! rows starting on byte boundaries. Each sample indexes a 16-entry RGB565
//! palette. Integer upscaling repeats every sample horizontally and replays
//! every row vertically by rewinding the pixel stream.

use crate::bus::ParallelBus;

/// RGB565 colors indexed by packed samples.
pub type Palette = [u16; 16];

/// Called before each emitted display row with that row's absolute index.
/// May rewrite the palette for the row.
pub type RowCallback<'a> = &'a mut dyn FnMut(u16, &mut Palette);

/// Forward byte source that can return to a remembered position.
pub trait PixelStream {
    /// Opaque position token.
    type Mark: Copy;

    /// Returns the next byte, or 0 once the stream is exhausted.
    fn next_byte(&mut self) -> u8;

    /// Remembers the current position.
    fn mark(&self) -> Self::Mark;

    /// Returns to a position obtained from [`mark`](PixelStream::mark).
    fn reset(&mut self, mark: Self::Mark);
}

/// [`PixelStream`] over an in-memory slice.
#[derive(Debug, Clone)]
pub struct PixelCursor<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> PixelCursor<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        PixelCursor { bytes, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

impl PixelStream for PixelCursor<'_> {
    type Mark = usize;

    #[inline]
    fn next_byte(&mut self) -> u8 {
        let byte = self.bytes.get(self.position).copied().unwrap_or(0);
        self.position += 1;
        byte
    }

    fn mark(&self) -> usize {
        self.position
    }

    fn reset(&mut self, mark: usize) {
        self.position = mark;
    }
}

/// Sample size of a packed bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitDepth {
    Bpp4,
    Bpp2,
}

impl BitDepth {
    pub const fn samples_per_byte(self) -> u16 {
        match self {
            BitDepth::Bpp4 => 2,
            BitDepth::Bpp2 => 4,
        }
    }

    #[inline]
    fn for_each_sample(self, byte: u8, mut f: impl FnMut(usize)) {
        match self {
            BitDepth::Bpp4 => {
                f((byte >> 4) as usize & 0x0F);
                f(byte as usize & 0x0F);
            }
            BitDepth::Bpp2 => {
                f((byte >> 6) as usize & 0x03);
                f((byte >> 4) as usize & 0x03);
                f((byte >> 2) as usize & 0x03);
                f(byte as usize & 0x03);
            }
        }
    }
}

/// Source bitmap geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bitmap {
    pub depth: BitDepth,
    pub width: u16,
    pub height: u16,
    pub scale: u16,
}

/// Streams `bitmap` into an already opened GRAM write.
///
/// `first_row` is the display row of the first emitted line, passed on to
/// `callback` offset by the number of lines already emitted.
pub(crate) fn emit<BUS, S>(
    bus: &mut BUS,
    bitmap: Bitmap,
    first_row: u16,
    stream: &mut S,
    palette: &mut Palette,
    mut callback: Option<RowCallback<'_>>,
) where
    BUS: ParallelBus + ?Sized,
    S: PixelStream + ?Sized,
{
    let Bitmap {
        depth,
        width,
        height,
        scale,
    } = bitmap;
    debug_assert!(width % depth.samples_per_byte() == 0);
    let bytes_per_row = width / depth.samples_per_byte();

    let mut dest_row = first_row;
    for _ in 0..height {
        let row_start = stream.mark();
        for repeat in 1..=scale {
            if let Some(callback) = callback.as_mut() {
                callback(dest_row, palette);
            }
            match scale {
                1 => {
                    for _ in 0..bytes_per_row {
                        let byte = stream.next_byte();
                        depth.for_each_sample(byte, |i| bus.write_data(palette[i]));
                    }
                }
                2 => {
                    for _ in 0..bytes_per_row {
                        let byte = stream.next_byte();
                        depth.for_each_sample(byte, |i| {
                            let color = palette[i];
                            bus.write_data(color);
                            bus.write_data(color);
                        });
                    }
                }
                _ => {
                    for _ in 0..bytes_per_row {
                        let byte = stream.next_byte();
                        depth.for_each_sample(byte, |i| {
                            bus.write_data_repeated(palette[i], scale as u32)
                        });
                    }
                }
            }
            if repeat < scale {
                stream.reset(row_start);
            }
            dest_row = dest_row.wrapping_add(1);
        }
    }
}
