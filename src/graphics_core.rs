use crate::bus::ParallelBus;
use crate::{BacklightInterface, LcdDriver, ResetInterface};
use embedded_graphics_core::{pixelcolor::Rgb565, prelude::*, primitives::Rectangle};

impl<BUS, RST, BL> LcdDriver<BUS, RST, BL>
where
    BUS: ParallelBus,
    RST: ResetInterface,
    BL: BacklightInterface,
{
    /// Inclusive display corners of `area` clipped to the screen, or `None`
    /// when nothing is left.
    fn clip(&self, area: &Rectangle) -> Option<(Rectangle, u16, u16, u16, u16)> {
        let drawable_area = area.intersection(&self.bounding_box());
        let bottom_right = drawable_area.bottom_right()?;
        Some((
            drawable_area,
            drawable_area.top_left.x as u16,
            drawable_area.top_left.y as u16,
            bottom_right.x as u16,
            bottom_right.y as u16,
        ))
    }
}

impl<BUS, RST, BL> DrawTarget for LcdDriver<BUS, RST, BL>
where
    BUS: ParallelBus,
    RST: ResetInterface,
    BL: BacklightInterface,
{
    type Color = Rgb565;
    // Writes go straight to GRAM over an infallible bus.
    type Error = core::convert::Infallible;

    /// Draws each pixel through the controller's cursor registers.
    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels.into_iter() {
            if coord.x >= 0
                && coord.x < self.context.width as i32
                && coord.y >= 0
                && coord.y < self.context.height as i32
            {
                self.set_pixel(coord.x as u16, coord.y as u16, color.into_storage());
            }
        }
        Ok(())
    }

    /// Streams the clipped area through one GRAM window.
    /// The trait requires the provided iterator to provide pixel color values in order from top
    /// left to the bottom right corner in a row-first order, which matches the window's
    /// auto-increment order.
    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        let Some((drawable_area, x1, y1, x2, y2)) = self.clip(area) else {
            return Ok(());
        };

        let area_width = area.size.width as usize;
        let clipped_width = drawable_area.size.width as usize;
        let clipped_height = drawable_area.size.height as usize;

        // Calculate offset into color iterator for clipped region
        let skip_left = (drawable_area.top_left.x - area.top_left.x) as usize;
        let skip_top = (drawable_area.top_left.y - area.top_left.y) as usize;
        let skip_right = area_width - skip_left - clipped_width;

        let mut colors = colors.into_iter();

        // Skip rows above clipped area
        for _ in 0..(skip_top * area_width) {
            colors.next();
        }

        let Some(mut window) = self.begin_blit(x1, y1, x2 - x1 + 1, y2 - y1 + 1) else {
            return Ok(());
        };
        for _ in 0..clipped_height {
            for _ in 0..skip_left {
                colors.next();
            }
            for _ in 0..clipped_width {
                let color = colors.next().map_or(0, |c| c.into_storage());
                window.write_pixel(color);
            }
            for _ in 0..skip_right {
                colors.next();
            }
        }

        Ok(())
    }

    /// Single windowed fill of the clipped area.
    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        if let Some((_, x1, y1, x2, y2)) = self.clip(area) {
            self.fill_rect(x1, y1, x2, y2, color.into_storage());
        }
        Ok(())
    }

    /// Optimized clear - fill entire screen
    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill_rect(
            0,
            0,
            self.context.width - 1,
            self.context.height - 1,
            color.into_storage(),
        );
        Ok(())
    }
}

// =========== embedded-graphics OriginDimensions Implementation ===========

impl<BUS, RST, BL> OriginDimensions for LcdDriver<BUS, RST, BL>
where
    BUS: ParallelBus,
    RST: ResetInterface,
    BL: BacklightInterface,
{
    fn size(&self) -> Size {
        Size::new(self.context.width as u32, self.context.height as u32)
    }
}
