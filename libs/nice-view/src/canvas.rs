use crate::common::Geometry;
use crate::error::{CanvasResult, Error};
use crate::packing::{get_bit, set_bit};
use core::convert::Infallible;
use embedded_graphics::{
    geometry::Dimensions,
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, OriginDimensions, Pixel, PointsIter, Size},
    primitives::Rectangle,
};

/// Byte value of a packed row filled entirely with `color`.
fn fill_byte(color: BinaryColor) -> u8 {
    if color.is_on() { 0xFF } else { 0x00 }
}

/// Square 1bpp drawing surface backed by a packed, row-major buffer.
///
/// `BinaryColor::On` is foreground (bit set), `BinaryColor::Off` background.
/// Drawing always happens upright; see [`crate::Rotator`] for the sideways pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    geometry: Geometry,
    buffer: Box<[u8]>,
}

impl Canvas {
    /// Blank (all background) canvas.
    #[must_use]
    pub fn new(geometry: Geometry) -> Self {
        let buffer = vec![fill_byte(BinaryColor::Off); geometry.buffer_len()].into_boxed_slice();
        Self { geometry, buffer }
    }

    /// Adopt an existing packed buffer, e.g. one handed over by a display driver.
    pub fn from_bytes(geometry: Geometry, bytes: impl Into<Box<[u8]>>) -> CanvasResult<Self> {
        let buffer = bytes.into();
        if buffer.len() != geometry.buffer_len() {
            return Err(Error::BufferSize {
                expected: geometry.buffer_len(),
                actual: buffer.len(),
            });
        }
        Ok(Self { geometry, buffer })
    }

    #[must_use]
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Whether `(x, y)` is foreground. Coordinates outside the canvas read as
    /// background.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> bool {
        self.contains(x, y) && get_bit(&self.buffer, self.geometry.stride(), x, y)
    }

    /// Set or clear `(x, y)`. Coordinates outside the canvas are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, on: bool) {
        if self.contains(x, y) {
            set_bit(&mut self.buffer, self.geometry.stride(), x, y, on);
        }
    }

    /// Number of foreground pixels, padding excluded.
    #[must_use]
    pub fn count_set(&self) -> usize {
        let size = self.geometry.size();
        (0..size)
            .flat_map(|y| (0..size).map(move |x| (x, y)))
            .filter(|&(x, y)| get_bit(&self.buffer, self.geometry.stride(), x, y))
            .count()
    }

    /// Raw packed rows, stride padding included.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    fn contains(&self, x: u32, y: u32) -> bool {
        x < self.geometry.size() && y < self.geometry.size()
    }
}

impl DrawTarget for Canvas {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            let (Ok(x), Ok(y)) = (u32::try_from(coord.x), u32::try_from(coord.y)) else {
                continue;
            };
            self.set_pixel(x, y, color.is_on());
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let clipped_area = area.intersection(&self.bounding_box());

        if clipped_area.is_zero_sized() {
            return Ok(());
        }

        self.draw_iter(clipped_area.points().map(|p| Pixel(p, color)))
    }

    fn clear(&mut self, color: BinaryColor) -> Result<(), Self::Error> {
        self.buffer.fill(fill_byte(color));
        Ok(())
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        let side = self.geometry.size();
        Size::new(side, side)
    }
}
