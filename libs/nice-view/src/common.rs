use crate::error::{CanvasResult, Error};
use serde::Deserialize;

/// Side length of the nice!view status canvas in pixels.
pub const CANVAS_SIZE: u32 = 68;
/// Row alignment in bytes expected by the nice!view driver.
pub const STRIDE_ALIGN: u32 = 1;
/// Largest canvas side accepted by [`Geometry::new`].
pub const MAX_CANVAS_SIZE: u32 = 256;
/// Largest row alignment accepted by [`Geometry::new`].
pub const MAX_STRIDE_ALIGN: u32 = 64;

/// Square canvas dimensions and the row stride they imply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    size: u32,
    stride: usize,
}

impl Geometry {
    pub const NICE_VIEW: Self = Self {
        size: CANVAS_SIZE,
        stride: (CANVAS_SIZE as usize).div_ceil(8),
    };

    /// Build a geometry for an `size`×`size` canvas whose rows are padded to
    /// a multiple of `align` bytes.
    pub fn new(size: u32, align: u32) -> CanvasResult<Self> {
        if size == 0 {
            return Err(Error::ZeroSize);
        }
        if size > MAX_CANVAS_SIZE {
            return Err(Error::CanvasTooLarge {
                size,
                max: MAX_CANVAS_SIZE,
            });
        }
        if !align.is_power_of_two() || align > MAX_STRIDE_ALIGN {
            return Err(Error::UnsupportedAlignment(align));
        }

        let min_stride = (size as usize).div_ceil(8);
        let stride = min_stride.next_multiple_of(align as usize);
        Ok(Self { size, stride })
    }

    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Bytes per row, including alignment padding.
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    #[must_use]
    pub const fn buffer_len(&self) -> usize {
        self.stride * self.size as usize
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::NICE_VIEW
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Direction {
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }
}

/// How upright canvas coordinates land on the sideways-mounted panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RotationConfig {
    pub direction: Direction,
    /// Signed shift along the destination x axis, applied after rotating.
    pub edge_offset: i32,
}

impl RotationConfig {
    #[must_use]
    pub const fn new(direction: Direction) -> Self {
        Self {
            direction,
            edge_offset: 0,
        }
    }

    #[must_use]
    pub const fn with_edge_offset(mut self, edge_offset: i32) -> Self {
        self.edge_offset = edge_offset;
        self
    }

    /// Destination of source pixel `(x, y)` on a `size`×`size` canvas, or
    /// `None` when `(x, y)` is outside the canvas or the edge offset pushes it
    /// off.
    #[must_use]
    pub fn map(&self, size: u32, x: u32, y: u32) -> Option<(u32, u32)> {
        if x >= size || y >= size {
            return None;
        }
        let last = size - 1;
        let (new_x, new_y) = match self.direction {
            Direction::Clockwise => (last - y, x),
            Direction::CounterClockwise => (y, last - x),
        };

        if self.edge_offset == 0 {
            return Some((new_x, new_y));
        }

        let shifted = i64::from(new_x) + i64::from(self.edge_offset);
        u32::try_from(shifted)
            .ok()
            .filter(|&x| x < size)
            .map(|x| (x, new_y))
    }
}

/// Maps foreground/background bits onto what the panel shows as lit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    pub inverted: bool,
}

impl Palette {
    #[must_use]
    pub const fn is_lit(self, foreground: bool) -> bool {
        foreground != self.inverted
    }
}
