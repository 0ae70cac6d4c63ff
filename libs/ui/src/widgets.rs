use embedded_graphics::{
    Drawable,
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, Pixel, Point, Primitive},
    primitives::{PrimitiveStyle, Rectangle},
};

/// Highest charge level the battery glyph distinguishes.
pub const MAX_PERCENT: u8 = 100;

/// Charging bolt. `X` is foreground, `o` background, `.` transparent.
pub const BOLT: Glyph = Glyph::new(&[
    "....ooo..",
    "...oXXo..",
    "...oXo...",
    "..oXXo...",
    "..oXo....",
    ".oXXoooo.",
    ".oXXXXXXo",
    ".ooooXXo.",
    "....oXo..",
    "...oXXo..",
    "...oXo...",
    "..oXXo...",
    "..oXo....",
    "..oo.....",
]);

const BOLT_OFFSET: Point = Point::new(9, -1);

/// Small two-color icon with transparent cells, described row by row.
#[derive(Clone, Copy, Debug)]
pub struct Glyph {
    rows: &'static [&'static str],
}

impl Glyph {
    #[must_use]
    pub const fn new(rows: &'static [&'static str]) -> Self {
        Self { rows }
    }

    /// Opaque cells of the glyph with its top-left corner at `origin`.
    pub fn pixels(&self, origin: Point) -> impl Iterator<Item = Pixel<BinaryColor>> {
        self.rows.iter().zip(0..).flat_map(move |(row, y)| {
            row.bytes().zip(0..).filter_map(move |(cell, x)| {
                let color = match cell {
                    b'X' => BinaryColor::On,
                    b'o' => BinaryColor::Off,
                    _ => return None,
                };
                Some(Pixel(origin + Point::new(x, y), color))
            })
        })
    }
}

/// Battery outline with a charge bar and, while charging, a bolt overlay.
///
/// Layout (inclusive corners, relative to `origin`):
/// frame (0,2)-(29,13), hollow (1,3)-(27,12), bar (2,4)-(`fill_end_x`,11),
/// terminal (30,5)-(32,10) with a hollow (31,6)-(31,9), bolt at (9,-1).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Battery {
    percent: u8,
    charging: bool,
    origin: Point,
}

impl Battery {
    #[must_use]
    pub fn new(percent: u8, charging: bool) -> Self {
        Self {
            percent: percent.min(MAX_PERCENT),
            charging,
            origin: Point::zero(),
        }
    }

    #[must_use]
    pub fn at(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    #[must_use]
    pub fn percent(&self) -> u8 {
        self.percent
    }

    #[must_use]
    pub fn is_charging(&self) -> bool {
        self.charging
    }

    /// Right-most column of the charge bar. Each column is worth four
    /// percent, rounded toward the next quarter.
    #[must_use]
    pub fn fill_end_x(&self) -> i32 {
        2 + (i32::from(self.percent) + 2) / 4
    }

    fn rect(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> Rectangle {
        Rectangle::with_corners(
            self.origin + Point::new(x1, y1),
            self.origin + Point::new(x2, y2),
        )
    }
}

impl Drawable for Battery {
    type Color = BinaryColor;
    type Output = ();

    fn draw<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let foreground = PrimitiveStyle::with_fill(BinaryColor::On);
        let background = PrimitiveStyle::with_fill(BinaryColor::Off);

        let shapes = [
            (self.rect(0, 2, 29, 13), foreground),
            (self.rect(1, 3, 27, 12), background),
            (self.rect(2, 4, self.fill_end_x(), 11), foreground),
            (self.rect(30, 5, 32, 10), foreground),
            (self.rect(31, 6, 31, 9), background),
        ];
        for (rect, style) in shapes {
            rect.into_styled(style).draw(display)?;
        }

        if self.charging {
            display.draw_iter(BOLT.pixels(self.origin + BOLT_OFFSET))?;
        }

        Ok(())
    }
}
