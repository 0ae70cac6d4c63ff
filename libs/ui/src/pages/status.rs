//! Status page showing the battery glyph and charge percentage

use super::Page;
use crate::fonts;
use crate::widgets::Battery;
use embedded_graphics::{
    Drawable,
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, Point},
};
use u8g2_fonts::{
    FontRenderer,
    types::{FontColor, HorizontalAlignment, VerticalPosition},
};

/// Baseline of the percentage label, just under the battery glyph
const LABEL_POSITION: Point = Point::new(0, 26);

pub struct StatusPage {
    battery: Battery,
    show_label: bool,
}

impl StatusPage {
    #[must_use]
    pub fn new(percent: u8, charging: bool) -> Self {
        Self {
            battery: Battery::new(percent, charging),
            show_label: true,
        }
    }

    /// Draw only the battery glyph, without the percentage label
    #[must_use]
    pub fn without_label(mut self) -> Self {
        self.show_label = false;
        self
    }

    pub fn set_battery(&mut self, percent: u8, charging: bool) {
        self.battery = Battery::new(percent, charging);
    }

    #[must_use]
    pub fn battery(&self) -> Battery {
        self.battery
    }
}

impl<D: DrawTarget<Color = BinaryColor>> Page<D> for StatusPage {
    fn draw(&mut self, display: &mut D) -> Result<(), D::Error> {
        self.battery.draw(display)?;

        if !self.show_label {
            return Ok(());
        }

        let font = FontRenderer::new::<fonts::FONT_SMALL>();
        let label = format!("{}%", self.battery.percent());
        font.render_aligned(
            label.as_str(),
            LABEL_POSITION,
            VerticalPosition::Baseline,
            HorizontalAlignment::Left,
            FontColor::Transparent(BinaryColor::On),
            display,
        )
        .map_err(|e| match e {
            u8g2_fonts::Error::DisplayError(e) => e,
            _ => panic!("unexpected font rendering error"),
        })?;

        Ok(())
    }
}
