use embedded_graphics::{pixelcolor::BinaryColor, prelude::DrawTarget};

pub mod status;

pub use status::StatusPage;

/// Trait for UI pages that can be drawn on a display
pub trait Page<D: DrawTarget<Color = BinaryColor>> {
    /// Draw the page content to the display, upright
    fn draw(&mut self, display: &mut D) -> Result<(), D::Error>;

    /// Clear the display to background and draw the page (convenience method)
    fn show(&mut self, display: &mut D) -> Result<(), D::Error> {
        display.clear(BinaryColor::Off)?;
        self.draw(display)
    }
}
