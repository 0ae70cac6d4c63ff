//! Packed 1bpp canvas for the nice!view status display.
//!
//! Widgets draw upright into a [`Canvas`] through `embedded-graphics`, then a
//! [`Rotator`] turns the buffer 90 degrees for the sideways-mounted panel and
//! signals the display layer through an [`Invalidate`] hook.

pub mod canvas;
pub mod common;
pub mod config;
mod error;
pub mod invalidate;
mod packing;
pub mod rotator;

pub use canvas::Canvas;
pub use common::{
    CANVAS_SIZE, Direction, Geometry, MAX_CANVAS_SIZE, MAX_STRIDE_ALIGN, Palette, RotationConfig,
    STRIDE_ALIGN,
};
pub use config::{DisplayConfig, ResolvedConfig};
pub use error::{CanvasResult, Error};
pub use invalidate::{Invalidate, NoInvalidate};
pub use rotator::Rotator;
