//! Status widgets for the nice!view canvas
//!
//! Everything here draws upright through `embedded-graphics`; rotating the
//! result for the panel is a separate pass.

pub mod fonts;
pub mod pages;
pub mod widgets;

// Re-export commonly used types
pub use pages::{Page, StatusPage};
pub use widgets::{Battery, Glyph};
