// Font definitions for the status widgets

// Small proportional font for the battery percentage label
pub use u8g2_fonts::fonts::u8g2_font_helvR08_tf as FONT_SMALL;
