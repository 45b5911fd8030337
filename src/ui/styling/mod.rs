//! Styling for UI elements
//!
//! - [`colors`] - Color constants of the calculator theme
//! - [`layout`] - Padding
//! - [`style`] - Style configuration for individual elements

pub mod colors;
pub mod layout;
pub mod style;

pub use colors::{BANNER_BACKGROUND, BANNER_BORDER, BANNER_TEXT, BLACK, WHITE};
pub use layout::Padding;
pub use style::Style;
