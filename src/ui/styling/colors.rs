//! Color definitions for the calculator theme
//!
//! Colors are RGB565 (5-6-5 bits). To convert from 8-bit RGB: R>>3, G>>2, B>>3

use embedded_graphics::pixelcolor::Rgb565;

/// Pure white - maximum brightness in RGB565
pub const WHITE: Rgb565 = Rgb565::new(31, 63, 31);

/// Pure black
pub const BLACK: Rgb565 = Rgb565::new(0, 0, 0);

/// Banner background - pale blue-gray
pub const BANNER_BACKGROUND: Rgb565 = Rgb565::new(238 >> 3, 242 >> 2, 248 >> 3);

/// Banner separator line - medium gray
pub const BANNER_BORDER: Rgb565 = Rgb565::new(185 >> 3, 190 >> 2, 196 >> 3);

/// Banner readout text - near black
pub const BANNER_TEXT: Rgb565 = Rgb565::new(26 >> 3, 32 >> 2, 33 >> 3);
