//! UI building blocks for the calculator screen
//!
//! This module provides:
//! - Display geometry of the calculator screen
//! - The `Drawable` trait with dirty-region tracking
//! - Styled text components
//! - Colors, styles and padding

pub mod components;
pub mod core;
pub mod styling;

pub use components::{TextComponent, TextSize};
pub use self::core::{DirtyRegion, Drawable};
pub use styling::{Padding, Style};

/// Screen width in pixels
pub const DISPLAY_WIDTH_PX: u16 = 320;

/// Screen height in pixels
pub const DISPLAY_HEIGHT_PX: u16 = 240;
