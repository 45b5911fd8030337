//! UI components library

pub mod text;

pub use text::{TextAlignment, TextComponent, TextSize};
