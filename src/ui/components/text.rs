//! Text component for displaying single-line styled text

use crate::banner::FIELD_CAPACITY;
use crate::ui::core::Drawable;
use crate::ui::styling::Style;
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::iso_8859_1::{FONT_5X8, FONT_6X10, FONT_10X20};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Alignment, Baseline, Text as EgText, TextStyleBuilder};

/// Text size variants
///
/// Provides three preset text sizes with corresponding Latin-1 fonts:
/// - `Small`: 5x8 font
/// - `Medium`: 6x10 font (default)
/// - `Large`: 10x20 font
///
/// Characters outside Latin-1 are drawn as `?`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TextSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl TextSize {
    pub fn font(&self) -> &'static MonoFont<'static> {
        match self {
            TextSize::Small => &FONT_5X8,
            TextSize::Medium => &FONT_6X10,
            TextSize::Large => &FONT_10X20,
        }
    }

    /// Horizontal advance of one character in pixels
    pub fn char_width(&self) -> u32 {
        let font = self.font();
        font.character_size.width + font.character_spacing
    }

    /// Height of one line of text in pixels
    pub fn line_height(&self) -> u32 {
        self.font().character_size.height
    }
}

/// Horizontal anchor of a text line inside its bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlignment {
    #[default]
    Left,
    Right,
}

/// Text component for displaying styled text
///
/// A single line of text with configurable size, alignment, and styling.
/// Holds up to `FIELD_CAPACITY` bytes; longer text is cut.
///
/// # Examples
/// ```ignore
/// let text = TextComponent::new(
///     Rectangle::new(Point::new(4, 222), Size::new(312, 14)),
///     "x=2",
///     TextSize::Medium,
/// )
/// .with_alignment(TextAlignment::Left);
/// ```
pub struct TextComponent {
    bounds: Rectangle,
    text: heapless::String<FIELD_CAPACITY>,
    size: TextSize,
    alignment: TextAlignment,
    style: Style,
    dirty: bool,
}

impl TextComponent {
    pub fn new(bounds: Rectangle, text: &str, size: TextSize) -> Self {
        let mut component = Self {
            bounds,
            text: heapless::String::new(),
            size,
            alignment: TextAlignment::Left,
            style: Style::default(),
            dirty: true,
        };
        component.set_text(text);
        component
    }

    /// Anchor the text to the left or right edge of the bounds.
    pub fn with_alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Update the displayed text.
    ///
    /// Automatically marks the component as dirty if the text changed.
    pub fn set_text(&mut self, text: &str) {
        let mut new_text = heapless::String::new();
        for c in text.chars() {
            if new_text.push(c).is_err() {
                break;
            }
        }

        if self.text != new_text {
            self.text = new_text;
            self.dirty = true;
        }
    }

    /// Get the current text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    fn text_position(&self) -> Point {
        let top = self.bounds.top_left.y + self.style.padding.top as i32;
        match self.alignment {
            TextAlignment::Left => Point::new(
                self.bounds.top_left.x + self.style.padding.left as i32,
                top,
            ),
            TextAlignment::Right => Point::new(
                self.bounds.top_left.x + self.bounds.size.width as i32
                    - self.style.padding.right as i32,
                top,
            ),
        }
    }
}

impl Drawable for TextComponent {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        if self.style.background_color.is_some() {
            self.bounds
                .into_styled(self.style.to_primitive_style())
                .draw(display)?;
        }

        if self.text.is_empty() {
            return Ok(());
        }

        let text_color = self.style.foreground_color.unwrap_or(Rgb565::WHITE);
        let character_style = MonoTextStyle::new(self.size.font(), text_color);
        let alignment = match self.alignment {
            TextAlignment::Left => Alignment::Left,
            TextAlignment::Right => Alignment::Right,
        };
        let text_style = TextStyleBuilder::new()
            .alignment(alignment)
            .baseline(Baseline::Top)
            .build();

        EgText::with_text_style(&self.text, self.text_position(), character_style, text_style)
            .draw(display)?;

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
    }

}
