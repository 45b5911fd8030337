//! Banner view contract and the text banner widget

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::ui::components::{TextAlignment, TextComponent, TextSize};
use crate::ui::core::Drawable;
use crate::ui::styling::{BANNER_TEXT, Style};

use super::legend::char_count;
use super::{
    BannerError, BannerResult, FIELD_SEPARATOR, FieldText, Legend, MAX_LEGEND_LENGTH,
    MAX_NUMBER_OF_CHARACTERS,
};

/// Text fields shown by a banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerField {
    /// Cursor abscissa (e.g. `x=2`)
    Abscissa,
    /// Function value at the cursor (e.g. `f(x)=4`)
    Ordinate,
}

/// Destination of banner text
///
/// Implemented by the concrete banner widget of a screen. Views reject text
/// longer than they can show instead of cutting it silently.
pub trait BannerView {
    /// Set the legend identifying the function the banner describes.
    fn set_legend(&mut self, legend: &str) -> BannerResult<()>;

    /// Set the text of one field.
    fn set_field(&mut self, field: BannerField, text: &str) -> BannerResult<()>;

    /// Widest line the view can show, in characters.
    fn max_characters(&self) -> usize {
        MAX_NUMBER_OF_CHARACTERS
    }

    /// Whether the view is part of the visible UI.
    fn is_attached(&self) -> bool {
        true
    }
}

/// Single-line banner drawn with a monospace font
///
/// The abscissa is left-aligned and the ordinate right-aligned on a filled
/// strip, usually placed along the bottom edge of the graph. The legend is
/// kept for callers but not drawn, since the ordinate already names the
/// function.
///
/// # Examples
/// ```ignore
/// let mut banner = TextBannerView::new(
///     Rectangle::new(Point::new(0, 222), Size::new(320, 18)),
///     TextSize::Medium,
/// );
/// banner.set_field(BannerField::Abscissa, "x=2")?;
/// banner.draw(&mut framebuffer)?;
/// ```
pub struct TextBannerView {
    bounds: Rectangle,
    legend: Legend,
    abscissa: TextComponent,
    ordinate: TextComponent,
    size: TextSize,
    style: Style,
    attached: bool,
    dirty: bool,
}

impl TextBannerView {
    pub fn new(bounds: Rectangle, size: TextSize) -> Self {
        let style = Style::banner();
        Self {
            bounds,
            legend: Legend::new(),
            abscissa: Self::field_component(bounds, size, style, TextAlignment::Left),
            ordinate: Self::field_component(bounds, size, style, TextAlignment::Right),
            size,
            style,
            attached: true,
            dirty: true,
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self.abscissa = Self::field_component(self.bounds, self.size, style, TextAlignment::Left);
        self.ordinate = Self::field_component(self.bounds, self.size, style, TextAlignment::Right);
        self.dirty = true;
        self
    }

    /// Fields are transparent text on top of the banner strip.
    fn field_component(
        bounds: Rectangle,
        size: TextSize,
        style: Style,
        alignment: TextAlignment,
    ) -> TextComponent {
        let mut field_style = Style::new()
            .with_foreground(style.foreground_color.unwrap_or(BANNER_TEXT))
            .with_padding(style.padding);
        field_style.padding.left += style.border_width;
        field_style.padding.right += style.border_width;
        field_style.padding.top += style.border_width;

        TextComponent::new(bounds, "", size)
            .with_alignment(alignment)
            .with_style(field_style)
    }

    pub fn legend(&self) -> &str {
        &self.legend
    }

    pub fn field(&self, field: BannerField) -> &str {
        match field {
            BannerField::Abscissa => self.abscissa.text(),
            BannerField::Ordinate => self.ordinate.text(),
        }
    }

    /// Both fields as a single line, joined like the composed banner.
    pub fn line(&self) -> FieldText {
        let mut line = FieldText::new();
        let _ = line.push_str(self.abscissa.text());
        if !self.ordinate.text().is_empty() {
            let _ = line.push_str(FIELD_SEPARATOR);
            let _ = line.push_str(self.ordinate.text());
        }
        line
    }

    /// Attach or detach the banner from the visible UI.
    pub fn set_attached(&mut self, attached: bool) {
        if self.attached != attached {
            self.attached = attached;
            self.dirty = true;
        }
    }
}

impl BannerView for TextBannerView {
    fn set_legend(&mut self, legend: &str) -> BannerResult<()> {
        if char_count(legend) > MAX_LEGEND_LENGTH {
            return Err(BannerError::LegendTooLong {
                max: MAX_LEGEND_LENGTH,
            });
        }
        if self.legend.as_str() != legend {
            self.legend.clear();
            self.legend
                .push_str(legend)
                .map_err(|_| BannerError::LegendTooLong {
                    max: MAX_LEGEND_LENGTH,
                })?;
        }
        Ok(())
    }

    fn set_field(&mut self, field: BannerField, text: &str) -> BannerResult<()> {
        let max = self.max_characters();
        if char_count(text) > max {
            return Err(BannerError::FieldTooLong { max });
        }
        let component = match field {
            BannerField::Abscissa => &mut self.abscissa,
            BannerField::Ordinate => &mut self.ordinate,
        };
        component.set_text(text);
        if component.is_dirty() {
            self.dirty = true;
        }
        Ok(())
    }

    fn max_characters(&self) -> usize {
        let inset = self.style.padding.horizontal() + 2 * self.style.border_width;
        let usable = self.bounds.size.width.saturating_sub(inset);
        let fitting = (usable / self.size.char_width().max(1)) as usize;
        fitting.min(MAX_NUMBER_OF_CHARACTERS)
    }

    fn is_attached(&self) -> bool {
        self.attached
    }
}

impl Drawable for TextBannerView {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        if !self.attached {
            return Ok(());
        }

        self.bounds
            .into_styled(self.style.to_primitive_style())
            .draw(display)?;
        self.abscissa.draw(display)?;
        self.ordinate.draw(display)?;

        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty || self.abscissa.is_dirty() || self.ordinate.is_dirty()
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
        self.abscissa.mark_clean();
        self.ordinate.mark_clean();
    }

}
