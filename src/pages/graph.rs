//! Graph screen banner
//!
//! Owns the banner strip along the bottom of a graph screen and exposes it
//! to the shared banner reload logic.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::{debug, info};

use crate::banner::{BannerResult, BannerView, FunctionBannerDelegate, TextBannerView};
use crate::config::BannerConfig;
use crate::ui::components::TextSize;
use crate::ui::core::Drawable;
use crate::ui::styling::Style;

pub struct GraphPage {
    banner: TextBannerView,
    config: BannerConfig,
}

impl GraphPage {
    /// Create the page for a graph occupying `screen`, with the banner
    /// docked to its bottom edge.
    pub fn new(screen: Rectangle) -> Self {
        let size = TextSize::Medium;
        let style = Style::banner();
        let height = size.line_height() + style.padding.vertical() + 2 * style.border_width;
        let height = height.min(screen.size.height);
        let top = screen.top_left.y + (screen.size.height - height) as i32;
        let bounds = Rectangle::new(
            Point::new(screen.top_left.x, top),
            Size::new(screen.size.width, height),
        );

        Self {
            banner: TextBannerView::new(bounds, size).with_style(style),
            config: BannerConfig::default(),
        }
    }

    /// Use `config` for number display, rejecting invalid settings.
    pub fn with_config(mut self, config: BannerConfig) -> BannerResult<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Replace the number display preferences.
    ///
    /// Takes effect on the next banner reload.
    pub fn set_config(&mut self, config: BannerConfig) -> BannerResult<()> {
        config.validate()?;
        info!("Graph banner config updated: {:?}", config);
        self.config = config;
        Ok(())
    }

    pub fn banner(&self) -> &TextBannerView {
        &self.banner
    }

    pub fn banner_mut(&mut self) -> &mut TextBannerView {
        &mut self.banner
    }

    /// Draw the banner if it changed since the last draw.
    ///
    /// Returns whether anything was drawn.
    pub fn draw_if_dirty<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        display: &mut D,
    ) -> Result<bool, D::Error> {
        if !self.banner.is_attached() {
            return Ok(false);
        }
        let Some(region) = self.banner.dirty_region() else {
            return Ok(false);
        };
        debug!("Redrawing banner in {:?}", region.bounds);
        self.banner.draw(display)?;
        self.banner.mark_clean();
        Ok(true)
    }
}

impl FunctionBannerDelegate for GraphPage {
    type View = TextBannerView;

    fn banner_view(&mut self) -> &mut TextBannerView {
        &mut self.banner
    }

    fn banner_config(&self) -> BannerConfig {
        self.config
    }
}
