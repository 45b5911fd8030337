//! Delegate pushing cursor readouts into a banner view

use log::{debug, error, warn};

use crate::config::BannerConfig;
use crate::curve::{CurveViewCursor, Function};

use super::content::compose_banner;
use super::view::{BannerField, BannerView};

/// Keeps a screen's banner in sync with a cursor moving along a function.
///
/// Implementors only provide access to their banner widget; the reload
/// logic is shared. Call
/// [`Self::reload_banner_view_for_cursor_on_function`] whenever the
/// cursor moves or the bound function changes.
///
/// The cursor and function are only borrowed for the duration of the call.
pub trait FunctionBannerDelegate {
    /// Concrete banner widget of the screen
    type View: BannerView;

    /// The banner this delegate writes into.
    ///
    /// Must return the same view for the whole of a reload.
    fn banner_view(&mut self) -> &mut Self::View;

    /// Number display preferences used when formatting readouts.
    fn banner_config(&self) -> BannerConfig {
        BannerConfig::default()
    }

    /// Recompute the banner for `cursor` on `function` and write it out.
    ///
    /// The legend is built from `symbol` unless the function carries its own
    /// name. Values where the function is undefined read `undef`. Readouts
    /// are shortened to fit the view, never overflowed.
    ///
    /// A detached banner view is a caller bug: it trips a debug assertion and
    /// is skipped in release builds.
    fn reload_banner_view_for_cursor_on_function<F: Function + ?Sized>(
        &mut self,
        cursor: &CurveViewCursor,
        function: &F,
        symbol: char,
    ) {
        let config = self.banner_config();
        let view = self.banner_view();

        if !view.is_attached() {
            debug_assert!(false, "banner reloaded while its view is detached");
            warn!("Skipping banner reload: view is detached");
            return;
        }

        let content = compose_banner(cursor, function, symbol, &config, view.max_characters());
        debug!("Banner reload at x={}: {}", cursor.x(), content.line());

        if let Err(e) = view.set_legend(&content.legend) {
            error!("Banner rejected legend {:?}: {}", content.legend, e);
        }
        if let Err(e) = view.set_field(BannerField::Abscissa, &content.abscissa) {
            error!("Banner rejected abscissa {:?}: {}", content.abscissa, e);
        }
        if let Err(e) = view.set_field(BannerField::Ordinate, &content.ordinate) {
            error!("Banner rejected ordinate {:?}: {}", content.ordinate, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banner::legend::char_count;
    use crate::banner::{BannerResult, MAX_LEGEND_LENGTH, MAX_NUMBER_OF_CHARACTERS};
    use crate::config::DisplayMode;
    use crate::curve::CartesianFunction;

    /// View recording every write, with a configurable width
    #[derive(Default)]
    struct RecordingView {
        legend: String,
        abscissa: String,
        ordinate: String,
        width: Option<usize>,
        detached: bool,
        writes: Vec<BannerField>,
    }

    impl BannerView for RecordingView {
        fn set_legend(&mut self, legend: &str) -> BannerResult<()> {
            self.legend = legend.into();
            Ok(())
        }

        fn set_field(&mut self, field: BannerField, text: &str) -> BannerResult<()> {
            self.writes.push(field);
            match field {
                BannerField::Abscissa => self.abscissa = text.into(),
                BannerField::Ordinate => self.ordinate = text.into(),
            }
            Ok(())
        }

        fn max_characters(&self) -> usize {
            self.width.unwrap_or(MAX_NUMBER_OF_CHARACTERS)
        }

        fn is_attached(&self) -> bool {
            !self.detached
        }
    }

    impl RecordingView {
        fn line_length(&self) -> usize {
            let separator = if self.ordinate.is_empty() { 0 } else { 2 };
            char_count(&self.abscissa) + separator + char_count(&self.ordinate)
        }
    }

    #[derive(Default)]
    struct Screen {
        banner: RecordingView,
        config: BannerConfig,
    }

    impl FunctionBannerDelegate for Screen {
        type View = RecordingView;

        fn banner_view(&mut self) -> &mut RecordingView {
            &mut self.banner
        }

        fn banner_config(&self) -> BannerConfig {
            self.config
        }
    }

    fn square() -> CartesianFunction {
        CartesianFunction::new(|x| x * x)
    }

    #[test]
    fn test_reload_writes_legend_and_fields() {
        let mut screen = Screen::default();
        let cursor = CurveViewCursor::new(2.0, 4.0);
        screen.reload_banner_view_for_cursor_on_function(&cursor, &square(), 'f');

        assert_eq!(screen.banner.legend, "f");
        assert_eq!(screen.banner.abscissa, "x=2");
        assert_eq!(screen.banner.ordinate, "f(x)=4");
        assert_eq!(
            screen.banner.writes,
            [BannerField::Abscissa, BannerField::Ordinate]
        );
    }

    #[test]
    fn test_reload_replaces_stale_content_when_undefined() {
        let mut screen = Screen::default();
        let log = CartesianFunction::new(f64::ln);

        screen.reload_banner_view_for_cursor_on_function(
            &CurveViewCursor::new(1.0, 0.0),
            &log,
            'h',
        );
        assert_eq!(screen.banner.ordinate, "h(x)=0");

        screen.reload_banner_view_for_cursor_on_function(
            &CurveViewCursor::new(-2.0, 0.0),
            &log,
            'h',
        );
        assert_eq!(screen.banner.abscissa, "x=-2");
        assert_eq!(screen.banner.ordinate, "h(x)=undef");
    }

    #[test]
    fn test_reload_does_not_touch_cursor() {
        let mut screen = Screen::default();
        let cursor = CurveViewCursor::new(0.5, 123.0);
        let before = cursor;
        screen.reload_banner_view_for_cursor_on_function(&cursor, &square(), 'f');
        assert_eq!(cursor, before);
        // The value comes from the function, not the stored ordinate.
        assert_eq!(screen.banner.ordinate, "f(x)=0.25");
    }

    #[test]
    fn test_reload_is_idempotent() {
        let mut screen = Screen::default();
        let cursor = CurveViewCursor::new(-1.25, 0.0);
        screen.reload_banner_view_for_cursor_on_function(&cursor, &square(), 'f');
        let first = (
            screen.banner.legend.clone(),
            screen.banner.abscissa.clone(),
            screen.banner.ordinate.clone(),
        );
        screen.reload_banner_view_for_cursor_on_function(&cursor, &square(), 'f');
        let second = (
            screen.banner.legend.clone(),
            screen.banner.abscissa.clone(),
            screen.banner.ordinate.clone(),
        );
        assert_eq!(first, second);
    }

    #[test]
    fn test_reload_respects_length_limits() {
        let named = CartesianFunction::new(|x| x.exp() * 1.0e250).with_name("exponential_growth");
        let values = [-1.0e-280, -3.7, 0.001, 1.0 / 7.0, 98765.4321, 1.0e300];
        let configs = [
            BannerConfig::default(),
            BannerConfig::default().with_significant_digits(14, 14),
            BannerConfig::default()
                .with_significant_digits(14, 14)
                .with_display_mode(DisplayMode::Scientific),
        ];

        for config in configs {
            for width in [None, Some(30), Some(12)] {
                for &x in &values {
                    let mut screen = Screen {
                        banner: RecordingView {
                            width,
                            ..RecordingView::default()
                        },
                        config,
                    };
                    screen.reload_banner_view_for_cursor_on_function(
                        &CurveViewCursor::new(x, 0.0),
                        &named,
                        'f',
                    );
                    let limit = width.unwrap_or(MAX_NUMBER_OF_CHARACTERS);
                    assert!(char_count(&screen.banner.legend) <= MAX_LEGEND_LENGTH);
                    assert!(
                        screen.banner.line_length() <= limit,
                        "{} / {} exceeds {}",
                        screen.banner.abscissa,
                        screen.banner.ordinate,
                        limit
                    );
                }
            }
        }
    }

    #[test]
    fn test_reload_through_trait_object_function() {
        let mut screen = Screen::default();
        let function: &dyn Function = &square();
        screen.reload_banner_view_for_cursor_on_function(
            &CurveViewCursor::new(3.0, 9.0),
            function,
            'g',
        );
        assert_eq!(screen.banner.ordinate, "g(x)=9");
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "detached")]
    fn test_detached_view_asserts_in_debug() {
        let mut screen = Screen::default();
        screen.banner.detached = true;
        screen.reload_banner_view_for_cursor_on_function(
            &CurveViewCursor::new(1.0, 1.0),
            &square(),
            'f',
        );
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn test_detached_view_is_skipped_in_release() {
        let mut screen = Screen::default();
        screen.banner.detached = true;
        screen.reload_banner_view_for_cursor_on_function(
            &CurveViewCursor::new(1.0, 1.0),
            &square(),
            'f',
        );
        assert!(screen.banner.writes.is_empty());
        assert!(screen.banner.legend.is_empty());
    }
}
