//! Function banner: cursor readout for graph screens
//!
//! The banner is the small strip of text that follows the cursor along a
//! plotted curve. It shows the cursor abscissa and the value of the function
//! there, tagged with a legend naming the function:
//!
//! ```text
//! x=2  f(x)=4
//! ```
//!
//! # Width limits
//!
//! The display is narrow, so every piece of text is bounded:
//! - the legend holds at most [`MAX_LEGEND_LENGTH`] characters
//! - the composed line holds at most [`MAX_NUMBER_OF_CHARACTERS`] characters
//!
//! When a readout would not fit, numbers lose significant digits first and
//! text is elided with `~` as a last resort. Nothing is ever written past
//! the limits.
//!
//! # Examples
//!
//! ```ignore
//! use curve_banner::banner::*;
//!
//! struct Screen {
//!     banner: TextBannerView,
//! }
//!
//! impl FunctionBannerDelegate for Screen {
//!     type View = TextBannerView;
//!
//!     fn banner_view(&mut self) -> &mut TextBannerView {
//!         &mut self.banner
//!     }
//! }
//!
//! screen.reload_banner_view_for_cursor_on_function(&cursor, &function, 'f');
//! ```

use thiserror_no_std::Error;

mod content;
mod delegate;
pub mod format;
pub mod legend;
mod view;

pub use content::{BannerContent, compose_banner};
pub use delegate::FunctionBannerDelegate;
pub use view::{BannerField, BannerView, TextBannerView};

/// Maximum number of characters in a legend
pub const MAX_LEGEND_LENGTH: usize = 14;

/// Maximum number of characters in a composed banner line
pub const MAX_NUMBER_OF_CHARACTERS: usize = 50;

/// Byte capacity of a legend buffer (any UTF-8 legend within the limit fits)
pub const LEGEND_CAPACITY: usize = MAX_LEGEND_LENGTH * 4;

/// Byte capacity of a banner field buffer
pub const FIELD_CAPACITY: usize = MAX_NUMBER_OF_CHARACTERS * 4;

/// Placeholder shown where the function has no value
pub const UNDEFINED_TEXT: &str = "undef";

/// Marker appended to elided text
///
/// ASCII so every banner font has a glyph for it.
pub const ELLIPSIS: char = '~';

/// Separator between the abscissa and ordinate fields
pub const FIELD_SEPARATOR: &str = "  ";

/// Legend text, at most [`MAX_LEGEND_LENGTH`] characters
pub type Legend = heapless::String<LEGEND_CAPACITY>;

/// Field or line text, at most [`MAX_NUMBER_OF_CHARACTERS`] characters
pub type FieldText = heapless::String<FIELD_CAPACITY>;

/// Error types for banner operations
#[derive(Debug, Error, PartialEq)]
pub enum BannerError {
    /// Legend longer than the view accepts
    #[error("Legend too long (max: {max} characters)")]
    LegendTooLong {
        /// Maximum allowed legend length
        max: usize,
    },

    /// Field text longer than the view accepts
    #[error("Field text too long (max: {max} characters)")]
    FieldTooLong {
        /// Maximum allowed field length
        max: usize,
    },

    /// Banner view is not attached to the visible UI
    #[error("Banner view is not attached")]
    ViewDetached,

    /// Invalid or corrupted configuration
    #[error("Invalid banner configuration: {reason}")]
    InvalidConfig {
        /// What was wrong
        reason: &'static str,
    },
}

/// Result type for banner operations
pub type BannerResult<T> = Result<T, BannerError>;
