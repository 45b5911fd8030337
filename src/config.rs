//! Number display preferences for the banner
//!
//! Persisted with postcard so a screen can restore the user's choice.

use serde::{Deserialize, Serialize};

use crate::banner::{BannerError, BannerResult};

/// Significant digits used for secondary readouts such as the abscissa.
pub const MEDIUM_SIGNIFICANT_DIGITS: u8 = 5;

/// Significant digits used for the main readout.
pub const LARGE_SIGNIFICANT_DIGITS: u8 = 7;

/// Most significant digits an `f64` can meaningfully show.
pub const MAX_SIGNIFICANT_DIGITS: u8 = 14;

/// Upper bound of the postcard encoding of [`BannerConfig`].
pub const CONFIG_BUFFER_SIZE: usize = 8;

/// How numbers are written in the banner.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Plain decimals, switching to scientific for very large or small values
    #[default]
    Decimal,
    /// Always `<mantissa>E<exponent>`
    Scientific,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerConfig {
    pub abscissa_significant_digits: u8,
    pub ordinate_significant_digits: u8,
    pub display_mode: DisplayMode,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            abscissa_significant_digits: MEDIUM_SIGNIFICANT_DIGITS,
            ordinate_significant_digits: LARGE_SIGNIFICANT_DIGITS,
            display_mode: DisplayMode::Decimal,
        }
    }
}

impl BannerConfig {
    pub fn with_display_mode(mut self, mode: DisplayMode) -> Self {
        self.display_mode = mode;
        self
    }

    pub fn with_significant_digits(mut self, abscissa: u8, ordinate: u8) -> Self {
        self.abscissa_significant_digits = abscissa;
        self.ordinate_significant_digits = ordinate;
        self
    }

    /// Check that both digit counts lie in `1..=MAX_SIGNIFICANT_DIGITS`.
    pub fn validate(&self) -> BannerResult<()> {
        let valid = 1..=MAX_SIGNIFICANT_DIGITS;
        if !valid.contains(&self.abscissa_significant_digits) {
            return Err(BannerError::InvalidConfig {
                reason: "abscissa significant digits out of range",
            });
        }
        if !valid.contains(&self.ordinate_significant_digits) {
            return Err(BannerError::InvalidConfig {
                reason: "ordinate significant digits out of range",
            });
        }
        Ok(())
    }

    /// Serialize into `buffer`, returning the written prefix.
    pub fn to_bytes<'a>(&self, buffer: &'a mut [u8]) -> BannerResult<&'a mut [u8]> {
        self.validate()?;
        postcard::to_slice(self, buffer).map_err(|_| BannerError::InvalidConfig {
            reason: "buffer too small for config",
        })
    }

    /// Deserialize and validate a config written by [`BannerConfig::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> BannerResult<Self> {
        let config: Self = postcard::from_bytes(bytes).map_err(|_| BannerError::InvalidConfig {
            reason: "malformed config bytes",
        })?;
        config.validate()?;
        Ok(config)
    }
}
