//! Cursor-tracking function banner for graphing-calculator displays
//!
//! This crate keeps the small information banner of a graph screen in sync
//! with a cursor that follows a plotted function. Given the cursor and the
//! function it sits on, a [`FunctionBannerDelegate`] formats the cursor
//! readout, keeps it inside the display's width limits, and pushes it into
//! the banner view supplied by the concrete screen.
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on embedded
//! targets as well as on desktop hosts (for tests).

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod banner;
pub mod config;
pub mod curve;
pub mod framebuffer;
pub mod pages;
pub mod ui;

pub use banner::{
    BannerContent, BannerError, BannerField, BannerResult, BannerView, FunctionBannerDelegate,
    MAX_LEGEND_LENGTH, MAX_NUMBER_OF_CHARACTERS, TextBannerView,
};
pub use config::{BannerConfig, DisplayMode};
pub use curve::{CartesianFunction, CurveViewCursor, Function};
pub use framebuffer::FrameBuffer;
pub use pages::GraphPage;
