//! Trellis Core
//!
//! Shared building blocks for the Trellis charting workspace: geometry,
//! colours, configuration, logging and profiling.

pub mod color;
pub mod config;
pub mod geometry;
pub mod logging;
pub mod profiling;

pub use color::Color;
pub use config::{Config, ProfilingMode};
pub use geometry::{Insets, Rect, Size};
pub use glam::Vec2;

/// Initialize logging and profiling from a [`Config`].
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init(config: &Config) {
    logging::init(&config.log_filter);
    profiling::set_enabled(config.profiling == ProfilingMode::On);
}
