//! Logging and profiling initialization tests.

use trellis_core::{Config, ProfilingMode, logging, profiling};

#[test]
fn test_logging_init_is_idempotent() {
    logging::init("debug");
    // A subscriber is installed by now, so a second install is refused.
    assert!(!logging::init("trace"));
}

#[test]
fn test_init_from_config() {
    let config = Config::default().with_profiling(ProfilingMode::On);
    trellis_core::init(&config);
    profiling::new_frame();
    profiling::set_enabled(false);
}
