//! Profiling scopes based on the `puffin` crate.
//!
//! With the `profiling` feature disabled the macros expand to nothing.

#[cfg(feature = "profiling")]
pub use puffin::{profile_function, profile_scope};

#[cfg(not(feature = "profiling"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __trellis_profile_noop {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "profiling"))]
pub use crate::__trellis_profile_noop as profile_function;
#[cfg(not(feature = "profiling"))]
pub use crate::__trellis_profile_noop as profile_scope;

/// Turn scope collection on or off.
pub fn set_enabled(enabled: bool) {
    #[cfg(feature = "profiling")]
    puffin::set_scopes_on(enabled);

    #[cfg(not(feature = "profiling"))]
    if enabled {
        tracing::warn!("profiling requested but the `profiling` feature is disabled");
    }
}

/// Mark the start of a new frame.
///
/// Call once per redraw so scopes are grouped by draw pass.
#[inline]
pub fn new_frame() {
    #[cfg(feature = "profiling")]
    puffin::GlobalProfiler::lock().new_frame();
}
