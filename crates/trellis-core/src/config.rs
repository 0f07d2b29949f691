/// Runtime configuration for Trellis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `tracing` filter directive used when `RUST_LOG` is not set.
    pub log_filter: String,
    pub profiling: ProfilingMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_filter: "info".to_string(),
            profiling: ProfilingMode::Off,
        }
    }
}

impl Config {
    /// Set the default log filter.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Set the profiling mode.
    pub fn with_profiling(mut self, profiling: ProfilingMode) -> Self {
        self.profiling = profiling;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfilingMode {
    /// Profiling scopes are compiled in but not collected
    Off,
    /// Layout and draw passes record puffin scopes
    On,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.profiling, ProfilingMode::Off);
    }

    #[test]
    fn test_builder_methods() {
        let config = Config::default()
            .with_log_filter("trellis_table=debug")
            .with_profiling(ProfilingMode::On);
        assert_eq!(config.log_filter, "trellis_table=debug");
        assert_eq!(config.profiling, ProfilingMode::On);
    }
}
