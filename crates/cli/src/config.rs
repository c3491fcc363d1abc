//! Session configuration.

use stocktrack_inventory::DEFAULT_CAPACITY;

/// Environment variable overriding the inventory capacity.
pub const CAPACITY_ENV: &str = "STOCKTRACK_CAPACITY";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Maximum number of records the session accepts.
    pub capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl SessionConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults.
    ///
    /// Unusable values are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(CAPACITY_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(capacity) if capacity > 0 => config.capacity = capacity,
                _ => tracing::warn!(
                    value = %raw,
                    default = DEFAULT_CAPACITY,
                    "{CAPACITY_ENV} is not a positive integer; using default"
                ),
            }
        }

        config
    }
}
