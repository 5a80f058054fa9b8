//! Resolver configuration types

use serde::{Deserialize, Serialize};
use wirebox_application::use_cases::{DuplicatePolicy, ResolverOptions};

/// Resolver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Memoize successful dependency extraction per type
    pub cache_enabled: bool,

    /// Whether two setters may require the same type
    pub duplicate_policy: DuplicatePolicy,
}

impl ResolverConfig {
    /// Options for the resolution service
    pub fn options(&self) -> ResolverOptions {
        ResolverOptions {
            duplicate_policy: self.duplicate_policy,
            cache_enabled: self.cache_enabled,
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        let options = ResolverOptions::default();
        Self {
            cache_enabled: options.cache_enabled,
            duplicate_policy: options.duplicate_policy,
        }
    }
}
