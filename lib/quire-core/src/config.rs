//! Encoder configuration.

use std::sync::{PoisonError, RwLock};

/// How a nested key is attached to its scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ScopeJoin {
    /// `scope[name]`
    #[default]
    Brackets,
    /// `scope.name`
    Dots,
}

impl ScopeJoin {
    /// Joins `name` under `scope`, returning `name` alone for an empty scope.
    #[must_use]
    pub fn join(self, scope: &str, name: &str) -> String {
        if scope.is_empty() {
            return name.to_string();
        }
        match self {
            Self::Brackets => format!("{scope}[{name}]"),
            Self::Dots => format!("{scope}.{name}"),
        }
    }
}

/// Configuration for the query encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Deepest nesting level visited before failing.
    pub max_depth: usize,
    /// Nested key notation.
    pub scope_join: ScopeJoin,
}

impl EncoderConfig {
    /// The default configuration.
    pub const DEFAULT: Self = Self {
        max_depth: 32,
        scope_join: ScopeJoin::Brackets,
    };

    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> EncoderConfigBuilder {
        EncoderConfigBuilder::default()
    }
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Builder for [`EncoderConfig`].
#[derive(Debug, Clone, Default)]
pub struct EncoderConfigBuilder {
    max_depth: Option<usize>,
    scope_join: Option<ScopeJoin>,
}

impl EncoderConfigBuilder {
    /// Set the maximum nesting depth.
    #[must_use]
    pub const fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Set the nested key notation.
    #[must_use]
    pub const fn scope_join(mut self, scope_join: ScopeJoin) -> Self {
        self.scope_join = Some(scope_join);
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> EncoderConfig {
        let defaults = EncoderConfig::default();
        EncoderConfig {
            max_depth: self.max_depth.unwrap_or(defaults.max_depth),
            scope_join: self.scope_join.unwrap_or(defaults.scope_join),
        }
    }
}

static GLOBAL: RwLock<EncoderConfig> = RwLock::new(EncoderConfig::DEFAULT);

/// Process-wide configuration used by [`Encoder::default`](crate::Encoder)
/// and [`encode`](crate::encode).
#[must_use]
pub fn global_config() -> EncoderConfig {
    *GLOBAL.read().unwrap_or_else(PoisonError::into_inner)
}

/// Replaces the process-wide configuration. Meant for startup code.
pub fn set_global_config(config: EncoderConfig) {
    *GLOBAL.write().unwrap_or_else(PoisonError::into_inner) = config;
}
