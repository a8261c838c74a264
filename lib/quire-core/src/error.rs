//! Error types for quire.

use derive_more::{Display, Error, From};

use crate::Kind;

/// Boxed error returned by custom encoders.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

// ============================================================================
// Error Type
// ============================================================================

/// Main error type for query encoding.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// The root value cannot be turned into query values.
    #[display("unsupported kind for query encoding: {kind}")]
    #[from(skip)]
    UnsupportedKind {
        /// Kind of the rejected value.
        #[error(not(source))]
        kind: Kind,
    },

    /// A field's custom encoder returned an error.
    #[display("custom encoder failed for key '{key}': {source}")]
    #[from(skip)]
    CustomEncoder {
        /// Key the encoder was invoked with.
        key: String,
        /// The error returned by the encoder, unchanged.
        source: BoxError,
    },

    /// The input nests deeper than the configured limit.
    #[display("maximum nesting depth of {max_depth} exceeded at '{key}'")]
    #[from(skip)]
    DepthLimitExceeded {
        /// Key at which the limit was hit.
        key: String,
        /// Configured limit.
        max_depth: usize,
    },

    /// URL parsing error.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an unsupported kind error.
    #[must_use]
    pub const fn unsupported(kind: Kind) -> Self {
        Self::UnsupportedKind { kind }
    }

    /// Wrap an error returned by a custom encoder.
    #[must_use]
    pub fn custom_encoder(key: impl Into<String>, source: BoxError) -> Self {
        Self::CustomEncoder {
            key: key.into(),
            source,
        }
    }

    /// Create a depth limit error.
    #[must_use]
    pub fn depth_limit(key: impl Into<String>, max_depth: usize) -> Self {
        Self::DepthLimitExceeded {
            key: key.into(),
            max_depth,
        }
    }

    /// Returns `true` if the root value had an unsupported kind.
    #[must_use]
    pub const fn is_unsupported_kind(&self) -> bool {
        matches!(self, Self::UnsupportedKind { .. })
    }

    /// Returns `true` if a custom encoder failed.
    #[must_use]
    pub const fn is_custom_encoder(&self) -> bool {
        matches!(self, Self::CustomEncoder { .. })
    }

    /// Returns `true` if the depth guard stopped the traversal.
    #[must_use]
    pub const fn is_depth_limit(&self) -> bool {
        matches!(self, Self::DepthLimitExceeded { .. })
    }

    /// The query key involved in the failure, if any.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::CustomEncoder { key, .. } | Self::DepthLimitExceeded { key, .. } => Some(key),
            _ => None,
        }
    }

    /// The error a custom encoder returned, for downcasting.
    ///
    /// # Example
    ///
    /// ```ignore
    /// match quire::encode(&params) {
    ///     Err(err) => {
    ///         if let Some(inner) = err.custom_source().and_then(|e| e.downcast_ref::<MyError>()) {
    ///             println!("encoder rejected value: {inner}");
    ///         }
    ///     }
    ///     Ok(values) => println!("{values}"),
    /// }
    /// ```
    #[must_use]
    pub fn custom_source(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Self::CustomEncoder { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}
