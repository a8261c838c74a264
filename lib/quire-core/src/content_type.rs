//! Content-type to codec name bindings.
//!
//! Bodies are marshalled outside this crate; the registry only answers which
//! codec a MIME type maps to, keyed by its subtype.

use std::collections::HashMap;
use std::sync::{LazyLock, PoisonError, RwLock};

use http::HeaderMap;
use http::header::{CONTENT_TYPE, HeaderName};
use tracing::debug;

/// JSON codec name, also bound to the `*` wildcard.
pub const JSON: &str = "json";
/// Protocol buffers codec name.
pub const PROTO: &str = "proto";
/// XML codec name.
pub const XML: &str = "xml";
/// YAML codec name.
pub const YAML: &str = "yaml";
/// Plain text codec name.
pub const PLAIN: &str = "plain";

/// Extracts a MIME type's subtype.
///
/// The subtype is the text between `/` and the first `;`, with anything up
/// to a `+` removed. Returns an empty string when there is no `/` or a `;`
/// comes before it.
///
/// ```
/// use quire_core::sub_content_type;
///
/// assert_eq!(sub_content_type("application/vnd.api+json"), "json");
/// assert_eq!(sub_content_type("application/json; charset=utf-8"), "json");
/// assert_eq!(sub_content_type("json"), "");
/// ```
#[must_use]
pub fn sub_content_type(content_type: &str) -> &str {
    let Some(slash) = content_type.find('/') else {
        return "";
    };
    let end = content_type.find(';').unwrap_or(content_type.len());
    if end < slash {
        return "";
    }

    let subtype = content_type.get(slash + 1..end).unwrap_or_default();
    subtype
        .split_once('+')
        .map_or(subtype, |(_, suffix)| suffix)
}

/// Subtype to codec name bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecRegistry {
    bindings: HashMap<String, String>,
}

impl Default for CodecRegistry {
    fn default() -> Self {
        let bindings = [
            ("*", JSON),
            ("json", JSON),
            ("x-protobuf", PROTO),
            ("xml", XML),
            ("x-yaml", YAML),
            ("yaml", YAML),
            ("plain", PLAIN),
        ]
        .into_iter()
        .map(|(subtype, name)| (subtype.to_string(), name.to_string()))
        .collect();

        Self { bindings }
    }
}

impl CodecRegistry {
    /// A registry with the default bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with no bindings.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Binds the subtype of `content_type` to `name`. Empty names are ignored.
    pub fn register(&mut self, content_type: &str, name: &str) {
        if name.is_empty() {
            return;
        }
        let subtype = sub_content_type(content_type);
        debug!(content_type, subtype, codec = name, "registering codec");
        self.bindings.insert(subtype.to_string(), name.to_string());
    }

    /// Codec name bound to the subtype of `content_type`.
    #[must_use]
    pub fn codec_name(&self, content_type: &str) -> Option<&str> {
        self.bindings
            .get(sub_content_type(content_type))
            .map(String::as_str)
    }

    /// First `Content-Type` value with a bound codec.
    #[must_use]
    pub fn codec_for_headers(&self, headers: &HeaderMap) -> Option<&str> {
        self.codec_for_header(headers, &CONTENT_TYPE)
    }

    /// First value of `header` with a bound codec.
    #[must_use]
    pub fn codec_for_header(&self, headers: &HeaderMap, header: &HeaderName) -> Option<&str> {
        headers
            .get_all(header)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find_map(|value| self.codec_name(value))
    }
}

static GLOBAL: LazyLock<RwLock<CodecRegistry>> =
    LazyLock::new(|| RwLock::new(CodecRegistry::default()));

/// Binds a content type in the process-wide registry.
pub fn register_codec_name(content_type: &str, name: &str) {
    GLOBAL
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .register(content_type, name);
}

/// Looks a content type up in the process-wide registry.
#[must_use]
pub fn codec_name_for(content_type: &str) -> Option<String> {
    GLOBAL
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .codec_name(content_type)
        .map(str::to_string)
}

/// Snapshot of the process-wide registry.
#[must_use]
pub fn global_registry() -> CodecRegistry {
    GLOBAL.read().unwrap_or_else(PoisonError::into_inner).clone()
}
