//! Encode annotated Rust values into URL query parameters.
//!
//! quire walks structs, maps and sequences and produces an ordered multimap
//! of query keys to values, driven by per-field tags.
//!
//! # Example
//!
//! ```ignore
//! use quire::prelude::*;
//!
//! #[derive(Query)]
//! pub struct Address {
//!     #[query("city")]
//!     pub city: String,
//!     #[query("postcode")]
//!     pub postcode: String,
//! }
//!
//! #[derive(Query)]
//! pub struct User {
//!     #[query("name")]
//!     pub name: String,
//!     #[query("addr")]
//!     pub addr: Address,
//! }
//!
//! let user = User {
//!     name: "acme".into(),
//!     addr: Address { city: "SFO".into(), postcode: "1234".into() },
//! };
//!
//! let url = quire::build_url("https://api.example.com/users", &user)?;
//! assert_eq!(
//!     url.query(),
//!     Some("addr%5Bcity%5D=SFO&addr%5Bpostcode%5D=1234&name=acme"),
//! );
//! ```
//!
//! See the [tutorial][_tutorial] for a complete guide.

pub mod _tutorial;
pub mod prelude;

// Re-export core types
pub use quire_core::{
    BoxError, CodecRegistry, EncodeValues, Encoder, EncoderConfig, EncoderConfigBuilder, Error,
    FieldMeta, FieldSpec, FieldTag, JoinStyle, Kind, QueryField, QueryStruct, QueryValue,
    QueryValues, RenderOptions, Result, SKIP_TAG, ScopeJoin, SeqMode, TagOptions, TimeFormat,
    ToQuery, build_url, codec_name_for, encode, flag, global_config, global_registry,
    is_zero_time, register_codec_name, render, render_time, set_global_config, set_query,
    sub_content_type,
};

/// Codec names bound by the default content-type registry.
pub mod codec {
    pub use quire_core::{JSON, PLAIN, PROTO, XML, YAML};
}

// Re-export crates used in public signatures
pub use url;

// Re-export macros
pub use quire_macro::Query;
