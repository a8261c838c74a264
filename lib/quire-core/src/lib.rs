//! Core types and traits for quire query encoding.
//!
//! This crate provides the runtime used by quire:
//! - [`QueryValues`] - Ordered multimap of query keys to values
//! - [`ToQuery`] and [`QueryValue`] - Classification of encodable values
//! - [`QueryStruct`] and [`FieldMeta`] - Field tables generated by `#[derive(Query)]`
//! - [`EncodeValues`] - Hook for values that write their own entries
//! - [`FieldTag`] - Field tag parsing
//! - [`Encoder`], [`encode`] - Traversal of nested values
//! - [`EncoderConfig`] - Depth limit and scope notation
//! - [`CodecRegistry`] - Content-type to codec name bindings
//! - [`Error`] and [`Result`] - Error handling

mod config;
mod content_type;
mod encoder;
mod error;
mod field;
pub mod prelude;
mod render;
mod tag;
mod value;
mod values;

pub use config::{EncoderConfig, EncoderConfigBuilder, ScopeJoin, global_config, set_global_config};
pub use content_type::{
    CodecRegistry, JSON, PLAIN, PROTO, XML, YAML, codec_name_for, global_registry,
    register_codec_name, sub_content_type,
};
pub use encoder::{Encoder, build_url, encode, set_query};
pub use error::{BoxError, Error, Result};
pub use field::{FieldMeta, FieldSpec, QueryField, QueryStruct, SeqMode};
pub use render::{RenderOptions, is_zero_time, render, render_time};
pub use tag::{FieldTag, JoinStyle, SKIP_TAG, TagOptions, TimeFormat, flag};
pub use value::{EncodeValues, Kind, QueryValue, ToQuery};
pub use values::QueryValues;
