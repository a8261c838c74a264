//! Prelude module for convenient imports.
//!
//! ```ignore
//! use quire_core::prelude::*;
//! ```

pub use crate::{
    BoxError, EncodeValues, Encoder, EncoderConfig, Error, QueryStruct, QueryValue, QueryValues,
    Result, ScopeJoin, ToQuery, build_url, encode, set_query,
};
