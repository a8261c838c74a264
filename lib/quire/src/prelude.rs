//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types, functions, and macros
//! for easy glob importing:
//!
//! ```ignore
//! use quire::prelude::*;
//! ```

pub use crate::{
    BoxError, EncodeValues, Encoder, EncoderConfig, Error, Query, QueryStruct, QueryValue,
    QueryValues, Result, ScopeJoin, ToQuery, build_url, encode, set_query,
};
