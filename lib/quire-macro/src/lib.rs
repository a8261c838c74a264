//! Procedural macros for quire.
//!
//! This crate provides `#[derive(Query)]`, which lists a struct's fields,
//! in declaration order, for the quire query encoder.
//!
//! # Example
//!
//! ```ignore
//! use quire::prelude::*;
//!
//! #[derive(Query)]
//! pub struct ListIssues {
//!     #[query("state,omitempty")]
//!     pub state: Option<String>,
//!     #[query("labels,comma")]
//!     pub labels: Vec<String>,
//! }
//!
//! let values = quire::encode(&ListIssues { state: None, labels: vec!["bug".into()] })?;
//! assert_eq!(values.encode(), "labels=bug");
//! ```

mod attrs;
mod query_derive;

use proc_macro::TokenStream;

/// Derive `QueryStruct` and `ToQuery` for a struct with named fields.
///
/// Only `pub` fields (any visibility but private) are encoded, unless a
/// private field is marked `flatten`.
///
/// # Struct Attributes
///
/// - `#[query(rename_all = "camelCase")]` - Rename all declared field names
///
/// Supported case conventions:
/// - `lowercase`, `UPPERCASE`
/// - `camelCase`, `PascalCase`
/// - `snake_case`, `SCREAMING_SNAKE_CASE`
/// - `kebab-case`, `SCREAMING-KEBAB-CASE`
///
/// # Field Attributes
///
/// - `#[query("name,flag,key:value")]` - Tag: the query name (empty keeps the
///   field name) followed by flags such as `omitempty`, `inline`, `comma`,
///   `space`, `semicolon`, `brackets`, `numbered`, `indexed`, `int`, `unix`,
///   `unixmilli`, `unixnano`
/// - `#[query("-")]` or `#[query(skip)]` - Leave the field out
/// - `#[query(layout = "%Y-%m-%d")]` - chrono layout for time values
/// - `#[query(del = "|")]` - Join sequence elements with a custom delimiter
/// - `#[query(flatten)]` - Embed the field: its fields are encoded as if
///   they were the parent's, after the parent's own fields
///
/// # Example
///
/// ```ignore
/// use quire::Query;
///
/// #[derive(Query)]
/// #[query(rename_all = "camelCase")]
/// pub struct SearchParams {
///     pub search_query: String,          // "searchQuery"
///     #[query("limit,omitempty")]
///     pub per_page: u32,                 // explicit name wins
///     #[query(",brackets")]
///     pub tag_list: Vec<String>,         // "tagList[]=a&tagList[]=b"
///     #[query(",unix")]
///     pub since: chrono::DateTime<chrono::Utc>,
/// }
/// ```
#[proc_macro_derive(Query, attributes(query))]
pub fn derive_query(input: TokenStream) -> TokenStream {
    query_derive::expand_query_derive(input.into())
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
