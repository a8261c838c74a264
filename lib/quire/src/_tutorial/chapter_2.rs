//! # Chapter 2: Nesting
//!
//! ## Scopes
//!
//! Nested structs and maps are written under their parent's key:
//!
//! ```ignore
//! #[derive(Query)]
//! pub struct Search {
//!     #[query("user")]
//!     pub user: User,                 // user[name]=acme&user[addr][city]=SFO
//! }
//! ```
//!
//! Dots instead of brackets are a configuration switch, see
//! [Chapter 3][super::chapter_3].
//!
//! ## Inline
//!
//! `inline` writes a nested value's keys in the parent's scope. It is ignored
//! when the tag also gives a name.
//!
//! ```ignore
//! #[derive(Query)]
//! pub struct Listing {
//!     #[query("name")]
//!     pub name: String,
//!     #[query(",inline")]
//!     pub pages: HashMap<String, String>,   // a=1&b=2&name=
//! }
//! ```
//!
//! Map entries with empty values are skipped.
//!
//! ## Flatten
//!
//! `flatten` embeds a struct: its fields are written as if they were the
//! parent's, after all of the parent's own fields.
//!
//! ```ignore
//! #[derive(Query)]
//! pub struct Paging {
//!     pub page: u32,
//!     pub per_page: u32,
//! }
//!
//! #[derive(Query)]
//! pub struct ListUsers {
//!     pub q: String,
//!     #[query(flatten)]
//!     pub paging: Paging,             // page=1&per_page=20&q=...
//! }
//! ```
//!
//! ## Sequences of Structs
//!
//! Without a join flag, each element opens a scope at its own key:
//!
//! ```ignore
//! #[query("f,indexed")]
//! pub filters: Vec<Filter>,           // f[0][field]=..&f[1][field]=..
//! ```
//!
//! ## Next Steps
//!
//! Continue to [Chapter 3: Extending][super::chapter_3].
