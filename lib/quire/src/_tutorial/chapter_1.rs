//! # Chapter 1: Field Tags
//!
//! A tag is `name,flag,flag:value`. The name comes first; leave it empty to
//! keep the field name.
//!
//! ## Names and Skipping
//!
//! ```ignore
//! #[derive(Query)]
//! pub struct Params {
//!     #[query("q")]
//!     pub text: String,        // q=...
//!     pub Page: u32,           // Page=...
//!     #[query("-")]
//!     pub internal: String,    // never encoded
//!     #[query("-,")]
//!     pub dash: String,        // encoded as "-"
//! }
//! ```
//!
//! ## Empty Values
//!
//! An empty value is still written, as an empty string, unless the tag says
//! `omitempty`. Empty means `false`, zero, `""`, an empty collection, `None`
//! or `DateTime::<Utc>::MIN_UTC`. The Unix epoch is a real time and is kept.
//!
//! ```ignore
//! #[derive(Query)]
//! pub struct Filter {
//!     #[query("state,omitempty")]
//!     pub state: Option<String>,
//!     #[query("label")]
//!     pub label: String,
//! }
//!
//! // Filter { state: None, label: String::new() } encodes to "label="
//! ```
//!
//! ## Booleans
//!
//! `int` writes `1` / `0` instead of `true` / `false`:
//!
//! ```ignore
//! #[query("archived,int")]
//! pub archived: bool,
//! ```
//!
//! ## Sequences
//!
//! | Tag | `v = ["a", "b"]` |
//! |-----|------------------|
//! | (none) | `v=a&v=b` |
//! | `,comma` | `v=a,b` |
//! | `,space` | `v=a b` |
//! | `,semicolon` | `v=a;b` |
//! | `,brackets` | `v[]=a&v[]=b` |
//! | `,numbered` | `v0=a&v1=b` |
//! | `,indexed` | `v[0]=a&v[1]=b` |
//! | `#[query(del = "!")]` | `v=a!b` |
//!
//! Empty sequences are never written.
//!
//! ## Times
//!
//! `chrono` date-times default to RFC 3339. `unix`, `unixmilli` and
//! `unixnano` write epoch offsets; `layout` takes a chrono format string:
//!
//! ```ignore
//! #[derive(Query)]
//! pub struct Window {
//!     #[query("from,unix")]
//!     pub from: DateTime<Utc>,          // from=1704067200
//!     #[query("to")]
//!     #[query(layout = "%Y-%m-%d")]
//!     pub to: DateTime<Utc>,            // to=2024-01-31
//! }
//! ```
//!
//! ## Next Steps
//!
//! Continue to [Chapter 2: Nesting][super::chapter_2].
