//! # Chapter 0: Getting Started
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! quire = "0.1"
//! ```
//!
//! ## Your First Query Struct
//!
//! Derive `Query` on a struct with `pub` fields:
//!
//! ```ignore
//! use quire::prelude::*;
//!
//! #[derive(Query)]
//! pub struct ListRepos {
//!     #[query("sort")]
//!     pub sort: String,
//!     #[query("per_page")]
//!     pub per_page: u32,
//! }
//!
//! let params = ListRepos { sort: "updated".into(), per_page: 50 };
//! let values = quire::encode(&params)?;
//!
//! assert_eq!(values.get("sort"), Some("updated"));
//! assert_eq!(values.encode(), "per_page=50&sort=updated");
//! ```
//!
//! Private fields are not encoded.
//!
//! ## Building URLs
//!
//! ```ignore
//! let url = quire::build_url("https://api.github.com/user/repos", &params)?;
//! // https://api.github.com/user/repos?per_page=50&sort=updated
//!
//! // Or append to an existing URL (joins with `&` if it has a query)
//! let mut url = quire::url::Url::parse("https://api.github.com/user/repos?type=owner")?;
//! quire::set_query(&mut url, &params)?;
//! ```
//!
//! ## Other Inputs
//!
//! Maps, `serde_json::Value` objects and already-formed query strings work
//! too:
//!
//! ```ignore
//! use std::collections::BTreeMap;
//!
//! let values = quire::encode(&BTreeMap::from([("q", "rust"), ("page", "2")]))?;
//! let values = quire::encode("?q=rust&page=2")?;
//! ```
//!
//! ## Next Steps
//!
//! Continue to [Chapter 1: Field Tags][super::chapter_1].
