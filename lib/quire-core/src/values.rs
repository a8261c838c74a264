//! Ordered query-parameter multimap.
//!
//! [`QueryValues`] maps a key to the sequence of values written under it.
//! Keys are kept sorted, so [`QueryValues::encode`] is deterministic; the
//! order of values within a key is the order they were added in.
//!
//! # Example
//!
//! ```
//! use quire_core::QueryValues;
//!
//! let mut values = QueryValues::new();
//! values.add("tag", "rust");
//! values.add("tag", "http");
//! values.add("q", "hello world");
//!
//! assert_eq!(values.encode(), "q=hello+world&tag=rust&tag=http");
//! assert_eq!(QueryValues::parse("?q=hello+world&tag=rust&tag=http"), values);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters escaped in a query component. Only `A-Z a-z 0-9 - _ . ~` pass through.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Ordered multimap of query keys to string values.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct QueryValues {
    entries: BTreeMap<String, Vec<String>>,
}

impl QueryValues {
    /// Creates an empty multimap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value under `key`.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.entry(key.into()).or_default().push(value.into());
    }

    /// Replaces every value under `key` with `value`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), vec![value.into()]);
    }

    /// First value under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// All values under `key`, empty when the key is absent.
    #[must_use]
    pub fn get_all(&self, key: &str) -> &[String] {
        self.entries.get(key).map_or(&[], Vec::as_slice)
    }

    /// Returns `true` if at least one value was written under `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes `key`, returning its values.
    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        self.entries.remove(key)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no key is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates keys with their values, in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    /// Iterates the distinct keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Flattens into `(key, value)` pairs, keys in order, values in insertion order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().flat_map(|(key, values)| {
            values
                .iter()
                .map(move |value| (key.as_str(), value.as_str()))
        })
    }

    pub(crate) const fn as_map(&self) -> &BTreeMap<String, Vec<String>> {
        &self.entries
    }

    /// Appends every value of `other` after the values already present.
    pub fn merge(&mut self, other: Self) {
        for (key, values) in other.entries {
            self.entries.entry(key).or_default().extend(values);
        }
    }

    /// Renders the `application/x-www-form-urlencoded` query string.
    ///
    /// Keys are sorted, spaces become `+`.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut out = String::new();
        for (key, value) in self.pairs() {
            if !out.is_empty() {
                out.push('&');
            }
            out.push_str(&escape(key));
            out.push('=');
            out.push_str(&escape(value));
        }
        out
    }

    /// Parses an already-formed query string.
    ///
    /// Leading `?` characters are ignored; pairs are split on `&` then `=`,
    /// and percent/plus escapes are decoded.
    #[must_use]
    pub fn parse(query: &str) -> Self {
        Self::parse_bytes(query.as_bytes())
    }

    /// Parses an already-formed query string held in a byte buffer.
    #[must_use]
    pub fn parse_bytes(query: &[u8]) -> Self {
        let start = query.iter().take_while(|&&b| b == b'?').count();
        let query = query.get(start..).unwrap_or_default();
        url::form_urlencoded::parse(query).into_owned().collect()
    }

    /// Appends the encoded values to `url`'s query.
    ///
    /// Joins with `&` when the URL already has a query, sets it otherwise,
    /// and leaves the URL untouched when there is nothing to add.
    pub fn append_to(&self, url: &mut url::Url) {
        let encoded = self.encode();
        if encoded.is_empty() {
            return;
        }

        let query = match url.query() {
            Some(existing) if !existing.is_empty() => format!("{existing}&{encoded}"),
            _ => encoded,
        };
        url.set_query(Some(&query));
    }
}

fn escape(component: &str) -> String {
    utf8_percent_encode(component, QUERY_COMPONENT)
        .to_string()
        .replace("%20", "+")
}

impl fmt::Display for QueryValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl<K, V> FromIterator<(K, V)> for QueryValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Self::new();
        values.extend(iter);
        values
    }
}

impl<K, V> Extend<(K, V)> for QueryValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}

impl IntoIterator for QueryValues {
    type Item = (String, Vec<String>);
    type IntoIter = std::collections::btree_map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
