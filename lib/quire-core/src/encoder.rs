//! Value to query-values traversal.
//!
//! The root of an encode may be a struct, a map, a sequence, or text that is
//! already a query string. Structs are walked field by field in declaration
//! order, nested containers extend the key scope, and embedded structs are
//! visited after their parent's direct fields.

use tracing::{debug, trace, warn};

use crate::config::{EncoderConfig, global_config};
use crate::error::{Error, Result};
use crate::field::{FieldSpec, QueryStruct, SeqMode};
use crate::render::{RenderOptions, render};
use crate::value::{EncodeValues, QueryValue, ToQuery};
use crate::values::QueryValues;

/// Encodes values into [`QueryValues`] with a given configuration.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
///
/// use quire_core::{Encoder, EncoderConfig, ScopeJoin};
///
/// let config = EncoderConfig::builder().scope_join(ScopeJoin::Dots).build();
/// let encoder = Encoder::new(config);
/// let params = BTreeMap::from([("page", 2), ("size", 20)]);
///
/// let values = encoder.encode(&params)?;
/// assert_eq!(values.encode(), "page=2&size=20");
/// # Ok::<(), quire_core::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Encoder {
    config: EncoderConfig,
}

impl Default for Encoder {
    /// An encoder using the process-wide configuration.
    fn default() -> Self {
        Self::new(global_config())
    }
}

impl Encoder {
    /// Create an encoder with an explicit configuration.
    #[must_use]
    pub const fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    /// The encoder's configuration.
    #[must_use]
    pub const fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encodes `value` into fresh query values.
    pub fn encode<T: ToQuery + ?Sized>(&self, value: &T) -> Result<QueryValues> {
        let mut values = QueryValues::new();
        self.encode_into(value, &mut values)?;
        Ok(values)
    }

    /// Encodes `value` into `values`.
    ///
    /// On error, entries written before the failure stay in `values`.
    pub fn encode_into<T: ToQuery + ?Sized>(
        &self,
        value: &T,
        values: &mut QueryValues,
    ) -> Result<()> {
        let mut walker = Walker {
            config: &self.config,
            values,
        };
        walker.root(value.to_query_value())?;
        debug!(keys = walker.values.len(), "encoded query values");
        Ok(())
    }
}

/// Encodes `value` with the process-wide configuration.
///
/// ```
/// use quire_core::encode;
///
/// let values = encode("?a=1&b=2&a=3")?;
/// assert_eq!(values.get_all("a"), ["1", "3"]);
/// # Ok::<(), quire_core::Error>(())
/// ```
pub fn encode<T: ToQuery + ?Sized>(value: &T) -> Result<QueryValues> {
    Encoder::default().encode(value)
}

/// Encodes `value` and appends it to `url`'s query.
pub fn set_query<T: ToQuery + ?Sized>(url: &mut url::Url, value: &T) -> Result<()> {
    let values = encode(value)?;
    values.append_to(url);
    Ok(())
}

/// Parses `base` and appends the encoding of `value` to its query.
///
/// ```
/// use std::collections::BTreeMap;
///
/// let page = BTreeMap::from([("page", 3)]);
/// let url = quire_core::build_url("https://api.example.com/items?sort=asc", &page)?;
/// assert_eq!(url.as_str(), "https://api.example.com/items?sort=asc&page=3");
/// # Ok::<(), quire_core::Error>(())
/// ```
pub fn build_url<T: ToQuery + ?Sized>(base: &str, value: &T) -> Result<url::Url> {
    let mut url = url::Url::parse(base)?;
    set_query(&mut url, value)?;
    Ok(url)
}

struct Walker<'c, 'v> {
    config: &'c EncoderConfig,
    values: &'v mut QueryValues,
}

impl Walker<'_, '_> {
    fn root(&mut self, value: QueryValue<'_>) -> Result<()> {
        match value {
            QueryValue::Null(_) => Ok(()),
            QueryValue::Str(query) => {
                self.values.merge(QueryValues::parse(&query));
                Ok(())
            }
            QueryValue::Bytes(query) => {
                self.values.merge(QueryValues::parse_bytes(query));
                Ok(())
            }
            QueryValue::Map(entries) => {
                self.visit_map(&entries, "", 0, &RenderOptions::default(), SeqMode::Repeat)
            }
            QueryValue::Seq(items) => self.visit_seq(&items, "", 0),
            QueryValue::Struct(value) => self.visit_struct(value, "", 0),
            other => {
                let kind = other.kind();
                debug!(%kind, "unsupported root value");
                Err(Error::unsupported(kind))
            }
        }
    }

    fn scoped(&self, scope: &str, name: &str) -> String {
        self.config.scope_join.join(scope, name)
    }

    fn enter(&self, key: &str, depth: usize) -> Result<()> {
        if depth > self.config.max_depth {
            warn!(key, max_depth = self.config.max_depth, "query nesting too deep");
            return Err(Error::depth_limit(key, self.config.max_depth));
        }
        trace!(key, depth, "entering scope");
        Ok(())
    }

    fn custom(&mut self, encoder: &dyn EncodeValues, key: &str) -> Result<()> {
        trace!(key, "running custom encoder");
        encoder
            .encode_values(key, self.values)
            .map_err(|source| Error::custom_encoder(key, source))
    }

    fn visit_struct(&mut self, value: &dyn QueryStruct, scope: &str, depth: usize) -> Result<()> {
        self.enter(scope, depth)?;

        let fields = value.query_fields();
        let mut embedded = Vec::new();

        for field in &fields {
            let spec = FieldSpec::new(field.meta);
            if spec.is_skipped() {
                continue;
            }

            let resolved = field.value.to_query_value();
            let name = match spec.explicit_name() {
                Some(name) => name,
                None if field.meta.embedded => {
                    if let QueryValue::Struct(inner) = resolved {
                        embedded.push(inner);
                        continue;
                    }
                    field.meta.name
                }
                None => field.meta.name,
            };

            let key = self.scoped(scope, name);

            if spec.omit_empty() && field.value.is_empty_value() {
                continue;
            }

            self.visit_field(&spec, resolved, scope, &key, depth)?;
        }

        for inner in embedded {
            self.visit_struct(inner, scope, depth)?;
        }

        Ok(())
    }

    fn visit_field(
        &mut self,
        spec: &FieldSpec,
        value: QueryValue<'_>,
        scope: &str,
        key: &str,
        depth: usize,
    ) -> Result<()> {
        let opts = spec.render_options();
        let mode = spec.seq_mode();
        match value {
            QueryValue::Custom(encoder) => self.custom(encoder, key),
            QueryValue::Null(Some(encoder)) => self.custom(&*encoder, key),
            QueryValue::Seq(items) => self.visit_layout(&items, key, depth, &opts, mode),
            QueryValue::Map(entries) => {
                let next = if spec.inline() { scope } else { key };
                self.visit_map(&entries, next, depth + 1, &opts, mode)
            }
            QueryValue::Struct(inner) => {
                let next = if spec.inline() { scope } else { key };
                self.visit_struct(inner, next, depth + 1)
            }
            scalar => {
                self.values.add(key, render(&scalar, &opts));
                Ok(())
            }
        }
    }

    /// A sequence under `key`, laid out by `mode`: joined into one value, or
    /// one entry per element.
    fn visit_layout(
        &mut self,
        items: &[&dyn ToQuery],
        key: &str,
        depth: usize,
        opts: &RenderOptions<'_>,
        mode: SeqMode<'_>,
    ) -> Result<()> {
        if items.is_empty() {
            return Ok(());
        }

        if let SeqMode::Joined(separator) = mode {
            let joined = items
                .iter()
                .map(|item| render(&item.to_query_value(), opts))
                .collect::<Vec<_>>()
                .join(separator);
            self.values.add(key, joined);
            return Ok(());
        }

        for (index, item) in items.iter().enumerate() {
            let element_key = mode.element_key(key, index);
            self.visit_element(item.to_query_value(), &element_key, depth, opts, mode)?;
        }
        Ok(())
    }

    /// Sequence elements and map values: maps and structs open a scope at
    /// `key`, nested sequences fall back to pair mode, custom values run
    /// their hook, everything else is rendered.
    fn visit_element(
        &mut self,
        value: QueryValue<'_>,
        key: &str,
        depth: usize,
        opts: &RenderOptions<'_>,
        mode: SeqMode<'_>,
    ) -> Result<()> {
        match value {
            QueryValue::Custom(encoder) => self.custom(encoder, key),
            QueryValue::Null(Some(encoder)) => self.custom(&*encoder, key),
            QueryValue::Map(entries) => self.visit_map(&entries, key, depth + 1, opts, mode),
            QueryValue::Struct(inner) => self.visit_struct(inner, key, depth + 1),
            QueryValue::Seq(items) => self.visit_seq(&items, key, depth + 1),
            scalar => {
                self.values.add(key, render(&scalar, opts));
                Ok(())
            }
        }
    }

    /// Entries carry the enclosing field's render options and sequence
    /// layout. Empty values are skipped.
    fn visit_map(
        &mut self,
        entries: &[(&dyn ToQuery, &dyn ToQuery)],
        scope: &str,
        depth: usize,
        opts: &RenderOptions<'_>,
        mode: SeqMode<'_>,
    ) -> Result<()> {
        self.enter(scope, depth)?;

        for (entry_key, entry_value) in entries {
            if entry_value.is_empty_value() {
                continue;
            }

            let name = render(&entry_key.to_query_value(), &RenderOptions::default());
            let key = self.scoped(scope, &name);

            match entry_value.to_query_value() {
                QueryValue::Seq(items) => self.visit_layout(&items, &key, depth, opts, mode)?,
                other => self.visit_element(other, &key, depth, opts, mode)?,
            }
        }
        Ok(())
    }

    /// A sequence met as a value rather than a field: containers are visited
    /// at the current scope, while scalars pair up as unscoped key/value
    /// entries, dropping a trailing unpaired one.
    ///
    /// Scalars ignore the scope: `{"a": [["k", "v"]]}` encodes to
    /// `k=v`, not `a[k]=v`.
    fn visit_seq(&mut self, items: &[&dyn ToQuery], scope: &str, depth: usize) -> Result<()> {
        self.enter(scope, depth)?;

        let opts = RenderOptions::default();
        let mut items = items.iter();
        while let Some(item) = items.next() {
            match item.to_query_value() {
                QueryValue::Map(entries) => {
                    self.visit_map(&entries, scope, depth, &opts, SeqMode::Repeat)?;
                }
                QueryValue::Struct(inner) => self.visit_struct(inner, scope, depth)?,
                key => {
                    let Some(value) = items.next() else {
                        break;
                    };
                    self.values.add(
                        render(&key, &opts),
                        render(&value.to_query_value(), &opts),
                    );
                }
            }
        }
        Ok(())
    }
}
