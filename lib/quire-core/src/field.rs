//! Struct field metadata.
//!
//! `#[derive(Query)]` implements [`QueryStruct`] by listing each field in
//! declaration order with a static [`FieldMeta`]. The encoder turns that
//! metadata into a [`FieldSpec`] once per visited field.

use crate::render::RenderOptions;
use crate::tag::{FieldTag, JoinStyle, TagOptions, flag};
use crate::value::ToQuery;

/// A struct whose fields can be walked by the encoder.
///
/// Usually derived:
///
/// ```ignore
/// use quire::Query;
///
/// #[derive(Query)]
/// pub struct Search {
///     #[query("q")]
///     pub text: String,
///     #[query(",omitempty")]
///     pub page: Option<u32>,
/// }
/// ```
pub trait QueryStruct {
    /// Fields in declaration order.
    fn query_fields(&self) -> Vec<QueryField<'_>>;
}

/// One field of a [`QueryStruct`].
#[derive(Clone, Copy)]
pub struct QueryField<'a> {
    /// Static description of the field.
    pub meta: &'static FieldMeta,
    /// The field's value.
    pub value: &'a dyn ToQuery,
}

impl<'a> QueryField<'a> {
    /// Pairs a field description with its value.
    #[must_use]
    pub const fn new(meta: &'static FieldMeta, value: &'a dyn ToQuery) -> Self {
        Self { meta, value }
    }
}

impl std::fmt::Debug for QueryField<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryField")
            .field("meta", self.meta)
            .field("value", &self.value.to_query_value())
            .finish()
    }
}

/// Static description of a struct field.
///
/// Hand-written [`QueryStruct`] impls declare these as constants:
///
/// ```
/// use quire_core::FieldMeta;
///
/// const CREATED: FieldMeta = FieldMeta::new("created")
///     .with_tag("c,omitempty")
///     .with_layout("%Y-%m-%d");
/// assert_eq!(CREATED.layout, Some("%Y-%m-%d"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMeta {
    /// Declared field name, after any struct-level renaming.
    pub name: &'static str,
    /// Raw tag: `name,flag,key:value`.
    pub tag: &'static str,
    /// Time layout annotation.
    pub layout: Option<&'static str>,
    /// Sequence delimiter annotation.
    pub delimiter: Option<&'static str>,
    /// Field is visible outside its module.
    pub exported: bool,
    /// Field is flattened into its parent.
    pub embedded: bool,
}

impl FieldMeta {
    /// An exported field with no tag.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            tag: "",
            layout: None,
            delimiter: None,
            exported: true,
            embedded: false,
        }
    }

    /// Set the raw tag.
    #[must_use]
    pub const fn with_tag(mut self, tag: &'static str) -> Self {
        self.tag = tag;
        self
    }

    /// Set the time layout.
    #[must_use]
    pub const fn with_layout(mut self, layout: &'static str) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Set the sequence delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: &'static str) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Mark the field private.
    #[must_use]
    pub const fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    /// Mark the field embedded.
    #[must_use]
    pub const fn embedded(mut self) -> Self {
        self.embedded = true;
        self
    }
}

/// How a sequence field is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeqMode<'a> {
    /// One value, elements joined by the separator.
    Joined(&'a str),
    /// One value per element under `name[]`.
    Brackets,
    /// One value per element under `name0`, `name1`, ...
    Numbered,
    /// One value per element under `name[0]`, `name[1]`, ...
    Indexed,
    /// One value per element under `name`.
    Repeat,
}

impl SeqMode<'_> {
    /// Key for the element at `index`.
    #[must_use]
    pub fn element_key(&self, key: &str, index: usize) -> String {
        match self {
            Self::Brackets => format!("{key}[]"),
            Self::Numbered => format!("{key}{index}"),
            Self::Indexed => format!("{key}[{index}]"),
            Self::Joined(_) | Self::Repeat => key.to_string(),
        }
    }
}

/// A field's metadata with its tag parsed.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    meta: &'static FieldMeta,
    tag: FieldTag<'static>,
}

impl FieldSpec {
    /// Parses the field's tag.
    #[must_use]
    pub fn new(meta: &'static FieldMeta) -> Self {
        Self {
            meta,
            tag: FieldTag::parse(meta.tag),
        }
    }

    /// The field description.
    #[must_use]
    pub const fn meta(&self) -> &'static FieldMeta {
        self.meta
    }

    /// Returns `true` if the field takes no part in encoding.
    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        self.tag.is_skipped() || !(self.meta.exported || self.meta.embedded)
    }

    /// Name given by the tag, if any.
    #[must_use]
    pub const fn explicit_name(&self) -> Option<&'static str> {
        if self.tag.has_name() {
            Some(self.tag.name())
        } else {
            None
        }
    }

    /// Tag name, else the declared name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        if self.tag.has_name() {
            self.tag.name()
        } else {
            self.meta.name
        }
    }

    /// Parsed tag options.
    #[must_use]
    pub const fn options(&self) -> &TagOptions<'static> {
        self.tag.options()
    }

    /// `omitempty`
    #[must_use]
    pub fn omit_empty(&self) -> bool {
        self.options().omit_empty()
    }

    /// `inline` without an explicit name.
    #[must_use]
    pub fn inline(&self) -> bool {
        self.options().inline() && !self.tag.has_name()
    }

    /// Layout annotation, else the `layout:` option.
    #[must_use]
    pub fn layout(&self) -> Option<&'static str> {
        non_empty(self.meta.layout).or_else(|| non_empty(self.options().get(flag::LAYOUT)))
    }

    /// Delimiter annotation, else the `del:` option.
    #[must_use]
    pub fn delimiter(&self) -> Option<&'static str> {
        non_empty(self.meta.delimiter).or_else(|| non_empty(self.options().get(flag::DELIMITER)))
    }

    /// Scalar rendering options.
    #[must_use]
    pub fn render_options(&self) -> RenderOptions<'static> {
        RenderOptions {
            int_bool: self.options().int(),
            time: self.options().time_format(self.layout()),
        }
    }

    /// Sequence mode: delimiter, then join flag, then brackets, then
    /// numbered, indexed or plain repetition.
    #[must_use]
    pub fn seq_mode(&self) -> SeqMode<'static> {
        if let Some(delimiter) = self.delimiter() {
            return SeqMode::Joined(delimiter);
        }

        match self.options().join_style() {
            Some(JoinStyle::Brackets) => SeqMode::Brackets,
            Some(style) => SeqMode::Joined(style.separator().unwrap_or(",")),
            None if self.options().numbered() => SeqMode::Numbered,
            None if self.options().indexed() => SeqMode::Indexed,
            None => SeqMode::Repeat,
        }
    }
}

fn non_empty(value: Option<&'static str>) -> Option<&'static str> {
    value.filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;
    use crate::tag::TimeFormat;

    const PLAIN: FieldMeta = FieldMeta::new("Plain");
    const NAMED: FieldMeta = FieldMeta::new("Named").with_tag("n,omitempty");
    const HIDDEN: FieldMeta = FieldMeta::new("hidden").private();
    const EMBEDDED: FieldMeta = FieldMeta::new("inner").private().embedded();
    const DASH: FieldMeta = FieldMeta::new("Dash").with_tag("-");
    const DASH_NAMED: FieldMeta = FieldMeta::new("Dash").with_tag("-,");

    #[test]
    fn names() {
        let spec = FieldSpec::new(&PLAIN);
        check!(spec.name() == "Plain");
        check!(spec.explicit_name().is_none());

        let spec = FieldSpec::new(&NAMED);
        check!(spec.name() == "n");
        check!(spec.explicit_name() == Some("n"));
        check!(spec.omit_empty());

        check!(FieldSpec::new(&DASH_NAMED).name() == "-");
    }

    #[test]
    fn skipping() {
        check!(!FieldSpec::new(&PLAIN).is_skipped());
        check!(FieldSpec::new(&HIDDEN).is_skipped());
        check!(!FieldSpec::new(&EMBEDDED).is_skipped());
        check!(FieldSpec::new(&DASH).is_skipped());
        check!(!FieldSpec::new(&DASH_NAMED).is_skipped());
    }

    #[test]
    fn inline_requires_no_explicit_name() {
        const INLINE: FieldMeta = FieldMeta::new("Pages").with_tag(",inline");
        const NAMED_INLINE: FieldMeta = FieldMeta::new("Pages").with_tag("pages,inline");

        check!(FieldSpec::new(&INLINE).inline());
        check!(!FieldSpec::new(&NAMED_INLINE).inline());
    }

    #[test]
    fn sibling_annotations_win_over_keyed_options() {
        const BOTH: FieldMeta = FieldMeta::new("V")
            .with_tag(",del:!,layout:%Y")
            .with_delimiter("|")
            .with_layout("%d");
        const KEYED: FieldMeta = FieldMeta::new("V").with_tag(",del:!,layout:%Y");
        const EMPTY: FieldMeta = FieldMeta::new("V").with_delimiter("").with_layout("");

        let spec = FieldSpec::new(&BOTH);
        check!(spec.delimiter() == Some("|"));
        check!(spec.layout() == Some("%d"));

        let spec = FieldSpec::new(&KEYED);
        check!(spec.delimiter() == Some("!"));
        check!(spec.layout() == Some("%Y"));

        let spec = FieldSpec::new(&EMPTY);
        check!(spec.delimiter().is_none());
        check!(spec.layout().is_none());
    }

    #[test]
    fn seq_mode_priority() {
        const DEL_AND_COMMA: FieldMeta = FieldMeta::new("V").with_tag(",comma").with_delimiter("!");
        const SPACE_AND_BRACKETS: FieldMeta = FieldMeta::new("V").with_tag(",space,brackets");
        const BRACKETS_NUMBERED: FieldMeta = FieldMeta::new("V").with_tag(",numbered,brackets");
        const NUMBERED: FieldMeta = FieldMeta::new("V").with_tag(",numbered");
        const INDEXED: FieldMeta = FieldMeta::new("V").with_tag(",idx");

        check!(FieldSpec::new(&DEL_AND_COMMA).seq_mode() == SeqMode::Joined("!"));
        check!(FieldSpec::new(&SPACE_AND_BRACKETS).seq_mode() == SeqMode::Joined(" "));
        check!(FieldSpec::new(&BRACKETS_NUMBERED).seq_mode() == SeqMode::Brackets);
        check!(FieldSpec::new(&NUMBERED).seq_mode() == SeqMode::Numbered);
        check!(FieldSpec::new(&INDEXED).seq_mode() == SeqMode::Indexed);
        check!(FieldSpec::new(&PLAIN).seq_mode() == SeqMode::Repeat);
    }

    #[test]
    fn element_keys() {
        check!(SeqMode::Brackets.element_key("v", 3) == "v[]");
        check!(SeqMode::Numbered.element_key("v", 3) == "v3");
        check!(SeqMode::Indexed.element_key("v", 3) == "v[3]");
        check!(SeqMode::Repeat.element_key("v", 3) == "v");
    }

    #[test]
    fn render_options_from_tag() {
        const TIME: FieldMeta = FieldMeta::new("T").with_tag(",int").with_layout("%Y");
        const UNIX: FieldMeta = FieldMeta::new("T").with_tag(",unix").with_layout("%Y");

        let opts = FieldSpec::new(&TIME).render_options();
        check!(opts.int_bool);
        check!(opts.time == TimeFormat::Layout("%Y"));

        let opts = FieldSpec::new(&UNIX).render_options();
        check!(!opts.int_bool);
        check!(opts.time == TimeFormat::Unix);
    }
}
