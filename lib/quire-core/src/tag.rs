//! Field tag parsing.
//!
//! A tag is a comma-separated list: the first token is the query name (empty
//! means "use the declared field name"), the rest are flags, optionally
//! written `key:value`. Only the first colon separates key from value.
//!
//! ```
//! use quire_core::FieldTag;
//!
//! let tag = FieldTag::parse("created,omitempty,layout:%H:%M");
//! assert_eq!(tag.name(), "created");
//! assert!(tag.options().omit_empty());
//! assert_eq!(tag.options().get("layout"), Some("%H:%M"));
//! ```

/// Tag value that removes a field from the output.
pub const SKIP_TAG: &str = "-";

/// Option names understood by the encoder.
pub mod flag {
    /// Skip the field when its value is empty.
    pub const OMIT_EMPTY: &str = "omitempty";
    /// Merge a nested container into the parent scope.
    pub const INLINE: &str = "inline";
    /// Join sequence elements with `,`.
    pub const COMMA: &str = "comma";
    /// Join sequence elements with a space.
    pub const SPACE: &str = "space";
    /// Join sequence elements with `;`.
    pub const SEMICOLON: &str = "semicolon";
    /// Repeat sequence elements under `name[]`.
    pub const BRACKETS: &str = "brackets";
    /// Repeat sequence elements under `name0`, `name1`, ...
    pub const NUMBERED: &str = "numbered";
    /// Repeat sequence elements under `name[0]`, `name[1]`, ...
    pub const INDEXED: &str = "indexed";
    /// Short spelling of [`INDEXED`].
    pub const IDX: &str = "idx";
    /// Render booleans as `1` / `0`.
    pub const INT: &str = "int";
    /// Render times as Unix seconds.
    pub const UNIX: &str = "unix";
    /// Render times as Unix milliseconds.
    pub const UNIX_MILLI: &str = "unixmilli";
    /// Render times as Unix nanoseconds.
    pub const UNIX_NANO: &str = "unixnano";
    /// Keyed fallback for the time layout annotation.
    pub const LAYOUT: &str = "layout";
    /// Keyed fallback for the delimiter annotation.
    pub const DELIMITER: &str = "del";
}

/// Mutually exclusive sequence join styles selectable by flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinStyle {
    /// `a,b`
    Comma,
    /// `a b`
    Space,
    /// `a;b`
    Semicolon,
    /// `name[]=a&name[]=b`
    Brackets,
}

impl JoinStyle {
    fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            flag::COMMA => Some(Self::Comma),
            flag::SPACE => Some(Self::Space),
            flag::SEMICOLON => Some(Self::Semicolon),
            flag::BRACKETS => Some(Self::Brackets),
            _ => None,
        }
    }

    /// Separator for the joining styles, `None` for [`JoinStyle::Brackets`].
    #[must_use]
    pub const fn separator(self) -> Option<&'static str> {
        match self {
            Self::Comma => Some(","),
            Self::Space => Some(" "),
            Self::Semicolon => Some(";"),
            Self::Brackets => None,
        }
    }
}

/// Time rendering selected by flags or layout, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFormat<'a> {
    /// Unix seconds.
    Unix,
    /// Unix milliseconds.
    UnixMilli,
    /// Unix nanoseconds.
    UnixNano,
    /// chrono strftime layout.
    Layout(&'a str),
    /// RFC 3339 with second precision.
    #[default]
    Rfc3339,
}

/// Options following the name in a field tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagOptions<'a> {
    entries: Vec<(&'a str, &'a str)>,
    join: Option<JoinStyle>,
}

impl<'a> TagOptions<'a> {
    /// Returns `true` if the option is present, keyed or not.
    #[must_use]
    pub fn contains(&self, option: &str) -> bool {
        self.entries.iter().any(|(key, _)| *key == option)
    }

    /// Value of a `key:value` option; `Some("")` for a bare flag.
    #[must_use]
    pub fn get(&self, option: &str) -> Option<&'a str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == option)
            .map(|(_, value)| *value)
    }

    /// Iterates options in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.entries.iter().copied()
    }

    /// First declared of `comma`, `space`, `semicolon`, `brackets`.
    #[must_use]
    pub const fn join_style(&self) -> Option<JoinStyle> {
        self.join
    }

    /// `omitempty`
    #[must_use]
    pub fn omit_empty(&self) -> bool {
        self.contains(flag::OMIT_EMPTY)
    }

    /// `inline`
    #[must_use]
    pub fn inline(&self) -> bool {
        self.contains(flag::INLINE)
    }

    /// `numbered`
    #[must_use]
    pub fn numbered(&self) -> bool {
        self.contains(flag::NUMBERED)
    }

    /// `indexed` or `idx`
    #[must_use]
    pub fn indexed(&self) -> bool {
        self.contains(flag::INDEXED) || self.contains(flag::IDX)
    }

    /// `int`
    #[must_use]
    pub fn int(&self) -> bool {
        self.contains(flag::INT)
    }

    /// Time format, by priority unix > unixmilli > unixnano > layout > RFC 3339.
    #[must_use]
    pub fn time_format(&self, layout: Option<&'a str>) -> TimeFormat<'a> {
        if self.contains(flag::UNIX) {
            TimeFormat::Unix
        } else if self.contains(flag::UNIX_MILLI) || self.contains("unix-milli") {
            TimeFormat::UnixMilli
        } else if self.contains(flag::UNIX_NANO) || self.contains("unix-nano") {
            TimeFormat::UnixNano
        } else if let Some(layout) = layout.filter(|layout| !layout.is_empty()) {
            TimeFormat::Layout(layout)
        } else {
            TimeFormat::Rfc3339
        }
    }
}

/// A parsed field tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTag<'a> {
    name: &'a str,
    options: TagOptions<'a>,
    skip: bool,
}

impl<'a> FieldTag<'a> {
    /// Parses a raw tag.
    ///
    /// `"-"` marks the field as skipped, while `"-,"` names it `-`.
    #[must_use]
    pub fn parse(raw: &'a str) -> Self {
        if raw == SKIP_TAG {
            return Self {
                skip: true,
                ..Self::default()
            };
        }

        let mut tokens = raw.split(',');
        let name = tokens.next().unwrap_or_default();

        let mut options = TagOptions::default();
        for token in tokens.filter(|token| !token.is_empty()) {
            let (key, value) = token.split_once(':').unwrap_or((token, ""));
            if options.join.is_none() {
                options.join = JoinStyle::from_flag(key);
            }
            options.entries.push((key, value));
        }

        Self {
            name,
            options,
            skip: false,
        }
    }

    /// Explicit name, empty when the tag does not set one.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// Returns `true` if the tag sets an explicit name.
    #[must_use]
    pub const fn has_name(&self) -> bool {
        !self.name.is_empty()
    }

    /// Parsed options.
    #[must_use]
    pub const fn options(&self) -> &TagOptions<'a> {
        &self.options
    }

    /// Returns `true` for the `-` tag.
    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        self.skip
    }
}
