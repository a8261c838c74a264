//! Attribute parsing for `#[derive(Query)]`.

use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Attribute, Ident, LitStr, Token};

/// Case conversion rules for `rename_all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::enum_variant_names)]
pub(crate) enum RenameRule {
    /// `lowercase`
    LowerCase,
    /// `UPPERCASE`
    UpperCase,
    /// `camelCase`
    CamelCase,
    /// `PascalCase`
    PascalCase,
    /// `snake_case`
    SnakeCase,
    /// `SCREAMING_SNAKE_CASE`
    ScreamingSnakeCase,
    /// `kebab-case`
    KebabCase,
    /// `SCREAMING-KEBAB-CASE`
    ScreamingKebabCase,
}

impl RenameRule {
    /// Parse a rename rule from a string.
    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s {
            "lowercase" => Some(Self::LowerCase),
            "UPPERCASE" => Some(Self::UpperCase),
            "camelCase" => Some(Self::CamelCase),
            "PascalCase" => Some(Self::PascalCase),
            "snake_case" => Some(Self::SnakeCase),
            "SCREAMING_SNAKE_CASE" => Some(Self::ScreamingSnakeCase),
            "kebab-case" => Some(Self::KebabCase),
            "SCREAMING-KEBAB-CASE" => Some(Self::ScreamingKebabCase),
            _ => None,
        }
    }

    /// Apply the rename rule to a field name.
    pub(crate) fn apply(self, name: &str) -> String {
        match self {
            Self::LowerCase => name.to_lowercase(),
            Self::UpperCase => name.to_uppercase(),
            Self::CamelCase => to_camel_case(name),
            Self::PascalCase => to_pascal_case(name),
            Self::SnakeCase => to_snake_case(name),
            Self::ScreamingSnakeCase => to_snake_case(name).to_uppercase(),
            Self::KebabCase => to_snake_case(name).replace('_', "-"),
            Self::ScreamingKebabCase => to_snake_case(name).to_uppercase().replace('_', "-"),
        }
    }
}

/// Convert a string to `snake_case`.
fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 && !result.ends_with('_') {
                result.push('_');
            }
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Convert a string to `camelCase`.
fn to_camel_case(s: &str) -> String {
    let mut result = String::new();
    let mut capitalize_next = false;
    for c in s.chars() {
        if c == '_' {
            capitalize_next = !result.is_empty();
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }
    result
}

/// Convert a string to `PascalCase`.
fn to_pascal_case(s: &str) -> String {
    let camel = to_camel_case(s);
    let mut chars = camel.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Struct-level options parsed from `#[query(...)]` attributes.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct StructOptions {
    /// Rename all fields using the given case convention.
    pub(crate) rename_all: Option<RenameRule>,
}

impl StructOptions {
    pub(crate) fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut options = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("query") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename_all") {
                    let value: LitStr = meta.value()?.parse()?;
                    let rule = RenameRule::parse(&value.value()).ok_or_else(|| {
                        syn::Error::new_spanned(
                            &value,
                            format!(
                                "unknown rename_all value: \"{}\". Expected one of: \
                                 lowercase, UPPERCASE, camelCase, PascalCase, \
                                 snake_case, SCREAMING_SNAKE_CASE, kebab-case, SCREAMING-KEBAB-CASE",
                                value.value()
                            ),
                        )
                    })?;
                    options.rename_all = Some(rule);
                    Ok(())
                } else {
                    Err(meta.error("unsupported query struct attribute, expected `rename_all`"))
                }
            })?;
        }

        Ok(options)
    }
}

/// One argument of a field-level `#[query(...)]`.
enum FieldArg {
    /// `"name,flag,key:value"`
    Tag(LitStr),
    /// `layout = "%Y-%m-%d"`
    Layout(LitStr),
    /// `del = "|"`
    Del(LitStr),
    /// `flatten`
    Flatten,
    /// `skip`
    Skip,
}

impl Parse for FieldArg {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(LitStr) {
            return Ok(Self::Tag(input.parse()?));
        }

        let ident: Ident = input.parse()?;
        if ident == "flatten" {
            Ok(Self::Flatten)
        } else if ident == "skip" {
            Ok(Self::Skip)
        } else if ident == "layout" {
            input.parse::<Token![=]>()?;
            Ok(Self::Layout(input.parse()?))
        } else if ident == "del" {
            input.parse::<Token![=]>()?;
            Ok(Self::Del(input.parse()?))
        } else {
            Err(syn::Error::new_spanned(
                &ident,
                format!(
                    "unknown query field attribute `{ident}`. Expected a tag string, \
                     `layout = \"..\"`, `del = \"..\"`, `flatten` or `skip`"
                ),
            ))
        }
    }
}

/// Field options parsed from `#[query(...)]` attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct FieldOptions {
    /// Raw tag string.
    pub(crate) tag: Option<String>,
    /// Time layout annotation.
    pub(crate) layout: Option<String>,
    /// Sequence delimiter annotation.
    pub(crate) del: Option<String>,
    /// Treat the field as embedded.
    pub(crate) flatten: bool,
    /// Leave the field out.
    pub(crate) skip: bool,
}

impl FieldOptions {
    pub(crate) fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut options = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("query") {
                continue;
            }

            let args = attr.parse_args_with(Punctuated::<FieldArg, Token![,]>::parse_terminated)?;
            for arg in args {
                match arg {
                    FieldArg::Tag(lit) => set_once(&mut options.tag, &lit, "tag")?,
                    FieldArg::Layout(lit) => set_once(&mut options.layout, &lit, "layout")?,
                    FieldArg::Del(lit) => set_once(&mut options.del, &lit, "del")?,
                    FieldArg::Flatten => options.flatten = true,
                    FieldArg::Skip => options.skip = true,
                }
            }
        }

        Ok(options)
    }

    /// `skip` or the `-` tag.
    pub(crate) fn is_skipped(&self) -> bool {
        self.skip || self.tag.as_deref() == Some("-")
    }
}

fn set_once(slot: &mut Option<String>, lit: &LitStr, what: &str) -> syn::Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new_spanned(lit, format!("duplicate query {what}")));
    }
    *slot = Some(lit.value());
    Ok(())
}
