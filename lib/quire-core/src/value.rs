//! Value classification.
//!
//! [`ToQuery`] turns a Rust value into a borrowed [`QueryValue`] view the
//! encoder dispatches on. Wrapper types resolve to their contents, so the
//! encoder never needs to know about `Option`, `Box` or references.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};

use crate::error::BoxError;
use crate::field::QueryStruct;
use crate::render::is_zero_time;
use crate::values::QueryValues;

/// A value that writes its own query entries.
///
/// When a value resolves to [`QueryValue::Custom`], the encoder hands it the
/// key computed for the field and skips generic rendering.
///
/// # Example
///
/// ```
/// use quire_core::{BoxError, EncodeValues, QueryValue, QueryValues, ToQuery};
///
/// struct Range(u32, u32);
///
/// impl EncodeValues for Range {
///     fn encode_values(&self, key: &str, values: &mut QueryValues) -> Result<(), BoxError> {
///         values.add(format!("{key}_from"), self.0.to_string());
///         values.add(format!("{key}_to"), self.1.to_string());
///         Ok(())
///     }
/// }
///
/// impl ToQuery for Range {
///     fn to_query_value(&self) -> QueryValue<'_> {
///         QueryValue::Custom(self)
///     }
/// }
/// ```
pub trait EncodeValues {
    /// Writes this value's entries under `key`.
    fn encode_values(&self, key: &str, values: &mut QueryValues) -> Result<(), BoxError>;
}

/// Converts a value into its query view.
///
/// # Byte buffers
///
/// Only [`bytes::Bytes`] is a byte buffer. As a root value it is parsed as a
/// query string, like `str`. `Vec<u8>`, `[u8; N]` and `&[u8]` are sequences
/// of numbers: at the root they pair up as `97=61` rather than `a=1`. Wrap
/// raw query bytes in `Bytes` (or decode them to text) before encoding.
pub trait ToQuery {
    /// Classifies this value.
    fn to_query_value(&self) -> QueryValue<'_>;

    /// Returns `true` if `omitempty` drops this value.
    fn is_empty_value(&self) -> bool {
        self.to_query_value().is_empty()
    }

    /// Encoder used when an `Option<Self>` holding `None` is met.
    ///
    /// Custom-encoding types return a zero instance so their hook still runs
    /// for absent values.
    fn absent_encoder() -> Option<Box<dyn EncodeValues>>
    where
        Self: Sized,
    {
        None
    }
}

/// Kind of a [`QueryValue`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Absent value.
    Null,
    /// Boolean.
    Bool,
    /// Signed integer.
    Int,
    /// Unsigned integer.
    Uint,
    /// Floating point number.
    Float,
    /// Single character.
    Char,
    /// Text.
    Str,
    /// Raw bytes.
    Bytes,
    /// Point in time.
    Time,
    /// Slice, array or list.
    Seq,
    /// Key/value map.
    Map,
    /// Struct with named fields.
    Struct,
    /// Self-encoding value.
    Custom,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool => write!(f, "bool"),
            Self::Int => write!(f, "int"),
            Self::Uint => write!(f, "uint"),
            Self::Float => write!(f, "float"),
            Self::Char => write!(f, "char"),
            Self::Str => write!(f, "string"),
            Self::Bytes => write!(f, "bytes"),
            Self::Time => write!(f, "time"),
            Self::Seq => write!(f, "seq"),
            Self::Map => write!(f, "map"),
            Self::Struct => write!(f, "struct"),
            Self::Custom => write!(f, "custom"),
        }
    }
}

/// Borrowed, classified view of a value.
pub enum QueryValue<'a> {
    /// Absent value, with the encoder to run in its place if its type has one.
    Null(Option<Box<dyn EncodeValues>>),
    /// `true` / `false`.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    Uint(u64),
    /// Single precision float.
    F32(f32),
    /// Double precision float.
    F64(f64),
    /// Character.
    Char(char),
    /// Text.
    Str(Cow<'a, str>),
    /// Raw bytes, rendered as text.
    Bytes(&'a [u8]),
    /// Point in time.
    Time(DateTime<FixedOffset>),
    /// Elements in order.
    Seq(Vec<&'a dyn ToQuery>),
    /// Entries in the map's iteration order.
    Map(Vec<(&'a dyn ToQuery, &'a dyn ToQuery)>),
    /// Struct exposing its fields.
    Struct(&'a dyn QueryStruct),
    /// Self-encoding value.
    Custom(&'a dyn EncodeValues),
}

impl QueryValue<'_> {
    /// Kind of this value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Null(_) => Kind::Null,
            Self::Bool(_) => Kind::Bool,
            Self::Int(_) => Kind::Int,
            Self::Uint(_) => Kind::Uint,
            Self::F32(_) | Self::F64(_) => Kind::Float,
            Self::Char(_) => Kind::Char,
            Self::Str(_) => Kind::Str,
            Self::Bytes(_) => Kind::Bytes,
            Self::Time(_) => Kind::Time,
            Self::Seq(_) => Kind::Seq,
            Self::Map(_) => Kind::Map,
            Self::Struct(_) => Kind::Struct,
            Self::Custom(_) => Kind::Custom,
        }
    }

    /// Zero check used by `omitempty`.
    ///
    /// Absent values, `false`, numeric zero, `'\0'`, empty text, bytes and
    /// containers, and the zero time (`DateTime::<Utc>::MIN_UTC`) are empty.
    /// Structs and custom values never are.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null(_) => true,
            Self::Bool(b) => !b,
            Self::Int(n) => *n == 0,
            Self::Uint(n) => *n == 0,
            Self::F32(n) => *n == 0.0,
            Self::F64(n) => *n == 0.0,
            Self::Char(c) => *c == '\0',
            Self::Str(s) => s.is_empty(),
            Self::Bytes(b) => b.is_empty(),
            Self::Time(t) => is_zero_time(t),
            Self::Seq(items) => items.is_empty(),
            Self::Map(entries) => entries.is_empty(),
            Self::Struct(_) | Self::Custom(_) => false,
        }
    }

    /// Returns `true` for maps and structs.
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(self, Self::Map(_) | Self::Struct(_))
    }
}

impl fmt::Debug for QueryValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null(hook) => f.debug_tuple("Null").field(&hook.is_some()).finish(),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Self::Uint(n) => f.debug_tuple("Uint").field(n).finish(),
            Self::F32(n) => f.debug_tuple("F32").field(n).finish(),
            Self::F64(n) => f.debug_tuple("F64").field(n).finish(),
            Self::Char(c) => f.debug_tuple("Char").field(c).finish(),
            Self::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Self::Bytes(b) => f.debug_tuple("Bytes").field(b).finish(),
            Self::Time(t) => f.debug_tuple("Time").field(t).finish(),
            Self::Seq(items) => f
                .debug_list()
                .entries(items.iter().map(|item| item.to_query_value()))
                .finish(),
            Self::Map(entries) => f
                .debug_map()
                .entries(
                    entries
                        .iter()
                        .map(|(key, value)| (key.to_query_value(), value.to_query_value())),
                )
                .finish(),
            Self::Struct(value) => {
                let fields = value.query_fields();
                f.debug_map()
                    .entries(
                        fields
                            .iter()
                            .map(|field| (field.meta.name, field.value.to_query_value())),
                    )
                    .finish()
            }
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

// ============================================================================
// Scalars
// ============================================================================

impl ToQuery for bool {
    fn to_query_value(&self) -> QueryValue<'_> {
        QueryValue::Bool(*self)
    }
}

macro_rules! impl_to_query_int {
    ($variant:ident($repr:ty): $($ty:ty),*) => {$(
        impl ToQuery for $ty {
            fn to_query_value(&self) -> QueryValue<'_> {
                QueryValue::$variant(<$repr>::from(*self))
            }
        }
    )*};
}

impl_to_query_int!(Int(i64): i8, i16, i32, i64);
impl_to_query_int!(Uint(u64): u8, u16, u32, u64);

macro_rules! impl_to_query_wide_int {
    ($variant:ident($repr:ty): $($ty:ty),*) => {$(
        impl ToQuery for $ty {
            fn to_query_value(&self) -> QueryValue<'_> {
                <$repr>::try_from(*self).map_or_else(
                    |_| QueryValue::Str(Cow::Owned(self.to_string())),
                    QueryValue::$variant,
                )
            }
        }
    )*};
}

impl_to_query_wide_int!(Int(i64): isize, i128);
impl_to_query_wide_int!(Uint(u64): usize, u128);

impl ToQuery for f32 {
    fn to_query_value(&self) -> QueryValue<'_> {
        QueryValue::F32(*self)
    }
}

impl ToQuery for f64 {
    fn to_query_value(&self) -> QueryValue<'_> {
        QueryValue::F64(*self)
    }
}

impl ToQuery for char {
    fn to_query_value(&self) -> QueryValue<'_> {
        QueryValue::Char(*self)
    }
}

impl ToQuery for str {
    fn to_query_value(&self) -> QueryValue<'_> {
        QueryValue::Str(Cow::Borrowed(self))
    }
}

impl ToQuery for String {
    fn to_query_value(&self) -> QueryValue<'_> {
        QueryValue::Str(Cow::Borrowed(self.as_str()))
    }
}

impl ToQuery for Cow<'_, str> {
    fn to_query_value(&self) -> QueryValue<'_> {
        QueryValue::Str(Cow::Borrowed(&**self))
    }
}

impl ToQuery for bytes::Bytes {
    fn to_query_value(&self) -> QueryValue<'_> {
        QueryValue::Bytes(self.as_ref())
    }
}

/// Only `DateTime::<Utc>::MIN_UTC` is the zero time, so `omitempty` keeps
/// the Unix epoch. Use `Option<DateTime<_>>` for a time that may be unset.
impl<Tz: TimeZone> ToQuery for DateTime<Tz> {
    fn to_query_value(&self) -> QueryValue<'_> {
        QueryValue::Time(self.fixed_offset())
    }
}

/// Naive date-times are taken as UTC.
impl ToQuery for NaiveDateTime {
    fn to_query_value(&self) -> QueryValue<'_> {
        QueryValue::Time(self.and_utc().fixed_offset())
    }
}

// ============================================================================
// Wrappers
// ============================================================================

/// `None` is the absent pointer: empty, and rendered as the zero value
/// unless `T` supplies an [`absent_encoder`](ToQuery::absent_encoder).
/// `Some` is never empty, whatever it holds.
impl<T: ToQuery> ToQuery for Option<T> {
    fn to_query_value(&self) -> QueryValue<'_> {
        match self {
            Some(value) => value.to_query_value(),
            None => QueryValue::Null(T::absent_encoder()),
        }
    }

    fn is_empty_value(&self) -> bool {
        self.is_none()
    }

    fn absent_encoder() -> Option<Box<dyn EncodeValues>> {
        T::absent_encoder()
    }
}

/// A box always points at something, so it is never empty.
impl<T: ToQuery + ?Sized> ToQuery for Box<T> {
    fn to_query_value(&self) -> QueryValue<'_> {
        (**self).to_query_value()
    }

    fn is_empty_value(&self) -> bool {
        false
    }
}

impl<T: ToQuery + ?Sized> ToQuery for Arc<T> {
    fn to_query_value(&self) -> QueryValue<'_> {
        (**self).to_query_value()
    }

    fn is_empty_value(&self) -> bool {
        false
    }
}

impl<T: ToQuery + ?Sized> ToQuery for &T {
    fn to_query_value(&self) -> QueryValue<'_> {
        (**self).to_query_value()
    }

    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

// ============================================================================
// Containers
// ============================================================================

fn seq<T: ToQuery>(items: &[T]) -> QueryValue<'_> {
    QueryValue::Seq(items.iter().map(|item| item as &dyn ToQuery).collect())
}

/// Elements in order; `[u8]` is a sequence of numbers, not a byte buffer.
impl<T: ToQuery> ToQuery for [T] {
    fn to_query_value(&self) -> QueryValue<'_> {
        seq(self)
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T: ToQuery, const N: usize> ToQuery for [T; N] {
    fn to_query_value(&self) -> QueryValue<'_> {
        seq(self)
    }

    fn is_empty_value(&self) -> bool {
        N == 0
    }
}

impl<T: ToQuery> ToQuery for Vec<T> {
    fn to_query_value(&self) -> QueryValue<'_> {
        seq(self)
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K: ToQuery, V: ToQuery, S> ToQuery for HashMap<K, V, S> {
    fn to_query_value(&self) -> QueryValue<'_> {
        QueryValue::Map(
            self.iter()
                .map(|(key, value)| (key as &dyn ToQuery, value as &dyn ToQuery))
                .collect(),
        )
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K: ToQuery, V: ToQuery> ToQuery for BTreeMap<K, V> {
    fn to_query_value(&self) -> QueryValue<'_> {
        QueryValue::Map(
            self.iter()
                .map(|(key, value)| (key as &dyn ToQuery, value as &dyn ToQuery))
                .collect(),
        )
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

/// Encoding parsed values again reproduces them.
impl ToQuery for QueryValues {
    fn to_query_value(&self) -> QueryValue<'_> {
        self.as_map().to_query_value()
    }

    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

/// Objects are maps, arrays are sequences, numbers keep their integer-ness.
impl ToQuery for serde_json::Value {
    fn to_query_value(&self) -> QueryValue<'_> {
        use serde_json::Value;

        match self {
            Value::Null => QueryValue::Null(None),
            Value::Bool(b) => QueryValue::Bool(*b),
            Value::Number(n) => {
                if let Some(u) = n.as_u64() {
                    QueryValue::Uint(u)
                } else if let Some(i) = n.as_i64() {
                    QueryValue::Int(i)
                } else {
                    QueryValue::F64(n.as_f64().unwrap_or_default())
                }
            }
            Value::String(s) => QueryValue::Str(Cow::Borrowed(s.as_str())),
            Value::Array(items) => seq(items),
            Value::Object(map) => QueryValue::Map(
                map.iter()
                    .map(|(key, value)| (key as &dyn ToQuery, value as &dyn ToQuery))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};
    use chrono::{TimeZone, Utc};

    use super::*;

    struct Hook;

    impl EncodeValues for Hook {
        fn encode_values(&self, key: &str, values: &mut QueryValues) -> Result<(), BoxError> {
            values.add(key, "hooked");
            Ok(())
        }
    }

    impl ToQuery for Hook {
        fn to_query_value(&self) -> QueryValue<'_> {
            QueryValue::Custom(self)
        }

        fn absent_encoder() -> Option<Box<dyn EncodeValues>> {
            Some(Box::new(Self))
        }
    }

    #[test]
    fn scalar_kinds() {
        check!(true.to_query_value().kind() == Kind::Bool);
        check!((-3_i8).to_query_value().kind() == Kind::Int);
        check!(3_u16.to_query_value().kind() == Kind::Uint);
        check!(1.5_f32.to_query_value().kind() == Kind::Float);
        check!('x'.to_query_value().kind() == Kind::Char);
        check!("x".to_query_value().kind() == Kind::Str);
        check!(bytes::Bytes::from_static(b"a=1").to_query_value().kind() == Kind::Bytes);
        check!(Utc::now().to_query_value().kind() == Kind::Time);
    }

    #[test]
    fn wide_integers_fall_back_to_text() {
        let_assert!(QueryValue::Uint(7) = 7_usize.to_query_value());
        let_assert!(QueryValue::Str(text) = u128::MAX.to_query_value());
        check!(text == u128::MAX.to_string());
        let_assert!(QueryValue::Int(-2) = (-2_isize).to_query_value());
    }

    #[test]
    fn empty_values() {
        check!(false.is_empty_value());
        check!(0_i32.is_empty_value());
        check!(0_u64.is_empty_value());
        check!(0.0_f64.is_empty_value());
        check!('\0'.is_empty_value());
        check!(String::new().is_empty_value());
        check!(Vec::<u8>::new().is_empty_value());
        check!(HashMap::<String, String>::new().is_empty_value());
        check!(Option::<u8>::None.is_empty_value());
        check!(DateTime::<Utc>::MIN_UTC.is_empty_value());

        check!(!true.is_empty_value());
        check!(!(-1_i32).is_empty_value());
        check!(!"a".is_empty_value());
        check!(!vec![0_u8].is_empty_value());
        check!(!Utc.timestamp_opt(1, 0).unwrap().is_empty_value());
        check!(!DateTime::<Utc>::UNIX_EPOCH.is_empty_value());
    }

    #[test]
    fn present_pointers_are_never_empty() {
        check!(!Some(0_u8).is_empty_value());
        check!(!Some(String::new()).is_empty_value());
        check!(!Box::new(false).is_empty_value());
        check!(!Arc::new(0_i64).is_empty_value());
    }

    #[test]
    fn references_delegate() {
        let empty = String::new();
        let reference = &empty;
        check!(reference.is_empty_value());
        check!(reference.to_query_value().kind() == Kind::Str);
    }

    #[test]
    fn option_resolves_to_contents() {
        let_assert!(QueryValue::Int(5) = Some(5_i32).to_query_value());
        let_assert!(QueryValue::Null(None) = Option::<i32>::None.to_query_value());
    }

    #[test]
    fn absent_custom_value_keeps_its_hook() {
        let_assert!(QueryValue::Null(Some(hook)) = Option::<Hook>::None.to_query_value());
        let mut values = QueryValues::new();
        hook.encode_values("k", &mut values).unwrap();
        check!(values.get("k") == Some("hooked"));

        let_assert!(QueryValue::Null(Some(_)) = Option::<Option<Hook>>::None.to_query_value());
        let_assert!(QueryValue::Custom(_) = Some(Hook).to_query_value());
    }

    #[test]
    fn sequences_keep_order() {
        let items = vec!["a", "b", "c"];
        let_assert!(QueryValue::Seq(seq) = items.to_query_value());
        let kinds: Vec<_> = seq.iter().map(|item| item.to_query_value().kind()).collect();
        check!(kinds == [Kind::Str, Kind::Str, Kind::Str]);

        let_assert!(QueryValue::Seq(seq) = [1_u8, 2].to_query_value());
        check!(seq.len() == 2);
        check!([0_u8; 0].is_empty_value());
    }

    #[test]
    fn maps_expose_entries() {
        let map = BTreeMap::from([("a", 1), ("b", 2)]);
        let_assert!(QueryValue::Map(entries) = map.to_query_value());
        check!(entries.len() == 2);
        check!(map.to_query_value().is_container());
    }

    #[test]
    fn json_values() {
        let value = serde_json::json!({
            "n": null,
            "b": true,
            "u": 3,
            "i": -3,
            "f": 1.5,
            "s": "x",
            "a": [1, 2],
        });
        let_assert!(QueryValue::Map(entries) = value.to_query_value());
        let kinds: Vec<_> = entries
            .iter()
            .map(|(_, value)| value.to_query_value().kind())
            .collect();
        // serde_json keeps object keys sorted
        check!(
            kinds
                == [
                    Kind::Seq,
                    Kind::Bool,
                    Kind::Float,
                    Kind::Int,
                    Kind::Null,
                    Kind::Str,
                    Kind::Uint
                ]
        );
    }

    #[test]
    fn query_values_are_a_map_of_lists() {
        let values: QueryValues = [("a", "1"), ("a", "2")].into_iter().collect();
        let_assert!(QueryValue::Map(entries) = values.to_query_value());
        let_assert!([(_, list)] = entries.as_slice());
        check!(list.to_query_value().kind() == Kind::Seq);
    }

    #[test]
    fn kind_display() {
        check!(Kind::Str.to_string() == "string");
        check!(Kind::Seq.to_string() == "seq");
        check!(Kind::Custom.to_string() == "custom");
    }

    #[test]
    fn debug_walks_containers() {
        let map = BTreeMap::from([("a", vec![1_u8])]);
        check!(format!("{:?}", map.to_query_value()) == r#"{Str("a"): [Uint(1)]}"#);
        check!(format!("{:?}", Hook.to_query_value()) == "Custom(..)");
    }
}
