//! # Chapter 3: Extending
//!
//! ## Custom Encoders
//!
//! A type that knows how to write itself implements [`EncodeValues`] and
//! reports [`QueryValue::Custom`]:
//!
//! ```ignore
//! use quire::prelude::*;
//!
//! #[derive(Default)]
//! pub struct Range {
//!     pub from: u32,
//!     pub to: u32,
//! }
//!
//! impl EncodeValues for Range {
//!     fn encode_values(&self, key: &str, values: &mut QueryValues) -> Result<(), BoxError> {
//!         values.add(key, format!("{}..{}", self.from, self.to));
//!         Ok(())
//!     }
//! }
//!
//! impl ToQuery for Range {
//!     fn to_query_value(&self) -> QueryValue<'_> {
//!         QueryValue::Custom(self)
//!     }
//!
//!     // Also run for `Option<Range>` fields holding `None`
//!     fn absent_encoder() -> Option<Box<dyn EncodeValues>> {
//!         Some(Box::new(Range::default()))
//!     }
//! }
//! ```
//!
//! An error from `encode_values` stops the encode and comes back as
//! [`Error::CustomEncoder`], with the original error as its source.
//!
//! ## Configuration
//!
//! ```ignore
//! let encoder = Encoder::new(
//!     EncoderConfig::builder()
//!         .scope_join(ScopeJoin::Dots)   // user.name instead of user[name]
//!         .max_depth(8)
//!         .build(),
//! );
//! let values = encoder.encode(&params)?;
//! ```
//!
//! The free functions use a process-wide default, set once at startup with
//! [`set_global_config`](crate::set_global_config).
//!
//! ## Errors
//!
//! ```ignore
//! match quire::encode(&42) {
//!     Err(Error::UnsupportedKind { kind }) => println!("cannot encode a {kind}"),
//!     Err(Error::DepthLimitExceeded { key, .. }) => println!("too deep at {key}"),
//!     Err(err) => println!("{err}"),
//!     Ok(values) => println!("{values}"),
//! }
//! ```
//!
//! [`Encoder::encode_into`](crate::Encoder::encode_into) keeps whatever was
//! written before a failure.
//!
//! ## Content Types
//!
//! The codec registry maps a MIME subtype to a codec name for the layer that
//! marshals bodies:
//!
//! ```ignore
//! quire::register_codec_name("application/msgpack", "msgpack");
//! assert_eq!(quire::codec_name_for("application/vnd.api+json").as_deref(), Some("json"));
//! ```
//!
//! [`EncodeValues`]: crate::EncodeValues
//! [`QueryValue::Custom`]: crate::QueryValue::Custom
//! [`Error::CustomEncoder`]: crate::Error::CustomEncoder
