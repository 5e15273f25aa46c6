//!
//! The building blocks for describing what goes into a form body.
//!
//! Fields are built using [`FormFields`], or one at a time using [`FormField`],
//! and then given to a [`FormEncoder`](crate::FormEncoder).
//!
//! # Simple example
//!
//! ```rust
//! # fn test() -> Result<(), Box<dyn ::std::error::Error>> {
//! #
//! use ::form_encoder::EncodingMode;
//! use ::form_encoder::FormEncoder;
//! use ::form_encoder::fields::FormFields;
//!
//! let fields = FormFields::new()
//!     .add_text("key1", "1")
//!     .add_text("key2", "1");
//!
//! let body = FormEncoder::new().encode(&fields, EncodingMode::UrlEncoded)?;
//! assert_eq!(body.bytes(), "key1=1&key2=1".as_bytes());
//! #
//! # Ok(()) }
//! ```
//!
//! # Uploading files
//!
//! ```rust
//! # fn test() -> Result<(), Box<dyn ::std::error::Error>> {
//! #
//! use ::form_encoder::EncodingMode;
//! use ::form_encoder::FormEncoder;
//! use ::form_encoder::fields::FileRef;
//! use ::form_encoder::fields::FormFields;
//!
//! let readme = FileRef::new("README.md")
//!     .mime_type(mime::TEXT_PLAIN);
//!
//! let fields = FormFields::new()
//!     .add_text("id", 10)
//!     .add_file("file", readme);
//!
//! let body = FormEncoder::new().encode(&fields, EncodingMode::Multipart)?;
//! #
//! # Ok(()) }
//! ```
//!

mod file_ref;
pub use self::file_ref::*;

mod form_field;
pub use self::form_field::*;

mod form_fields;
pub use self::form_fields::*;
