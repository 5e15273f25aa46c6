//!
//! Form Encoder turns named form fields into request bodies:
//!
//!  * Build up [`FormFields`](crate::fields::FormFields) holding text, collections, and files,
//!  * pick an [`EncodingMode`], url-encoded or multipart,
//!  * then use a [`FormEncoder`] to produce an [`EncodedBody`].
//!
//! The body holds the exact bytes to send, and the `Content-Type` header to send them with
//! (including the boundary for multipart bodies).
//! It can be turned into an [`http::Request`] ready for an axum service, or any other client.
//!
//! ## Getting Started
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
//!
//! assert_eq!(body.bytes(), "key1=1&key2=1".as_bytes());
//! assert_eq!(body.content_type(), "application/x-www-form-urlencoded");
//! #
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! ### Multipart Uploads 📎
//!
//! Files are referenced by path, and only read when the body is encoded.
//! The file name defaults to the last part of the path,
//! and the mime type is guessed from the extension.
//!
//! ```rust
//! # fn test() -> Result<(), Box<dyn ::std::error::Error>> {
//! #
//! use ::form_encoder::EncodingMode;
//! use ::form_encoder::FormEncoder;
//! use ::form_encoder::fields::FormFields;
//!
//! let fields = FormFields::new()
//!     .add_text("id", 10)
//!     .add_text("public", true)
//!     .add_file("file", "file.txt");
//!
//! let body = FormEncoder::new().encode(&fields, EncodingMode::Multipart)?;
//! #
//! # Ok(())
//! # }
//! ```
//!
//! If any file cannot be read, an [`EncodingError`] is returned instead of a body.
//!
//! ### Fixed Boundaries 📐
//!
//! Multipart boundaries are random by default.
//! A fixed one can be set on the [`FormEncoderConfig`], which helps when asserting on raw bodies.
//!
//! ```rust
//! use ::form_encoder::FormEncoderConfig;
//!
//! let encoder = FormEncoderConfig::builder()
//!     .boundary("my-boundary")
//!     .build_encoder();
//! ```
//!
//! ### Query Strings 🔎
//!
//! The same fields can be encoded into a query string using [`encode_query`],
//! or appended to a [`Url`](::url::Url) using [`append_query`].
//!

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub(crate) mod internals;

pub mod fields;

mod encoded_body;
pub use self::encoded_body::*;

mod encoding_error;
pub use self::encoding_error::*;

mod encoding_mode;
pub use self::encoding_mode::*;

mod form_encoder;
pub use self::form_encoder::*;

mod form_encoder_config;
pub use self::form_encoder_config::*;

mod form_encoder_config_builder;
pub use self::form_encoder_config_builder::*;

mod query_string;
pub use self::query_string::*;

pub use ::http;
pub use ::mime;
