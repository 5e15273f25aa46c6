use ::mime::Mime;

use crate::FormEncoderConfigBuilder;

pub(crate) const DEFAULT_BOUNDARY_PREFIX: &'static str = &"FormBoundary";

/// The basic setup for the [`FormEncoder`](crate::FormEncoder).
#[derive(Debug, Clone, PartialEq)]
pub struct FormEncoderConfig {
    /// Use this exact boundary for every multipart body,
    /// instead of generating a random one.
    ///
    /// This is useful when asserting against the raw bytes of a body.
    ///
    /// **Defaults** to `None`, generating a new boundary per body.
    pub boundary: Option<String>,

    /// Text placed at the start of every generated boundary.
    ///
    /// **Defaults** to `FormBoundary`.
    pub boundary_prefix: String,

    /// The mime type sent for files, when one cannot be worked out.
    ///
    /// **Defaults** to `application/octet-stream`.
    pub default_file_mime_type: Mime,

    /// Guess the mime type of files from their extension.
    ///
    /// **Defaults** to true.
    pub guess_file_mime_types: bool,
}

impl FormEncoderConfig {
    pub fn builder() -> FormEncoderConfigBuilder {
        FormEncoderConfigBuilder::default()
    }
}

impl Default for FormEncoderConfig {
    fn default() -> Self {
        Self {
            boundary: None,
            boundary_prefix: DEFAULT_BOUNDARY_PREFIX.to_string(),
            default_file_mime_type: mime::APPLICATION_OCTET_STREAM,
            guess_file_mime_types: true,
        }
    }
}
