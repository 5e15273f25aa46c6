use ::mime::Mime;

use crate::FormEncoder;
use crate::FormEncoderConfig;

/// This is for easing the building of [`FormEncoderConfig`](crate::FormEncoderConfig).
///
/// For full documentation see there.
///
/// ```rust
/// use ::form_encoder::FormEncoderConfig;
///
/// let config = FormEncoderConfig::builder()
///     .boundary("my-fixed-boundary")
///     .default_file_mime_type(mime::TEXT_PLAIN)
///     .build();
/// ```
///
/// Or build the encoder straight away:
///
/// ```rust
/// use ::form_encoder::FormEncoderConfig;
///
/// let encoder = FormEncoderConfig::builder()
///     .do_not_guess_file_mime_types()
///     .build_encoder();
/// ```
#[derive(Debug, Clone)]
pub struct FormEncoderConfigBuilder {
    config: FormEncoderConfig,
}

impl FormEncoderConfigBuilder {
    pub fn boundary<B>(mut self, boundary: B) -> Self
    where
        B: ToString,
    {
        self.config.boundary = Some(boundary.to_string());
        self
    }

    pub fn random_boundary(mut self) -> Self {
        self.config.boundary = None;
        self
    }

    pub fn boundary_prefix<P>(mut self, boundary_prefix: P) -> Self
    where
        P: ToString,
    {
        self.config.boundary_prefix = boundary_prefix.to_string();
        self
    }

    pub fn default_file_mime_type(mut self, mime_type: Mime) -> Self {
        self.config.default_file_mime_type = mime_type;
        self
    }

    pub fn guess_file_mime_types(mut self) -> Self {
        self.config.guess_file_mime_types = true;
        self
    }

    pub fn do_not_guess_file_mime_types(mut self) -> Self {
        self.config.guess_file_mime_types = false;
        self
    }

    pub fn build(self) -> FormEncoderConfig {
        self.config
    }

    pub fn build_encoder(self) -> FormEncoder {
        FormEncoder::new_with_config(self.build())
    }
}

impl Default for FormEncoderConfigBuilder {
    fn default() -> Self {
        Self {
            config: FormEncoderConfig::default(),
        }
    }
}
