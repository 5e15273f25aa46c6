use ::std::panic::resume_unwind;

use crate::EncodedBody;
use crate::EncodingError;
use crate::EncodingMode;
use crate::FormEncoderConfig;
use crate::fields::FieldValue;
use crate::fields::FormField;
use crate::internals::FormPairs;
use crate::internals::MultipartWriter;
use crate::internals::generate_boundary;
use crate::internals::validate_boundary;

///
/// Turns form fields into an encoded body, ready to send.
///
/// The encoder holds no state between calls,
/// and can be shared and used from many threads at once.
///
/// ```rust
/// # fn test() -> Result<(), Box<dyn ::std::error::Error>> {
/// #
/// use ::form_encoder::EncodingMode;
/// use ::form_encoder::FormEncoder;
/// use ::form_encoder::fields::FormFields;
///
/// let fields = FormFields::new()
///     .add_collection("filter", ["one", "two", "three", "four"]);
///
/// let body = FormEncoder::new().encode(&fields, EncodingMode::UrlEncoded)?;
///
/// assert_eq!(body.content_type(), "application/x-www-form-urlencoded");
/// assert_eq!(body.bytes(), "filter=one&filter=two&filter=three&filter=four".as_bytes());
/// #
/// # Ok(()) }
/// ```
///
#[derive(Debug, Clone, Default)]
pub struct FormEncoder {
    config: FormEncoderConfig,
}

impl FormEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_with_config(config: FormEncoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormEncoderConfig {
        &self.config
    }

    /// Encodes the fields, in the order given.
    ///
    /// Files are read in full while encoding.
    /// If any file cannot be read, an error is returned and no body is produced.
    pub fn encode<F>(&self, fields: F, mode: EncodingMode) -> Result<EncodedBody, EncodingError>
    where
        F: AsRef<[FormField]>,
    {
        let fields = fields.as_ref();
        if fields.iter().any(|field| field.name().is_empty()) {
            return Err(EncodingError::EmptyFieldName);
        }

        let body = match mode {
            EncodingMode::UrlEncoded => self.encode_url_encoded(fields)?,
            EncodingMode::Multipart => self.encode_multipart(fields)?,
        };

        ::tracing::debug!(
            ?mode,
            fields = fields.len(),
            bytes = body.content_length(),
            "Encoded form body"
        );

        Ok(body)
    }

    /// Encodes the fields using the mode matching the content type given.
    ///
    /// Any parameters on the content type, such as a boundary, are ignored.
    pub fn encode_for_content_type<F>(
        &self,
        fields: F,
        content_type: &str,
    ) -> Result<EncodedBody, EncodingError>
    where
        F: AsRef<[FormField]>,
    {
        let mode = EncodingMode::from_content_type(content_type)
            .ok_or_else(|| EncodingError::UnsupportedContentType(content_type.to_string()))?;

        self.encode(fields, mode)
    }

    /// Encodes the fields on Tokio's blocking thread pool,
    /// keeping file reads off of the async runtime.
    ///
    /// This must be called from within a Tokio runtime.
    /// If encoding panics, the panic is resumed here.
    pub async fn encode_in_background<F>(
        &self,
        fields: F,
        mode: EncodingMode,
    ) -> Result<EncodedBody, EncodingError>
    where
        F: AsRef<[FormField]> + Send + 'static,
    {
        let encoder = self.clone();
        let result = ::tokio::task::spawn_blocking(move || encoder.encode(fields, mode)).await;

        match result {
            Ok(encoded) => encoded,
            Err(err) if err.is_panic() => resume_unwind(err.into_panic()),
            Err(_) => Err(EncodingError::BackgroundTaskCancelled),
        }
    }

    fn encode_url_encoded(&self, fields: &[FormField]) -> Result<EncodedBody, EncodingError> {
        let pairs = FormPairs::from_fields(fields)?;

        Ok(EncodedBody::new(
            pairs.into_string().into(),
            EncodingMode::UrlEncoded.essence().to_string(),
        ))
    }

    fn encode_multipart(&self, fields: &[FormField]) -> Result<EncodedBody, EncodingError> {
        let boundary = match &self.config.boundary {
            Some(boundary) => boundary.clone(),
            None => generate_boundary(&self.config.boundary_prefix),
        };
        validate_boundary(&boundary)?;

        let mut writer = MultipartWriter::new(&self.config, &boundary);
        for field in fields {
            match field.value() {
                FieldValue::Scalar(text) => writer.write_text(field.name(), text)?,
                FieldValue::Collection(values) => {
                    for text in values {
                        writer.write_text(field.name(), text)?;
                    }
                }
                FieldValue::File(file_ref) => {
                    writer.write_file(field.name(), file_ref)?;
                }
            }
        }
        let bytes = writer.finish();

        let content_type = format!("{}; boundary={boundary}", EncodingMode::Multipart.essence());

        Ok(EncodedBody::new(bytes, content_type))
    }
}
