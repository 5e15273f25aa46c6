use ::axum::body::Body as AxumBody;
use ::bytes::Bytes;
use ::http::HeaderValue;
use ::http::Method;
use ::http::Request;
use ::http::header;
use ::serde::Serialize;

use crate::EncodingError;

/// A fully encoded request body, along with the `Content-Type` it must be sent with.
///
/// Build one using a [`FormEncoder`](crate::FormEncoder),
/// then hand it to the HTTP client of your choice.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedBody {
    bytes: Bytes,
    content_type: String,
}

impl EncodedBody {
    pub(crate) fn new(bytes: Bytes, content_type: String) -> Self {
        Self {
            bytes,
            content_type,
        }
    }

    /// Encodes the value as a Json body.
    ///
    /// This is for endpoints which sit alongside form endpoints,
    /// so all bodies can be sent the same way.
    pub fn json<J>(body: &J) -> Result<Self, EncodingError>
    where
        J: Serialize + ?Sized,
    {
        let body_bytes = ::serde_json::to_vec(body)?;

        Ok(Self::new(
            body_bytes.into(),
            mime::APPLICATION_JSON.to_string(),
        ))
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    /// The full `Content-Type` header value, including the boundary for multipart bodies.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn content_length(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_parts(self) -> (Bytes, String) {
        (self.bytes, self.content_type)
    }

    /// Builds a request sending this body,
    /// with the `Content-Type` and `Content-Length` headers set.
    ///
    /// ```rust
    /// # fn test() -> Result<(), Box<dyn ::std::error::Error>> {
    /// #
    /// use ::form_encoder::EncodingMode;
    /// use ::form_encoder::FormEncoder;
    /// use ::form_encoder::fields::FormFields;
    /// use ::http::Method;
    ///
    /// let fields = FormFields::new()
    ///     .add_text("key1", "1")
    ///     .add_text("key2", "1");
    ///
    /// let request = FormEncoder::new()
    ///     .encode(&fields, EncodingMode::UrlEncoded)?
    ///     .into_request(Method::POST, "/form")?;
    /// #
    /// # Ok(()) }
    /// ```
    pub fn into_request(
        self,
        method: Method,
        uri: &str,
    ) -> Result<Request<AxumBody>, ::http::Error> {
        let content_type = HeaderValue::from_str(&self.content_type)?;

        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, content_type)
            .header(header::CONTENT_LENGTH, self.bytes.len())
            .body(AxumBody::from(self.bytes))
    }
}

impl From<EncodedBody> for AxumBody {
    fn from(body: EncodedBody) -> Self {
        AxumBody::from(body.bytes)
    }
}
