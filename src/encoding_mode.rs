use ::mime::Mime;

pub(crate) const URL_ENCODED_CONTENT_TYPE: &'static str = &"application/x-www-form-urlencoded";
pub(crate) const MULTIPART_CONTENT_TYPE: &'static str = &"multipart/form-data";

/// Which form encoding a body is written in.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EncodingMode {
    /// `application/x-www-form-urlencoded`
    UrlEncoded,

    /// `multipart/form-data`
    Multipart,
}

impl EncodingMode {
    /// Works out the mode from a `Content-Type` header value,
    /// ignoring any parameters (such as a boundary or charset).
    ///
    /// Returns `None` for anything that isn't a form content type.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let mime: Mime = content_type.trim().parse().ok()?;

        if mime.type_() == mime::APPLICATION && mime.subtype() == mime::WWW_FORM_URLENCODED {
            return Some(Self::UrlEncoded);
        }

        if mime.type_() == mime::MULTIPART && mime.subtype() == mime::FORM_DATA {
            return Some(Self::Multipart);
        }

        None
    }

    /// The content type for this mode, without any parameters.
    pub fn essence(self) -> &'static str {
        match self {
            Self::UrlEncoded => URL_ENCODED_CONTENT_TYPE,
            Self::Multipart => MULTIPART_CONTENT_TYPE,
        }
    }
}
