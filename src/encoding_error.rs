use ::std::io::Error as IoError;
use ::std::io::ErrorKind;
use ::std::path::Path;
use ::std::path::PathBuf;
use ::thiserror::Error;

/// Everything that can go wrong when encoding a form body.
///
/// Encoding either succeeds completely, or returns one of these.
/// A partially written body is never handed back.
#[derive(Debug, Error)]
pub enum EncodingError {
    /// The file behind a [`FileRef`](crate::fields::FileRef) does not exist,
    /// or cannot be opened for reading.
    #[error("File '{}' was not found, or cannot be read", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: IoError,
    },

    /// The file was opened, but reading its contents failed part way through.
    #[error("Failed to read file '{}'", .path.display())]
    FileReadFailed {
        path: PathBuf,
        #[source]
        source: IoError,
    },

    /// The value for the field cannot be represented by the chosen encoding.
    /// For example a file inside of a url-encoded body.
    #[error("Field '{name}' holds a {kind}, which is not supported here")]
    UnsupportedFieldType { name: String, kind: &'static str },

    #[error("Form fields must have a non-empty name")]
    EmptyFieldName,

    /// The multipart boundary is empty, too long, or holds characters
    /// that cannot appear unquoted in a `Content-Type` header.
    #[error("Multipart boundary '{boundary}' is invalid, {reason}")]
    InvalidBoundary {
        boundary: String,
        reason: &'static str,
    },

    /// The multipart boundary appears inside the value of a field,
    /// and would split it into extra parts.
    #[error("Field '{name}' contains the multipart boundary")]
    BoundaryInContent { name: String },

    #[error("Content type '{0}' is not a form content type")]
    UnsupportedContentType(String),

    /// Values turned into form fields must serialize to a map at the top level.
    #[error("Expected a map of form fields, received {kind}")]
    NotAFieldMap { kind: &'static str },

    #[error("Failed to serialize form fields")]
    Serialization(#[from] ::serde_json::Error),

    #[error("Failed to url-encode form fields")]
    UrlEncoding(#[from] ::serde_urlencoded::ser::Error),

    #[error("Background encoding task was cancelled before it finished")]
    BackgroundTaskCancelled,
}

impl EncodingError {
    pub(crate) fn from_file_error(path: &Path, source: IoError) -> Self {
        match source.kind() {
            ErrorKind::NotFound | ErrorKind::PermissionDenied => Self::FileNotFound {
                path: path.to_path_buf(),
                source,
            },
            _ => Self::FileReadFailed {
                path: path.to_path_buf(),
                source,
            },
        }
    }
}
