use ::mime::Mime;
use ::std::fmt::Display;
use ::std::path::Path;
use ::std::path::PathBuf;

use crate::FormEncoderConfig;

///
/// A reference to a file on disk, to be uploaded as part of a multipart form.
///
/// The file is not opened until the form is encoded.
///
/// ```rust
/// use ::form_encoder::fields::FileRef;
///
/// let file = FileRef::new("reports/2024.csv")
///     .file_name("report.csv")
///     .mime_type(mime::TEXT_CSV);
/// ```
///
#[derive(Debug, Clone, PartialEq)]
pub struct FileRef {
    pub(crate) path: PathBuf,
    pub(crate) file_name: Option<String>,
    pub(crate) mime_type: Option<Mime>,
}

impl FileRef {
    pub fn new<P>(path: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self {
            path: path.into(),
            file_name: None,
            mime_type: None,
        }
    }

    /// Sets the file name sent for this file.
    ///
    /// By default the last segment of the path is used.
    pub fn file_name<T>(mut self, file_name: T) -> Self
    where
        T: Display,
    {
        self.file_name = Some(file_name.to_string());
        self
    }

    /// Sets the mime type sent for this file.
    ///
    /// By default it is guessed from the file extension,
    /// falling back to the encoder's default file mime type.
    pub fn mime_type(mut self, mime_type: Mime) -> Self {
        self.mime_type = Some(mime_type);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn resolved_file_name(&self) -> Option<String> {
        self.file_name.clone().or_else(|| {
            self.path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
    }

    pub(crate) fn resolved_mime_type(&self, config: &FormEncoderConfig) -> Mime {
        if let Some(mime_type) = &self.mime_type {
            return mime_type.clone();
        }

        if config.guess_file_mime_types {
            if let Some(guessed) = ::mime_guess::from_path(&self.path).first() {
                return guessed;
            }
        }

        config.default_file_mime_type.clone()
    }
}

impl From<PathBuf> for FileRef {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&Path> for FileRef {
    fn from(path: &Path) -> Self {
        Self::new(path)
    }
}

impl From<&str> for FileRef {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}
