use ::bytes::BufMut;
use ::bytes::Bytes;
use ::bytes::BytesMut;
use ::mime::Mime;
use ::std::borrow::Cow;
use ::std::fs::File;
use ::std::io::copy;

use crate::EncodingError;
use crate::FormEncoderConfig;
use crate::fields::FileRef;

const CRLF: &'static [u8] = b"\r\n";

/// Writes the parts of a `multipart/form-data` body into a single buffer.
///
/// Nothing is handed out until [`MultipartWriter::finish`] is called,
/// so a failure part way through leaves nothing behind but a dropped buffer.
#[derive(Debug)]
pub struct MultipartWriter<'a> {
    config: &'a FormEncoderConfig,
    boundary: &'a str,
    delimiter: Vec<u8>,
    buffer: BytesMut,
}

impl<'a> MultipartWriter<'a> {
    pub fn new(config: &'a FormEncoderConfig, boundary: &'a str) -> Self {
        Self {
            config,
            boundary,
            delimiter: format!("--{boundary}").into_bytes(),
            buffer: BytesMut::new(),
        }
    }

    pub fn write_text(&mut self, name: &str, text: &str) -> Result<(), EncodingError> {
        self.check_no_delimiter(name, text.as_bytes())?;

        self.write_part_headers(name, None, None);
        self.buffer.put_slice(text.as_bytes());
        self.buffer.put_slice(CRLF);

        Ok(())
    }

    /// Copies the file byte for byte into the body.
    ///
    /// The file handle is closed before this returns, whether or not the copy succeeded.
    pub fn write_file(&mut self, name: &str, file_ref: &FileRef) -> Result<u64, EncodingError> {
        let path = file_ref.path();
        let mut file =
            File::open(path).map_err(|err| EncodingError::from_file_error(path, err))?;

        if let Ok(metadata) = file.metadata() {
            self.buffer.reserve(usize::try_from(metadata.len()).unwrap_or(0));
        }

        let file_name = file_ref.resolved_file_name();
        let mime_type = file_ref.resolved_mime_type(self.config);
        self.write_part_headers(name, file_name.as_deref(), Some(&mime_type));

        let payload_start = self.buffer.len();
        let copied = copy(&mut file, &mut (&mut self.buffer).writer())
            .map_err(|err| EncodingError::from_file_error(path, err))?;
        self.check_no_delimiter(name, &self.buffer[payload_start..])?;
        self.buffer.put_slice(CRLF);

        ::tracing::trace!(field = name, path = %path.display(), bytes = copied, "Wrote file part");

        Ok(copied)
    }

    pub fn finish(mut self) -> Bytes {
        self.buffer.put_slice(b"--");
        self.buffer.put_slice(self.boundary.as_bytes());
        self.buffer.put_slice(b"--");
        self.buffer.put_slice(CRLF);

        self.buffer.freeze()
    }

    /// Payloads must not contain `--<boundary>`, or a parser would split them into extra parts.
    fn check_no_delimiter(&self, name: &str, payload: &[u8]) -> Result<(), EncodingError> {
        let delimiter = self.delimiter.as_slice();
        if payload.windows(delimiter.len()).any(|window| window == delimiter) {
            return Err(EncodingError::BoundaryInContent {
                name: name.to_string(),
            });
        }

        Ok(())
    }

    fn write_part_headers(
        &mut self,
        name: &str,
        file_name: Option<&str>,
        mime_type: Option<&Mime>,
    ) {
        self.buffer.put_slice(b"--");
        self.buffer.put_slice(self.boundary.as_bytes());
        self.buffer.put_slice(CRLF);

        self.buffer.put_slice(b"Content-Disposition: form-data; name=\"");
        self.buffer.put_slice(escape_quoted(name).as_bytes());
        self.buffer.put_slice(b"\"");

        if let Some(file_name) = file_name {
            self.buffer.put_slice(b"; filename=\"");
            self.buffer.put_slice(escape_quoted(file_name).as_bytes());
            self.buffer.put_slice(b"\"");
        }
        self.buffer.put_slice(CRLF);

        if let Some(mime_type) = mime_type {
            self.buffer.put_slice(b"Content-Type: ");
            self.buffer.put_slice(mime_type.as_ref().as_bytes());
            self.buffer.put_slice(CRLF);
        }

        self.buffer.put_slice(CRLF);
    }
}

/// Escapes a value for use inside a quoted header parameter,
/// the same way browsers do for form data.
fn escape_quoted(value: &str) -> Cow<'_, str> {
    if !value.contains(['"', '\r', '\n']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 6);
    for c in value.chars() {
        match c {
            '"' => escaped.push_str("%22"),
            '\r' => escaped.push_str("%0D"),
            '\n' => escaped.push_str("%0A"),
            other => escaped.push(other),
        }
    }

    Cow::Owned(escaped)
}


#[cfg(test)]
mod test_write_file {
    use super::*;
    use ::std::io::Write;
    use ::tempfile::Builder;
    use ::tempfile::NamedTempFile;

    #[test]
    fn it_should_write_file_part_with_file_name_and_mime_type() {
        let mut file = Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(b"hello file").unwrap();

        let config = FormEncoderConfig::default();
        let file_ref = FileRef::new(file.path()).file_name("upload.txt");
        let mut writer = MultipartWriter::new(&config, "b");

        let copied = writer.write_file("file", &file_ref).unwrap();
        let body = writer.finish();

        assert_eq!(copied, 10);
        assert_eq!(
            body,
            "--b\r\nContent-Disposition: form-data; name=\"file\"; filename=\"upload.txt\"\r\nContent-Type: text/plain\r\n\r\nhello file\r\n--b--\r\n"
        );
    }

    #[test]
    fn it_should_copy_binary_content_exactly() {
        let content: Vec<u8> = (0..=255).collect();
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&content).unwrap();

        let config = FormEncoderConfig::default();
        let mut writer = MultipartWriter::new(&config, "b");

        writer
            .write_file("file", &FileRef::new(file.path()))
            .unwrap();
        let body = writer.finish();

        let start = body
            .windows(4)
            .position(|window| window == b"\r\n\r\n")
            .unwrap()
            + 4;
        assert_eq!(&body[start..start + content.len()], content.as_slice());
    }

    #[test]
    fn it_should_error_for_missing_file() {
        let config = FormEncoderConfig::default();
        let mut writer = MultipartWriter::new(&config, "b");

        let result = writer.write_file("file", &FileRef::new("does/not/exist.txt"));

        assert!(matches!(result, Err(EncodingError::FileNotFound { .. })));
    }

    #[test]
    fn it_should_reject_file_containing_the_boundary() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"first line\r\n--fixed\r\nsecond line").unwrap();

        let config = FormEncoderConfig::default();
        let mut writer = MultipartWriter::new(&config, "fixed");

        let result = writer.write_file("upload", &FileRef::new(file.path()));

        assert!(matches!(
            result,
            Err(EncodingError::BoundaryInContent { ref name }) if name == "upload"
        ));
    }
}
