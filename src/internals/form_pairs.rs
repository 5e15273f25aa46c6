use ::std::fmt::Display;
use ::std::fmt::Formatter;
use ::std::fmt::Result as FmtResult;

use crate::EncodingError;
use crate::fields::FieldValue;
use crate::fields::FormField;

/// Form fields flattened into `name=value` pairs, already url-encoded.
///
/// Collections are flattened into one pair per value.
#[derive(Debug, Clone, PartialEq)]
pub struct FormPairs {
    encoded: String,
}

impl FormPairs {
    pub fn from_fields(fields: &[FormField]) -> Result<Self, EncodingError> {
        let mut pairs: Vec<(&str, &str)> = Vec::with_capacity(fields.len());

        for field in fields {
            match field.value() {
                FieldValue::Scalar(value) => pairs.push((field.name(), value.as_str())),
                FieldValue::Collection(values) => {
                    for value in values {
                        pairs.push((field.name(), value.as_str()));
                    }
                }
                FieldValue::File(_) => {
                    return Err(EncodingError::UnsupportedFieldType {
                        name: field.name().to_string(),
                        kind: field.value().kind(),
                    });
                }
            }
        }

        let encoded = ::serde_urlencoded::to_string(&pairs)?;
        Ok(Self { encoded })
    }

    pub fn into_string(self) -> String {
        self.encoded
    }
}

impl Display for FormPairs {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.encoded)
    }
}
