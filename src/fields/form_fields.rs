use ::serde::Serialize;
use ::serde_json::Value;
use ::std::fmt::Display;
use ::std::slice::Iter;
use ::std::vec::IntoIter;

use crate::EncodingError;
use crate::fields::FieldValue;
use crate::fields::FileRef;
use crate::fields::FormField;

/// An ordered list of [`FormField`]s, built up one at a time.
///
/// Field names may repeat, and the order they are added in is the order they are sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFields {
    fields: Vec<FormField>,
}

impl FormFields {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Builds fields from any value that serializes to a map, such as a struct.
    ///
    /// Strings, numbers, and booleans become scalars.
    /// Arrays of those become collections.
    /// `null` values are skipped.
    ///
    /// ```rust
    /// # fn test() -> Result<(), Box<dyn ::std::error::Error>> {
    /// #
    /// use ::form_encoder::fields::FormFields;
    /// use ::serde_json::json;
    ///
    /// let fields = FormFields::from_serialize(&json!({
    ///     "id": 10,
    ///     "filter": ["one", "two"],
    /// }))?;
    ///
    /// assert_eq!(fields.len(), 2);
    /// #
    /// # Ok(()) }
    /// ```
    pub fn from_serialize<S>(value: &S) -> Result<Self, EncodingError>
    where
        S: Serialize + ?Sized,
    {
        let map = match ::serde_json::to_value(value)? {
            Value::Object(map) => map,
            other => {
                return Err(EncodingError::NotAFieldMap {
                    kind: json_kind(&other),
                });
            }
        };

        let mut fields = Self::new();
        for (name, value) in map {
            let field_value = match value {
                Value::Null => continue,
                Value::Array(items) => {
                    let mut values = Vec::with_capacity(items.len());
                    for item in items {
                        match item {
                            Value::Null => continue,
                            Value::Array(_) | Value::Object(_) => {
                                return Err(EncodingError::UnsupportedFieldType {
                                    name,
                                    kind: json_kind(&item),
                                });
                            }
                            scalar => values.push(scalar_to_string(scalar)),
                        }
                    }

                    FieldValue::Collection(values)
                }
                Value::Object(_) => {
                    return Err(EncodingError::UnsupportedFieldType {
                        name,
                        kind: json_kind(&value),
                    });
                }
                scalar => FieldValue::Scalar(scalar_to_string(scalar)),
            };

            fields.fields.push(FormField::new(name, field_value));
        }

        Ok(fields)
    }

    pub fn add_text<N, T>(self, name: N, text: T) -> Self
    where
        N: Display,
        T: ToString,
    {
        self.add_field(FormField::text(name, text))
    }

    pub fn add_collection<N, I, T>(self, name: N, values: I) -> Self
    where
        N: Display,
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        self.add_field(FormField::collection(name, values))
    }

    pub fn add_file<N, F>(self, name: N, file: F) -> Self
    where
        N: Display,
        F: Into<FileRef>,
    {
        self.add_field(FormField::file(name, file))
    }

    pub fn add_field(mut self, field: FormField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn push(&mut self, field: FormField) {
        self.fields.push(field);
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, FormField> {
        self.fields.iter()
    }
}

impl AsRef<[FormField]> for FormFields {
    fn as_ref(&self) -> &[FormField] {
        &self.fields
    }
}

impl FromIterator<FormField> for FormFields {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = FormField>,
    {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for FormFields {
    type Item = FormField;
    type IntoIter = IntoIter<FormField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a FormFields {
    type Item = &'a FormField;
    type IntoIter = Iter<'a, FormField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

fn scalar_to_string(value: Value) -> String {
    match value {
        Value::String(text) => text,
        other => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "map",
    }
}
