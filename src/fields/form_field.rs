use ::std::fmt::Display;

use crate::fields::FileRef;

/// The value held by a [`FormField`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Scalar(String),

    /// Sent as the same field name repeated, once per value, in order.
    Collection(Vec<String>),

    File(FileRef),
}

impl FieldValue {
    /// A short name for the kind of value held, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::Collection(_) => "collection",
            Self::File(_) => "file",
        }
    }
}

/// A single named value, destined for a form body.
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    name: String,
    value: FieldValue,
}

impl FormField {
    pub fn new<N>(name: N, value: FieldValue) -> Self
    where
        N: Display,
    {
        Self {
            name: name.to_string(),
            value,
        }
    }

    pub fn text<N, T>(name: N, text: T) -> Self
    where
        N: Display,
        T: ToString,
    {
        Self::new(name, FieldValue::Scalar(text.to_string()))
    }

    pub fn collection<N, I, T>(name: N, values: I) -> Self
    where
        N: Display,
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        let values = values.into_iter().map(|value| value.to_string()).collect();
        Self::new(name, FieldValue::Collection(values))
    }

    pub fn file<N, F>(name: N, file: F) -> Self
    where
        N: Display,
        F: Into<FileRef>,
    {
        Self::new(name, FieldValue::File(file.into()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }
}
