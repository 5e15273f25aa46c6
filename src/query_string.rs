use ::url::Url;

use crate::EncodingError;
use crate::fields::FormField;
use crate::internals::FormPairs;

/// Encodes the fields as a query string, without the leading `?`.
///
/// Collections repeat their name once per value, in order.
/// Files cannot be sent in a query, and return an error.
///
/// ```rust
/// # fn test() -> Result<(), Box<dyn ::std::error::Error>> {
/// #
/// use ::form_encoder::encode_query;
/// use ::form_encoder::fields::FormFields;
///
/// let fields = FormFields::new()
///     .add_collection("filter", ["one", "two"]);
///
/// assert_eq!(encode_query(&fields)?, "filter=one&filter=two");
/// #
/// # Ok(()) }
/// ```
pub fn encode_query<F>(fields: F) -> Result<String, EncodingError>
where
    F: AsRef<[FormField]>,
{
    let fields = fields.as_ref();
    if fields.iter().any(|field| field.name().is_empty()) {
        return Err(EncodingError::EmptyFieldName);
    }

    let pairs = FormPairs::from_fields(fields)?;
    Ok(pairs.into_string())
}

/// Adds the fields onto the end of the url's query,
/// keeping any query parameters already there.
pub fn append_query<F>(mut url: Url, fields: F) -> Result<Url, EncodingError>
where
    F: AsRef<[FormField]>,
{
    let encoded = encode_query(fields)?;
    if encoded.is_empty() {
        return Ok(url);
    }

    let query = match url.query() {
        Some(existing) if !existing.is_empty() => format!("{existing}&{encoded}"),
        _ => encoded,
    };
    url.set_query(Some(&query));

    Ok(url)
}

#[cfg(test)]
mod test_encode_query {
    use super::*;
    use crate::fields::FileRef;
    use crate::fields::FormFields;

    #[test]
    fn it_should_encode_collection_as_repeated_names() {
        let fields = FormFields::new().add_collection("filter", ["one", "two", "three", "four"]);

        let query = encode_query(&fields).unwrap();

        assert_eq!(query, "filter=one&filter=two&filter=three&filter=four");
    }

    #[test]
    fn it_should_be_empty_for_no_fields() {
        let query = encode_query(FormFields::new()).unwrap();

        assert_eq!(query, "");
    }

    #[test]
    fn it_should_reject_files() {
        let fields = FormFields::new().add_file("file", FileRef::new("file.txt"));

        let result = encode_query(&fields);

        assert!(matches!(
            result,
            Err(EncodingError::UnsupportedFieldType { kind: "file", .. })
        ));
    }
}
