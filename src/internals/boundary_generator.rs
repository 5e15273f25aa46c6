use ::uuid::Uuid;

use crate::EncodingError;

const MAX_BOUNDARY_LEN: usize = 70;

/// Generates a random multipart boundary, starting with the prefix given.
///
/// The random half is 32 hex characters.
/// Use [`validate_boundary`] on the result, as a long prefix can push it over the limit.
pub fn generate_boundary(prefix: &str) -> String {
    format!("{prefix}{}", Uuid::new_v4().simple())
}

/// Checks the boundary is 1 to 70 characters,
/// using only characters that need no quoting in a `Content-Type` header.
pub fn validate_boundary(boundary: &str) -> Result<(), EncodingError> {
    let reason = if boundary.is_empty() {
        Some("it must not be empty")
    } else if boundary.len() > MAX_BOUNDARY_LEN {
        Some("it must be at most 70 characters")
    } else if !boundary.chars().all(is_boundary_char) {
        Some("it may only use letters, digits, and ' + _ - .")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(EncodingError::InvalidBoundary {
            boundary: boundary.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

fn is_boundary_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '\'' | '+' | '_' | '-' | '.')
}


#[cfg(test)]
mod test_validate_boundary {
    use super::*;

    #[test]
    fn it_should_accept_generated_boundaries() {
        let boundary = generate_boundary("FormBoundary");

        assert!(validate_boundary(&boundary).is_ok());
    }

    #[test]
    fn it_should_accept_seventy_characters() {
        let boundary = "a".repeat(70);

        assert!(validate_boundary(&boundary).is_ok());
    }

    #[test]
    fn it_should_reject_empty_boundary() {
        let result = validate_boundary("");

        assert!(matches!(result, Err(EncodingError::InvalidBoundary { .. })));
    }

    #[test]
    fn it_should_reject_more_than_seventy_characters() {
        let boundary = "a".repeat(71);

        assert!(matches!(
            validate_boundary(&boundary),
            Err(EncodingError::InvalidBoundary { .. })
        ));
    }

    #[test]
    fn it_should_reject_spaces() {
        let result = validate_boundary("has space");

        assert!(matches!(result, Err(EncodingError::InvalidBoundary { .. })));
    }

    #[test]
    fn it_should_reject_header_separators() {
        let result = validate_boundary("a;b");

        assert!(matches!(result, Err(EncodingError::InvalidBoundary { .. })));
    }
}
