//! Inbound validation: enforced before any hashing, signing, or
//! storage work happens, with no side effects on failure.

use chrono::NaiveDateTime;

use crate::error::ValidationError;
use crate::record::TIMESTAMP_FORMAT;

/// Maximum accepted content size: 256 KiB.
pub const MAX_CONTENT_SIZE: usize = 256 * 1024;

/// Check that content is non-empty and within the size limit.
pub fn validate_content(content: &[u8]) -> Result<(), ValidationError> {
    if content.is_empty() {
        return Err(ValidationError::EmptyContent);
    }
    if content.len() > MAX_CONTENT_SIZE {
        return Err(ValidationError::ContentTooLarge(content.len()));
    }
    Ok(())
}

/// Check that a timestamp string is in the canonical RFC 3339 UTC
/// second-precision form. The string itself is what gets signed, so
/// the shape must be exact, not merely parseable.
pub fn validate_timestamp(s: &str) -> Result<(), ValidationError> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .map(|_| ())
        .map_err(|e| ValidationError::MalformedTimestamp(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content_rejected() {
        assert_eq!(validate_content(b""), Err(ValidationError::EmptyContent));
    }

    #[test]
    fn test_boundary_sizes() {
        let at_limit = vec![b'x'; MAX_CONTENT_SIZE];
        assert_eq!(validate_content(&at_limit), Ok(()));

        let over_limit = vec![b'x'; MAX_CONTENT_SIZE + 1];
        assert_eq!(
            validate_content(&over_limit),
            Err(ValidationError::ContentTooLarge(MAX_CONTENT_SIZE + 1))
        );
    }

    #[test]
    fn test_timestamp_validation() {
        assert!(validate_timestamp("2024-01-15T12:00:00Z").is_ok());
        assert!(validate_timestamp("2024-01-15 12:00:00").is_err());
        assert!(validate_timestamp("2024-01-15T12:00:00.123Z").is_err());
        assert!(validate_timestamp("garbage").is_err());
    }
}
