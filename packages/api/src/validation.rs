//! # Shared validation rules
//!
//! The same rules run in browser forms and inside server functions, which is
//! why this module is not feature-gated and has no server dependencies.
//!
//! A check never stops at the first problem: every failing rule is collected
//! into a [`FieldError`] list so a form can show all of them at once. Lengths
//! are counted in Unicode scalar values, not bytes, so multi-byte input is
//! measured the way a person counting characters would.

/// Longest allowed post body, in characters.
pub const MAX_POST_CONTENT_CHARS: usize = 280;
/// Shortest allowed display name, in characters (after trimming).
pub const MIN_NAME_CHARS: usize = 2;
/// Longest allowed display name, in characters (after trimming).
pub const MAX_NAME_CHARS: usize = 50;
/// Longest allowed bio, in characters.
pub const MAX_BIO_CHARS: usize = 500;

/// One failed rule: which field broke and the message to show for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Collapses a violation list into one line for form-level display.
pub fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Checks a post body. The content is considered after trimming.
pub fn validate_post_content(content: &str) -> Result<(), Vec<FieldError>> {
    let trimmed = content.trim();
    let mut errors = Vec::new();

    if trimmed.is_empty() {
        errors.push(FieldError::new("content", "Post content cannot be empty."));
    }
    if trimmed.chars().count() > MAX_POST_CONTENT_CHARS {
        errors.push(FieldError::new(
            "content",
            format!("Post content cannot exceed {MAX_POST_CONTENT_CHARS} characters."),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks the profile fields together, collecting violations from both.
pub fn validate_profile(name: &str, bio: &str) -> Result<(), Vec<FieldError>> {
    let trimmed_name = name.trim();
    let name_chars = trimmed_name.chars().count();
    let mut errors = Vec::new();

    if name_chars < MIN_NAME_CHARS {
        errors.push(FieldError::new(
            "name",
            format!("Name must be at least {MIN_NAME_CHARS} characters."),
        ));
    } else if name_chars > MAX_NAME_CHARS {
        errors.push(FieldError::new(
            "name",
            format!("Name cannot exceed {MAX_NAME_CHARS} characters."),
        ));
    }

    if bio.chars().count() > MAX_BIO_CHARS {
        errors.push(FieldError::new(
            "bio",
            format!("Bio cannot exceed {MAX_BIO_CHARS} characters."),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content_is_rejected() {
        let errors = validate_post_content("").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "content");
        assert_eq!(errors[0].message, "Post content cannot be empty.");

        // Whitespace-only trims down to empty.
        assert!(validate_post_content("   \n\t ").is_err());
    }

    #[test]
    fn test_content_length_boundaries() {
        assert!(validate_post_content("x").is_ok());

        let at_limit = "x".repeat(MAX_POST_CONTENT_CHARS);
        assert!(validate_post_content(&at_limit).is_ok());

        let over_limit = "x".repeat(MAX_POST_CONTENT_CHARS + 1);
        let errors = validate_post_content(&over_limit).unwrap_err();
        assert_eq!(errors[0].message, "Post content cannot exceed 280 characters.");
    }

    #[test]
    fn test_content_length_counts_characters_not_bytes() {
        // 280 two-byte characters would overflow a byte-based limit.
        let umlauts = "ü".repeat(MAX_POST_CONTENT_CHARS);
        assert!(validate_post_content(&umlauts).is_ok());
    }

    #[test]
    fn test_surrounding_whitespace_does_not_count() {
        let padded = format!("  {}  ", "x".repeat(MAX_POST_CONTENT_CHARS));
        assert!(validate_post_content(&padded).is_ok());
    }

    #[test]
    fn test_name_length_boundaries() {
        let errors = validate_profile("A", "").unwrap_err();
        assert_eq!(errors[0].field, "name");
        assert_eq!(errors[0].message, "Name must be at least 2 characters.");

        assert!(validate_profile("Al", "").is_ok());
        assert!(validate_profile(&"x".repeat(MAX_NAME_CHARS), "").is_ok());

        let errors = validate_profile(&"x".repeat(MAX_NAME_CHARS + 1), "").unwrap_err();
        assert_eq!(errors[0].message, "Name cannot exceed 50 characters.");
    }

    #[test]
    fn test_name_is_trimmed_before_measuring() {
        // One visible character padded with spaces is still too short.
        assert!(validate_profile("  A  ", "").is_err());
        assert!(validate_profile("  Al  ", "").is_ok());
    }

    #[test]
    fn test_bio_is_optional_but_bounded() {
        assert!(validate_profile("Alice", "").is_ok());
        assert!(validate_profile("Alice", &"x".repeat(MAX_BIO_CHARS)).is_ok());

        let errors = validate_profile("Alice", &"x".repeat(MAX_BIO_CHARS + 1)).unwrap_err();
        assert_eq!(errors[0].field, "bio");
        assert_eq!(errors[0].message, "Bio cannot exceed 500 characters.");
    }

    #[test]
    fn test_all_violations_are_collected() {
        let errors = validate_profile("A", &"x".repeat(MAX_BIO_CHARS + 1)).unwrap_err();
        assert_eq!(errors.len(), 2);
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "bio"]);

        assert_eq!(
            join_messages(&errors),
            "Name must be at least 2 characters. Bio cannot exceed 500 characters."
        );
    }
}
