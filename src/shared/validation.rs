use validator::ValidationError;

/// Rejects strings that are empty or contain only whitespace.
/// Used for free-text fields (comment bodies) where presence alone
/// is not enough.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.message = Some("must not be blank".into());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_blank_accepts_text() {
        assert!(not_blank("looks like a real problem").is_ok());
        assert!(not_blank("  padded  ").is_ok());
        assert!(not_blank("x").is_ok());
    }

    #[test]
    fn test_not_blank_rejects_empty_and_whitespace() {
        assert!(not_blank("").is_err());
        assert!(not_blank(" ").is_err());
        assert!(not_blank("\t\n  ").is_err());
    }
}
