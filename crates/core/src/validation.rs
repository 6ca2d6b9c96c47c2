//! Input validation for note and checklist item text.
//!
//! The store accepts any text; these checks are applied by callers that
//! receive untrusted input (the HTTP layer).

/// Validate that note text is not blank.
pub fn validate_note_text(text: &str) -> Result<(), String> {
    if text.trim().is_empty() {
        return Err("Note text must not be blank".to_string());
    }
    Ok(())
}

/// Validate that checklist item text is not blank.
pub fn validate_item_text(text: &str) -> Result<(), String> {
    if text.trim().is_empty() {
        return Err("Checklist item text must not be blank".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_text_accepts_content() {
        assert!(validate_note_text("buy milk").is_ok());
        assert!(validate_note_text("  padded  ").is_ok());
    }

    #[test]
    fn test_note_text_rejects_blank() {
        assert!(validate_note_text("").is_err());
        assert!(validate_note_text("   ").is_err());
        assert!(validate_note_text("\n\t").is_err());
    }

    #[test]
    fn test_item_text_rejects_blank() {
        let err = validate_item_text(" ").unwrap_err();
        assert!(err.contains("must not be blank"));
        assert!(validate_item_text("passport").is_ok());
    }
}
