//! Validation helpers for DTOs.

use validator::ValidationError;

const MAX_GROUP_LABEL_LENGTH: usize = 8;
const MAX_TEAM_NAME_LENGTH: usize = 40;

/// Validates that a group label is short, non-empty, and free of whitespace.
///
/// # Examples
///
/// ```ignore
/// validate_group_label("A")        // Ok
/// validate_group_label("")         // Err - empty
/// validate_group_label("GROUP A")  // Err - whitespace
/// ```
pub fn validate_group_label(label: &str) -> Result<(), ValidationError> {
    if label.is_empty() || label.len() > MAX_GROUP_LABEL_LENGTH {
        let mut err = ValidationError::new("group_label_length");
        err.message = Some(
            format!(
                "Group label must be 1-{} characters (got {})",
                MAX_GROUP_LABEL_LENGTH,
                label.len()
            )
            .into(),
        );
        return Err(err);
    }

    if !label.chars().all(|c| c.is_ascii_alphanumeric()) {
        let mut err = ValidationError::new("group_label_format");
        err.message = Some("Group label must contain only ASCII letters and digits".into());
        return Err(err);
    }

    Ok(())
}

/// Validates that a team name is non-blank and reasonably short.
pub fn validate_team_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        let mut err = ValidationError::new("team_name_blank");
        err.message = Some("Team name must not be blank".into());
        return Err(err);
    }

    if name.len() > MAX_TEAM_NAME_LENGTH {
        let mut err = ValidationError::new("team_name_length");
        err.message = Some(
            format!(
                "Team name must be at most {} characters (got {})",
                MAX_TEAM_NAME_LENGTH,
                name.len()
            )
            .into(),
        );
        return Err(err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_group_label_valid() {
        assert!(validate_group_label("A").is_ok());
        assert!(validate_group_label("B2").is_ok());
        assert!(validate_group_label("GRUPO1").is_ok());
    }

    #[test]
    fn test_validate_group_label_invalid() {
        assert!(validate_group_label("").is_err()); // empty
        assert!(validate_group_label("TOOLONGLABEL").is_err()); // too long
        assert!(validate_group_label("A B").is_err()); // whitespace
        assert!(validate_group_label("A-1").is_err()); // punctuation
    }

    #[test]
    fn test_validate_team_name_valid() {
        assert!(validate_team_name("SAN JOSE").is_ok());
        assert!(validate_team_name("El Dorado 1970").is_ok());
    }

    #[test]
    fn test_validate_team_name_invalid() {
        assert!(validate_team_name("").is_err()); // empty
        assert!(validate_team_name("   ").is_err()); // blank
        assert!(validate_team_name(&"X".repeat(41)).is_err()); // too long
    }
}
