//! Skill-list hygiene at the two input boundaries: CLI text and stored JSON.
//!
//! Skills stay plain strings end to end — the only operation ever performed
//! on them is case-insensitive set membership, so no richer type is needed.

use serde_json::Value;

use crate::errors::AppError;

/// Parses a comma-separated skill list from the CLI
/// (`--skills "React, SQL, Git"`). Entries are trimmed; blank entries are a
/// validation error; duplicates (case-insensitive) keep the first spelling.
pub fn parse_skill_csv(raw: &str) -> Result<Vec<String>, AppError> {
    let mut skills: Vec<String> = Vec::new();

    for part in raw.split(',') {
        let skill = part.trim();
        if skill.is_empty() {
            return Err(AppError::Validation(
                "skill list contains a blank entry".to_string(),
            ));
        }
        let lower = skill.to_lowercase();
        if !skills.iter().any(|s| s.to_lowercase() == lower) {
            skills.push(skill.to_string());
        }
    }

    Ok(skills)
}

/// Validates a raw JSON skill array before typed decoding. The store files
/// are hand-editable, so a non-string entry is a real possibility; it fails
/// loudly with the offending index rather than being coerced.
pub fn validate_skill_values(field: &str, raw: &Value) -> Result<(), AppError> {
    let Some(entries) = raw.as_array() else {
        // Missing or non-array fields are left for serde to report.
        return Ok(());
    };

    for (index, entry) in entries.iter().enumerate() {
        if !entry.is_string() {
            return Err(AppError::InvalidSkillEntry {
                field: field.to_string(),
                index,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_csv_trims_and_splits() {
        let skills = parse_skill_csv("React, SQL ,Git").unwrap();
        assert_eq!(skills, vec!["React", "SQL", "Git"]);
    }

    #[test]
    fn test_parse_csv_rejects_blank_entry() {
        assert!(matches!(
            parse_skill_csv("React,,SQL"),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_parse_csv_dedupes_case_insensitively_keeping_first() {
        let skills = parse_skill_csv("React, react, REACT, SQL").unwrap();
        assert_eq!(skills, vec!["React", "SQL"]);
    }

    #[test]
    fn test_validate_accepts_all_strings() {
        let raw = json!(["React", "SQL"]);
        assert!(validate_skill_values("skills", &raw).is_ok());
    }

    #[test]
    fn test_validate_rejects_non_string_with_index() {
        let raw = json!(["React", 42, "SQL"]);
        let err = validate_skill_values("skills", &raw).unwrap_err();
        match err {
            AppError::InvalidSkillEntry { field, index } => {
                assert_eq!(field, "skills");
                assert_eq!(index, 1);
            }
            other => panic!("expected InvalidSkillEntry, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_ignores_missing_field() {
        // Leave shape errors to serde's typed decode.
        assert!(validate_skill_values("skills", &json!(null)).is_ok());
        assert!(validate_skill_values("skills", &json!("oops")).is_ok());
    }
}
