use thiserror::Error;

/// Application-level error type.
/// Command handlers return `Result<T, AppError>`; `main` renders the error
/// and maps it to a process exit code.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Not signed in — run `stipend login` first")]
    Unauthorized,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// A stored skill list contained a non-string entry. Surfaced instead of
    /// silently coercing, so upstream data-quality bugs stay visible.
    #[error("Invalid skill entry at index {index} in '{field}': expected a string")]
    InvalidSkillEntry { field: String, index: usize },

    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Stable machine-readable code, logged alongside the human message.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Conflict(_) => "CONFLICT",
            AppError::Unauthorized => "UNAUTHORIZED",
            AppError::Forbidden(_) => "FORBIDDEN",
            AppError::InvalidSkillEntry { .. } => "INVALID_SKILL_ENTRY",
            AppError::Io(_) => "STORE_IO_ERROR",
            AppError::Decode(_) => "STORE_DECODE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::NotFound(_) => 4,
            AppError::Validation(_) | AppError::Conflict(_) => 2,
            AppError::Unauthorized | AppError::Forbidden(_) => 3,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_and_exit_codes() {
        assert_eq!(AppError::Unauthorized.code(), "UNAUTHORIZED");
        assert_eq!(AppError::Unauthorized.exit_code(), 3);
        assert_eq!(AppError::Validation("x".into()).exit_code(), 2);
        assert_eq!(AppError::NotFound("x".into()).exit_code(), 4);
    }

    #[test]
    fn test_invalid_skill_entry_message_names_field_and_index() {
        let err = AppError::InvalidSkillEntry {
            field: "required_skills".to_string(),
            index: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("required_skills"));
        assert!(msg.contains("index 2"));
    }
}
