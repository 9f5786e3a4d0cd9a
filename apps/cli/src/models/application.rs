use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle of an application, advanced by admin triage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Applied,
    #[serde(rename = "Under Review")]
    UnderReview,
    Selected,
    Rejected,
}

impl ApplicationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::UnderReview => "Under Review",
            ApplicationStatus::Selected => "Selected",
            ApplicationStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    /// Accepts the display form plus forgiving CLI spellings
    /// ("under-review", "under_review", any case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "applied" => Ok(ApplicationStatus::Applied),
            "under review" => Ok(ApplicationStatus::UnderReview),
            "selected" => Ok(ApplicationStatus::Selected),
            "rejected" => Ok(ApplicationStatus::Rejected),
            _ => Err(format!(
                "unknown status '{s}' (expected one of: applied, under-review, selected, rejected)"
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub id: Uuid,
    pub student_id: Uuid,
    pub listing_id: Uuid,
    pub applied_at: DateTime<Utc>,
    pub status: ApplicationStatus,
    /// Match score frozen at apply time, so later profile edits don't
    /// rewrite application history.
    pub match_score: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serde_uses_display_strings() {
        let json = serde_json::to_string(&ApplicationStatus::UnderReview).unwrap();
        assert_eq!(json, r#""Under Review""#);
        let back: ApplicationStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ApplicationStatus::UnderReview);
    }

    #[test]
    fn test_status_from_str_forgiving_spellings() {
        assert_eq!(
            "under-review".parse::<ApplicationStatus>().unwrap(),
            ApplicationStatus::UnderReview
        );
        assert_eq!(
            "SELECTED".parse::<ApplicationStatus>().unwrap(),
            ApplicationStatus::Selected
        );
        assert_eq!(
            " applied ".parse::<ApplicationStatus>().unwrap(),
            ApplicationStatus::Applied
        );
    }

    #[test]
    fn test_status_from_str_rejects_unknown() {
        assert!("pending".parse::<ApplicationStatus>().is_err());
    }
}
