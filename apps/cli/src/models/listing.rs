use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: Uuid,
    pub company: String,
    pub role: String,
    pub description: String,
    pub domain: String,
    pub location: String,
    /// Monthly stipend in rupees.
    pub stipend: u32,
    pub deadline: NaiveDate,
    pub required_skills: Vec<String>,
    pub posted_by: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Listing {
    /// Whole days until the application deadline; negative once passed.
    pub fn days_left(&self, today: NaiveDate) -> i64 {
        (self.deadline - today).num_days()
    }

    pub fn is_open(&self, today: NaiveDate) -> bool {
        self.days_left(today) > 0
    }
}
