use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account role. Admins manage listings and triage applicants; students
/// browse, apply, and maintain a skill profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Admin,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Stored in the clear — real authentication is an explicit non-goal of
    /// this single-user simulation.
    pub password: String,
    pub role: Role,
    pub skills: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn is_student(&self) -> bool {
        self.role == Role::Student
    }
}
