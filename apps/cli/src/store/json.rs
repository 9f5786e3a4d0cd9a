//! JSON-file store — one pretty-printed file per collection under the data
//! directory. Each operation is a whole-file read-modify-write; collections
//! are tens of records, so no indexing or locking discipline is needed in
//! this single-user simulation.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::skills::validate_skill_values;
use crate::models::{Application, ApplicationStatus, Listing, User};
use crate::store::Store;

const USERS_FILE: &str = "users.json";
const LISTINGS_FILE: &str = "listings.json";
const APPLICATIONS_FILE: &str = "applications.json";
const SESSION_FILE: &str = "session.json";

#[derive(Debug, Serialize, Deserialize)]
struct SessionRecord {
    user_id: Uuid,
}

#[derive(Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Reads a whole collection. A missing file is an empty collection.
    /// `skills_field` names a skill-list field to validate strictly before
    /// typed decoding — non-string entries fail with the offending index.
    async fn load_collection<T: DeserializeOwned>(
        &self,
        file: &str,
        skills_field: Option<&str>,
    ) -> Result<Vec<T>, AppError> {
        let path = self.dir.join(file);
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let values: Vec<Value> = serde_json::from_str(&raw)?;
        if let Some(field) = skills_field {
            for value in &values {
                validate_skill_values(field, value.get(field).unwrap_or(&Value::Null))?;
            }
        }

        Ok(serde_json::from_value(Value::Array(values))?)
    }

    async fn save_collection<T: Serialize>(
        &self,
        file: &str,
        items: &[T],
    ) -> Result<(), AppError> {
        let raw = serde_json::to_string_pretty(items)?;
        self.write_atomic(file, raw).await?;
        debug!(file, count = items.len(), "saved collection");
        Ok(())
    }

    /// Writes to a sibling temp file and renames it into place, so a crash
    /// mid-write never leaves a truncated collection behind.
    async fn write_atomic(&self, file: &str, raw: String) -> Result<(), AppError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let tmp = self.dir.join(format!("{file}.tmp"));
        tokio::fs::write(&tmp, raw).await?;
        tokio::fs::rename(&tmp, self.dir.join(file)).await?;
        Ok(())
    }

    async fn load_users(&self) -> Result<Vec<User>, AppError> {
        self.load_collection(USERS_FILE, Some("skills")).await
    }

    async fn load_listings(&self) -> Result<Vec<Listing>, AppError> {
        self.load_collection(LISTINGS_FILE, Some("required_skills"))
            .await
    }

    async fn load_applications(&self) -> Result<Vec<Application>, AppError> {
        self.load_collection(APPLICATIONS_FILE, None).await
    }
}

#[async_trait]
impl Store for JsonStore {
    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.load_users().await
    }

    async fn get_user(&self, id: Uuid) -> Result<Option<User>, AppError> {
        Ok(self.load_users().await?.into_iter().find(|u| u.id == id))
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .load_users()
            .await?
            .into_iter()
            .find(|u| u.email.eq_ignore_ascii_case(email)))
    }

    async fn insert_user(&self, user: User) -> Result<(), AppError> {
        let mut users = self.load_users().await?;
        debug!(user_id = %user.id, "inserting user");
        users.push(user);
        self.save_collection(USERS_FILE, &users).await
    }

    async fn update_user(&self, user: User) -> Result<bool, AppError> {
        let mut users = self.load_users().await?;
        let Some(slot) = users.iter_mut().find(|u| u.id == user.id) else {
            return Ok(false);
        };
        *slot = user;
        self.save_collection(USERS_FILE, &users).await?;
        Ok(true)
    }

    async fn list_listings(&self) -> Result<Vec<Listing>, AppError> {
        self.load_listings().await
    }

    async fn get_listing(&self, id: Uuid) -> Result<Option<Listing>, AppError> {
        Ok(self.load_listings().await?.into_iter().find(|l| l.id == id))
    }

    async fn insert_listing(&self, listing: Listing) -> Result<(), AppError> {
        let mut listings = self.load_listings().await?;
        debug!(listing_id = %listing.id, "inserting listing");
        listings.push(listing);
        self.save_collection(LISTINGS_FILE, &listings).await
    }

    async fn update_listing(&self, listing: Listing) -> Result<bool, AppError> {
        let mut listings = self.load_listings().await?;
        let Some(slot) = listings.iter_mut().find(|l| l.id == listing.id) else {
            return Ok(false);
        };
        *slot = listing;
        self.save_collection(LISTINGS_FILE, &listings).await?;
        Ok(true)
    }

    async fn delete_listing(&self, id: Uuid) -> Result<bool, AppError> {
        let mut listings = self.load_listings().await?;
        let before = listings.len();
        listings.retain(|l| l.id != id);
        if listings.len() == before {
            return Ok(false);
        }
        debug!(listing_id = %id, "deleted listing");
        self.save_collection(LISTINGS_FILE, &listings).await?;
        Ok(true)
    }

    async fn list_applications(&self) -> Result<Vec<Application>, AppError> {
        self.load_applications().await
    }

    async fn get_application(&self, id: Uuid) -> Result<Option<Application>, AppError> {
        Ok(self
            .load_applications()
            .await?
            .into_iter()
            .find(|a| a.id == id))
    }

    async fn insert_application(&self, application: Application) -> Result<(), AppError> {
        let mut applications = self.load_applications().await?;
        debug!(application_id = %application.id, "inserting application");
        applications.push(application);
        self.save_collection(APPLICATIONS_FILE, &applications).await
    }

    async fn set_application_status(
        &self,
        id: Uuid,
        status: ApplicationStatus,
    ) -> Result<bool, AppError> {
        let mut applications = self.load_applications().await?;
        let Some(slot) = applications.iter_mut().find(|a| a.id == id) else {
            return Ok(false);
        };
        slot.status = status;
        debug!(application_id = %id, status = %status, "updated application status");
        self.save_collection(APPLICATIONS_FILE, &applications).await?;
        Ok(true)
    }

    async fn current_session(&self) -> Result<Option<Uuid>, AppError> {
        let path = self.dir.join(SESSION_FILE);
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let record: SessionRecord = serde_json::from_str(&raw)?;
        Ok(Some(record.user_id))
    }

    async fn set_session(&self, user_id: Uuid) -> Result<(), AppError> {
        let raw = serde_json::to_string_pretty(&SessionRecord { user_id })?;
        self.write_atomic(SESSION_FILE, raw).await?;
        debug!(%user_id, "session signed in");
        Ok(())
    }

    async fn clear_session(&self) -> Result<(), AppError> {
        remove_if_present(self.dir.join(SESSION_FILE)).await
    }

    async fn clear_all(&self) -> Result<(), AppError> {
        for file in [USERS_FILE, LISTINGS_FILE, APPLICATIONS_FILE, SESSION_FILE] {
            remove_if_present(self.dir.join(file)).await?;
        }
        debug!("cleared all collections");
        Ok(())
    }
}

async fn remove_if_present(path: PathBuf) -> Result<(), AppError> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use tempfile::TempDir;

    use crate::models::Role;

    fn make_store() -> (TempDir, JsonStore) {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path());
        (dir, store)
    }

    fn make_user(email: &str) -> User {
        User {
            id: Uuid::new_v4(),
            name: "Test".to_string(),
            email: email.to_string(),
            password: "pw".to_string(),
            role: Role::Student,
            skills: vec!["React".to_string()],
            created_at: Utc::now(),
        }
    }

    fn make_listing() -> Listing {
        Listing {
            id: Uuid::new_v4(),
            company: "Acme".to_string(),
            role: "Intern".to_string(),
            description: "desc".to_string(),
            domain: "Web Development".to_string(),
            location: "Remote".to_string(),
            stipend: 10000,
            deadline: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
            required_skills: vec!["React".to_string()],
            posted_by: Uuid::new_v4(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_missing_files_are_empty_collections() {
        let (_dir, store) = make_store();
        assert!(store.list_users().await.unwrap().is_empty());
        assert!(store.list_listings().await.unwrap().is_empty());
        assert!(store.list_applications().await.unwrap().is_empty());
        assert!(store.current_session().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_user_roundtrip_and_email_lookup() {
        let (_dir, store) = make_store();
        let user = make_user("arjun@mit.edu");
        store.insert_user(user.clone()).await.unwrap();

        let found = store.find_user_by_email("ARJUN@MIT.EDU").await.unwrap();
        assert_eq!(found.unwrap().id, user.id);
        assert!(store
            .find_user_by_email("nobody@mit.edu")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_update_user_replaces_by_id() {
        let (_dir, store) = make_store();
        let mut user = make_user("a@b.c");
        store.insert_user(user.clone()).await.unwrap();

        user.skills = vec!["SQL".to_string()];
        assert!(store.update_user(user.clone()).await.unwrap());
        let loaded = store.get_user(user.id).await.unwrap().unwrap();
        assert_eq!(loaded.skills, vec!["SQL"]);

        let ghost = make_user("ghost@b.c");
        assert!(!store.update_user(ghost).await.unwrap());
    }

    #[tokio::test]
    async fn test_listing_crud() {
        let (_dir, store) = make_store();
        let mut listing = make_listing();
        store.insert_listing(listing.clone()).await.unwrap();

        listing.stipend = 20000;
        assert!(store.update_listing(listing.clone()).await.unwrap());
        assert_eq!(
            store.get_listing(listing.id).await.unwrap().unwrap().stipend,
            20000
        );

        assert!(store.delete_listing(listing.id).await.unwrap());
        assert!(!store.delete_listing(listing.id).await.unwrap());
        assert!(store.get_listing(listing.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_application_status_update() {
        let (_dir, store) = make_store();
        let application = Application {
            id: Uuid::new_v4(),
            student_id: Uuid::new_v4(),
            listing_id: Uuid::new_v4(),
            applied_at: Utc::now(),
            status: ApplicationStatus::Applied,
            match_score: 50,
        };
        store.insert_application(application.clone()).await.unwrap();

        assert!(store
            .set_application_status(application.id, ApplicationStatus::Selected)
            .await
            .unwrap());
        let loaded = store.get_application(application.id).await.unwrap().unwrap();
        assert_eq!(loaded.status, ApplicationStatus::Selected);

        assert!(!store
            .set_application_status(Uuid::new_v4(), ApplicationStatus::Rejected)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_session_roundtrip() {
        let (_dir, store) = make_store();
        let id = Uuid::new_v4();
        store.set_session(id).await.unwrap();
        assert_eq!(store.current_session().await.unwrap(), Some(id));
        store.clear_session().await.unwrap();
        assert!(store.current_session().await.unwrap().is_none());
        // Clearing an absent session is fine.
        store.clear_session().await.unwrap();
    }

    #[tokio::test]
    async fn test_non_string_skill_entry_fails_loudly() {
        let (dir, store) = make_store();
        let raw = r#"[{
            "id": "6f7c9a9e-8f07-4f54-bb87-0f2f65c0d6a1",
            "name": "Broken",
            "email": "x@y.z",
            "password": "pw",
            "role": "student",
            "skills": ["React", 42],
            "created_at": "2026-01-01T00:00:00Z"
        }]"#;
        std::fs::write(dir.path().join("users.json"), raw).unwrap();

        let err = store.list_users().await.unwrap_err();
        match err {
            AppError::InvalidSkillEntry { field, index } => {
                assert_eq!(field, "skills");
                assert_eq!(index, 1);
            }
            other => panic!("expected InvalidSkillEntry, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_writes_leave_no_temp_files_behind() {
        let (dir, store) = make_store();
        store.insert_user(make_user("a@b.c")).await.unwrap();
        store.set_session(Uuid::new_v4()).await.unwrap();

        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .filter(|name| name.ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty(), "temp files left behind: {leftovers:?}");
    }

    #[tokio::test]
    async fn test_clear_all_empties_every_collection() {
        let (_dir, store) = make_store();
        store.insert_user(make_user("a@b.c")).await.unwrap();
        store.insert_listing(make_listing()).await.unwrap();
        store.set_session(Uuid::new_v4()).await.unwrap();

        store.clear_all().await.unwrap();
        assert!(store.list_users().await.unwrap().is_empty());
        assert!(store.list_listings().await.unwrap().is_empty());
        assert!(store.current_session().await.unwrap().is_none());
        // Clearing an already-empty store is fine.
        store.clear_all().await.unwrap();
    }

    #[tokio::test]
    async fn test_files_are_human_editable_json_arrays() {
        let (dir, store) = make_store();
        store.insert_user(make_user("a@b.c")).await.unwrap();
        let raw = std::fs::read_to_string(dir.path().join("users.json")).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.len(), 1);
        assert!(raw.contains('\n'), "collections are pretty-printed");
    }
}
