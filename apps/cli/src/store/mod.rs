//! Persistence — an explicit repository seam instead of ambient storage.
//!
//! Every collection the app owns (users, listings, applications, the current
//! session) goes through the `Store` trait, so the matcher, ranking, and all
//! services stay pure and independently testable. The shipped backend is
//! `JsonStore` — one JSON file per collection under the data directory.

pub mod json;
pub mod memory;
pub mod seed;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{Application, ApplicationStatus, Listing, User};

pub use json::JsonStore;

/// Repository of all persistent state. Object-safe; carried in `AppState`
/// as `Arc<dyn Store>`.
#[async_trait]
pub trait Store: Send + Sync {
    // ── Users ───────────────────────────────────────────────────────────
    async fn list_users(&self) -> Result<Vec<User>, AppError>;
    async fn get_user(&self, id: Uuid) -> Result<Option<User>, AppError>;
    /// Email lookup is case-insensitive.
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn insert_user(&self, user: User) -> Result<(), AppError>;
    /// Replaces the user with the same id. Returns false if absent.
    async fn update_user(&self, user: User) -> Result<bool, AppError>;

    // ── Listings ────────────────────────────────────────────────────────
    async fn list_listings(&self) -> Result<Vec<Listing>, AppError>;
    async fn get_listing(&self, id: Uuid) -> Result<Option<Listing>, AppError>;
    async fn insert_listing(&self, listing: Listing) -> Result<(), AppError>;
    async fn update_listing(&self, listing: Listing) -> Result<bool, AppError>;
    async fn delete_listing(&self, id: Uuid) -> Result<bool, AppError>;

    // ── Applications ────────────────────────────────────────────────────
    async fn list_applications(&self) -> Result<Vec<Application>, AppError>;
    async fn get_application(&self, id: Uuid) -> Result<Option<Application>, AppError>;
    async fn insert_application(&self, application: Application) -> Result<(), AppError>;
    async fn set_application_status(
        &self,
        id: Uuid,
        status: ApplicationStatus,
    ) -> Result<bool, AppError>;

    // ── Session ─────────────────────────────────────────────────────────
    async fn current_session(&self) -> Result<Option<Uuid>, AppError>;
    async fn set_session(&self, user_id: Uuid) -> Result<(), AppError>;
    async fn clear_session(&self) -> Result<(), AppError>;

    /// Drops every collection and the session. Used by forced re-seeding.
    async fn clear_all(&self) -> Result<(), AppError>;
}
