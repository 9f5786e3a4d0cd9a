#![allow(dead_code)]

//! In-memory store used by service tests. Same contract as `JsonStore`,
//! nothing persisted.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{Application, ApplicationStatus, Listing, User};
use crate::store::Store;

#[derive(Default)]
struct Inner {
    users: Vec<User>,
    listings: Vec<Listing>,
    applications: Vec<Application>,
    session: Option<Uuid>,
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        Ok(self.inner.read().await.users.clone())
    }

    async fn get_user(&self, id: Uuid) -> Result<Option<User>, AppError> {
        Ok(self
            .inner
            .read()
            .await
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .inner
            .read()
            .await
            .users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn insert_user(&self, user: User) -> Result<(), AppError> {
        self.inner.write().await.users.push(user);
        Ok(())
    }

    async fn update_user(&self, user: User) -> Result<bool, AppError> {
        let mut inner = self.inner.write().await;
        match inner.users.iter_mut().find(|u| u.id == user.id) {
            Some(slot) => {
                *slot = user;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list_listings(&self) -> Result<Vec<Listing>, AppError> {
        Ok(self.inner.read().await.listings.clone())
    }

    async fn get_listing(&self, id: Uuid) -> Result<Option<Listing>, AppError> {
        Ok(self
            .inner
            .read()
            .await
            .listings
            .iter()
            .find(|l| l.id == id)
            .cloned())
    }

    async fn insert_listing(&self, listing: Listing) -> Result<(), AppError> {
        self.inner.write().await.listings.push(listing);
        Ok(())
    }

    async fn update_listing(&self, listing: Listing) -> Result<bool, AppError> {
        let mut inner = self.inner.write().await;
        match inner.listings.iter_mut().find(|l| l.id == listing.id) {
            Some(slot) => {
                *slot = listing;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_listing(&self, id: Uuid) -> Result<bool, AppError> {
        let mut inner = self.inner.write().await;
        let before = inner.listings.len();
        inner.listings.retain(|l| l.id != id);
        Ok(inner.listings.len() != before)
    }

    async fn list_applications(&self) -> Result<Vec<Application>, AppError> {
        Ok(self.inner.read().await.applications.clone())
    }

    async fn get_application(&self, id: Uuid) -> Result<Option<Application>, AppError> {
        Ok(self
            .inner
            .read()
            .await
            .applications
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn insert_application(&self, application: Application) -> Result<(), AppError> {
        self.inner.write().await.applications.push(application);
        Ok(())
    }

    async fn set_application_status(
        &self,
        id: Uuid,
        status: ApplicationStatus,
    ) -> Result<bool, AppError> {
        let mut inner = self.inner.write().await;
        match inner.applications.iter_mut().find(|a| a.id == id) {
            Some(slot) => {
                slot.status = status;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn current_session(&self) -> Result<Option<Uuid>, AppError> {
        Ok(self.inner.read().await.session)
    }

    async fn set_session(&self, user_id: Uuid) -> Result<(), AppError> {
        self.inner.write().await.session = Some(user_id);
        Ok(())
    }

    async fn clear_session(&self) -> Result<(), AppError> {
        self.inner.write().await.session = None;
        Ok(())
    }

    async fn clear_all(&self) -> Result<(), AppError> {
        *self.inner.write().await = Inner::default();
        Ok(())
    }
}
