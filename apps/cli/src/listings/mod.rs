//! Listing management — posting, editing, deleting, and lookup.

pub mod handlers;

use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use crate::catalog::is_known_domain;
use crate::errors::AppError;
use crate::models::{Listing, User};
use crate::store::Store;

/// Field set shared by `post` and `edit`, validated as a whole so the caller
/// sees every problem at once.
#[derive(Debug, Clone)]
pub struct ListingDraft {
    pub company: String,
    pub role: String,
    pub description: String,
    pub domain: String,
    pub location: String,
    pub stipend: u32,
    pub deadline: NaiveDate,
    pub required_skills: Vec<String>,
}

impl ListingDraft {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut problems = Vec::new();

        if self.company.trim().is_empty() {
            problems.push("company name is required");
        }
        if self.role.trim().is_empty() {
            problems.push("role title is required");
        }
        if self.description.trim().is_empty() {
            problems.push("description is required");
        }
        if !is_known_domain(&self.domain) {
            problems.push("unknown domain (see `stipend domains`)");
        }
        if self.location.trim().is_empty() {
            problems.push("location is required");
        }
        if self.stipend == 0 {
            problems.push("stipend must be greater than zero");
        }
        if self.required_skills.is_empty() {
            problems.push("at least one required skill is needed");
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(problems.join("; ")))
        }
    }
}

pub fn parse_deadline(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        AppError::Validation(format!("invalid deadline '{raw}' (expected YYYY-MM-DD)"))
    })
}

pub async fn post_listing(
    store: &dyn Store,
    admin: &User,
    draft: ListingDraft,
) -> Result<Listing, AppError> {
    draft.validate()?;
    let listing = Listing {
        id: Uuid::new_v4(),
        company: draft.company,
        role: draft.role,
        description: draft.description,
        domain: draft.domain,
        location: draft.location,
        stipend: draft.stipend,
        deadline: draft.deadline,
        required_skills: draft.required_skills,
        posted_by: admin.id,
        created_at: chrono::Utc::now(),
    };
    store.insert_listing(listing.clone()).await?;
    info!(listing_id = %listing.id, company = %listing.company, "listing posted");
    Ok(listing)
}

pub async fn edit_listing(
    store: &dyn Store,
    id: Uuid,
    draft: ListingDraft,
) -> Result<Listing, AppError> {
    draft.validate()?;
    let existing = store
        .get_listing(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("listing {id}")))?;

    let updated = Listing {
        company: draft.company,
        role: draft.role,
        description: draft.description,
        domain: draft.domain,
        location: draft.location,
        stipend: draft.stipend,
        deadline: draft.deadline,
        required_skills: draft.required_skills,
        ..existing
    };
    store.update_listing(updated.clone()).await?;
    info!(listing_id = %id, "listing updated");
    Ok(updated)
}

pub async fn delete_listing(store: &dyn Store, id: Uuid) -> Result<(), AppError> {
    if !store.delete_listing(id).await? {
        return Err(AppError::NotFound(format!("listing {id}")));
    }
    info!(listing_id = %id, "listing deleted");
    Ok(())
}

/// Resolves a listing by full UUID or unique id prefix — full UUIDs are
/// unwieldy to retype from `browse` output.
pub async fn find_listing(store: &dyn Store, id_or_prefix: &str) -> Result<Listing, AppError> {
    let needle = id_or_prefix.trim().to_lowercase();
    if needle.is_empty() {
        return Err(AppError::Validation("a listing id is required".to_string()));
    }

    if let Ok(id) = Uuid::parse_str(&needle) {
        return store
            .get_listing(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("listing {id}")));
    }

    let mut matches: Vec<Listing> = store
        .list_listings()
        .await?
        .into_iter()
        .filter(|l| l.id.to_string().starts_with(&needle))
        .collect();

    match matches.len() {
        0 => Err(AppError::NotFound(format!("listing '{id_or_prefix}'"))),
        1 => Ok(matches.swap_remove(0)),
        n => Err(AppError::Validation(format!(
            "id prefix '{id_or_prefix}' is ambiguous ({n} listings match)"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::models::Role;
    use crate::store::memory::MemoryStore;
    use crate::store::Store;

    fn make_admin() -> User {
        User {
            id: Uuid::new_v4(),
            name: "Admin".to_string(),
            email: "admin@x.y".to_string(),
            password: "admin123".to_string(),
            role: Role::Admin,
            skills: vec![],
            created_at: Utc::now(),
        }
    }

    fn make_draft() -> ListingDraft {
        ListingDraft {
            company: "Acme".to_string(),
            role: "Backend Intern".to_string(),
            description: "Build APIs".to_string(),
            domain: "Web Development".to_string(),
            location: "Remote".to_string(),
            stipend: 15000,
            deadline: NaiveDate::from_ymd_opt(2026, 11, 1).unwrap(),
            required_skills: vec!["Rust".to_string()],
        }
    }

    #[test]
    fn test_validate_collects_every_problem() {
        let draft = ListingDraft {
            company: " ".to_string(),
            role: String::new(),
            description: String::new(),
            domain: "Astrology".to_string(),
            location: String::new(),
            stipend: 0,
            deadline: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            required_skills: vec![],
        };
        let err = draft.validate().unwrap_err();
        let msg = err.to_string();
        for expected in [
            "company",
            "role",
            "description",
            "domain",
            "location",
            "stipend",
            "required skill",
        ] {
            assert!(msg.contains(expected), "missing '{expected}' in: {msg}");
        }
    }

    #[test]
    fn test_parse_deadline() {
        assert_eq!(
            parse_deadline("2026-11-01").unwrap(),
            NaiveDate::from_ymd_opt(2026, 11, 1).unwrap()
        );
        assert!(parse_deadline("01/11/2026").is_err());
        assert!(parse_deadline("").is_err());
    }

    #[tokio::test]
    async fn test_post_then_edit_then_delete() {
        let store = MemoryStore::new();
        let admin = make_admin();

        let listing = post_listing(&store, &admin, make_draft()).await.unwrap();
        assert_eq!(listing.posted_by, admin.id);

        let mut draft = make_draft();
        draft.stipend = 99000;
        let updated = edit_listing(&store, listing.id, draft).await.unwrap();
        assert_eq!(updated.stipend, 99000);
        assert_eq!(updated.id, listing.id);
        assert_eq!(updated.posted_by, admin.id);

        delete_listing(&store, listing.id).await.unwrap();
        assert!(matches!(
            delete_listing(&store, listing.id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_edit_missing_listing_is_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(
            edit_listing(&store, Uuid::new_v4(), make_draft()).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_find_listing_by_prefix() {
        let store = MemoryStore::new();
        let admin = make_admin();
        let listing = post_listing(&store, &admin, make_draft()).await.unwrap();

        let prefix = &listing.id.to_string()[..8];
        let found = find_listing(&store, prefix).await.unwrap();
        assert_eq!(found.id, listing.id);

        let full = find_listing(&store, &listing.id.to_string()).await.unwrap();
        assert_eq!(full.id, listing.id);

        assert!(matches!(
            find_listing(&store, "ffffffff").await,
            Err(AppError::NotFound(_))
        ));
    }
}
