//! Applications — the student apply/track flow and the admin triage flow,
//! plus the dashboard aggregates both roles see.

pub mod handlers;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::ranking::{rank_listings, RankedListing};
use crate::matching::SkillMatcher;
use crate::models::{Application, ApplicationStatus, Listing, User};
use crate::store::Store;

/// One application joined with its listing. The listing is optional because
/// an admin may delete a listing out from under existing applications.
#[derive(Debug, Clone)]
pub struct TrackedApplication {
    pub application: Application,
    pub listing: Option<Listing>,
}

/// One application joined with the applicant, for the admin triage view.
#[derive(Debug, Clone)]
pub struct Applicant {
    pub application: Application,
    pub student: Option<User>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub applied: usize,
    pub under_review: usize,
    pub selected: usize,
    pub rejected: usize,
}

impl StatusCounts {
    pub fn total(&self) -> usize {
        self.applied + self.under_review + self.selected + self.rejected
    }
}

#[derive(Debug, Clone)]
pub struct StudentStats {
    pub counts: StatusCounts,
    /// Average match score across the student's own applications, 0 if none.
    pub avg_match: u8,
    /// Best-scoring listings the student has not applied to yet.
    pub top_matches: Vec<RankedListing>,
    /// Most recent applications, newest first.
    pub recent: Vec<TrackedApplication>,
}

#[derive(Debug, Clone, Copy)]
pub struct AdminStats {
    pub total_listings: usize,
    pub total_applicants: usize,
    /// Average match score across all applications, 0 if none.
    pub avg_match: u8,
    /// Listings whose deadline is still in the future.
    pub active_listings: usize,
}

const DASHBOARD_LIMIT: usize = 3;

// ────────────────────────────────────────────────────────────────────────────
// Student flow
// ────────────────────────────────────────────────────────────────────────────

/// Applies to a listing, freezing the match score computed right now.
/// One application per student per listing.
pub async fn apply(
    store: &dyn Store,
    matcher: &dyn SkillMatcher,
    student: &User,
    listing: &Listing,
) -> Result<Application, AppError> {
    if has_applied(store, student.id, listing.id).await? {
        return Err(AppError::Conflict("already applied".to_string()));
    }

    let report = matcher.report(&student.skills, &listing.required_skills);
    let application = Application {
        id: Uuid::new_v4(),
        student_id: student.id,
        listing_id: listing.id,
        applied_at: Utc::now(),
        status: ApplicationStatus::Applied,
        match_score: report.score,
    };
    store.insert_application(application.clone()).await?;
    info!(
        application_id = %application.id,
        listing_id = %listing.id,
        score = application.match_score,
        "application submitted"
    );
    Ok(application)
}

pub async fn has_applied(
    store: &dyn Store,
    student_id: Uuid,
    listing_id: Uuid,
) -> Result<bool, AppError> {
    Ok(store
        .list_applications()
        .await?
        .iter()
        .any(|a| a.student_id == student_id && a.listing_id == listing_id))
}

/// The student's applications joined with their listings, optionally filtered
/// by status, newest first.
pub async fn my_applications(
    store: &dyn Store,
    student_id: Uuid,
    status: Option<ApplicationStatus>,
) -> Result<Vec<TrackedApplication>, AppError> {
    let listings = store.list_listings().await?;
    let mut tracked: Vec<TrackedApplication> = store
        .list_applications()
        .await?
        .into_iter()
        .filter(|a| a.student_id == student_id)
        .filter(|a| status.map_or(true, |s| a.status == s))
        .map(|application| {
            let listing = listings.iter().find(|l| l.id == application.listing_id).cloned();
            TrackedApplication { application, listing }
        })
        .collect();
    tracked.sort_by(|a, b| b.application.applied_at.cmp(&a.application.applied_at));
    Ok(tracked)
}

pub fn status_counts(applications: &[Application]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for application in applications {
        match application.status {
            ApplicationStatus::Applied => counts.applied += 1,
            ApplicationStatus::UnderReview => counts.under_review += 1,
            ApplicationStatus::Selected => counts.selected += 1,
            ApplicationStatus::Rejected => counts.rejected += 1,
        }
    }
    counts
}

pub async fn student_stats(
    store: &dyn Store,
    matcher: &dyn SkillMatcher,
    student: &User,
) -> Result<StudentStats, AppError> {
    let mine: Vec<Application> = store
        .list_applications()
        .await?
        .into_iter()
        .filter(|a| a.student_id == student.id)
        .collect();

    let counts = status_counts(&mine);
    let avg_match = average_score(mine.iter().map(|a| a.match_score));

    // Top matches exclude listings already applied to.
    let unapplied: Vec<Listing> = store
        .list_listings()
        .await?
        .into_iter()
        .filter(|l| !mine.iter().any(|a| a.listing_id == l.id))
        .collect();
    let mut top_matches = rank_listings(matcher, &student.skills, unapplied);
    top_matches.truncate(DASHBOARD_LIMIT);

    let mut recent = my_applications(store, student.id, None).await?;
    recent.truncate(DASHBOARD_LIMIT);

    Ok(StudentStats {
        counts,
        avg_match,
        top_matches,
        recent,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Admin flow
// ────────────────────────────────────────────────────────────────────────────

/// All applications for one listing, joined with the applicants,
/// best match first.
pub async fn applicants(store: &dyn Store, listing_id: Uuid) -> Result<Vec<Applicant>, AppError> {
    let users = store.list_users().await?;
    let mut applicants: Vec<Applicant> = store
        .list_applications()
        .await?
        .into_iter()
        .filter(|a| a.listing_id == listing_id)
        .map(|application| {
            let student = users.iter().find(|u| u.id == application.student_id).cloned();
            Applicant { application, student }
        })
        .collect();
    applicants.sort_by(|a, b| b.application.match_score.cmp(&a.application.match_score));
    Ok(applicants)
}

/// Admin triage: move an application to a new status. Accepts a full UUID or
/// a unique id prefix.
pub async fn set_status(
    store: &dyn Store,
    id_or_prefix: &str,
    status: ApplicationStatus,
) -> Result<Application, AppError> {
    let application = find_application(store, id_or_prefix).await?;
    store.set_application_status(application.id, status).await?;
    info!(application_id = %application.id, status = %status, "application triaged");
    Ok(Application {
        status,
        ..application
    })
}

pub async fn find_application(
    store: &dyn Store,
    id_or_prefix: &str,
) -> Result<Application, AppError> {
    let needle = id_or_prefix.trim().to_lowercase();
    if needle.is_empty() {
        return Err(AppError::Validation(
            "an application id is required".to_string(),
        ));
    }

    if let Ok(id) = Uuid::parse_str(&needle) {
        return store
            .get_application(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("application {id}")));
    }

    let mut matches: Vec<Application> = store
        .list_applications()
        .await?
        .into_iter()
        .filter(|a| a.id.to_string().starts_with(&needle))
        .collect();

    match matches.len() {
        0 => Err(AppError::NotFound(format!("application '{id_or_prefix}'"))),
        1 => Ok(matches.swap_remove(0)),
        n => Err(AppError::Validation(format!(
            "id prefix '{id_or_prefix}' is ambiguous ({n} applications match)"
        ))),
    }
}

pub async fn admin_stats(store: &dyn Store) -> Result<AdminStats, AppError> {
    let listings = store.list_listings().await?;
    let applications = store.list_applications().await?;
    let today = Utc::now().date_naive();

    Ok(AdminStats {
        total_listings: listings.len(),
        total_applicants: applications.len(),
        avg_match: average_score(applications.iter().map(|a| a.match_score)),
        active_listings: listings.iter().filter(|l| l.is_open(today)).count(),
    })
}

fn average_score(scores: impl Iterator<Item = u8>) -> u8 {
    let (sum, count) = scores.fold((0u32, 0u32), |(s, c), score| (s + score as u32, c + 1));
    if count == 0 {
        0
    } else {
        (sum as f64 / count as f64).round() as u8
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
