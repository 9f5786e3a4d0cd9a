//! Application commands: apply, applications, applicants, set-status,
//! and the role-aware dashboard.

use colored::Colorize;

use crate::applications::{
    admin_stats, applicants, apply, my_applications, set_status, student_stats,
};
use crate::auth;
use crate::display::{match_summary, paint_score, short_id, status_badge};
use crate::errors::AppError;
use crate::listings::find_listing;
use crate::models::ApplicationStatus;
use crate::state::AppState;

pub async fn handle_apply(state: &AppState, id: &str) -> Result<(), AppError> {
    let student = auth::require_student(state.store.as_ref()).await?;
    let listing = find_listing(state.store.as_ref(), id).await?;
    let application = apply(
        state.store.as_ref(),
        state.matcher.as_ref(),
        &student,
        &listing,
    )
    .await?;

    println!(
        "{} Applied to {} — {} with a {} match",
        "✓".green(),
        listing.role.bold(),
        listing.company,
        paint_score(application.match_score)
    );
    Ok(())
}

pub async fn handle_applications(state: &AppState, status: Option<&str>) -> Result<(), AppError> {
    let student = auth::require_student(state.store.as_ref()).await?;
    let status = status
        .map(|s| s.parse::<ApplicationStatus>().map_err(AppError::Validation))
        .transpose()?;

    let tracked = my_applications(state.store.as_ref(), student.id, status).await?;
    if tracked.is_empty() {
        println!("No applications yet. Browse listings with `stipend browse`.");
        return Ok(());
    }

    println!(
        "{} application{}",
        tracked.len(),
        if tracked.len() == 1 { "" } else { "s" }
    );
    println!();
    for entry in &tracked {
        let title = match &entry.listing {
            Some(listing) => format!("{} — {}", listing.role, listing.company),
            None => "(listing removed)".to_string(),
        };
        println!(
            "{}  {}  {}  {} applied {}",
            short_id(entry.application.id).dimmed(),
            status_badge(entry.application.status),
            paint_score(entry.application.match_score),
            title.bold(),
            entry.application.applied_at.format("%Y-%m-%d")
        );
    }
    Ok(())
}

pub async fn handle_applicants(state: &AppState, id: &str) -> Result<(), AppError> {
    auth::require_admin(state.store.as_ref()).await?;
    let listing = find_listing(state.store.as_ref(), id).await?;
    let list = applicants(state.store.as_ref(), listing.id).await?;

    println!("{} — {}", listing.role.bold(), listing.company);
    if list.is_empty() {
        println!("No applicants yet.");
        return Ok(());
    }

    println!(
        "{} applicant{}",
        list.len(),
        if list.len() == 1 { "" } else { "s" }
    );
    println!();
    for entry in &list {
        let name = entry
            .student
            .as_ref()
            .map(|u| u.name.as_str())
            .unwrap_or("(account removed)");
        println!(
            "{}  {}  {}  {}",
            short_id(entry.application.id).dimmed(),
            paint_score(entry.application.match_score),
            status_badge(entry.application.status),
            name.bold()
        );
    }
    println!();
    println!("Triage with: stipend set-status <id> <applied|under-review|selected|rejected>");
    Ok(())
}

pub async fn handle_set_status(state: &AppState, id: &str, status: &str) -> Result<(), AppError> {
    auth::require_admin(state.store.as_ref()).await?;
    let status: ApplicationStatus = status.parse().map_err(AppError::Validation)?;
    let application = set_status(state.store.as_ref(), id, status).await?;
    println!(
        "{} Application {} is now {}",
        "✓".green(),
        short_id(application.id),
        status_badge(status)
    );
    Ok(())
}

/// Role-aware dashboard: students see their pipeline and best open matches,
/// admins see marketplace totals.
pub async fn handle_dashboard(state: &AppState) -> Result<(), AppError> {
    let user = auth::require_user(state.store.as_ref()).await?;

    if user.is_admin() {
        let stats = admin_stats(state.store.as_ref()).await?;
        println!("{}", "Admin dashboard".bold());
        println!("  Total listings:   {}", stats.total_listings);
        println!("  Active listings:  {}", stats.active_listings);
        println!("  Total applicants: {}", stats.total_applicants);
        println!("  Avg match score:  {}", paint_score(stats.avg_match));
        return Ok(());
    }

    let stats = student_stats(state.store.as_ref(), state.matcher.as_ref(), &user).await?;
    println!("{}", format!("Welcome back, {}", user.name).bold());
    println!(
        "  {} application{} — Applied: {}   Under review: {}   Selected: {}   Rejected: {}",
        stats.counts.total(),
        if stats.counts.total() == 1 { "" } else { "s" },
        stats.counts.applied,
        stats.counts.under_review,
        stats.counts.selected,
        stats.counts.rejected
    );
    println!("  Avg match score: {}", paint_score(stats.avg_match));

    if user.skills.is_empty() {
        println!();
        println!("Add skills to see your matches: stipend skills --set \"React, SQL\"");
        return Ok(());
    }

    if !stats.top_matches.is_empty() {
        println!();
        println!("{}", "Top matches for you".bold());
        for entry in &stats.top_matches {
            println!(
                "  {}  {}  {} — {}",
                short_id(entry.listing.id).dimmed(),
                match_summary(&entry.report),
                entry.listing.role,
                entry.listing.company
            );
        }
    }

    if !stats.recent.is_empty() {
        println!();
        println!("{}", "Recent applications".bold());
        for entry in &stats.recent {
            let title = match &entry.listing {
                Some(listing) => format!("{} — {}", listing.role, listing.company),
                None => "(listing removed)".to_string(),
            };
            println!(
                "  {}  {}  {}",
                status_badge(entry.application.status),
                entry.application.applied_at.format("%Y-%m-%d"),
                title
            );
        }
    }
    Ok(())
}
