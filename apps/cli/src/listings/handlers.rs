//! Listing commands: browse, show, post, edit, delete, domains.

use chrono::Utc;
use colored::Colorize;

use crate::applications::has_applied;
use crate::auth;
use crate::catalog::{DOMAINS, LOCATIONS};
use crate::display::{match_summary, paint_score, rupees, short_id};
use crate::errors::AppError;
use crate::listings::{
    delete_listing, edit_listing, find_listing, parse_deadline, post_listing, ListingDraft,
};
use crate::matching::ranking::{browse_listings, ListingFilter, SortKey};
use crate::matching::skills::parse_skill_csv;
use crate::state::AppState;

/// Raw CLI field set for `post` and `edit`, parsed into a `ListingDraft`.
pub struct DraftArgs {
    pub company: String,
    pub role: String,
    pub description: String,
    pub domain: String,
    pub location: String,
    pub stipend: u32,
    pub deadline: String,
    pub skills: String,
}

impl DraftArgs {
    fn into_draft(self) -> Result<ListingDraft, AppError> {
        Ok(ListingDraft {
            company: self.company,
            role: self.role,
            description: self.description,
            domain: self.domain,
            location: self.location,
            stipend: self.stipend,
            deadline: parse_deadline(&self.deadline)?,
            required_skills: parse_skill_csv(&self.skills)?,
        })
    }
}

pub async fn handle_browse(
    state: &AppState,
    search: Option<String>,
    domain: Option<String>,
    location: Option<String>,
    min_stipend: Option<u32>,
    sort: &str,
) -> Result<(), AppError> {
    let sort: SortKey = sort.parse().map_err(AppError::Validation)?;
    let viewer = auth::current_user(state.store.as_ref()).await?;
    let candidate_skills = viewer
        .as_ref()
        .filter(|u| u.is_student())
        .map(|u| u.skills.clone())
        .unwrap_or_default();
    let show_scores = viewer.as_ref().map_or(false, |u| u.is_student());

    let filter = ListingFilter {
        search,
        domain,
        location,
        min_stipend,
    };
    let listings = state.store.list_listings().await?;
    let ranked = browse_listings(
        state.matcher.as_ref(),
        &candidate_skills,
        listings,
        &filter,
        sort,
    );

    if ranked.is_empty() {
        println!("No internships match your filters.");
        return Ok(());
    }

    println!(
        "{} internship{} found{}",
        ranked.len(),
        if ranked.len() == 1 { "" } else { "s" },
        if show_scores && sort == SortKey::Match {
            " · sorted by your match score"
        } else {
            ""
        }
    );
    println!();

    let today = Utc::now().date_naive();
    for entry in &ranked {
        let listing = &entry.listing;
        let days = listing.days_left(today);
        let deadline = if days > 0 {
            format!("{} ({days} days left)", listing.deadline)
        } else {
            format!("{} (passed)", listing.deadline)
        };

        if show_scores {
            println!(
                "{}  {}  {} — {}",
                short_id(listing.id).dimmed(),
                paint_score(entry.report.score),
                listing.role.bold(),
                listing.company
            );
        } else {
            println!(
                "{}  {} — {}",
                short_id(listing.id).dimmed(),
                listing.role.bold(),
                listing.company
            );
        }
        println!(
            "          {} · {} · {} · due {deadline}",
            listing.domain,
            listing.location,
            rupees(listing.stipend)
        );
    }
    Ok(())
}

pub async fn handle_show(state: &AppState, id: &str) -> Result<(), AppError> {
    let listing = find_listing(state.store.as_ref(), id).await?;
    let viewer = auth::current_user(state.store.as_ref()).await?;
    let today = Utc::now().date_naive();

    println!("{} — {}", listing.role.bold(), listing.company);
    println!("{} · {} · {}", listing.domain, listing.location, rupees(listing.stipend));
    let days = listing.days_left(today);
    if days > 0 {
        println!("Deadline: {} ({days} days left)", listing.deadline);
    } else {
        println!("Deadline: {} {}", listing.deadline, "(passed)".red());
    }
    println!();
    println!("{}", listing.description);
    println!();
    println!("Required skills: {}", listing.required_skills.join(", "));

    if let Some(student) = viewer.filter(|u| u.is_student()) {
        let report = state
            .matcher
            .report(&student.skills, &listing.required_skills);
        println!();
        println!("Your match: {}", match_summary(&report));
        if !report.matched.is_empty() {
            println!("  {} {}", "have:".green(), report.matched.join(", "));
        }
        if !report.missing.is_empty() {
            println!("  {} {}", "need:".red(), report.missing.join(", "));
        }
        if has_applied(state.store.as_ref(), student.id, listing.id).await? {
            println!();
            println!("{}", "✓ Already applied".green());
        }
    }
    Ok(())
}

pub async fn handle_post(state: &AppState, args: DraftArgs) -> Result<(), AppError> {
    let admin = auth::require_admin(state.store.as_ref()).await?;
    let listing = post_listing(state.store.as_ref(), &admin, args.into_draft()?).await?;
    println!(
        "{} Posted {} — {} ({})",
        "✓".green(),
        listing.role.bold(),
        listing.company,
        short_id(listing.id)
    );
    Ok(())
}

pub async fn handle_edit(state: &AppState, id: &str, args: DraftArgs) -> Result<(), AppError> {
    auth::require_admin(state.store.as_ref()).await?;
    let existing = find_listing(state.store.as_ref(), id).await?;
    let listing = edit_listing(state.store.as_ref(), existing.id, args.into_draft()?).await?;
    println!("{} Updated {} ({})", "✓".green(), listing.role.bold(), short_id(listing.id));
    Ok(())
}

pub async fn handle_delete(state: &AppState, id: &str) -> Result<(), AppError> {
    auth::require_admin(state.store.as_ref()).await?;
    let listing = find_listing(state.store.as_ref(), id).await?;
    delete_listing(state.store.as_ref(), listing.id).await?;
    println!("{} Deleted {} — {}", "✓".green(), listing.role, listing.company);
    Ok(())
}

pub fn handle_domains() {
    println!("Domains:");
    for domain in DOMAINS {
        println!("  {domain}");
    }
    println!();
    println!("Locations:");
    for location in LOCATIONS {
        println!("  {location}");
    }
}
