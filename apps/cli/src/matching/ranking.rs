//! Listing ranking and browse filters.
//!
//! Ranking reuses the matcher verbatim — one report per listing — and sorts
//! with a stable descending sort so equal scores keep their input order.

use serde::{Deserialize, Serialize};

use crate::matching::{MatchReport, SkillMatcher};
use crate::models::Listing;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// A listing paired with the signed-in student's match report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedListing {
    pub listing: Listing,
    pub report: MatchReport,
}

/// Browse filters, all optional and conjunctive.
#[derive(Debug, Clone, Default)]
pub struct ListingFilter {
    /// Case-insensitive substring over role, company, and required skills.
    pub search: Option<String>,
    pub domain: Option<String>,
    pub location: Option<String>,
    pub min_stipend: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Descending match score — the default for signed-in students.
    #[default]
    Match,
    /// Descending stipend.
    Stipend,
    /// Ascending deadline (soonest first).
    Deadline,
}

// ────────────────────────────────────────────────────────────────────────────
// Ranking
// ────────────────────────────────────────────────────────────────────────────

/// Scores every listing against the candidate and sorts by descending score.
/// `sort_by` is stable, so ties preserve the listings' original order.
pub fn rank_listings(
    matcher: &dyn SkillMatcher,
    candidate_skills: &[String],
    listings: Vec<Listing>,
) -> Vec<RankedListing> {
    let mut ranked: Vec<RankedListing> = listings
        .into_iter()
        .map(|listing| {
            let report = matcher.report(candidate_skills, &listing.required_skills);
            RankedListing { listing, report }
        })
        .collect();

    ranked.sort_by(|a, b| b.report.score.cmp(&a.report.score));
    ranked
}

/// Applies browse filters, preserving input order.
pub fn filter_listings(listings: Vec<Listing>, filter: &ListingFilter) -> Vec<Listing> {
    listings
        .into_iter()
        .filter(|listing| {
            if let Some(q) = &filter.search {
                let q = q.to_lowercase();
                let hit = listing.role.to_lowercase().contains(&q)
                    || listing.company.to_lowercase().contains(&q)
                    || listing
                        .required_skills
                        .iter()
                        .any(|s| s.to_lowercase().contains(&q));
                if !hit {
                    return false;
                }
            }
            if let Some(domain) = &filter.domain {
                if !listing.domain.eq_ignore_ascii_case(domain) {
                    return false;
                }
            }
            if let Some(location) = &filter.location {
                if !listing.location.eq_ignore_ascii_case(location) {
                    return false;
                }
            }
            if let Some(min) = filter.min_stipend {
                if listing.stipend < min {
                    return false;
                }
            }
            true
        })
        .collect()
}

/// Filters, scores, and sorts listings for the browse view.
pub fn browse_listings(
    matcher: &dyn SkillMatcher,
    candidate_skills: &[String],
    listings: Vec<Listing>,
    filter: &ListingFilter,
    sort: SortKey,
) -> Vec<RankedListing> {
    let filtered = filter_listings(listings, filter);
    let mut ranked = rank_listings(matcher, candidate_skills, filtered);

    match sort {
        SortKey::Match => {} // already sorted by rank_listings
        SortKey::Stipend => {
            ranked.sort_by(|a, b| b.listing.stipend.cmp(&a.listing.stipend));
        }
        SortKey::Deadline => {
            ranked.sort_by(|a, b| a.listing.deadline.cmp(&b.listing.deadline));
        }
    }

    ranked
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "match" => Ok(SortKey::Match),
            "stipend" => Ok(SortKey::Stipend),
            "deadline" => Ok(SortKey::Deadline),
            _ => Err(format!(
                "unknown sort key '{s}' (expected: match, stipend, deadline)"
            )),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::ExactSkillMatcher;
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    fn make_listing(role: &str, required: &[&str]) -> Listing {
        Listing {
            id: Uuid::new_v4(),
            company: "Acme".to_string(),
            role: role.to_string(),
            description: "desc".to_string(),
            domain: "Web Development".to_string(),
            location: "Remote".to_string(),
            stipend: 10000,
            deadline: NaiveDate::from_ymd_opt(2026, 6, 30).unwrap(),
            required_skills: required.iter().map(|s| s.to_string()).collect(),
            posted_by: Uuid::new_v4(),
            created_at: Utc::now(),
        }
    }

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_rank_descending_by_score() {
        let listings = vec![
            make_listing("none", &["Go", "Kafka"]),
            make_listing("full", &["React"]),
            make_listing("half", &["React", "Go"]),
        ];
        let ranked = rank_listings(&ExactSkillMatcher, &skills(&["React"]), listings);
        let roles: Vec<&str> = ranked.iter().map(|r| r.listing.role.as_str()).collect();
        assert_eq!(roles, vec!["full", "half", "none"]);
    }

    #[test]
    fn test_rank_is_stable_on_ties() {
        // Scores 50, 75, 50 in input order must come out 75, then the two
        // 50s in their original relative order.
        let listings = vec![
            make_listing("first-half", &["React", "Go"]),
            make_listing("top", &["React", "JavaScript", "Git", "Go"]),
            make_listing("second-half", &["React", "Kafka"]),
        ];
        let candidate = skills(&["React", "JavaScript", "Git"]);
        let ranked = rank_listings(&ExactSkillMatcher, &candidate, listings);

        assert_eq!(ranked[0].listing.role, "top");
        assert_eq!(ranked[0].report.score, 75);
        assert_eq!(ranked[1].listing.role, "first-half");
        assert_eq!(ranked[2].listing.role, "second-half");
        assert_eq!(ranked[1].report.score, 50);
        assert_eq!(ranked[2].report.score, 50);
    }

    #[test]
    fn test_filter_search_matches_role_company_and_skills() {
        let listings = vec![
            make_listing("Frontend Intern", &["React"]),
            make_listing("Data Intern", &["Pandas"]),
        ];
        let filter = ListingFilter {
            search: Some("react".to_string()),
            ..Default::default()
        };
        let out = filter_listings(listings, &filter);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].role, "Frontend Intern");
    }

    #[test]
    fn test_filter_min_stipend() {
        let mut cheap = make_listing("cheap", &["React"]);
        cheap.stipend = 5000;
        let mut rich = make_listing("rich", &["React"]);
        rich.stipend = 25000;

        let filter = ListingFilter {
            min_stipend: Some(10000),
            ..Default::default()
        };
        let out = filter_listings(vec![cheap, rich], &filter);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].role, "rich");
    }

    #[test]
    fn test_filter_domain_and_location_case_insensitive() {
        let mut a = make_listing("a", &["React"]);
        a.domain = "Data Science".to_string();
        a.location = "Pune".to_string();
        let b = make_listing("b", &["React"]);

        let filter = ListingFilter {
            domain: Some("data science".to_string()),
            location: Some("pune".to_string()),
            ..Default::default()
        };
        let out = filter_listings(vec![a, b], &filter);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].role, "a");
    }

    #[test]
    fn test_browse_sort_by_stipend() {
        let mut low = make_listing("low", &["React"]);
        low.stipend = 8000;
        let mut high = make_listing("high", &["Go"]);
        high.stipend = 30000;

        let ranked = browse_listings(
            &ExactSkillMatcher,
            &skills(&["React"]),
            vec![low, high],
            &ListingFilter::default(),
            SortKey::Stipend,
        );
        assert_eq!(ranked[0].listing.role, "high");
    }

    #[test]
    fn test_browse_sort_by_deadline_soonest_first() {
        let mut late = make_listing("late", &["React"]);
        late.deadline = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        let mut soon = make_listing("soon", &["React"]);
        soon.deadline = NaiveDate::from_ymd_opt(2026, 4, 1).unwrap();

        let ranked = browse_listings(
            &ExactSkillMatcher,
            &skills(&[]),
            vec![late, soon],
            &ListingFilter::default(),
            SortKey::Deadline,
        );
        assert_eq!(ranked[0].listing.role, "soon");
    }

    #[test]
    fn test_sort_key_from_str() {
        assert_eq!("match".parse::<SortKey>().unwrap(), SortKey::Match);
        assert_eq!("Stipend".parse::<SortKey>().unwrap(), SortKey::Stipend);
        assert!("salary".parse::<SortKey>().is_err());
    }
}
