//! Skill Matching — pluggable, trait-based matcher that measures a candidate's
//! skill set against a listing's required skills.
//!
//! Default: `ExactSkillMatcher` (case-insensitive set membership, pure,
//! deterministic, fully testable). A fuzzy/semantic matcher can be swapped in
//! later without touching callers — `AppState` holds an `Arc<dyn SkillMatcher>`.

pub mod ranking;
pub mod skills;
pub mod tier;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

pub use tier::MatchTier;

// ────────────────────────────────────────────────────────────────────────────
// Output data model (shared across all matcher backends)
// ────────────────────────────────────────────────────────────────────────────

/// Full match report for one candidate against one listing.
///
/// `matched` and `missing` partition the required-skill list exactly, each
/// preserving the relative order of the input. `score` is the rounded
/// percentage of required skills the candidate covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub score: u8, // 0 – 100
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

impl MatchReport {
    pub fn tier(&self) -> MatchTier {
        MatchTier::of(self.score)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The matcher trait. Implement this to swap matching backends without
/// touching command handlers or ranking code.
///
/// Carried in `AppState` as `Arc<dyn SkillMatcher>`.
pub trait SkillMatcher: Send + Sync {
    fn report(&self, candidate: &[String], required: &[String]) -> MatchReport;
}

/// Exact case-insensitive matcher. This is the only shipped backend; partial
/// matching ("Node" vs "Node.js") is deliberately not performed.
pub struct ExactSkillMatcher;

impl SkillMatcher for ExactSkillMatcher {
    fn report(&self, candidate: &[String], required: &[String]) -> MatchReport {
        compute_match(candidate, required)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core match algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Computes the match report for one candidate/required pair.
///
/// Edge cases are defined results, not errors:
/// - no required skills → score 0, nothing matched, nothing missing
///   (a listing with no stated requirements cannot be "matched")
/// - no candidate skills → score 0, every requirement missing
///
/// Rounding is half-away-from-zero (`f64::round`), so 1 of 8 = 12.5% → 13.
pub fn compute_match(candidate: &[String], required: &[String]) -> MatchReport {
    if required.is_empty() {
        return MatchReport {
            score: 0,
            matched: vec![],
            missing: vec![],
        };
    }

    if candidate.is_empty() {
        return MatchReport {
            score: 0,
            matched: vec![],
            missing: required.to_vec(),
        };
    }

    // Lowercase the candidate set once; membership tests are O(1) per skill.
    let candidate_lower: HashSet<String> =
        candidate.iter().map(|s| s.to_lowercase()).collect();

    let mut matched = Vec::new();
    let mut missing = Vec::new();

    for skill in required {
        if candidate_lower.contains(&skill.to_lowercase()) {
            matched.push(skill.clone());
        } else {
            missing.push(skill.clone());
        }
    }

    let score = (matched.len() as f64 / required.len() as f64 * 100.0).round() as u8;

    MatchReport {
        score,
        matched,
        missing,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
