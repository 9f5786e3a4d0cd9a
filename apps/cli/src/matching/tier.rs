//! Match tiers — coarse presentation buckets derived from a match score.

use serde::{Deserialize, Serialize};

/// Discrete tier for a 0–100 match score. Used purely for presentation
/// (label and color selection); carries no other state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchTier {
    High,
    Medium,
    LowMedium,
    Low,
}

impl MatchTier {
    /// Total over all scores; boundaries are inclusive on the lower edge.
    pub fn of(score: u8) -> Self {
        if score >= 75 {
            MatchTier::High
        } else if score >= 50 {
            MatchTier::Medium
        } else if score >= 25 {
            MatchTier::LowMedium
        } else {
            MatchTier::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchTier::High => "High",
            MatchTier::Medium => "Medium",
            MatchTier::LowMedium => "Low-Medium",
            MatchTier::Low => "Low",
        }
    }
}
