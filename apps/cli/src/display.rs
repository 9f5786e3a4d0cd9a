//! Terminal presentation — tier colors, the match bar, and status badges.
//! Pure string/color mapping; all printing happens in the command handlers.

use colored::{Color, ColoredString, Colorize};

use crate::matching::{MatchReport, MatchTier};
use crate::models::ApplicationStatus;

const BAR_WIDTH: usize = 20;

/// Tier → terminal color, mirroring the original success/warning/info/danger
/// palette.
pub fn tier_color(tier: MatchTier) -> Color {
    match tier {
        MatchTier::High => Color::Green,
        MatchTier::Medium => Color::Yellow,
        MatchTier::LowMedium => Color::Blue,
        MatchTier::Low => Color::Red,
    }
}

pub fn paint_score(score: u8) -> ColoredString {
    format!("{score}%").color(tier_color(MatchTier::of(score)))
}

/// A fixed-width textual progress bar, e.g. `█████░░░░░░░░░░░░░░░` for 25%.
pub fn match_bar(score: u8) -> String {
    let filled = (score.min(100) as usize * BAR_WIDTH) / 100;
    let mut bar = String::with_capacity(BAR_WIDTH * 3);
    for _ in 0..filled {
        bar.push('█');
    }
    for _ in filled..BAR_WIDTH {
        bar.push('░');
    }
    bar
}

pub fn paint_match_bar(score: u8) -> ColoredString {
    match_bar(score).color(tier_color(MatchTier::of(score)))
}

pub fn status_color(status: ApplicationStatus) -> Color {
    match status {
        ApplicationStatus::Applied => Color::White,
        ApplicationStatus::UnderReview => Color::Yellow,
        ApplicationStatus::Selected => Color::Green,
        ApplicationStatus::Rejected => Color::Red,
    }
}

pub fn status_badge(status: ApplicationStatus) -> ColoredString {
    format!("[{}]", status.label()).color(status_color(status))
}

/// One-line match summary: score, tier label, and the bar.
pub fn match_summary(report: &MatchReport) -> String {
    format!(
        "{} {} ({})",
        paint_match_bar(report.score),
        paint_score(report.score),
        report.tier().label()
    )
}

/// Short id shown in tables; commands accept this prefix back.
pub fn short_id(id: uuid::Uuid) -> String {
    id.to_string()[..8].to_string()
}

pub fn rupees(amount: u32) -> String {
    format!("₹{amount}/month")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_bar_widths() {
        assert_eq!(match_bar(0), "░".repeat(20));
        assert_eq!(match_bar(100), "█".repeat(20));
        let quarter = match_bar(25);
        assert_eq!(quarter.chars().filter(|&c| c == '█').count(), 5);
        assert_eq!(quarter.chars().count(), 20);
    }

    #[test]
    fn test_match_bar_clamps_overflow() {
        assert_eq!(match_bar(255), "█".repeat(20));
    }

    #[test]
    fn test_tier_palette() {
        assert_eq!(tier_color(MatchTier::High), Color::Green);
        assert_eq!(tier_color(MatchTier::Medium), Color::Yellow);
        assert_eq!(tier_color(MatchTier::LowMedium), Color::Blue);
        assert_eq!(tier_color(MatchTier::Low), Color::Red);
    }

    #[test]
    fn test_short_id_is_prefix() {
        let id = uuid::Uuid::new_v4();
        assert!(id.to_string().starts_with(&short_id(id)));
        assert_eq!(short_id(id).len(), 8);
    }
}
