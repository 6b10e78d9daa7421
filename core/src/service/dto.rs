use chrono::NaiveDate;
use serde::Serialize;

use crate::model::player::{AttendanceMark, Player};

/// Shown in place of a percentage when no attendance has been taken yet.
pub const NO_PERCENTAGE: &str = "—";

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct AttendanceSummary {
    pub present_count: usize,
    pub total_days: usize,
    /// `None` while the roster has no marked day at all.
    pub percentage: Option<f64>,
}

impl AttendanceSummary {
    pub fn new(present_count: usize, total_days: usize) -> Self {
        let percentage = if total_days == 0 {
            None
        } else {
            Some(present_count as f64 / total_days as f64 * 100.0)
        };
        Self {
            present_count,
            total_days,
            percentage,
        }
    }

    pub fn percentage_label(&self) -> String {
        match self.percentage {
            Some(p) => format!("{:.1}%", p),
            None => NO_PERCENTAGE.to_string(),
        }
    }

    pub fn band(&self) -> AttendanceBand {
        AttendanceBand::from_percentage(self.percentage)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RankingEntry {
    pub player_id: u32,
    pub name: String,
    pub summary: AttendanceSummary,
}

impl RankingEntry {
    pub fn new(player: &Player, summary: AttendanceSummary) -> Self {
        Self {
            player_id: player.id,
            name: player.name.clone(),
            summary,
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyPresentCount {
    pub date: NaiveDate,
    pub day_of_month: u32,
    pub present_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayMark {
    pub date: NaiveDate,
    pub mark: AttendanceMark,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl AttendanceBand {
    pub fn from_percentage(percentage: Option<f64>) -> Self {
        match percentage {
            Some(p) if p >= 90.0 => AttendanceBand::Excellent,
            Some(p) if p >= 70.0 => AttendanceBand::Good,
            Some(p) if p >= 50.0 => AttendanceBand::Fair,
            _ => AttendanceBand::Poor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_percentage() {
        let summary = AttendanceSummary::new(1, 2);
        assert_eq!(summary.percentage, Some(50.0));
        assert_eq!(summary.percentage_label(), "50.0%");

        let empty = AttendanceSummary::new(0, 0);
        assert_eq!(empty.percentage, None);
        assert_eq!(empty.percentage_label(), NO_PERCENTAGE);
    }

    #[test]
    fn test_band_thresholds() {
        assert_eq!(AttendanceBand::from_percentage(Some(90.0)), AttendanceBand::Excellent);
        assert_eq!(AttendanceBand::from_percentage(Some(89.9)), AttendanceBand::Good);
        assert_eq!(AttendanceBand::from_percentage(Some(70.0)), AttendanceBand::Good);
        assert_eq!(AttendanceBand::from_percentage(Some(50.0)), AttendanceBand::Fair);
        assert_eq!(AttendanceBand::from_percentage(Some(49.0)), AttendanceBand::Poor);
        assert_eq!(AttendanceBand::from_percentage(None), AttendanceBand::Poor);
    }
}
