use chrono::NaiveDate;
use serde::Serialize;

use crate::model::period::{ReportingPeriod, YearMonth};
use crate::model::roster::Roster;
use crate::service::aggregator::{all_marked_dates, compute_attendance, rank_all};
use crate::service::dto::{AttendanceSummary, RankingEntry};
use crate::time::week_number;

pub const TOP_RANKERS: usize = 3;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AttendanceLeaderboard {
    pub month: String,
    pub week: u32,
    pub total_marked_days: usize,
    pub weekly: Vec<RankingEntry>,
    pub monthly: Vec<RankingEntry>,
    /// Everyone outside both top lists, by all-time percentage.
    pub remaining: Vec<RankingEntry>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PlayerStanding {
    pub player_id: u32,
    pub name: String,
    pub weekly: AttendanceSummary,
    pub monthly: AttendanceSummary,
    pub overall: AttendanceSummary,
}

pub struct LeaderboardUseCase<'a> {
    roster: &'a Roster,
}

impl<'a> LeaderboardUseCase<'a> {
    pub fn new(roster: &'a Roster) -> Self {
        Self { roster }
    }

    /// Weekly ranks use the week containing `today`; monthly ranks use `month`.
    pub fn build(&self, today: NaiveDate, month: YearMonth, top_n: usize) -> AttendanceLeaderboard {
        let players = self.roster.players();

        let mut weekly = rank_all(players, &ReportingPeriod::weekly(today));
        weekly.truncate(top_n);
        let mut monthly = rank_all(players, &ReportingPeriod::monthly(month, today));
        monthly.truncate(top_n);

        // rank_all output is already ordered, filtering keeps it that way
        let remaining: Vec<RankingEntry> = rank_all(players, &ReportingPeriod::all(today))
            .into_iter()
            .filter(|e| {
                !weekly.iter().any(|w| w.player_id == e.player_id)
                    && !monthly.iter().any(|m| m.player_id == e.player_id)
            })
            .collect();

        AttendanceLeaderboard {
            month: month.to_string(),
            week: week_number(today),
            total_marked_days: all_marked_dates(players).len(),
            weekly,
            monthly,
            remaining,
        }
    }

    pub fn standings(&self, today: NaiveDate, month: YearMonth) -> Vec<PlayerStanding> {
        let players = self.roster.players();
        let marked = all_marked_dates(players);
        let weekly = ReportingPeriod::weekly(today);
        let monthly = ReportingPeriod::monthly(month, today);
        let overall = ReportingPeriod::all(today);

        players
            .iter()
            .map(|p| PlayerStanding {
                player_id: p.id,
                name: p.name.clone(),
                weekly: compute_attendance(p, &weekly, &marked),
                monthly: compute_attendance(p, &monthly, &marked),
                overall: compute_attendance(p, &overall, &marked),
            })
            .collect()
    }
}
