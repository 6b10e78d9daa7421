//! Attendance aggregation over an in-memory roster.
//!
//! Everything here is a pure read of the players passed in. "Total days" is
//! always roster-wide: the number of distinct dates on which the coach took
//! attendance for anyone, so percentages compare across players.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};

use crate::model::period::{ReportingPeriod, YearMonth};
use crate::model::player::{AttendanceMark, Player};
use crate::service::dto::{AttendanceSummary, DailyPresentCount, DayMark, RankingEntry};

/// Dates on which at least one player has a present/absent mark.
pub fn all_marked_dates(players: &[Player]) -> BTreeSet<NaiveDate> {
    players
        .iter()
        .flat_map(|p| p.marked_dates().map(|(date, _)| date))
        .collect()
}

pub fn compute_attendance(
    player: &Player,
    period: &ReportingPeriod,
    all_marked_dates: &BTreeSet<NaiveDate>,
) -> AttendanceSummary {
    let present_count = player
        .marked_dates()
        .filter(|(date, mark)| mark.is_present() && period.contains(*date))
        .count();
    AttendanceSummary::new(present_count, all_marked_dates.len())
}

/// Highest percentage first. Ties keep roster order.
pub fn rank_players(players: &[Player], period: &ReportingPeriod, top_n: usize) -> Vec<RankingEntry> {
    let mut ranked = rank_all(players, period);
    ranked.truncate(top_n);
    ranked
}

pub(crate) fn rank_all(players: &[Player], period: &ReportingPeriod) -> Vec<RankingEntry> {
    let marked = all_marked_dates(players);
    let mut entries: Vec<RankingEntry> = players
        .iter()
        .map(|p| RankingEntry::new(p, compute_attendance(p, period, &marked)))
        .collect();
    sort_by_percentage(&mut entries);
    entries
}

fn sort_by_percentage(entries: &mut [RankingEntry]) {
    // sort_by is stable
    entries.sort_by(|a, b| {
        b.summary
            .percentage
            .partial_cmp(&a.summary.percentage)
            .unwrap_or(Ordering::Equal)
    });
}

/// One entry per calendar day of `month`, ascending.
pub fn daily_present_counts(players: &[Player], month: YearMonth) -> Vec<DailyPresentCount> {
    month
        .days()
        .into_iter()
        .map(|date| DailyPresentCount {
            date,
            day_of_month: date.day(),
            present_count: players.iter().filter(|p| p.mark_on(date).is_present()).count(),
        })
        .collect()
}

/// A single player's sheet for `month`, unmarked days included.
pub fn month_calendar(player: &Player, month: YearMonth) -> Vec<DayMark> {
    month
        .days()
        .into_iter()
        .map(|date| DayMark {
            date,
            mark: player.mark_on(date),
        })
        .collect()
}

pub fn present_on(players: &[Player], date: NaiveDate) -> usize {
    players
        .iter()
        .filter(|p| p.mark_on(date) == AttendanceMark::Present)
        .count()
}
