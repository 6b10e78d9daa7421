use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::model::player::{CoachNote, Player, PlayerMetric};
use crate::time::academy_offset;

pub trait Recorded {
    fn recorded_at(&self) -> DateTime<Utc>;
}

impl Recorded for CoachNote {
    fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}

impl Recorded for PlayerMetric {
    fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup<'a, T> {
    pub date: NaiveDate,
    pub entries: Vec<&'a T>,
}

/// Buckets entries by local calendar day (`offset` from UTC). Days newest
/// first, entries oldest first within a day.
pub fn group_by_day<T: Recorded>(entries: &[T], offset: Duration) -> Vec<DayGroup<'_, T>> {
    let mut days: BTreeMap<NaiveDate, Vec<&T>> = BTreeMap::new();
    for entry in entries {
        let local_day = (entry.recorded_at() + offset).date_naive();
        days.entry(local_day).or_default().push(entry);
    }

    days.into_iter()
        .rev()
        .map(|(date, mut entries)| {
            entries.sort_by_key(|e| e.recorded_at());
            DayGroup { date, entries }
        })
        .collect()
}

pub struct PlayerJournal<'a> {
    pub player: &'a Player,
    pub notes: Vec<DayGroup<'a, CoachNote>>,
    pub metrics: Vec<DayGroup<'a, PlayerMetric>>,
}

impl<'a> PlayerJournal<'a> {
    pub fn new(player: &'a Player) -> Self {
        Self {
            player,
            notes: group_by_day(&player.notes, academy_offset()),
            metrics: group_by_day(&player.metrics, academy_offset()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty() && self.metrics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn test_group_by_day_newest_day_first() {
        let notes = vec![
            CoachNote::new("second".to_string(), at(2024, 3, 1, 10, 0)),
            CoachNote::new("first".to_string(), at(2024, 3, 1, 8, 0)),
            CoachNote::new("later day".to_string(), at(2024, 3, 4, 8, 0)),
        ];
        let groups = group_by_day(&notes, Duration::zero());

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].date, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
        let texts: Vec<&str> = groups[1].entries.iter().map(|n| n.note.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[test]
    fn test_group_by_day_uses_local_offset() {
        // 20:00 UTC is already the next morning in IST
        let metrics = vec![PlayerMetric::new("Free throws".to_string(), "7/10".to_string(), at(2024, 3, 1, 20, 0))];
        let groups = group_by_day(&metrics, academy_offset());
        assert_eq!(groups[0].date, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
    }

    #[test]
    fn test_empty_journal() {
        let player = Player::new(1, "A");
        assert!(PlayerJournal::new(&player).is_empty());
    }
}
