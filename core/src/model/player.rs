use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::model::period::YearMonth;
use crate::time::{iso_key, parse_iso_date};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceMark {
    /// Never written to storage; a missing key reads back as this.
    #[default]
    Unmarked,
    Present,
    Absent,
}

impl AttendanceMark {
    /// unmarked -> present -> absent -> present -> ...
    pub fn toggled(self) -> Self {
        match self {
            AttendanceMark::Unmarked | AttendanceMark::Absent => AttendanceMark::Present,
            AttendanceMark::Present => AttendanceMark::Absent,
        }
    }

    pub fn is_marked(self) -> bool {
        self != AttendanceMark::Unmarked
    }

    pub fn is_present(self) -> bool {
        self == AttendanceMark::Present
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeePayment {
    pub paid_on: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CoachNote {
    pub id: Uuid,
    pub recorded_at: DateTime<Utc>,
    pub note: String,
}

impl CoachNote {
    pub fn new(note: String, recorded_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            recorded_at,
            note,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerMetric {
    pub id: Uuid,
    pub recorded_at: DateTime<Utc>,
    pub name: String,
    pub value: String,
}

impl PlayerMetric {
    pub fn new(name: String, value: String, recorded_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            recorded_at,
            name,
            value,
        }
    }
}

/// Profile fields supplied when a coach registers a player.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewPlayer {
    pub name: String,
    pub position: Option<String>,
    pub dob: Option<NaiveDate>,
    pub contact: Option<String>,
    pub address: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_date: Option<NaiveDate>,

    // Keys are kept as stored ("YYYY-MM-DD") so one bad record does not
    // poison the whole file. Aggregation parses and skips what it can't read.
    #[serde(default, deserialize_with = "lenient_attendance")]
    pub attendance: BTreeMap<String, AttendanceMark>,

    // Keyed by YearMonth::key()
    #[serde(default)]
    pub fees: BTreeMap<String, FeePayment>,

    #[serde(default)]
    pub notes: Vec<CoachNote>,
    #[serde(default)]
    pub metrics: Vec<PlayerMetric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
}

/// Unknown statuses are dropped with a debug log instead of failing the load.
fn lenient_attendance<'de, D>(deserializer: D) -> Result<BTreeMap<String, AttendanceMark>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(key, value)| match AttendanceMark::deserialize(&value) {
            Ok(mark) if mark.is_marked() => Some((key, mark)),
            Ok(_) => None,
            Err(_) => {
                log::debug!("skipping attendance '{}': unknown status {}", key, value);
                None
            }
        })
        .collect())
}

impl Player {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            position: None,
            dob: None,
            contact: None,
            address: None,
            join_date: None,
            attendance: BTreeMap::new(),
            fees: BTreeMap::new(),
            notes: Vec::new(),
            metrics: Vec::new(),
            rating: None,
        }
    }

    pub fn from_new(id: u32, new: NewPlayer, joined: NaiveDate) -> Self {
        Self {
            position: new.position,
            dob: new.dob,
            contact: new.contact,
            address: new.address,
            join_date: Some(joined),
            ..Self::new(id, new.name)
        }
    }

    pub fn mark_on(&self, date: NaiveDate) -> AttendanceMark {
        self.attendance.get(&iso_key(date)).copied().unwrap_or_default()
    }

    pub fn set_mark(&mut self, date: NaiveDate, mark: AttendanceMark) {
        let key = iso_key(date);
        if mark.is_marked() {
            self.attendance.insert(key, mark);
        } else {
            self.attendance.remove(&key);
        }
    }

    /// Returns the mark now stored for `date`.
    pub fn toggle_attendance(&mut self, date: NaiveDate) -> AttendanceMark {
        let next = self.mark_on(date).toggled();
        self.set_mark(date, next);
        next
    }

    /// Marked entries whose key is a valid ISO date.
    pub fn marked_dates(&self) -> impl Iterator<Item = (NaiveDate, AttendanceMark)> + '_ {
        self.attendance
            .iter()
            .filter(|(_, mark)| mark.is_marked())
            .filter_map(move |(key, mark)| match parse_iso_date(key) {
                Ok(date) => Some((date, *mark)),
                Err(_) => {
                    log::debug!("player {}: skipping attendance key '{}'", self.id, key);
                    None
                }
            })
    }

    pub fn fee_for(&self, month: YearMonth) -> Option<&FeePayment> {
        self.fees.get(&month.key())
    }

    pub fn record_fee(&mut self, month: YearMonth, payment: FeePayment) {
        self.fees.insert(month.key(), payment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_toggle_cycle() {
        let mut player = Player::new(1, "Rhythm");
        let date = d(2024, 3, 1);

        assert_eq!(player.mark_on(date), AttendanceMark::Unmarked);
        assert_eq!(player.toggle_attendance(date), AttendanceMark::Present);
        assert_eq!(player.toggle_attendance(date), AttendanceMark::Absent);
        assert_eq!(player.toggle_attendance(date), AttendanceMark::Present);
        assert_eq!(player.attendance.len(), 1);
        assert_eq!(player.attendance.get("2024-03-01"), Some(&AttendanceMark::Present));
    }

    #[test]
    fn test_set_unmarked_removes_key() {
        let mut player = Player::new(1, "Rhythm");
        let date = d(2024, 3, 1);
        player.set_mark(date, AttendanceMark::Absent);
        player.set_mark(date, AttendanceMark::Unmarked);
        assert!(player.attendance.is_empty());
    }

    #[test]
    fn test_marked_dates_skips_bad_keys() {
        let mut player = Player::new(1, "Rhythm");
        player.attendance.insert("2024-03-01".to_string(), AttendanceMark::Present);
        player.attendance.insert("not-a-date".to_string(), AttendanceMark::Present);
        player.attendance.insert("2024-03-02".to_string(), AttendanceMark::Unmarked);

        let dates: Vec<_> = player.marked_dates().collect();
        assert_eq!(dates, vec![(d(2024, 3, 1), AttendanceMark::Present)]);
    }

    #[test]
    fn test_deserialize_stored_record() {
        let json = r#"{
            "id": 4,
            "name": "Ponnu",
            "position": "Point Guard",
            "dob": "2000-04-04",
            "joinDate": "2023-07-01",
            "attendance": { "2024-03-01": "present", "2024-03-02": "absent" },
            "fees": {}
        }"#;
        let player: Player = serde_json::from_str(json).unwrap();
        assert_eq!(player.id, 4);
        assert_eq!(player.join_date, Some(d(2023, 7, 1)));
        assert_eq!(player.mark_on(d(2024, 3, 2)), AttendanceMark::Absent);
        assert!(player.notes.is_empty());
        assert_eq!(player.rating, None);
    }

    #[test]
    fn test_unknown_status_does_not_fail_the_load() {
        let json = r#"{
            "id": 7,
            "name": "Kavya",
            "attendance": {
                "2024-03-01": "present",
                "2024-03-02": "late",
                "2024-03-03": 1,
                "2024-03-04": "unmarked"
            }
        }"#;
        let player: Player = serde_json::from_str(json).unwrap();
        assert_eq!(player.attendance.len(), 1);
        assert_eq!(player.mark_on(d(2024, 3, 1)), AttendanceMark::Present);
        assert_eq!(player.mark_on(d(2024, 3, 2)), AttendanceMark::Unmarked);
    }

    #[test]
    fn test_fee_lookup_by_month() {
        let mut player = Player::new(1, "Rhythm");
        let march = YearMonth::new(2024, 2);
        player.record_fee(march, FeePayment { paid_on: d(2024, 3, 5), amount: Some(1500.0) });

        assert_eq!(player.fee_for(march).map(|p| p.paid_on), Some(d(2024, 3, 5)));
        assert!(player.fee_for(march.shifted(1)).is_none());
        assert!(player.fees.contains_key("2024-03"));
    }
}
