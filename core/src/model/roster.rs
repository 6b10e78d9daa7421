use anyhow::{anyhow, bail, Result};
use chrono::{DateTime, NaiveDate, Utc};

use crate::model::period::YearMonth;
use crate::model::player::{AttendanceMark, CoachNote, FeePayment, NewPlayer, Player, PlayerMetric};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Every change a screen can make to the roster.
#[derive(Debug, Clone, PartialEq)]
pub enum RosterAction {
    AddPlayer { player: NewPlayer, joined: NaiveDate },
    DeletePlayer { id: u32 },
    ToggleAttendance { id: u32, date: NaiveDate },
    SetAttendance { id: u32, date: NaiveDate, mark: AttendanceMark },
    MarkFeePaid { id: u32, month: YearMonth, paid_on: NaiveDate, amount: Option<f64> },
    AddNote { id: u32, note: String, recorded_at: DateTime<Utc> },
    AddMetric { id: u32, name: String, value: String, recorded_at: DateTime<Utc> },
    SetRating { id: u32, rating: u8 },
}

/// The academy's players in registration order.
///
/// [`Roster::apply`] hands back the next state and leaves `self` untouched,
/// including when the action is rejected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn get(&self, id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn next_id(&self) -> u32 {
        self.players.iter().map(|p| p.id).max().map_or(1, |max| max + 1)
    }

    pub fn apply(&self, action: RosterAction) -> Result<Roster> {
        let mut next = self.clone();
        match action {
            RosterAction::AddPlayer { player, joined } => {
                if player.name.trim().is_empty() {
                    bail!("Player name is required");
                }
                let id = next.next_id();
                next.players.push(Player::from_new(id, player, joined));
            }
            RosterAction::DeletePlayer { id } => {
                let initial_len = next.players.len();
                next.players.retain(|p| p.id != id);
                if next.players.len() == initial_len {
                    return Err(not_found(id));
                }
            }
            RosterAction::ToggleAttendance { id, date } => {
                next.player_mut(id)?.toggle_attendance(date);
            }
            RosterAction::SetAttendance { id, date, mark } => {
                next.player_mut(id)?.set_mark(date, mark);
            }
            RosterAction::MarkFeePaid { id, month, paid_on, amount } => {
                if amount.is_some_and(|a| !a.is_finite() || a < 0.0) {
                    bail!("Fee amount must be a non-negative number");
                }
                next.player_mut(id)?.record_fee(month, FeePayment { paid_on, amount });
            }
            RosterAction::AddNote { id, note, recorded_at } => {
                let note = note.trim();
                if note.is_empty() {
                    bail!("Note is empty");
                }
                next.player_mut(id)?
                    .notes
                    .push(CoachNote::new(note.to_string(), recorded_at));
            }
            RosterAction::AddMetric { id, name, value, recorded_at } => {
                let (name, value) = (name.trim(), value.trim());
                if name.is_empty() || value.is_empty() {
                    bail!("Metric needs both a name and a value");
                }
                next.player_mut(id)?
                    .metrics
                    .push(PlayerMetric::new(name.to_string(), value.to_string(), recorded_at));
            }
            RosterAction::SetRating { id, rating } => {
                if !(MIN_RATING..=MAX_RATING).contains(&rating) {
                    bail!("Rating must be between {} and {}", MIN_RATING, MAX_RATING);
                }
                next.player_mut(id)?.rating = Some(rating);
            }
        }
        Ok(next)
    }

    fn player_mut(&mut self, id: u32) -> Result<&mut Player> {
        self.players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| not_found(id))
    }
}

fn not_found(id: u32) -> anyhow::Error {
    anyhow!("Player with ID {} not found", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn named(name: &str) -> NewPlayer {
        NewPlayer {
            name: name.to_string(),
            ..NewPlayer::default()
        }
    }

    #[test]
    fn test_add_player_ids() {
        let joined = d(2024, 3, 1);
        let roster = Roster::default()
            .apply(RosterAction::AddPlayer { player: named("First"), joined })
            .unwrap();
        assert_eq!(roster.players()[0].id, 1);
        assert_eq!(roster.players()[0].join_date, Some(joined));

        let roster = Roster::new(vec![Player::new(3, "A"), Player::new(7, "B")])
            .apply(RosterAction::AddPlayer { player: named("C"), joined })
            .unwrap();
        assert_eq!(roster.players().last().map(|p| p.id), Some(8));
    }

    #[test]
    fn test_add_player_requires_name() {
        let result = Roster::default().apply(RosterAction::AddPlayer {
            player: named("   "),
            joined: d(2024, 3, 1),
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_leaves_original_untouched() {
        let roster = Roster::new(vec![Player::new(1, "A")]);
        let next = roster
            .apply(RosterAction::ToggleAttendance { id: 1, date: d(2024, 3, 1) })
            .unwrap();

        assert!(roster.players()[0].attendance.is_empty());
        assert_eq!(next.players()[0].mark_on(d(2024, 3, 1)), AttendanceMark::Present);
    }

    #[test]
    fn test_unknown_id_is_an_error() {
        let roster = Roster::new(vec![Player::new(1, "A")]);
        assert!(roster.apply(RosterAction::DeletePlayer { id: 9 }).is_err());
        assert!(roster
            .apply(RosterAction::ToggleAttendance { id: 9, date: d(2024, 3, 1) })
            .is_err());
    }

    #[test]
    fn test_delete_player() {
        let roster = Roster::new(vec![Player::new(1, "A"), Player::new(2, "B")]);
        let next = roster.apply(RosterAction::DeletePlayer { id: 1 }).unwrap();
        assert_eq!(next.len(), 1);
        assert!(next.get(1).is_none());
        assert!(next.get(2).is_some());
    }

    #[test]
    fn test_journal_validation() {
        let roster = Roster::new(vec![Player::new(1, "A")]);
        let now = Utc::now();

        assert!(roster
            .apply(RosterAction::AddNote { id: 1, note: "  ".to_string(), recorded_at: now })
            .is_err());
        assert!(roster
            .apply(RosterAction::AddMetric {
                id: 1,
                name: "Sprint".to_string(),
                value: "".to_string(),
                recorded_at: now,
            })
            .is_err());
        assert!(roster.apply(RosterAction::SetRating { id: 1, rating: 6 }).is_err());
        assert!(roster.apply(RosterAction::SetRating { id: 1, rating: 0 }).is_err());

        let next = roster
            .apply(RosterAction::AddNote { id: 1, note: " Good footwork ".to_string(), recorded_at: now })
            .unwrap()
            .apply(RosterAction::SetRating { id: 1, rating: 4 })
            .unwrap();
        let player = next.get(1).unwrap();
        assert_eq!(player.notes[0].note, "Good footwork");
        assert_eq!(player.rating, Some(4));
    }

    #[test]
    fn test_mark_fee_paid_rejects_negative_amount() {
        let roster = Roster::new(vec![Player::new(1, "A")]);
        let result = roster.apply(RosterAction::MarkFeePaid {
            id: 1,
            month: YearMonth::new(2024, 2),
            paid_on: d(2024, 3, 2),
            amount: Some(-5.0),
        });
        assert!(result.is_err());
    }
}
