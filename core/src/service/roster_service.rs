use anyhow::Result;

use crate::model::roster::{Roster, RosterAction};
use crate::model::seed::academy_roster;
use crate::repository::RosterRepository;

/// Sole writer of the roster. Screens read through [`RosterService::roster`]
/// and change it only by dispatching actions.
pub struct RosterService<R: RosterRepository> {
    repo: R,
    roster: Roster,
}

impl<R: RosterRepository> RosterService<R> {
    /// Loads the stored roster, or starts from the academy seed when nothing
    /// has been saved yet.
    pub fn load(repo: R) -> Result<Self> {
        let roster = match repo.load()? {
            Some(players) => Roster::new(players),
            None => {
                log::info!("no stored roster, starting from the academy seed");
                Roster::new(academy_roster())
            }
        };
        Ok(Self { repo, roster })
    }

    pub fn with_roster(repo: R, roster: Roster) -> Self {
        Self { repo, roster }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The new state is saved before it becomes visible. On any error the
    /// current roster stays as it was.
    pub fn dispatch(&mut self, action: RosterAction) -> Result<&Roster> {
        log::debug!("dispatch {:?}", action);
        let next = self.roster.apply(action)?;
        self.repo.save(next.players())?;
        self.roster = next;
        log::info!("roster saved ({} players)", self.roster.len());
        Ok(&self.roster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::player::{AttendanceMark, NewPlayer, Player};
    use anyhow::anyhow;
    use chrono::NaiveDate;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct MockRosterRepo {
        stored: RefCell<Option<Vec<Player>>>,
        saves: Cell<usize>,
        fail_saves: bool,
    }

    impl RosterRepository for &MockRosterRepo {
        fn load(&self) -> Result<Option<Vec<Player>>> {
            Ok(self.stored.borrow().clone())
        }

        fn save(&self, players: &[Player]) -> Result<()> {
            if self.fail_saves {
                return Err(anyhow!("disk full"));
            }
            self.saves.set(self.saves.get() + 1);
            *self.stored.borrow_mut() = Some(players.to_vec());
            Ok(())
        }
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_load_seeds_when_empty() {
        let repo = MockRosterRepo::default();
        let service = RosterService::load(&repo).unwrap();
        assert_eq!(service.roster().len(), 16);
        assert_eq!(repo.saves.get(), 0);
    }

    #[test]
    fn test_load_uses_stored_players() {
        let repo = MockRosterRepo {
            stored: RefCell::new(Some(vec![Player::new(42, "Stored")])),
            ..MockRosterRepo::default()
        };
        let service = RosterService::load(&repo).unwrap();
        assert_eq!(service.roster().players()[0].id, 42);
    }

    #[test]
    fn test_dispatch_persists_new_state() {
        let repo = MockRosterRepo::default();
        let mut service = RosterService::with_roster(&repo, Roster::default());

        service
            .dispatch(RosterAction::AddPlayer {
                player: NewPlayer { name: "Kavya".to_string(), ..NewPlayer::default() },
                joined: d(2024, 3, 1),
            })
            .unwrap();
        service
            .dispatch(RosterAction::ToggleAttendance { id: 1, date: d(2024, 3, 1) })
            .unwrap();

        assert_eq!(repo.saves.get(), 2);
        let stored = repo.stored.borrow().clone().unwrap();
        assert_eq!(stored[0].mark_on(d(2024, 3, 1)), AttendanceMark::Present);
        assert_eq!(service.roster().players(), stored.as_slice());
    }

    #[test]
    fn test_rejected_action_changes_nothing() {
        let repo = MockRosterRepo::default();
        let mut service = RosterService::with_roster(&repo, Roster::new(vec![Player::new(1, "A")]));

        assert!(service.dispatch(RosterAction::DeletePlayer { id: 2 }).is_err());
        assert_eq!(service.roster().len(), 1);
        assert_eq!(repo.saves.get(), 0);
    }

    #[test]
    fn test_failed_save_keeps_previous_state() {
        let repo = MockRosterRepo { fail_saves: true, ..MockRosterRepo::default() };
        let mut service = RosterService::with_roster(&repo, Roster::new(vec![Player::new(1, "A")]));

        assert!(service
            .dispatch(RosterAction::ToggleAttendance { id: 1, date: d(2024, 3, 1) })
            .is_err());
        assert!(service.roster().players()[0].attendance.is_empty());
    }
}
