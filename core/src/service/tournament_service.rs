use anyhow::Result;

use crate::model::tournament::{Schedule, ScheduleAction};
use crate::repository::TournamentRepository;

/// Owns the tournament calendar the same way [`RosterService`] owns the roster.
///
/// [`RosterService`]: crate::service::roster_service::RosterService
pub struct TournamentService<R: TournamentRepository> {
    repo: R,
    schedule: Schedule,
}

impl<R: TournamentRepository> TournamentService<R> {
    pub fn load(repo: R) -> Result<Self> {
        let schedule = Schedule::new(repo.load()?);
        Ok(Self { repo, schedule })
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn dispatch(&mut self, action: ScheduleAction) -> Result<&Schedule> {
        log::debug!("dispatch {:?}", action);
        let next = self.schedule.apply(action)?;
        self.repo.save(next.tournaments())?;
        self.schedule = next;
        log::info!("schedule saved ({} tournaments)", self.schedule.tournaments().len());
        Ok(&self.schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tournament::{NewTournament, Tournament};
    use chrono::NaiveDate;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct MockTournamentRepo {
        stored: RefCell<Vec<Tournament>>,
        saves: Cell<usize>,
    }

    impl TournamentRepository for &MockTournamentRepo {
        fn load(&self) -> Result<Vec<Tournament>> {
            Ok(self.stored.borrow().clone())
        }

        fn save(&self, tournaments: &[Tournament]) -> Result<()> {
            self.saves.set(self.saves.get() + 1);
            *self.stored.borrow_mut() = tournaments.to_vec();
            Ok(())
        }
    }

    fn cup() -> NewTournament {
        NewTournament {
            name: "Maharashtra State Championship".to_string(),
            from: NaiveDate::from_ymd_opt(2024, 3, 5),
            to: NaiveDate::from_ymd_opt(2024, 3, 10),
            venue: Some("Mumbai".to_string()),
        }
    }

    #[test]
    fn test_add_and_remove_are_saved() {
        let repo = MockTournamentRepo::default();
        let mut service = TournamentService::load(&repo).unwrap();
        assert!(service.schedule().is_empty());

        service.dispatch(ScheduleAction::AddTournament(cup())).unwrap();
        assert_eq!(repo.stored.borrow().len(), 1);
        assert_eq!(repo.stored.borrow()[0].venue.as_deref(), Some("Mumbai"));

        service.dispatch(ScheduleAction::RemoveTournament { id: 1 }).unwrap();
        assert!(repo.stored.borrow().is_empty());
        assert_eq!(repo.saves.get(), 2);
    }

    #[test]
    fn test_rejected_action_is_not_saved() {
        let repo = MockTournamentRepo::default();
        let mut service = TournamentService::load(&repo).unwrap();
        assert!(service.dispatch(ScheduleAction::RemoveTournament { id: 3 }).is_err());
        assert_eq!(repo.saves.get(), 0);
    }
}
