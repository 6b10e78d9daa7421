use crate::model::player::Player;
use crate::model::tournament::Tournament;
use anyhow::Result;

pub trait RosterRepository {
    /// `None` when nothing has been saved yet.
    fn load(&self) -> Result<Option<Vec<Player>>>;
    fn save(&self, players: &[Player]) -> Result<()>;
}

pub trait TournamentRepository {
    fn load(&self) -> Result<Vec<Tournament>>;
    fn save(&self, tournaments: &[Tournament]) -> Result<()>;
}
