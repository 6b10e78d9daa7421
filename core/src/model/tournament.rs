use anyhow::{anyhow, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: u32,
    pub name: String,
    pub from: NaiveDate,
    pub to: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
}

impl Tournament {
    /// `Jun 15-20, 2024`, `Jun 28 - Jul 2, 2024`, or `Jun 15, 2024` for one day.
    pub fn date_label(&self) -> String {
        let (from, to) = (self.from, self.to);
        if from == to {
            from.format("%b %-d, %Y").to_string()
        } else if from.year() != to.year() {
            format!("{} - {}", from.format("%b %-d, %Y"), to.format("%b %-d, %Y"))
        } else if from.month() != to.month() {
            format!("{} - {}", from.format("%b %-d"), to.format("%b %-d, %Y"))
        } else {
            format!("{}-{}", from.format("%b %-d"), to.format("%-d, %Y"))
        }
    }

    pub fn is_over(&self, today: NaiveDate) -> bool {
        self.to < today
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewTournament {
    pub name: String,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub venue: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleAction {
    AddTournament(NewTournament),
    RemoveTournament { id: u32 },
}

/// The academy's tournament calendar, in the order entries were added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schedule {
    tournaments: Vec<Tournament>,
}

impl Schedule {
    pub fn new(tournaments: Vec<Tournament>) -> Self {
        Self { tournaments }
    }

    pub fn tournaments(&self) -> &[Tournament] {
        &self.tournaments
    }

    pub fn get(&self, id: u32) -> Option<&Tournament> {
        self.tournaments.iter().find(|t| t.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.tournaments.is_empty()
    }

    pub fn next_id(&self) -> u32 {
        self.tournaments.iter().map(|t| t.id).max().map_or(1, |id| id + 1)
    }

    /// Not yet finished, soonest first.
    pub fn upcoming(&self, today: NaiveDate) -> Vec<&Tournament> {
        let mut upcoming: Vec<&Tournament> = self
            .tournaments
            .iter()
            .filter(|t| !t.is_over(today))
            .collect();
        upcoming.sort_by_key(|t| t.from);
        upcoming
    }

    /// Every entry by start date.
    pub fn by_date(&self) -> Vec<&Tournament> {
        let mut all: Vec<&Tournament> = self.tournaments.iter().collect();
        all.sort_by_key(|t| t.from);
        all
    }

    pub fn apply(&self, action: ScheduleAction) -> Result<Schedule> {
        let mut next = self.clone();
        match action {
            ScheduleAction::AddTournament(new) => {
                let name = new.name.trim();
                if name.is_empty() {
                    return Err(anyhow!("Tournament name is required"));
                }
                let from = new
                    .from
                    .ok_or_else(|| anyhow!("Tournament start date is required"))?;
                let to = new.to.unwrap_or(from);
                if to < from {
                    return Err(anyhow!("Tournament ends ({}) before it starts ({})", to, from));
                }
                next.tournaments.push(Tournament {
                    id: self.next_id(),
                    name: name.to_string(),
                    from,
                    to,
                    venue: new.venue.filter(|v| !v.trim().is_empty()),
                });
            }
            ScheduleAction::RemoveTournament { id } => {
                let before = next.tournaments.len();
                next.tournaments.retain(|t| t.id != id);
                if next.tournaments.len() == before {
                    return Err(anyhow!("Tournament with ID {} not found", id));
                }
            }
        }
        Ok(next)
    }
}
