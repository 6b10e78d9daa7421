use chrono::{Duration, NaiveDate};
use ratatui::widgets::TableState;
use courtside_core::service::aggregator::present_on;
use courtside_core::{is_markable, FileRosterRepository, Player, RosterAction, RosterRepository, RosterService};

pub struct App<R: RosterRepository = FileRosterRepository> {
    pub service: RosterService<R>,
    pub today: NaiveDate,
    pub date: NaiveDate,
    pub state: TableState,
    pub message: Option<String>,
}

impl<R: RosterRepository> App<R> {
    pub fn new(service: RosterService<R>, today: NaiveDate) -> Self {
        let mut state = TableState::default();
        if !service.roster().is_empty() {
            state.select(Some(0));
        }
        App {
            service,
            today,
            date: today,
            state,
            message: None,
        }
    }

    pub fn players(&self) -> &[Player] {
        self.service.roster().players()
    }

    pub fn selected_player(&self) -> Option<&Player> {
        self.state.selected().and_then(|i| self.players().get(i))
    }

    pub fn present_count(&self) -> usize {
        present_on(self.players(), self.date)
    }

    pub fn next(&mut self) {
        let len = self.players().len();
        if len == 0 { return; }

        let i = match self.state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.players().len();
        if len == 0 { return; }

        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn toggle_selected(&mut self) {
        let Some(id) = self.selected_player().map(|p| p.id) else {
            return;
        };
        let date = self.date;
        self.message = match self.service.dispatch(RosterAction::ToggleAttendance { id, date }) {
            Ok(_) => None,
            Err(e) => Some(format!("Could not save: {}", e)),
        };
    }

    pub fn previous_day(&mut self) {
        self.date -= Duration::days(1);
    }

    pub fn next_day(&mut self) {
        let next = self.date + Duration::days(1);
        if is_markable(next, self.today) {
            self.date = next;
        }
    }

    pub fn jump_to_today(&mut self) {
        self.date = self.today;
    }
}
