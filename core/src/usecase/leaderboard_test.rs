#[cfg(test)]
mod tests {
    use crate::model::period::YearMonth;
    use crate::model::player::{AttendanceMark, Player};
    use crate::model::roster::Roster;
    use crate::usecase::leaderboard::{LeaderboardUseCase, TOP_RANKERS};
    use chrono::{Duration, NaiveDate};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    // Eight players; player n is present on the first n of eight sessions
    // in March 2024, and only players 1 and 2 came this week.
    fn academy() -> Roster {
        let sessions: Vec<NaiveDate> = (0..8).map(|i| d(2024, 3, 1) + Duration::days(i)).collect();
        let this_week = d(2024, 3, 20);

        let players = (1..=8)
            .map(|id| {
                let mut p = Player::new(id, format!("Player {}", id));
                for (i, date) in sessions.iter().enumerate() {
                    let mark = if i < id as usize { AttendanceMark::Present } else { AttendanceMark::Absent };
                    p.set_mark(*date, mark);
                }
                if id <= 2 {
                    p.set_mark(this_week, AttendanceMark::Present);
                }
                p
            })
            .collect();
        Roster::new(players)
    }

    #[test]
    fn test_build_leaderboard_partitions() {
        let roster = academy();
        let usecase = LeaderboardUseCase::new(&roster);
        let board = usecase.build(d(2024, 3, 21), YearMonth::new(2024, 2), TOP_RANKERS);

        assert_eq!(board.total_marked_days, 9);
        assert_eq!(board.month, "March 2024");

        // Ties at 0% this week fall back to roster order
        let weekly: Vec<u32> = board.weekly.iter().map(|e| e.player_id).collect();
        assert_eq!(weekly, vec![1, 2, 3]);

        let monthly: Vec<u32> = board.monthly.iter().map(|e| e.player_id).collect();
        assert_eq!(monthly, vec![8, 7, 6]);

        let remaining: Vec<u32> = board.remaining.iter().map(|e| e.player_id).collect();
        assert_eq!(remaining, vec![5, 4]);
        assert!(remaining
            .iter()
            .all(|id| !weekly.contains(id) && !monthly.contains(id)));
    }

    #[test]
    fn test_remaining_sorted_by_overall() {
        let roster = academy();
        let board = LeaderboardUseCase::new(&roster).build(d(2024, 3, 21), YearMonth::new(2024, 2), 1);

        assert_eq!(board.weekly[0].player_id, 1);
        assert_eq!(board.monthly[0].player_id, 8);
        let overall: Vec<Option<f64>> = board.remaining.iter().map(|e| e.summary.percentage).collect();
        assert!(overall.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(board.remaining.len(), 6);
    }

    #[test]
    fn test_empty_roster_leaderboard() {
        let roster = Roster::default();
        let board = LeaderboardUseCase::new(&roster).build(d(2024, 3, 21), YearMonth::new(2024, 2), TOP_RANKERS);
        assert!(board.weekly.is_empty() && board.monthly.is_empty() && board.remaining.is_empty());
        assert_eq!(board.total_marked_days, 0);
    }

    #[test]
    fn test_standings_per_player() {
        let roster = academy();
        let standings = LeaderboardUseCase::new(&roster).standings(d(2024, 3, 21), YearMonth::new(2024, 2));

        let second = &standings[1];
        assert_eq!(second.player_id, 2);
        assert_eq!(second.weekly.present_count, 1);
        assert_eq!(second.monthly.present_count, 3);
        assert_eq!(second.overall.total_days, 9);

        let april = LeaderboardUseCase::new(&roster).standings(d(2024, 3, 21), YearMonth::new(2024, 3));
        assert!(april.iter().all(|s| s.monthly.present_count == 0));
    }
}
