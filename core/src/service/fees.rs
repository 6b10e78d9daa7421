use crate::model::period::YearMonth;
use crate::model::player::{FeePayment, Player};

/// Players with nothing recorded for `month`, in roster order.
pub fn unpaid_players(players: &[Player], month: YearMonth) -> Vec<&Player> {
    players.iter().filter(|p| p.fee_for(month).is_none()).collect()
}

pub fn paid_players(players: &[Player], month: YearMonth) -> Vec<(&Player, &FeePayment)> {
    players
        .iter()
        .filter_map(|p| p.fee_for(month).map(|payment| (p, payment)))
        .collect()
}

/// Newest month first. Keys that are not `YYYY-MM` are left out.
pub fn payment_history(player: &Player) -> Vec<(YearMonth, &FeePayment)> {
    let mut history: Vec<_> = player
        .fees
        .iter()
        .filter_map(|(key, payment)| match YearMonth::parse_key(key) {
            Ok(month) => Some((month, payment)),
            Err(_) => {
                log::debug!("player {}: skipping fee key '{}'", player.id, key);
                None
            }
        })
        .collect();
    history.sort_by(|a, b| b.0.cmp(&a.0));
    history
}

pub fn total_collected(players: &[Player], month: YearMonth) -> f64 {
    paid_players(players, month)
        .iter()
        .filter_map(|(_, payment)| payment.amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn roster() -> Vec<Player> {
        let march = YearMonth::new(2024, 2);
        let mut a = Player::new(1, "A");
        a.record_fee(march, FeePayment { paid_on: d(2024, 3, 3), amount: Some(1000.0) });
        a.record_fee(march.shifted(-1), FeePayment { paid_on: d(2024, 2, 1), amount: None });
        let b = Player::new(2, "B");
        let mut c = Player::new(3, "C");
        c.record_fee(march, FeePayment { paid_on: d(2024, 3, 9), amount: Some(500.0) });
        vec![a, b, c]
    }

    #[test]
    fn test_paid_and_unpaid_split() {
        let players = roster();
        let march = YearMonth::new(2024, 2);

        let unpaid: Vec<u32> = unpaid_players(&players, march).iter().map(|p| p.id).collect();
        assert_eq!(unpaid, vec![2]);

        let paid: Vec<u32> = paid_players(&players, march).iter().map(|(p, _)| p.id).collect();
        assert_eq!(paid, vec![1, 3]);

        assert_eq!(total_collected(&players, march), 1500.0);
        assert_eq!(unpaid_players(&players, march.shifted(1)).len(), 3);
    }

    #[test]
    fn test_payment_history_newest_first() {
        let mut player = roster().remove(0);
        player.fees.insert("garbage".to_string(), FeePayment { paid_on: d(2024, 1, 1), amount: None });

        let months: Vec<String> = payment_history(&player).iter().map(|(m, _)| m.key()).collect();
        assert_eq!(months, vec!["2024-03", "2024-02"]);
    }
}
