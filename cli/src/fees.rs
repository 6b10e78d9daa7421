use courtside_core::service::fees::{paid_players, payment_history, total_collected, unpaid_players};
use courtside_core::{Player, Roster, YearMonth};
use tabled::Tabled;

use crate::report::print_table;

#[derive(Tabled)]
struct FeeRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Paid on")]
    paid_on: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Paid on")]
    paid_on: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

fn amount_label(amount: Option<f64>) -> String {
    amount.map(|a| format!("{:.2}", a)).unwrap_or_else(|| "-".to_string())
}

pub fn show_due(roster: &Roster, month: YearMonth) {
    let unpaid = unpaid_players(roster.players(), month);
    if unpaid.is_empty() {
        println!("Everyone has paid for {}.", month);
        return;
    }

    println!("\x1b[1;36mYet to pay for {}\x1b[0m ({} of {})", month, unpaid.len(), roster.len());
    print_table(
        unpaid
            .iter()
            .map(|p| FeeRow {
                id: p.id,
                name: p.name.clone(),
                paid_on: "-".to_string(),
                amount: "-".to_string(),
            })
            .collect(),
    );
}

pub fn show_paid(roster: &Roster, month: YearMonth) {
    let paid = paid_players(roster.players(), month);
    if paid.is_empty() {
        println!("No payments recorded for {}.", month);
        return;
    }

    println!(
        "\x1b[1;36mPaid for {}\x1b[0m ({} of {}, collected {:.2})",
        month,
        paid.len(),
        roster.len(),
        total_collected(roster.players(), month)
    );
    print_table(
        paid.iter()
            .map(|(p, payment)| FeeRow {
                id: p.id,
                name: p.name.clone(),
                paid_on: payment.paid_on.to_string(),
                amount: amount_label(payment.amount),
            })
            .collect(),
    );
}

pub fn show_history(player: &Player) {
    let history = payment_history(player);
    if history.is_empty() {
        println!("No payments recorded for {}.", player.name);
        return;
    }

    println!("\x1b[1;36mPayment history for {}\x1b[0m", player.name);
    print_table(
        history
            .iter()
            .map(|(month, payment)| HistoryRow {
                month: month.to_string(),
                paid_on: payment.paid_on.to_string(),
                amount: amount_label(payment.amount),
            })
            .collect(),
    );
}
