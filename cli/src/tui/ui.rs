use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, BorderType, Paragraph, Row, Table, Wrap},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use courtside_core::service::aggregator::month_calendar;
use courtside_core::{
    all_marked_dates, compute_attendance, AttendanceMark, RosterRepository,
    ReportingPeriod, YearMonth,
};

use crate::players::mark_icon;
use crate::report::band_tui_color;
use crate::tui::app::App;

const NAME_WIDTH: usize = 22;

pub fn draw<R: RosterRepository>(f: &mut Frame, app: &mut App<R>) {
    let size = f.area();

    // Header and Main Content Split
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    // Header
    let header = Paragraph::new(Line::from(vec![
        Span::styled("COURTSIDE ATTENDANCE  ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::styled(" < ", Style::default().fg(Color::White)),
        Span::styled(app.date.format("%a %-d %b %Y").to_string(), Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        Span::styled(" > ", Style::default().fg(if app.date < app.today { Color::White } else { Color::DarkGray })),
        Span::styled(
            format!("  present {}/{}", app.present_count(), app.players().len()),
            Style::default().fg(Color::Green),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    // Split Content into Left (Sheet) and Right (Detail)
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55),
            Constraint::Percentage(45),
        ])
        .split(main_chunks[1]);

    draw_sheet(f, app, content_chunks[0]);
    draw_detail_view(f, app, content_chunks[1]);

    // Footer
    let footer_text = match &app.message {
        Some(msg) => msg.clone(),
        None => "j/k: Player | space: Toggle | h/l: Day | t: Today | q: Quit".to_string(),
    };
    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(if app.message.is_some() { Color::Red } else { Color::DarkGray }))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[2]);
}

/// Truncates to `width` terminal columns, marking the cut with an ellipsis.
fn fit(name: &str, width: usize) -> String {
    if name.width() <= width {
        return name.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in name.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

fn draw_sheet<R: RosterRepository>(f: &mut Frame, app: &mut App<R>, area: Rect) {
    let month = ReportingPeriod::monthly(YearMonth::of(app.date), app.date);
    let marked = all_marked_dates(app.players());

    let rows: Vec<Row> = app.players().iter().map(|player| {
        let mark = player.mark_on(app.date);
        let icon_color = match mark {
            AttendanceMark::Present => Color::Green,
            AttendanceMark::Absent => Color::Red,
            AttendanceMark::Unmarked => Color::DarkGray,
        };
        let summary = compute_attendance(player, &month, &marked);

        Row::new(vec![
            Span::styled(mark_icon(mark), Style::default().fg(icon_color)),
            Span::raw(player.id.to_string()),
            Span::raw(fit(&player.name, NAME_WIDTH)),
            Span::styled(summary.percentage_label(), Style::default().fg(band_tui_color(summary.band()))),
        ])
    }).collect();

    let widths = [
        Constraint::Length(2),
        Constraint::Length(4),
        Constraint::Length(NAME_WIDTH as u16),
        Constraint::Min(8),
    ];

    let table = Table::new(rows, widths)
        .header(
            Row::new(vec!["", "ID", "Name", "Month"])
                .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
                .bottom_margin(1),
        )
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded).title(" Roster "))
        .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn draw_detail_view<R: RosterRepository>(f: &mut Frame, app: &App<R>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" Player ");

    let Some(player) = app.selected_player() else {
        f.render_widget(Paragraph::new("No player selected").block(block), area);
        return;
    };

    let month = YearMonth::of(app.date);
    let sheet = month_calendar(player, month);
    let present = sheet.iter().filter(|d| d.mark == AttendanceMark::Present).count();
    let absent = sheet.iter().filter(|d| d.mark == AttendanceMark::Absent).count();

    let calendar: String = sheet
        .iter()
        .filter(|d| d.date <= app.today)
        .map(|d| match d.mark {
            AttendanceMark::Present => '●',
            AttendanceMark::Absent => '○',
            AttendanceMark::Unmarked => '·',
        })
        .collect();

    let fee = match player.fee_for(month) {
        Some(payment) => Span::styled(format!("paid {}", payment.paid_on), Style::default().fg(Color::Green)),
        None => Span::styled("due", Style::default().fg(Color::Red)),
    };

    let label = |text: &'static str| Span::styled(text, Style::default().fg(Color::DarkGray));
    let value = |text: Option<String>| Span::raw(text.unwrap_or_else(|| "-".to_string()));

    let lines = vec![
        Line::from(Span::styled(player.name.clone(), Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(vec![label("Position: "), value(player.position.clone())]),
        Line::from(vec![label("DOB:      "), value(player.dob.map(|d| d.to_string()))]),
        Line::from(vec![label("Contact:  "), value(player.contact.clone())]),
        Line::from(vec![label("Address:  "), value(player.address.clone())]),
        Line::from(vec![label("Joined:   "), value(player.join_date.map(|d| d.to_string()))]),
        Line::from(vec![label("Rating:   "), value(player.rating.map(|r| format!("{}/5", r)))]),
        Line::from(""),
        Line::from(Span::styled(month.to_string(), Style::default().add_modifier(Modifier::BOLD))),
        Line::from(vec![
            label("Present:  "),
            Span::styled(present.to_string(), Style::default().fg(Color::Green)),
            label("  Absent: "),
            Span::styled(absent.to_string(), Style::default().fg(Color::Red)),
        ]),
        Line::from(vec![label("Fees:     "), fee]),
        Line::from(""),
        Line::from(calendar),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_truncates_by_width() {
        assert_eq!(fit("Ponnu", 10), "Ponnu");
        assert_eq!(fit("Divya Ranganathan", 8), "Divya R…");
        assert_eq!(fit("ディビヤ", 5), "ディ…");
    }
}
