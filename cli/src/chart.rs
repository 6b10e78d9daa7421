use std::{io, time::Duration};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, BorderType, Paragraph, Padding},
};
use courtside_core::{daily_present_counts, DailyPresentCount, Roster, YearMonth};

// --- THEME ---
struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
    bar: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan,
    muted: Color::DarkGray,
    text: Color::White,
    bar: Color::Green,
};

pub struct ChartApp<'a> {
    roster: &'a Roster,
    pub month: YearMonth,
    pub counts: Vec<DailyPresentCount>,
}

impl<'a> ChartApp<'a> {
    pub fn new(roster: &'a Roster, month: YearMonth) -> Self {
        Self {
            roster,
            month,
            counts: daily_present_counts(roster.players(), month),
        }
    }

    pub fn next_month(&mut self) {
        self.set_month(self.month.shifted(1));
    }

    pub fn previous_month(&mut self) {
        self.set_month(self.month.shifted(-1));
    }

    fn set_month(&mut self, month: YearMonth) {
        self.month = month;
        self.counts = daily_present_counts(self.roster.players(), month);
    }

    /// Days in the month with anyone present.
    pub fn active_days(&self) -> usize {
        self.counts.iter().filter(|c| c.present_count > 0).count()
    }

    pub fn best_day(&self) -> Option<&DailyPresentCount> {
        self.counts
            .iter()
            .filter(|c| c.present_count > 0)
            .max_by_key(|c| (c.present_count, std::cmp::Reverse(c.date)))
    }

    pub fn average_present(&self) -> f64 {
        let active = self.active_days();
        if active == 0 {
            return 0.0;
        }
        let total: usize = self.counts.iter().map(|c| c.present_count).sum();
        total as f64 / active as f64
    }
}

pub fn run(roster: &Roster, month: YearMonth) -> Result<()> {
    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = ChartApp::new(roster, month);

    // Main loop
    loop {
        terminal.draw(|f| ui(f, &app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        KeyCode::Left | KeyCode::Char('h') => app.previous_month(),
                        KeyCode::Right | KeyCode::Char('l') => app.next_month(),
                        _ => {}
                    }
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn ui(frame: &mut Frame, app: &ChartApp) {
    let size = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header / month selector
            Constraint::Min(10),   // Chart + sidebar
            Constraint::Length(1), // Footer / help
        ])
        .split(size);

    // --- Header ---
    let header_block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(THEME.muted));

    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(24),
            Constraint::Min(1),
            Constraint::Length(30),
        ])
        .split(main_layout[0]);

    let app_title = Paragraph::new(Span::styled("MONTHLY ATTENDANCE", Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD)))
        .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(app_title, header_layout[0]);

    let nav_text = Line::from(vec![
        Span::styled(" < ", Style::default().fg(THEME.text)),
        Span::styled(format!(" {} ", app.month), Style::default().fg(THEME.text).add_modifier(Modifier::BOLD)),
        Span::styled(" > ", Style::default().fg(THEME.text)),
    ]);
    let nav = Paragraph::new(nav_text).alignment(Alignment::Right).block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(nav, header_layout[2]);

    frame.render_widget(header_block, main_layout[0]);

    // --- Main Content Split ---
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(75),
            Constraint::Length(1),
            Constraint::Percentage(25),
        ])
        .split(main_layout[1]);

    draw_chart(frame, app, content_chunks[0]);
    draw_info_panel(frame, app, content_chunks[2]);

    // --- Footer ---
    let help = Line::from(vec![
        Span::styled("MONTH: ", Style::default().fg(THEME.muted)),
        Span::styled("←/→ ", Style::default().fg(THEME.text)),
        Span::raw("  "),
        Span::styled("QUIT: ", Style::default().fg(THEME.muted)),
        Span::styled("q", Style::default().fg(THEME.text)),
    ]);
    let footer = Paragraph::new(help).alignment(Alignment::Center).style(Style::default().fg(THEME.muted));
    frame.render_widget(footer, main_layout[2]);
}

fn draw_chart(frame: &mut Frame, app: &ChartApp, area: Rect) {
    let labels: Vec<String> = app.counts.iter().map(|c| c.day_of_month.to_string()).collect();

    let bar_items: Vec<Bar> = app.counts.iter().zip(labels.iter()).map(|(count, label)| {
        let value = count.present_count as u64;
        Bar::default()
            .label(label.as_str())
            .value(value)
            .style(Style::default().fg(THEME.bar))
            .text_value(if value > 0 { value.to_string() } else { "".to_string() })
    }).collect();

    let chart_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME.muted))
        .title(" Players present (day of month) ");

    let chart = BarChart::default()
        .block(chart_block)
        .bar_width(2)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bar_items))
        .max((app.roster.len() as u64).max(1));

    frame.render_widget(chart, area);
}

fn draw_info_panel(frame: &mut Frame, app: &ChartApp, area: Rect) {
    let best = app
        .best_day()
        .map(|c| format!("{} ({})", c.date.format("%a %-d"), c.present_count))
        .unwrap_or_else(|| "-".to_string());

    let info_text = vec![
        Line::from(vec![Span::styled("Overview", Style::default().add_modifier(Modifier::BOLD))]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Players:  ", Style::default().fg(THEME.muted)),
            Span::styled(app.roster.len().to_string(), Style::default().fg(THEME.text)),
        ]),
        Line::from(vec![
            Span::styled("Sessions: ", Style::default().fg(THEME.muted)),
            Span::styled(app.active_days().to_string(), Style::default().fg(THEME.bar).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(vec![
            Span::styled("Average:  ", Style::default().fg(THEME.muted)),
            Span::styled(format!("{:.1}", app.average_present()), Style::default().fg(THEME.text)),
        ]),
        Line::from(vec![
            Span::styled("Best day: ", Style::default().fg(THEME.muted)),
            Span::styled(best, Style::default().fg(THEME.text)),
        ]),
    ];

    let info_block = Paragraph::new(info_text)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded).border_style(Style::default().fg(THEME.muted)).title(" Summary "));
    frame.render_widget(info_block, area);
}
