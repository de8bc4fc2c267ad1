//! Dashboard rendering with ratatui

use super::app::DashboardState;
use crate::core::FeedbackSymbol;
use crate::output::formatters::shot_label;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders, Gauge, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Progress
            Constraint::Length(1), // Help
        ])
        .split(f.area());

    render_header(f, state, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_distribution(f, state, main_chunks[0]);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(5)])
        .split(main_chunks[1]);

    render_tallies(f, state, side[0]);
    render_board(f, state, side[1]);

    render_progress(f, state, chunks[2]);
    render_help(f, state, chunks[3]);
}

fn render_header(f: &mut Frame, state: &DashboardState, area: Rect) {
    let header = Paragraph::new(format!("WORDLE SIMULATION - strategy {}", state.strategy))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_distribution(f: &mut Frame, state: &DashboardState, area: Rect) {
    let rows = state.distribution.len();
    let bars: Vec<Bar> = state
        .distribution
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let color = if i + 1 == rows { Color::Red } else { Color::Green };
            Bar::default()
                .value(count as u64)
                .label(Line::from(shot_label(i, rows)))
                .style(Style::default().fg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Shots per game ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(5)
        .bar_gap(1);

    f.render_widget(chart, area);
}

fn render_tallies(f: &mut Frame, state: &DashboardState, area: Rect) {
    let average = state
        .average_shots
        .map_or_else(|| "-".to_string(), |avg| format!("{avg:.3}"));

    let content = vec![
        Line::from(vec![
            Span::raw("Solved:   "),
            Span::styled(state.successes.to_string(), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::raw("Failed:   "),
            Span::styled(state.failures.to_string(), Style::default().fg(Color::Red)),
        ]),
        Line::from(format!("Success:  {:.1}%", state.success_rate)),
        Line::from(vec![
            Span::raw("Average:  "),
            Span::styled(
                average,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Tallies ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn symbol_style(symbol: FeedbackSymbol) -> Style {
    let bg = match symbol {
        FeedbackSymbol::Correct => Color::Green,
        FeedbackSymbol::Present => Color::Yellow,
        FeedbackSymbol::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn render_board(f: &mut Frame, state: &DashboardState, area: Rect) {
    let mut lines: Vec<Line> = state
        .board
        .iter()
        .map(|record| {
            let cells: Vec<Span> = record
                .guess
                .text()
                .to_uppercase()
                .chars()
                .zip(record.pattern.symbols())
                .map(|(letter, symbol)| Span::styled(format!(" {letter} "), symbol_style(symbol)))
                .collect();
            Line::from(cells)
        })
        .collect();

    if !state.suggestions.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Last ranking:",
            Style::default().fg(Color::DarkGray),
        )));
        for guess in &state.suggestions {
            lines.push(Line::from(format!("  {guess}")));
        }
    }

    let title = state.answer.as_ref().map_or_else(
        || format!(" Game {} ", state.case + 1),
        |answer| format!(" Game {} - {} ", state.case + 1, answer.text().to_uppercase()),
    );

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_progress(f: &mut Frame, state: &DashboardState, area: Rect) {
    let done = state.completed();
    let percent = if state.total_cases == 0 {
        100
    } else {
        (done * 100 / state.total_cases).min(100) as u16
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{done}/{} games", state.total_cases));
    f.render_widget(gauge, area);
}

fn render_help(f: &mut Frame, state: &DashboardState, area: Rect) {
    let text = if state.finished {
        "Finished - press any key to exit"
    } else {
        "q/Esc: stop after this game"
    };
    let help = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
