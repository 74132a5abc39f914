//! Draws a [`DisplaySnapshot`] with ratatui.

use super::keys::HELP;
use crate::effects::DisplaySnapshot;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

struct Theme {
    fg: Color,
    muted: Color,
    accent: Color,
    success: Color,
    error: Color,
}

const THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    muted: Color::Rgb(108, 112, 134),
    accent: Color::Rgb(137, 180, 250),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
};

/// Render the whole calculator screen.
pub fn render(frame: &mut Frame, snapshot: &DisplaySnapshot) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let title = if snapshot.loading {
        " Expression (evaluating...) "
    } else {
        " Expression "
    };
    let expression = Paragraph::new(snapshot.expression.as_str())
        .alignment(Alignment::Right)
        .style(Style::default().fg(THEME.fg))
        .block(bordered(title));
    frame.render_widget(expression, rows[0]);

    let result_style = if snapshot.error.is_some() {
        Style::default().fg(THEME.error)
    } else {
        Style::default().fg(THEME.accent).add_modifier(Modifier::BOLD)
    };
    let result = Paragraph::new(snapshot.result_line())
        .alignment(Alignment::Right)
        .style(result_style)
        .block(bordered(" Result "));
    frame.render_widget(result, rows[1]);

    let summary_style = if snapshot.confirmation.is_some() {
        Style::default().fg(THEME.success)
    } else {
        Style::default().fg(THEME.muted)
    };
    let summary = Paragraph::new(snapshot.summary_line()).style(summary_style);
    frame.render_widget(summary, rows[2]);

    frame.render_widget(history_list(snapshot), rows[3]);

    let help = Paragraph::new(HELP).style(Style::default().fg(THEME.muted));
    frame.render_widget(help, rows[4]);
}

fn bordered(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(THEME.muted))
        .title(title)
}

fn history_list(snapshot: &DisplaySnapshot) -> List<'_> {
    let items: Vec<ListItem> = if snapshot.recent.is_empty() {
        vec![ListItem::new(Span::styled(
            "No calculations yet",
            Style::default().fg(THEME.muted),
        ))]
    } else {
        snapshot
            .recent
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{index} "), Style::default().fg(THEME.muted)),
                    Span::styled(entry.summary(), Style::default().fg(THEME.fg)),
                    Span::styled(
                        format!("  {}", entry.timestamp),
                        Style::default().fg(THEME.muted),
                    ),
                ]))
            })
            .collect()
    };
    List::new(items).block(bordered(" History "))
}
