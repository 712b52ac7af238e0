use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::simulation::trail::GRID_CELLS;

pub fn draw_ui(f: &mut Frame, grid_lines: Vec<String>, hud_info: &str, event_lines: &[String]) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                 // HUD
            Constraint::Length(GRID_CELLS as u16), // Field
            Constraint::Min(0),                    // Event log
        ])
        .split(f.area());

    // HUD
    let hud = Paragraph::new(Span::styled(
        hud_info,
        Style::default().add_modifier(Modifier::REVERSED),
    ));
    f.render_widget(hud, chunks[0]);

    // Field
    let text: Vec<Line> = grid_lines
        .into_iter()
        .map(|s| Line::from(Span::raw(s)))
        .collect();

    let field = Paragraph::new(text)
        .block(Block::default().borders(Borders::NONE))
        .style(Style::default().fg(Color::White).bg(Color::Black));
    f.render_widget(field, chunks[1]);

    // Recent notices, oldest at the top
    let events: Vec<Line> = event_lines
        .iter()
        .map(|s| Line::from(Span::raw(s.clone())))
        .collect();

    let log = Paragraph::new(events).block(Block::default().borders(Borders::TOP));
    f.render_widget(log, chunks[2]);
}
