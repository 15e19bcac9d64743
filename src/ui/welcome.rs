use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::models::GameMode;
use crate::session::SessionView;

pub fn render(frame: &mut Frame, area: Rect, view: &SessionView) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(11),
        Constraint::Fill(1),
    ])
    .split(area);

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "ゲームモード",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
    ];
    content.extend(GameMode::ALL.iter().map(|mode| mode_line(*mode, view.mode)));
    content.extend([
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "ENTER",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("新しい問題".fg(Color::DarkGray)),
    ]);

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, chunks[1]);
}

fn mode_line(mode: GameMode, selected: GameMode) -> Line<'static> {
    if mode == selected {
        Line::from(Span::styled(
            format!("> {} <", mode.label()),
            Style::default().fg(Color::Yellow).bold(),
        ))
    } else {
        Line::from(Span::styled(
            mode.label(),
            Style::default().fg(Color::Gray),
        ))
    }
}
