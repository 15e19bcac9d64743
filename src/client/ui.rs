//! Client-only screens shown before a session snapshot arrives.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};

use crate::ui::{self, Screen};

use super::state::{ClientApp, ConnectionStatus};

pub fn render(frame: &mut Frame, app: &ClientApp) {
    if let Some(view) = app.view() {
        let status = app.status_line();
        let notice = match &app.status {
            ConnectionStatus::Disconnected { message } => Some(message.as_str()),
            _ => app.notice(),
        };
        ui::render(
            frame,
            &Screen {
                view,
                cursor: app.cursor(),
                notice,
                status: Some(&status),
            },
        );
        return;
    }

    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let (message, color) = match &app.status {
        ConnectionStatus::Disconnected { message } => (message.clone(), Color::Red),
        _ => (format!("Connecting to {}...", app.server_addr()), Color::Yellow),
    };

    let chunks = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Length(7),
        Constraint::Percentage(40),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "百人一首ゲーム",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(color).bold())),
        Line::from(""),
        Line::from(Span::styled(
            "Press [Q] to exit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(widget, chunks[1]);
}
