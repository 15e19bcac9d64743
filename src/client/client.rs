//! WebSocket client implementation.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::{Mutex, mpsc};
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, info, warn};

use crate::QuizError;
use crate::input::{Action, action_for_key};
use crate::protocol::{ClientMessage, ServerMessage};
use crate::terminal;

use super::state::ClientApp;
use super::ui;

/// Shared client app state.
type SharedApp = Arc<Mutex<ClientApp>>;

/// Connect to a quiz server and play until the user quits.
pub async fn run(host: String, port: u16) -> Result<(), QuizError> {
    let app = Arc::new(Mutex::new(ClientApp::new(host.clone(), port)));

    let url = format!("ws://{}:{}", host, port);
    info!(%url, "connecting");
    let (ws_stream, _) = tokio_tungstenite::connect_async(&url).await?;

    let (mut ws_sender, mut ws_receiver) = ws_stream.split();
    let (tx, mut rx) = mpsc::unbounded_channel::<ClientMessage>();

    let sender_app = Arc::clone(&app);
    let send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            let json = match serde_json::to_string(&msg) {
                Ok(json) => json,
                Err(e) => {
                    warn!(error = %e, "failed to encode message");
                    continue;
                }
            };
            if let Err(e) = ws_sender.send(Message::Text(json.into())).await {
                warn!(error = %e, "failed to send message");
                sender_app.lock().await.disconnect(format!("Connection error: {}", e));
                break;
            }
        }
    });

    let app_clone = Arc::clone(&app);
    let recv_task = tokio::spawn(async move {
        while let Some(msg) = ws_receiver.next().await {
            let text = match msg {
                Ok(Message::Text(text)) => text,
                Ok(Message::Close(_)) => {
                    let mut app = app_clone.lock().await;
                    if app.is_connected() {
                        app.disconnect("Connection closed by server".to_string());
                    }
                    break;
                }
                Err(e) => {
                    let mut app = app_clone.lock().await;
                    app.disconnect(format!("Connection error: {}", e));
                    break;
                }
                _ => continue,
            };

            match serde_json::from_str::<ServerMessage>(text.as_str()) {
                Ok(server_msg) => app_clone.lock().await.apply(server_msg),
                Err(e) => debug!(error = %e, "ignoring unreadable server message"),
            }
        }
    });

    let result = run_tui(app, tx).await;

    recv_task.abort();
    send_task.abort();

    result
}

async fn run_tui(
    app: SharedApp,
    tx: mpsc::UnboundedSender<ClientMessage>,
) -> Result<(), QuizError> {
    let mut terminal = terminal::init()?;

    loop {
        {
            let app = app.lock().await;
            if app.should_quit {
                break;
            }
            terminal.draw(|frame| ui::render(frame, &app))?;
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                let mut app = app.lock().await;
                let action = match app.view() {
                    Some(view) if app.is_connected() => action_for_key(view, app.cursor(), key.code),
                    _ => match key.code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc | KeyCode::Enter => {
                            Action::Quit
                        }
                        _ => Action::Ignore,
                    },
                };

                match action {
                    Action::Dispatch(intent) => {
                        if tx.send(intent).is_err() {
                            warn!("send task has stopped; dropping input");
                            app.send_failed();
                        }
                    }
                    Action::CursorUp => app.cursor_up(),
                    Action::CursorDown => app.cursor_down(),
                    Action::Quit => app.should_quit = true,
                    Action::Ignore => {}
                }
            }
        }
    }

    Ok(())
}
