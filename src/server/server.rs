//! WebSocket server implementation.

use std::future::Future;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use futures_util::stream::SplitSink;
use futures_util::{SinkExt, StreamExt};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::broadcast;
use tokio::task::JoinSet;
use tokio_tungstenite::WebSocketStream;
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::QuizError;
use crate::data::PoemStore;
use crate::protocol::{ClientMessage, ServerMessage};
use crate::session::Session;

type WsSink = SplitSink<WebSocketStream<TcpStream>, Message>;

/// Run the quiz server until Ctrl-C.
pub async fn run(bind: IpAddr, port: u16, store: PoemStore) -> Result<(), QuizError> {
    let addr = SocketAddr::new(bind, port);
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, poems = store.len(), "server listening");

    serve(listener, Arc::new(store), async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for ctrl-c");
        }
    })
    .await
}

/// Accept connections on `listener` until `shutdown` resolves.
///
/// Open sessions are told the server is closing before this returns.
pub async fn serve<F>(
    listener: TcpListener,
    store: Arc<PoemStore>,
    shutdown: F,
) -> Result<(), QuizError>
where
    F: Future<Output = ()>,
{
    let (closing_tx, _) = broadcast::channel::<()>(1);
    let mut connections = JoinSet::new();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accepted = listener.accept() => match accepted {
                Ok((stream, addr)) => {
                    let store = Arc::clone(&store);
                    let closing = closing_tx.subscribe();
                    connections.spawn(handle_connection(stream, addr, store, closing));
                    while connections.try_join_next().is_some() {}
                }
                Err(e) => {
                    warn!(error = %e, "failed to accept connection");
                }
            },
            _ = &mut shutdown => {
                info!(open_sessions = connections.len(), "shutting down");
                let _ = closing_tx.send(());
                break;
            }
        }
    }

    while connections.join_next().await.is_some() {}
    Ok(())
}

/// Handle a single WebSocket connection with its own session.
async fn handle_connection(
    stream: TcpStream,
    addr: SocketAddr,
    store: Arc<PoemStore>,
    mut closing: broadcast::Receiver<()>,
) {
    let ws_stream = match tokio_tungstenite::accept_async(stream).await {
        Ok(ws) => ws,
        Err(e) => {
            warn!(%addr, error = %e, "websocket handshake failed");
            return;
        }
    };

    let (mut ws_sender, mut ws_receiver) = ws_stream.split();
    let session_id = Uuid::new_v4();
    let mut session = Session::default();
    let mut rng = StdRng::from_entropy();
    info!(%session_id, %addr, "session opened");

    let welcome = ServerMessage::Welcome {
        session_id: session_id.to_string(),
        total_poems: store.len(),
    };
    let state = ServerMessage::State {
        view: session.view(),
    };
    for msg in [welcome, state] {
        if let Err(e) = send(&mut ws_sender, &msg).await {
            warn!(%session_id, error = %e, "failed to greet client");
            return;
        }
    }

    loop {
        tokio::select! {
            msg = ws_receiver.next() => {
                let text = match msg {
                    Some(Ok(Message::Text(text))) => text,
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(e)) => {
                        debug!(%session_id, error = %e, "connection error");
                        break;
                    }
                    Some(Ok(_)) => continue,
                };

                let reply = match serde_json::from_str::<ClientMessage>(text.as_str()) {
                    Ok(intent) => match session.dispatch(intent, &store, &mut rng) {
                        Ok(()) => ServerMessage::State { view: session.view() },
                        Err(e) => {
                            debug!(%session_id, error = %e, "intent rejected");
                            ServerMessage::Rejected { reason: e.to_string() }
                        }
                    },
                    Err(e) => ServerMessage::Rejected {
                        reason: format!("malformed message: {}", e),
                    },
                };

                if send(&mut ws_sender, &reply).await.is_err() {
                    break;
                }
            }
            _ = closing.recv() => {
                let _ = send(&mut ws_sender, &ServerMessage::ServerClosing).await;
                let _ = ws_sender.close().await;
                break;
            }
        }
    }

    let score = session.score();
    info!(
        %session_id,
        correct = score.correct,
        total = score.total,
        "session closed"
    );
}

async fn send(ws_sender: &mut WsSink, msg: &ServerMessage) -> Result<(), QuizError> {
    let json = serde_json::to_string(msg)?;
    ws_sender.send(Message::Text(json.into())).await?;
    Ok(())
}
