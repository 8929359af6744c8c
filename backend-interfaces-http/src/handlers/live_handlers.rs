use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Response;
use futures_util::stream::SplitSink;
use futures_util::{SinkExt, StreamExt};
use serde::Serialize;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, error, warn};

use backend_application::ops::StockChange;
use backend_application::queries::inventory_queries;
use backend_application::AppState;
use backend_domain::InventoryItem;

use crate::error::HttpError;
use crate::middleware::authorize;

/// One frame of the live feed: the full decoded inventory, newest first,
/// plus the change that triggered it (absent on the initial frame and after
/// a lagged receiver resynchronizes).
#[derive(Serialize)]
struct LiveFrame<'a> {
    change: Option<&'a StockChange>,
    items: Vec<InventoryItem>,
}

pub async fn live_stocks(
    State(state): State<AppState>,
    headers: HeaderMap,
    ws: WebSocketUpgrade,
) -> Result<Response, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    Ok(ws.on_upgrade(move |socket| stream_inventory(socket, state)))
}

async fn stream_inventory(socket: WebSocket, state: AppState) {
    let (mut sender, mut receiver) = socket.split();
    let mut changes = state.stream_hub.subscribe();

    if send_snapshot(&mut sender, &state, None).await.is_err() {
        return;
    }

    loop {
        tokio::select! {
            change = changes.recv() => {
                let sent = match change {
                    Ok(change) => send_snapshot(&mut sender, &state, Some(&change)).await,
                    Err(RecvError::Lagged(skipped)) => {
                        warn!("live feed lagged by {} changes, resending snapshot", skipped);
                        send_snapshot(&mut sender, &state, None).await
                    }
                    Err(RecvError::Closed) => break,
                };
                if sent.is_err() {
                    break;
                }
            }
            incoming = receiver.next() => {
                match incoming {
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                    Some(Ok(_)) => {}
                }
            }
        }
    }
    debug!("live feed subscriber disconnected");
}

async fn send_snapshot(
    sender: &mut SplitSink<WebSocket, Message>,
    state: &AppState,
    change: Option<&StockChange>,
) -> Result<(), axum::Error> {
    let items = match inventory_queries::load_inventory(state).await {
        Ok(items) => items,
        Err(err) => {
            error!("live feed snapshot failed: {}", err);
            return Ok(());
        }
    };
    let frame = LiveFrame { change, items };
    let text = match serde_json::to_string(&frame) {
        Ok(text) => text,
        Err(err) => {
            error!("live feed serialization failed: {}", err);
            return Ok(());
        }
    };
    sender.send(Message::Text(text)).await
}
