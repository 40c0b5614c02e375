//! Main webserver implementation
//!
//! The `WebServer` struct wires the dashboard session to HTTP and WebSocket
//! routes, with socket and file I/O injected through service traits.

use axum::{
    Json, Router,
    extract::{
        Path, State, WebSocketUpgrade,
        ws::{Message, WebSocket},
    },
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use futures_util::{SinkExt, StreamExt};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::mpsc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use uuid::Uuid;

use engine::{FilterView, SelectionAction};
use shared::logging::log_error;
use shared::{LogicModelDataset, ProcessId, Relation, process_debug, process_info, process_warn};

use crate::error::{WebServerError, WebServerResult};
use crate::state::DashboardState;
use crate::traits::{StaticFileResponse, StaticFileServer, WebSocketManager};
use crate::types::{
    BrowserMessage, ClientMessage, ConnectedItems, HealthResponse, SelectIndexRequest, SelectPbcRequest,
};

const CLIENT_CHANNEL_CAPACITY: usize = 64;

/// Response header carrying the session revision of a returned view
pub const REVISION_HEADER: &str = "x-view-revision";

/// Main webserver struct with dependency injection
pub struct WebServer<W, S> {
    state: Arc<DashboardState>,
    websocket_manager: Arc<W>,
    static_server: Arc<S>,
}

impl<W, S> Clone for WebServer<W, S> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            websocket_manager: self.websocket_manager.clone(),
            static_server: self.static_server.clone(),
        }
    }
}

impl<W, S> WebServer<W, S>
where
    W: WebSocketManager + 'static,
    S: StaticFileServer + 'static,
{
    pub fn new(state: DashboardState, websocket_manager: W, static_server: S) -> Self {
        Self {
            state: Arc::new(state),
            websocket_manager: Arc::new(websocket_manager),
            static_server: Arc::new(static_server),
        }
    }

    pub fn state(&self) -> &Arc<DashboardState> {
        &self.state
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            // Presentation adapter
            .route("/", get(serve_index::<W, S>))
            .route("/static/*path", get(serve_static::<W, S>))
            .route("/ws", get(websocket_handler::<W, S>))
            // Queries
            .route("/health", get(health_check::<W, S>))
            .route("/api/dataset", get(dataset_handler::<W, S>))
            .route("/api/view", get(view_handler::<W, S>))
            .route("/api/connected/:relation", get(connected_handler::<W, S>))
            // Selection operations
            .route("/api/select/pbc", post(select_pbc_handler::<W, S>))
            .route("/api/select/partner", post(select_partner_handler::<W, S>))
            .route("/api/select/strategy", post(select_strategy_handler::<W, S>))
            .route("/api/clear", post(clear_handler::<W, S>))
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(self.clone())
    }

    /// Apply a selection and push the new view to every browser
    ///
    /// The session stays locked until the broadcast is queued, so browsers
    /// receive updates in the order the selections were applied.
    pub async fn apply_action(&self, action: SelectionAction) -> WebServerResult<(u64, FilterView)> {
        let mut session = self.state.session().await;
        let view = session.apply(action)?;

        if let Err(e) = self.websocket_manager.broadcast(session.view_update()).await {
            process_warn!(ProcessId::current(), "⚠️ View broadcast failed: {}", e);
        }
        Ok((session.revision(), view))
    }

    /// Serve until `shutdown` resolves
    pub async fn run<F>(&self, addr: SocketAddr, shutdown: F) -> WebServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
            log_error(ProcessId::current(), &format!("Binding {}", addr), &e);
            WebServerError::ServerStartupFailed { port: addr.port() }
        })?;

        process_info!(ProcessId::current(), "🌐 Dashboard available at http://{}/", addr);

        axum::serve(listener, self.build_router())
            .with_graceful_shutdown(shutdown)
            .await?;
        Ok(())
    }

    async fn reply(&self, client_id: Uuid, message: ClientMessage) {
        if let Err(e) = self.websocket_manager.send_to_client(client_id, message).await {
            process_debug!(ProcessId::current(), "Reply to {} dropped: {}", client_id, e);
        }
    }

    /// Apply one browser message exactly like the matching REST call
    async fn handle_browser_message(&self, client_id: Uuid, text: &str) {
        let message: BrowserMessage = match serde_json::from_str(text) {
            Ok(message) => message,
            Err(e) => {
                let message = format!("Invalid message: {}", e);
                self.reply(client_id, ClientMessage::Error { message }).await;
                return;
            }
        };

        match message.into_action() {
            Some(action) => {
                if let Err(e) = self.apply_action(action).await {
                    self.reply(client_id, ClientMessage::Error { message: e.to_string() }).await;
                }
            }
            None => {
                let session = self.state.session().await;
                self.reply(client_id, session.view_update()).await;
            }
        }
    }
}

/// Selection response: the new view, with its revision in a header
fn view_response((revision, view): (u64, FilterView)) -> Response {
    ([(REVISION_HEADER, revision.to_string())], Json(view)).into_response()
}

fn file_response(file: StaticFileResponse) -> Response {
    let mut response = (StatusCode::OK, [(header::CONTENT_TYPE, file.content_type)], file.content).into_response();
    if let Some(cache) = file.cache_control.and_then(|value| HeaderValue::from_str(&value).ok()) {
        response.headers_mut().insert(header::CACHE_CONTROL, cache);
    }
    response
}

// HTTP Handlers

async fn serve_index<W, S>(State(server): State<WebServer<W, S>>) -> WebServerResult<Response>
where
    W: WebSocketManager + 'static,
    S: StaticFileServer + 'static,
{
    Ok(file_response(server.static_server.serve_file("index.html").await?))
}

async fn serve_static<W, S>(
    Path(path): Path<String>,
    State(server): State<WebServer<W, S>>,
) -> WebServerResult<Response>
where
    W: WebSocketManager + 'static,
    S: StaticFileServer + 'static,
{
    Ok(file_response(server.static_server.serve_file(&path).await?))
}

async fn health_check<W, S>(State(server): State<WebServer<W, S>>) -> Json<HealthResponse>
where
    W: WebSocketManager + 'static,
    S: StaticFileServer + 'static,
{
    Json(HealthResponse {
        status: "healthy".to_string(),
        uptime_seconds: server.state.uptime_seconds(),
        active_clients: server.websocket_manager.client_count().await,
        dataset_origin: server.state.origin().to_string(),
        strategies: server.state.dataset().strategy_count(),
    })
}

async fn dataset_handler<W, S>(State(server): State<WebServer<W, S>>) -> Json<LogicModelDataset>
where
    W: WebSocketManager + 'static,
    S: StaticFileServer + 'static,
{
    Json(server.state.dataset().as_ref().clone())
}

async fn view_handler<W, S>(State(server): State<WebServer<W, S>>) -> Response
where
    W: WebSocketManager + 'static,
    S: StaticFileServer + 'static,
{
    let session = server.state.session().await;
    view_response((session.revision(), session.view().clone()))
}

async fn connected_handler<W, S>(
    Path(relation): Path<String>,
    State(server): State<WebServer<W, S>>,
) -> WebServerResult<Json<ConnectedItems>>
where
    W: WebSocketManager + 'static,
    S: StaticFileServer + 'static,
{
    let relation: Relation = relation.parse()?;
    let indices: Vec<usize> = server.state.connected_items(relation).await.into_iter().collect();
    let labels = server.state.dataset().labels(relation);

    Ok(Json(ConnectedItems {
        relation,
        labels: indices.iter().filter_map(|&index| labels.get(index).cloned()).collect(),
        indices,
    }))
}

async fn select_pbc_handler<W, S>(
    State(server): State<WebServer<W, S>>,
    Json(request): Json<SelectPbcRequest>,
) -> WebServerResult<Response>
where
    W: WebSocketManager + 'static,
    S: StaticFileServer + 'static,
{
    Ok(view_response(server.apply_action(SelectionAction::SelectPbc { name: request.name }).await?))
}

async fn select_partner_handler<W, S>(
    State(server): State<WebServer<W, S>>,
    Json(request): Json<SelectIndexRequest>,
) -> WebServerResult<Response>
where
    W: WebSocketManager + 'static,
    S: StaticFileServer + 'static,
{
    Ok(view_response(server.apply_action(SelectionAction::SelectPartner { index: request.index }).await?))
}

async fn select_strategy_handler<W, S>(
    State(server): State<WebServer<W, S>>,
    Json(request): Json<SelectIndexRequest>,
) -> WebServerResult<Response>
where
    W: WebSocketManager + 'static,
    S: StaticFileServer + 'static,
{
    Ok(view_response(server.apply_action(SelectionAction::SelectStrategy { index: request.index }).await?))
}

async fn clear_handler<W, S>(State(server): State<WebServer<W, S>>) -> WebServerResult<Response>
where
    W: WebSocketManager + 'static,
    S: StaticFileServer + 'static,
{
    Ok(view_response(server.apply_action(SelectionAction::ClearAll).await?))
}

async fn websocket_handler<W, S>(ws: WebSocketUpgrade, State(server): State<WebServer<W, S>>) -> Response
where
    W: WebSocketManager + 'static,
    S: StaticFileServer + 'static,
{
    ws.on_upgrade(move |socket| handle_websocket(socket, server))
}

/// Run one browser connection until either side closes
async fn handle_websocket<W, S>(socket: WebSocket, server: WebServer<W, S>)
where
    W: WebSocketManager + 'static,
    S: StaticFileServer + 'static,
{
    let client_id = Uuid::new_v4();
    let (mut ws_tx, mut ws_rx) = socket.split();
    let (tx, mut rx) = mpsc::channel::<ClientMessage>(CLIENT_CHANNEL_CAPACITY);

    if let Err(e) = server.websocket_manager.add_client(client_id, tx).await {
        log_error(ProcessId::current(), "Registering WebSocket client", &e);
        return;
    }
    {
        let session = server.state.session().await;
        server.reply(client_id, session.view_update()).await;
    }

    let mut send_task = tokio::spawn(async move {
        while let Some(message) = rx.recv().await {
            let text = match serde_json::to_string(&message) {
                Ok(text) => text,
                Err(e) => {
                    process_warn!(ProcessId::current(), "Failed to encode message: {}", e);
                    continue;
                }
            };
            if ws_tx.send(Message::Text(text)).await.is_err() {
                break;
            }
        }
    });

    loop {
        tokio::select! {
            incoming = ws_rx.next() => match incoming {
                Some(Ok(Message::Text(text))) => server.handle_browser_message(client_id, &text).await,
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    process_warn!(ProcessId::current(), "WebSocket error for {}: {}", client_id, e);
                    break;
                }
            },
            _ = &mut send_task => break,
        }
    }

    send_task.abort();
    if let Err(e) = server.websocket_manager.remove_client(client_id).await {
        log_error(ProcessId::current(), "Unregistering WebSocket client", &e);
    }
}
