use std::error::Error;

use reqwest::StatusCode;
use tokio::sync::mpsc;

use crate::common::types::{ReplyBody, ReplyRequest};
use crate::common::{NetworkCommand, NetworkEvent, ReplySource, RequestId};

use super::fallback::keyword_reply;

/// Every way the remote call can fail. The fallback treats them all alike.
#[derive(Debug, thiserror::Error)]
pub enum ReplyError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("endpoint answered {0}")]
    Status(StatusCode),
    #[error("unexpected response body: {0}")]
    Body(#[source] reqwest::Error),
}

/// Worker nhận lệnh từ UI và gọi backend, mỗi lần một yêu cầu.
pub struct ReplyClient {
    event_sender: mpsc::Sender<NetworkEvent>,
    command_receiver: mpsc::Receiver<NetworkCommand>,
    http: reqwest::Client,
    endpoint: String,
}

impl ReplyClient {
    pub fn new(
        event_sender: mpsc::Sender<NetworkEvent>,
        command_receiver: mpsc::Receiver<NetworkCommand>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            event_sender,
            command_receiver,
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Runs until the UI drops its command sender. Commands are handled
    /// strictly in arrival order, so replies leave in request order.
    pub async fn run(mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        log::info!("Reply worker started (endpoint: {})", self.endpoint);

        while let Some(command) = self.command_receiver.recv().await {
            self.handle_command(command).await?;
        }

        log::info!("Command channel closed; reply worker stopping");
        Ok(())
    }

    async fn handle_command(
        &mut self,
        command: NetworkCommand,
    ) -> Result<(), mpsc::error::SendError<NetworkEvent>> {
        match command {
            NetworkCommand::RequestReply { request_id, text } => {
                let (html, source) = self.fetch_reply(&text).await;
                self.emit_reply(request_id, html, source).await
            }
        }
    }

    async fn emit_reply(
        &self,
        request_id: RequestId,
        html: String,
        source: ReplySource,
    ) -> Result<(), mpsc::error::SendError<NetworkEvent>> {
        self.event_sender
            .send(NetworkEvent::ReplyReady {
                request_id,
                html,
                source,
            })
            .await
    }

    /// Never fails: a failed remote call resolves to the keyword responder.
    pub async fn fetch_reply(&self, user_text: &str) -> (String, ReplySource) {
        match self.remote_reply(user_text).await {
            Ok(html) => (html, ReplySource::Remote),
            Err(err) => {
                log::info!("Backend unavailable ({err}); using demo responses");
                (keyword_reply(user_text), ReplySource::Fallback)
            }
        }
    }

    pub async fn remote_reply(&self, user_text: &str) -> Result<String, ReplyError> {
        let response = self
            .http
            .post(self.endpoint.as_str())
            .json(&ReplyRequest { message: user_text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReplyError::Status(status));
        }

        let body: ReplyBody = response.json().await.map_err(ReplyError::Body)?;
        log::debug!("Received {} bytes of reply from backend", body.response.len());
        Ok(body.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Author;
    use crate::ui::controller::{ChatController, ChatView};
    use crate::ui::state::AppState;
    use axum::http::StatusCode as AxumStatus;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{Value, json};
    use tokio::net::TcpListener;

    async fn serve(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/api/chat")
    }

    /// An address nothing listens on.
    async fn dead_endpoint() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}/api/chat")
    }

    fn client_for(endpoint: String) -> ReplyClient {
        let (event_tx, _event_rx) = mpsc::channel(1);
        let (_cmd_tx, cmd_rx) = mpsc::channel(1);
        ReplyClient::new(event_tx, cmd_rx, endpoint)
    }

    #[tokio::test]
    async fn remote_reply_is_returned_verbatim() {
        let endpoint = serve(Router::new().route(
            "/api/chat",
            post(|| async { Json(json!({ "response": "ok" })) }),
        ))
        .await;

        let (html, source) = client_for(endpoint).fetch_reply("fever?").await;
        assert_eq!(html, "ok");
        assert_eq!(source, ReplySource::Remote);
    }

    #[tokio::test]
    async fn request_carries_user_text_as_message() {
        let endpoint = serve(Router::new().route(
            "/api/chat",
            post(|Json(body): Json<Value>| async move {
                Json(json!({ "response": body["message"] }))
            }),
        ))
        .await;

        let html = client_for(endpoint).remote_reply("echo me").await.unwrap();
        assert_eq!(html, "echo me");
    }

    #[tokio::test]
    async fn non_success_status_falls_back() {
        let endpoint = serve(Router::new().route(
            "/api/chat",
            post(|| async { (AxumStatus::INTERNAL_SERVER_ERROR, "boom") }),
        ))
        .await;

        let client = client_for(endpoint);
        assert!(matches!(
            client.remote_reply("fever").await,
            Err(ReplyError::Status(status)) if status == StatusCode::INTERNAL_SERVER_ERROR
        ));

        let (html, source) = client.fetch_reply("I have a fever").await;
        assert_eq!(source, ReplySource::Fallback);
        assert!(html.contains("Body temperature above 100.4"));
    }

    #[tokio::test]
    async fn malformed_body_falls_back() {
        let endpoint = serve(Router::new().route(
            "/api/chat",
            post(|| async { Json(json!({ "answer": "wrong field" })) }),
        ))
        .await;

        let client = client_for(endpoint);
        assert!(matches!(
            client.remote_reply("burn").await,
            Err(ReplyError::Body(_))
        ));

        let (html, source) = client.fetch_reply("burn").await;
        assert_eq!(source, ReplySource::Fallback);
        assert!(html.contains("Cool the burn"));
    }

    #[tokio::test]
    async fn unreachable_endpoint_falls_back() {
        let (html, source) = client_for(dead_endpoint().await)
            .fetch_reply("I have a headache")
            .await;
        assert_eq!(source, ReplySource::Fallback);
        assert!(html.contains("Tension, Migraine, Cluster"));
    }

    #[tokio::test]
    async fn worker_answers_commands_in_order_and_stops_on_close() {
        let endpoint = serve(Router::new().route(
            "/api/chat",
            post(|Json(body): Json<Value>| async move {
                Json(json!({ "response": format!("re: {}", body["message"].as_str().unwrap_or_default()) }))
            }),
        ))
        .await;

        let (event_tx, mut event_rx) = mpsc::channel(8);
        let (cmd_tx, cmd_rx) = mpsc::channel(8);
        let worker = tokio::spawn(ReplyClient::new(event_tx, cmd_rx, endpoint).run());

        for (request_id, text) in [(1, "first"), (2, "second"), (3, "third")] {
            cmd_tx
                .send(NetworkCommand::RequestReply {
                    request_id,
                    text: text.to_string(),
                })
                .await
                .unwrap();
        }
        drop(cmd_tx);

        let mut seen = Vec::new();
        while let Some(NetworkEvent::ReplyReady {
            request_id, html, ..
        }) = event_rx.recv().await
        {
            seen.push((request_id, html));
        }

        assert_eq!(
            seen,
            vec![
                (1, "re: first".to_string()),
                (2, "re: second".to_string()),
                (3, "re: third".to_string()),
            ]
        );
        assert!(worker.await.unwrap().is_ok());
    }

    async fn exchange(endpoint: String, input: &str) -> ChatController<AppState> {
        let (event_tx, mut event_rx) = mpsc::channel(8);
        let (cmd_tx, cmd_rx) = mpsc::channel(8);
        tokio::spawn(ReplyClient::new(event_tx, cmd_rx, endpoint).run());

        let mut controller = ChatController::new(AppState::new(), cmd_tx);
        controller.view_mut().set_input_text(input);
        controller.send_message();
        assert!(controller.view().typing_indicator_visible());

        let event = event_rx.recv().await.expect("worker replied");
        controller.handle_event(event);
        controller
    }

    #[tokio::test]
    async fn end_to_end_remote_reply() {
        let endpoint = serve(Router::new().route(
            "/api/chat",
            post(|| async { Json(json!({ "response": "ok" })) }),
        ))
        .await;

        let controller = exchange(endpoint, "anything").await;
        let messages = &controller.view().messages;
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].author, Author::User);
        assert_eq!(messages[1].author, Author::Bot);
        assert_eq!(messages[1].text, "ok");
        assert!(!controller.view().typing_indicator_visible());
        assert_eq!(controller.view().reply_source, Some(ReplySource::Remote));
    }

    #[tokio::test]
    async fn end_to_end_fallback_reply() {
        let controller = exchange(dead_endpoint().await, "I have a headache").await;
        let messages = &controller.view().messages;
        assert_eq!(messages.len(), 2);
        assert!(messages[1].text.contains("Tension, Migraine, Cluster"));
        assert!(!controller.view().typing_indicator_visible());
        assert_eq!(controller.view().reply_source, Some(ReplySource::Fallback));
    }
}
