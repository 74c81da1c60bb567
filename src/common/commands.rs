use super::types::RequestId;

/// Lệnh UI gửi xuống tầng mạng.
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Ask the worker for a bot reply to `text`.
    RequestReply { request_id: RequestId, text: String },
}
