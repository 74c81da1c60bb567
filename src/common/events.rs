use super::types::{ReplySource, RequestId};

/// Sự kiện từ tầng mạng gửi lên UI.
#[derive(Debug, Clone)]
pub enum NetworkEvent {
    ReplyReady {
        request_id: RequestId,
        html: String,
        source: ReplySource,
    },
}
