use crate::models::FlashMessage;
use std::collections::VecDeque;
use tokio::sync::Mutex;

/// Queue of flash messages waiting to be shown after a redirect
#[derive(Debug, Default)]
pub struct FlashQueue {
    pending: Mutex<VecDeque<FlashMessage>>,
}

impl FlashQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn push(&self, message: FlashMessage) {
        tracing::debug!("Flash ({:?}): {}", message.level, message.message);
        self.pending.lock().await.push_back(message);
    }

    /// Take every pending message, oldest first
    pub async fn drain(&self) -> Vec<FlashMessage> {
        self.pending.lock().await.drain(..).collect()
    }
}
