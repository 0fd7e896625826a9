use super::{discard_pending, SharedLines};
use crate::service::scan_session_service::Camera;
use async_trait::async_trait;

pub struct TerminalCamera {
    lines: SharedLines,
}

impl TerminalCamera {
    pub fn new(lines: SharedLines) -> Self {
        Self { lines }
    }
}

#[async_trait]
impl Camera for TerminalCamera {
    async fn request_permission(&mut self) -> bool {
        true
    }

    async fn arm(&mut self) {
        discard_pending(&mut *self.lines.lock().await);
    }

    async fn disarm(&mut self) {}

    async fn next_detection(&mut self) -> Option<String> {
        let mut lines = self.lines.lock().await;
        loop {
            let line = lines.recv().await?;
            let line = line.trim();
            if !line.is_empty() {
                return Some(line.to_string());
            }
        }
    }

    async fn release(&mut self) {
        self.lines.lock().await.close();
    }
}
