use super::Camera;
use async_trait::async_trait;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use tokio::sync::mpsc;

///
/// Creates [Camera] fed through a channel.
///
/// Handle is meant to be called from the decoder callback of a camera SDK.
/// Camera gets closed once every handle is dropped.
///
pub fn channel_camera(
    permission_granted: bool,
    buffer: usize,
) -> (ChannelCamera, ChannelCameraHandle) {
    let armed = Arc::new(AtomicBool::new(false));
    let (detections_tx, detections_rx) = mpsc::channel(buffer);

    let camera = ChannelCamera {
        permission_granted,
        armed: armed.clone(),
        detections_rx,
    };
    let handle = ChannelCameraHandle {
        armed,
        detections_tx,
    };

    (camera, handle)
}

pub struct ChannelCamera {
    permission_granted: bool,
    armed: Arc<AtomicBool>,
    detections_rx: mpsc::Receiver<String>,
}

#[async_trait]
impl Camera for ChannelCamera {
    async fn request_permission(&mut self) -> bool {
        self.permission_granted
    }

    async fn arm(&mut self) {
        let mut flushed = 0;
        while self.detections_rx.try_recv().is_ok() {
            flushed += 1;
        }
        if flushed > 0 {
            tracing::debug!(flushed, "discarded stale detections");
        }

        self.armed.store(true, Ordering::SeqCst);
    }

    async fn disarm(&mut self) {
        self.armed.store(false, Ordering::SeqCst);
    }

    async fn next_detection(&mut self) -> Option<String> {
        self.detections_rx.recv().await
    }

    async fn release(&mut self) {
        self.armed.store(false, Ordering::SeqCst);
        self.detections_rx.close();
    }
}

#[derive(Clone)]
pub struct ChannelCameraHandle {
    armed: Arc<AtomicBool>,
    detections_tx: mpsc::Sender<String>,
}

impl ChannelCameraHandle {
    ///
    /// Passes decoded payload to the scan session.
    /// Returns `false` when payload was dropped because camera is disarmed,
    /// released or its buffer is full.
    ///
    pub fn detect(&self, payload: impl Into<String>) -> bool {
        if !self.armed.load(Ordering::SeqCst) {
            return false;
        }

        self.detections_tx.try_send(payload.into()).is_ok()
    }

    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::SeqCst)
    }
}
