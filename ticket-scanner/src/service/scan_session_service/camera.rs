use async_trait::async_trait;

///
/// Source of decoded QR payloads.
///
/// Camera is exclusively owned by a single scan session.
/// While disarmed it must not hand out detections, whatever
/// it captured in the meantime is discarded by [Camera::arm].
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Camera: Send {
    ///
    /// Asks operator for access to the camera.
    /// Returns `false` when access was denied.
    ///
    async fn request_permission(&mut self) -> bool;

    async fn arm(&mut self);

    async fn disarm(&mut self);

    ///
    /// Waits for the next decoded payload.
    /// Returns [None] when camera got closed and no more payloads will come.
    ///
    async fn next_detection(&mut self) -> Option<String>;

    async fn release(&mut self);
}
