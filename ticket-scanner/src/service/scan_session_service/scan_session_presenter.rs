use super::ScanState;
use crate::{dto::output::VerificationResult, error::Error};
use async_trait::async_trait;

pub type ScanOutcome = Result<VerificationResult, Error>;

///
/// Screen on which scan session shows its progress and results
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScanSessionPresenter: Send + Sync {
    async fn state_changed(&self, state: ScanState);

    async fn permission_denied(&self);

    ///
    /// Shows verification outcome (details or error dialog).
    /// Completes when operator dismisses it.
    ///
    async fn present(&self, outcome: &ScanOutcome);
}
