use crate::{dto::input::TicketPayload, dto::output::VerificationResult, error::Error};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VerificationService: Send + Sync {
    ///
    /// Resolves scanned ticket into details of the order.
    /// Lookup is read-only, ticket is not marked as used.
    ///
    /// ### Errors
    /// - [Error::VerificationFailed]
    ///
    async fn verify(&self, payload: &TicketPayload) -> Result<VerificationResult, Error>;
}
