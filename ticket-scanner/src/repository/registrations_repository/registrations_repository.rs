use crate::repository::{self, EventRegistration};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationsRepository: Send + Sync {
    async fn find(&self, registration_id: &str) -> Result<EventRegistration, repository::Error>;
}
