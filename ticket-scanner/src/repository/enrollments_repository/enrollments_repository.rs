use crate::repository::{self, Enrollment};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentsRepository: Send + Sync {
    async fn find(&self, enrollment_id: &str) -> Result<Enrollment, repository::Error>;
}
