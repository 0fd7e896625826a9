use super::EnrollmentsRepository;
use crate::repository::{self, ApiClient, Enrollment};
use async_trait::async_trait;

const ENROLLMENTS: &str = "enrollments";

pub struct EnrollmentsRepositoryImpl {
    api_client: ApiClient,
}

impl EnrollmentsRepositoryImpl {
    pub fn new(api_client: ApiClient) -> Self {
        Self { api_client }
    }
}

#[async_trait]
impl EnrollmentsRepository for EnrollmentsRepositoryImpl {
    ///
    /// Fetches enrollment details, requires admin session
    ///
    async fn find(&self, enrollment_id: &str) -> Result<Enrollment, repository::Error> {
        tracing::debug!(enrollment_id, "fetching enrollment");

        self.api_client.get(&[ENROLLMENTS, enrollment_id]).await
    }
}
