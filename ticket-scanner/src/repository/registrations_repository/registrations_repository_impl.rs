use super::RegistrationsRepository;
use crate::repository::{self, ApiClient, EventRegistration};
use async_trait::async_trait;

const EVENT_REGISTRATIONS: &str = "event-registrations";

pub struct RegistrationsRepositoryImpl {
    api_client: ApiClient,
}

impl RegistrationsRepositoryImpl {
    pub fn new(api_client: ApiClient) -> Self {
        Self { api_client }
    }
}

#[async_trait]
impl RegistrationsRepository for RegistrationsRepositoryImpl {
    async fn find(&self, registration_id: &str) -> Result<EventRegistration, repository::Error> {
        tracing::debug!(registration_id, "fetching event registration");

        self.api_client
            .get(&[EVENT_REGISTRATIONS, registration_id])
            .await
    }
}
