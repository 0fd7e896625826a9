use super::ApplicationEnv;
use crate::{
    repository::{
        ApiClient, ApiClientConfig, EnrollmentsRepositoryImpl, RegistrationsRepositoryImpl,
    },
    service::verification_service::{VerificationService, VerificationServiceImpl},
};
use jwt_session::Session;
use std::sync::Arc;

#[derive(Clone)]
pub struct ApplicationState {
    pub verification_service: Arc<dyn VerificationService>,
}

pub fn create_state(env: &ApplicationEnv) -> anyhow::Result<ApplicationState> {
    tracing::info!("creating session");
    let session = Session::new(env.access_token.clone(), env.refresh_token.clone());
    let session = Arc::new(session);

    tracing::info!("creating api client");
    let config = ApiClientConfig {
        base_url: env.api_base_url.clone(),
        timeout: env.api_timeout,
    };
    let api_client = ApiClient::new(config, session)?;

    tracing::info!("creating repositories");
    let enrollments_repository = EnrollmentsRepositoryImpl::new(api_client.clone());
    let enrollments_repository = Arc::new(enrollments_repository);
    let registrations_repository = RegistrationsRepositoryImpl::new(api_client);
    let registrations_repository = Arc::new(registrations_repository);

    tracing::info!("creating services");
    let verification_service =
        VerificationServiceImpl::new(enrollments_repository, registrations_repository);
    let verification_service = Arc::new(verification_service);

    Ok(ApplicationState {
        verification_service,
    })
}
