use super::VerificationService;
use crate::{
    dto::{
        input::{TicketId, TicketPayload},
        output::VerificationResult,
    },
    error::Error,
    repository::{EnrollmentsRepository, RegistrationsRepository},
};
use async_trait::async_trait;
use std::sync::Arc;

pub struct VerificationServiceImpl {
    enrollments_repository: Arc<dyn EnrollmentsRepository>,
    registrations_repository: Arc<dyn RegistrationsRepository>,
}

impl VerificationServiceImpl {
    pub fn new(
        enrollments_repository: Arc<dyn EnrollmentsRepository>,
        registrations_repository: Arc<dyn RegistrationsRepository>,
    ) -> Self {
        Self {
            enrollments_repository,
            registrations_repository,
        }
    }
}

#[async_trait]
impl VerificationService for VerificationServiceImpl {
    ///
    /// Calls exactly one endpoint: enrollment details for
    /// [TicketId::Enrollment], event registration details otherwise.
    ///
    /// ### Errors
    /// - [Error::VerificationFailed] with backend message when backend explained
    ///   the failure, generic message in every other case
    ///
    #[tracing::instrument(name = "Verification", skip_all, fields(ticket = %payload.id))]
    async fn verify(&self, payload: &TicketPayload) -> Result<VerificationResult, Error> {
        tracing::info!("verifying ticket");

        let result = match &payload.id {
            TicketId::Enrollment(enrollment_id) => {
                let enrollment = self
                    .enrollments_repository
                    .find(enrollment_id)
                    .await
                    .inspect_err(|err| tracing::warn!(%err, "enrollment lookup failed"))?;
                VerificationResult::CourseEnrollment(enrollment.into())
            }
            TicketId::Registration(registration_id) => {
                let registration = self
                    .registrations_repository
                    .find(registration_id)
                    .await
                    .inspect_err(|err| tracing::warn!(%err, "registration lookup failed"))?;
                VerificationResult::EventRegistration(registration.into())
            }
        };

        tracing::info!(kind = result.kind(), "ticket verified");

        Ok(result)
    }
}
