use super::{Camera, ScanOutcome, ScanSessionPresenter, ScanState};
use crate::{
    dto::input::TicketPayload, error::Error, service::verification_service::VerificationService,
};
use futures::FutureExt;
use std::{panic::AssertUnwindSafe, sync::Arc};
use tokio::sync::Notify;
use tracing::Instrument;
use uuid::Uuid;

pub struct ScanSessionStateMachine<C, P> {
    verification_service: Arc<dyn VerificationService>,
    camera: C,
    presenter: P,
    permission_granted: bool,
    state: State,
}

impl<C, P> ScanSessionStateMachine<C, P>
where
    C: Camera + 'static,
    P: ScanSessionPresenter + 'static,
{
    pub fn new(
        verification_service: Arc<dyn VerificationService>,
        camera: C,
        presenter: P,
    ) -> Self {
        Self {
            verification_service,
            camera,
            presenter,
            permission_granted: false,
            state: State::Idle,
        }
    }

    ///
    /// Scan loop running until camera gets closed, permission is denied
    /// or stop is notified.
    /// Stopping drops in-flight verification, its outcome is never presented.
    /// Camera is released in every case.
    ///
    #[tracing::instrument(name = "Scan Session", skip_all)]
    pub async fn run(mut self, stop: Arc<Notify>) {
        tracing::info!("state machine started");

        tokio::select! {
            biased;

            _ = stop.notified() => {
                tracing::info!("scan session stopped");
            }

            _ = async { loop {
                match std::mem::replace(&mut self.state, State::Finished) {
                    State::Idle => {
                        tracing::info!("state: Idle");
                        self.idle_state().await;
                    }
                    State::Scanning => {
                        tracing::info!("state: Scanning");
                        self.scanning_state().await;
                    }
                    State::Verifying(raw) => {
                        tracing::info!("state: Verifying");
                        self.verifying_state(raw).await;
                    }
                    State::ResultShown(outcome) => {
                        tracing::info!("state: ResultShown");
                        self.result_shown_state(outcome).await;
                    }
                    State::Finished => break,
                }
            }} => {}
        }

        tracing::info!("releasing camera");
        self.camera.release().await;

        tracing::info!("state machine finished");
    }

    async fn idle_state(&mut self) {
        self.presenter.state_changed(ScanState::Idle).await;

        if !self.permission_granted {
            if !self.camera.request_permission().await {
                tracing::warn!("camera permission denied");
                self.presenter.permission_denied().await;
                self.state = State::Finished;
                return;
            }
            self.permission_granted = true;
        }

        self.camera.arm().await;
        self.state = State::Scanning;
    }

    async fn scanning_state(&mut self) {
        self.presenter.state_changed(ScanState::Scanning).await;

        self.state = match self.camera.next_detection().await {
            Some(raw) => {
                self.camera.disarm().await;
                tracing::info!("payload captured");
                State::Verifying(raw)
            }
            None => {
                tracing::info!("camera closed");
                State::Finished
            }
        };
    }

    async fn verifying_state(&mut self, raw: String) {
        self.presenter.state_changed(ScanState::Verifying).await;

        let scan_id = Uuid::new_v4();
        let span = tracing::info_span!("scan", %scan_id);

        let verification = Self::parse_and_verify(self.verification_service.as_ref(), &raw);
        let outcome = AssertUnwindSafe(verification)
            .catch_unwind()
            .instrument(span)
            .await
            .unwrap_or_else(|_| {
                tracing::error!(%scan_id, "verification panicked");
                Err(Error::verification_failed())
            });

        match &outcome {
            Ok(result) => tracing::info!(%scan_id, kind = result.kind(), "ticket verified"),
            Err(err) => tracing::warn!(%scan_id, %err, "ticket rejected"),
        }

        self.state = State::ResultShown(outcome);
    }

    async fn result_shown_state(&mut self, outcome: ScanOutcome) {
        self.presenter.state_changed(ScanState::ResultShown).await;
        self.presenter.present(&outcome).await;

        tracing::info!("result dismissed");
        self.state = State::Idle;
    }

    async fn parse_and_verify(
        verification_service: &dyn VerificationService,
        raw: &str,
    ) -> ScanOutcome {
        let payload = TicketPayload::parse(raw)?;
        verification_service.verify(&payload).await
    }
}

enum State {
    Idle,
    Scanning,
    Verifying(String),
    ResultShown(ScanOutcome),
    Finished,
}
