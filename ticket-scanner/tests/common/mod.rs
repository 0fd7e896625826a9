use async_trait::async_trait;
use jwt_session::Session;
use serde_json::{json, Value};
use std::{sync::Arc, time::Duration};
use ticket_scanner::{
    repository::{
        ApiClient, ApiClientConfig, EnrollmentsRepositoryImpl, RegistrationsRepositoryImpl,
    },
    service::{
        scan_session_service::{ScanOutcome, ScanSessionPresenter, ScanState},
        verification_service::{VerificationService, VerificationServiceImpl},
    },
};
use tokio::{sync::mpsc, time::timeout};
use wiremock::MockServer;

pub const TIMEOUT: Duration = Duration::from_secs(5);

///
/// Presenter dismissing every result immediately
/// and forwarding everything it was shown
///
pub struct RecordingPresenter {
    states_tx: mpsc::UnboundedSender<ScanState>,
    outcomes_tx: mpsc::UnboundedSender<ScanOutcome>,
}

#[async_trait]
impl ScanSessionPresenter for RecordingPresenter {
    async fn state_changed(&self, state: ScanState) {
        let _ = self.states_tx.send(state);
    }

    async fn permission_denied(&self) {}

    async fn present(&self, outcome: &ScanOutcome) {
        let _ = self.outcomes_tx.send(outcome.clone());
    }
}

pub fn recording_presenter() -> (
    RecordingPresenter,
    mpsc::UnboundedReceiver<ScanState>,
    mpsc::UnboundedReceiver<ScanOutcome>,
) {
    let (states_tx, states_rx) = mpsc::unbounded_channel();
    let (outcomes_tx, outcomes_rx) = mpsc::unbounded_channel();
    let presenter = RecordingPresenter {
        states_tx,
        outcomes_tx,
    };

    (presenter, states_rx, outcomes_rx)
}

pub async fn wait_for_state(
    states_rx: &mut mpsc::UnboundedReceiver<ScanState>,
    state: ScanState,
) {
    timeout(TIMEOUT, async {
        while let Some(received) = states_rx.recv().await {
            if received == state {
                return;
            }
        }
        panic!("session finished before reaching {state}");
    })
    .await
    .unwrap();
}

pub async fn next_outcome(
    outcomes_rx: &mut mpsc::UnboundedReceiver<ScanOutcome>,
) -> ScanOutcome {
    timeout(TIMEOUT, outcomes_rx.recv()).await.unwrap().unwrap()
}

pub fn create_verification_service(
    server: &MockServer,
    access_token: &str,
    refresh_token: Option<&str>,
) -> Arc<dyn VerificationService> {
    let session = Session::new(
        access_token.to_string(),
        refresh_token.map(ToString::to_string),
    );
    let config = ApiClientConfig {
        base_url: format!("{}/api/v1", server.uri()),
        timeout: TIMEOUT,
    };
    let api_client = ApiClient::new(config, Arc::new(session)).unwrap();

    Arc::new(VerificationServiceImpl::new(
        Arc::new(EnrollmentsRepositoryImpl::new(api_client.clone())),
        Arc::new(RegistrationsRepositoryImpl::new(api_client)),
    ))
}

pub fn enrollment_json(enrollment_id: &str) -> Value {
    json!({
        "id": enrollment_id,
        "student": { "email": "jane@example.com", "first_name": "Jane", "last_name": "Doe" },
        "course": { "title": "Emergency Medicine" },
        "is_active": true,
        "progress_percentage": 40,
        "enrolled_at": "2025-03-07T09:30:12Z",
        "amount_paid": "49.99",
        "currency": "EUR",
        "payment_reference": "pi_3PXyz"
    })
}

pub fn registration_json(registration_id: &str) -> Value {
    json!({
        "id": registration_id,
        "event": { "title": "Cardiology Summit", "start_date": "2025-11-02T18:00:00+01:00" },
        "attendee": { "email": "john@example.com", "first_name": "John", "last_name": "Smith" },
        "is_cancelled": true,
        "attended": false,
        "registered_at": "2025-10-01T12:00:00Z"
    })
}
