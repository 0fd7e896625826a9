use super::{discard_pending, SharedLines};
use crate::{
    dto::output::VerificationResult,
    service::scan_session_service::{ScanOutcome, ScanSessionPresenter, ScanState},
};
use async_trait::async_trait;
use std::{
    fmt::Write as _,
    io::Write,
    sync::{Mutex, PoisonError},
};

pub struct TerminalPresenter<W> {
    output: Mutex<W>,
    lines: SharedLines,
}

impl<W> TerminalPresenter<W>
where
    W: Write + Send,
{
    pub fn new(output: W, lines: SharedLines) -> Self {
        Self {
            output: Mutex::new(output),
            lines,
        }
    }

    fn write(&self, text: &str) {
        let mut output = self.output.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(err) = output.write_all(text.as_bytes()).and_then(|_| output.flush()) {
            tracing::warn!(%err, "writing to terminal failed");
        }
    }
}

#[async_trait]
impl<W> ScanSessionPresenter for TerminalPresenter<W>
where
    W: Write + Send,
{
    async fn state_changed(&self, state: ScanState) {
        match state {
            ScanState::Scanning => self.write("Scan ticket QR code:\n"),
            ScanState::Verifying => self.write("Verifying...\n"),
            ScanState::Idle | ScanState::ResultShown => {}
        }
    }

    async fn permission_denied(&self) {
        self.write("Camera permission is required to scan tickets\n");
    }

    async fn present(&self, outcome: &ScanOutcome) {
        let mut lines = self.lines.lock().await;

        // Scans queued during verification must not dismiss the result
        discard_pending(&mut lines);

        self.write(&render(outcome));
        self.write("Press Enter to scan next ticket\n");

        // Closed input dismisses as well, camera reports it right after
        let _ = lines.recv().await;
    }
}

///
/// Formats outcome of the verification as shown on the result screen
///
pub fn render(outcome: &ScanOutcome) -> String {
    let result = match outcome {
        Ok(result) => result,
        Err(err) => return format!("Error: {err}\n"),
    };

    let mut text = format!("{}\n", result.kind());
    let _ = writeln!(text, "  ID: {}", result.id());

    match result {
        VerificationResult::CourseEnrollment(result) => {
            let payment_reference = result.payment_reference.as_deref().unwrap_or("N/A");
            let _ = writeln!(text, "  Student: {}", result.student_name);
            let _ = writeln!(text, "  Email: {}", result.student_email);
            let _ = writeln!(text, "  Course: {}", result.course_name);
            let _ = writeln!(text, "  Amount: {}", result.amount);
            let _ = writeln!(text, "  Purchase date: {}", result.purchase_date);
            let _ = writeln!(text, "  Status: {}", result.status);
            let _ = writeln!(text, "  Progress: {}%", result.progress);
            let _ = writeln!(text, "  Payment reference: {payment_reference}");
        }
        VerificationResult::EventRegistration(result) => {
            let attended = if result.attended { "Yes" } else { "No" };
            let _ = writeln!(text, "  Attendee: {}", result.attendee_name);
            let _ = writeln!(text, "  Email: {}", result.attendee_email);
            let _ = writeln!(text, "  Event: {}", result.event_name);
            let _ = writeln!(text, "  Event date: {}", result.event_date);
            let _ = writeln!(text, "  Registration date: {}", result.registration_date);
            let _ = writeln!(text, "  Status: {}", result.status);
            let _ = writeln!(text, "  Attended: {attended}");
        }
    }

    text
}
