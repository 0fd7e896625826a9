use strum::Display;

///
/// Externally visible state of the scan session
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ScanState {
    Idle,
    Scanning,
    Verifying,
    ResultShown,
}
