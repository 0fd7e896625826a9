use crate::repository;

///
/// Message shown when backend gave no explanation of the failure
///
pub const VERIFICATION_FAILED_MESSAGE: &str = "Invalid QR code or order not found";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid QR code: {0}")]
    InvalidPayload(&'static str),

    #[error("{message}")]
    VerificationFailed { message: String },
}

impl Error {
    pub fn verification_failed() -> Self {
        Self::VerificationFailed {
            message: VERIFICATION_FAILED_MESSAGE.to_string(),
        }
    }
}

impl From<repository::Error> for Error {
    fn from(err: repository::Error) -> Self {
        match err {
            repository::Error::Api {
                status: _,
                message: Some(message),
            } => Self::VerificationFailed { message },
            _ => Self::verification_failed(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn from_repository_error_backend_message_kept() {
        let err = repository::Error::Api {
            status: StatusCode::NOT_FOUND,
            message: Some("Enrollment not found.".to_string()),
        };

        let err = Error::from(err);

        assert_eq!(
            err,
            Error::VerificationFailed {
                message: "Enrollment not found.".to_string()
            }
        );
    }

    #[test]
    fn from_repository_error_without_message() {
        let err = repository::Error::Api {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: None,
        };

        let err = Error::from(err);

        assert_eq!(err.to_string(), VERIFICATION_FAILED_MESSAGE);
    }

    #[test]
    fn from_repository_error_unauthorized() {
        let err = Error::from(repository::Error::Unauthorized);

        assert_eq!(err, Error::verification_failed());
    }
}
