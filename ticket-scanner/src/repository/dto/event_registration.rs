use super::User;
use serde::Deserialize;
use time::OffsetDateTime;

#[derive(Debug, Clone, Deserialize)]
pub struct EventRegistration {
    pub id: String,
    pub attendee: User,
    pub event: RegistrationEvent,
    #[serde(with = "time::serde::rfc3339")]
    pub registered_at: OffsetDateTime,
    pub is_cancelled: bool,
    pub attended: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationEvent {
    pub title: String,
    #[serde(with = "time::serde::rfc3339")]
    pub start_date: OffsetDateTime,
}
