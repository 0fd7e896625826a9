use crate::repository::{Enrollment, EventRegistration, User};
use serde::Serialize;
use strum::{Display, IntoStaticStr};
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Serialize, IntoStaticStr)]
#[serde(tag = "type")]
pub enum VerificationResult {
    #[serde(rename = "Course Enrollment")]
    #[strum(serialize = "Course Enrollment")]
    CourseEnrollment(CourseEnrollmentResult),

    #[serde(rename = "Event Registration")]
    #[strum(serialize = "Event Registration")]
    EventRegistration(EventRegistrationResult),
}

impl VerificationResult {
    /// Same value as the serialized `type` tag
    pub fn kind(&self) -> &'static str {
        self.into()
    }

    pub fn id(&self) -> &str {
        match self {
            VerificationResult::CourseEnrollment(result) => &result.id,
            VerificationResult::EventRegistration(result) => &result.id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseEnrollmentResult {
    pub id: String,
    pub student_name: String,
    pub student_email: String,
    pub course_name: String,
    pub amount: String,
    pub purchase_date: String,
    pub status: EnrollmentStatus,
    pub progress: i32,
    pub payment_reference: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventRegistrationResult {
    pub id: String,
    pub attendee_name: String,
    pub attendee_email: String,
    pub event_name: String,
    pub event_date: String,
    pub registration_date: String,
    pub status: RegistrationStatus,
    pub attended: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum EnrollmentStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum RegistrationStatus {
    Confirmed,
    Cancelled,
}

impl From<Enrollment> for CourseEnrollmentResult {
    fn from(value: Enrollment) -> Self {
        let amount = match value.amount_paid {
            Some(amount_paid) => format!("{amount_paid} {}", value.currency),
            None => "N/A".to_string(),
        };
        let status = match value.is_active {
            true => EnrollmentStatus::Active,
            false => EnrollmentStatus::Inactive,
        };

        Self {
            id: value.id,
            student_name: full_name(&value.student),
            student_email: value.student.email,
            course_name: value.course.title,
            amount,
            purchase_date: long_date(value.enrolled_at),
            status,
            progress: value.progress_percentage,
            payment_reference: value
                .payment_reference
                .filter(|reference| !reference.is_empty()),
        }
    }
}

impl From<EventRegistration> for EventRegistrationResult {
    fn from(value: EventRegistration) -> Self {
        let status = match value.is_cancelled {
            true => RegistrationStatus::Cancelled,
            false => RegistrationStatus::Confirmed,
        };

        Self {
            id: value.id,
            attendee_name: full_name(&value.attendee),
            attendee_email: value.attendee.email,
            event_name: value.event.title,
            event_date: long_date(value.event.start_date),
            registration_date: long_date(value.registered_at),
            status,
            attended: value.attended,
        }
    }
}

fn full_name(user: &User) -> String {
    format!("{} {}", user.first_name, user.last_name)
}

///
/// US long date ("October 19, 2026") in the offset sent by backend
///
fn long_date(datetime: OffsetDateTime) -> String {
    format!(
        "{} {}, {}",
        datetime.month(),
        datetime.day(),
        datetime.year()
    )
}
