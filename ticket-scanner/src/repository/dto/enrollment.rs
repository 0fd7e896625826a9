use super::User;
use serde::Deserialize;
use time::OffsetDateTime;

#[derive(Debug, Clone, Deserialize)]
pub struct Enrollment {
    pub id: String,
    pub student: User,
    pub course: EnrollmentCourse,
    pub is_active: bool,
    pub progress_percentage: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub enrolled_at: OffsetDateTime,
    #[serde(default, deserialize_with = "de_decimal::deserialize")]
    pub amount_paid: Option<String>,
    pub currency: String,
    #[serde(default)]
    pub payment_reference: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnrollmentCourse {
    pub title: String,
}

mod de_decimal {
    //!
    //! Backend serializes decimals as strings ("49.99"),
    //! numbers are accepted too and kept as written
    //!

    use serde::{Deserialize, Deserializer};
    use serde_json::Number;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Decimal {
        Text(String),
        Number(Number),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        let decimal = Option::<Decimal>::deserialize(d)?.map(|decimal| match decimal {
            Decimal::Text(text) => text,
            Decimal::Number(number) => number.to_string(),
        });

        Ok(decimal)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn enrollment_json_deserialize_ok() {
        let json = r#"{
            "id": "abc-123",
            "student": {
                "id": "4f0c",
                "username": "jane",
                "email": "jane@example.com",
                "first_name": "Jane",
                "last_name": "Doe",
                "role": "student"
            },
            "course": { "id": "c-1", "title": "Emergency Medicine", "price": "49.99" },
            "is_active": true,
            "progress_percentage": 40,
            "enrolled_at": "2025-03-07T09:30:12.123456Z",
            "completed_at": null,
            "lesson_progress": [],
            "paid": true,
            "amount_paid": "49.99",
            "currency": "EUR",
            "payment_reference": "0c8f6d1e",
            "qr_code": "iVBORw0KGgo="
        }"#;

        let enrollment = serde_json::from_str::<Enrollment>(json).unwrap();

        assert_eq!(enrollment.student.first_name, "Jane");
        assert_eq!(enrollment.course.title, "Emergency Medicine");
        assert_eq!(
            enrollment.enrolled_at.replace_nanosecond(0).unwrap(),
            datetime!(2025-03-07 09:30:12 UTC)
        );
        assert_eq!(enrollment.amount_paid.as_deref(), Some("49.99"));
        assert_eq!(enrollment.payment_reference.as_deref(), Some("0c8f6d1e"));
    }

    #[test]
    fn enrollment_json_deserialize_numeric_amount() {
        let json = r#"{
            "id": "abc-123",
            "student": { "email": "jane@example.com", "first_name": "Jane", "last_name": "Doe" },
            "course": { "title": "Emergency Medicine" },
            "is_active": true,
            "progress_percentage": 0,
            "enrolled_at": "2025-03-07T09:30:12+02:00",
            "amount_paid": 120.5,
            "currency": "EUR"
        }"#;

        let enrollment = serde_json::from_str::<Enrollment>(json).unwrap();

        assert_eq!(enrollment.amount_paid.as_deref(), Some("120.5"));
        assert_eq!(enrollment.payment_reference, None);
    }

    #[test]
    fn enrollment_json_deserialize_free_course() {
        let json = r#"{
            "id": "abc-123",
            "student": { "email": "jane@example.com", "first_name": "Jane", "last_name": "Doe" },
            "course": { "title": "Emergency Medicine" },
            "is_active": true,
            "progress_percentage": 0,
            "enrolled_at": "2025-03-07T09:30:12Z",
            "amount_paid": null,
            "currency": "EUR",
            "payment_reference": null
        }"#;

        let enrollment = serde_json::from_str::<Enrollment>(json).unwrap();

        assert_eq!(enrollment.amount_paid, None);
    }

    #[test]
    fn enrollment_json_deserialize_invalid_timestamp() {
        let json = r#"{
            "id": "abc-123",
            "student": { "email": "jane@example.com", "first_name": "Jane", "last_name": "Doe" },
            "course": { "title": "Emergency Medicine" },
            "is_active": true,
            "progress_percentage": 0,
            "enrolled_at": "yesterday",
            "currency": "EUR"
        }"#;

        let enrollment = serde_json::from_str::<Enrollment>(json);

        assert!(enrollment.is_err());
    }
}
