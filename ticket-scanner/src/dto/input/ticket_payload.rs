use crate::error::Error;
use serde_json::{Map, Value};
use std::{fmt, str::FromStr};

pub const ENROLLMENT_ID: &str = "enrollment_id";
pub const REGISTRATION_ID: &str = "registration_id";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketId {
    Enrollment(String),
    Registration(String),
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketId::Enrollment(id) => write!(f, "enrollment {id}"),
            TicketId::Registration(id) => write!(f, "registration {id}"),
        }
    }
}

///
/// Content of the ticket QR code.
///
/// Issuer writes the payload as a Python dictionary literal,
/// e.g. `{'enrollment_id': '6f1c..', 'name': 'Jane Doe'}`.
///
#[derive(Debug, Clone, PartialEq)]
pub struct TicketPayload {
    pub id: TicketId,

    /// Every key of the payload, identifier included
    pub fields: Map<String, Value>,
}

impl TicketPayload {
    ///
    /// Parses raw string read from the QR code.
    ///
    /// `enrollment_id` takes priority when both identifiers are present.
    /// Identifier counts only when it is a non-empty string.
    ///
    /// ### Errors
    /// - [Error::InvalidPayload] when
    ///     - payload is not valid after dialect substitution
    ///     - payload is not an object
    ///     - payload contains neither `enrollment_id` nor `registration_id`
    ///
    pub fn parse(raw: &str) -> Result<Self, Error> {
        let json = dialect_to_json(raw.trim());

        let value = serde_json::from_str::<Value>(&json)
            .map_err(|_| Error::InvalidPayload("malformed payload"))?;
        let Value::Object(fields) = value else {
            return Err(Error::InvalidPayload("payload is not an object"));
        };

        let id = identifier(&fields, ENROLLMENT_ID)
            .map(TicketId::Enrollment)
            .or_else(|| identifier(&fields, REGISTRATION_ID).map(TicketId::Registration))
            .ok_or(Error::InvalidPayload("missing ticket identifier"))?;

        Ok(Self { id, fields })
    }
}

impl FromStr for TicketPayload {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

///
/// Substitutions are applied blindly, in this order. Any apostrophe
/// inside a value (`O'Brien`) breaks the payload.
///
fn dialect_to_json(raw: &str) -> String {
    raw.replace('\'', "\"")
        .replace("None", "null")
        .replace("True", "true")
        .replace("False", "false")
}

fn identifier(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key) {
        Some(Value::String(id)) if !id.is_empty() => Some(id.clone()),
        _ => None,
    }
}
