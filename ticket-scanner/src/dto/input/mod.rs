mod ticket_payload;

pub use ticket_payload::*;
