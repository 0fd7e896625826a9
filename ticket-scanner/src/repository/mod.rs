//!
//! Read access to the backend REST API
//!

mod api_client;
mod dto;
mod enrollments_repository;
mod error;
mod registrations_repository;

pub use api_client::*;
pub use dto::*;
pub use enrollments_repository::*;
pub use error::*;
pub use registrations_repository::*;
