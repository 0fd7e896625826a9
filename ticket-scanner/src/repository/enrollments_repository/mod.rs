mod enrollments_repository;
mod enrollments_repository_impl;

pub use enrollments_repository::*;
pub use enrollments_repository_impl::*;
