mod registrations_repository;
mod registrations_repository_impl;

pub use registrations_repository::*;
pub use registrations_repository_impl::*;
