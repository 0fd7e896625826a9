pub mod application;
pub mod dto;
pub mod error;
pub mod repository;
pub mod service;
pub mod terminal;
