//!
//! Module with dtos passed between camera, services and presenters
//!

pub mod input;
pub mod output;
