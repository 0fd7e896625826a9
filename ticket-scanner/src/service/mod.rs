pub mod scan_session_service;
pub mod verification_service;
