pub mod dto;
pub mod error;
pub mod util;

mod session;


pub use session::Session;
