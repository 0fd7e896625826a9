mod enrollment;
mod event_registration;
mod user;

pub use enrollment::*;
pub use event_registration::*;
pub use user::*;
