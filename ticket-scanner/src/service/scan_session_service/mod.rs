//!
//! Scan loop of the ticket scanner screen
//!

mod camera;
mod channel_camera;
mod scan_session_presenter;
mod scan_session_state_machine;
mod scan_state;

pub use camera::*;
pub use channel_camera::*;
pub use scan_session_presenter::*;
pub use scan_session_state_machine::*;
pub use scan_state::*;
