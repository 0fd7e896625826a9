mod verification_result;

pub use verification_result::*;
