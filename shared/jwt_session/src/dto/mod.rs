mod claims;

pub use claims::*;
