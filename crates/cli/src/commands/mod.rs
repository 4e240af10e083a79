pub mod detect;
pub mod signatures;

pub use detect::*;
pub use signatures::*;
