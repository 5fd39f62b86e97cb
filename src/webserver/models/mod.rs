/// Model exports
pub mod responses;

pub use responses::*;
