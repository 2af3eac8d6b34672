pub mod errors;
pub mod ranking;
pub mod records;

pub use errors::Result;
