//! Models Module - STAC documents and domain errors

pub mod errors;
pub mod types;

pub use errors::*;
pub use types::*;
