pub mod config;
pub mod data;
pub mod encoding;
pub mod error;
pub mod fixture;
pub mod harness;
pub mod padding;

pub use error::{PadError, Result};
