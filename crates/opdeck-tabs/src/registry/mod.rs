//! The tab registry: ordered tabs plus the single active pointer.

mod operations;
mod types;


pub use types::*;
