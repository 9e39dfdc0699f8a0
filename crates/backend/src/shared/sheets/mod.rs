pub mod a1;
pub mod auth;
pub mod client;
pub mod credentials;
pub mod error;
pub mod registry;

#[cfg(test)]
pub(crate) mod memory;

pub use client::{RangeReader, SheetsClient};
pub use error::SheetsError;
