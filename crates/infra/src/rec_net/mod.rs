pub mod client;
pub mod error;

pub use client::{RecNetClient, RecNetConfig};
pub use error::RecNetError;
