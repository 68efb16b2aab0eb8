#![forbid(unsafe_code)]

pub mod client;
pub mod error;
pub mod memory;
mod wire;

pub use client::{ApiConfig, HttpApi, JoinGrant, TrainingApi};
pub use error::ApiError;
pub use memory::InMemoryApi;
