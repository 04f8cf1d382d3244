pub mod application;
pub mod artifact;
pub mod cache;
pub mod cleanup;
pub mod commands;
pub mod config;
pub mod download;
pub mod error;
pub mod http;
pub mod platform;
pub mod runtime;

pub use application::{FetchGraal, FetchOutcome};
pub use config::GraalConfig;
pub use error::GraalError;
