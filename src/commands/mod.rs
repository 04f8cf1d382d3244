//! CLI-facing commands: build services from options, run, print.

pub mod config;
mod fetch;
mod locate;

pub use config::{Config, GraalOptions};
pub use fetch::{describe, fetch, run};
pub use locate::{LocateReport, locate, render_text, report};
