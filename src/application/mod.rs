//! Application layer: the operations the CLI exposes, independent of
//! argument parsing and output formatting.

mod fetch;

pub use fetch::{ArtifactLocation, FetchGraal, FetchOutcome, locate_artifact};
