//! Generate command orchestration.

mod generate;

pub use generate::{collect_params, run, OUTPUT_FILE};
