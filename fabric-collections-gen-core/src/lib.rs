//! This crate provides the core logic for the Fabric collections config
//! generator:
//! - interactive integer prompts with typed defaults
//! - server/client role partitioning
//! - endorsement policy expressions and collection synthesis
//! - JSON serialization and the single output file write
//!

pub mod commands;
mod error;
mod partition;
pub mod policy;
mod prompt;
mod synthesis;
mod types;

// Re-exports for a small, focused public API
pub use commands::{collect_params, run, OUTPUT_FILE};
pub use error::{CollectionsGenError, CollectionsGenResult};
pub use partition::RolePartition;
pub use policy::{member_expr, msp_name, peer_expr};
pub use prompt::ask_int;
pub use synthesis::build_collections;
pub use types::{CollectionConfig, GeneratorParams};
