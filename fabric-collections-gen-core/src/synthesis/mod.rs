//! Collection record synthesis (deterministic JSON generation)

pub mod collection_builder;

pub use collection_builder::build_collections;
