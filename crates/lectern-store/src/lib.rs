//! # lectern-store
//!
//! Durable flat vector index with attached per-item metadata.
//! Inner-product scoring, append-only, durability before acknowledgment:
//! `add` persists both the index artifact and the sibling metadata file
//! before returning success.

mod codec;
mod store;

pub use store::VectorStore;
