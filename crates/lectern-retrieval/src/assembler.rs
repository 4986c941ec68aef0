//! Candidate assembly: raw store hits become result records with the
//! similarity score merged in under the reserved `score` field.
//!
//! Pure and stateless. No resorting, no filtering, no deduplication —
//! ordering and membership are exactly the store's output.

use lectern_core::models::{Candidate, SearchHit};

/// Turn the store's per-query hit lists into per-query candidate lists.
pub fn assemble(raw: Vec<Vec<SearchHit>>) -> Vec<Vec<Candidate>> {
    raw.into_iter()
        .map(|hits| hits.into_iter().map(Candidate::from).collect())
        .collect()
}
