//! Property tests: search ordering, result cardinality, reload fidelity.

use proptest::prelude::*;

use lectern_core::models::ChunkMetadata;
use lectern_store::VectorStore;

const DIM: usize = 4;

fn meta(i: usize) -> ChunkMetadata {
    ChunkMetadata::new(format!("p_chunk{i}"), format!("text {i}"), format!("abs {i}"))
}

fn vectors_strategy(count: usize) -> impl Strategy<Value = Vec<Vec<f32>>> {
    prop::collection::vec(
        prop::collection::vec(-1.0f32..1.0, DIM..=DIM),
        count..=count,
    )
}

proptest! {
    #[test]
    fn prop_search_is_sorted_and_k_bounded(
        vectors in (1usize..16).prop_flat_map(vectors_strategy),
        query in prop::collection::vec(-1.0f32..1.0, DIM..=DIM),
        top_k in 1usize..24,
    ) {
        let dir = tempfile::tempdir().unwrap();
        let mut store = VectorStore::open(dir.path().join("index.lidx")).unwrap();
        let metas: Vec<_> = (0..vectors.len()).map(meta).collect();
        store.add(&vectors, metas).unwrap();

        let results = store.search(&[query], top_k).unwrap();
        let hits = &results[0];

        prop_assert_eq!(hits.len(), top_k.min(vectors.len()));
        for pair in hits.windows(2) {
            // Descending by score; ties ascending by insertion index.
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].index < pair[1].index);
            }
        }
    }

    #[test]
    fn prop_metadata_stays_aligned_to_vectors(
        vectors in (1usize..12).prop_flat_map(vectors_strategy),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let mut store = VectorStore::open(dir.path().join("index.lidx")).unwrap();
        let metas: Vec<_> = (0..vectors.len()).map(meta).collect();
        store.add(&vectors, metas.clone()).unwrap();

        // A full-breadth search must surface every item exactly once, each
        // hit carrying the metadata inserted at its position.
        let results = store.search(&[vec![0.5; DIM]], vectors.len()).unwrap();
        prop_assert_eq!(results[0].len(), vectors.len());
        for hit in &results[0] {
            prop_assert_eq!(&hit.metadata, &metas[hit.index]);
        }
    }

    #[test]
    fn prop_reload_returns_identical_results(
        vectors in (1usize..10).prop_flat_map(vectors_strategy),
        query in prop::collection::vec(-1.0f32..1.0, DIM..=DIM),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.lidx");

        let before = {
            let mut store = VectorStore::open(&path).unwrap();
            let metas: Vec<_> = (0..vectors.len()).map(meta).collect();
            store.add(&vectors, metas).unwrap();
            store.search(&[query.clone()], 5).unwrap()
        };

        let reopened = VectorStore::open(&path).unwrap();
        let after = reopened.search(&[query], 5).unwrap();
        prop_assert_eq!(before, after);
    }
}
