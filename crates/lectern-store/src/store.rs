//! VectorStore — owns the embedding index and its metadata sequence,
//! 1:1 aligned by position. The store is the only component allowed to
//! mutate either; everything else gets owned copies.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info};

use lectern_core::errors::{LecternResult, StoreError};
use lectern_core::models::{ChunkMetadata, SearchHit};

use crate::codec;

/// Durable flat inner-product vector index.
///
/// Two co-located artifacts: the binary index file and a sibling
/// `<index>.meta.json` holding the ordered metadata array. Both exist
/// together or neither; any other combination fails the load as corrupt.
#[derive(Debug)]
pub struct VectorStore {
    index_path: PathBuf,
    meta_path: PathBuf,
    /// Fixed by the first insert, for the store's remaining lifetime.
    dim: Option<usize>,
    /// Flat row-major buffer, `len = count * dim`.
    vectors: Vec<f32>,
    metadata: Vec<ChunkMetadata>,
}

impl VectorStore {
    /// Open a store at `index_path`, restoring persisted state when both
    /// artifacts are present. Exactly one artifact present is a corruption
    /// and fails fast — the store never silently starts empty over a
    /// half-written pair.
    pub fn open(index_path: impl Into<PathBuf>) -> LecternResult<Self> {
        let index_path = index_path.into();
        let meta_path = sibling_meta_path(&index_path);

        let mut store = Self {
            index_path,
            meta_path,
            dim: None,
            vectors: Vec::new(),
            metadata: Vec::new(),
        };
        store.load_if_exists()?;
        Ok(store)
    }

    fn load_if_exists(&mut self) -> LecternResult<()> {
        let have_index = self.index_path.exists();
        let have_meta = self.meta_path.exists();

        match (have_index, have_meta) {
            (false, false) => {
                debug!(path = %self.index_path.display(), "no persisted store, starting empty");
                Ok(())
            }
            (true, false) => Err(StoreError::CorruptStore {
                details: format!(
                    "index artifact exists but metadata file {} is missing",
                    self.meta_path.display()
                ),
            }
            .into()),
            (false, true) => Err(StoreError::CorruptStore {
                details: format!(
                    "metadata file exists but index artifact {} is missing",
                    self.index_path.display()
                ),
            }
            .into()),
            (true, true) => self.load_both(),
        }
    }

    fn load_both(&mut self) -> LecternResult<()> {
        let bytes = std::fs::read(&self.index_path).map_err(|e| StoreError::Persistence {
            path: self.index_path.display().to_string(),
            message: e.to_string(),
        })?;
        let (dim, count, vectors) =
            codec::decode(&bytes).map_err(|details| StoreError::CorruptStore { details })?;

        let raw = std::fs::read_to_string(&self.meta_path).map_err(|e| StoreError::Persistence {
            path: self.meta_path.display().to_string(),
            message: e.to_string(),
        })?;
        let metadata: Vec<ChunkMetadata> =
            serde_json::from_str(&raw).map_err(|e| StoreError::CorruptStore {
                details: format!("metadata file unparsable: {e}"),
            })?;

        if metadata.len() != count {
            return Err(StoreError::CorruptStore {
                details: format!(
                    "index holds {count} vectors but metadata file holds {} entries",
                    metadata.len()
                ),
            }
            .into());
        }

        self.dim = Some(dim);
        self.vectors = vectors;
        self.metadata = metadata;
        info!(
            path = %self.index_path.display(),
            items = count,
            dim,
            "restored persisted store"
        );
        Ok(())
    }

    /// Number of items in the store.
    pub fn len(&self) -> usize {
        self.metadata.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metadata.is_empty()
    }

    /// The established vector dimension, once the first add has fixed it.
    pub fn dim(&self) -> Option<usize> {
        self.dim
    }

    /// Append a batch of vectors with their metadata, then persist both
    /// artifacts before returning. If persistence fails, the in-memory
    /// state is rolled back to its pre-call value and the error surfaced,
    /// so a later `open` never observes a partial add.
    ///
    /// Duplicate ids are not detected here — the store is append-only and
    /// identity-blind; avoiding double insertion is the indexer's job.
    pub fn add(
        &mut self,
        vectors: &[Vec<f32>],
        metadatas: Vec<ChunkMetadata>,
    ) -> LecternResult<()> {
        if vectors.len() != metadatas.len() {
            return Err(StoreError::InvalidArgument {
                reason: format!(
                    "{} vectors but {} metadata entries",
                    vectors.len(),
                    metadatas.len()
                ),
            }
            .into());
        }
        if vectors.is_empty() {
            return Ok(());
        }

        let width = vectors[0].len();
        if width == 0 {
            return Err(StoreError::InvalidArgument {
                reason: "zero-width vectors".to_string(),
            }
            .into());
        }
        if let Some(row) = vectors.iter().find(|v| v.len() != width) {
            return Err(StoreError::InvalidArgument {
                reason: format!("ragged batch: expected width {width}, found {}", row.len()),
            }
            .into());
        }
        if let Some(dim) = self.dim {
            if width != dim {
                return Err(StoreError::DimensionMismatch {
                    expected: dim,
                    got: width,
                }
                .into());
            }
        }

        // Append in memory, remember the pre-call state for rollback.
        let prev_len = self.vectors.len();
        let prev_meta_len = self.metadata.len();
        let prev_dim = self.dim;

        for v in vectors {
            self.vectors.extend_from_slice(v);
        }
        self.metadata.extend(metadatas);
        self.dim = Some(width);

        if let Err(e) = self.persist() {
            self.vectors.truncate(prev_len);
            self.metadata.truncate(prev_meta_len);
            self.dim = prev_dim;
            return Err(e);
        }

        debug!(added = vectors.len(), total = self.len(), "store add persisted");
        Ok(())
    }

    /// Write both artifacts durably. Each is fully written to a temp file
    /// first; renames only happen after both writes succeeded, so a write
    /// failure leaves the previous pair untouched on disk.
    fn persist(&self) -> LecternResult<()> {
        if let Some(parent) = self.index_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| StoreError::Persistence {
                    path: parent.display().to_string(),
                    message: e.to_string(),
                })?;
            }
        }

        let dim = self.dim.unwrap_or(0);
        let index_bytes = codec::encode(dim, &self.vectors);
        let meta_bytes =
            serde_json::to_vec_pretty(&self.metadata).map_err(|e| StoreError::Persistence {
                path: self.meta_path.display().to_string(),
                message: e.to_string(),
            })?;

        let index_tmp = tmp_path(&self.index_path);
        let meta_tmp = tmp_path(&self.meta_path);
        write_all(&index_tmp, &index_bytes)?;
        write_all(&meta_tmp, &meta_bytes)?;

        rename(&index_tmp, &self.index_path)?;
        rename(&meta_tmp, &self.meta_path)?;
        Ok(())
    }

    /// k-nearest-neighbor search: for each query vector, the `top_k`
    /// highest inner-product hits, ordered by score descending with ties
    /// broken by ascending insertion index. Fewer than `top_k` items in
    /// the store returns them all; an empty store returns one empty list
    /// per query.
    pub fn search(
        &self,
        queries: &[Vec<f32>],
        top_k: usize,
    ) -> LecternResult<Vec<Vec<SearchHit>>> {
        if top_k == 0 {
            return Err(StoreError::InvalidArgument {
                reason: "top_k must be positive".to_string(),
            }
            .into());
        }
        // An empty store (no fixed dimension yet) answers every query with
        // an empty list, never an error.
        let (Some(dim), false) = (self.dim, self.is_empty()) else {
            return Ok(queries.iter().map(|_| Vec::new()).collect());
        };
        for q in queries {
            if q.len() != dim {
                return Err(StoreError::DimensionMismatch {
                    expected: dim,
                    got: q.len(),
                }
                .into());
            }
        }

        // Per-query scans are independent; results are identical whether
        // run serially or in parallel.
        let results = queries
            .par_iter()
            .map(|q| self.search_one(q, dim, top_k))
            .collect();
        Ok(results)
    }

    fn search_one(&self, query: &[f32], dim: usize, top_k: usize) -> Vec<SearchHit> {
        let mut scored: Vec<(f32, usize)> = self
            .vectors
            .chunks_exact(dim)
            .enumerate()
            .map(|(idx, row)| (inner_product(query, row), idx))
            .collect();

        // Score descending, insertion index ascending on ties.
        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.1.cmp(&b.1))
        });
        scored.truncate(top_k);

        scored
            .into_iter()
            .map(|(score, index)| SearchHit {
                score,
                index,
                metadata: self.metadata[index].clone(),
            })
            .collect()
    }
}

fn inner_product(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// `<index>.meta.json`, next to the index artifact.
fn sibling_meta_path(index_path: &Path) -> PathBuf {
    let mut os = index_path.as_os_str().to_os_string();
    os.push(".meta.json");
    PathBuf::from(os)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_os_string();
    os.push(".tmp");
    PathBuf::from(os)
}

fn write_all(path: &Path, bytes: &[u8]) -> LecternResult<()> {
    std::fs::write(path, bytes).map_err(|e| {
        StoreError::Persistence {
            path: path.display().to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

fn rename(from: &Path, to: &Path) -> LecternResult<()> {
    std::fs::rename(from, to).map_err(|e| {
        StoreError::Persistence {
            path: to.display().to_string(),
            message: e.to_string(),
        }
        .into()
    })
}
