use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;
use serde::de::DeserializeOwned;

use super::catalog::CatalogRecord;
use super::{Catalog, LoadError, SimilarityMatrix};

/// Leading bytes of a gzip stream, used to detect compressed artifacts
/// regardless of file extension.
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Immutable pairing of a catalog and its similarity matrix, loaded once at
/// process start and shared (behind an `Arc`) for the process lifetime.
/// Construction enforces index alignment, so every catalog position has a
/// matching matrix row and column.
#[derive(Debug)]
pub struct Snapshot {
    catalog: Catalog,
    matrix: SimilarityMatrix,
}

impl Snapshot {
    /// Deserializes both artifacts and validates that they describe the same
    /// catalog. Either file may be gzip-compressed.
    pub fn load(
        catalog_path: impl AsRef<Path>,
        matrix_path: impl AsRef<Path>,
    ) -> Result<Self, LoadError> {
        let records: Vec<CatalogRecord> = read_json_artifact(catalog_path.as_ref())?;
        let rows: Vec<Vec<f32>> = read_json_artifact(matrix_path.as_ref())?;

        let catalog = Catalog::new(records.into_iter().map(|r| r.title).collect());
        let matrix = SimilarityMatrix::new(rows)?;
        Self::from_parts(catalog, matrix)
    }

    /// Pairs an already-built catalog and matrix, enforcing that their
    /// dimensions agree. An inconsistent pairing must never silently produce
    /// wrong rankings.
    pub fn from_parts(catalog: Catalog, matrix: SimilarityMatrix) -> Result<Self, LoadError> {
        if catalog.len() != matrix.len() {
            return Err(LoadError::DimensionMismatch {
                catalog_len: catalog.len(),
                matrix_len: matrix.len(),
            });
        }

        if !matrix.is_symmetric(1e-5) {
            tracing::warn!("similarity matrix is not symmetric; scores are read row-wise");
        }

        Ok(Self { catalog, matrix })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn matrix(&self) -> &SimilarityMatrix {
        &self.matrix
    }

    /// Number of movies in the snapshot.
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
}

/// Reads a JSON artifact from disk, transparently decompressing gzip input
/// (detected by magic bytes, not extension).
fn read_json_artifact<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let display = path.display().to_string();

    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: display.clone(),
        source,
    })?;

    let parsed = if bytes.starts_with(&GZIP_MAGIC) {
        let mut decoded = Vec::new();
        GzDecoder::new(bytes.as_slice())
            .read_to_end(&mut decoded)
            .map_err(|source| LoadError::Io {
                path: display.clone(),
                source,
            })?;
        serde_json::from_slice(&decoded)
    } else {
        serde_json::from_slice(&bytes)
    };

    parsed.map_err(|source| LoadError::Parse {
        path: display,
        source,
    })
}
