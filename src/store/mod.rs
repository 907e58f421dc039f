pub mod catalog;
pub mod matrix;
pub mod snapshot;

pub use catalog::Catalog;
pub use matrix::SimilarityMatrix;
pub use snapshot::Snapshot;

/// Errors raised while loading or pairing the catalog and similarity
/// artifacts. All of these are fatal at startup: the service cannot answer
/// queries against a missing or inconsistent snapshot.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("similarity matrix is ragged: row {row} has {found} columns, expected {expected}")]
    RaggedMatrix {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("catalog has {catalog_len} movies but similarity matrix is {matrix_len}x{matrix_len}")]
    DimensionMismatch {
        catalog_len: usize,
        matrix_len: usize,
    },
}
