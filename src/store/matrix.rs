use super::LoadError;

/// Dense square matrix of pairwise similarity scores. `score(i, j)` is the
/// similarity of catalog item `i` to item `j`; the diagonal holds
/// self-similarity and is excluded from rankings by the recommender.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    rows: Vec<Vec<f32>>,
}

impl SimilarityMatrix {
    /// Builds a matrix from raw rows, rejecting ragged input: every row must
    /// have exactly as many columns as there are rows.
    pub fn new(rows: Vec<Vec<f32>>) -> Result<Self, LoadError> {
        let expected = rows.len();
        for (row, cols) in rows.iter().enumerate() {
            if cols.len() != expected {
                return Err(LoadError::RaggedMatrix {
                    row,
                    found: cols.len(),
                    expected,
                });
            }
        }
        Ok(Self { rows })
    }

    /// Number of rows (and columns).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Similarity scores of item `i` against every catalog item, in catalog
    /// order.
    ///
    /// Panics if `i` is out of bounds.
    pub fn row(&self, i: usize) -> &[f32] {
        &self.rows[i]
    }

    /// Similarity of item `i` to item `j`.
    ///
    /// Panics if either index is out of bounds.
    pub fn score(&self, i: usize, j: usize) -> f32 {
        self.rows[i][j]
    }

    /// Reports whether the matrix is symmetric within `tolerance`. Asymmetry
    /// is legal (some similarity models are directional), so callers treat a
    /// `false` here as a warning, not an error.
    pub fn is_symmetric(&self, tolerance: f32) -> bool {
        let n = self.len();
        for i in 0..n {
            for j in (i + 1)..n {
                if (self.rows[i][j] - self.rows[j][i]).abs() > tolerance {
                    return false;
                }
            }
        }
        true
    }
}
