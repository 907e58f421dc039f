use serde::{Deserialize, Serialize};

/// A catalog entry: a movie title pinned to its row/column in the
/// similarity matrix
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    /// 0-based position in the catalog, aligned with the matrix
    pub index: usize,
    /// Display title, also used as the lookup key
    pub title: String,
}

impl Movie {
    /// Creates a new movie at the given catalog position
    pub fn new(index: usize, title: String) -> Self {
        Self { index, title }
    }
}

/// A single ranked result of a top-N similarity query
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    /// Title of the recommended movie
    pub title: String,
    /// Similarity score to the query movie
    pub score: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_movie() {
        let movie = Movie::new(3, "The Matrix".to_string());
        assert_eq!(movie.index, 3);
        assert_eq!(movie.title, "The Matrix");
    }

    #[test]
    fn test_recommendation_serialization() {
        let rec = Recommendation {
            title: "Blade Runner".to_string(),
            score: 0.5,
        };
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["title"], "Blade Runner");
        assert_eq!(json["score"], 0.5);
    }
}
