use thiserror::Error;

use crate::models::Recommendation;
use crate::store::Snapshot;

/// Error types for the recommender
#[derive(Debug, Error, PartialEq)]
pub enum RecommendError {
    #[error("no movie titled \"{0}\" in the catalog")]
    UnknownTitle(String),

    #[error("top_n must be at least 1 (got {0})")]
    InvalidTopN(usize),
}

/// Ranks every other catalog movie by similarity to `title` and returns up
/// to `top_n` results, best first.
///
/// The query movie itself is always excluded. Ties are broken by ascending
/// catalog index, so identical inputs always produce identical rankings.
/// When the catalog holds fewer than `top_n + 1` movies every candidate is
/// returned; padding the result out to a fixed display width is the
/// caller's concern, never the recommender's.
pub fn recommend(
    snapshot: &Snapshot,
    title: &str,
    top_n: usize,
) -> Result<Vec<Recommendation>, RecommendError> {
    if top_n == 0 {
        return Err(RecommendError::InvalidTopN(top_n));
    }

    let query = snapshot
        .catalog()
        .resolve(title)
        .ok_or_else(|| RecommendError::UnknownTitle(title.to_string()))?;

    let mut candidates: Vec<(usize, f32)> = snapshot
        .matrix()
        .row(query)
        .iter()
        .copied()
        .enumerate()
        .filter(|&(j, _)| j != query)
        .collect();

    // Stable sort: equal scores keep ascending catalog order. total_cmp so a
    // NaN score cannot panic the query path.
    candidates.sort_by(|a, b| b.1.total_cmp(&a.1));
    candidates.truncate(top_n);

    let catalog = snapshot.catalog();
    Ok(candidates
        .into_iter()
        .map(|(j, score)| Recommendation {
            title: catalog.movies()[j].title.clone(),
            score,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use crate::store::{Catalog, SimilarityMatrix};

    use super::*;

    fn snapshot(titles: &[&str], rows: Vec<Vec<f32>>) -> Snapshot {
        let catalog = Catalog::new(titles.iter().map(|t| t.to_string()).collect());
        let matrix = SimilarityMatrix::new(rows).unwrap();
        Snapshot::from_parts(catalog, matrix).unwrap()
    }

    fn sample() -> Snapshot {
        snapshot(
            &["A", "B", "C", "D"],
            vec![
                vec![1.0, 0.9, 0.2, 0.5],
                vec![0.9, 1.0, 0.4, 0.3],
                vec![0.2, 0.4, 1.0, 0.6],
                vec![0.5, 0.3, 0.6, 1.0],
            ],
        )
    }

    fn titles(recs: &[Recommendation]) -> Vec<&str> {
        recs.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_top_two_for_a() {
        let recs = recommend(&sample(), "A", 2).unwrap();
        assert_eq!(titles(&recs), vec!["B", "D"]);
    }

    #[test]
    fn test_top_n_larger_than_catalog_returns_all_candidates() {
        let recs = recommend(&sample(), "A", 10).unwrap();
        assert_eq!(titles(&recs), vec!["B", "D", "C"]);
    }

    #[test]
    fn test_query_movie_never_recommends_itself() {
        let snap = sample();
        for movie in snap.catalog().movies() {
            let recs = recommend(&snap, &movie.title, 10).unwrap();
            assert!(!titles(&recs).contains(&movie.title.as_str()));
            assert_eq!(recs.len(), snap.len() - 1);
        }
    }

    #[test]
    fn test_scores_are_non_increasing() {
        let recs = recommend(&sample(), "C", 3).unwrap();
        for pair in recs.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_ties_break_by_catalog_order() {
        let snap = snapshot(
            &["A", "B", "C", "D"],
            vec![
                vec![1.0, 0.5, 0.5, 0.5],
                vec![0.5, 1.0, 0.5, 0.5],
                vec![0.5, 0.5, 1.0, 0.5],
                vec![0.5, 0.5, 0.5, 1.0],
            ],
        );
        let recs = recommend(&snap, "C", 3).unwrap();
        assert_eq!(titles(&recs), vec!["A", "B", "D"]);
    }

    #[test]
    fn test_repeated_queries_are_deterministic() {
        let snap = sample();
        let first = recommend(&snap, "B", 3).unwrap();
        let second = recommend(&snap, "B", 3).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_title_fails() {
        let err = recommend(&sample(), "Z", 5).unwrap_err();
        assert_eq!(err, RecommendError::UnknownTitle("Z".to_string()));
    }

    #[test]
    fn test_zero_top_n_fails() {
        let err = recommend(&sample(), "A", 0).unwrap_err();
        assert_eq!(err, RecommendError::InvalidTopN(0));
    }

    #[test]
    fn test_single_movie_catalog_returns_empty() {
        let snap = snapshot(&["A"], vec![vec![1.0]]);
        let recs = recommend(&snap, "A", 5).unwrap();
        assert!(recs.is_empty());
    }

    #[test]
    fn test_duplicate_titles_query_first_occurrence() {
        let snap = snapshot(
            &["A", "A", "B"],
            vec![
                vec![1.0, 0.2, 0.8],
                vec![0.2, 1.0, 0.1],
                vec![0.8, 0.1, 1.0],
            ],
        );
        // "A" resolves to index 0, so its row drives the ranking and the
        // duplicate at index 1 is still a candidate.
        let recs = recommend(&snap, "A", 2).unwrap();
        assert_eq!(titles(&recs), vec!["B", "A"]);
    }
}
