use std::collections::HashMap;

use serde::Deserialize;

use crate::models::Movie;

/// One row of the catalog artifact. The artifact may carry extra columns
/// (genres, overview, ids); only the title is needed here and the rest is
/// ignored on deserialization.
#[derive(Debug, Deserialize)]
pub(crate) struct CatalogRecord {
    pub title: String,
}

/// Ordered collection of recommendable movies. A movie's position in the
/// list is its row/column index in the similarity matrix.
#[derive(Debug, Clone)]
pub struct Catalog {
    movies: Vec<Movie>,
    by_title: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from titles in artifact order.
    pub fn new(titles: Vec<String>) -> Self {
        let movies: Vec<Movie> = titles
            .into_iter()
            .enumerate()
            .map(|(index, title)| Movie::new(index, title))
            .collect();

        // Duplicate titles resolve to the first match by insertion order.
        let mut by_title = HashMap::with_capacity(movies.len());
        for movie in &movies {
            by_title.entry(movie.title.clone()).or_insert(movie.index);
        }

        Self { movies, by_title }
    }

    /// Resolves a display title to its matrix index.
    pub fn resolve(&self, title: &str) -> Option<usize> {
        self.by_title.get(title).copied()
    }

    /// Returns the movie at the given index, if any.
    pub fn get(&self, index: usize) -> Option<&Movie> {
        self.movies.get(index)
    }

    /// All movies in catalog (and therefore matrix) order.
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
