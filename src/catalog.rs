//! Movies available for browsing on the home view.
//!
//! The catalog is read from a JSON file holding an array of movie records.
//! Without a file, a small built-in list is used.

use crate::favorites::Movie;
use log::*;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Errors that can occur while loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("Failed to read catalog {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Catalog file is not a JSON array of movies
    #[error("Invalid catalog {path}: {source}")]
    Invalid {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// (id, title, release date)
const BUILTIN_MOVIES: &[(i64, &str, &str)] = &[
    (278, "The Shawshank Redemption", "1994-09-23"),
    (238, "The Godfather", "1972-03-14"),
    (155, "The Dark Knight", "2008-07-16"),
    (680, "Pulp Fiction", "1994-09-10"),
    (13, "Forrest Gump", "1994-06-23"),
    (550, "Fight Club", "1999-10-15"),
    (129, "Spirited Away", "2001-07-20"),
    (27205, "Inception", "2010-07-15"),
    (157336, "Interstellar", "2014-11-05"),
    (496243, "Parasite", "2019-05-30"),
];

/// Ordered list of browsable movies.
///
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    pub fn new(movies: Vec<Movie>) -> Catalog {
        Catalog { movies }
    }

    /// Return the built-in catalog.
    ///
    pub fn builtin() -> Catalog {
        let movies = BUILTIN_MOVIES
            .iter()
            .map(|(id, title, release_date)| {
                Movie::new(*id, title).with_field("release_date", *release_date)
            })
            .collect();
        Catalog { movies }
    }

    /// Read a catalog from a JSON file.
    ///
    pub fn from_file(path: &Path) -> Result<Catalog, CatalogError> {
        let contents = fs::read_to_string(path).map_err(|e| CatalogError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        })?;
        let movies: Vec<Movie> =
            serde_json::from_str(&contents).map_err(|e| CatalogError::Invalid {
                path: path.to_path_buf(),
                source: e,
            })?;
        info!("Loaded {} movies from {}", movies.len(), path.display());
        Ok(Catalog { movies })
    }

    /// Load from `path` if given, otherwise fall back to the built-in list.
    ///
    pub fn load(path: Option<&Path>) -> Result<Catalog, CatalogError> {
        match path {
            Some(path) => Catalog::from_file(path),
            None => {
                debug!("No catalog file configured, using built-in movies");
                Ok(Catalog::builtin())
            }
        }
    }

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favorites::MovieId;
    use std::io::Write;

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), BUILTIN_MOVIES.len());
        let first = &catalog.movies()[0];
        assert_eq!(first.id, Some(MovieId::from(278)));
        assert_eq!(first.display_title(), "The Shawshank Redemption (1994)");
    }

    #[test]
    fn test_load_without_path_is_builtin() {
        let catalog = Catalog::load(None).unwrap();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":1,"title":"A","poster_path":"/a.jpg"}},{{"id":2,"title":"B"}}]"#
        )
        .unwrap();
        let catalog = Catalog::load(Some(file.path())).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.movies()[1].title(), Some("B"));
    }

    #[test]
    fn test_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"results":[]}}"#).unwrap();
        let result = Catalog::from_file(file.path());
        assert!(matches!(result, Err(CatalogError::Invalid { .. })));
    }

    #[test]
    fn test_missing_file() {
        let temp = tempfile::tempdir().unwrap();
        let result = Catalog::from_file(&temp.path().join("missing.json"));
        assert!(matches!(result, Err(CatalogError::ReadFailed { .. })));
    }
}
