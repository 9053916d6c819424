//! Favorites store.
//!
//! Holds the user's favorite movies in insertion order and writes the whole
//! list back to its storage slot after every change. The slot is read once,
//! when the store is loaded.

mod error;
mod movie;

pub use error::FavoritesError;
pub use movie::{Movie, MovieId};

use crate::storage::KeyValueStore;
use log::*;
use serde::{Deserialize, Serialize};

/// Storage slot holding the serialized favorites list.
///
pub const FAVORITES_KEY: &str = "favorites";

/// Storage slot receiving unreadable favorites before they are reset.
///
pub const CORRUPT_BACKUP_KEY: &str = "favorites-corrupt";

/// What to do when the favorites slot holds content that cannot be parsed.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorruptPolicy {
    /// Refuse to start.
    #[default]
    Fail,
    /// Back up the unreadable content and start with an empty list.
    Reset,
}

/// Oversees the favorites list and its storage slot.
///
pub struct FavoritesStore {
    favorites: Vec<Movie>,
    storage: Box<dyn KeyValueStore>,
}

impl FavoritesStore {
    /// Read the favorites slot from `storage` and return the initialized
    /// store. A missing or blank slot gives an empty list. The loaded list is
    /// written back immediately so the slot always reflects the store.
    /// A slot that cannot be read is an error under every policy.
    ///
    pub fn load(
        storage: Box<dyn KeyValueStore>,
        policy: CorruptPolicy,
    ) -> Result<FavoritesStore, FavoritesError> {
        let mut storage = storage;
        let favorites = match storage.get_item(FAVORITES_KEY) {
            Ok(Some(contents)) if !contents.trim().is_empty() => {
                match serde_json::from_str::<Vec<Movie>>(&contents) {
                    Ok(favorites) => {
                        info!("Loaded {} favorite movies", favorites.len());
                        favorites
                    }
                    Err(e) => match policy {
                        CorruptPolicy::Fail => {
                            error!("Stored favorites are corrupt: {}", e);
                            return Err(FavoritesError::Corrupt { source: e });
                        }
                        CorruptPolicy::Reset => {
                            warn!(
                                "Stored favorites are corrupt ({}), backing up to '{}' and starting empty",
                                e, CORRUPT_BACKUP_KEY
                            );
                            storage.set_item(CORRUPT_BACKUP_KEY, &contents)?;
                            vec![]
                        }
                    },
                }
            }
            Ok(_) => {
                debug!("No stored favorites found, starting empty");
                vec![]
            }
            Err(e) => {
                // Nothing can be backed up, so the slot must not be overwritten.
                error!("Failed to read stored favorites: {}", e);
                return Err(e.into());
            }
        };

        let mut store = FavoritesStore { favorites, storage };
        store.sync()?;
        Ok(store)
    }

    /// Return the favorites in insertion order.
    ///
    pub fn favorites(&self) -> &[Movie] {
        &self.favorites
    }

    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    /// Append `movie` to the list. No validation is performed and duplicates
    /// are not rejected.
    ///
    pub fn add_to_favorites(&mut self, movie: Movie) -> Result<(), FavoritesError> {
        debug!("Adding favorite {:?}", movie.id);
        self.favorites.push(movie);
        self.sync()
    }

    /// Remove every movie whose id equals `movie_id`. Returns how many were
    /// removed; zero is not an error.
    ///
    pub fn remove_from_favorites(&mut self, movie_id: &MovieId) -> Result<usize, FavoritesError> {
        let before = self.favorites.len();
        self.favorites
            .retain(|movie| movie.id.as_ref() != Some(movie_id));
        let removed = before - self.favorites.len();
        debug!("Removed {} favorite(s) with id {}", removed, movie_id);
        self.sync()?;
        Ok(removed)
    }

    /// Return true if any favorite has id `movie_id`.
    ///
    pub fn is_favorite(&self, movie_id: &MovieId) -> bool {
        self.favorites
            .iter()
            .any(|movie| movie.id.as_ref() == Some(movie_id))
    }

    /// Remove `movie` if its id is already a favorite, add it otherwise.
    /// Returns whether the movie is a favorite afterwards. A movie without an
    /// id can never match, so it is always added.
    ///
    pub fn toggle_favorite(&mut self, movie: Movie) -> Result<bool, FavoritesError> {
        match movie.id.clone() {
            Some(id) if self.is_favorite(&id) => {
                self.remove_from_favorites(&id)?;
                Ok(false)
            }
            _ => {
                self.add_to_favorites(movie)?;
                Ok(true)
            }
        }
    }

    /// Return the storage backing this store.
    ///
    pub fn storage(&self) -> &dyn KeyValueStore {
        self.storage.as_ref()
    }

    /// Consume the store and return its storage.
    ///
    pub fn into_storage(self) -> Box<dyn KeyValueStore> {
        self.storage
    }

    /// Overwrite the favorites slot with the current list.
    ///
    fn sync(&mut self) -> Result<(), FavoritesError> {
        let contents = serde_json::to_string(&self.favorites).map_err(FavoritesError::Serialize)?;
        self.storage.set_item(FAVORITES_KEY, &contents)?;
        trace!("Synced {} favorites to storage", self.favorites.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, StorageError};
    use fake::{Fake, Faker};
    use std::collections::HashSet;

    fn empty_store() -> FavoritesStore {
        FavoritesStore::load(Box::new(MemoryStore::new()), CorruptPolicy::Fail).unwrap()
    }

    fn store_with(contents: &str) -> FavoritesStore {
        FavoritesStore::load(
            Box::new(MemoryStore::with_item(FAVORITES_KEY, contents)),
            CorruptPolicy::Fail,
        )
        .unwrap()
    }

    fn slot(store: &FavoritesStore) -> Option<String> {
        store.storage().get_item(FAVORITES_KEY).unwrap()
    }

    fn ids(store: &FavoritesStore) -> Vec<Option<MovieId>> {
        store.favorites().iter().map(|m| m.id.clone()).collect()
    }

    /// Storage whose reads always fail.
    struct UnreadableStore;

    impl KeyValueStore for UnreadableStore {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::ReadFailed {
                path: format!("{}.json", key).into(),
                source: std::io::Error::new(std::io::ErrorKind::InvalidData, "not utf-8"),
            })
        }

        fn set_item(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
            panic!("unexpected write to '{}'", key);
        }

        fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
            panic!("unexpected removal of '{}'", key);
        }
    }

    /// Storage whose writes always fail.
    struct ReadOnlyStore(MemoryStore);

    impl KeyValueStore for ReadOnlyStore {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.get_item(key)
        }

        fn set_item(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::WriteFailed {
                path: format!("{}.json", key).into(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            })
        }

        fn remove_item(&mut self, _key: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    #[test]
    fn test_load_empty_writes_initial_slot() {
        let store = empty_store();
        assert!(store.is_empty());
        assert_eq!(slot(&store).as_deref(), Some("[]"));
    }

    #[test]
    fn test_load_existing_slot() {
        let store = store_with(r#"[{"id":1,"title":"A"},{"id":2,"title":"B"}]"#);
        assert_eq!(store.len(), 2);
        assert_eq!(store.favorites()[1].title(), Some("B"));
        assert!(store.is_favorite(&MovieId::from(2)));
    }

    #[test]
    fn test_load_blank_slot_is_empty() {
        let store = store_with("   ");
        assert!(store.is_empty());
        assert_eq!(slot(&store).as_deref(), Some("[]"));
    }

    #[test]
    fn test_add_scenario() {
        let mut store = empty_store();
        store.add_to_favorites(Movie::new(1, "A")).unwrap();
        assert!(store.is_favorite(&MovieId::from(1)));
        assert_eq!(store.favorites(), &[Movie::new(1, "A")]);
        assert_eq!(slot(&store).as_deref(), Some(r#"[{"id":1,"title":"A"}]"#));
    }

    #[test]
    fn test_remove_scenario() {
        let mut store = store_with(r#"[{"id":1},{"id":2}]"#);
        let removed = store.remove_from_favorites(&MovieId::from(1)).unwrap();
        assert_eq!(removed, 1);
        assert_eq!(ids(&store), vec![Some(MovieId::from(2))]);
        assert_eq!(slot(&store).as_deref(), Some(r#"[{"id":2}]"#));
    }

    #[test]
    fn test_remove_absent_from_empty() {
        let mut store = empty_store();
        let removed = store.remove_from_favorites(&MovieId::from(99)).unwrap();
        assert_eq!(removed, 0);
        assert!(store.is_empty());
        assert_eq!(slot(&store).as_deref(), Some("[]"));
    }

    #[test]
    fn test_remove_absent_leaves_list_unchanged() {
        let mut store = store_with(r#"[{"id":1,"title":"A"},{"title":"no id"},{"id":"x"}]"#);
        let before = store.favorites().to_vec();
        store.remove_from_favorites(&MovieId::from(3)).unwrap();
        assert_eq!(store.favorites(), before.as_slice());
    }

    #[test]
    fn test_remove_takes_all_duplicates() {
        let mut store = empty_store();
        store.add_to_favorites(Movie::new(5, "First")).unwrap();
        store.add_to_favorites(Movie::new(6, "Other")).unwrap();
        store.add_to_favorites(Movie::new(5, "Again")).unwrap();
        assert_eq!(store.remove_from_favorites(&MovieId::from(5)).unwrap(), 2);
        assert_eq!(ids(&store), vec![Some(MovieId::from(6))]);
    }

    #[test]
    fn test_movie_without_id_never_matches() {
        let mut store = empty_store();
        let movie = Movie::default().with_field("title", "Mystery");
        store.add_to_favorites(movie).unwrap();
        assert_eq!(store.len(), 1);
        assert!(!store.is_favorite(&MovieId::from(0)));
        assert_eq!(store.remove_from_favorites(&MovieId::from(0)).unwrap(), 0);
        assert_eq!(slot(&store).as_deref(), Some(r#"[{"title":"Mystery"}]"#));
    }

    #[test]
    fn test_distinct_adds_are_exactly_favorites() {
        let mut store = empty_store();
        let mut added = HashSet::new();
        while added.len() < 20 {
            let id: i64 = (0..1000).fake();
            if added.insert(id) {
                let title: String = Faker.fake();
                store.add_to_favorites(Movie::new(id, &title)).unwrap();
            }
        }
        for id in 0..1000i64 {
            assert_eq!(store.is_favorite(&MovieId::from(id)), added.contains(&id));
        }
    }

    #[test]
    fn test_add_then_remove_is_not_favorite() {
        let mut store = empty_store();
        for id in 0..10i64 {
            store.add_to_favorites(Movie::new(id, "x")).unwrap();
        }
        for id in (0..10i64).step_by(2) {
            store.remove_from_favorites(&MovieId::from(id)).unwrap();
            assert!(!store.is_favorite(&MovieId::from(id)));
        }
        assert_eq!(store.len(), 5);
        assert!(store.is_favorite(&MovieId::from(1)));
    }

    #[test]
    fn test_toggle_favorite() {
        let mut store = empty_store();
        assert!(store.toggle_favorite(Movie::new(7, "Seven")).unwrap());
        assert!(store.is_favorite(&MovieId::from(7)));
        assert!(!store.toggle_favorite(Movie::new(7, "Seven")).unwrap());
        assert!(store.is_empty());

        // Records without an id are always appended
        assert!(store.toggle_favorite(Movie::default()).unwrap());
        assert!(store.toggle_favorite(Movie::default()).unwrap());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_serialization_is_idempotent() {
        let mut store = empty_store();
        store
            .add_to_favorites(Movie::new(680, "Pulp Fiction").with_field("vote_average", 8.5))
            .unwrap();
        store.add_to_favorites(Movie::new("tt0068646", "The Godfather")).unwrap();
        store.add_to_favorites(Movie::default().with_field("poster_path", "/p.jpg")).unwrap();

        let first = slot(&store).unwrap();
        let parsed: Vec<Movie> = serde_json::from_str(&first).unwrap();
        let second = serde_json::to_string(&parsed).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_reload_matches_last_mutation() {
        let mut store = empty_store();
        store.add_to_favorites(Movie::new(1, "A")).unwrap();
        store.add_to_favorites(Movie::new(2, "B")).unwrap();
        store.add_to_favorites(Movie::new(3, "C")).unwrap();
        store.remove_from_favorites(&MovieId::from(2)).unwrap();
        store.add_to_favorites(Movie::new(4, "D")).unwrap();
        let expected = store.favorites().to_vec();

        let reloaded = FavoritesStore::load(store.into_storage(), CorruptPolicy::Fail).unwrap();
        assert_eq!(reloaded.favorites(), expected.as_slice());
    }

    #[test]
    fn test_corrupt_slot_fails_by_default() {
        let result = FavoritesStore::load(
            Box::new(MemoryStore::with_item(FAVORITES_KEY, "{not json")),
            CorruptPolicy::Fail,
        );
        assert!(matches!(result, Err(FavoritesError::Corrupt { .. })));
    }

    #[test]
    fn test_corrupt_slot_reset_backs_up() {
        let store = FavoritesStore::load(
            Box::new(MemoryStore::with_item(FAVORITES_KEY, r#"{"id":1}"#)),
            CorruptPolicy::Reset,
        )
        .unwrap();
        assert!(store.is_empty());
        assert_eq!(slot(&store).as_deref(), Some("[]"));
        assert_eq!(
            store.storage().get_item(CORRUPT_BACKUP_KEY).unwrap().as_deref(),
            Some(r#"{"id":1}"#)
        );
    }

    #[test]
    fn test_unreadable_slot_fails_under_every_policy() {
        for policy in [CorruptPolicy::Fail, CorruptPolicy::Reset] {
            let result = FavoritesStore::load(Box::new(UnreadableStore), policy);
            assert!(matches!(result, Err(FavoritesError::Storage(_))));
        }
    }

    #[test]
    fn test_write_failure_is_reported() {
        let result = FavoritesStore::load(
            Box::new(ReadOnlyStore(MemoryStore::new())),
            CorruptPolicy::Fail,
        );
        assert!(matches!(result, Err(FavoritesError::Storage(_))));
    }

    #[test]
    fn test_corrupt_policy_serde() {
        let policy: CorruptPolicy = serde_yaml::from_str("reset").unwrap();
        assert_eq!(policy, CorruptPolicy::Reset);
        let policy: CorruptPolicy = serde_yaml::from_str("fail").unwrap();
        assert_eq!(policy, CorruptPolicy::Fail);
        assert_eq!(CorruptPolicy::default(), CorruptPolicy::Fail);
    }
}
