use log::{debug, info, warn};
use std::sync::Arc;

use crate::model::LikedRecipe;
use crate::storage::Store;

/// Storage key holding the liked recipes
pub const LIKES_KEY: &str = "likes";

/// Liked recipes, mirrored to a [`Store`] after every change
pub struct Likes {
    likes: Vec<LikedRecipe>,
    store: Arc<dyn Store>,
}

impl Likes {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            likes: Vec::new(),
            store,
        }
    }

    /// Like a recipe. Liking an already liked id returns the existing entry.
    pub fn add_like(
        &mut self,
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        image: impl Into<String>,
    ) -> LikedRecipe {
        let id = id.into();
        if let Some(existing) = self.likes.iter().find(|like| like.id == id) {
            return existing.clone();
        }

        let like = LikedRecipe {
            id,
            title: title.into(),
            author: author.into(),
            image: image.into(),
        };
        info!("Liked recipe {}", like.id);
        self.likes.push(like.clone());
        self.persist_data();
        like
    }

    pub fn delete_like(&mut self, id: &str) {
        let before = self.likes.len();
        self.likes.retain(|like| like.id != id);
        if self.likes.len() != before {
            info!("Unliked recipe {}", id);
        }
        self.persist_data();
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.likes.iter().any(|like| like.id == id)
    }

    pub fn num_likes(&self) -> usize {
        self.likes.len()
    }

    pub fn likes(&self) -> &[LikedRecipe] {
        &self.likes
    }

    /// Load the persisted likes; missing or unreadable data leaves the list empty
    pub fn read_storage(&mut self) {
        let raw = match self.store.get(LIKES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No stored likes yet");
                self.likes.clear();
                return;
            }
            Err(e) => {
                warn!("Could not read stored likes: {}", e);
                self.likes.clear();
                return;
            }
        };

        self.likes = match serde_json::from_str::<Vec<LikedRecipe>>(&raw) {
            Ok(likes) => likes,
            Err(e) => {
                warn!("Ignoring corrupt stored likes: {}", e);
                Vec::new()
            }
        };
        debug!("Restored {} likes", self.likes.len());
    }

    fn persist_data(&self) {
        let result = serde_json::to_string(&self.likes)
            .map_err(Into::into)
            .and_then(|snapshot| self.store.set(LIKES_KEY, &snapshot));
        if let Err(e) = result {
            warn!("Could not persist likes: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::AppError;

    struct BrokenStore;

    impl Store for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, AppError> {
            Err(AppError::StorageError(std::io::Error::other("disk on fire")))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), AppError> {
            Err(AppError::StorageError(std::io::Error::other("disk on fire")))
        }
    }

    fn memory_likes() -> (Likes, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (Likes::new(store.clone()), store)
    }

    #[test]
    fn test_add_like_is_idempotent() {
        let (mut likes, _) = memory_likes();
        let first = likes.add_like("1", "Pizza", "Chef", "img");
        let second = likes.add_like("1", "Other title", "Other", "other");

        assert_eq!(first, second);
        assert_eq!(likes.num_likes(), 1);
        assert!(likes.is_liked("1"));
        assert!(!likes.is_liked("2"));
    }

    #[test]
    fn test_delete_like() {
        let (mut likes, _) = memory_likes();
        likes.add_like("1", "Pizza", "Chef", "img");
        likes.add_like("2", "Pasta", "Chef", "img");
        likes.delete_like("1");

        assert!(!likes.is_liked("1"));
        assert!(likes.is_liked("2"));
        assert_eq!(likes.num_likes(), 1);
    }

    #[test]
    fn test_mutations_are_persisted_and_restored() {
        let (mut likes, store) = memory_likes();
        likes.add_like("1", "Pizza", "Chef", "img");
        likes.add_like("2", "Pasta", "Cook", "img2");
        likes.delete_like("1");

        let mut restored = Likes::new(store);
        restored.read_storage();
        assert_eq!(restored.likes(), likes.likes());
        assert_eq!(restored.likes()[0].author, "Cook");
    }

    #[test]
    fn test_read_storage_empty() {
        let (mut likes, _) = memory_likes();
        likes.read_storage();
        assert_eq!(likes.num_likes(), 0);
    }

    #[test]
    fn test_read_storage_corrupt() {
        let (mut likes, store) = memory_likes();
        store.set(LIKES_KEY, "{not json").unwrap();
        likes.read_storage();
        assert_eq!(likes.num_likes(), 0);
    }

    #[test]
    fn test_broken_store_degrades_silently() {
        let mut likes = Likes::new(Arc::new(BrokenStore));
        likes.read_storage();
        assert_eq!(likes.num_likes(), 0);

        likes.add_like("1", "Pizza", "Chef", "img");
        assert!(likes.is_liked("1"));
    }
}
