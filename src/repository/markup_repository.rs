use crate::repository::store::{StoreError, StoreHandle};

const LIST_KEY: &str = "list";

/// Persists the markup-backed list as the raw rendered fragment. The
/// stored value is the list's serialized form, verbatim.
#[derive(Clone)]
pub struct MarkupRepository {
    store: StoreHandle,
}

impl MarkupRepository {
    pub fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    pub fn load(&self) -> Option<String> {
        self.store.get(LIST_KEY)
    }

    pub fn save(&self, fragment: &str) -> Result<(), StoreError> {
        self.store.set(LIST_KEY, fragment.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::store::FileStore;
    use std::rc::Rc;
    use tempfile::tempdir;

    #[test]
    fn test_fragment_round_trip() {
        let dir = tempdir().unwrap();
        let store = Rc::new(FileStore::open(dir.path().join("store.json")));
        let repo = MarkupRepository::new(store);

        assert_eq!(repo.load(), None);
        repo.save("<li>Buy milk<span>\u{d7}</span></li>").unwrap();
        assert_eq!(
            repo.load().as_deref(),
            Some("<li>Buy milk<span>\u{d7}</span></li>")
        );
    }
}
