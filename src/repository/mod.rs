pub mod markup_repository;
pub mod store;
pub mod task_repository;

use std::path::Path;
use std::rc::Rc;

use store::FileStore;

#[derive(Clone)]
pub struct Repository {
    pub store: store::StoreHandle,
    pub tasks: task_repository::TaskRepository,
    pub markup: markup_repository::MarkupRepository,
}

impl Repository {
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self::new(Rc::new(FileStore::open(path)))
    }

    pub fn new(store: store::StoreHandle) -> Self {
        Self {
            tasks: task_repository::TaskRepository::new(store.clone()),
            markup: markup_repository::MarkupRepository::new(store.clone()),
            store,
        }
    }
}
