use tracing::{debug, warn};

use crate::domain::markup::{MarkupList, Row};
use crate::repository::Repository;
use crate::services::notification::Notifier;

/// Controller for the markup-persisted list variant. State is the
/// rendered fragment; every mutation rewrites it wholesale.
pub struct MarkupService<N: Notifier> {
    repository: Repository,
    pub notifier: N,
    list: MarkupList,
}

impl<N: Notifier> MarkupService<N> {
    /// The startup read path: rebuild the list from the stored fragment,
    /// empty when the key is absent.
    pub fn new(repository: Repository, notifier: N) -> Self {
        let list = MarkupList::parse(repository.markup.load().as_deref());
        Self {
            repository,
            notifier,
            list,
        }
    }

    /// Add a row. An empty text is warned about and not appended; the
    /// list is persisted afterwards either way.
    pub fn add(&mut self, text: &str) {
        if text.is_empty() {
            self.notifier.notify("Please write something");
        } else {
            debug!(text, "adding row");
            self.list.push(text);
        }
        self.persist();
    }

    /// Toggle the checked state of the row at 1-based position `n`.
    pub fn toggle(&mut self, n: usize) -> bool {
        let Some(index) = n.checked_sub(1) else {
            self.notifier.notify(&format!("No row {}", n));
            return false;
        };
        if self.list.toggle(index) {
            self.persist();
            true
        } else {
            self.notifier.notify(&format!("No row {}", n));
            false
        }
    }

    /// Remove the row at 1-based position `n`.
    pub fn delete(&mut self, n: usize) -> bool {
        let Some(index) = n.checked_sub(1) else {
            self.notifier.notify(&format!("No row {}", n));
            return false;
        };
        if self.list.remove(index) {
            self.persist();
            true
        } else {
            self.notifier.notify(&format!("No row {}", n));
            false
        }
    }

    pub fn rows(&self) -> &[Row] {
        self.list.rows()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    fn persist(&self) {
        if let Err(err) = self.repository.markup.save(&self.list.render()) {
            warn!(%err, "failed to persist list");
            self.notifier.notify("Failed to save list!");
        }
    }
}
