use tracing::{debug, warn};

use crate::domain::task::{Filter, Stats, Task, TaskIdGenerator, MAX_TEXT_LEN};
use crate::repository::Repository;
use crate::services::notification::Notifier;

/// Controller for the structured task store: owns the in-memory sequence
/// and the current filter, persists after every mutation.
///
/// A storage write failure is reported through the notifier and otherwise
/// ignored; the in-memory sequence stays authoritative and the next
/// successful mutation writes it out in full.
pub struct TaskService<N: Notifier> {
    repository: Repository,
    pub notifier: N,
    tasks: Vec<Task>,
    ids: TaskIdGenerator,
    filter: Filter,
}

impl<N: Notifier> TaskService<N> {
    /// Load persisted state and build the controller. Absent or corrupt
    /// storage yields an empty sequence.
    pub fn new(repository: Repository, notifier: N) -> Self {
        let tasks = repository.tasks.load();
        let ids = TaskIdGenerator::seeded(&tasks);
        Self {
            repository,
            notifier,
            tasks,
            ids,
            filter: Filter::All,
        }
    }

    /// Add a task. Returns the new task's id, or `None` when the text is
    /// rejected (empty after trimming, or over the length bound); a
    /// rejection notifies and leaves the sequence untouched.
    pub fn add_task(&mut self, text: &str) -> Option<i64> {
        let text = text.trim();

        if text.is_empty() {
            self.notifier.notify("Please enter a task!");
            return None;
        }
        if text.chars().count() > MAX_TEXT_LEN {
            self.notifier
                .notify(&format!("Task is too long (max {} characters)", MAX_TEXT_LEN));
            return None;
        }

        let task = Task::new(self.ids.next(), text.to_string());
        let id = task.id;
        debug!(id, "adding task");
        self.tasks.push(task);
        self.persist();
        Some(id)
    }

    /// Flip the completion flag of the matching task. Unknown ids are a
    /// notified no-op.
    pub fn toggle_task(&mut self, id: i64) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.toggle();
                debug!(id, completed = task.completed, "toggled task");
                self.persist();
                true
            }
            None => {
                self.notifier.notify(&format!("No task with id {}", id));
                false
            }
        }
    }

    /// Remove the matching task. Unknown ids are a notified no-op.
    pub fn delete_task(&mut self, id: i64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            self.notifier.notify(&format!("No task with id {}", id));
            return false;
        }
        debug!(id, "deleted task");
        self.persist();
        true
    }

    /// Remove every completed task. `confirm` is handed the count and
    /// gates the destructive bulk action; with no completed tasks the
    /// operation notifies and mutates nothing. Returns the number removed.
    pub fn clear_completed(&mut self, confirm: impl FnOnce(usize) -> bool) -> usize {
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        if completed == 0 {
            self.notifier.notify("No completed tasks to clear!");
            return 0;
        }
        if !confirm(completed) {
            return 0;
        }
        self.tasks.retain(|t| !t.completed);
        debug!(removed = completed, "cleared completed tasks");
        self.persist();
        completed
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Pure read: the subsequence matching the current filter, in
    /// insertion order.
    pub fn filtered_tasks(&self) -> Vec<&Task> {
        self.filter.apply(&self.tasks)
    }

    /// Stats always come from the unfiltered sequence.
    pub fn stats(&self) -> Stats {
        Stats::of(&self.tasks)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    fn persist(&self) {
        if let Err(err) = self.repository.tasks.save(&self.tasks) {
            warn!(%err, "failed to persist tasks");
            self.notifier.notify("Failed to save task!");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::Repository;
    use crate::test_helpers::RecordingNotifier;
    use tempfile::TempDir;

    fn setup() -> (TaskService<RecordingNotifier>, TempDir) {
        let dir = TempDir::new().unwrap();
        let repository = Repository::open(dir.path().join("store.json"));
        (TaskService::new(repository, RecordingNotifier::default()), dir)
    }

    #[test]
    fn test_add_task() {
        let (mut service, _dir) = setup();
        let id = service.add_task("Buy milk").unwrap();

        let all = service.filtered_tasks();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, id);
        assert_eq!(all[0].text, "Buy milk");
        assert!(!all[0].completed);
    }

    #[test]
    fn test_add_task_trims_whitespace() {
        let (mut service, _dir) = setup();
        service.add_task("  Walk dog  ").unwrap();
        assert_eq!(service.tasks()[0].text, "Walk dog");
    }

    #[test]
    fn test_add_empty_is_rejected() {
        let (mut service, _dir) = setup();
        assert_eq!(service.add_task("   "), None);
        assert!(service.tasks().is_empty());
        assert_eq!(service.notifier.messages(), vec!["Please enter a task!"]);
    }

    #[test]
    fn test_add_over_length_is_rejected() {
        let (mut service, _dir) = setup();
        let long = "x".repeat(MAX_TEXT_LEN + 1);
        assert_eq!(service.add_task(&long), None);
        assert!(service.tasks().is_empty());
        assert_eq!(service.notifier.messages().len(), 1);
    }

    #[test]
    fn test_add_at_length_bound_is_accepted() {
        let (mut service, _dir) = setup();
        let exact = "x".repeat(MAX_TEXT_LEN);
        assert!(service.add_task(&exact).is_some());
        assert_eq!(service.tasks().len(), 1);
    }

    #[test]
    fn test_toggle_twice_restores_flag() {
        let (mut service, _dir) = setup();
        let id = service.add_task("Buy milk").unwrap();

        assert!(service.toggle_task(id));
        assert!(service.tasks()[0].completed);
        assert!(service.toggle_task(id));
        assert!(!service.tasks()[0].completed);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let (mut service, _dir) = setup();
        service.add_task("Buy milk").unwrap();
        assert!(!service.toggle_task(9999));
        assert!(!service.tasks()[0].completed);
    }

    #[test]
    fn test_delete_task() {
        let (mut service, _dir) = setup();
        let id = service.add_task("Buy milk").unwrap();
        assert!(service.delete_task(id));

        for filter in [Filter::All, Filter::Active, Filter::Completed] {
            service.set_filter(filter);
            assert!(service.filtered_tasks().iter().all(|t| t.id != id));
        }
    }

    #[test]
    fn test_clear_completed_requires_confirmation() {
        let (mut service, _dir) = setup();
        let id = service.add_task("Buy milk").unwrap();
        service.toggle_task(id);

        // Declined: nothing happens.
        assert_eq!(service.clear_completed(|_| false), 0);
        assert_eq!(service.tasks().len(), 1);

        // Confirmed: completed tasks go, count is passed through.
        let removed = service.clear_completed(|count| {
            assert_eq!(count, 1);
            true
        });
        assert_eq!(removed, 1);
        assert!(service.tasks().is_empty());
    }

    #[test]
    fn test_clear_completed_with_none_completed_notifies() {
        let (mut service, _dir) = setup();
        service.add_task("Buy milk").unwrap();

        let removed = service.clear_completed(|_| panic!("confirm must not run"));
        assert_eq!(removed, 0);
        assert_eq!(service.notifier.messages(), vec!["No completed tasks to clear!"]);
    }

    #[test]
    fn test_filters_partition_sequence() {
        let (mut service, _dir) = setup();
        let milk = service.add_task("Buy milk").unwrap();
        service.add_task("Walk dog").unwrap();
        service.toggle_task(milk);

        service.set_filter(Filter::Completed);
        let completed: Vec<i64> = service.filtered_tasks().iter().map(|t| t.id).collect();
        service.set_filter(Filter::Active);
        let active: Vec<i64> = service.filtered_tasks().iter().map(|t| t.id).collect();

        assert_eq!(completed, vec![milk]);
        assert_eq!(active.len(), 1);
        assert_eq!(completed.len() + active.len(), service.tasks().len());
    }

    #[test]
    fn test_stats_tracks_unfiltered_sequence() {
        let (mut service, _dir) = setup();
        let a = service.add_task("a").unwrap();
        service.add_task("b").unwrap();
        service.toggle_task(a);
        service.set_filter(Filter::Active);

        assert_eq!(service.stats(), Stats { total: 2, completed: 1 });
    }

    #[test]
    fn test_state_survives_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");

        let mut service = TaskService::new(
            Repository::open(&path),
            RecordingNotifier::default(),
        );
        let milk = service.add_task("Buy milk").unwrap();
        service.add_task("Walk dog").unwrap();
        service.toggle_task(milk);
        let saved = service.tasks().to_vec();
        drop(service);

        let reloaded = TaskService::new(
            Repository::open(&path),
            RecordingNotifier::default(),
        );
        assert_eq!(reloaded.tasks(), saved.as_slice());
    }

    #[test]
    fn test_milk_and_dog_scenario() {
        let (mut service, _dir) = setup();

        let milk = service.add_task("Buy milk").unwrap();
        assert_eq!(service.tasks().len(), 1);
        assert!(!service.tasks()[0].completed);

        service.toggle_task(milk);
        assert!(service.tasks()[0].completed);

        service.add_task("Walk dog").unwrap();
        assert_eq!(service.tasks().len(), 2);

        service.set_filter(Filter::Completed);
        let completed = service.filtered_tasks();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].text, "Buy milk");

        service.clear_completed(|_| true);
        assert_eq!(service.tasks().len(), 1);
        assert_eq!(service.tasks()[0].text, "Walk dog");
    }
}
