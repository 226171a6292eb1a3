#[cfg(test)]
mod tests {
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tomo::db::db::Db;
    use tomo::db::sessions::Sessions;
    use tomo::libs::repository::TaskRepository;
    use tomo::libs::session::TimerSession;
    use tomo::libs::task::{TaskFilter, TaskPatch};
    use uuid::Uuid;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct RepoTestContext {
        _temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl TestContext for RepoTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            RepoTestContext {
                _temp_dir: temp_dir,
                _guard: guard,
            }
        }
    }

    #[test_context(RepoTestContext)]
    #[test]
    fn test_totals_partition_the_list(_ctx: &mut RepoTestContext) {
        let mut repository = TaskRepository::new().unwrap();

        let mut ids = Vec::new();
        for name in ["a", "b", "c", "d"] {
            ids.push(repository.add(name).unwrap().unwrap().id);
        }
        repository.toggle_completion(&ids[1]).unwrap();

        let totals = repository.totals();
        assert_eq!(totals.to_be_completed + totals.completed, repository.tasks().len());
        assert_eq!(totals.completed, 1);

        repository.delete(&ids[0]).unwrap();
        repository.delete(&ids[1]).unwrap();
        let totals = repository.totals();
        assert_eq!(totals.to_be_completed + totals.completed, repository.tasks().len());
        assert_eq!(totals.completed, 0);
    }

    #[test_context(RepoTestContext)]
    #[test]
    fn test_blank_name_is_a_noop(_ctx: &mut RepoTestContext) {
        let mut repository = TaskRepository::new().unwrap();
        repository.add("real work").unwrap();
        let before_totals = repository.totals();

        assert!(repository.add("").unwrap().is_none());
        assert!(repository.add("   ").unwrap().is_none());
        assert!(repository.add("\t\n").unwrap().is_none());

        assert_eq!(repository.tasks().len(), 1);
        assert_eq!(repository.totals(), before_totals);
    }

    #[test_context(RepoTestContext)]
    #[test]
    fn test_add_trims_and_prepends(_ctx: &mut RepoTestContext) {
        let mut repository = TaskRepository::new().unwrap();

        repository.add("older").unwrap();
        let newer = repository.add("  newer  ").unwrap().unwrap();
        assert_eq!(newer.name, "newer");
        assert_eq!(repository.tasks()[0].id, newer.id);

        // The ordering survives a reload from the store.
        let repository = TaskRepository::new().unwrap();
        let names: Vec<&str> = repository.tasks().iter().map(|task| task.name.as_str()).collect();
        assert_eq!(names, vec!["newer", "older"]);
    }

    #[test_context(RepoTestContext)]
    #[test]
    fn test_toggle_does_not_reorder(_ctx: &mut RepoTestContext) {
        let mut repository = TaskRepository::new().unwrap();

        repository.add("first").unwrap();
        let middle = repository.add("middle").unwrap().unwrap();
        repository.add("last").unwrap();

        assert!(repository.toggle_completion(&middle.id).unwrap());
        let names: Vec<&str> = repository.tasks().iter().map(|task| task.name.as_str()).collect();
        assert_eq!(names, vec!["last", "middle", "first"]);
        assert!(repository.get(&middle.id).unwrap().completed);

        // Unknown ids are a silent no-op.
        assert!(!repository.toggle_completion(&Uuid::new_v4()).unwrap());
    }

    #[test_context(RepoTestContext)]
    #[test]
    fn test_delete_clears_session_row(_ctx: &mut RepoTestContext) {
        let mut repository = TaskRepository::new().unwrap();
        let task = repository.add("with session").unwrap().unwrap();

        let mut sessions = Sessions::new().unwrap();
        let mut session = TimerSession::new(task.id);
        session.remaining_seconds = 1400;
        session.elapsed_seconds = 100;
        sessions.put(&session).unwrap();

        assert!(repository.delete(&task.id).unwrap());
        assert!(repository.get(&task.id).is_none());
        assert!(sessions.get(&task.id).unwrap().is_none());

        assert!(!repository.delete(&task.id).unwrap());
    }

    #[test_context(RepoTestContext)]
    #[test]
    fn test_update_merges_partial_fields(_ctx: &mut RepoTestContext) {
        let mut repository = TaskRepository::new().unwrap();
        let task = repository.add("patchable").unwrap().unwrap();

        let updated = repository
            .update(
                &task.id,
                TaskPatch {
                    pomodoro_quantity: Some(600),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(updated);

        let stored = repository.get(&task.id).unwrap();
        assert_eq!(stored.pomodoro_quantity, 600);
        assert_eq!(stored.name, "patchable");
        assert!(!stored.completed);
        assert_eq!(repository.totals().estimated_time, 600);

        assert!(!repository.update(&Uuid::new_v4(), TaskPatch::default()).unwrap());
    }

    #[test_context(RepoTestContext)]
    #[test]
    fn test_failed_write_leaves_memory_unchanged(_ctx: &mut RepoTestContext) {
        let mut repository = TaskRepository::new().unwrap();
        let task = repository.add("keep me").unwrap().unwrap();
        let before_tasks = repository.tasks().to_vec();
        let before_totals = repository.totals();

        // Break every later write by dropping the backing table through
        // a second connection; the repository's connection is already
        // open, so only the statements fail, not the store itself.
        Db::new().unwrap().conn.execute("DROP TABLE tasks", []).unwrap();

        assert!(repository.add("never stored").is_err());
        assert!(repository.toggle_completion(&task.id).is_err());
        assert!(repository
            .update(
                &task.id,
                TaskPatch {
                    pomodoro_quantity: Some(99),
                    ..Default::default()
                },
            )
            .is_err());
        assert!(repository.delete(&task.id).is_err());

        // None of the failed writes reached the in-memory list.
        assert_eq!(repository.tasks(), before_tasks.as_slice());
        assert_eq!(repository.totals(), before_totals);
    }

    #[test_context(RepoTestContext)]
    #[test]
    fn test_filtered_views(_ctx: &mut RepoTestContext) {
        let mut repository = TaskRepository::new().unwrap();
        let done = repository.add("done").unwrap().unwrap();
        repository.add("pending").unwrap();
        repository.toggle_completion(&done.id).unwrap();

        assert_eq!(repository.filtered(TaskFilter::All).len(), 2);
        assert_eq!(repository.filtered(TaskFilter::Pending).len(), 1);
        assert_eq!(repository.filtered(TaskFilter::Completed).len(), 1);
    }

    #[test_context(RepoTestContext)]
    #[test]
    fn test_resolve_by_prefix(_ctx: &mut RepoTestContext) {
        let mut repository = TaskRepository::new().unwrap();
        let task = repository.add("target").unwrap().unwrap();

        let full = task.id.to_string();
        assert_eq!(repository.resolve(&full).unwrap().id, task.id);
        assert_eq!(repository.resolve(&full[..8]).unwrap().id, task.id);
        assert!(repository.resolve("").is_none());
        assert!(repository.resolve("zzzzzzzz").is_none());
    }
}
