#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tsk::db::tasks::TaskStore;
    use tsk::libs::data_storage::{DataStorage, APP_NAME};

    struct StorageTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for StorageTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            StorageTestContext { temp_dir }
        }
    }

    // Single test in this binary: it changes process-wide environment variables.
    #[test_context(StorageTestContext)]
    #[test]
    fn test_data_dir_is_created_under_home(ctx: &mut StorageTestContext) {
        let dir = DataStorage::new().dir().unwrap();

        assert!(dir.starts_with(ctx.temp_dir.path()));
        assert!(dir.ends_with(APP_NAME));
        assert!(dir.is_dir());

        let mut store = TaskStore::open(&dir).unwrap();
        store.insert("Buy milk", "").unwrap();
        assert!(DataStorage::new().get_path("tasks.db").unwrap().exists());
    }
}
