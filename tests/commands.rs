#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tsk::commands::{add, config, delete, list, progress, update};
    use tsk::db::tasks::TaskStore;
    use tsk::libs::config::Config;
    use tsk::libs::error::TaskError;
    use tsk::libs::task::{Status, TaskFilter};

    struct CommandTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for CommandTestContext {
        fn setup() -> Self {
            CommandTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl CommandTestContext {
        fn add(&self, name: &str, project: &str) {
            let args = add::AddArgs {
                name: name.to_string(),
                project: project.to_string(),
            };
            add::run(args, self.temp_dir.path()).unwrap();
        }

        fn store(&self) -> TaskStore {
            TaskStore::open(self.temp_dir.path()).unwrap()
        }
    }

    fn update_args(id: &str) -> update::UpdateArgs {
        update::UpdateArgs {
            id: id.to_string(),
            name: None,
            project: None,
            status: None,
        }
    }

    fn task_error(error: &anyhow::Error) -> &TaskError {
        error.downcast_ref::<TaskError>().expect("expected a TaskError")
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_add_and_list(ctx: &mut CommandTestContext) {
        ctx.add("Buy milk", "");
        ctx.add("Write report", "Work");

        let tasks = ctx.store().get_tasks(&TaskFilter::default()).unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].project, "Work");

        let args = list::ListArgs {
            project: Some("Work".to_string()),
            status: Some("todo".to_string()),
            json: false,
        };
        assert!(list::run(args, ctx.temp_dir.path()).is_ok());
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_list_rejects_unknown_status(ctx: &mut CommandTestContext) {
        let args = list::ListArgs {
            project: None,
            status: Some("blocked".to_string()),
            json: true,
        };
        let err = list::run(args, ctx.temp_dir.path()).unwrap_err();
        assert!(matches!(task_error(&err), TaskError::InvalidArgument(_)));
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_add_rejects_empty_name(ctx: &mut CommandTestContext) {
        let args = add::AddArgs {
            name: String::new(),
            project: String::new(),
        };
        let err = add::run(args, ctx.temp_dir.path()).unwrap_err();
        assert!(matches!(task_error(&err), TaskError::ConstraintViolation(_)));
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_update_only_given_flags(ctx: &mut CommandTestContext) {
        ctx.add("Write report", "Work");
        let id = ctx.store().get_tasks(&TaskFilter::default()).unwrap()[0].id;

        let mut args = update_args(&id.to_string());
        args.status = Some("in-progress".to_string());
        update::run(args, ctx.temp_dir.path()).unwrap();

        let task = ctx.store().get_task(id).unwrap();
        assert_eq!(task.name, "Write report");
        assert_eq!(task.project, "Work");
        assert_eq!(task.status, Status::InProgress);
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_update_out_of_range_code_means_todo(ctx: &mut CommandTestContext) {
        ctx.add("Write report", "Work");
        let id = ctx.store().get_tasks(&TaskFilter::default()).unwrap()[0].id;
        ctx.store().advance(id).unwrap();

        let mut args = update_args(&id.to_string());
        args.status = Some("5".to_string());
        update::run(args, ctx.temp_dir.path()).unwrap();

        assert_eq!(ctx.store().get_task(id).unwrap().status, Status::Todo);
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_update_without_flags_still_checks_id(ctx: &mut CommandTestContext) {
        let err = update::run(update_args("8"), ctx.temp_dir.path()).unwrap_err();
        assert!(matches!(task_error(&err), TaskError::NotFound(8)));
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_malformed_ids(ctx: &mut CommandTestContext) {
        let err = update::run(update_args("first"), ctx.temp_dir.path()).unwrap_err();
        assert!(matches!(task_error(&err), TaskError::InvalidArgument(_)));

        let args = delete::DeleteArgs { id: "1.5".to_string() };
        let err = delete::run(args, ctx.temp_dir.path()).unwrap_err();
        assert!(matches!(task_error(&err), TaskError::InvalidArgument(_)));
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_delete(ctx: &mut CommandTestContext) {
        ctx.add("Buy milk", "");
        let id = ctx.store().get_tasks(&TaskFilter::default()).unwrap()[0].id;

        delete::run(delete::DeleteArgs { id: id.to_string() }, ctx.temp_dir.path()).unwrap();
        delete::run(delete::DeleteArgs { id: id.to_string() }, ctx.temp_dir.path()).unwrap();

        assert!(ctx.store().get_tasks(&TaskFilter::default()).unwrap().is_empty());
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_progress(ctx: &mut CommandTestContext) {
        ctx.add("Write report", "Work");
        let id = ctx.store().get_tasks(&TaskFilter::default()).unwrap()[0].id;

        let args = progress::ProgressArgs { id: id.to_string() };
        progress::run(args, progress::Direction::Back, ctx.temp_dir.path()).unwrap();

        assert_eq!(ctx.store().get_task(id).unwrap().status, Status::Done);
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_config_date_format(ctx: &mut CommandTestContext) {
        let args = config::ConfigArgs {
            date_format: Some("%Y-%m-%d".to_string()),
        };
        config::run(args, ctx.temp_dir.path()).unwrap();
        assert_eq!(Config::read(ctx.temp_dir.path()).unwrap().date_format, "%Y-%m-%d");

        let args = config::ConfigArgs {
            date_format: Some("%Q".to_string()),
        };
        let err = config::run(args, ctx.temp_dir.path()).unwrap_err();
        assert_eq!(err.to_string(), "'%Q' is not a valid date format");
        assert!(err.downcast_ref::<TaskError>().is_none());
        assert_eq!(Config::read(ctx.temp_dir.path()).unwrap().date_format, "%Y-%m-%d");
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_config_repairs_malformed_file(ctx: &mut CommandTestContext) {
        let config_path = ctx.temp_dir.path().join("config.json");
        std::fs::write(&config_path, "{ date_format: ").unwrap();
        assert!(Config::read(ctx.temp_dir.path()).is_err());

        let args = config::ConfigArgs { date_format: None };
        config::run(args, ctx.temp_dir.path()).unwrap();

        let args = config::ConfigArgs {
            date_format: Some("%Y-%m-%d".to_string()),
        };
        config::run(args, ctx.temp_dir.path()).unwrap();
        assert_eq!(Config::read(ctx.temp_dir.path()).unwrap().date_format, "%Y-%m-%d");
    }
}
