#[cfg(test)]
mod tests {
    use chrono::{Duration, Local};
    use taskdeck::libs::recurrence;
    use taskdeck::libs::store::TaskStore;
    use taskdeck::libs::task::{RecurrenceRule, RepeatUnit, Task, TaskStatus};

    #[test]
    fn test_expander_goes_through_the_normal_add_path() {
        let mut store = TaskStore::with_defaults();
        let due = Local::now() + Duration::days(1);
        let mut task = Task::new("Weekly review")
            .with_due(due)
            .with_tags(vec!["#routine".into()]);
        task.recurrence = Some(RecurrenceRule::new(RepeatUnit::Weekly, 1));
        let id = store.add(task).unwrap();

        store.complete(id).unwrap();
        let next_id = recurrence::expand(&mut store, id, Local::now()).unwrap().unwrap();

        // The completed task is untouched, the new instance starts in Inbox
        assert_eq!(store.get(id).unwrap().status, TaskStatus::Done);
        let next = store.get(next_id).unwrap();
        assert_eq!(next.status, TaskStatus::Inbox);
        assert_eq!(next.sort_order, store.bucket(TaskStatus::Inbox).len() - 1);
        assert_eq!(next.due, Some(due + Duration::weeks(1)));
        assert_eq!(next.tags, vec!["#routine".to_string()]);
        assert!(next.original_status.is_none());
    }

    #[test]
    fn test_completing_never_expands_on_its_own() {
        let mut store = TaskStore::with_defaults();
        let mut task = Task::new("Monthly bills").with_due(Local::now() + Duration::days(1));
        task.recurrence = Some(RecurrenceRule::new(RepeatUnit::Monthly, 1));
        let id = store.add(task).unwrap();

        store.complete(id).unwrap();
        assert_eq!(store.tasks().len(), 1);
    }

    #[test]
    fn test_interval_below_one_is_rejected_at_add() {
        let mut store = TaskStore::with_defaults();
        let mut task = Task::new("Broken rule");
        task.recurrence = Some(RecurrenceRule {
            enabled: true,
            unit: RepeatUnit::Daily,
            interval: 0,
            end_date: None,
        });
        assert!(store.add(task).is_err());
    }

    #[test]
    fn test_expansion_stops_at_end_date() {
        let mut store = TaskStore::with_defaults();
        let due = Local::now() + Duration::days(1);
        let mut rule = RecurrenceRule::new(RepeatUnit::Daily, 1);
        rule.end_date = Some(due.date_naive());
        let mut task = Task::new("Short series").with_due(due);
        task.recurrence = Some(rule);
        let id = store.add(task).unwrap();

        store.complete(id).unwrap();
        let next = recurrence::expand(&mut store, id, Local::now()).unwrap();
        assert!(next.is_none());
        assert_eq!(store.tasks().len(), 1);
    }
}
