#[cfg(test)]
mod tests {
    use chrono::{Duration, Local};
    use taskdeck::libs::config::NotificationSettings;
    use taskdeck::libs::notify::{PendingTriggers, Scheduler, TriggerKind, TriggerRegistry};
    use taskdeck::libs::store::TaskStore;
    use taskdeck::libs::task::Task;

    #[test]
    fn test_due_task_schedules_one_reminder_with_lead() {
        // Scenario: "Pay rent" due tomorrow 09:00, default 30 minute lead
        let due = Local::now() + Duration::days(1);
        let mut store = TaskStore::with_defaults();
        store.add(Task::new("Pay rent").with_due(due)).unwrap();

        let pending = store.scheduler().registry().pending();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].fire_at, due - Duration::minutes(30));
        assert_eq!(pending[0].kind, TriggerKind::DueReminder);
        assert_eq!(pending[0].body, "Pay rent");
    }

    #[test]
    fn test_disabled_notifications_schedule_nothing() {
        let due = Local::now() + Duration::days(1);
        let mut store = TaskStore::with_defaults();
        let mut task = Task::new("Silent").with_due(due);
        task.notification_enabled = false;
        store.add(task).unwrap();

        assert!(store.scheduler().registry().pending().is_empty());
    }

    #[test]
    fn test_cancel_then_reschedule_never_stacks() {
        // Property: cancelAll + scheduleFor twice == once
        let now = Local::now();
        let task = Task::new("Recheck").with_due(now + Duration::days(2));
        let mut scheduler = Scheduler::with_defaults();

        scheduler.cancel_all(task.id);
        scheduler.schedule_for(&task, now);
        let once: Vec<String> = scheduler
            .registry()
            .pending()
            .iter()
            .map(|t| t.identifier.clone())
            .collect();

        scheduler.cancel_all(task.id);
        scheduler.schedule_for(&task, now);
        scheduler.schedule_for(&task, now);
        let twice: Vec<String> = scheduler
            .registry()
            .pending()
            .iter()
            .map(|t| t.identifier.clone())
            .collect();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_update_reschedules_instead_of_stacking() {
        let now = Local::now();
        let mut store = TaskStore::with_defaults();
        let id = store
            .add(Task::new("Moving target").with_due(now + Duration::days(1)))
            .unwrap();
        assert_eq!(store.scheduler().registry().pending().len(), 1);

        let mut edited = store.get(id).unwrap().clone();
        edited.due = Some(now + Duration::days(3));
        store.update(edited).unwrap();

        let pending = store.scheduler().registry().pending();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].fire_at, now + Duration::days(3) - Duration::minutes(30));
    }

    #[test]
    fn test_delete_cancels_all_triggers() {
        let now = Local::now();
        let mut store = TaskStore::with_defaults();
        let mut task = Task::new("Doomed").with_due(now + Duration::days(1));
        task.notification_time = Some(now + Duration::hours(2));
        let id = store.add(task).unwrap();
        assert_eq!(store.scheduler().registry().pending().len(), 2);

        store.delete(id).unwrap();
        assert!(store.scheduler().registry().pending().is_empty());
    }

    #[test]
    fn test_set_notification_disabled_removes_triggers() {
        let now = Local::now();
        let mut store = TaskStore::with_defaults();
        let id = store
            .add(Task::new("Toggle me").with_due(now + Duration::days(1)))
            .unwrap();
        assert_eq!(store.scheduler().registry().pending().len(), 1);

        store.set_notification(id, false, None).unwrap();
        assert!(store.scheduler().registry().pending().is_empty());

        store.set_notification(id, true, Some(now + Duration::hours(3))).unwrap();
        let pending = store.scheduler().registry().pending();
        // Due reminder plus the explicit custom time
        assert_eq!(pending.len(), 2);
    }

    #[test]
    fn test_settings_triggers_use_fixed_identifiers() {
        let now = Local::now();
        let mut scheduler = Scheduler::with_defaults();
        scheduler.sync_settings_triggers(now);
        scheduler.sync_settings_triggers(now);

        let pending = scheduler.registry().pending();
        assert_eq!(pending.len(), 2);
        let mut ids: Vec<_> = pending.iter().map(|t| t.identifier.as_str()).collect();
        ids.sort();
        assert_eq!(ids, vec!["daily_review", "weekly_review"]);
        assert!(pending.iter().all(|t| t.repeats));
        assert!(pending.iter().all(|t| t.fire_at > now));
    }

    #[test]
    fn test_quiet_hours_defer_task_reminders() {
        let mut settings = NotificationSettings::default();
        settings.quiet_hours_enabled = true;
        let registry = Box::new(PendingTriggers::new());
        let mut scheduler = Scheduler::new(settings.clone(), registry);

        // Due at 23:30 tomorrow -> reminder at 23:00 falls in quiet hours
        let now = Local::now();
        let due = (now + Duration::days(1))
            .date_naive()
            .and_hms_opt(23, 30, 0)
            .unwrap()
            .and_local_timezone(Local)
            .unwrap();
        let task = Task::new("Night owl").with_due(due);
        scheduler.schedule_for(&task, now);

        let pending = scheduler.registry().pending();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].fire_at.time(), settings.quiet_hours_end);
    }
}
