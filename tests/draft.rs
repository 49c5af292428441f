#[cfg(test)]
mod tests {
    use calboard::libs::board::sample_tasks;
    use calboard::libs::draft::TaskDraft;
    use calboard::libs::task::LabelColor;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 2, 15).unwrap()
    }

    #[test]
    fn test_new_task_drops_pending_labels() {
        let mut draft = TaskDraft::new("Write report").with_default_color(LabelColor::Green);
        let filled = draft.add_label();
        draft.add_label();
        assert!(draft.set_label_text(filled, "docs"));

        let (task, labels) = draft.into_new_task(date()).unwrap();
        assert_eq!(task.title, "Write report");
        assert_eq!(task.date, date());
        assert!(task.labels.is_empty());
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].text, "docs");
        assert_eq!(labels[0].color, LabelColor::Green.hex());
    }

    #[test]
    fn test_empty_title_rejects_draft() {
        let task = &sample_tasks()[0];
        assert!(TaskDraft::new("").into_new_task(date()).is_none());

        let mut draft = TaskDraft::from_task(task);
        draft.set_title("");
        assert!(draft.into_edited(task).is_none());
    }

    #[test]
    fn test_out_of_range_indices_are_noops() {
        let mut draft = TaskDraft::new("Title");
        assert!(!draft.set_label_text(0, "x"));
        assert!(!draft.set_label_color(3, "#000000"));
        assert!(draft.remove_label(1).is_none());
        assert!(draft.labels.is_empty());
    }

    #[test]
    fn test_edit_keeps_id_and_date() {
        let task = sample_tasks()[0].clone();
        let mut draft = TaskDraft::from_task(&task);
        draft.set_title("Task 1 (renamed)");
        let removed = draft.remove_label(0).unwrap();
        assert_eq!(removed.text, "Label 1");
        draft.set_label_color(0, LabelColor::Yellow.hex());

        let edited = draft.into_edited(&task).unwrap();
        assert_eq!(edited.id, task.id);
        assert_eq!(edited.date, task.date);
        assert_eq!(edited.title, "Task 1 (renamed)");
        assert_eq!(edited.labels.len(), 1);
        assert_eq!(edited.labels[0].id, "2");
        assert_eq!(edited.labels[0].color, "#ffc107");
    }

    #[test]
    fn test_edit_drops_labels_cleared_to_empty() {
        let task = sample_tasks()[1].clone();
        let mut draft = TaskDraft::from_task(&task);
        draft.set_label_text(1, "");

        let edited = draft.into_edited(&task).unwrap();
        assert_eq!(edited.labels.len(), 1);
        assert_eq!(edited.labels[0].text, "Label 2");
    }
}
