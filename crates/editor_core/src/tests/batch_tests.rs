use super::*;
use shared::domain::WordEntry;

fn entry(step: BatchStep) -> (usize, WordEntry) {
    match step {
        BatchStep::Entry { index, entry } => (index, entry),
        other => panic!("expected entry, got {other:?}"),
    }
}

#[test]
fn load_parses_lines_into_word_entries() {
    let mut batch = BatchAddWorkflow::new();
    assert!(batch.load("foo bar\nbaz"));
    assert_eq!(batch.len(), 2);

    let (index, first) = entry(batch.next());
    assert_eq!(index, 0);
    assert_eq!(first, WordEntry::new("foo", Some("bar".to_string())));

    let (index, second) = entry(batch.next());
    assert_eq!(index, 1);
    assert_eq!(second, WordEntry::new("baz", None));
}

#[test]
fn load_skips_blank_lines_and_trims() {
    let mut batch = BatchAddWorkflow::new();
    assert!(batch.load("\n  \n  你们   wqwu  \n\n你好\n"));
    assert_eq!(batch.len(), 2);
    let (_, first) = entry(batch.next());
    assert_eq!(first, WordEntry::new("你们", Some("wqwu".to_string())));
    let (_, second) = entry(batch.next());
    assert_eq!(second, WordEntry::new("你好", None));
}

#[test]
fn empty_text_is_ignored_and_keeps_the_queue() {
    let mut batch = BatchAddWorkflow::new();
    assert!(!batch.load(""));
    assert!(!batch.load("  \n\t\n"));
    assert!(batch.is_empty());

    assert!(batch.load("foo"));
    entry(batch.next());
    assert!(!batch.load("   "));
    assert_eq!(batch.len(), 1);
    // The cursor was not rewound by the rejected load.
    assert_eq!(batch.next(), BatchStep::Finished);
}

#[test]
fn next_past_the_end_reports_finished_and_stays_there() {
    let mut batch = BatchAddWorkflow::new();
    assert!(batch.load("foo bar\nbaz"));
    entry(batch.next());
    entry(batch.next());

    assert_eq!(batch.next(), BatchStep::Finished);
    assert_eq!(batch.next(), BatchStep::Finished);

    // The cursor stayed on the last entry, so previous() lands on the first.
    let (index, first) = entry(batch.previous());
    assert_eq!(index, 0);
    assert_eq!(first.word, "foo");
}

#[test]
fn previous_at_the_start_reports_boundary_and_keeps_cursor() {
    let mut batch = BatchAddWorkflow::new();
    assert!(batch.load("foo\nbar"));

    // Before the first entry.
    assert_eq!(batch.previous(), BatchStep::AtStart);

    entry(batch.next());
    assert_eq!(batch.previous(), BatchStep::AtStart);
    assert_eq!(batch.previous(), BatchStep::AtStart);

    // The cursor is still on the first entry.
    let (index, second) = entry(batch.next());
    assert_eq!(index, 1);
    assert_eq!(second.word, "bar");
}

#[test]
fn reload_replaces_queue_and_rewinds_cursor() {
    let mut batch = BatchAddWorkflow::new();
    assert!(batch.load("foo\nbar"));
    entry(batch.next());
    entry(batch.next());

    assert!(batch.load("qux zzz"));
    assert_eq!(batch.len(), 1);
    let (index, first) = entry(batch.next());
    assert_eq!(index, 0);
    assert_eq!(first, WordEntry::new("qux", Some("zzz".to_string())));
}
