use catalog_reflow_engine::{EntryMeta, FieldOrder, Record, ReflowOptions, reflow_lines};

#[test]
fn fixture_single_entry() {
    assert_fixture("single_entry");
}

#[test]
fn fixture_multiple_entries() {
    assert_fixture("multiple_entries");
}

#[test]
fn fixture_eof_flush() {
    assert_fixture("eof_flush");
}

#[test]
fn fixture_page_breaks() {
    assert_fixture("page_breaks");
}

fn assert_fixture(name: &str) {
    let text = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.txt",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();

    let records = reflow_lines(text.lines(), EntryMeta::default(), ReflowOptions::default());
    invariants(&records);

    let order = FieldOrder::default();
    let out: String = records.iter().map(|r| r.to_tsv(&order)).collect();
    insta::assert_snapshot!(name, out);
}

/// Validates record invariants over a full fixture run.
///
/// Asserts that:
/// - Assembled text is non-empty and free of tabs and newlines
/// - Every identifier is the content address of its own entry type and text
fn invariants(records: &[Record]) {
    for record in records {
        assert!(!record.text.is_empty(), "empty entry text was emitted");
        assert!(
            !record.text.contains('\t') && !record.text.contains('\n'),
            "entry text would break the TSV surface: {:?}",
            record.text
        );
        assert_eq!(
            record.id,
            catalog_reflow_engine::record_id(&record.meta.entry_type, &record.text),
            "identifier is not the content address of the record"
        );
    }
}
