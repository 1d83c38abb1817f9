use timing_diagram::data::registry::*;

fn registry_from(rows: &[(&str, &str)]) -> SignalRegistry {
    let mut reg = SignalRegistry::new();
    for _ in rows {
        reg.add_row();
    }
    for (row, (name, seq)) in reg.rows_mut().iter_mut().zip(rows) {
        row.name = name.to_string();
        row.sequence = seq.to_string();
    }
    reg
}

#[test]
fn add_row_appends_empty_rows() {
    let mut reg = SignalRegistry::new();
    assert!(reg.is_empty());
    for _ in 0..5 {
        reg.add_row();
    }
    assert_eq!(reg.len(), 5);
    assert!(reg.rows().iter().all(|r| r.name.is_empty() && r.sequence.is_empty()));
}

#[test]
fn with_rows_seeds_empty_rows() {
    let reg = SignalRegistry::with_rows(3);
    assert_eq!(reg.rows(), &[SignalRow::default(), SignalRow::default(), SignalRow::default()]);
    assert!(reg.snapshot().is_empty());
}

#[test]
fn snapshot_keeps_all_complete_rows_in_order() {
    let reg = registry_from(&[("CLK", "0101"), ("DATA", "1100"), ("EN", "1")]);
    let snap = reg.snapshot();
    assert_eq!(
        snap,
        vec![
            SignalEntry::new("CLK", "0101"),
            SignalEntry::new("DATA", "1100"),
            SignalEntry::new("EN", "1"),
        ]
    );
}

#[test]
fn snapshot_drops_incomplete_rows_and_keeps_relative_order() {
    let reg = registry_from(&[
        ("A", "01"),
        ("", "11"),
        ("B", ""),
        ("C", "10"),
        ("", ""),
        ("D", "0"),
    ]);
    let names: Vec<String> = reg.snapshot().into_iter().map(|e| e.name).collect();
    assert_eq!(names, vec!["A", "C", "D"]);
}

#[test]
fn snapshot_preserves_whitespace_exactly() {
    let reg = registry_from(&[(" clk ", " 01"), (" ", "1")]);
    let snap = reg.snapshot();
    assert_eq!(snap.len(), 2);
    assert_eq!(snap[0].name, " clk ");
    assert_eq!(snap[0].sequence, " 01");
    assert_eq!(snap[1].name, " ");
}

#[test]
fn snapshot_allows_duplicate_names() {
    let reg = registry_from(&[("X", "0"), ("X", "1")]);
    assert_eq!(reg.snapshot().len(), 2);
}

#[test]
fn snapshot_is_detached_from_later_edits() {
    let mut reg = registry_from(&[("A", "01")]);
    let snap = reg.snapshot();
    reg.rows_mut()[0].sequence.push('1');
    reg.add_row();
    assert_eq!(snap, vec![SignalEntry::new("A", "01")]);
}
