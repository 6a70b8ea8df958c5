use aliasdns_domain::{records_match, QuorumOutcome};

fn set(records: &[&str]) -> Vec<String> {
    records.iter().map(|r| r.to_string()).collect()
}

#[test]
fn test_match_is_order_independent() {
    assert!(records_match(&set(&["a", "b"]), &set(&["b", "a"])));
}

#[test]
fn test_cardinality_must_agree() {
    assert!(!records_match(&set(&["a", "b"]), &set(&["a", "b", "b"])));
}

#[test]
fn test_disjoint_sets_do_not_match() {
    assert!(!records_match(&set(&["a"]), &set(&["b"])));
}

#[test]
fn test_empty_sets_match() {
    assert!(records_match(&[], &[]));
}

#[test]
fn test_outcome_constructors() {
    let accepted = QuorumOutcome::accept(set(&["x"]));
    assert!(accepted.accepted());
    assert_eq!(accepted.records(), &set(&["x"])[..]);

    let rejected = QuorumOutcome::reject();
    assert!(!rejected.accepted());
    assert!(rejected.records().is_empty());
}
