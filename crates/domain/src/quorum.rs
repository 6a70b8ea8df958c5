/// Result of a multi-source TXT lookup. Built once, never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuorumOutcome {
    accepted: bool,
    records: Vec<String>,
}

impl QuorumOutcome {
    pub fn accept(records: Vec<String>) -> Self {
        Self {
            accepted: true,
            records,
        }
    }

    pub fn reject() -> Self {
        Self::default()
    }

    pub fn accepted(&self) -> bool {
        self.accepted
    }

    pub fn records(&self) -> &[String] {
        &self.records
    }

    pub fn into_records(self) -> Vec<String> {
        self.records
    }
}

/// Two record sets match when they have the same cardinality and every record
/// of `a` appears in `b`. Order is irrelevant.
pub fn records_match(a: &[String], b: &[String]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter().all(|record| b.contains(record))
}
