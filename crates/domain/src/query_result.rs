/// Decoded answer for one name and record type, with the DNSSEC verdict the
/// validating engine attached to it.
///
/// `dnssec_available` is set when the engine reached a verdict at all (secure
/// or bogus). `dnssec_valid` is set only for a secure, non-bogus answer, so
/// `dnssec_valid` always implies `dnssec_available`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryResult {
    records: Vec<String>,
    dnssec_available: bool,
    dnssec_valid: bool,
}

impl QueryResult {
    /// No records and no DNSSEC verdict. Used for rejected names and engine
    /// failures.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_verdict(records: Vec<String>, secure: bool, bogus: bool) -> Self {
        Self {
            records,
            dnssec_available: secure || bogus,
            dnssec_valid: secure && !bogus,
        }
    }

    /// Shorthand for a secure answer.
    pub fn secure(records: Vec<String>) -> Self {
        Self::from_verdict(records, true, false)
    }

    /// Shorthand for an answer from an unsigned zone.
    pub fn insecure(records: Vec<String>) -> Self {
        Self::from_verdict(records, false, false)
    }

    pub fn records(&self) -> &[String] {
        &self.records
    }

    pub fn into_records(self) -> Vec<String> {
        self.records
    }

    pub fn dnssec_available(&self) -> bool {
        self.dnssec_available
    }

    pub fn dnssec_valid(&self) -> bool {
        self.dnssec_valid
    }

    /// True when the answer can be used as evidence: DNSSEC was attempted and
    /// the verdict was secure.
    pub fn is_trusted(&self) -> bool {
        self.dnssec_available && self.dnssec_valid
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drop every record while keeping the verdict.
    pub fn clear_records(&mut self) {
        self.records.clear();
    }
}
