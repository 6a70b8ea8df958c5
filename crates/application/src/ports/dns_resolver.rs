use aliasdns_domain::{QueryResult, RecordType};

/// Blocking, DNSSEC-aware lookup of one name and one record type.
///
/// Implementations never fail: a rejected name or an engine error is reported
/// as an empty `QueryResult` with both DNSSEC flags cleared.
pub trait DnsResolver: Send + Sync {
    fn resolve(&self, name: &str, record_type: RecordType) -> QueryResult;

    fn get_ipv4(&self, name: &str) -> QueryResult {
        self.resolve(name, RecordType::A)
    }

    fn get_ipv6(&self, name: &str) -> QueryResult {
        self.resolve(name, RecordType::AAAA)
    }

    fn get_txt_record(&self, name: &str) -> QueryResult {
        self.resolve(name, RecordType::TXT)
    }
}
