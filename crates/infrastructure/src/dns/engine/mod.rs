mod builder;
mod hickory;

pub use builder::{resolver_options, tcp_resolver_config};
pub use hickory::{answer_from_records, HickoryEngine};

use aliasdns_domain::{DomainError, RecordType};

/// Raw answer for one name and record type.
///
/// `rdata` holds the uncompressed RDATA of every answer record of the
/// requested type. `secure` and `bogus` are the engine's DNSSEC verdict for
/// the whole answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineAnswer {
    pub rdata: Vec<Vec<u8>>,
    pub secure: bool,
    pub bogus: bool,
}

/// Blocking "one name, one type" contract over a DNSSEC-validating resolver.
pub trait ValidatingEngine: Send + Sync {
    fn query(&self, name: &str, record_type: RecordType) -> Result<EngineAnswer, DomainError>;
}
