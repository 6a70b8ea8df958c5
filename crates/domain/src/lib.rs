//! aliasdns domain layer
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod openalias;
pub mod query_result;
pub mod quorum;

pub use config::{CliOverrides, Config, ConfigError, DnsConfig, ForwarderOverride, LoggingConfig};
pub use dns_record::RecordType;
pub use errors::DomainError;
pub use openalias::{address_from_txt_record, dns_format_from_oa_address};
pub use query_result::QueryResult;
pub use quorum::{records_match, QuorumOutcome};
