mod address_confirmation;
mod dns_resolver;

pub use address_confirmation::AddressConfirmation;
pub use dns_resolver::DnsResolver;

// Re-export for convenience
pub use aliasdns_domain::{QueryResult, RecordType};
