use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS_PUBLIC forwarder: {0}")]
    InvalidForwarder(String),

    #[error("Trust anchor error: {0}")]
    TrustAnchor(String),

    #[error("Failed to initialize resolver: {0}")]
    ResolverInit(String),

    #[error("DNS lookup failed: {0}")]
    LookupFailed(String),

    #[error("No address found for {0}")]
    NoAddressFound(String),
}
