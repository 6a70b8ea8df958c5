pub mod dns;
pub mod errors;
pub mod forwarders;
pub mod logging;
pub mod root;

pub use dns::DnsConfig;
pub use errors::ConfigError;
pub use forwarders::{ForwarderOverride, DEFAULT_DNS_PUBLIC_ADDR, DNS_PUBLIC_ENV};
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
