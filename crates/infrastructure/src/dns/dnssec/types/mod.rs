mod dnskey;
mod ds;

pub use dnskey::DnskeyRecord;
pub use ds::DsRecord;
