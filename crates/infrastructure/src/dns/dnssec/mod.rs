pub mod trust_anchor;
pub mod types;

pub use trust_anchor::{RootTrustAnchor, ROOT_DS};
pub use types::{DnskeyRecord, DsRecord};
