//! aliasdns infrastructure: the hickory-backed validating engine, record
//! decoders, the built-in root trust anchor and `ResolverContext`.
pub mod dns;

pub use dns::{ResolverContext, RootTrustAnchor};
