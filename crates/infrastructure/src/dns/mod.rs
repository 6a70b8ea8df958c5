pub mod decoder;
pub mod dnssec;
pub mod engine;
pub mod record_type_map;
pub mod resolver_context;

pub use decoder::{decoder_for, RecordDecoder};
pub use dnssec::RootTrustAnchor;
pub use engine::{answer_from_records, EngineAnswer, HickoryEngine, ValidatingEngine};
pub use record_type_map::RecordTypeMapper;
pub use resolver_context::ResolverContext;
