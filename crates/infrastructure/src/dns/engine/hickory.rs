use aliasdns_domain::{DomainError, RecordType};
use hickory_proto::dnssec::{Proof, TrustAnchors};
use hickory_proto::rr::Record;
use hickory_proto::serialize::binary::BinEncodable;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::{Resolver, TokioResolver};
use std::sync::Arc;
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

use super::{EngineAnswer, ValidatingEngine};
use crate::dns::record_type_map::RecordTypeMapper;

const RUNTIME_WORKERS: usize = 2;

/// hickory resolver driven by a private tokio runtime.
///
/// `query` blocks the calling thread and may be called from several threads
/// at once, but never from inside another async runtime.
pub struct HickoryEngine {
    // Dropped before the runtime that drives its connections.
    resolver: TokioResolver,
    runtime: Runtime,
}

impl HickoryEngine {
    pub fn new(
        config: ResolverConfig,
        options: ResolverOpts,
        trust_anchors: Arc<TrustAnchors>,
    ) -> Result<Self, DomainError> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(RUNTIME_WORKERS)
            .thread_name("aliasdns-resolver")
            .enable_all()
            .build()
            .map_err(|e| DomainError::ResolverInit(format!("tokio runtime: {}", e)))?;

        let resolver = {
            let _guard = runtime.enter();
            Resolver::builder_with_config(config, TokioConnectionProvider::default())
                .with_options(options)
                .with_trust_anchor(trust_anchors)
                .build()
        };

        Ok(Self { resolver, runtime })
    }

    fn fqdn(name: &str) -> String {
        if name.ends_with('.') {
            name.to_string()
        } else {
            format!("{}.", name)
        }
    }
}

/// Fold the answer section into RDATA plus a DNSSEC verdict.
///
/// Only records of `record_type` count; CNAMEs and signatures along the way
/// are skipped. The answer is secure when it has at least one record and
/// every counted record is `Proof::Secure`. A single `Proof::Bogus` record
/// marks the whole answer bogus.
pub fn answer_from_records<'a, I>(records: I, record_type: RecordType) -> EngineAnswer
where
    I: IntoIterator<Item = &'a Record>,
{
    let hickory_type = RecordTypeMapper::to_hickory(record_type);
    let mut answer = EngineAnswer::default();
    let mut all_secure = true;

    for record in records {
        if record.record_type() != hickory_type {
            continue;
        }

        match record.proof() {
            Proof::Secure => {}
            Proof::Bogus => {
                answer.bogus = true;
                all_secure = false;
            }
            _ => all_secure = false,
        }

        match record.data().to_bytes() {
            Ok(bytes) => answer.rdata.push(bytes),
            Err(e) => debug!(name = %record.name(), error = %e, "Failed to encode record data"),
        }
    }

    answer.secure = all_secure && !answer.rdata.is_empty();
    answer
}

impl ValidatingEngine for HickoryEngine {
    fn query(&self, name: &str, record_type: RecordType) -> Result<EngineAnswer, DomainError> {
        let hickory_type = RecordTypeMapper::to_hickory(record_type);
        let fqdn = Self::fqdn(name);

        let lookup = self
            .runtime
            .block_on(self.resolver.lookup(fqdn.as_str(), hickory_type))
            .map_err(|e| DomainError::LookupFailed(format!("{} {}: {}", name, record_type, e)))?;

        let answer = answer_from_records(lookup.record_iter(), record_type);

        debug!(
            name = %name,
            record_type = %record_type,
            records = answer.rdata.len(),
            secure = answer.secure,
            bogus = answer.bogus,
            "Engine lookup finished"
        );

        Ok(answer)
    }
}
