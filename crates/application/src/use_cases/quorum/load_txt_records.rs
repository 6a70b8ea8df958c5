use aliasdns_domain::{DomainError, QueryResult, QuorumOutcome};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::DnsResolver;
use crate::services::{random_start_index, QuorumService};

/// Fetches TXT records for a set of independent hostnames in parallel and
/// accepts a record set only when the quorum policy agrees on it.
pub struct LoadTxtRecordsUseCase {
    resolver: Arc<dyn DnsResolver>,
    pool: Arc<ThreadPool>,
}

impl LoadTxtRecordsUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>, workers: usize) -> Result<Self, DomainError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("aliasdns-quorum-{}", i))
            .build()
            .map_err(|e| DomainError::ResolverInit(format!("quorum worker pool: {}", e)))?;

        Ok(Self::with_pool(resolver, Arc::new(pool)))
    }

    pub fn with_pool(resolver: Arc<dyn DnsResolver>, pool: Arc<ThreadPool>) -> Self {
        Self { resolver, pool }
    }

    #[instrument(skip(self), fields(sources = hostnames.len()))]
    pub fn execute(&self, hostnames: &[String]) -> QuorumOutcome {
        if hostnames.is_empty() {
            debug!("No TXT hostnames configured");
            return QuorumOutcome::reject();
        }

        let results: Vec<QueryResult> = self.pool.install(|| {
            hostnames
                .par_iter()
                .map(|hostname| self.resolver.get_txt_record(hostname))
                .collect()
        });

        let first_index = random_start_index(hostnames.len());
        QuorumService::evaluate(hostnames, results, first_index)
    }
}
