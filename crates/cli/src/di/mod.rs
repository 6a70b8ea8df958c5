use aliasdns_application::ports::DnsResolver;
use aliasdns_application::use_cases::{LoadTxtRecordsUseCase, ResolveAddressUseCase};
use aliasdns_domain::Config;
use aliasdns_infrastructure::ResolverContext;
use std::sync::Arc;
use tracing::error;

pub struct Services {
    pub resolver: Arc<dyn DnsResolver>,
    pub resolve_address: ResolveAddressUseCase,
    pub load_txt_records: LoadTxtRecordsUseCase,
}

impl Services {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let context = ResolverContext::shared(&config.dns).map_err(|e| {
            error!("Failed to initialize resolver: {}", e);
            anyhow::anyhow!(e)
        })?;
        let resolver: Arc<dyn DnsResolver> = context;

        Ok(Self {
            resolve_address: ResolveAddressUseCase::new(resolver.clone()),
            load_txt_records: LoadTxtRecordsUseCase::new(
                resolver.clone(),
                config.dns.quorum_workers,
            )?,
            resolver,
        })
    }
}
