use aliasdns_application::ports::DnsResolver;
use aliasdns_domain::{DnsConfig, DomainError, ForwarderOverride, QueryResult, RecordType};
use std::net::Ipv4Addr;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, error, info, warn};

use super::decoder::decoder_for;
use super::dnssec::RootTrustAnchor;
use super::engine::{resolver_options, tcp_resolver_config, HickoryEngine, ValidatingEngine};

static SHARED: Mutex<Option<Arc<ResolverContext>>> = Mutex::new(None);

/// DNSSEC-aware resolver handle.
///
/// Owns the validating engine; dropping the context releases it. Names are
/// checked before any query is issued and engine failures are reported as an
/// empty, untrusted result.
pub struct ResolverContext {
    engine: Box<dyn ValidatingEngine>,
    forwarders: Vec<Ipv4Addr>,
}

impl ResolverContext {
    /// Build a context on top of hickory with the built-in root anchor.
    pub fn create(config: &DnsConfig) -> Result<Self, DomainError> {
        let forwarders = Self::forwarders_from(config.dns_public.as_deref());
        let anchor = RootTrustAnchor::load()?;

        let engine = HickoryEngine::new(
            tcp_resolver_config(&forwarders),
            resolver_options(config),
            anchor.to_trust_anchors(),
        )?;

        info!(
            forwarders = forwarders.len(),
            trust_anchor = anchor.key_tag(),
            "DNSSEC resolver initialized (TCP only)"
        );

        Ok(Self::with_engine(Box::new(engine), forwarders))
    }

    pub fn with_engine(engine: Box<dyn ValidatingEngine>, forwarders: Vec<Ipv4Addr>) -> Self {
        Self { engine, forwarders }
    }

    /// Process-wide default context, created on first use.
    ///
    /// Later calls return the same instance and ignore `config`.
    pub fn shared(config: &DnsConfig) -> Result<Arc<Self>, DomainError> {
        let mut slot = SHARED.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(context) = slot.as_ref() {
            return Ok(Arc::clone(context));
        }

        let context = Arc::new(Self::create(config)?);
        *slot = Some(Arc::clone(&context));
        Ok(context)
    }

    /// Drop the process-wide default context so its engine and runtime are
    /// released once the last outstanding `Arc` goes away. A later `shared`
    /// call creates a fresh instance.
    pub fn release_shared() {
        let released = SHARED
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if released.is_some() {
            debug!("Shared resolver context released");
        }
    }

    pub fn forwarders(&self) -> &[Ipv4Addr] {
        &self.forwarders
    }

    /// Forwarders selected by a `DNS_PUBLIC` value. A malformed value is
    /// logged and ignored.
    pub fn forwarders_from(dns_public: Option<&str>) -> Vec<Ipv4Addr> {
        let Some(value) = dns_public else {
            return Vec::new();
        };

        match ForwarderOverride::parse(value) {
            Ok(forwarder) => {
                debug!(dns_public = %forwarder, "Using DNS_PUBLIC forwarders");
                forwarder.addresses()
            }
            Err(e) => {
                error!(error = %e, "Invalid DNS_PUBLIC value, using system name servers");
                Vec::new()
            }
        }
    }

    fn check_address_syntax(name: &str) -> Result<(), DomainError> {
        if !name.contains('.') {
            return Err(DomainError::InvalidDomainName(format!(
                "{} (no dot in name)",
                name
            )));
        }
        Ok(())
    }
}

impl DnsResolver for ResolverContext {
    fn resolve(&self, name: &str, record_type: RecordType) -> QueryResult {
        if let Err(e) = Self::check_address_syntax(name) {
            warn!(error = %e, "Refusing to resolve name");
            return QueryResult::empty();
        }

        let answer = match self.engine.query(name, record_type) {
            Ok(answer) => answer,
            Err(e) => {
                debug!(name = %name, record_type = %record_type, error = %e, "DNS lookup failed");
                return QueryResult::empty();
            }
        };

        let decoder = decoder_for(record_type);
        let records: Vec<String> = answer
            .rdata
            .iter()
            .filter_map(|rdata| decoder.decode(rdata))
            .collect();

        QueryResult::from_verdict(records, answer.secure, answer.bogus)
    }
}
