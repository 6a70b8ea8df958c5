use aliasdns_domain::{address_from_txt_record, dns_format_from_oa_address, DomainError};
use std::sync::Arc;
use tracing::{debug, error, instrument};

use crate::ports::{AddressConfirmation, DnsResolver};

/// Addresses found for one identifier, in the order the resolver returned the
/// TXT records, plus whether that answer was DNSSEC-validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressCandidates {
    pub addresses: Vec<String>,
    pub dnssec_valid: bool,
}

pub struct ResolveAddressUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl ResolveAddressUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    /// Resolve `name@domain.tld` (or `name.domain.tld`) to candidate
    /// addresses from a single TXT lookup.
    #[instrument(skip(self))]
    pub fn addresses_from_url(&self, identifier: &str) -> AddressCandidates {
        let name = dns_format_from_oa_address(identifier);
        let result = self.resolver.get_txt_record(&name);
        let dnssec_valid = result.is_trusted();

        let addresses: Vec<String> = result
            .records()
            .iter()
            .filter_map(|record| address_from_txt_record(record))
            .collect();

        debug!(
            name = %name,
            txt_records = result.records().len(),
            addresses = addresses.len(),
            dnssec_valid,
            "OpenAlias lookup finished"
        );

        AddressCandidates {
            addresses,
            dnssec_valid,
        }
    }

    /// Look up `identifier` and let `confirm` pick the address to use.
    ///
    /// The callback is not consulted when no candidate was found. Its answer
    /// is returned verbatim, including an empty string for "declined".
    #[instrument(skip(self, confirm))]
    pub fn get_account_address_as_str_from_url<C>(
        &self,
        identifier: &str,
        confirm: &C,
    ) -> Result<String, DomainError>
    where
        C: AddressConfirmation + ?Sized,
    {
        let candidates = self.addresses_from_url(identifier);
        if candidates.addresses.is_empty() {
            error!(identifier = %identifier, "No Monero address found at OpenAlias identifier");
            return Err(DomainError::NoAddressFound(identifier.to_string()));
        }

        Ok(confirm.confirm(identifier, &candidates.addresses, candidates.dnssec_valid))
    }
}
