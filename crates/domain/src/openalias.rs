//! OpenAlias TXT record handling.
//!
//! A record carrying an address looks like
//! `oa1:xmr recipient_address=<address>; recipient_name=...;`. Only the
//! recipient address is extracted, and only when its length matches a
//! standard (95) or integrated (106) address exactly.

pub const OPENALIAS_MARKER: &str = "oa1:xmr";
pub const RECIPIENT_ADDRESS_KEY: &str = "recipient_address=";
pub const FIELD_TERMINATOR: char = ';';

pub const STANDARD_ADDRESS_LEN: usize = 95;
pub const INTEGRATED_ADDRESS_LEN: usize = 106;

/// Extract the recipient address from a single TXT record.
///
/// Returns `None` when the marker, the key or the terminator is missing, or
/// when the address has any length other than 95 or 106. No checksum or
/// alphabet validation happens here.
pub fn address_from_txt_record(record: &str) -> Option<String> {
    let (_, after_marker) = record.split_once(OPENALIAS_MARKER)?;
    let (_, after_key) = after_marker.split_once(RECIPIENT_ADDRESS_KEY)?;
    let (address, _) = after_key.split_once(FIELD_TERMINATOR)?;

    match address.len() {
        STANDARD_ADDRESS_LEN | INTEGRATED_ADDRESS_LEN => Some(address.to_string()),
        _ => None,
    }
}

/// Convert `name@domain.tld` into the queryable `name.domain.tld`.
///
/// Only the first `@` is replaced; identifiers without one are returned as is.
pub fn dns_format_from_oa_address(identifier: &str) -> String {
    identifier.replacen('@', ".", 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminator_must_follow_key() {
        let address = "4".repeat(STANDARD_ADDRESS_LEN);
        let record = format!("recipient_address={}; oa1:xmr", address);
        assert_eq!(address_from_txt_record(&record), None);
    }

    #[test]
    fn test_only_first_at_replaced() {
        assert_eq!(dns_format_from_oa_address("a@b@c.com"), "a.b@c.com");
    }
}
