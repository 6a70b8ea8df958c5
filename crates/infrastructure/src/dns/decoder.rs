//! Raw RDATA to display string, one decoder per supported record type.
//!
//! Decoders never panic on short input; they log and return `None` so the
//! caller can drop the record and keep its siblings.

use aliasdns_domain::RecordType;
use tracing::error;

pub trait RecordDecoder: Send + Sync {
    fn decode(&self, rdata: &[u8]) -> Option<String>;
}

/// A record: dotted-decimal of the first four octets.
pub struct Ipv4Decoder;

/// AAAA record: the first eight octets as colon-separated decimals.
///
/// This is not RFC 5952 notation. Callers that compare or display these
/// strings rely on the exact form.
pub struct Ipv6Decoder;

/// TXT record: payload with the leading length octet stripped.
pub struct TxtDecoder;

const IPV4_MIN_LEN: usize = 4;
const IPV6_MIN_LEN: usize = 8;
const TXT_MIN_LEN: usize = 1;

impl RecordDecoder for Ipv4Decoder {
    fn decode(&self, rdata: &[u8]) -> Option<String> {
        if rdata.len() < IPV4_MIN_LEN {
            error!(len = rdata.len(), "Invalid IPv4 address record data");
            return None;
        }

        Some(format!(
            "{}.{}.{}.{}",
            rdata[0], rdata[1], rdata[2], rdata[3]
        ))
    }
}

impl RecordDecoder for Ipv6Decoder {
    fn decode(&self, rdata: &[u8]) -> Option<String> {
        if rdata.len() < IPV6_MIN_LEN {
            error!(len = rdata.len(), "Invalid IPv6 address record data");
            return None;
        }

        let parts: Vec<String> = rdata[..IPV6_MIN_LEN]
            .iter()
            .map(|octet| octet.to_string())
            .collect();
        Some(parts.join(":"))
    }
}

impl RecordDecoder for TxtDecoder {
    fn decode(&self, rdata: &[u8]) -> Option<String> {
        if rdata.len() < TXT_MIN_LEN {
            error!("Empty TXT record data");
            return None;
        }

        Some(String::from_utf8_lossy(&rdata[1..]).into_owned())
    }
}

pub fn decoder_for(record_type: RecordType) -> &'static dyn RecordDecoder {
    match record_type {
        RecordType::A => &Ipv4Decoder,
        RecordType::AAAA => &Ipv6Decoder,
        RecordType::TXT => &TxtDecoder,
    }
}
