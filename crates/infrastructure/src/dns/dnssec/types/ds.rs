use aliasdns_domain::DomainError;
use sha2::{Digest, Sha256};
use std::fmt;

use super::DnskeyRecord;

const DIGEST_SHA256: u8 = 2;
const SHA256_LEN: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DsRecord {
    pub owner: String,
    pub key_tag: u16,
    pub algorithm: u8,
    pub digest_type: u8,
    pub digest: Vec<u8>,
}

impl DsRecord {
    /// Parse a zone-file DS line: `<owner> IN DS <tag> <alg> <digest-type> <hex>`.
    pub fn from_presentation(line: &str) -> Result<Self, DomainError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [owner, class, rtype, key_tag, algorithm, digest_type, digest] = fields.as_slice()
        else {
            return Err(DomainError::TrustAnchor(format!(
                "expected 7 fields in DS record, got {}",
                fields.len()
            )));
        };

        if !class.eq_ignore_ascii_case("IN") || !rtype.eq_ignore_ascii_case("DS") {
            return Err(DomainError::TrustAnchor(format!(
                "not an IN DS record: {} {}",
                class, rtype
            )));
        }

        let parse_err = |what: &str, value: &str| {
            DomainError::TrustAnchor(format!("invalid DS {}: {}", what, value))
        };

        let ds = Self {
            owner: owner.to_string(),
            key_tag: key_tag.parse().map_err(|_| parse_err("key tag", key_tag))?,
            algorithm: algorithm
                .parse()
                .map_err(|_| parse_err("algorithm", algorithm))?,
            digest_type: digest_type
                .parse()
                .map_err(|_| parse_err("digest type", digest_type))?,
            digest: hex::decode(digest).map_err(|_| parse_err("digest", digest))?,
        };

        if ds.digest_type == DIGEST_SHA256 && ds.digest.len() != SHA256_LEN {
            return Err(DomainError::TrustAnchor(format!(
                "Invalid digest length for SHA-256: got {}, expected {}",
                ds.digest.len(),
                SHA256_LEN
            )));
        }

        Ok(ds)
    }

    /// Check that `dnskey` is the key this DS record refers to.
    pub fn matches(&self, dnskey: &DnskeyRecord) -> Result<bool, DomainError> {
        if dnskey.calculate_key_tag() != self.key_tag {
            return Ok(false);
        }

        if dnskey.algorithm != self.algorithm {
            return Ok(false);
        }

        if self.digest_type != DIGEST_SHA256 {
            return Err(DomainError::TrustAnchor(format!(
                "Unsupported DS digest type: {}",
                self.digest_type
            )));
        }

        let mut hasher = Sha256::new();
        hasher.update(owner_wire(&self.owner)?);
        hasher.update(dnskey.rdata());

        Ok(hasher.finalize().as_slice() == self.digest.as_slice())
    }
}

/// Owner name in canonical (lowercase, uncompressed) wire form.
fn owner_wire(owner: &str) -> Result<Vec<u8>, DomainError> {
    let mut wire = Vec::with_capacity(owner.len() + 2);

    for label in owner.trim_end_matches('.').split('.').filter(|l| !l.is_empty()) {
        let len = u8::try_from(label.len())
            .ok()
            .filter(|len| *len <= 63)
            .ok_or_else(|| DomainError::TrustAnchor(format!("label too long: {}", label)))?;
        wire.push(len);
        wire.extend(label.bytes().map(|b| b.to_ascii_lowercase()));
    }
    wire.push(0);

    Ok(wire)
}

impl fmt::Display for DsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} IN DS {} {} {} {}",
            self.owner,
            self.key_tag,
            self.algorithm,
            self.digest_type,
            hex::encode_upper(&self.digest)
        )
    }
}
