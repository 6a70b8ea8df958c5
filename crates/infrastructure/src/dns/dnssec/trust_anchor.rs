use aliasdns_domain::DomainError;
use base64::{engine::general_purpose::STANDARD, Engine};
use hickory_proto::dnssec::{Algorithm, PublicKeyBuf, TrustAnchors};
use std::sync::Arc;
use tracing::debug;

use super::types::{DnskeyRecord, DsRecord};

/// The only trust anchor the resolver accepts.
pub const ROOT_DS: &str =
    ". IN DS 20326 8 2 E06D44B80B8F1D39A95C0B0D7C65D08458E880409BBC683457104237C7F8EC8D";

const ROOT_KSK_FLAGS: u16 = 257;
const ROOT_KSK_ALGORITHM: u8 = 8;

const ROOT_KSK_20326: &str = concat!(
    "AwEAAaz/tAm8yTn4Mfeh5eyI96WSVexTBAvkMgJzkKTOiW1vkIbzxeF3",
    "+/4RgWOq7HrxRixHlFlExOLAJr5emLvN7SWXgnLh4+B5xQlNVz8Og8kv",
    "ArMtNROxVQuCaSnIDdD5LKyWbRd2n9WGe2R8PzgCmr3EgVLrjyBxWezF",
    "0jLHwVN8efS3rCj/EWgvIWgb9tarpVUDK/b58Da+sqqls3eNbuv7pr+e",
    "oZG+SrDK6nWeL3c6H5Apxz7LjVc1uTIdsIXxuOLYA4/ilBmSVIzuDWfd",
    "RUfhHdY6+cn8HFRm+2hM8AnXGXws9555KrUB5qihylGa8subX2Nn6UwN",
    "R1AkUTV74bU="
);

/// Root KSK checked against the built-in DS record.
///
/// hickory validates against DNSKEYs, so the key itself is embedded and only
/// handed to the engine after it hashes to `ROOT_DS`.
#[derive(Debug, Clone)]
pub struct RootTrustAnchor {
    ds: DsRecord,
    dnskey: DnskeyRecord,
}

impl RootTrustAnchor {
    pub fn load() -> Result<Self, DomainError> {
        let ds = DsRecord::from_presentation(ROOT_DS)?;
        let public_key = STANDARD
            .decode(ROOT_KSK_20326)
            .map_err(|e| DomainError::TrustAnchor(format!("root KSK is not base64: {}", e)))?;
        let dnskey = DnskeyRecord::new(ROOT_KSK_FLAGS, ROOT_KSK_ALGORITHM, public_key)?;

        Self::verified(ds, dnskey)
    }

    pub fn verified(ds: DsRecord, dnskey: DnskeyRecord) -> Result<Self, DomainError> {
        if !ds.matches(&dnskey)? {
            return Err(DomainError::TrustAnchor(format!(
                "{} does not match {}",
                dnskey, ds
            )));
        }

        debug!(key_tag = ds.key_tag, owner = %ds.owner, "Root trust anchor verified");
        Ok(Self { ds, dnskey })
    }

    pub fn ds(&self) -> &DsRecord {
        &self.ds
    }

    pub fn dnskey(&self) -> &DnskeyRecord {
        &self.dnskey
    }

    pub fn key_tag(&self) -> u16 {
        self.ds.key_tag
    }

    /// Anchor set holding only this key, ready for the resolver builder.
    pub fn to_trust_anchors(&self) -> Arc<TrustAnchors> {
        let key = PublicKeyBuf::new(
            self.dnskey.public_key.clone(),
            Algorithm::from_u8(self.dnskey.algorithm),
        );

        let mut anchors = TrustAnchors::empty();
        anchors.insert(&key);
        Arc::new(anchors)
    }
}
