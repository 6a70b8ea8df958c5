use aliasdns_domain::DomainError;
use std::fmt;

const ZONE_KEY_FLAG: u16 = 0x0100;
const SEP_FLAG: u16 = 0x0001;
const DNSSEC_PROTOCOL: u8 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnskeyRecord {
    pub flags: u16,
    pub protocol: u8,
    pub algorithm: u8,
    pub public_key: Vec<u8>,
}

impl DnskeyRecord {
    pub fn new(flags: u16, algorithm: u8, public_key: Vec<u8>) -> Result<Self, DomainError> {
        if flags & ZONE_KEY_FLAG == 0 {
            return Err(DomainError::TrustAnchor(
                "DNSKEY Zone Key flag not set".into(),
            ));
        }
        if public_key.is_empty() {
            return Err(DomainError::TrustAnchor("DNSKEY has no key material".into()));
        }

        Ok(Self {
            flags,
            protocol: DNSSEC_PROTOCOL,
            algorithm,
            public_key,
        })
    }

    pub fn is_ksk(&self) -> bool {
        self.flags & SEP_FLAG != 0
    }

    /// RDATA in wire form: flags, protocol, algorithm, key.
    pub fn rdata(&self) -> Vec<u8> {
        let mut wire = Vec::with_capacity(4 + self.public_key.len());
        wire.extend_from_slice(&self.flags.to_be_bytes());
        wire.push(self.protocol);
        wire.push(self.algorithm);
        wire.extend_from_slice(&self.public_key);
        wire
    }

    /// RFC 4034 appendix B key tag.
    pub fn calculate_key_tag(&self) -> u16 {
        let mut accumulator: u32 = 0;

        for chunk in self.rdata().chunks(2) {
            if chunk.len() == 2 {
                accumulator += u32::from(u16::from_be_bytes([chunk[0], chunk[1]]));
            } else {
                accumulator += u32::from(chunk[0]) << 8;
            }
        }

        accumulator += accumulator >> 16;
        (accumulator & 0xFFFF) as u16
    }
}

impl fmt::Display for DnskeyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DNSKEY(tag={}, flags={}, algo={}, {})",
            self.calculate_key_tag(),
            self.flags,
            self.algorithm,
            if self.is_ksk() { "KSK" } else { "ZSK" }
        )
    }
}
