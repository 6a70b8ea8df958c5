use std::fmt;
use std::net::Ipv4Addr;

use crate::DomainError;

/// Environment variable selecting the forwarders the validating resolver uses.
pub const DNS_PUBLIC_ENV: &str = "DNS_PUBLIC";

/// Independent public DNSSEC-capable resolvers used for `DNS_PUBLIC=tcp`.
pub const DEFAULT_DNS_PUBLIC_ADDR: [Ipv4Addr; 5] = [
    Ipv4Addr::new(194, 150, 168, 168), // CCC (Germany)
    Ipv4Addr::new(80, 67, 169, 40),    // FDN (France)
    Ipv4Addr::new(89, 233, 43, 71),    // censurfridns.dk (Denmark)
    Ipv4Addr::new(109, 69, 8, 51),     // puntCAT (Spain)
    Ipv4Addr::new(193, 58, 251, 251),  // SkyDNS (Russia)
];

const TCP_TOKEN: &str = "tcp";
const TCP_SCHEME: &str = "tcp://";

/// Parsed value of the `DNS_PUBLIC` override.
///
/// Two forms are accepted: the bare token `tcp` (built-in public resolver
/// list) and `tcp://A.B.C.D` (a single IPv4 forwarder). Both are queried
/// over TCP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForwarderOverride {
    PublicDefaults,
    Single(Ipv4Addr),
}

impl ForwarderOverride {
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        if value == TCP_TOKEN {
            return Ok(Self::PublicDefaults);
        }

        let host = value.strip_prefix(TCP_SCHEME).ok_or_else(|| {
            DomainError::InvalidForwarder(format!("unrecognized DNS_PUBLIC value: {}", value))
        })?;

        Self::parse_ipv4(host).map(Self::Single)
    }

    fn parse_ipv4(host: &str) -> Result<Ipv4Addr, DomainError> {
        let octets: Vec<&str> = host.split('.').collect();
        if octets.len() != 4 {
            return Err(DomainError::InvalidForwarder(format!(
                "expected four octets in {}",
                host
            )));
        }

        let mut parsed = [0u8; 4];
        for (slot, octet) in parsed.iter_mut().zip(&octets) {
            if octet.is_empty() || !octet.bytes().all(|b| b.is_ascii_digit()) {
                return Err(DomainError::InvalidForwarder(format!(
                    "non-numeric octet in {}",
                    host
                )));
            }
            *slot = octet.parse::<u8>().map_err(|_| {
                DomainError::InvalidForwarder(format!("octet out of range in {}", host))
            })?;
        }

        Ok(Ipv4Addr::from(parsed))
    }

    pub fn addresses(&self) -> Vec<Ipv4Addr> {
        match self {
            Self::PublicDefaults => DEFAULT_DNS_PUBLIC_ADDR.to_vec(),
            Self::Single(addr) => vec![*addr],
        }
    }
}

impl fmt::Display for ForwarderOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PublicDefaults => write!(f, "{}", TCP_TOKEN),
            Self::Single(addr) => write!(f, "{}{}", TCP_SCHEME, addr),
        }
    }
}
