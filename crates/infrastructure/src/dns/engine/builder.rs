use aliasdns_domain::DnsConfig;
use hickory_proto::xfer::Protocol;
use hickory_resolver::config::{NameServerConfig, ResolverConfig, ResolverOpts};
use hickory_resolver::system_conf::read_system_conf;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;
use tracing::{debug, warn};

const DNS_PORT: u16 = 53;

/// Name server configuration with every server on TCP.
///
/// Explicit forwarders win. Without any, the system resolver list is used
/// with its UDP entries dropped.
pub fn tcp_resolver_config(forwarders: &[Ipv4Addr]) -> ResolverConfig {
    if !forwarders.is_empty() {
        let mut config = ResolverConfig::new();
        for addr in forwarders {
            config.add_name_server(NameServerConfig::new(
                SocketAddr::new(IpAddr::V4(*addr), DNS_PORT),
                Protocol::Tcp,
            ));
        }
        debug!(forwarders = forwarders.len(), "Using configured TCP forwarders");
        return config;
    }

    let base = match read_system_conf() {
        Ok((config, _)) => config,
        Err(e) => {
            warn!(error = %e, "Failed to read system resolver configuration, using defaults");
            ResolverConfig::default()
        }
    };

    tcp_only(&base)
}

fn tcp_only(base: &ResolverConfig) -> ResolverConfig {
    let mut config = ResolverConfig::new();
    for ns in base
        .name_servers()
        .iter()
        .filter(|ns| ns.protocol == Protocol::Tcp)
    {
        config.add_name_server(ns.clone());
    }
    config
}

/// Engine options: validation on, timeouts and attempts from config.
pub fn resolver_options(dns: &DnsConfig) -> ResolverOpts {
    let mut opts = ResolverOpts::default();
    opts.validate = true;
    opts.edns0 = true;
    opts.timeout = Duration::from_secs(dns.query_timeout);
    opts.attempts = dns.attempts;
    opts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forwarders_are_tcp_only() {
        let config = tcp_resolver_config(&[Ipv4Addr::new(9, 9, 9, 9), Ipv4Addr::new(1, 1, 1, 1)]);

        assert_eq!(config.name_servers().len(), 2);
        assert!(config
            .name_servers()
            .iter()
            .all(|ns| ns.protocol == Protocol::Tcp));
        assert_eq!(
            config.name_servers()[0].socket_addr,
            "9.9.9.9:53".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_system_fallback_drops_udp() {
        let config = tcp_only(&ResolverConfig::default());

        assert!(!config.name_servers().is_empty());
        assert!(config
            .name_servers()
            .iter()
            .all(|ns| ns.protocol == Protocol::Tcp));
    }

    #[test]
    fn test_options_enable_validation() {
        let dns = DnsConfig {
            query_timeout: 7,
            attempts: 3,
            ..DnsConfig::default()
        };
        let opts = resolver_options(&dns);

        assert!(opts.validate);
        assert_eq!(opts.timeout, Duration::from_secs(7));
        assert_eq!(opts.attempts, 3);
    }
}
