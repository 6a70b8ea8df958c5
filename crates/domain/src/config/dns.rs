use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Forwarder override in `DNS_PUBLIC` syntax (`tcp` or `tcp://A.B.C.D`).
    /// The environment variable takes precedence over this value.
    #[serde(default)]
    pub dns_public: Option<String>,

    /// Per-query timeout handed to the validating engine, in seconds.
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,

    #[serde(default = "default_attempts")]
    pub attempts: usize,

    /// Size of the worker pool used to query update hostnames in parallel.
    #[serde(default = "default_quorum_workers")]
    pub quorum_workers: usize,

    /// Hostnames publishing the same TXT record set, compared by quorum.
    #[serde(default)]
    pub update_hostnames: Vec<String>,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            dns_public: None,
            query_timeout: default_query_timeout(),
            attempts: default_attempts(),
            quorum_workers: default_quorum_workers(),
            update_hostnames: Vec::new(),
        }
    }
}

fn default_query_timeout() -> u64 {
    5
}

fn default_attempts() -> usize {
    2
}

fn default_quorum_workers() -> usize {
    4
}
