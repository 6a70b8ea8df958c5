#![allow(dead_code)]

mod mock_resolver;

pub use mock_resolver::MockDnsResolver;

pub fn records(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn hostnames(values: &[&str]) -> Vec<String> {
    records(values)
}

pub fn openalias_record(address: &str) -> String {
    format!(
        "oa1:xmr recipient_address={}; recipient_name=Donations;",
        address
    )
}
