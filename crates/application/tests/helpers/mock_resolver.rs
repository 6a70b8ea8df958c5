use aliasdns_application::ports::DnsResolver;
use aliasdns_domain::{QueryResult, RecordType};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

/// Answers from a fixed table; unknown names get an empty result.
pub struct MockDnsResolver {
    responses: Arc<RwLock<HashMap<(String, RecordType), QueryResult>>>,
    queried: Arc<RwLock<Vec<String>>>,
    call_count: AtomicUsize,
}

impl MockDnsResolver {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(RwLock::new(HashMap::new())),
            queried: Arc::new(RwLock::new(Vec::new())),
            call_count: AtomicUsize::new(0),
        }
    }

    pub fn set_txt(&self, name: &str, result: QueryResult) {
        self.set_response(name, RecordType::TXT, result);
    }

    pub fn set_response(&self, name: &str, record_type: RecordType, result: QueryResult) {
        self.responses
            .write()
            .unwrap()
            .insert((name.to_string(), record_type), result);
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::Relaxed)
    }

    pub fn queried_names(&self) -> Vec<String> {
        self.queried.read().unwrap().clone()
    }
}

impl Default for MockDnsResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl DnsResolver for MockDnsResolver {
    fn resolve(&self, name: &str, record_type: RecordType) -> QueryResult {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.queried.write().unwrap().push(name.to_string());

        self.responses
            .read()
            .unwrap()
            .get(&(name.to_string(), record_type))
            .cloned()
            .unwrap_or_default()
    }
}
