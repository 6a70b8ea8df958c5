use aliasdns_domain::{DomainError, RecordType};
use aliasdns_infrastructure::dns::{EngineAnswer, ValidatingEngine};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

/// Engine returning canned answers; unknown names fail like NXDOMAIN.
#[derive(Clone, Default)]
pub struct FakeEngine {
    answers: Arc<RwLock<HashMap<(String, RecordType), EngineAnswer>>>,
    query_count: Arc<AtomicUsize>,
}

impl FakeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_answer(&self, name: &str, record_type: RecordType, answer: EngineAnswer) {
        self.answers
            .write()
            .unwrap()
            .insert((name.to_string(), record_type), answer);
    }

    pub fn query_count(&self) -> usize {
        self.query_count.load(Ordering::Relaxed)
    }
}

impl ValidatingEngine for FakeEngine {
    fn query(&self, name: &str, record_type: RecordType) -> Result<EngineAnswer, DomainError> {
        self.query_count.fetch_add(1, Ordering::Relaxed);
        self.answers
            .read()
            .unwrap()
            .get(&(name.to_string(), record_type))
            .cloned()
            .ok_or_else(|| DomainError::LookupFailed(format!("{}: NXDOMAIN", name)))
    }
}
