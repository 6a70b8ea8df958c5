#![allow(dead_code)]

mod fake_engine;

pub use fake_engine::FakeEngine;

/// TXT RDATA with a single character-string.
pub fn txt_rdata(text: &str) -> Vec<u8> {
    let mut rdata = Vec::with_capacity(text.len() + 1);
    rdata.push(text.len() as u8);
    rdata.extend_from_slice(text.as_bytes());
    rdata
}
