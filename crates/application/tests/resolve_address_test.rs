mod helpers;

use aliasdns_application::use_cases::ResolveAddressUseCase;
use aliasdns_domain::{DomainError, QueryResult};
use helpers::{openalias_record, MockDnsResolver};
use std::cell::Cell;
use std::sync::Arc;

fn standard_address(c: char) -> String {
    c.to_string().repeat(95)
}

fn integrated_address(c: char) -> String {
    c.to_string().repeat(106)
}

// ── addresses_from_url ─────────────────────────────────────────────────────

#[test]
fn test_identifier_is_converted_before_lookup() {
    let resolver = Arc::new(MockDnsResolver::new());
    let use_case = ResolveAddressUseCase::new(resolver.clone());

    use_case.addresses_from_url("alice@example.com");

    assert_eq!(resolver.queried_names(), vec!["alice.example.com"]);
}

#[test]
fn test_candidates_in_resolver_order() {
    let resolver = Arc::new(MockDnsResolver::new());
    resolver.set_txt(
        "donate.example.org",
        QueryResult::secure(vec![
            openalias_record(&integrated_address('8')),
            "v=spf1 -all".to_string(),
            openalias_record(&standard_address('4')),
            openalias_record("tooshort"),
        ]),
    );
    let use_case = ResolveAddressUseCase::new(resolver);

    let candidates = use_case.addresses_from_url("donate@example.org");

    assert_eq!(
        candidates.addresses,
        vec![integrated_address('8'), standard_address('4')]
    );
    assert!(candidates.dnssec_valid);
}

#[test]
fn test_insecure_answer_not_marked_valid() {
    let resolver = Arc::new(MockDnsResolver::new());
    resolver.set_txt(
        "donate.example.org",
        QueryResult::insecure(vec![openalias_record(&standard_address('4'))]),
    );
    let use_case = ResolveAddressUseCase::new(resolver);

    let candidates = use_case.addresses_from_url("donate.example.org");

    assert_eq!(candidates.addresses.len(), 1);
    assert!(!candidates.dnssec_valid);
}

#[test]
fn test_duplicates_are_kept() {
    let resolver = Arc::new(MockDnsResolver::new());
    let record = openalias_record(&standard_address('4'));
    resolver.set_txt(
        "donate.example.org",
        QueryResult::secure(vec![record.clone(), record]),
    );
    let use_case = ResolveAddressUseCase::new(resolver);

    assert_eq!(
        use_case.addresses_from_url("donate@example.org").addresses.len(),
        2
    );
}

// ── get_account_address_as_str_from_url ────────────────────────────────────

#[test]
fn test_zero_candidates_skips_confirmation() {
    let resolver = Arc::new(MockDnsResolver::new());
    let use_case = ResolveAddressUseCase::new(resolver);
    let calls = Cell::new(0);

    let confirm = |_id: &str, _candidates: &[String], _valid: bool| -> String {
        calls.set(calls.get() + 1);
        "unexpected".to_string()
    };
    let result = use_case.get_account_address_as_str_from_url("nobody@example.com", &confirm);

    assert_eq!(
        result,
        Err(DomainError::NoAddressFound("nobody@example.com".to_string()))
    );
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_confirmation_receives_candidates_and_flag() {
    let resolver = Arc::new(MockDnsResolver::new());
    resolver.set_txt(
        "donate.example.org",
        QueryResult::from_verdict(vec![openalias_record(&standard_address('4'))], false, true),
    );
    let use_case = ResolveAddressUseCase::new(resolver);

    let confirm = |id: &str, candidates: &[String], valid: bool| -> String {
        assert_eq!(id, "donate@example.org");
        assert_eq!(candidates, &[standard_address('4')][..]);
        assert!(!valid);
        candidates[0].clone()
    };
    let result = use_case.get_account_address_as_str_from_url("donate@example.org", &confirm);

    assert_eq!(result, Ok(standard_address('4')));
}

#[test]
fn test_declined_confirmation_returned_verbatim() {
    let resolver = Arc::new(MockDnsResolver::new());
    resolver.set_txt(
        "donate.example.org",
        QueryResult::secure(vec![openalias_record(&standard_address('4'))]),
    );
    let use_case = ResolveAddressUseCase::new(resolver);

    let decline = |_id: &str, _candidates: &[String], _valid: bool| -> String { String::new() };
    let result = use_case.get_account_address_as_str_from_url("donate@example.org", &decline);

    assert_eq!(result, Ok(String::new()));
}
