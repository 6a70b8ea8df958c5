/// Caller-supplied decision on which candidate address to use.
///
/// Receives the identifier as the user typed it, the candidates in resolver
/// order and whether the answer was DNSSEC-validated. Returning an empty
/// string declines every candidate.
pub trait AddressConfirmation {
    fn confirm(&self, identifier: &str, candidates: &[String], dnssec_valid: bool) -> String;
}

impl<F> AddressConfirmation for F
where
    F: Fn(&str, &[String], bool) -> String,
{
    fn confirm(&self, identifier: &str, candidates: &[String], dnssec_valid: bool) -> String {
        self(identifier, candidates, dnssec_valid)
    }
}
