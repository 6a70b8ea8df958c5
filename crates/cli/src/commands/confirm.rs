use aliasdns_application::ports::AddressConfirmation;
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Asks on the terminal which candidate to use.
pub struct StdinConfirmation {
    assume_yes: bool,
}

impl StdinConfirmation {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }

    fn prompt(candidates: &[String]) -> io::Result<String> {
        let mut stderr = io::stderr().lock();
        for (i, candidate) in candidates.iter().enumerate() {
            writeln!(stderr, "  [{}] {}", i + 1, candidate)?;
        }
        write!(
            stderr,
            "Use which address? [1-{}, empty to cancel]: ",
            candidates.len()
        )?;
        stderr.flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line)
    }
}

/// Map the user's answer to a candidate; anything unusable declines.
fn select(candidates: &[String], answer: &str) -> String {
    answer
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|idx| candidates.get(idx))
        .cloned()
        .unwrap_or_default()
}

impl AddressConfirmation for StdinConfirmation {
    fn confirm(&self, identifier: &str, candidates: &[String], dnssec_valid: bool) -> String {
        if !dnssec_valid {
            warn!(identifier = %identifier, "DNSSEC validation failed, the address may be spoofed");
            eprintln!(
                "WARNING: DNSSEC validation was unsuccessful for {}, this address may not be correct",
                identifier
            );
        }

        if self.assume_yes {
            if candidates.len() == 1 && dnssec_valid {
                return candidates[0].clone();
            }
            eprintln!("Not accepting automatically: confirmation required");
            return String::new();
        }

        eprintln!("{} resolves to:", identifier);
        match Self::prompt(candidates) {
            Ok(answer) => select(candidates, &answer),
            Err(e) => {
                warn!(error = %e, "Failed to read confirmation");
                String::new()
            }
        }
    }
}
