use aliasdns_domain::{records_match, QueryResult, QuorumOutcome};
use tracing::{debug, info, warn};

/// Quorum policy over one TXT answer per configured hostname.
///
/// `hostnames[i]` produced `results[i]`. The service does no I/O; the caller
/// fans out the lookups and hands the collected answers in.
pub struct QuorumService;

impl QuorumService {
    /// Decide which record set, if any, is trusted.
    ///
    /// Sources without a secure DNSSEC verdict are cleared first, walking
    /// cyclically from `first_index` (which only changes log order). With a
    /// single configured hostname its set is accepted as is; otherwise the
    /// first pair `i < j` of non-empty matching sets wins.
    pub fn evaluate(
        hostnames: &[String],
        mut results: Vec<QueryResult>,
        first_index: usize,
    ) -> QuorumOutcome {
        let count = results.len();
        if count == 0 {
            return QuorumOutcome::reject();
        }

        for step in 0..count {
            let idx = (first_index + step) % count;
            let result = &mut results[idx];
            let hostname = hostnames.get(idx).map(String::as_str).unwrap_or("");

            if result.is_trusted() {
                continue;
            }

            if !result.dnssec_available() {
                debug!(hostname = %hostname, "DNSSEC not available for TXT source, skipping");
            } else {
                debug!(hostname = %hostname, "DNSSEC validation failed for TXT source, skipping");
            }
            result.clear_records();
        }

        let good_records = results.iter().filter(|r| !r.is_empty()).count();
        if good_records == 0 {
            info!("No valid DNS TXT records found");
            return QuorumOutcome::reject();
        }

        if count == 1 {
            let records = results.swap_remove(0).into_records();
            return QuorumOutcome::accept(records);
        }

        for i in 0..count {
            if results[i].is_empty() {
                continue;
            }
            for j in (i + 1)..count {
                if results[j].is_empty() {
                    continue;
                }
                if records_match(results[i].records(), results[j].records()) {
                    debug!(first = i, second = j, "TXT records matched");
                    let records = results.swap_remove(i).into_records();
                    return QuorumOutcome::accept(records);
                }
            }
        }

        warn!("no two DNS TXT records matched");
        QuorumOutcome::reject()
    }
}
