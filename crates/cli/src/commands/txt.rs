use tracing::info;

use crate::di::Services;

pub fn run(services: &Services, hostnames: &[String]) -> anyhow::Result<()> {
    if hostnames.is_empty() {
        anyhow::bail!("no hostnames given and dns.update_hostnames is empty");
    }

    let outcome = services.load_txt_records.execute(hostnames);
    if !outcome.accepted() {
        anyhow::bail!("TXT records from {} source(s) were not trusted", hostnames.len());
    }

    info!(records = outcome.records().len(), "TXT records accepted");
    for record in outcome.records() {
        println!("{}", record);
    }

    Ok(())
}
