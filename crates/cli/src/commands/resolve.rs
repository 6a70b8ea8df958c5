use aliasdns_domain::RecordType;

use crate::di::Services;

pub fn run(services: &Services, name: &str, record_type: RecordType) -> anyhow::Result<()> {
    let result = services.resolver.resolve(name, record_type);

    for record in result.records() {
        println!("{}", record);
    }
    println!(
        "; {} {} records={} dnssec_available={} dnssec_valid={}",
        name,
        record_type,
        result.records().len(),
        result.dnssec_available(),
        result.dnssec_valid()
    );

    Ok(())
}
