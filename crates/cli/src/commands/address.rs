use super::confirm::StdinConfirmation;
use crate::di::Services;

pub fn run(services: &Services, identifier: &str, assume_yes: bool) -> anyhow::Result<()> {
    let confirm = StdinConfirmation::new(assume_yes);
    let address = services
        .resolve_address
        .get_account_address_as_str_from_url(identifier, &confirm)?;

    if address.is_empty() {
        anyhow::bail!("no address selected for {}", identifier);
    }

    println!("{}", address);
    Ok(())
}
