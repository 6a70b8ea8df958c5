use aliasdns_domain::{CliOverrides, RecordType};
use aliasdns_infrastructure::ResolverContext;
use clap::{Parser, Subcommand};
use tracing::{debug, info};

mod bootstrap;
mod commands;
mod di;

#[derive(Parser)]
#[command(name = "aliasdns")]
#[command(version)]
#[command(about = "aliasdns - DNSSEC-validated OpenAlias and TXT record lookups")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Forwarders: "tcp" for the public list or "tcp://A.B.C.D"
    #[arg(long, value_name = "VALUE", global = true)]
    dns_public: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve one name and show the DNSSEC verdict
    Resolve {
        name: String,

        #[arg(short = 't', long = "type", default_value = "A")]
        record_type: RecordType,
    },

    /// Look up the address published for an OpenAlias identifier
    Address {
        /// user@domain.tld or user.domain.tld
        identifier: String,

        /// Accept a single candidate without prompting
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Fetch TXT records from several hostnames and require agreement
    Txt {
        /// Hostnames to query (defaults to dns.update_hostnames)
        hostnames: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let update_hostnames = match &cli.command {
        Command::Txt { hostnames } => hostnames.clone(),
        _ => Vec::new(),
    };
    let cli_overrides = CliOverrides {
        dns_public: cli.dns_public.clone(),
        log_level: cli.log_level.clone(),
        update_hostnames,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting aliasdns v{}", env!("CARGO_PKG_VERSION"));
    debug!(dns_public = ?config.dns.dns_public, "Configuration loaded");

    let services = di::Services::new(&config)?;

    let result = match cli.command {
        Command::Resolve { name, record_type } => {
            commands::resolve::run(&services, &name, record_type)
        }
        Command::Address { identifier, yes } => {
            commands::address::run(&services, &identifier, yes)
        }
        Command::Txt { .. } => commands::txt::run(&services, &config.dns.update_hostnames),
    };

    drop(services);
    ResolverContext::release_shared();
    result
}
