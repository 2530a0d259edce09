use anyhow::{Context, Result};
use clap::Parser;
use shorturl::config::Config;
use tracing_subscriber::EnvFilter;

/// URL shortener with in-memory storage.
#[derive(Parser)]
#[command(name = "shorturl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bind address (overrides LISTEN and PORT)
    #[arg(long)]
    listen: Option<String>,

    /// Log format: text or json (overrides LOG_FORMAT)
    #[arg(long)]
    log_format: Option<String>,

    /// Accept URLs without resolving their host (overrides DNS_CHECK)
    #[arg(long)]
    no_dns_check: bool,
}

impl Cli {
    fn apply(self, config: &mut Config) {
        if let Some(listen) = self.listen {
            config.listen_addr = listen;
        }
        if let Some(log_format) = self.log_format {
            config.log_format = log_format;
        }
        if self.no_dns_check {
            config.dns_check = false;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    cli.apply(&mut config);
    config.validate().context("Invalid configuration")?;

    init_tracing(&config)?;
    config.print_summary();

    shorturl::server::run(config).await
}

fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("Invalid RUST_LOG filter '{}'", config.log_level))?;

    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    Ok(())
}
