//! Service entry point.
//!
//! Loads configuration from the environment, applies command line overrides,
//! and hands off to [`shorturl::server::run`].

use anyhow::Result;
use clap::Parser;
use shorturl::config::{Config, DnsCheck, StoreBackend};
use shorturl::server;
use tracing_subscriber::EnvFilter;

/// URL shortening service.
///
/// Every flag overrides the matching environment variable.
#[derive(Parser)]
#[command(name = "shorturl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bind address, e.g. 0.0.0.0:3000 (overrides LISTEN)
    #[arg(short, long)]
    listen: Option<String>,

    /// Store backend: memory or redis (overrides STORE_BACKEND)
    #[arg(short, long)]
    store_backend: Option<StoreBackend>,

    /// Redis connection string (overrides REDIS_URL)
    #[arg(long)]
    redis_url: Option<String>,

    /// Host resolution gate: enabled or disabled (overrides DNS_CHECK)
    #[arg(long)]
    dns_check: Option<DnsCheck>,

    /// Directory served as the site root (overrides PUBLIC_DIR)
    #[arg(long)]
    public_dir: Option<String>,
}

impl Cli {
    /// Applies flag overrides on top of the environment configuration.
    fn apply(self, config: &mut Config) {
        if let Some(listen) = self.listen {
            config.listen_addr = listen;
        }
        if let Some(store_backend) = self.store_backend {
            config.store_backend = store_backend;
        }
        if let Some(redis_url) = self.redis_url {
            config.redis_url = Some(redis_url);
        }
        if let Some(dns_check) = self.dns_check {
            config.dns_check = dns_check;
        }
        if let Some(public_dir) = self.public_dir {
            config.public_dir = public_dir;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    cli.apply(&mut config);
    config.validate()?;

    init_tracing(&config);
    config.print_summary();

    server::run(config).await
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` takes priority when set; the configured log level is the
/// fallback. `LOG_FORMAT=json` switches to newline-delimited JSON output.
fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
