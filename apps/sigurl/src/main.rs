//! SigUrl CLI - issue and check expiring signed URLs.
//!
//! # Usage
//!
//! ```text
//! SIGURL_SECRET_KEY=... sigurl sign 'https://host/file?token=0123456789abcdef' 30
//! sigurl verify --keys new-key,old-key 'https://host/file?token=...&expires=...&signature=...'
//! sigurl token
//! sigurl key
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SIGURL_SECRET_KEY` | *(required for `sign` unless `--key`)* | Signing key |
//! | `SIGURL_KEYS` | *(required for `verify` unless `--keys`)* | Comma-separated accepted keys |
//! | `SIGURL_MAX_ACTIVE_HOURS` | `168` | Maximum validity window |
//! | `SIGURL_ALGORITHM` | `HMAC-SHA256` | Signature algorithm |
//! | `SIGURL_TOKEN_PARAM` | `token` | Token parameter name |
//! | `SIGURL_EXPIRES_PARAM` | `expires` | Expiry parameter name |
//! | `SIGURL_SIGNATURE_PARAM` | `signature` | Signature parameter name |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use sigurl_auth::generate::{generate_key, generate_token};
use sigurl_auth::{StaticKeyProvider, UrlSigner, UrlVerifier, ValidationOutcome};
use sigurl_core::{Clock, SigUrlConfig, SystemClock};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Validity used by `sign` when no duration is given.
const DEFAULT_VALIDITY_MINUTES: i64 = 60;

#[derive(Debug, Parser)]
#[command(name = "sigurl", version, about = "Issue and check expiring signed URLs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Sign a URL that carries a token parameter
    Sign {
        /// URL to sign
        url: String,
        /// Validity in minutes from now
        #[arg(default_value_t = DEFAULT_VALIDITY_MINUTES, allow_negative_numbers = true)]
        minutes: i64,
        /// Signing key
        #[arg(long, env = "SIGURL_SECRET_KEY", hide_env_values = true)]
        key: String,
    },
    /// Check a signed URL and print its token
    Verify {
        /// Signed URL to check
        url: String,
        /// Comma-separated accepted keys
        #[arg(long, env = "SIGURL_KEYS", hide_env_values = true)]
        keys: String,
    },
    /// Print a fresh random token
    Token,
    /// Print a fresh random secret key
    Key,
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Self::Sign { .. } => "sign",
            Self::Verify { .. } => "verify",
            Self::Token => "token",
            Self::Key => "key",
        }
    }
}

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
/// Logs go to stderr so stdout only carries command output.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn run(command: Command, config: SigUrlConfig) -> Result<()> {
    match command {
        Command::Sign { url, minutes, key } => {
            let expires = SystemClock.now_plus_minutes(minutes);
            let signed = UrlSigner::new(config)
                .sign(&url, expires, &key)
                .context("failed to sign URL")?;
            info!(expires, "signed URL issued");
            println!("{signed}");
        }
        Command::Verify { url, keys } => {
            let provider = StaticKeyProvider::from_comma_separated(&keys);
            match UrlVerifier::new(config).validate_with_provider(&url, &provider)? {
                ValidationOutcome::Valid(token) => println!("{token}"),
                ValidationOutcome::Invalid => bail!("signed URL is invalid"),
            }
        }
        Command::Token => println!("{}", generate_token()),
        Command::Key => println!("{}", generate_key()),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = SigUrlConfig::from_env().context("invalid configuration")?;
    init_tracing(&config.log_level)?;

    debug!(command = cli.command.name(), algorithm = %config.algorithm, "running command");
    run(cli.command, config)
}
