//! spesen-admin: operator tooling for the banking-details codec
//!
//! Commands:
//!   check-key            - validate the configured secret without touching data
//!   encrypt [<value>]    - seal a single value into an envelope (stdin if omitted)
//!   decrypt <envelope>   - open a single envelope (support/migration use only)
//!
//! The secret is resolved in order: SPESEN_BANKING_SECRET environment
//! variable, the config file's [crypto] section, interactive prompt.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use secrecy::{ExposeSecret, SecretString};

use spesen_core::SpesenConfig;
use spesen_crypto::SecretCodec;

#[derive(Parser, Debug)]
#[command(
    name = "spesen-admin",
    version,
    about = "Spesen-Tool banking-details administration",
    long_about = "spesen-admin: verify key material and seal/open individual \
                  banking-details envelopes for support and migration work"
)]
struct Cli {
    /// Path to spesen.toml configuration file
    #[arg(
        long,
        short = 'c',
        env = "SPESEN_CONFIG",
        default_value = "/etc/spesen/config.toml"
    )]
    config: PathBuf,

    /// Base64 key material (prefer the environment over the flag)
    #[arg(long, env = "SPESEN_BANKING_SECRET", hide_env_values = true)]
    secret: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate the configured secret without touching any data
    #[command(name = "check-key")]
    CheckKey,

    /// Seal a single value into a base64 envelope
    ///
    /// Reads the value from stdin when no argument is given, so secrets can
    /// be piped in instead of ending up in shell history.
    Encrypt {
        /// Value to seal (stdin if omitted)
        value: Option<String>,
    },

    /// Open a single envelope and print the plaintext
    ///
    /// Support/migration use only; inside the application, decryption happens
    /// solely behind the owner check of the banking-details service.
    Decrypt {
        /// Base64 envelope as stored in the database
        envelope: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;
    init_logging(&config.service.log_level, &config.service.log_format);

    let secret = resolve_secret(cli.secret, &config)?;
    let codec =
        SecretCodec::from_base64_secret(secret.expose_secret()).context("deriving banking key")?;

    match cli.command {
        Commands::CheckKey => {
            // Construction above already validated decode + length
            println!("key material OK");
        }
        Commands::Encrypt { value } => {
            let plaintext = match value {
                Some(v) => v,
                None => read_stdin()?,
            };
            println!("{}", codec.encrypt(&plaintext)?);
        }
        Commands::Decrypt { envelope } => {
            let plaintext = codec.decrypt(&envelope).context("opening envelope")?;
            tracing::info!("envelope opened via spesen-admin");
            println!("{plaintext}");
        }
    }

    Ok(())
}

/// Load the config file, falling back to defaults when it does not exist.
fn load_config(path: &Path) -> Result<SpesenConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "config file not found, using defaults");
        return Ok(SpesenConfig::default());
    }

    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file: {}", path.display()))?;
    SpesenConfig::parse(&toml_str)
        .with_context(|| format!("parsing config file: {}", path.display()))
}

/// Secret resolution order: CLI/env, config file, interactive prompt.
fn resolve_secret(cli_secret: Option<String>, config: &SpesenConfig) -> Result<SecretString> {
    if let Some(secret) = cli_secret {
        return Ok(SecretString::from(secret));
    }
    if let Some(secret) = &config.crypto.banking_secret {
        return Ok(SecretString::from(secret.expose_secret().to_owned()));
    }

    let entered = rpassword::prompt_password("banking secret (base64): ")
        .context("reading secret from terminal")?;
    Ok(SecretString::from(entered))
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("reading value from stdin")?;
    // Strip one trailing newline from `echo`-style pipes
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(buf)
}

fn init_logging(level: &str, format: &str) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .init();
    }
}
