use secrecy::SecretString;
use serde::Deserialize;

/// Top-level configuration for the banking-details subsystem (loaded from
/// spesen.toml).
///
/// Deserialize-only: the `[crypto]` section holds secret material that must
/// never be re-serialized or logged.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SpesenConfig {
    pub service: ServiceConfig,
    pub crypto: CryptoConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Log level (default: info)
    pub log_level: String,
    /// Log format: "json" or "text"
    pub log_format: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            log_format: "json".into(),
        }
    }
}

/// Banking-details encryption configuration
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CryptoConfig {
    /// Base64-encoded key material, >= 32 bytes decoded. Usually injected via
    /// the SPESEN_BANKING_SECRET environment variable instead of the file.
    pub banking_secret: Option<SecretString>,
}

impl SpesenConfig {
    pub fn parse(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }
}
