//! Configuration management.
//!
//! Configuration is stored as TOML:
//! - Linux: `~/.config/netstatus/netstatus.toml`
//! - Windows: `%APPDATA%/netstatus/netstatus.toml`
//!
//! The probed hostname and URL were fixed constants in earlier builds; they
//! are exposed here so users can point the monitor at their own endpoints.

use std::path::PathBuf;
use std::time::Duration;

use netstatus_monitor::DEFAULT_POLL_INTERVAL;
use netstatus_probe::{DEFAULT_DNS_HOST, DEFAULT_HTTP_URL, DEFAULT_TIMEOUT, ProbeConfig};
use serde::{Deserialize, Serialize};

/// Monitor configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Hostname resolved by the DNS check.
    #[serde(default = "default_dns_host")]
    pub dns_host: String,

    /// URL fetched by the HTTP check.
    #[serde(default = "default_http_url")]
    pub http_url: String,

    /// Per-check timeout in seconds.
    #[serde(default = "default_probe_timeout_secs")]
    pub probe_timeout_secs: u64,

    /// Seconds between probe cycles.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    /// Play a sound on connectivity transitions.
    #[serde(default = "default_true")]
    pub sounds_enabled: bool,

    /// Push a desktop notification on connectivity transitions.
    #[serde(default = "default_true")]
    pub notifications_enabled: bool,

    /// External WAV player program.
    #[serde(default = "default_audio_player")]
    pub audio_player: String,
}

fn default_dns_host() -> String {
    DEFAULT_DNS_HOST.into()
}

fn default_http_url() -> String {
    DEFAULT_HTTP_URL.into()
}

fn default_probe_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

fn default_poll_interval_secs() -> u64 {
    DEFAULT_POLL_INTERVAL.as_secs()
}

fn default_true() -> bool {
    true
}

fn default_audio_player() -> String {
    "aplay".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dns_host: default_dns_host(),
            http_url: default_http_url(),
            probe_timeout_secs: default_probe_timeout_secs(),
            poll_interval_secs: default_poll_interval_secs(),
            sounds_enabled: true,
            notifications_enabled: true,
            audio_player: default_audio_player(),
        }
    }
}

impl Config {
    /// Loads configuration from disk, or creates a default if not found.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Saves the current configuration to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = config_path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        tracing::debug!(path = %path.display(), "configuration saved");
        Ok(())
    }

    /// Probe settings derived from this configuration.
    pub fn probe_config(&self) -> ProbeConfig {
        ProbeConfig {
            dns_host: self.dns_host.clone(),
            http_url: self.http_url.clone(),
            timeout: Duration::from_secs(self.probe_timeout_secs),
        }
    }

    /// Time between probe cycles.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}

/// Returns the platform-specific configuration file path.
fn config_path() -> anyhow::Result<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        Ok(PathBuf::from(home)
            .join(".config")
            .join("netstatus")
            .join("netstatus.toml"))
    }

    #[cfg(target_os = "windows")]
    {
        let appdata =
            std::env::var("APPDATA").unwrap_or_else(|_| "C:\\Users\\Default\\AppData".into());
        Ok(PathBuf::from(appdata).join("netstatus").join("netstatus.toml"))
    }

    #[cfg(not(any(target_os = "linux", target_os = "windows")))]
    {
        Ok(PathBuf::from("/tmp/netstatus/netstatus.toml"))
    }
}
