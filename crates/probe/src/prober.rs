//! DNS and HTTP check implementations.

use std::net::IpAddr;
use std::time::Duration;

use tokio::net::lookup_host;
use tokio::time::timeout;

/// Hostname resolved by the DNS check.
pub const DEFAULT_DNS_HOST: &str = "www.google.com";

/// Low-payload endpoint fetched by the HTTP check.
pub const DEFAULT_HTTP_URL: &str = "http://clients3.google.com/generate_204";

/// Hard timeout applied to each check individually.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// Errors produced by the reachability checks.
///
/// Lookup failure and lookup timeout are distinct kinds so the tooltip can
/// tell "no such host" apart from "resolver unreachable".
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("DNS lookup failed: {0}")]
    DnsLookup(String),

    #[error("DNS lookup timed out after {0:?}")]
    DnsTimeout(Duration),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("HTTP request timed out after {0:?}")]
    HttpTimeout(Duration),

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

/// Configuration for the two reachability checks.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Hostname resolved by the DNS check.
    pub dns_host: String,
    /// URL fetched by the HTTP check. The response body is discarded.
    pub http_url: String,
    /// Per-check timeout.
    pub timeout: Duration,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            dns_host: DEFAULT_DNS_HOST.into(),
            http_url: DEFAULT_HTTP_URL.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Capability contract the control loop polls against.
///
/// The production implementation is [`Prober`]; loop tests drive scripted
/// fakes instead of the network.
#[async_trait::async_trait]
pub trait ReachabilityProbe: Send + Sync + 'static {
    /// Resolves the configured hostname, bounded by the timeout.
    async fn check_dns(&self) -> Result<Vec<IpAddr>, ProbeError>;

    /// Fetches the configured URL, bounded by the timeout.
    async fn check_http(&self) -> Result<(), ProbeError>;
}

/// Performs the real DNS and HTTP checks.
pub struct Prober {
    config: ProbeConfig,
    client: reqwest::Client,
}

impl Prober {
    /// Builds a prober with a timeout-bounded HTTP client.
    pub fn new(config: ProbeConfig) -> Result<Self, ProbeError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProbeError::Client(e.to_string()))?;

        Ok(Self { config, client })
    }
}

#[async_trait::async_trait]
impl ReachabilityProbe for Prober {
    async fn check_dns(&self) -> Result<Vec<IpAddr>, ProbeError> {
        // lookup_host wants a socket address pair; the port is irrelevant.
        let query = (self.config.dns_host.as_str(), 0u16);

        match timeout(self.config.timeout, lookup_host(query)).await {
            Ok(Ok(addrs)) => {
                let addrs: Vec<IpAddr> = addrs.map(|a| a.ip()).collect();
                tracing::debug!(
                    host = %self.config.dns_host,
                    count = addrs.len(),
                    "DNS probe successful"
                );
                Ok(addrs)
            }
            Ok(Err(e)) => {
                tracing::warn!(host = %self.config.dns_host, error = %e, "DNS probe failed");
                Err(ProbeError::DnsLookup(e.to_string()))
            }
            Err(_) => {
                tracing::warn!(
                    host = %self.config.dns_host,
                    timeout_ms = self.config.timeout.as_millis(),
                    "DNS probe timed out"
                );
                Err(ProbeError::DnsTimeout(self.config.timeout))
            }
        }
    }

    async fn check_http(&self) -> Result<(), ProbeError> {
        let request = self.client.get(&self.config.http_url);

        match timeout(self.config.timeout, request.send()).await {
            Ok(Ok(response)) => {
                // The status line is not inspected; reaching the endpoint is
                // enough, and the body is never read.
                tracing::debug!(
                    url = %self.config.http_url,
                    status = response.status().as_u16(),
                    "HTTP probe successful"
                );
                Ok(())
            }
            Ok(Err(e)) if e.is_timeout() => {
                tracing::warn!(url = %self.config.http_url, "HTTP probe timed out");
                Err(ProbeError::HttpTimeout(self.config.timeout))
            }
            Ok(Err(e)) => {
                tracing::warn!(url = %self.config.http_url, error = %e, "HTTP probe failed");
                Err(ProbeError::Http(e.to_string()))
            }
            Err(_) => {
                tracing::warn!(
                    url = %self.config.http_url,
                    timeout_ms = self.config.timeout.as_millis(),
                    "HTTP probe timed out"
                );
                Err(ProbeError::HttpTimeout(self.config.timeout))
            }
        }
    }
}
