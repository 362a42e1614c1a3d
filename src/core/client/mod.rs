//! Public client surface + builder.
//! Defaults (endpoint, timeout, UA) live in `constants`.

mod constants;

use crate::chart::ChartRequest;
use crate::core::IcError;
use constants::{
    DEFAULT_HOST, DEFAULT_PATHNAME, DEFAULT_PORT, DEFAULT_PROTOCOL, DEFAULT_TIMEOUT_MS,
    MAX_REDIRECTS, USER_AGENT,
};
use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use std::fmt;
use std::time::Duration;
use url::Url;

/// Connection settings for the Image-Charts API.
///
/// Settings are fixed once built. Charts are started with [`ImageCharts::chart`] and every
/// chart built from the same client shares its settings and connection pool.
#[derive(Clone)]
pub struct ImageCharts {
    http: Client,
    protocol: String,
    host: String,
    port: u16,
    pathname: String,
    timeout: Duration,
    secret: Option<String>,
    user_agent: String,
}

impl Default for ImageCharts {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl fmt::Debug for ImageCharts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageCharts")
            .field("protocol", &self.protocol)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("pathname", &self.pathname)
            .field("timeout", &self.timeout)
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl ImageCharts {
    /// Create a new builder.
    pub fn builder() -> ImageChartsBuilder {
        ImageChartsBuilder::default()
    }

    /// Start an empty chart bound to these settings.
    pub fn chart(&self) -> ChartRequest {
        ChartRequest::new(self)
    }

    /// URL scheme, `https` by default.
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// API host, `image-charts.com` by default.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// API port, `443` by default.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Endpoint path, `/chart` by default.
    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    /// Overall request timeout, 5 seconds by default.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Whether a signing secret is configured. Empty secrets count as absent.
    pub fn has_secret(&self) -> bool {
        self.secret().is_some()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn secret(&self) -> Option<&str> {
        self.secret.as_deref().filter(|s| !s.is_empty())
    }

    pub(crate) fn user_agent_prefix(&self) -> &str {
        &self.user_agent
    }

    /// `<protocol>://<host>:<port><pathname>`, without query.
    pub(crate) fn base_url(&self) -> String {
        format!(
            "{}://{}:{}{}",
            self.protocol, self.host, self.port, self.pathname
        )
    }
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`ImageCharts`]; every setting is optional.
#[derive(Default)]
pub struct ImageChartsBuilder {
    protocol: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    pathname: Option<String>,
    timeout: Option<Duration>,
    secret: Option<String>,
    user_agent: Option<String>,
    http: Option<Client>,
}

impl ImageChartsBuilder {
    /// Override the URL scheme (e.g. `http` for an on-premise deployment).
    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }

    /// Override the API host.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Override the API port.
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Override the endpoint path.
    pub fn pathname(mut self, pathname: impl Into<String>) -> Self {
        self.pathname = Some(pathname.into());
        self
    }

    /// Take scheme, host, port and path from a parsed URL in one go.
    ///
    /// Any query string or fragment on `url` is ignored.
    pub fn endpoint(mut self, url: &Url) -> Self {
        self.protocol = Some(url.scheme().to_string());
        if let Some(host) = url.host_str() {
            self.host = Some(host.to_string());
        }
        if let Some(port) = url.port_or_known_default() {
            self.port = Some(port);
        }
        self.pathname = Some(url.path().to_string());
        self
    }

    /// Set the overall request timeout. Default: 5 seconds.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Enterprise secret used to sign requests carrying an `icac` account id.
    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Override the `<client-id>/<version>` User-Agent prefix.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Use a preconfigured blocking client (proxies, custom TLS roots, ...).
    ///
    /// Timeout and User-Agent are still applied per request; redirect handling is left to
    /// the provided client.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http = Some(client);
        self
    }

    /// Resolve defaults and create the HTTP client.
    pub fn build(self) -> Result<ImageCharts, IcError> {
        let http = match self.http {
            Some(client) => client,
            None => Client::builder()
                .redirect(Policy::limited(MAX_REDIRECTS))
                .build()?,
        };

        Ok(ImageCharts {
            http,
            protocol: self.protocol.unwrap_or_else(|| DEFAULT_PROTOCOL.to_string()),
            host: self.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: self.port.unwrap_or(DEFAULT_PORT),
            pathname: self.pathname.unwrap_or_else(|| DEFAULT_PATHNAME.to_string()),
            timeout: self
                .timeout
                .unwrap_or(Duration::from_millis(DEFAULT_TIMEOUT_MS)),
            secret: self.secret,
            user_agent: self.user_agent.unwrap_or_else(|| USER_AGENT.to_string()),
        })
    }
}
