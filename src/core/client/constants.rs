//! Centralized defaults for the API endpoint and UA.

/// Client identifier sent as the User-Agent prefix (`<client-id>/<version>`).
pub(crate) const USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION")
);

pub(crate) const DEFAULT_PROTOCOL: &str = "https";

pub(crate) const DEFAULT_HOST: &str = "image-charts.com";

pub(crate) const DEFAULT_PORT: u16 = 443;

/// Chart rendering endpoint path.
pub(crate) const DEFAULT_PATHNAME: &str = "/chart";

/// Overall request timeout, in milliseconds.
pub(crate) const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Redirect hops followed before the request fails.
pub(crate) const MAX_REDIRECTS: usize = 10;
