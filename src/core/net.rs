use indexmap::IndexMap;
use reqwest::header::{HeaderMap, USER_AGENT};

use crate::core::wire::{ERROR_CODE_HEADER, ERROR_VALIDATION_HEADER, decode_validation};
use crate::core::{IcError, ImageCharts};

/// Response headers of a single fetch: lower-cased names, values in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseHeaders {
    map: IndexMap<String, Vec<String>>,
}

impl ResponseHeaders {
    pub(crate) fn from_header_map(headers: &HeaderMap) -> Self {
        let mut map: IndexMap<String, Vec<String>> = IndexMap::new();
        for (name, value) in headers {
            let value = String::from_utf8_lossy(value.as_bytes()).trim().to_string();
            map.entry(name.as_str().to_ascii_lowercase())
                .or_default()
                .push(value);
        }
        Self { map }
    }

    /// All values of a header, looked up case-insensitively.
    pub fn get_all(&self, name: &str) -> Option<&[String]> {
        self.map
            .get(&name.to_ascii_lowercase())
            .map(Vec::as_slice)
    }

    /// First value of a header, looked up case-insensitively.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_all(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Iterate over `(name, values)` pairs in arrival order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of distinct header names.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// `true` when the response carried no headers.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

pub(crate) struct Fetched {
    pub(crate) status: u16,
    pub(crate) headers: ResponseHeaders,
    pub(crate) body: Vec<u8>,
}

/// One blocking GET. Any HTTP status is returned as-is; only transport failures are errors.
///
/// Transport errors carry no URL: signed URLs must not reach error messages or logs.
pub(crate) fn get(client: &ImageCharts, url: &str, user_agent: &str) -> Result<Fetched, IcError> {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        endpoint = %client.base_url(),
        timeout_ms = client.timeout().as_millis() as u64,
        user_agent,
        "requesting chart"
    );

    let resp = client
        .http()
        .get(url)
        .timeout(client.timeout())
        .header(USER_AGENT, user_agent)
        .send()
        .map_err(reqwest::Error::without_url)?;

    let status = resp.status().as_u16();
    let headers = ResponseHeaders::from_header_map(resp.headers());
    let body = resp.bytes().map_err(reqwest::Error::without_url)?.to_vec();

    #[cfg(feature = "tracing")]
    tracing::debug!(status, bytes = body.len(), "chart response received");

    Ok(Fetched {
        status,
        headers,
        body,
    })
}

/// Turn a non-2xx response into the matching error.
///
/// Field-level validation details win; anything missing or undecodable falls back to the
/// coarse `x-ic-error-code`.
pub(crate) fn classify_rejection(status: u16, headers: &ResponseHeaders) -> IcError {
    let validation = headers
        .get(ERROR_VALIDATION_HEADER)
        .filter(|raw| !raw.is_empty())
        .and_then(decode_validation);

    let err = match validation {
        Some((message, issues)) => IcError::Validation {
            status,
            message,
            issues,
        },
        None => IcError::Server {
            status,
            code: headers
                .get(ERROR_CODE_HEADER)
                .map_or_else(|| format!("HTTP {status}"), str::to_string),
        },
    };

    #[cfg(feature = "tracing")]
    tracing::warn!(status, error = %err, "chart request rejected");

    err
}
