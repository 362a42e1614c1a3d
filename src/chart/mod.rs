mod image;
mod output;
mod params;
pub mod sign;

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use url::form_urlencoded;

use crate::core::net;
use crate::core::{IcError, ImageCharts};
use output::{assumed_mime, data_uri};
use sign::{ACCOUNT_PARAM, SIGNATURE_PARAM, sign};

pub use image::ChartImage;
pub use params::PARAMETERS;

/// An immutable, chainable chart description.
///
/// Every setter returns a new `ChartRequest` and leaves the receiver untouched, so a
/// partially configured chart can be kept around and reused as a template:
///
/// ```no_run
/// use image_charts::ImageCharts;
///
/// let pie = ImageCharts::default().chart().cht("p").chs("300x300");
/// let small = pie.chd("t:1,2,3");
/// let large = pie.chd("t:10,20,30,40");
///
/// assert_eq!(pie.get("chd"), None);
/// # let _ = (small, large);
/// ```
///
/// Values are forwarded to the API verbatim; nothing is validated locally.
#[derive(Clone, Debug)]
pub struct ChartRequest {
    client: ImageCharts,
    query: IndexMap<String, String>,
}

impl Default for ChartRequest {
    fn default() -> Self {
        Self::new(&ImageCharts::default())
    }
}

impl ChartRequest {
    /// Creates an empty chart bound to the given connection settings.
    pub fn new(client: &ImageCharts) -> Self {
        Self {
            client: client.clone(),
            query: IndexMap::new(),
        }
    }

    /// Connection settings this chart will be sent with.
    pub fn client(&self) -> &ImageCharts {
        &self.client
    }

    /// Returns a copy of this chart with `key` set to `value`.
    ///
    /// A key that is already present keeps its position in the query string.
    pub fn param(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut query = self.query.clone();
        query.insert(key.into(), value.into());
        Self {
            client: self.client.clone(),
            query,
        }
    }

    /// Accumulated parameters, in first-insertion order.
    pub fn query(&self) -> &IndexMap<String, String> {
        &self.query
    }

    /// Value of a single parameter.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    /// The form-urlencoded query string, without signature.
    pub fn query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query.iter())
            .finish()
    }

    /// Full API URL, signed when both an `icac` account id and a secret are set.
    ///
    /// Never performs I/O.
    pub fn to_url(&self) -> String {
        let query = self.query_string();
        let mut url = format!("{}?{}", self.client.base_url(), query);

        if let Some(secret) = self.client.secret()
            && self.query.contains_key(ACCOUNT_PARAM)
        {
            url.push('&');
            url.push_str(SIGNATURE_PARAM);
            url.push('=');
            url.push_str(&sign(&query, secret));
        }

        url
    }

    /// User-Agent sent with the request: `<client-id>/<version>`, plus ` (<icac>)` when an
    /// account id is set.
    pub fn user_agent(&self) -> String {
        let prefix = self.client.user_agent_prefix();
        match self.get(ACCOUNT_PARAM).filter(|account| !account.is_empty()) {
            Some(account) => format!("{prefix} ({account})"),
            None => prefix.to_string(),
        }
    }

    /// Performs the blocking request and returns the image with its response headers.
    ///
    /// # Errors
    ///
    /// - [`IcError::Transport`] if no response could be obtained (including timeouts).
    /// - [`IcError::Validation`] if the API rejected a specific parameter.
    /// - [`IcError::Server`] for any other non-2xx response.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(params = self.query.len())))]
    pub fn fetch(&self) -> Result<ChartImage, IcError> {
        let fetched = net::get(&self.client, &self.to_url(), &self.user_agent())?;

        if !(200..300).contains(&fetched.status) {
            return Err(net::classify_rejection(fetched.status, &fetched.headers));
        }

        Ok(ChartImage {
            status: fetched.status,
            headers: fetched.headers,
            bytes: fetched.body,
        })
    }

    /// Performs the blocking request and returns the raw image bytes.
    ///
    /// # Errors
    ///
    /// Same as [`ChartRequest::fetch`].
    pub fn to_binary(&self) -> Result<Vec<u8>, IcError> {
        Ok(self.fetch()?.into_bytes())
    }

    /// Performs the blocking request and writes the image to `path`.
    ///
    /// # Errors
    ///
    /// Same as [`ChartRequest::fetch`], plus [`IcError::Io`] if the file cannot be written.
    /// Nothing is written when the fetch fails.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, path), err))]
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<(), IcError> {
        let bytes = self.to_binary()?;
        fs::write(path, bytes)?;
        Ok(())
    }

    /// Performs the blocking request and returns the image as a base64 data URI.
    ///
    /// The mime type is `image/gif` when `chan` is set and `image/png` otherwise,
    /// regardless of what the server actually returned.
    ///
    /// # Errors
    ///
    /// Same as [`ChartRequest::fetch`].
    pub fn to_data_uri(&self) -> Result<String, IcError> {
        let bytes = self.to_binary()?;
        Ok(data_uri(assumed_mime(&self.query), &bytes))
    }
}
