use crate::core::ResponseHeaders;

/// A successfully fetched chart: raw body plus the response metadata of that one call.
#[derive(Debug, Clone)]
pub struct ChartImage {
    pub(crate) status: u16,
    pub(crate) headers: ResponseHeaders,
    pub(crate) bytes: Vec<u8>,
}

impl ChartImage {
    /// HTTP status, always in `200..300`.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Response headers captured during this fetch.
    pub fn headers(&self) -> &ResponseHeaders {
        &self.headers
    }

    /// `Content-Type` as reported by the server, if any.
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get("content-type")
    }

    /// Raw response body.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the image, returning the raw body.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
