use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use indexmap::IndexMap;

/// Parameter that turns a chart into an animated gif.
pub(crate) const ANIMATION_PARAM: &str = "chan";

/// Mime type the API is expected to answer with, judged from the request alone.
///
/// The response body is not sniffed: an `.svg` chart is still labelled `image/png`.
pub(crate) fn assumed_mime(query: &IndexMap<String, String>) -> &'static str {
    if query.contains_key(ANIMATION_PARAM) {
        "image/gif"
    } else {
        "image/png"
    }
}

pub(crate) fn data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}
