use axum::http::Uri;
use reqwest::Url;

const ORIGIN: &str = "http://gateway.internal";

/// Resolves `.`/`..` segments (plain or percent-encoded) the way the
/// upstream URL parser will, so gating and forwarding see the same path.
/// Returns `None` when the target would leave the gateway's origin.
pub fn canonical_url(uri: &Uri) -> Option<Url> {
    let target = uri.path_and_query().map_or("/", |pq| pq.as_str());
    let origin = Url::parse(ORIGIN).ok()?;
    let url = origin.join(target).ok()?;

    (url.origin() == origin.origin()).then_some(url)
}

pub fn path_and_query(url: &Url) -> String {
    match url.query() {
        Some(query) => format!("{}?{query}", url.path()),
        None => url.path().to_string(),
    }
}
