use crate::error::{CrawlError, Result};
use url::Url;

/// Reduce a URL to the canonical key used to decide whether two links point
/// at the same page.
///
/// The key is host + path, lowercased, with the scheme dropped, a leading
/// `www.` host label dropped, and one trailing `/` dropped from a non-empty
/// path. Query strings and fragments stay in the key, so
/// `example.com/p?a=1` and `example.com/p?a=2` are two different pages.
///
/// Normalizing an already-normalized key returns it unchanged.
pub fn normalize(raw: &str) -> Result<String> {
    let url = parse_lenient(raw)?;

    let host = url.host_str().ok_or_else(|| CrawlError::MalformedUrl {
        url: raw.to_string(),
        reason: "URL has no host".to_string(),
    })?;
    let host = host.strip_prefix("www.").unwrap_or(host);

    let mut path = url.path();
    if !path.is_empty() && path.ends_with('/') {
        path = &path[..path.len() - 1];
    }

    let mut key = format!("{}{}", host, path);
    if let Some(query) = url.query() {
        key.push('?');
        key.push_str(query);
    }
    if let Some(fragment) = url.fragment() {
        key.push('#');
        key.push_str(fragment);
    }

    Ok(key.to_lowercase())
}

/// Parse a URL, retrying with an `http://` prefix for scheme-less input.
/// Canonical keys have no scheme, so idempotence depends on this retry.
fn parse_lenient(raw: &str) -> Result<Url> {
    match Url::parse(raw) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(&format!("http://{}", raw))
            .map_err(|e| CrawlError::MalformedUrl {
                url: raw.to_string(),
                reason: e.to_string(),
            }),
        Err(e) => Err(CrawlError::MalformedUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        }),
    }
}
