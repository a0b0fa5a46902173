//! Splitting an object URL into the parts that enter the canonical request.

use log::debug;
use url::{Host, Url};

use crate::errors::*;

/// Only `GET` requests are signed.
pub const METHOD: &str = "GET";

/// Hex encoded SHA-256 of the empty body.
pub const EMPTY_STRING_SHA256: &str =
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// Host and path of a URL, as they appear in the canonical request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    pub host: String,
    pub path: String,
}

// -----------------------------------------------------------------------------
/// Split `url` into its host name and path.
///
/// The host carries no scheme, port or user info. The path is taken from the
/// input verbatim, so a URL without a path yields an empty path rather
/// than `/`.
pub fn decompose(url: &str) -> Result<UrlParts> {
    let parsed = Url::parse(url).chain_err(|| ErrorKind::InvalidUrl(url.to_string()))?;
    let host = match parsed.host() {
        Some(Host::Domain(domain)) if !domain.is_empty() => domain.to_string(),
        Some(Host::Ipv4(addr)) => addr.to_string(),
        Some(Host::Ipv6(addr)) => addr.to_string(),
        _ => bail!(ErrorKind::InvalidUrl(url.to_string())),
    };
    let path = raw_path(url.trim(), parsed.scheme())
        .ok_or_else(|| ErrorKind::InvalidUrl(url.to_string()))?
        .to_string();
    debug!("decomposed url: host: {}, path: {:?}", host, path);
    Ok(UrlParts { host, path })
}

// -----------------------------------------------------------------------------
/// Path component of an absolute URL without normalization: everything
/// after the authority, up to the query or fragment.
///
/// Returns `None` when the text is not `scheme://authority...` or holds
/// characters `Url` strips or rewrites, since the path would then disagree
/// with the host `Url` parsed.
fn raw_path<'a>(url: &'a str, scheme: &str) -> Option<&'a str> {
    if url.contains(|c: char| c == '\\' || c.is_ascii_control()) {
        return None;
    }
    let idx = url.find("://")?;
    if !url[..idx].eq_ignore_ascii_case(scheme) {
        return None;
    }
    let rest = &url[idx + 3..];
    let rest = match rest.find(&['?', '#'][..]) {
        Some(idx) => &rest[..idx],
        None => rest,
    };
    match rest.find('/') {
        Some(0) => None,
        Some(idx) => Some(&rest[idx..]),
        None if rest.is_empty() => None,
        None => Some(""),
    }
}

// -----------------------------------------------------------------------------
/// The one request shape this crate signs: a `GET` with no query string and
/// an empty body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub method: &'static str,
    pub host: String,
    pub uri_path: String,
    pub query_string: &'static str,
    pub payload_hash: &'static str,
}

impl RequestDescriptor {
    pub fn get(url: &str) -> Result<Self> {
        let UrlParts { host, path } = decompose(url)?;
        Ok(Self {
            method: METHOD,
            host,
            uri_path: path,
            query_string: "",
            payload_hash: EMPTY_STRING_SHA256,
        })
    }
}
