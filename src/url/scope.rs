use crate::{UrlError, UrlResult};
use url::Url;

/// Decides whether an href found on a page should be crawled
///
/// Rules, applied in order:
/// 1. Reject an absent or empty href
/// 2. Reject a pure fragment link (`#section`)
/// 3. Resolve the href against `base_url` (relative, protocol-relative and
///    absolute forms all resolve); reject it if resolution fails
/// 4. Accept iff the resolved hostname equals `target_domain` exactly
///
/// The scheme is not checked, so `http` and `https` links to the target
/// host are both in scope. Subdomains are not.
///
/// # Examples
///
/// ```
/// use term_ripple::url::is_eligible;
/// use url::Url;
///
/// let base = Url::parse("http://www.nytimes.com").unwrap();
/// assert!(is_eligible(Some("/a/b"), &base, "www.nytimes.com"));
/// assert!(!is_eligible(Some("#section"), &base, "www.nytimes.com"));
/// assert!(!is_eligible(Some("http://other.com/x"), &base, "www.nytimes.com"));
/// ```
pub fn is_eligible(href: Option<&str>, base_url: &Url, target_domain: &str) -> bool {
    let href = match href {
        Some(h) if !h.is_empty() => h,
        _ => return false,
    };

    if href.starts_with('#') {
        return false;
    }

    match base_url.join(href) {
        Ok(resolved) => resolved.host_str() == Some(target_domain),
        Err(e) => {
            tracing::debug!("Ignoring unresolvable href {}: {}", href, e);
            false
        }
    }
}

/// Converts a URL from relative to absolute form
///
/// A URL that already starts with `http://` or `https://` is returned
/// unchanged, so applying this twice gives the same string as applying it
/// once. Anything else is resolved against `base_url`.
///
/// # Examples
///
/// ```
/// use term_ripple::url::to_absolute;
/// use url::Url;
///
/// let base = Url::parse("http://www.nytimes.com").unwrap();
/// assert_eq!(to_absolute("/world", &base).unwrap(), "http://www.nytimes.com/world");
/// assert_eq!(to_absolute("https://www.nytimes.com/x", &base).unwrap(), "https://www.nytimes.com/x");
/// ```
pub fn to_absolute(raw_url: &str, base_url: &Url) -> UrlResult<String> {
    if raw_url.starts_with("http://") || raw_url.starts_with("https://") {
        return Ok(raw_url.to_string());
    }

    base_url
        .join(raw_url)
        .map(|resolved| resolved.to_string())
        .map_err(|e| UrlError::Resolve {
            href: raw_url.to_string(),
            base: base_url.to_string(),
            reason: e.to_string(),
        })
}

/// The fixed scope of one crawl: its base URL and target hostname
#[derive(Debug, Clone)]
pub struct Scope {
    base_url: Url,
    domain: String,
}

impl Scope {
    /// Builds a scope from a base URL string and a target hostname
    ///
    /// The hostname is put through the same host parser as discovered links
    /// (lowercased, internationalized names in punycode), so comparisons in
    /// [`is_eligible`] see both sides in one form.
    pub fn new(base_url: &str, domain: &str) -> UrlResult<Self> {
        let base_url = Url::parse(base_url).map_err(|e| UrlError::Resolve {
            href: base_url.to_string(),
            base: String::new(),
            reason: e.to_string(),
        })?;

        if base_url.host_str().is_none() {
            return Err(UrlError::MissingDomain(base_url.to_string()));
        }

        let domain = Url::parse(&format!("http://{}", domain))
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
            .ok_or_else(|| UrlError::MissingDomain(domain.to_string()))?;

        Ok(Self { base_url, domain })
    }

    /// The URL relative links are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// See [`is_eligible`]
    pub fn is_eligible(&self, href: Option<&str>) -> bool {
        is_eligible(href, &self.base_url, &self.domain)
    }

    /// See [`to_absolute`]
    pub fn to_absolute(&self, raw_url: &str) -> UrlResult<String> {
        to_absolute(raw_url, &self.base_url)
    }
}
