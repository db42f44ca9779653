use crate::boundaries::extract_hostname;

/// Source of public suffixes (e.g. a parsed Public Suffix List).
///
/// Implementations receive a bare hostname and return the suffix portion
/// of it, such as "co.uk" for "www.example.co.uk".
pub trait PublicSuffix {
    fn public_suffix<'h>(&self, hostname: &'h str) -> Option<&'h str>;
}

impl<T: PublicSuffix + ?Sized> PublicSuffix for &T {
    fn public_suffix<'h>(&self, hostname: &'h str) -> Option<&'h str> {
        (**self).public_suffix(hostname)
    }
}

/// Hostname extraction callback: URL in, hostname text out.
pub type ExtractHostname = for<'u> fn(&'u str) -> &'u str;

/// Hostname and domain classification for URLs.
///
/// Owns its suffix source and the callback used to pull a hostname out of a
/// URL, so each consumer is handed its own resolver.
#[derive(Debug, Clone)]
pub struct DomainResolver<S> {
    suffixes: S,
    extract: ExtractHostname,
}

impl<S: PublicSuffix> DomainResolver<S> {
    /// Resolver using [`extract_hostname`] as the extraction callback.
    pub fn new(suffixes: S) -> Self {
        Self::with_extractor(suffixes, extract_hostname)
    }

    pub fn with_extractor(suffixes: S, extract: ExtractHostname) -> Self {
        Self { suffixes, extract }
    }

    pub fn hostname<'u>(&self, url: &'u str) -> &'u str {
        (self.extract)(url)
    }

    /// Public suffix of the URL's hostname, if the source knows one.
    pub fn public_suffix<'u>(&self, url: &'u str) -> Option<&'u str> {
        self.split(url).map(|(_, suffix)| suffix)
    }

    /// One label plus the public suffix, e.g. "example.co.uk".
    pub fn registrable_domain<'u>(&self, url: &'u str) -> Option<&'u str> {
        let hostname = self.hostname(url);
        let (rest, _) = self.split(url)?;
        let label = rest.rsplit('.').next().unwrap_or(rest);
        if label.is_empty() {
            return None;
        }
        Some(&hostname[rest.len() - label.len()..])
    }

    /// Hostname with its public suffix removed, e.g. "www.example" for
    /// "www.example.co.uk". Used to match `example.*` host patterns.
    /// Returns the whole hostname when no suffix is known.
    pub fn hostname_without_suffix<'u>(&self, url: &'u str) -> &'u str {
        self.split(url)
            .map_or_else(|| self.hostname(url), |(rest, _)| rest)
    }

    /// Split the hostname into the labels before the suffix and the suffix.
    /// The suffix must be a proper dot-separated tail of the hostname.
    fn split<'u>(&self, url: &'u str) -> Option<(&'u str, &'u str)> {
        let hostname = self.hostname(url);
        let suffix = self.suffixes.public_suffix(hostname)?;
        if suffix.is_empty() || suffix.len() >= hostname.len() || !hostname.ends_with(suffix) {
            return None;
        }
        let rest = hostname.len() - suffix.len() - 1;
        if hostname.as_bytes()[rest] != b'.' {
            return None;
        }
        Some((&hostname[..rest], &hostname[rest + 1..]))
    }
}
