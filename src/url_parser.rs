use crate::boundaries::{
    auth_span, hash_start, host_span, hostname_span, path_span, port_span, protocol_span,
    scheme_span, search_span,
};
use crate::compat::{Cow, String};
use crate::component::Component;
use crate::span::Span;

/// Lenient URL editor over a single owned string.
///
/// No parse result is stored: every getter rescans the current string and
/// every setter recomputes its span immediately before splicing, so an edit
/// to one component can never leave another one stale. Malformed input is
/// never rejected; missing components read as `""` and setters insert the
/// minimal structure they need.
///
/// # Examples
///
/// ```
/// use spliceurl::UrlParser;
///
/// let mut url = UrlParser::new("http://[::1]:8080/x?a=1");
/// assert_eq!(url.hostname(), "[::1]");
/// assert_eq!(url.port(), ":8080");
///
/// url.set_port("9090");
/// url.set_username("bob");
/// assert_eq!(url.href(), "http://bob@[::1]:9090/x?a=1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct UrlParser {
    url: String,
}

impl UrlParser {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn into_string(self) -> String {
        self.url
    }

    /// Replace `span` with the concatenation of `parts`.
    /// The whole string is rebuilt and swapped in.
    fn splice(&mut self, span: Span, parts: &[&str]) {
        let inserted: usize = parts.iter().map(|part| part.len()).sum();
        let mut url = String::with_capacity(self.url.len() - span.len() + inserted);
        url.push_str(&self.url[..span.start]);
        for part in parts {
            url.push_str(part);
        }
        url.push_str(&self.url[span.end..]);
        self.url = url;
    }

    /// Get the full URL
    pub fn href(&self) -> &str {
        &self.url
    }

    pub fn set_href(&mut self, href: &str) {
        self.url.clear();
        self.url.push_str(href);
    }

    /// Bare scheme name (e.g. "https"), or "" for scheme-relative input
    pub fn scheme(&self) -> &str {
        scheme_span(&self.url).slice(&self.url)
    }

    /// Get the protocol (e.g. "https:"), or "" when there is no "://"
    pub fn protocol(&self) -> &str {
        protocol_span(&self.url).slice(&self.url)
    }

    /// Set the protocol, with or without the trailing ':'.
    /// An empty value strips the whole scheme and its ':', so "http://h"
    /// becomes the scheme-relative "//h" rather than "://h".
    pub fn set_protocol(&mut self, protocol: &str) {
        let span = protocol_span(&self.url);
        if protocol.is_empty() || protocol.ends_with(':') {
            self.splice(span, &[protocol]);
        } else {
            self.splice(span, &[protocol, ":"]);
        }
    }

    /// Raw userinfo text including its trailing '@'
    fn auth(&self) -> (Span, &str) {
        let span = auth_span(&self.url);
        (span, span.slice(&self.url))
    }

    /// Get the username
    pub fn username(&self) -> &str {
        let (_, auth) = self.auth();
        match auth.find(':') {
            Some(colon) => &auth[..colon],
            None => auth.strip_suffix('@').unwrap_or(auth),
        }
    }

    /// Set the username, keeping any existing password.
    pub fn set_username(&mut self, username: &str) {
        let (span, auth) = self.auth();
        if auth.is_empty() && username.is_empty() {
            return;
        }
        let password = auth.find(':').map_or("", |colon| &auth[colon..]);
        let mut userinfo = String::with_capacity(username.len() + password.len() + 1);
        userinfo.push_str(username);
        userinfo.push_str(password);
        if !userinfo.ends_with('@') {
            userinfo.push('@');
        }
        self.splice(span, &[&userinfo]);
    }

    /// Get the password
    pub fn password(&self) -> &str {
        let (_, auth) = self.auth();
        match auth.find(':') {
            Some(colon) => {
                let password = &auth[colon + 1..];
                password.strip_suffix('@').unwrap_or(password)
            }
            None => "",
        }
    }

    /// Set the password, keeping the current username.
    /// Does nothing when the URL has no userinfo to attach it to.
    pub fn set_password(&mut self, password: &str) {
        let (span, auth) = self.auth();
        if auth.is_empty() || (password.is_empty() && !auth.contains(':')) {
            return;
        }
        let credentials = auth.strip_suffix('@').unwrap_or(auth);
        let username = credentials.split(':').next().unwrap_or(credentials);
        let mut userinfo = String::with_capacity(username.len() + password.len() + 2);
        userinfo.push_str(username);
        userinfo.push(':');
        userinfo.push_str(password);
        userinfo.push('@');
        self.splice(span, &[&userinfo]);
    }

    /// Get the origin: protocol, "//" and host
    pub fn origin(&self) -> String {
        let protocol = self.protocol();
        let host = self.host();
        let mut origin = String::with_capacity(protocol.len() + host.len() + 2);
        origin.push_str(protocol);
        origin.push_str("//");
        origin.push_str(host);
        origin
    }

    /// Get the host including port if present (e.g. "example.com:8080")
    pub fn host(&self) -> &str {
        host_span(&self.url).slice(&self.url)
    }

    pub fn set_host(&mut self, host: &str) {
        let span = host_span(&self.url);
        self.splice(span, &[host]);
    }

    /// Get the hostname without port
    pub fn hostname(&self) -> &str {
        hostname_span(&self.url).slice(&self.url)
    }

    pub fn set_hostname(&mut self, hostname: &str) {
        let span = hostname_span(&self.url);
        self.splice(span, &[hostname]);
    }

    /// Get the port with its leading ':' (e.g. ":8080"), or ""
    pub fn port(&self) -> &str {
        port_span(&self.url).slice(&self.url)
    }

    /// Set the port, with or without the leading ':'.
    /// Inserts one after the hostname when absent; an empty value removes it.
    pub fn set_port(&mut self, port: &str) {
        let span = port_span(&self.url);
        if port.is_empty() || port.starts_with(':') {
            self.splice(span, &[port]);
        } else {
            self.splice(span, &[":", port]);
        }
    }

    /// Get the pathname, "/" when the URL has no path
    pub fn pathname(&self) -> &str {
        let span = path_span(&self.url);
        if span.is_empty() {
            "/"
        } else {
            span.slice(&self.url)
        }
    }

    /// Set the pathname, adding the leading '/' if missing.
    /// A missing path is appended at the end of the URL; assigning the
    /// implicit "/" to a URL without a path leaves it untouched.
    pub fn set_pathname(&mut self, pathname: &str) {
        let span = path_span(&self.url);
        if span.is_empty() && pathname == "/" {
            return;
        }
        if pathname.starts_with('/') {
            self.splice(span, &[pathname]);
        } else {
            self.splice(span, &["/", pathname]);
        }
    }

    /// Get the search/query string including the leading '?'
    pub fn search(&self) -> &str {
        search_span(&self.url).slice(&self.url)
    }

    /// Set the search string. An empty value removes the query entirely.
    pub fn set_search(&mut self, search: &str) {
        let span = search_span(&self.url);
        if search.is_empty() || search.starts_with('?') {
            self.splice(span, &[search]);
        } else {
            self.splice(span, &["?", search]);
        }
    }

    /// Get the hash/fragment including the leading '#'
    pub fn hash(&self) -> &str {
        &self.url[hash_start(&self.url)..]
    }

    /// Set the hash. An empty value removes the fragment entirely.
    pub fn set_hash(&mut self, hash: &str) {
        let span = Span::new(hash_start(&self.url), self.url.len());
        if hash.is_empty() || hash.starts_with('#') {
            self.splice(span, &[hash]);
        } else {
            self.splice(span, &["#", hash]);
        }
    }

    /// Read a component by name.
    pub fn get(&self, component: Component) -> Cow<'_, str> {
        match component {
            Component::Href => Cow::Borrowed(self.href()),
            Component::Protocol => Cow::Borrowed(self.protocol()),
            Component::Username => Cow::Borrowed(self.username()),
            Component::Password => Cow::Borrowed(self.password()),
            Component::Origin => Cow::Owned(self.origin()),
            Component::Host => Cow::Borrowed(self.host()),
            Component::Hostname => Cow::Borrowed(self.hostname()),
            Component::Port => Cow::Borrowed(self.port()),
            Component::Pathname => Cow::Borrowed(self.pathname()),
            Component::Search => Cow::Borrowed(self.search()),
            Component::Hash => Cow::Borrowed(self.hash()),
        }
    }

    /// Write a component by name. Returns `false` for the read-only `origin`.
    pub fn set(&mut self, component: Component, value: &str) -> bool {
        match component {
            Component::Href => self.set_href(value),
            Component::Protocol => self.set_protocol(value),
            Component::Username => self.set_username(value),
            Component::Password => self.set_password(value),
            Component::Origin => return false,
            Component::Host => self.set_host(value),
            Component::Hostname => self.set_hostname(value),
            Component::Port => self.set_port(value),
            Component::Pathname => self.set_pathname(value),
            Component::Search => self.set_search(value),
            Component::Hash => self.set_hash(value),
        }
        true
    }
}

impl From<String> for UrlParser {
    fn from(url: String) -> Self {
        Self { url }
    }
}

impl From<&str> for UrlParser {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}

impl From<UrlParser> for String {
    fn from(parser: UrlParser) -> Self {
        parser.url
    }
}

impl AsRef<str> for UrlParser {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl core::fmt::Display for UrlParser {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.url)
    }
}
