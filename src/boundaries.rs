//! Offset scanning for URL components.
//!
//! Every function here is a pure function of the input string. Nothing is
//! validated: a component that cannot be found yields an empty span placed
//! where that component would be inserted.

use crate::span::Span;
use memchr::{memchr, memchr2, memmem};

/// Index of the first `"://"`, if any.
fn separator_index(url: &str) -> Option<usize> {
    memmem::find(url.as_bytes(), b"://")
}

/// Bare scheme name, e.g. "http" for "<http://example.com/>".
pub fn scheme_span(url: &str) -> Span {
    separator_index(url).map_or(Span::empty_at(0), |i| Span::new(0, i))
}

/// Scheme including its trailing ':', e.g. "http:".
pub fn protocol_span(url: &str) -> Span {
    separator_index(url).map_or(Span::empty_at(0), |i| Span::new(0, i + 1))
}

/// Offset where the authority begins: right after "://", after a leading
/// "//" for scheme-relative input, otherwise 0.
pub fn authority_start(url: &str) -> usize {
    if url.starts_with("//") {
        return 2;
    }
    separator_index(url).map_or(0, |i| i + 3)
}

/// Span of a bracketed IPv6 literal starting at `begin`.
fn bracketed_span(bytes: &[u8], begin: usize) -> Span {
    match memchr(b']', &bytes[begin..]) {
        Some(offset) => Span::new(begin, begin + offset + 1),
        None => Span::new(begin, bytes.len()),
    }
}

/// Hostname without userinfo or port.
///
/// A ':' seen before '@' belongs to the userinfo, so the port flag is reset
/// when '@' is found. IPv6 literals are returned with their brackets.
pub fn hostname_span(url: &str) -> Span {
    let bytes = url.as_bytes();
    let mut begin = authority_start(url);
    let mut end = bytes.len();
    let mut auth = false;
    let mut port = false;

    if bytes.get(begin) == Some(&b'[') {
        return bracketed_span(bytes, begin);
    }

    for (i, &byte) in bytes.iter().enumerate().skip(begin) {
        match byte {
            b'/' => {
                if !port {
                    end = i;
                }
                break;
            }
            b'@' => {
                auth = true;
                port = false;
                begin = i + 1;
                if end < begin {
                    end = bytes.len();
                }
                if bytes.get(begin) == Some(&b'[') {
                    return bracketed_span(bytes, begin);
                }
            }
            b':' => {
                end = i;
                if auth {
                    break;
                }
                port = true;
            }
            _ => {}
        }
    }

    Span::new(begin, end)
}

/// End of the `:port` section that starts at `colon`.
fn port_end(bytes: &[u8], colon: usize) -> usize {
    memchr(b'/', &bytes[colon + 1..]).map_or(bytes.len(), |offset| colon + 1 + offset)
}

/// Hostname plus an optional `:port`.
pub fn host_span(url: &str) -> Span {
    let bytes = url.as_bytes();
    let hostname = hostname_span(url);
    if bytes.get(hostname.end) != Some(&b':') {
        return hostname;
    }
    Span::new(hostname.start, port_end(bytes, hostname.end))
}

/// Port including its leading ':'. Empty at the hostname end when absent.
pub fn port_span(url: &str) -> Span {
    let bytes = url.as_bytes();
    let hostname_end = hostname_span(url).end;
    if bytes.get(hostname_end) != Some(&b':') {
        return Span::empty_at(hostname_end);
    }
    Span::new(hostname_end, port_end(bytes, hostname_end))
}

/// Raw userinfo including the trailing '@', e.g. "user:pass@".
/// Empty just before the hostname when there is none.
pub fn auth_span(url: &str) -> Span {
    let host_start = hostname_span(url).start;
    let has_auth = host_start
        .checked_sub(1)
        .is_some_and(|at| url.as_bytes()[at] == b'@');
    if !has_auth {
        return Span::empty_at(host_start);
    }
    Span::new(authority_start(url).min(host_start), host_start)
}

/// Path from the first '/' after the authority start up to '?' or '#'.
/// Collapses to the end of the string when there is no '/'.
pub fn path_span(url: &str) -> Span {
    let bytes = url.as_bytes();
    let from = authority_start(url);
    let Some(start) = memchr(b'/', &bytes[from..]).map(|offset| from + offset) else {
        return Span::empty_at(bytes.len());
    };
    let end = memchr2(b'?', b'#', &bytes[start + 1..]).map_or(bytes.len(), |offset| start + 1 + offset);
    Span::new(start, end)
}

/// Query from the first '?' up to the fragment, '?' included.
/// Empty at the fragment start when there is no query.
pub fn search_span(url: &str) -> Span {
    let end = hash_start(url);
    match memchr(b'?', &url.as_bytes()[..end]) {
        Some(start) => Span::new(start, end),
        None => Span::empty_at(end),
    }
}

/// Index of the first '#', or the string length.
pub fn hash_start(url: &str) -> usize {
    memchr(b'#', url.as_bytes()).unwrap_or(url.len())
}

/// Hostname text as-is, without percent-decoding.
///
/// This is the extraction callback handed to public-suffix resolvers.
pub fn extract_hostname(url: &str) -> &str {
    hostname_span(url).slice(url)
}
