//! Lenient, offset-based URL component editing.
//!
//! URLs are kept as plain strings. Each component is located by scanning for
//! its delimiters and replaced by splicing, so arbitrary or malformed input
//! (scheme-relative URLs, IPv6 literals, several '?' characters, nested
//! URLs) can be read and edited without disturbing the rest of the string.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

mod boundaries;
mod component;
mod error;
mod inline;
mod percent;
mod query_parser;
mod span;
mod suffix;
mod trim;
mod url_parser;

// Public API
pub use boundaries::{
    auth_span, authority_start, extract_hostname, hash_start, host_span, hostname_span, path_span,
    port_span, protocol_span, scheme_span, search_span,
};
pub use component::Component;
pub use error::{Error, Result};
pub use inline::{find_inline_url, parse_inline_url};
pub use percent::percent_decode;
pub use query_parser::QueryParser;
pub use span::Span;
pub use suffix::{DomainResolver, ExtractHostname, PublicSuffix};
pub use trim::{KeyPattern, trim_query_parameters};
pub use url_parser::UrlParser;
