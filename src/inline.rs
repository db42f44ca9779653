use crate::compat::Cow;
use crate::error::Result;
use crate::percent::percent_decode;
use memchr::{memchr, memchr2, memmem};

/// Extract an absolute `http`/`https` URL embedded in another URL, such as
/// the target of a redirect or tracking link.
///
/// The first "http" after offset 0 starts the candidate. When it is a query
/// value (preceded by '='), it ends at the next '&' or ';'. When its "://"
/// is percent-encoded, a literal '?' belongs to the outer URL and ends it.
/// The candidate is then percent-decoded.
///
/// Returns `Ok(None)` when nothing shaped like `http(s)://` is found.
///
/// # Errors
///
/// Returns an error when the candidate contains a malformed percent escape
/// or decodes to invalid UTF-8. Callers usually treat this like `None`.
///
/// # Examples
///
/// ```
/// use spliceurl::parse_inline_url;
///
/// let url = "http://t.co/r?u=http%3A%2F%2Fexample.com%2Fx?y=1";
/// assert_eq!(parse_inline_url(url).unwrap().as_deref(), Some("http://example.com/x"));
/// assert_eq!(parse_inline_url("http://example.com/").unwrap(), None);
/// ```
pub fn parse_inline_url(url: &str) -> Result<Option<Cow<'_, str>>> {
    let bytes = url.as_bytes();
    let Some(start) = bytes
        .get(1..)
        .and_then(|rest| memmem::find(rest, b"http"))
        .map(|offset| offset + 1)
    else {
        return Ok(None);
    };

    let mut inline = &url[start..];
    if bytes[start - 1] == b'=' {
        if let Some(end) = memchr2(b'&', b';', inline.as_bytes()) {
            inline = &inline[..end];
        }
    }

    let separator = if inline.as_bytes().get(4) == Some(&b's') { 5 } else { 4 };
    let encoded_separator = inline
        .as_bytes()
        .get(separator..)
        .is_some_and(|rest| rest.starts_with(b"%3"));
    if encoded_separator {
        if let Some(end) = memchr(b'?', inline.as_bytes()) {
            inline = &inline[..end];
        }
    }

    let decoded = match percent_decode(inline) {
        Ok(decoded) => decoded,
        Err(err) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(%err, candidate = inline, "inline url failed to decode");
            return Err(err);
        }
    };

    let has_separator = decoded
        .as_bytes()
        .get(separator..)
        .is_some_and(|rest| rest.starts_with(b"://"));
    if !has_separator {
        #[cfg(feature = "tracing")]
        tracing::trace!(candidate = inline, "inline url candidate rejected");
        return Ok(None);
    }

    Ok(Some(decoded))
}

/// Like [`parse_inline_url`], but a decoding error counts as "not found".
pub fn find_inline_url(url: &str) -> Option<Cow<'_, str>> {
    parse_inline_url(url).ok().flatten()
}
