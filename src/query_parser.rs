use crate::compat::String;
use crate::span::Span;
use crate::url_parser::UrlParser;
use memchr::{memchr3, memmem};

/// Key/value editor over the query of a [`UrlParser`].
///
/// The query text is copied out of the URL when the editor is created and
/// only written back on [`flush`](Self::flush) or [`href`](Self::href).
/// Pairs are edited in place inside that text: untouched pairs keep their
/// exact bytes, order, encoding and duplicates.
///
/// The editor holds the URL mutably for the whole edit session, so the URL's
/// own `search` cannot be changed underneath pending pair edits.
///
/// # Examples
///
/// ```
/// use spliceurl::{QueryParser, UrlParser};
///
/// let mut url = UrlParser::new("http://example.com/?id=1&uid=2#top");
/// let mut query = QueryParser::new(&mut url);
/// assert_eq!(query.get("id"), "1");
/// query.set("id", "9");
/// query.set("page", "2");
/// assert_eq!(query.href(), "http://example.com/?id=9&uid=2&page=2#top");
/// ```
#[derive(Debug)]
pub struct QueryParser<'a> {
    url: &'a mut UrlParser,
    query: String,
}

impl<'a> QueryParser<'a> {
    pub fn new(url: &'a mut UrlParser) -> Self {
        let query = String::from(url.search());
        Self { url, query }
    }

    /// Pending query text, including its leading '?' when present
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Check if `key` occurs as a whole key.
    pub fn has(&self, key: &str) -> bool {
        key_start(&self.query, key).is_some()
    }

    /// Value of the first pair named `key`.
    /// Returns "" when the key is absent or has no '='.
    pub fn get(&self, key: &str) -> &str {
        value_span(&self.query, key).map_or("", |span| span.slice(&self.query))
    }

    /// Set the value of the first pair named `key`, appending a new pair if
    /// there is none. Only the value bytes of that pair change.
    pub fn set(&mut self, key: &str, value: &str) {
        let Some(start) = key_start(&self.query, key) else {
            if !(self.query.is_empty() || self.query.ends_with('?') || self.query.ends_with('&')) {
                self.query.push('&');
            }
            self.query.push_str(key);
            self.query.push('=');
            self.query.push_str(value);
            return;
        };

        let key_end = start + key.len();
        if self.query.as_bytes().get(key_end) == Some(&b'=') {
            let span = Span::new(key_end + 1, value_end(&self.query, key_end + 1));
            self.query.replace_range(span.start..span.end, value);
        } else {
            let mut pair = String::with_capacity(value.len() + 1);
            pair.push('=');
            pair.push_str(value);
            self.query.insert_str(key_end, &pair);
        }
    }

    /// Write the pending query back into the URL's search component.
    pub fn flush(&mut self) {
        self.url.set_search(&self.query);
    }

    /// Flush pending edits and get the full URL.
    pub fn href(&mut self) -> &str {
        self.flush();
        self.url.href()
    }
}

/// Start of the first occurrence of `key` bounded by start, '?' or '&' on
/// the left and by '#', '&', '?', '=' or the end on the right, so that "id"
/// never matches inside "uid" or "idx".
fn key_start(query: &str, key: &str) -> Option<usize> {
    if key.is_empty() {
        return None;
    }
    let bytes = query.as_bytes();
    memmem::find_iter(bytes, key.as_bytes()).find(|&start| {
        let left = start
            .checked_sub(1)
            .is_none_or(|before| matches!(bytes[before], b'?' | b'&'));
        let right = bytes
            .get(start + key.len())
            .is_none_or(|&after| matches!(after, b'#' | b'&' | b'?' | b'='));
        left && right
    })
}

/// End of a value starting at `from`: the next '&', '?', '#' or the end.
fn value_end(query: &str, from: usize) -> usize {
    memchr3(b'&', b'?', b'#', &query.as_bytes()[from..]).map_or(query.len(), |offset| from + offset)
}

/// Value of `key`, present only when the key is followed by '='.
fn value_span(query: &str, key: &str) -> Option<Span> {
    let key_end = key_start(query, key)? + key.len();
    if query.as_bytes().get(key_end) != Some(&b'=') {
        return None;
    }
    Some(Span::new(key_end + 1, value_end(query, key_end + 1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_start_exact_match() {
        assert_eq!(key_start("?id=1&uid=2", "id"), Some(1));
        assert_eq!(key_start("?uid=2&id=1", "id"), Some(7));
        assert_eq!(key_start("?idx=1", "id"), None);
        assert_eq!(key_start("id", "id"), Some(0));
        assert_eq!(key_start("a=1?id#f", "id"), Some(4));
        assert_eq!(key_start("?a=1", ""), None);
    }

    #[test]
    fn test_value_span() {
        assert_eq!(value_span("?a=1&b=22", "b"), Some(Span::new(7, 9)));
        assert_eq!(value_span("?a&b=2", "a"), None);
        assert_eq!(value_span("?a=&b=2", "a"), Some(Span::new(3, 3)));
    }

    #[test]
    fn test_value_end() {
        assert_eq!(value_end("a=1&b", 2), 3);
        assert_eq!(value_end("a=1?b", 2), 3);
        assert_eq!(value_end("a=1#b", 2), 3);
        assert_eq!(value_end("a=1", 2), 3);
    }
}
