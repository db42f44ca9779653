use crate::boundaries::search_span;
use crate::compat::{Cow, String, Vec};
use crate::url_parser::UrlParser;

/// Predicate over a raw (still percent-encoded) query key.
pub trait KeyPattern {
    fn matches_key(&self, key: &str) -> bool;
}

impl<F> KeyPattern for F
where
    F: Fn(&str) -> bool,
{
    fn matches_key(&self, key: &str) -> bool {
        self(key)
    }
}

#[cfg(feature = "regex")]
impl KeyPattern for regex::Regex {
    fn matches_key(&self, key: &str) -> bool {
        self.is_match(key)
    }
}

/// Remove query pairs whose key matches `pattern`, or with `invert`, keep
/// only those.
///
/// Every '?' in the query starts a new page of '&'-joined pairs, so the
/// query of a URL nested as a parameter value is trimmed as well. Pages left
/// empty are dropped. The URL is returned borrowed when nothing matched.
///
/// # Examples
///
/// ```
/// use spliceurl::trim_query_parameters;
///
/// let url = "http://h/?a=1&b=2?c=3&b=4";
/// let trimmed = trim_query_parameters(url, &|key: &str| key == "b", false);
/// assert_eq!(trimmed, "http://h/?a=1?c=3");
///
/// let kept = trim_query_parameters(url, &|key: &str| key == "b", true);
/// assert_eq!(kept, "http://h/?b=2?b=4");
/// ```
pub fn trim_query_parameters<'a, P>(url: &'a str, pattern: &P, invert: bool) -> Cow<'a, str>
where
    P: KeyPattern + ?Sized,
{
    let search = search_span(url).slice(url);
    if search.len() < 2 {
        return Cow::Borrowed(url);
    }

    let mut removed = 0;
    let mut trimmed_search = String::with_capacity(search.len());
    for page in search[1..].split('?') {
        let mut pairs: Vec<&str> = page.split('&').collect();
        let before = pairs.len();
        pairs.retain(|pair| {
            let key = pair.split_once('=').map_or(*pair, |(key, _)| key);
            pattern.matches_key(key) == invert
        });
        removed += before - pairs.len();

        if pairs.is_empty() {
            continue;
        }
        trimmed_search.push('?');
        if removed == 0 {
            trimmed_search.push_str(page);
        } else {
            for (i, pair) in pairs.iter().enumerate() {
                if i > 0 {
                    trimmed_search.push('&');
                }
                trimmed_search.push_str(pair);
            }
        }
    }

    if removed == 0 {
        return Cow::Borrowed(url);
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(removed, url, "trimmed query parameters");

    let mut parser = UrlParser::new(url);
    parser.set_search(&trimmed_search);
    Cow::Owned(parser.into_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_b(key: &str) -> bool {
        key == "b"
    }

    #[test]
    fn test_trim_single_page() {
        assert_eq!(
            trim_query_parameters("http://h/p?a=1&b=2&c=3#f", &is_b, false),
            "http://h/p?a=1&c=3#f"
        );
    }

    #[test]
    fn test_trim_nothing_matched_borrows() {
        let url = "http://h/?a=1&c=3";
        assert!(matches!(
            trim_query_parameters(url, &is_b, false),
            Cow::Borrowed(u) if u == url
        ));
    }

    #[test]
    fn test_trim_short_query_untouched() {
        assert_eq!(trim_query_parameters("http://h/?", &|_: &str| true, false), "http://h/?");
        assert_eq!(trim_query_parameters("http://h/", &|_: &str| true, false), "http://h/");
    }

    #[test]
    fn test_trim_removes_whole_query() {
        assert_eq!(
            trim_query_parameters("http://h/?b=1&b=2#x", &is_b, false),
            "http://h/#x"
        );
    }

    #[test]
    fn test_trim_bare_keys() {
        assert_eq!(trim_query_parameters("http://h/?a&b&c", &is_b, false), "http://h/?a&c");
    }

    #[test]
    fn test_trim_inverted() {
        assert_eq!(
            trim_query_parameters("http://h/?a=1&b=2&c=3", &is_b, true),
            "http://h/?b=2"
        );
    }

    #[test]
    fn test_untrimmed_page_after_trimmed_page() {
        // the second page has no match but is still emitted
        assert_eq!(
            trim_query_parameters("http://h/?a=1&b=2?c=3", &is_b, false),
            "http://h/?a=1?c=3"
        );
        // an untouched first page keeps its exact text
        assert_eq!(
            trim_query_parameters("http://h/?c=3&&d?a=1&b=2", &is_b, false),
            "http://h/?c=3&&d?a=1"
        );
    }
}
