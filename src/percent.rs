use crate::compat::Cow;
use crate::error::{Error, Result};
use memchr::memchr;

/// Strict percent-decoding of a URI component.
///
/// Every '%' must start a two-digit hex escape, and the decoded bytes must
/// be UTF-8. Input without escapes is returned borrowed.
///
/// # Errors
///
/// [`Error::MalformedEscape`] for a bad escape, [`Error::InvalidUtf8`] when
/// the decoded bytes are not UTF-8.
pub fn percent_decode(input: &str) -> Result<Cow<'_, str>> {
    let bytes = input.as_bytes();
    let mut from = 0;
    while let Some(offset) = memchr(b'%', &bytes[from..]) {
        let at = from + offset;
        let well_formed = bytes
            .get(at + 1..at + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !well_formed {
            return Err(Error::MalformedEscape { offset: at });
        }
        from = at + 3;
    }

    percent_encoding::percent_decode_str(input)
        .decode_utf8()
        .map_err(|_| Error::InvalidUtf8)
}
