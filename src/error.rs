/// Errors reported by the fallible corners of the crate.
///
/// Span scanning and component editing never fail; only percent-decoding
/// and component-name lookup do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A '%' not followed by two hex digits
    MalformedEscape { offset: usize },
    /// Percent escapes decode to bytes that are not UTF-8
    InvalidUtf8,
    /// Name does not match any URL component
    UnknownComponent,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MalformedEscape { offset } => {
                write!(f, "Malformed percent escape at offset {offset}")
            }
            Self::InvalidUtf8 => f.write_str("Percent-decoded bytes are not valid UTF-8"),
            Self::UnknownComponent => f.write_str("Unknown URL component"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type for decoding and lookup operations
pub type Result<T> = core::result::Result<T, Error>;
