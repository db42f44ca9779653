use crate::error::Error;

/// Named URL component, as addressed by rules that read or rewrite one
/// part of a URL by name (e.g. a `{hostname}` placeholder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Href,
    Protocol,
    Username,
    Password,
    Origin,
    Host,
    Hostname,
    Port,
    Pathname,
    Search,
    Hash,
}

impl Component {
    /// Every component, in URL order after `Href`.
    pub const ALL: [Self; 11] = [
        Self::Href,
        Self::Protocol,
        Self::Username,
        Self::Password,
        Self::Origin,
        Self::Host,
        Self::Hostname,
        Self::Port,
        Self::Pathname,
        Self::Search,
        Self::Hash,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Href => "href",
            Self::Protocol => "protocol",
            Self::Username => "username",
            Self::Password => "password",
            Self::Origin => "origin",
            Self::Host => "host",
            Self::Hostname => "hostname",
            Self::Port => "port",
            Self::Pathname => "pathname",
            Self::Search => "search",
            Self::Hash => "hash",
        }
    }

    /// `origin` is derived from protocol and host and cannot be set.
    pub fn is_writable(self) -> bool {
        self != Self::Origin
    }
}

impl core::str::FromStr for Component {
    type Err = Error;

    /// Filter by length and first byte before the full comparison.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let bytes = name.as_bytes();
        let component = match (bytes.len(), bytes.first()) {
            (4, Some(b'h')) if bytes == b"href" => Self::Href,
            (4, Some(b'h')) if bytes == b"host" => Self::Host,
            (4, Some(b'h')) if bytes == b"hash" => Self::Hash,
            (4, Some(b'p')) if bytes == b"port" => Self::Port,
            (6, Some(b'o')) if bytes == b"origin" => Self::Origin,
            (6, Some(b's')) if bytes == b"search" => Self::Search,
            (8, Some(b'p')) if bytes == b"protocol" => Self::Protocol,
            (8, Some(b'u')) if bytes == b"username" => Self::Username,
            (8, Some(b'p')) if bytes == b"password" => Self::Password,
            (8, Some(b'h')) if bytes == b"hostname" => Self::Hostname,
            (8, Some(b'p')) if bytes == b"pathname" => Self::Pathname,
            _ => return Err(Error::UnknownComponent),
        };
        Ok(component)
    }
}

impl core::fmt::Display for Component {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_names_round_trip() {
        for component in Component::ALL {
            assert_eq!(component.as_str().parse::<Component>(), Ok(component));
        }
    }

    #[test]
    fn test_unknown_component() {
        assert_eq!("query".parse::<Component>(), Err(Error::UnknownComponent));
        assert_eq!("".parse::<Component>(), Err(Error::UnknownComponent));
        assert_eq!("Host".parse::<Component>(), Err(Error::UnknownComponent));
    }

    #[test]
    fn test_origin_is_read_only() {
        let writable = Component::ALL.iter().filter(|c| c.is_writable()).count();
        assert_eq!(writable, 10);
        assert!(!Component::Origin.is_writable());
    }
}
