/// Scheme classes that receive special treatment during canonicalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemeType {
    Http,
    Https,
    Ws,
    Wss,
    Ftp,
    Ftps,
    Gopher,
    File,
    #[default]
    Other,
}

impl SchemeType {
    /// `http` and `https`: default-port elision, a synthesized `/` for an
    /// empty path and tolerance for an empty authority.
    pub fn is_http_family(self) -> bool {
        matches!(self, Self::Http | Self::Https)
    }

    /// Schemes that always get an authority, even without `//`.
    pub fn always_has_authority(self) -> bool {
        matches!(
            self,
            Self::Http | Self::Https | Self::Ws | Self::Wss | Self::Ftp | Self::Gopher
        )
    }

    /// Schemes whose hosts are folded to lowercase.
    pub fn lowercases_host(self) -> bool {
        self.always_has_authority() || self == Self::File
    }

    /// Get the default port for this scheme
    pub fn default_port(self) -> Option<u16> {
        match self {
            Self::Http | Self::Ws => Some(80),
            Self::Https | Self::Wss => Some(443),
            Self::Ftp => Some(21),
            Self::Ftps => Some(990),
            Self::Gopher => Some(70),
            Self::File | Self::Other => None,
        }
    }
}
