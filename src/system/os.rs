use serde::{Deserialize, Serialize};

/// Operating-system family, classified once from the reported OS name.
///
/// Classification is a case-insensitive prefix match; anything that is
/// not recognized is treated as an unspecified Unix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsFamily {
    Windows,
    MacOs,
    Linux,
    FreeBsd,
    Solaris,
    OtherUnix,
}

impl OsFamily {
    pub fn from_os_name(name: &str) -> Self {
        let name = name.trim().to_lowercase();
        if name.starts_with("windows") {
            OsFamily::Windows
        } else if name.starts_with("mac") || name.starts_with("darwin") {
            OsFamily::MacOs
        } else if name.starts_with("linux") {
            OsFamily::Linux
        } else if name.starts_with("freebsd") {
            OsFamily::FreeBsd
        } else if name.starts_with("sunos") || name.starts_with("solaris") {
            OsFamily::Solaris
        } else {
            OsFamily::OtherUnix
        }
    }

    pub fn is_windows(self) -> bool {
        self == OsFamily::Windows
    }

    pub fn is_mac(self) -> bool {
        self == OsFamily::MacOs
    }

    pub fn is_linux(self) -> bool {
        self == OsFamily::Linux
    }

    pub fn is_freebsd(self) -> bool {
        self == OsFamily::FreeBsd
    }

    pub fn is_solaris(self) -> bool {
        self == OsFamily::Solaris
    }

    /// Everything that is not Windows counts as Unix-like.
    pub fn is_unix(self) -> bool {
        !self.is_windows()
    }
}

impl std::fmt::Display for OsFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OsFamily::Windows => "windows",
            OsFamily::MacOs => "macos",
            OsFamily::Linux => "linux",
            OsFamily::FreeBsd => "freebsd",
            OsFamily::Solaris => "solaris",
            OsFamily::OtherUnix => "unix",
        };
        write!(f, "{name}")
    }
}
