//! Region support for the Battle.net API
//!
//! A region selects both the OAuth token host and the Game Data API host.
//! China uses dedicated gateway hosts; every other region follows a uniform
//! `{region}.`-prefixed template.

use std::fmt;

/// Supported Battle.net regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// United States
    US,
    /// Europe
    EU,
    /// Korea
    KR,
    /// Taiwan
    TW,
    /// China
    CN,
}

impl Region {
    /// Get all available regions
    pub fn all() -> &'static [Region] {
        &[Region::US, Region::EU, Region::KR, Region::TW, Region::CN]
    }

    /// Convert region to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::US => "us",
            Region::EU => "eu",
            Region::KR => "kr",
            Region::TW => "tw",
            Region::CN => "cn",
        }
    }

    /// Parse region from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "us" => Some(Region::US),
            "eu" => Some(Region::EU),
            "kr" => Some(Region::KR),
            "tw" => Some(Region::TW),
            "cn" => Some(Region::CN),
            _ => None,
        }
    }

    /// OAuth token endpoint URL for this region
    ///
    /// China authenticates against `www.battlenet.com.cn`; all other regions
    /// use `{region}.battle.net`.
    pub fn token_url(&self) -> String {
        match self {
            Region::CN => "https://www.battlenet.com.cn/oauth/token".to_string(),
            _ => format!("https://{self}.battle.net/oauth/token"),
        }
    }

    /// Game Data API base URL for this region, with a trailing slash
    ///
    /// China is served through `gateway.battlenet.com.cn`; all other regions
    /// use `{region}.api.blizzard.com`.
    pub fn api_url(&self) -> String {
        match self {
            Region::CN => "https://gateway.battlenet.com.cn/".to_string(),
            _ => format!("https://{self}.api.blizzard.com/"),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Region {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::parse(s).ok_or_else(|| crate::Error::InvalidRegion(s.to_string()))
    }
}

/// Namespace classes partitioning the Game Data catalog
///
/// Most namespaces are region-scoped: the wire form is the class name
/// suffixed with the active region, e.g. `static-eu`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// Game data that changes only with client patches
    Static,
    /// Game data that changes at server runtime (realms, auctions, token)
    Dynamic,
    /// Player-owned data (characters, collections)
    Profile,
}

impl Namespace {
    /// Convert namespace class to its lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::Static => "static",
            Namespace::Dynamic => "dynamic",
            Namespace::Profile => "profile",
        }
    }

    /// Region-scoped wire form of this namespace, e.g. `dynamic-us`
    pub fn for_region(&self, region: Region) -> String {
        format!("{self}-{region}")
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
