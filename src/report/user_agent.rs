//! User-Agent classification.
//!
//! Maps a raw `User-Agent` header to a coarse browser or client label using
//! ordered, case-insensitive substring rules. Order matters: Edge and Opera
//! advertise `Chrome`, and Chrome advertises `Safari`.

use std::fmt;

use strum_macros::EnumIter as EnumIterMacro;

/// Browser or client family reported by the `user_agent` report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum BrowserFamily {
    Edge,
    Firefox,
    Chrome,
    Safari,
    Opera,
    InternetExplorer,
    Curl,
    Wget,
    Python,
    BotOrCrawler,
    Other,
    Unknown,
}

impl BrowserFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrowserFamily::Edge => "Edge",
            BrowserFamily::Firefox => "Firefox",
            BrowserFamily::Chrome => "Chrome",
            BrowserFamily::Safari => "Safari",
            BrowserFamily::Opera => "Opera",
            BrowserFamily::InternetExplorer => "Internet Explorer",
            BrowserFamily::Curl => "curl",
            BrowserFamily::Wget => "wget",
            BrowserFamily::Python => "Python",
            BrowserFamily::BotOrCrawler => "Bot/Crawler",
            BrowserFamily::Other => "Other",
            BrowserFamily::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for BrowserFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a raw User-Agent string. First matching rule wins.
pub fn classify_user_agent(user_agent: &str) -> BrowserFamily {
    if user_agent.is_empty() || user_agent == "..." {
        return BrowserFamily::Unknown;
    }

    let ua = user_agent.to_lowercase();
    let has = |needle: &str| ua.contains(needle);

    if has("edg/") {
        BrowserFamily::Edge
    } else if has("firefox") {
        BrowserFamily::Firefox
    } else if has("chrome") {
        BrowserFamily::Chrome
    } else if has("safari") {
        // "chrome" already ruled out above
        BrowserFamily::Safari
    } else if has("opera") || has("opr/") {
        BrowserFamily::Opera
    } else if has("trident") || has("msie") {
        BrowserFamily::InternetExplorer
    } else if has("curl") {
        BrowserFamily::Curl
    } else if has("wget") {
        BrowserFamily::Wget
    } else if has("python") {
        BrowserFamily::Python
    } else if has("bot") || has("crawler") {
        BrowserFamily::BotOrCrawler
    } else {
        BrowserFamily::Other
    }
}
