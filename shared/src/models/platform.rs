use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Contest hosting site. The set is closed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Platform {
    #[serde(rename = "codeforces")]
    Codeforces,
    #[serde(rename = "codechef")]
    Codechef,
    #[serde(rename = "leetcode")]
    Leetcode,
}

impl Platform {
    /// Every platform, in display order.
    pub const ALL: [Platform; 3] = [Platform::Codeforces, Platform::Codechef, Platform::Leetcode];

    /// Wire identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Codeforces => "codeforces",
            Platform::Codechef => "codechef",
            Platform::Leetcode => "leetcode",
        }
    }

    /// Human-facing name
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Codeforces => "Codeforces",
            Platform::Codechef => "CodeChef",
            Platform::Leetcode => "LeetCode",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("unknown platform '{}'", s))
    }
}
