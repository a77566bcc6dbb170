use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?(?P<hex>[0-9A-Fa-f]{6}|[0-9A-Fa-f]{3})$").unwrap());

/// Player chrome color, as configured in the embed options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl PlayerColor {
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Accepts `54bbff`, `#54bbff` and the short `#5bf` form.
    pub fn from_hex(s: &str) -> Option<Self> {
        let caps = HEX_RE.captures(s.trim())?;
        let hex = caps.name("hex")?.as_str();
        let full = if hex.len() == 3 {
            hex.chars().flat_map(|c| [c, c]).collect::<String>()
        } else {
            hex.to_string()
        };
        let value = u32::from_str_radix(&full, 16).ok()?;
        Some(Self::rgb(
            (value >> 16) as u8,
            (value >> 8) as u8,
            value as u8,
        ))
    }
}

impl Default for PlayerColor {
    fn default() -> Self {
        Self::rgb(0x54, 0xbb, 0xff)
    }
}

impl fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl Serialize for PlayerColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
