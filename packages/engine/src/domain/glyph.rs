use std::fmt;

use serde::{Serialize, Serializer};

/// A single lowercase ASCII letter, the identity of a letter body.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Glyph(u8);

impl Glyph {
    /// Accepts `a..=z` and `A..=Z`; uppercase folds to lowercase.
    pub fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self(c.to_ascii_lowercase() as u8))
        } else {
            None
        }
    }

    /// A key name that is exactly one letter, e.g. `"q"` or `"Q"`.
    pub fn from_key(key: &str) -> Option<Self> {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    /// Recover the glyph from a sprite texture path like `images/q.png`.
    ///
    /// The glyph is the last character before `extension`.
    pub fn from_texture(path: &str, extension: &str) -> Option<Self> {
        let stem = path.strip_suffix(extension)?;
        stem.chars().last().and_then(Self::from_char)
    }

    pub fn as_char(self) -> char {
        self.0 as char
    }

    /// Conventional per-glyph asset path: `{prefix}{glyph}{extension}`
    pub fn texture_path(self, prefix: &str, extension: &str) -> String {
        format!("{}{}{}", prefix, self.as_char(), extension)
    }
}

impl fmt::Debug for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Glyph({:?})", self.as_char())
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Serialize for Glyph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.as_char())
    }
}
