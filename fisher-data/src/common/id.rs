use std::{
    borrow::Borrow,
    fmt,
    fmt::Display,
};

use serde::{
    Deserialize,
    Deserializer,
    Serialize,
    Serializer,
};

/// An ID for a catalog resource.
///
/// IDs are normalized on construction: letters are lowercased, spaces and hyphens become
/// underscores, and any other punctuation is dropped. This allows display names such as
/// `"Bubble Shot"` to be used wherever the ID `bubble_shot` is expected.
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Id(String);

impl Id {
    /// The normalized ID string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn normalize(value: &str) -> String {
        value
            .trim()
            .chars()
            .filter_map(|c| match c {
                'a'..='z' | '0'..='9' | '_' => Some(c),
                'A'..='Z' => Some(c.to_ascii_lowercase()),
                ' ' | '-' => Some('_'),
                _ => None,
            })
            .collect()
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Self(Self::normalize(value))
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for Id {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Id {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Self::from(String::deserialize(deserializer)?))
    }
}
