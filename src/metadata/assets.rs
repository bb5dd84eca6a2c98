use std::fmt;

/// A named JSON document and where to fetch it from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    pub name: String,
    pub url: String,
}

impl AssetEntry {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.json", self.name)
    }
}

impl fmt::Display for AssetEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" from {}", self.name, self.url)
    }
}
