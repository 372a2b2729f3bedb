use serde::{Deserialize, Serialize};

/// Sentinel category value that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

/// Identifier assigned by the remote catalog service.
/// Numeric ids from the service are kept in their decimal text form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<u64> for ProductId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

/// Category selection for the catalog view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "{}", ALL_CATEGORIES),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(s: &str) -> Self {
        if s == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(s.to_string())
        }
    }
}
