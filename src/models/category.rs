//! Expense category enumeration
//!
//! A fixed, closed set of six categories constrains user input. Derived
//! views never assume all six occur in the data; they operate over whatever
//! categories are actually present.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six fixed expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Living,
    Food,
    Transport,
    Fun,
    Education,
    Savings,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 6] = [
        Category::Living,
        Category::Food,
        Category::Transport,
        Category::Fun,
        Category::Education,
        Category::Savings,
    ];

    /// The lowercase wire/storage form
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Living => "living",
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Fun => "fun",
            Self::Education => "education",
            Self::Savings => "savings",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // f.pad keeps width/alignment flags working in table layouts
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "living" => Ok(Self::Living),
            "food" => Ok(Self::Food),
            "transport" => Ok(Self::Transport),
            "fun" => Ok(Self::Fun),
            "education" => Ok(Self::Education),
            "savings" => Ok(Self::Savings),
            _ => Err(CategoryParseError::Unknown(s.to_string())),
        }
    }
}

/// Error type for category parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryParseError {
    Unknown(String),
}

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryParseError::Unknown(s) => write!(
                f,
                "Unknown category '{}' (expected one of: living, food, transport, fun, education, savings)",
                s
            ),
        }
    }
}

impl std::error::Error for CategoryParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_all() {
        for cat in Category::ALL {
            assert_eq!(cat.as_str().parse::<Category>().unwrap(), cat);
        }
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("FOOD".parse::<Category>().unwrap(), Category::Food);
        assert_eq!(" Transport ".parse::<Category>().unwrap(), Category::Transport);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "rent".parse::<Category>().unwrap_err();
        assert!(err.to_string().contains("Unknown category 'rent'"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Category::Savings.to_string(), "savings");
    }
}
