//! Build-time edition selection

use std::fmt;

/// Deployment edition the CLI was built for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edition {
    /// Individual use: free-form key/value credentials
    Single,
    /// Organization use: schema-driven credentials with ownership profiles
    Team,
    /// Any other build value; resolution always fails with `InvalidEdition`
    Unknown(String),
}

impl Edition {
    /// Parse a raw edition value (case-insensitive). Never fails: unrecognised
    /// values are kept as [`Edition::Unknown`] so the resolver can reject them.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "single" => Self::Single,
            "team" => Self::Team,
            _ => Self::Unknown(raw.to_string()),
        }
    }

    /// Edition baked in at compile time through `KEYWARD_EDITION`.
    /// Builds without the variable are single edition.
    #[must_use]
    pub fn from_build() -> Self {
        Self::parse(option_env!("KEYWARD_EDITION").unwrap_or("single"))
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Team => write!(f, "team"),
            Self::Unknown(raw) => write!(f, "{}", raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_editions() {
        assert_eq!(Edition::parse("single"), Edition::Single);
        assert_eq!(Edition::parse("Team"), Edition::Team);
        assert_eq!(Edition::parse(" TEAM "), Edition::Team);
    }

    #[test]
    fn test_parse_unknown_edition() {
        assert_eq!(
            Edition::parse("enterprise"),
            Edition::Unknown("enterprise".to_string())
        );
        assert_eq!(Edition::parse(""), Edition::Unknown(String::new()));
    }

    #[test]
    fn test_display() {
        assert_eq!(Edition::Single.to_string(), "single");
        assert_eq!(Edition::Unknown("x".to_string()).to_string(), "x");
    }
}
