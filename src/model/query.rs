//! Normalized search query

use std::fmt;

/// A trimmed, non-empty search string
///
/// Only constructible through [`Query::parse`], so holding one means the
/// input already passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// Trim the raw input; `None` when nothing is left
    pub fn parse(raw: &str) -> Option<Query> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Query(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n ")]
    fn test_blank_input_is_rejected(#[case] raw: &str) {
        assert_eq!(Query::parse(raw), None);
    }

    #[test]
    fn test_input_is_trimmed() {
        let query = Query::parse("  arrabiata \n").unwrap();
        assert_eq!(query.as_str(), "arrabiata");
    }

    #[test]
    fn test_inner_whitespace_is_kept() {
        let query = Query::parse(" chicken  handi ").unwrap();
        assert_eq!(query.to_string(), "chicken  handi");
    }
}
