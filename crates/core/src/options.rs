//! The fixed option vocabulary.

use std::fmt::{Display, Formatter};

/// A recognized command-line option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatOption {
    /// `-n`, `--number`
    Number,
    /// `-b`, `--number-nonblank`
    NumberNonBlank,
    /// `-h`, `--help`
    Help,
}

/// Every recognized token paired with the option it names.
pub const VOCABULARY: [(&str, CatOption); 6] = [
    ("-b", CatOption::NumberNonBlank),
    ("--number-nonblank", CatOption::NumberNonBlank),
    ("-n", CatOption::Number),
    ("--number", CatOption::Number),
    ("-h", CatOption::Help),
    ("--help", CatOption::Help),
];

impl CatOption {
    /// Looks up a token by exact match. Returns `None` for anything outside
    /// the vocabulary.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        VOCABULARY
            .iter()
            .find(|(name, _)| *name == token)
            .map(|(_, option)| *option)
    }

    #[must_use]
    pub fn short_flag(self) -> &'static str {
        match self {
            CatOption::Number => "-n",
            CatOption::NumberNonBlank => "-b",
            CatOption::Help => "-h",
        }
    }
}

impl Display for CatOption {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.short_flag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_and_long_forms() {
        assert_eq!(CatOption::parse("-n"), Some(CatOption::Number));
        assert_eq!(CatOption::parse("--number"), Some(CatOption::Number));
        assert_eq!(CatOption::parse("-b"), Some(CatOption::NumberNonBlank));
        assert_eq!(
            CatOption::parse("--number-nonblank"),
            Some(CatOption::NumberNonBlank)
        );
        assert_eq!(CatOption::parse("-h"), Some(CatOption::Help));
        assert_eq!(CatOption::parse("--help"), Some(CatOption::Help));
    }

    #[test]
    fn test_parse_rejects_near_misses() {
        for token in ["-x", "-", "--", "-nb", "--Number", "--num", "n", "-h "] {
            assert_eq!(CatOption::parse(token), None, "token {token:?}");
        }
    }

    #[test]
    fn test_display_uses_short_flag() {
        assert_eq!(CatOption::NumberNonBlank.to_string(), "-b");
    }
}
