//! Developer - Writes the code, paid by seniority

use std::collections::BTreeSet;

use super::compensation::Compensation;

/// How many projects a developer may be on at once
pub const DEVELOPER_MAX_PROJECTS: usize = 3;

static KNOWN_LEVELS: [SeniorityLevel; 3] = [
    SeniorityLevel::Junior,
    SeniorityLevel::SemiSenior,
    SeniorityLevel::Senior,
];

/// Seniority of a developer
///
/// Parsing never fails: text that is not one of the three known levels
/// is kept as `Unrecognized` and earns no bonus.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SeniorityLevel {
    Junior,
    SemiSenior,
    Senior,
    Unrecognized(String),
}

impl SeniorityLevel {
    /// Exact, case-sensitive match on the level name
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Junior" => SeniorityLevel::Junior,
            "SemiSenior" => SeniorityLevel::SemiSenior,
            "Senior" => SeniorityLevel::Senior,
            other => SeniorityLevel::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SeniorityLevel::Junior => "Junior",
            SeniorityLevel::SemiSenior => "SemiSenior",
            SeniorityLevel::Senior => "Senior",
            SeniorityLevel::Unrecognized(raw) => raw,
        }
    }

    /// Bonus attached to this level
    pub fn bonus(&self) -> f64 {
        match self {
            SeniorityLevel::Junior => 200.0,
            SeniorityLevel::SemiSenior => 500.0,
            SeniorityLevel::Senior => 1000.0,
            SeniorityLevel::Unrecognized(_) => 0.0,
        }
    }

    /// The three levels the pay table knows about
    pub fn known() -> &'static [SeniorityLevel] {
        &KNOWN_LEVELS
    }
}

impl From<&str> for SeniorityLevel {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl core::fmt::Display for SeniorityLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Developer-specific data
#[derive(Debug, Clone, PartialEq)]
pub struct Developer {
    /// Programming languages (deduplicated, sorted)
    languages: BTreeSet<String>,
    level: SeniorityLevel,
}

impl Developer {
    pub fn new(
        languages: impl IntoIterator<Item = impl Into<String>>,
        level: SeniorityLevel,
    ) -> Self {
        Self {
            languages: languages.into_iter().map(|l| l.into()).collect(),
            level,
        }
    }

    pub fn languages(&self) -> &BTreeSet<String> {
        &self.languages
    }

    pub fn level(&self) -> &SeniorityLevel {
        &self.level
    }

    pub fn knows(&self, language: &str) -> bool {
        self.languages.contains(language)
    }
}

impl Compensation for Developer {
    fn bonus(&self) -> f64 {
        self.level.bonus()
    }

    fn max_projects(&self) -> usize {
        DEVELOPER_MAX_PROJECTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn developer(level: &str) -> Developer {
        Developer::new(["Rust"], SeniorityLevel::parse(level))
    }

    #[test]
    fn test_bonus_by_level() {
        assert_eq!(developer("Junior").bonus(), 200.0);
        assert_eq!(developer("SemiSenior").bonus(), 500.0);
        assert_eq!(developer("Senior").bonus(), 1000.0);
    }

    #[test]
    fn test_unrecognized_level_earns_nothing() {
        assert_eq!(developer("Principal").bonus(), 0.0);
        assert_eq!(developer("").bonus(), 0.0);
        // Case matters
        assert_eq!(developer("senior").bonus(), 0.0);
    }

    #[test]
    fn test_unrecognized_level_keeps_text() {
        let level = SeniorityLevel::parse("Staff");
        assert_eq!(level, SeniorityLevel::Unrecognized("Staff".to_string()));
        assert_eq!(level.to_string(), "Staff");
    }

    #[test]
    fn test_languages_are_a_set() {
        let dev = Developer::new(["Rust", "Go", "Rust"], SeniorityLevel::Junior);
        assert_eq!(dev.languages().len(), 2);
        assert!(dev.knows("Go"));
        assert!(!dev.knows("Python"));
    }

    #[test]
    fn test_max_projects() {
        assert_eq!(developer("Junior").max_projects(), 3);
    }

    #[test]
    fn test_known_levels_round_trip_through_parse() {
        for level in SeniorityLevel::known() {
            assert_eq!(&SeniorityLevel::parse(level.as_str()), level);
        }
    }
}
