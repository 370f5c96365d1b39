use crate::error::SchedulerError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How "senior secondary" grouping (option blocks split by whether a class
/// is in the senior grades) decides membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeniorSecondaryRule {
    /// A class counts as senior if its school's name contains "secondary"
    /// (case-insensitive) AND its grade string starts with one of
    /// `Config::senior_grade_prefixes`.
    SubstringAndGradePrefix,
    /// Never split option groups by seniority; every member of an
    /// `option_group` is taught together regardless of grade.
    Never,
}

impl Default for SeniorSecondaryRule {
    fn default() -> Self {
        SeniorSecondaryRule::SubstringAndGradePrefix
    }
}

/// Run-wide knobs that the solver and unit builder consult. Loaded from an
/// optional `config.toml` next to the input data; falls back to defaults
/// when absent, matching the "never fail on a missing config" posture of
/// most CLI tools in this stack.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub senior_secondary_rule: SeniorSecondaryRule,
    /// Grade prefixes (e.g. "Grade 1", "A-Level" — matching "Grade 10",
    /// "Grade 12", "A-Level 1", etc.) counted as senior when
    /// `senior_secondary_rule` is `SubstringAndGradePrefix`.
    pub senior_grade_prefixes: Vec<String>,
    /// Whether an assignment with an even `periods_per_week` is built as
    /// Double units by default, rather than all Singles.
    pub auto_double: bool,
    /// Whether to inject a standing Friday "Sports" locked session across
    /// every school's last period when generating, if none already exists.
    pub auto_inject_friday_sports: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            senior_secondary_rule: SeniorSecondaryRule::default(),
            senior_grade_prefixes: vec!["Grade 1".to_string(), "A-Level".to_string()],
            auto_double: true,
            auto_inject_friday_sports: false,
        }
    }
}

impl Config {
    /// Loads `path` if it exists; returns the default config if it doesn't.
    /// A present-but-malformed file is a hard error — silently falling back
    /// would hide a typo in a file the user deliberately wrote.
    pub fn load_or_default(path: &Path) -> crate::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|source| SchedulerError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&raw)
            .map_err(|e| {
                SchedulerError::ConfigParse {
                    file: path.display().to_string(),
                    message: e.to_string(),
                }
                .into()
            })
    }

    /// Whether `grade` counts as senior secondary under the active rule.
    /// `school_is_secondary` is `School::name_suggests_secondary()`.
    pub fn is_senior_secondary(&self, school_is_secondary: bool, grade: &str) -> bool {
        match self.senior_secondary_rule {
            SeniorSecondaryRule::Never => false,
            SeniorSecondaryRule::SubstringAndGradePrefix => {
                school_is_secondary
                    && self.senior_grade_prefixes.iter().any(|p| grade.starts_with(p.as_str()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_treats_grade_12_at_secondary_school_as_senior() {
        let config = Config::default();
        assert!(config.is_senior_secondary(true, "Grade 12"));
        assert!(!config.is_senior_secondary(true, "Grade 9"));
        assert!(!config.is_senior_secondary(false, "Grade 12"));
    }

    #[test]
    fn never_rule_disables_senior_split() {
        let mut config = Config::default();
        config.senior_secondary_rule = SeniorSecondaryRule::Never;
        assert!(!config.is_senior_secondary(true, "Grade 12"));
    }

    #[test]
    fn missing_file_yields_default() {
        let config = Config::load_or_default(Path::new("/nonexistent/config.toml")).unwrap();
        assert!(config.auto_double);
    }
}
